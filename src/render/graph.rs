// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{DiagramIr, Edge, EdgeEnds, Point};
use crate::style;

use super::cell::{MxCell, MxGraphModel};
use super::ids::CellIds;

/// Suffix appended to a participant's cell id to name its lifeline cell.
pub const LIFELINE_SUFFIX: &str = "_lifeline";

pub(super) fn push_groups(model: &mut MxGraphModel, ir: &DiagramIr, ids: &CellIds) {
    for (group, cell_id) in ir.groups().iter().zip(ids.group_cells()) {
        let style = group.style_override().unwrap_or_else(|| style::group_kind_style(group.kind()));
        let parent = group.parent().map(|parent| ids.group(parent));
        model.push(MxCell::vertex(cell_id.as_str(), group.label(), style, *group.bounds()).with_parent(parent));
    }
}

pub(super) fn push_edges(model: &mut MxGraphModel, ir: &DiagramIr, ids: &mut CellIds) {
    for edge in ir.edges() {
        model.push(edge_cell(edge, ids));
    }
}

fn edge_cell(edge: &Edge, ids: &mut CellIds) -> MxCell {
    let style = edge.style_override().unwrap_or_else(|| style::edge_kind_style(edge.kind()));
    let id = ids.claim(edge.id());
    match edge.ends() {
        EdgeEnds::Cells { source, target } => {
            MxCell::edge(id, edge.label(), style, ids.vertex(source), ids.vertex(target))
        }
        EdgeEnds::Points { source, target } => {
            MxCell::point_edge(id, edge.label(), style, *source, *target)
        }
    }
}

/// Generator shared by flowchart, interaction, context, and generic diagrams.
///
/// Paint order is groups, nodes, participants, lifelines, then edges, so containers sit beneath
/// their contents and connectors above the shapes they join.
pub fn generate_graph(ir: &DiagramIr) -> MxGraphModel {
    let mut ids = CellIds::new(ir);
    let mut model = MxGraphModel::new();
    push_groups(&mut model, ir, &ids);

    for (node, cell_id) in ir.nodes().zip(ids.node_cells()) {
        let style = style::node_style(node.style_override(), node.role(), node.shape());
        let parent = node.group().map(|group| ids.group(group));
        model.push(MxCell::vertex(cell_id.as_str(), node.label(), style, *node.bounds()).with_parent(parent));
    }

    for (participant, cell_id) in ir.participants().zip(ids.participant_cells()) {
        model.push(MxCell::vertex(
            cell_id.as_str(),
            participant.label(),
            style::participant_style(participant.role()),
            *participant.bounds(),
        ));
    }

    for (idx, participant) in ir.participants().enumerate() {
        let wanted = format!("{}{LIFELINE_SUFFIX}", ids.participant_cells()[idx]);
        let lifeline_id = ids.claim(&wanted);
        let x = participant.bounds().center_x();
        model.push(MxCell::point_edge(
            lifeline_id,
            "",
            style::LIFELINE,
            Point::new(x, participant.lifeline_top()),
            Point::new(x, participant.lifeline_end()),
        ));
    }

    push_edges(&mut model, ir, &mut ids);
    model
}
