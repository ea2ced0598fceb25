// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::format::mermaid::entity::{ENTITY_HEADER_HEIGHT, FIELD_ROW_HEIGHT};
use crate::model::{Bounds, DiagramIr, StoreKind};
use crate::style;

use super::cell::{MxCell, MxGraphModel};
use super::graph::{push_edges, push_groups};
use super::ids::CellIds;

/// Entity-relationship generator.
///
/// Every entity is a swimlane container; its fields are stacked text rows parented to it, with
/// geometry relative to the container's top-left corner.
pub fn generate_entities(ir: &DiagramIr) -> MxGraphModel {
    let mut ids = CellIds::new(ir);
    let mut model = MxGraphModel::new();
    push_groups(&mut model, ir, &ids);

    for (idx, node) in ir.nodes().enumerate() {
        let style = node
            .style_override()
            .unwrap_or_else(|| style::store_style(node.store().unwrap_or(StoreKind::Relational)));
        let bounds = *node.bounds();
        let cell_id = ids.node_cells()[idx].clone();
        let parent = node.group().map(|group| ids.group(group));
        model.push(MxCell::vertex(cell_id.as_str(), node.label(), style, bounds).with_parent(parent));

        for (row_idx, field) in node.fields().iter().enumerate() {
            let row = Bounds::new(
                0.0,
                ENTITY_HEADER_HEIGHT + row_idx as f64 * FIELD_ROW_HEIGHT,
                bounds.width,
                FIELD_ROW_HEIGHT,
            );
            let row_id = ids.claim(&format!("{cell_id}_f{row_idx}"));
            model.push(
                MxCell::vertex(row_id, field.as_str(), style::ERD_FIELD, row).with_parent(Some(cell_id.as_str())),
            );
        }
    }

    push_edges(&mut model, ir, &mut ids);
    model
}
