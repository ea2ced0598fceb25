// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, VecDeque};

use tracing::trace;

use crate::model::{Bounds, DiagramIr, LayoutDirection};

use super::LayoutConfig;

/// Rank of every node, in IR node order.
///
/// Kahn's algorithm over cell-addressed edges whose ends are both nodes. A successor's rank is
/// the maximum over its ranked predecessors plus one. Nodes never reached (cycles without an
/// entry point) fall back to rank 0.
pub fn node_ranks(ir: &DiagramIr) -> Vec<usize> {
    let index = ir.nodes().enumerate().map(|(idx, node)| (node.id(), idx)).collect::<BTreeMap<_, _>>();
    let node_count = index.len();

    let mut outgoing = vec![Vec::<usize>::new(); node_count];
    let mut indegree = vec![0usize; node_count];
    for edge in ir.edges() {
        let Some((source, target)) = edge.cell_ends() else {
            continue;
        };
        let (Some(&from), Some(&to)) = (index.get(source), index.get(target)) else {
            continue;
        };
        outgoing[from].push(to);
        indegree[to] += 1;
    }

    let mut ranks = vec![None::<usize>; node_count];
    let mut queue = (0..node_count).filter(|&idx| indegree[idx] == 0).collect::<VecDeque<_>>();
    while let Some(current) = queue.pop_front() {
        let rank = *ranks[current].get_or_insert(0);
        for &next in &outgoing[current] {
            ranks[next] = Some(ranks[next].map_or(rank + 1, |existing| existing.max(rank + 1)));
            indegree[next] -= 1;
            if indegree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    let unranked = ranks.iter().filter(|rank| rank.is_none()).count();
    if unranked > 0 {
        trace!(unranked, "nodes left unranked by a cycle; placing them at rank 0");
    }
    ranks.into_iter().map(Option::unwrap_or_default).collect()
}

/// Absolute bounds for every node, layer by layer.
fn place_layers(
    layers: &BTreeMap<usize, Vec<usize>>,
    sizes: &[(f64, f64)],
    direction: LayoutDirection,
    config: &LayoutConfig,
) -> Vec<Bounds> {
    let mut placed = sizes.iter().map(|&(width, height)| Bounds::sized(width, height)).collect::<Vec<_>>();

    // Extent of a layer across the flow.
    let extent = |members: &[usize]| -> f64 {
        let (sum, gap) = match direction {
            LayoutDirection::TopBottom => {
                (members.iter().map(|&idx| sizes[idx].0).sum::<f64>(), config.node_spacing_h)
            }
            LayoutDirection::LeftRight => {
                (members.iter().map(|&idx| sizes[idx].1).sum::<f64>(), config.node_spacing_v)
            }
        };
        sum + gap * members.len().saturating_sub(1) as f64
    };
    let widest = layers.values().map(|members| extent(members)).fold(0.0, f64::max);
    let lead = |members: &[usize]| {
        if config.center_layers {
            (widest - extent(members)) / 2.0
        } else {
            0.0
        }
    };

    match direction {
        LayoutDirection::TopBottom => {
            let mut y = config.origin_y;
            for members in layers.values() {
                let mut x = config.origin_x + lead(members);
                let mut row_height = 0.0f64;
                for &idx in members {
                    placed[idx].x = x;
                    placed[idx].y = y;
                    x += placed[idx].width + config.node_spacing_h;
                    row_height = row_height.max(placed[idx].height);
                }
                y += row_height + config.node_spacing_v;
            }
        }
        LayoutDirection::LeftRight => {
            let mut x = config.origin_x;
            for members in layers.values() {
                let mut y = config.origin_y + lead(members);
                let mut column_width = 0.0f64;
                for &idx in members {
                    placed[idx].x = x;
                    placed[idx].y = y;
                    y += placed[idx].height + config.node_spacing_v;
                    column_width = column_width.max(placed[idx].width);
                }
                x += column_width + config.node_spacing_h;
            }
        }
    }
    placed
}

/// Absolute frame of every non-empty group, keyed by group id.
///
/// Groups are visited in reverse declaration order so nested groups (always declared after
/// their parent) are framed before the groups that contain them.
fn group_frames(ir: &DiagramIr, placed: &[Bounds], config: &LayoutConfig) -> BTreeMap<String, Bounds> {
    let mut frames = BTreeMap::<String, Bounds>::new();
    let pad = config.group_padding;
    let band = config.group_label_band;

    for group in ir.groups().iter().rev() {
        let members = ir
            .nodes()
            .zip(placed)
            .filter(|(node, _)| node.group() == Some(group.id()))
            .map(|(_, bounds)| *bounds);
        let nested = ir
            .groups()
            .iter()
            .filter(|child| child.parent() == Some(group.id()))
            .filter_map(|child| frames.get(child.id()).copied());
        let Some(content) = members.chain(nested).reduce(|acc, next| acc.union(&next)) else {
            trace!(group = group.id(), "empty group keeps its default bounds");
            continue;
        };

        let frame = Bounds::new(
            content.x - pad,
            content.y - pad - band,
            content.width + 2.0 * pad,
            content.height + 2.0 * pad + band,
        );
        frames.insert(group.id().to_owned(), frame);
    }
    frames
}

/// Rank-based layered layout for flowchart, context, entity, and generic diagrams.
///
/// After placement every grouped node, and every nested group, is re-expressed relative to the
/// origin of the group that contains it.
pub fn layout_layered(ir: &mut DiagramIr, config: &LayoutConfig) {
    if ir.node_count() == 0 {
        return;
    }

    let ranks = node_ranks(ir);
    let mut layers = BTreeMap::<usize, Vec<usize>>::new();
    for (idx, &rank) in ranks.iter().enumerate() {
        layers.entry(rank).or_default().push(idx);
    }
    trace!(layers = layers.len(), "ranked nodes");

    let sizes = ir.nodes().map(|node| (node.bounds().width, node.bounds().height)).collect::<Vec<_>>();
    let placed = place_layers(&layers, &sizes, ir.direction(), config);
    let frames = group_frames(ir, &placed, config);

    for (node, mut bounds) in ir.nodes_mut().zip(placed) {
        if let Some(frame) = node.group().and_then(|group| frames.get(group)) {
            bounds.x -= frame.x;
            bounds.y -= frame.y;
        }
        *node.bounds_mut() = bounds;
    }
    for group in ir.groups_mut() {
        let Some(mut bounds) = frames.get(group.id()).copied() else {
            continue;
        };
        if let Some(parent) = group.parent().and_then(|parent| frames.get(parent)) {
            bounds.x -= parent.x;
            bounds.y -= parent.y;
        }
        *group.bounds_mut() = bounds;
    }
}
