// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use tracing::trace;

use crate::model::{Bounds, DiagramIr, EdgeEnds, Point};

use super::LayoutConfig;

/// Vertical extent of one laid-out message.
#[derive(Debug, Clone, Copy)]
struct MessageRow {
    y: f64,
    left: f64,
    right: f64,
}

/// Time-axis layout for interaction diagrams.
///
/// Participants are placed left to right. Every message between known participants becomes a
/// horizontal point-addressed edge one slot below the previous one. Messages that are already
/// point-addressed keep their row, unless both ends sit at `y = 0`, in which case they take the
/// next slot. Blocks are framed around the messages they cover.
pub fn layout_sequence(ir: &mut DiagramIr, config: &LayoutConfig) {
    if ir.participants().next().is_none() {
        return;
    }

    let mut centers = BTreeMap::<String, f64>::new();
    for (idx, participant) in ir.participants_mut().enumerate() {
        *participant.bounds_mut() = Bounds::new(
            config.origin_x + idx as f64 * config.participant_spacing,
            config.participant_top,
            config.participant_width,
            config.participant_height,
        );
        centers.insert(participant.id().to_owned(), participant.bounds().center_x());
    }

    let lifeline_top = config.participant_top + config.participant_height;
    let mut next_y = lifeline_top + config.first_message_offset;
    let mut rows = Vec::<Option<MessageRow>>::with_capacity(ir.edges().len());

    for edge in ir.edges_mut() {
        let row = match edge.ends().clone() {
            EdgeEnds::Points { source, target } if source.y == 0.0 && target.y == 0.0 => {
                let y = next_y;
                next_y += config.message_spacing;
                edge.set_ends(EdgeEnds::Points {
                    source: Point::new(source.x, y),
                    target: Point::new(target.x, y),
                });
                Some(MessageRow { y, left: source.x.min(target.x), right: source.x.max(target.x) })
            }
            EdgeEnds::Points { source, target } => {
                let y = source.y.max(target.y);
                next_y = next_y.max(y + config.message_spacing);
                Some(MessageRow { y, left: source.x.min(target.x), right: source.x.max(target.x) })
            }
            EdgeEnds::Cells { source, target } => {
                match (centers.get(&source), centers.get(&target)) {
                    (Some(&from), Some(&to)) => {
                        let y = next_y;
                        next_y += config.message_spacing;
                        edge.set_ends(EdgeEnds::Points {
                            source: Point::new(from, y),
                            target: Point::new(to, y),
                        });
                        Some(MessageRow { y, left: from.min(to), right: from.max(to) })
                    }
                    _ => {
                        trace!(edge = edge.id(), "message references an unknown participant");
                        None
                    }
                }
            }
        };
        rows.push(row);
    }

    let lifeline_end = next_y + config.lifeline_tail;
    for participant in ir.participants_mut() {
        participant.set_lifeline_end(lifeline_end);
    }

    let lane_left = config.origin_x;
    let lane_right = ir.participants().map(|p| p.bounds().right()).fold(lane_left, f64::max);
    let half_width = config.participant_width / 2.0;

    for group in ir.groups_mut() {
        let covered = match group.span() {
            Some(span) => rows[span.first.min(rows.len())..(span.last + 1).min(rows.len())]
                .iter()
                .flatten()
                .copied()
                .collect::<Vec<_>>(),
            None => Vec::new(),
        };

        let bounds = match (covered.first(), covered.last()) {
            (Some(first), Some(last)) => {
                let left =
                    covered.iter().map(|row| row.left).fold(f64::INFINITY, f64::min) - half_width;
                let right =
                    covered.iter().map(|row| row.right).fold(f64::NEG_INFINITY, f64::max) + half_width;
                let top = first.y - config.group_label_band;
                let bottom = last.y + config.block_padding;
                Bounds::new(left, top, right - left, bottom - top)
            }
            _ => Bounds::new(
                lane_left,
                lifeline_top,
                lane_right - lane_left,
                config.group_label_band + config.block_padding,
            ),
        };
        *group.bounds_mut() = bounds;
    }
}
