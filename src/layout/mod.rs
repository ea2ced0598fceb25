// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Geometry assignment.
//!
//! Graph-shaped dialects get a rank-based layered layout; interaction diagrams get a time axis.
//! Both mutate the IR in place and are idempotent.

pub mod layered;
pub mod sequence;

use serde::{Deserialize, Serialize};

use crate::model::{DiagramIr, Dialect};

pub use layered::{layout_layered, node_ranks};
pub use sequence::layout_sequence;

/// Spacing and sizing knobs for both layout strategies. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub origin_x: f64,
    pub origin_y: f64,
    /// Gap between neighbouring nodes across the flow.
    pub node_spacing_h: f64,
    /// Gap between neighbouring nodes along the flow.
    pub node_spacing_v: f64,
    pub group_padding: f64,
    /// Extra room above a group's members for its label.
    pub group_label_band: f64,
    /// Center every layer within the widest one.
    pub center_layers: bool,

    pub participant_width: f64,
    pub participant_height: f64,
    /// Distance between the left edges of neighbouring participants.
    pub participant_spacing: f64,
    pub participant_top: f64,
    /// Offset of the first message below the lifeline top.
    pub first_message_offset: f64,
    pub message_spacing: f64,
    /// How far lifelines run past the last message slot.
    pub lifeline_tail: f64,
    pub block_padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin_x: 50.0,
            origin_y: 50.0,
            node_spacing_h: 60.0,
            node_spacing_v: 60.0,
            group_padding: 40.0,
            group_label_band: 30.0,
            center_layers: true,
            participant_width: 140.0,
            participant_height: 50.0,
            participant_spacing: 200.0,
            participant_top: 30.0,
            first_message_offset: 40.0,
            message_spacing: 40.0,
            lifeline_tail: 40.0,
            block_padding: 20.0,
        }
    }
}

/// Lays out `ir` with the strategy of its dialect.
pub fn auto_layout(ir: &mut DiagramIr, config: &LayoutConfig) {
    match ir.kind().dialect() {
        Dialect::Sequence => layout_sequence(ir, config),
        Dialect::Flowchart | Dialect::Context | Dialect::Entity | Dialect::Generic => {
            layout_layered(ir, config)
        }
    }
}
