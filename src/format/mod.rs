// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram text parsing.
//!
//! [`detect_kind`] classifies the input; [`Dialect::parse`] runs the matching Mermaid-ish parser.

pub mod detect;
pub mod mermaid;

pub use detect::detect_kind;

use crate::model::{DiagramIr, Dialect};

impl Dialect {
    /// Parse `input` with this dialect's parser. Total: unknown lines are skipped.
    pub fn parse(self, input: &str) -> DiagramIr {
        match self {
            Self::Flowchart => mermaid::parse_flowchart(input),
            Self::Sequence => mermaid::parse_sequence_diagram(input),
            Self::Context => mermaid::parse_context(input),
            Self::Entity => mermaid::parse_entity_relationship(input),
            Self::Generic => mermaid::parse_generic(input),
        }
    }
}

/// Detects the diagram kind of `input` and parses it.
pub fn parse_diagram(input: &str) -> DiagramIr {
    detect_kind(input).dialect().parse(input)
}
