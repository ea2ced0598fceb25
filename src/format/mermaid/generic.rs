// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::debug;

use crate::model::{DiagramIr, DiagramKind, Node, NodeShape};

use super::context::LABEL_BREAK;

pub const GENERIC_NODE_ID: &str = "generic_1";
pub const PREVIEW_CHARS: usize = 200;
const DEFAULT_TITLE: &str = "Diagram";
const NODE_WIDTH: f64 = 400.0;
const MIN_NODE_HEIGHT: f64 = 100.0;
const LINE_HEIGHT: f64 = 16.0;

/// Wraps unrecognised input in a single rectangle so the source text stays visible.
///
/// The first line becomes the title; the label is a preview of at most
/// [`PREVIEW_CHARS`] characters (plus `...` when cut).
pub fn parse_generic(input: &str) -> DiagramIr {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
    let trimmed = normalized.trim();
    let line_count = trimmed.lines().count();
    let title = trimmed.lines().next().map(str::trim).unwrap_or(DEFAULT_TITLE);

    let mut preview = match trimmed.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_owned(),
    };
    preview = preview.replace('\n', LABEL_BREAK);

    let height = (line_count as f64 * LINE_HEIGHT).max(MIN_NODE_HEIGHT);
    let node = Node::new_with(GENERIC_NODE_ID, preview, NodeShape::Rect).with_size(NODE_WIDTH, height);

    let mut ir = DiagramIr::new(DiagramKind::Generic);
    ir.set_title(Some(title));
    ir.insert_node(node);

    debug!(lines = line_count, "wrapped unrecognised diagram text");
    ir
}
