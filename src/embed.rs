// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Embedding generated markup in a web page.
//!
//! The viewer reads its configuration, including the diagram markup, from a JSON object stored in
//! a single-quoted `data-mxgraph` attribute. The markup therefore goes through two escaping
//! steps, in this order:
//!
//! 1. [`json_escape`]: `\` then `"`, so it can sit inside a JSON string;
//! 2. [`html_entity_encode`]: `&` first, then `<`, `>`, `'`, so it can sit inside the attribute.
//!
//! `"` is never turned into `&quot;`: the viewer parses the attribute as JSON, and the entity
//! would reach it as literal text.

use serde::{Deserialize, Serialize};

/// Escapes backslashes, then double quotes, for a JSON string body.
pub fn json_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escapes `&`, `<`, `>`, and `'` for a single-quoted HTML attribute. `&` goes first.
pub fn html_entity_encode(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&#39;")
}

/// Both escaping steps, in order.
pub fn encode(markup: &str) -> String {
    html_entity_encode(&json_escape(markup))
}

/// Viewer flags serialized ahead of the `"xml"` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    pub nav: bool,
    pub resize: bool,
    pub fit: bool,
    pub center: bool,
    pub toolbar: String,
    pub page: u32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            nav: true,
            resize: true,
            fit: true,
            center: true,
            toolbar: "zoom layers lightbox".to_owned(),
            page: 0,
        }
    }
}

/// Wraps already [`encode`]d markup in the viewer's `<div class="mxgraph">` element.
pub fn wrap_div(encoded: &str, options: &ViewerOptions) -> String {
    let json = serde_json::to_string(options).expect("viewer options always serialize");
    let head = html_entity_encode(json.strip_suffix('}').unwrap_or(&json));
    format!(r#"<div class="mxgraph" data-mxgraph='{head},"xml":"{encoded}"}}'></div>"#)
}

/// Encodes `markup` and wraps it in the viewer element.
pub fn embed(markup: &str, options: &ViewerOptions) -> String {
    wrap_div(&encode(markup), options)
}

/// Puts a viewer element inside `<figure class="drawio-diagram">`, adding a caption when one is
/// given. The caption is treated as text and escaped.
pub fn figure(div: &str, caption: &str) -> String {
    let mut out = String::from("<figure class=\"drawio-diagram\">\n");
    out.push_str("  ");
    out.push_str(div);
    out.push('\n');
    if !caption.is_empty() {
        out.push_str("  <figcaption>");
        out.push_str(&html_entity_encode(caption));
        out.push_str("</figcaption>\n");
    }
    out.push_str("</figure>");
    out
}
