// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::{debug, trace};

use crate::model::{
    DiagramIr, DiagramKind, Edge, EdgeKind, Group, GroupKind, LayoutDirection, Node, NodeShape,
};

use super::ident::split_ident;
use super::{keyword_rest, meaningful_lines, unquote};

/// Node delimiter pairs in match priority order. The first opener whose closer also occurs wins.
const SHAPE_DELIMITERS: &[(&str, &str, NodeShape)] = &[
    ("[[", "]]", NodeShape::Rect),
    ("[(", ")]", NodeShape::Cylinder),
    ("[/", "/]", NodeShape::Parallelogram),
    ("[\\", "\\]", NodeShape::Parallelogram),
    ("([", "])", NodeShape::Stadium),
    ("((", "))", NodeShape::Circle),
    ("{{", "}}", NodeShape::Hexagon),
    ("{", "}", NodeShape::Diamond),
    ("[", "]", NodeShape::Rect),
    ("(", ")", NodeShape::RoundedRect),
    (">", "]", NodeShape::Rect),
];

const DIRECTIVE_KEYWORDS: &[&str] =
    &["style", "classDef", "class", "click", "linkStyle", "direction", "link", "links"];

#[derive(Debug, Clone, PartialEq)]
enum Token<'a> {
    Node { id: &'a str, shape: Option<(NodeShape, &'a str)> },
    Link { kind: EdgeKind, label: Option<&'a str> },
}

fn is_link_char(ch: char) -> bool {
    matches!(ch, '-' | '=' | '.' | '>' | '<')
}

/// Classifies a complete arrow or line operator.
fn link_kind(op: &str) -> Option<EdgeKind> {
    let op = op.trim_start_matches('<');
    let strokes = op.chars().filter(|ch| matches!(ch, '-' | '=' | '.')).count();
    let arrow = op.ends_with('>');
    if strokes < if arrow { 2 } else { 3 } {
        return None;
    }

    let kind = if op.contains('=') {
        EdgeKind::DataFlow
    } else if op.contains('.') {
        if arrow {
            EdgeKind::Async
        } else {
            EdgeKind::Dependency
        }
    } else if arrow {
        EdgeKind::Sync
    } else {
        EdgeKind::Dependency
    };
    Some(kind)
}

fn split_shape(s: &str) -> Option<(NodeShape, &str, &str)> {
    SHAPE_DELIMITERS.iter().find_map(|&(open, close, shape)| {
        let inner = s.strip_prefix(open)?;
        let end = inner.find(close)?;
        Some((shape, &inner[..end], &inner[end + close.len()..]))
    })
}

/// Splits a link operator (with its optional inline label) off the front of `s`.
fn split_link(s: &str) -> Option<(EdgeKind, Option<&str>, &str)> {
    let run_len = s.find(|ch: char| !is_link_char(ch)).unwrap_or(s.len());
    let (run, after) = s.split_at(run_len);

    if let Some(kind) = link_kind(run) {
        if let Some(inner) = after.trim_start().strip_prefix('|') {
            if let Some(end) = inner.find('|') {
                return Some((kind, Some(inner[..end].trim()), &inner[end + 1..]));
            }
        }
        return Some((kind, None, after));
    }

    let (close, kind) = match run {
        "--" => ("-->", EdgeKind::Sync),
        "-." => (".->", EdgeKind::Async),
        "==" => ("==>", EdgeKind::DataFlow),
        _ => return None,
    };
    let end = after.find(close)?;
    let label = after[..end].trim_end_matches(is_link_char).trim();
    Some((kind, Some(label), &after[end + close.len()..]))
}

fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = line;

    while let Some(ch) = rest.chars().next() {
        if ch.is_whitespace() {
            rest = &rest[ch.len_utf8()..];
            continue;
        }
        if let Some((id, after)) = split_ident(rest) {
            rest = match split_shape(after) {
                Some((shape, label, after)) => {
                    tokens.push(Token::Node { id, shape: Some((shape, label)) });
                    after
                }
                None => {
                    tokens.push(Token::Node { id, shape: None });
                    after
                }
            };
            continue;
        }
        if let Some((kind, label, after)) = split_link(rest) {
            tokens.push(Token::Link { kind, label });
            rest = after;
            continue;
        }
        rest = &rest[ch.len_utf8()..];
    }

    tokens
}

fn is_directive_line(trimmed: &str) -> bool {
    DIRECTIVE_KEYWORDS.iter().any(|keyword| keyword_rest(trimmed, keyword).is_some())
}

fn parse_header(trimmed: &str) -> Option<LayoutDirection> {
    let mut parts = trimmed.split_whitespace();
    let keyword = parts.next()?;
    if !keyword.eq_ignore_ascii_case("graph") && !keyword.eq_ignore_ascii_case("flowchart") {
        return None;
    }
    let direction = match parts.next().map(str::to_ascii_uppercase).as_deref() {
        Some("LR" | "RL") => LayoutDirection::LeftRight,
        _ => LayoutDirection::TopBottom,
    };
    Some(direction)
}

/// `subgraph id [Title]` takes the bracketed title; anything else is the title verbatim.
fn subgraph_title(rest: &str) -> &str {
    if let Some((_, bracketed)) = rest.split_once('[') {
        if let Some(title) = bracketed.strip_suffix(']') {
            return unquote(title);
        }
    }
    unquote(rest)
}

fn declare_node(ir: &mut DiagramIr, id: &str, shape: NodeShape, label: &str, group: Option<&str>) {
    let label = unquote(label);
    match ir.node_mut(id) {
        Some(node) => {
            node.set_label(label);
            node.set_shape(shape);
            if group.is_some() {
                node.set_group(group);
            }
        }
        None => {
            ir.insert_node(Node::new_with(id, label, shape).with_group(group));
        }
    }
}

fn ensure_node(ir: &mut DiagramIr, id: &str, group: Option<&str>) {
    if ir.node(id).is_none() {
        ir.insert_node(Node::new(id, id).with_group(group));
    }
}

/// Parse a Mermaid `graph` / `flowchart` diagram.
///
/// Recognised lines (after an optional `graph <dir>` header):
/// - node declarations `id<open>label<close>` with any of the delimiter pairs above
/// - edges `a --> b`, chainable (`a --> b --> c`), with `-->|label|` or `-- label -->` labels
/// - `subgraph <title>` / `end`, nestable
///
/// Styling directives are skipped. Bare identifiers that take part in no edge declare nothing.
pub fn parse_flowchart(input: &str) -> DiagramIr {
    let mut ir = DiagramIr::new(DiagramKind::Flowchart);
    let mut lines = meaningful_lines(input).peekable();

    if let Some(direction) = lines.peek().and_then(|(_, line)| parse_header(line)) {
        ir.set_direction(direction);
        lines.next();
    }

    let mut group_stack = Vec::<String>::new();
    let mut next_group = 1usize;
    let mut next_edge = 0usize;

    for (line_no, line) in lines {
        if let Some(rest) = keyword_rest(line, "subgraph") {
            let id = format!("group_{next_group}");
            next_group += 1;
            let group = Group::new(id.clone(), subgraph_title(rest), GroupKind::Success)
                .with_parent(group_stack.last());
            ir.push_group(group);
            group_stack.push(id);
            continue;
        }
        if line.eq_ignore_ascii_case("end") {
            group_stack.pop();
            continue;
        }
        if is_directive_line(line) {
            trace!(line_no, "skipping flowchart directive");
            continue;
        }

        let current_group = group_stack.last().map(String::as_str);
        let tokens = tokenize(line);

        let mut linked = vec![false; tokens.len()];
        let mut links = Vec::new();
        for (idx, window) in tokens.windows(3).enumerate() {
            if let [Token::Node { id: source, .. }, Token::Link { kind, label }, Token::Node { id: target, .. }] =
                window
            {
                linked[idx] = true;
                linked[idx + 2] = true;
                links.push((*source, *target, *kind, *label));
            }
        }

        for (idx, token) in tokens.iter().enumerate() {
            match token {
                Token::Node { id, shape: Some((shape, label)) } => {
                    declare_node(&mut ir, id, *shape, label, current_group);
                }
                Token::Node { id, shape: None } if linked[idx] => {
                    ensure_node(&mut ir, id, current_group);
                }
                _ => {}
            }
        }

        if tokens.is_empty() {
            trace!(line_no, line, "skipping unrecognised flowchart line");
        }

        for (source, target, kind, label) in links {
            let mut edge = Edge::new(format!("e{next_edge}"), source, target, kind);
            if let Some(label) = label {
                edge = edge.with_label(unquote(label));
            }
            next_edge += 1;
            ir.push_edge(edge);
        }
    }

    debug!(
        nodes = ir.node_count(),
        edges = ir.edges().len(),
        groups = ir.groups().len(),
        "parsed flowchart"
    );
    ir
}
