// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::model::{DiagramIr, DiagramKind, Edge, EdgeKind, Group, GroupKind, Node, NodeShape, SemanticRole};

use super::{keyword_rest, meaningful_lines, split_args};

/// Line break marker understood by the editor inside HTML labels.
pub(crate) const LABEL_BREAK: &str = "&#xa;";

static STYLE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Update(?:Rel|Element|Boundary|Layout)(?:Style|Config)\s*\(").expect("valid style directive regex")
});

static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:Boundary|System_Boundary|Container_Boundary|Enterprise_Boundary)\s*\((.+)\)\s*\{$",
    )
    .expect("valid boundary regex")
});

static ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^((?:Person|System|Container|Component)(?:Db|Queue)?(?:_Ext)?)\s*\((.+)\)$")
        .expect("valid element regex")
});

static RELATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^((?:Bi)?Rel(?:_\w+)?)\s*\((.+)\)$").expect("valid relation regex")
});

fn header_kind(line: &str) -> Option<DiagramKind> {
    match line.to_ascii_lowercase().as_str() {
        "c4context" | "c4dynamic" | "c4deployment" => Some(DiagramKind::C4Context),
        "c4container" => Some(DiagramKind::C4Container),
        "c4component" => Some(DiagramKind::C4Component),
        _ => None,
    }
}

/// Macro arguments without `$name=value` keyword arguments.
fn positional_args(raw: &str) -> Vec<String> {
    split_args(raw).into_iter().filter(|arg| !arg.starts_with('$')).collect()
}

fn element_shape_and_role(macro_name: &str) -> (NodeShape, SemanticRole) {
    let lower = macro_name.to_ascii_lowercase();
    if lower.contains("person") {
        (NodeShape::Person, SemanticRole::Person)
    } else if lower.contains("db") {
        (NodeShape::Cylinder, SemanticRole::Database)
    } else if lower.contains("queue") {
        (NodeShape::RoundedRect, SemanticRole::Queue)
    } else if lower.contains("ext") {
        (NodeShape::RoundedRect, SemanticRole::External)
    } else {
        (NodeShape::RoundedRect, SemanticRole::Compute)
    }
}

fn element_label(label: &str, technology: &str, description: &str) -> String {
    let mut parts = vec![format!("<b>{label}</b>")];
    if !technology.is_empty() {
        parts.push(format!("[{technology}]"));
    }
    if !description.is_empty() {
        parts.push(description.to_owned());
    }
    parts.join(LABEL_BREAK)
}

fn element_node(macro_name: &str, args: &[String]) -> Node {
    let arg = |idx: usize| args.get(idx).map(String::as_str).unwrap_or_default();
    let alias = args.first().map(String::as_str).unwrap_or("unknown");
    let label = args.get(1).map(String::as_str).unwrap_or(alias);
    let (shape, role) = element_shape_and_role(macro_name);

    Node::new_with(alias, element_label(label, arg(2), arg(3)), shape).with_role(role)
}

/// Parse a Mermaid C4 diagram (`C4Context`, `C4Container`, `C4Component`; `C4Dynamic` and
/// `C4Deployment` are laid out as context diagrams).
///
/// Elements take `(alias, label, technology, description)`; relations take
/// `(from, to, label, technology)`. `*_Back` relations are stored with their ends swapped.
/// Boundaries may nest; each element joins the innermost open boundary.
pub fn parse_context(input: &str) -> DiagramIr {
    let mut lines = meaningful_lines(input).peekable();
    let kind = match lines.peek().and_then(|(_, line)| header_kind(line)) {
        Some(kind) => {
            lines.next();
            kind
        }
        None => DiagramKind::C4Context,
    };
    let mut ir = DiagramIr::new(kind);

    let mut boundary_stack = Vec::<String>::new();
    let mut next_relation = 0usize;

    for (line_no, line) in lines {
        if STYLE_DIRECTIVE.is_match(line) {
            continue;
        }

        if let Some(title) = keyword_rest(line, "title") {
            ir.set_title(Some(title));
            continue;
        }

        if let Some(caps) = BOUNDARY.captures(line) {
            let args = positional_args(&caps[1]);
            let Some(alias) = args.first().filter(|alias| !alias.is_empty()) else {
                trace!(line_no, line, "skipping boundary without alias");
                continue;
            };
            let label = args.get(1).unwrap_or(alias);
            let id = format!("boundary_{alias}");
            ir.push_group(
                Group::new(id.clone(), label.as_str(), GroupKind::Info)
                    .with_parent(boundary_stack.last()),
            );
            boundary_stack.push(id);
            continue;
        }

        if line == "}" {
            boundary_stack.pop();
            continue;
        }

        if let Some(caps) = ELEMENT.captures(line) {
            let node = element_node(&caps[1], &positional_args(&caps[2]))
                .with_group(boundary_stack.last());
            trace!(line_no, id = node.id(), "c4 element");
            ir.insert_node(node);
            continue;
        }

        if let Some(caps) = RELATION.captures(line) {
            let args = positional_args(&caps[2]);
            let [source, target, rest @ ..] = args.as_slice() else {
                trace!(line_no, line, "skipping relation with fewer than two endpoints");
                continue;
            };
            let mut label = rest.first().cloned().unwrap_or_default();
            if let Some(technology) = rest.get(1).filter(|t| !t.is_empty()) {
                label = format!("{label} [{technology}]");
            }
            let (source, target) = if caps[1].to_ascii_lowercase().contains("back") {
                (target, source)
            } else {
                (source, target)
            };
            ir.push_edge(
                Edge::new(format!("rel_{next_relation}"), source.as_str(), target.as_str(), EdgeKind::Sync)
                    .with_label(label.trim()),
            );
            next_relation += 1;
            continue;
        }

        trace!(line_no, line, "skipping unrecognised c4 line");
    }

    debug!(
        kind = %ir.kind(),
        elements = ir.node_count(),
        relations = ir.edges().len(),
        boundaries = ir.groups().len(),
        "parsed c4 diagram"
    );
    ir
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::parse_context;
    use crate::model::{DiagramKind, EdgeKind, GroupKind, Node, NodeShape, SemanticRole};

    #[rstest]
    #[case("C4Context", DiagramKind::C4Context)]
    #[case("C4Container", DiagramKind::C4Container)]
    #[case("C4Component", DiagramKind::C4Component)]
    #[case("C4Dynamic", DiagramKind::C4Context)]
    #[case("C4Deployment", DiagramKind::C4Context)]
    fn header_selects_kind(#[case] header: &str, #[case] kind: DiagramKind) {
        let ir = parse_context(&format!("{header}\nSystem(s, \"S\")"));
        assert_eq!(ir.kind(), kind);
        assert_eq!(ir.node_count(), 1);
    }

    #[test]
    fn empty_input_is_an_empty_context_diagram() {
        let ir = parse_context("");
        assert_eq!(ir.kind(), DiagramKind::C4Context);
        assert_eq!(ir.node_count(), 0);
    }

    #[rstest]
    #[case("Person(u, \"User\")", NodeShape::Person, SemanticRole::Person)]
    #[case("Person_Ext(u, \"User\")", NodeShape::Person, SemanticRole::Person)]
    #[case("System(u, \"S\")", NodeShape::RoundedRect, SemanticRole::Compute)]
    #[case("System_Ext(u, \"S\")", NodeShape::RoundedRect, SemanticRole::External)]
    #[case("SystemDb(u, \"S\")", NodeShape::Cylinder, SemanticRole::Database)]
    #[case("ContainerDb(u, \"S\", \"Postgres\")", NodeShape::Cylinder, SemanticRole::Database)]
    #[case("ContainerQueue(u, \"S\")", NodeShape::RoundedRect, SemanticRole::Queue)]
    #[case("Component(u, \"S\")", NodeShape::RoundedRect, SemanticRole::Compute)]
    fn macro_names_select_shape_and_role(
        #[case] line: &str,
        #[case] shape: NodeShape,
        #[case] role: SemanticRole,
    ) {
        let ir = parse_context(&format!("C4Context\n{line}"));
        let node = ir.node("u").expect("element parsed");
        assert_eq!(node.shape(), shape);
        assert_eq!(node.role(), Some(role));
    }

    #[test]
    fn labels_join_name_technology_and_description() {
        let ir = parse_context(
            "C4Container\n\
             Container(api, \"API\", \"Rust\", \"Serves, requests\")\n\
             System(sys, \"My System, v2\")\n\
             Person(p)",
        );
        assert_eq!(ir.node("api").map(Node::label), Some("<b>API</b>&#xa;[Rust]&#xa;Serves, requests"));
        assert_eq!(ir.node("sys").map(Node::label), Some("<b>My System, v2</b>"));
        assert_eq!(ir.node("p").map(Node::label), Some("<b>p</b>"));
    }

    #[test]
    fn keyword_arguments_are_ignored() {
        let ir = parse_context("C4Context\nSystem(s, \"S\", $tags=\"v1\", \"Tech\")");
        assert_eq!(ir.node("s").map(Node::label), Some("<b>S</b>&#xa;[Tech]"));
    }

    #[test]
    fn relations_carry_technology_and_back_swaps_ends() {
        let input = "C4Context\n\
                     System(a, \"A\")\n\
                     System(b, \"B\")\n\
                     Rel(a, b, \"Sends data\", \"HTTPS/JSON\")\n\
                     Rel_Back(a, b, \"Replies\")\n\
                     BiRel(a, b)\n\
                     Rel(a)";
        let ir = parse_context(input);

        let edges = ir
            .edges()
            .iter()
            .map(|e| (e.id(), e.cell_ends(), e.label(), e.kind()))
            .collect::<Vec<_>>();
        assert_eq!(
            edges,
            vec![
                ("rel_0", Some(("a", "b")), "Sends data [HTTPS/JSON]", EdgeKind::Sync),
                ("rel_1", Some(("b", "a")), "Replies", EdgeKind::Sync),
                ("rel_2", Some(("a", "b")), "", EdgeKind::Sync),
            ]
        );
    }

    #[test]
    fn boundaries_group_elements_and_nest() {
        let input = "C4Container\n\
                     Person(user, \"User\")\n\
                     Enterprise_Boundary(ent, \"Corp\") {\n\
                       System_Boundary(sb, \"My System\") {\n\
                         Container(api, \"API\", \"Python\")\n\
                       }\n\
                       ContainerDb(db, \"DB\", \"Postgres\")\n\
                     }\n\
                     Rel(api, db, \"Uses\")";
        let ir = parse_context(input);

        let groups = ir
            .groups()
            .iter()
            .map(|g| (g.id(), g.label(), g.kind(), g.parent()))
            .collect::<Vec<_>>();
        assert_eq!(
            groups,
            vec![
                ("boundary_ent", "Corp", GroupKind::Info, None),
                ("boundary_sb", "My System", GroupKind::Info, Some("boundary_ent")),
            ]
        );
        assert_eq!(ir.node("user").and_then(Node::group), None);
        assert_eq!(ir.node("api").and_then(Node::group), Some("boundary_sb"));
        assert_eq!(ir.node("db").and_then(Node::group), Some("boundary_ent"));
    }

    #[test]
    fn style_directives_are_skipped_and_title_is_kept() {
        let input = "C4Context\n\
                     title System Context\n\
                     System(a, \"A\")\n\
                     UpdateRelStyle(a, b, $textColor=\"red\")\n\
                     UpdateLayoutConfig($c4ShapeInRow=\"3\")";
        let ir = parse_context(input);
        assert_eq!(ir.title(), Some("System Context"));
        assert_eq!(ir.node_count(), 1);
        assert!(ir.edges().is_empty());
    }

    #[test]
    fn redeclared_alias_replaces_in_place() {
        let ir = parse_context("C4Context\nSystem(a, \"First\")\nSystem(b, \"B\")\nSystemDb(a, \"Second\")");
        let ids = ir.nodes().map(Node::id).collect::<Vec<_>>();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(ir.node("a").map(Node::shape), Some(NodeShape::Cylinder));
    }
}
