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

use crate::model::{
    DiagramIr, DiagramKind, Edge, EdgeKind, LayoutDirection, Node, NodeShape, StoreKind,
};

use super::ident::split_ident;
use super::meaningful_lines;

pub const ENTITY_WIDTH: f64 = 200.0;
pub const ENTITY_HEADER_HEIGHT: f64 = 26.0;
pub const FIELD_ROW_HEIGHT: f64 = 20.0;
/// Body height of an entity without fields.
pub const EMPTY_ENTITY_BODY: f64 = 40.0;

static FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(\S+)\s+(\S+)(?:\s+((?:PK|FK|SK|UK|GSI)(?:\s*,\s*(?:PK|FK|SK|UK|GSI))*))?(?:\s+"([^"]*)")?$"#,
    )
    .expect("valid entity field regex")
});

static RELATIONSHIP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^([A-Za-z_][A-Za-z0-9_]*)\s+([|o}]{1,2})(--|\.\.)([|o{]{1,2})\s+([A-Za-z_][A-Za-z0-9_]*)\s*:\s*"?([^"]*)"?$"#,
    )
    .expect("valid entity relationship regex")
});

/// Height of an entity box with `field_count` rows under its header.
pub fn entity_height(field_count: usize) -> f64 {
    ENTITY_HEADER_HEIGHT + (field_count as f64 * FIELD_ROW_HEIGHT).max(EMPTY_ENTITY_BODY)
}

fn cardinality_label(marker: &str) -> &str {
    match marker {
        "||" => "1",
        "|{" | "}|" => "*",
        "o{" | "}o" => "0..*",
        "|o" | "o|" => "0..1",
        other => other,
    }
}

fn entity_node(id: &str, fields: Vec<String>) -> Node {
    let mut node = Node::new_with(id, id, NodeShape::UmlClass)
        .with_size(ENTITY_WIDTH, entity_height(fields.len()));
    node.set_fields(fields);
    node.set_store(Some(StoreKind::Relational));
    node
}

/// `name: type [KEYS]  comment`
fn field_description(line: &str) -> Option<String> {
    let caps = FIELD.captures(line)?;
    let mut out = format!("{}: {}", &caps[2], &caps[1]);
    if let Some(keys) = caps.get(3) {
        let keys = keys.as_str().split(',').map(str::trim).collect::<Vec<_>>().join(", ");
        out.push_str(&format!(" [{keys}]"));
    }
    if let Some(comment) = caps.get(4).filter(|c| !c.as_str().is_empty()) {
        out.push_str("  ");
        out.push_str(comment.as_str());
    }
    Some(out)
}

/// `IDENT {`
fn entity_start(line: &str) -> Option<&str> {
    let (id, rest) = split_ident(line)?;
    (rest.trim() == "{").then_some(id)
}

struct OpenEntity<'a> {
    id: &'a str,
    fields: Vec<String>,
}

/// Parse a Mermaid `erDiagram`.
///
/// ```text
/// erDiagram
///     CUSTOMER {
///         int id PK
///         string email UK "login"
///     }
///     CUSTOMER ||--o{ ORDER : "places"
///     ORDER }o..|| COUPON : "uses"
/// ```
///
/// Entities referenced only by relationships are synthesised without fields. A later block for
/// the same entity replaces its fields but keeps its position. The diagram is laid out left to
/// right.
pub fn parse_entity_relationship(input: &str) -> DiagramIr {
    let mut ir = DiagramIr::new(DiagramKind::Erd);
    ir.set_direction(LayoutDirection::LeftRight);

    let mut lines = meaningful_lines(input).peekable();
    if lines.peek().is_some_and(|(_, line)| line.eq_ignore_ascii_case("erDiagram")) {
        lines.next();
    }

    let mut open: Option<OpenEntity<'_>> = None;
    let mut next_relationship = 0usize;

    for (line_no, line) in lines {
        if let Some(entity) = open.as_mut() {
            if line == "}" {
                let fields = std::mem::take(&mut entity.fields);
                ir.insert_node(entity_node(entity.id, fields));
                open = None;
            } else if let Some(field) = field_description(line) {
                entity.fields.push(field);
            } else {
                trace!(line_no, line, "skipping malformed entity field");
            }
            continue;
        }

        if let Some(id) = entity_start(line) {
            open = Some(OpenEntity { id, fields: Vec::new() });
            continue;
        }

        if let Some(caps) = RELATIONSHIP.captures(line) {
            let source = &caps[1];
            let target = &caps[5];
            for id in [source, target] {
                if ir.node(id).is_none() {
                    ir.insert_node(entity_node(id, Vec::new()));
                }
            }

            let kind = if &caps[3] == ".." { EdgeKind::Dependency } else { EdgeKind::Sync };
            let label = format!(
                "{}  {}  {}",
                cardinality_label(&caps[2]),
                caps[6].trim(),
                cardinality_label(&caps[4])
            );
            ir.push_edge(
                Edge::new(format!("rel_{next_relationship}"), source, target, kind).with_label(label),
            );
            next_relationship += 1;
            continue;
        }

        trace!(line_no, line, "skipping unrecognised entity diagram line");
    }

    if let Some(entity) = open {
        debug!(entity = entity.id, "closing unterminated entity block at end of input");
        ir.insert_node(entity_node(entity.id, entity.fields));
    }

    debug!(entities = ir.node_count(), relationships = ir.edges().len(), "parsed entity diagram");
    ir
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{entity_height, parse_entity_relationship};
    use crate::model::{EdgeKind, LayoutDirection, Node, NodeShape, StoreKind};

    #[test]
    fn single_entity_with_primary_key() {
        let ir = parse_entity_relationship("erDiagram\n USER {\n int id PK\n }");

        assert_eq!(ir.node_count(), 1);
        let user = ir.node("USER").expect("entity parsed");
        assert_eq!(user.shape(), NodeShape::UmlClass);
        assert_eq!(user.store(), Some(StoreKind::Relational));
        assert_eq!(user.fields(), ["id: int [PK]"]);
        assert_eq!(ir.direction(), LayoutDirection::LeftRight);
    }

    #[test]
    fn fields_carry_keys_and_comments() {
        let input = "erDiagram\n\
                     ORDER {\n\
                       string id PK \"order number\"\n\
                       int customer_id FK\n\
                       string ref PK, FK\n\
                       decimal total\n\
                       this line is not a field\n\
                     }";
        let ir = parse_entity_relationship(input);
        assert_eq!(
            ir.node("ORDER").map(Node::fields),
            Some(
                &[
                    "id: string [PK]  order number".to_owned(),
                    "customer_id: int [FK]".to_owned(),
                    "ref: string [PK, FK]".to_owned(),
                    "total: decimal".to_owned(),
                ][..]
            )
        );
    }

    #[rstest]
    #[case("A ||--|| B : \"is\"", "1  is  1")]
    #[case("A ||--o{ B : \"has\"", "1  has  0..*")]
    #[case("A }o--|| B : \"belongs\"", "0..*  belongs  1")]
    #[case("A |o--|{ B : rel", "0..1  rel  *")]
    #[case("A }|--o| B : \"x\"", "*  x  0..1")]
    fn relationship_labels_include_cardinality(#[case] line: &str, #[case] label: &str) {
        let ir = parse_entity_relationship(&format!("erDiagram\n{line}"));
        assert_eq!(ir.edges().len(), 1);
        assert_eq!(ir.edges()[0].label(), label);
        assert_eq!(ir.edges()[0].cell_ends(), Some(("A", "B")));
    }

    #[test]
    fn dotted_relationships_are_dependencies() {
        let ir = parse_entity_relationship("erDiagram\nA ||--o{ B : owns\nB }o..|| C : uses");
        let kinds = ir.edges().iter().map(|e| (e.id(), e.kind())).collect::<Vec<_>>();
        assert_eq!(kinds, vec![("rel_0", EdgeKind::Sync), ("rel_1", EdgeKind::Dependency)]);
    }

    #[test]
    fn referenced_entities_are_synthesised_and_later_blocks_fill_them() {
        let input = "erDiagram\n\
                     CUSTOMER ||--o{ ORDER : places\n\
                     ORDER {\n\
                       int id PK\n\
                     }";
        let ir = parse_entity_relationship(input);

        let ids = ir.nodes().map(Node::id).collect::<Vec<_>>();
        assert_eq!(ids, ["CUSTOMER", "ORDER"]);
        assert!(ir.node("CUSTOMER").is_some_and(|n| n.fields().is_empty()));
        assert_eq!(ir.node("ORDER").map(|n| n.fields().len()), Some(1));
    }

    #[test]
    fn entity_size_follows_field_count() {
        let ir = parse_entity_relationship("erDiagram\nA {\nint a\nint b\nint c\n}\nA ||--|| B : x");
        let a = ir.node("A").expect("A");
        let b = ir.node("B").expect("B");
        assert_eq!((a.bounds().width, a.bounds().height), (200.0, 86.0));
        assert_eq!((b.bounds().width, b.bounds().height), (200.0, 66.0));
        assert_eq!(entity_height(1), 66.0);
    }

    #[test]
    fn unterminated_block_is_kept() {
        let ir = parse_entity_relationship("erDiagram\nA {\nint id PK");
        assert_eq!(ir.node("A").map(|n| n.fields().len()), Some(1));
    }
}
