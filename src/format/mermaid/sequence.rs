// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::{debug, trace};

use crate::model::{
    DiagramIr, DiagramKind, Edge, EdgeKind, Group, GroupKind, Participant, SemanticRole,
};

use super::{keyword_rest, meaningful_lines, split_once_any};

const MESSAGE_ARROWS: &[&str] = &["->>", "-->>", "-x", "--x", "-)", "--)"];

/// Substring hints matched against the lowercased participant id, first hit wins.
const ROLE_HINTS: &[(&str, SemanticRole)] = &[
    ("client", SemanticRole::Queue),
    ("browser", SemanticRole::Queue),
    ("user", SemanticRole::Person),
    ("server", SemanticRole::Compute),
    ("api", SemanticRole::Networking),
    ("gateway", SemanticRole::Networking),
    ("db", SemanticRole::Database),
    ("database", SemanticRole::Database),
    ("cache", SemanticRole::Database),
    ("redis", SemanticRole::Database),
    ("queue", SemanticRole::Queue),
    ("sqs", SemanticRole::Queue),
    ("kafka", SemanticRole::Queue),
    ("auth", SemanticRole::Security),
    ("cognito", SemanticRole::Security),
];

/// Lines that are understood but produce nothing.
const DISCARDED_KEYWORDS: &[&str] = &["note", "activate", "deactivate", "autonumber"];

fn guess_role(id: &str) -> SemanticRole {
    let lower = id.to_lowercase();
    ROLE_HINTS
        .iter()
        .find(|(hint, _)| lower.contains(hint))
        .map(|&(_, role)| role)
        .unwrap_or(SemanticRole::Compute)
}

fn arrow_kind(arrow: &str) -> EdgeKind {
    match arrow {
        "-x" | "--x" => EdgeKind::SeqError,
        _ if arrow.starts_with("--") => EdgeKind::SeqResponse,
        _ => EdgeKind::SeqRequest,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Alt,
    Opt,
    Loop,
    Par,
    Critical,
    Rect,
    Break,
}

impl BlockKind {
    const ALL: [Self; 7] =
        [Self::Alt, Self::Opt, Self::Loop, Self::Par, Self::Critical, Self::Rect, Self::Break];

    fn keyword(self) -> &'static str {
        match self {
            Self::Alt => "alt",
            Self::Opt => "opt",
            Self::Loop => "loop",
            Self::Par => "par",
            Self::Critical => "critical",
            Self::Rect => "rect",
            Self::Break => "break",
        }
    }

    fn group_kind(self) -> GroupKind {
        match self {
            Self::Alt | Self::Loop => GroupKind::Warning,
            Self::Opt | Self::Par => GroupKind::Info,
            Self::Critical | Self::Break => GroupKind::Danger,
            Self::Rect => GroupKind::Success,
        }
    }

    fn label(self, header: &str) -> String {
        let keyword = self.keyword().to_uppercase();
        if header.is_empty() {
            keyword
        } else {
            format!("{keyword}: {header}")
        }
    }
}

fn block_start(line: &str) -> Option<(BlockKind, &str)> {
    BlockKind::ALL
        .into_iter()
        .find_map(|kind| keyword_rest(line, kind.keyword()).map(|rest| (kind, rest)))
}

/// An `else`/`and` line; a bare keyword of either kind is labelled `else`.
fn section_start(line: &str) -> Option<&str> {
    ["else", "and"].into_iter().find_map(|keyword| {
        keyword_rest(line, keyword).map(|rest| if rest.is_empty() { "else" } else { rest })
    })
}

/// `<id>` or `<id> as <display>`.
fn parse_participant_decl(rest: &str) -> Option<(&str, Option<&str>)> {
    let (id, tail) = match rest.split_once(char::is_whitespace) {
        Some((id, tail)) => (id, tail.trim()),
        None => (rest, ""),
    };
    if id.is_empty() {
        return None;
    }
    if tail.is_empty() {
        return Some((id, None));
    }
    keyword_rest(tail, "as").filter(|display| !display.is_empty()).map(|display| (id, Some(display)))
}

struct Message<'a> {
    source: &'a str,
    target: &'a str,
    kind: EdgeKind,
    label: &'a str,
}

fn parse_message(line: &str) -> Option<Message<'_>> {
    let (lhs, arrow, rhs) = split_once_any(line, MESSAGE_ARROWS)?;
    let source = lhs.trim();
    let (target, label) = rhs.split_once(':')?;
    let target = target.trim().trim_start_matches(['+', '-']);
    if source.is_empty()
        || target.is_empty()
        || source.contains(char::is_whitespace)
        || target.contains(char::is_whitespace)
    {
        return None;
    }
    Some(Message { source, target, kind: arrow_kind(arrow), label: label.trim() })
}

/// Declares `id` if unseen; a display name relabels an existing participant.
fn ensure_participant(ir: &mut DiagramIr, id: &str, display: Option<&str>) {
    match ir.participant_mut(id) {
        Some(participant) => {
            if let Some(display) = display {
                participant.set_label(display);
            }
        }
        None => {
            let participant =
                Participant::new(id, display.unwrap_or(id)).with_role(Some(guess_role(id)));
            ir.insert_participant(participant);
        }
    }
}

/// Parse a Mermaid `sequenceDiagram`.
///
/// Supported lines (after an optional `sequenceDiagram` header):
/// - `participant <id> [as <display>]`, `actor ...`
/// - `<from><arrow><to>: <text>` with arrows `->>`, `-->>`, `-x`, `--x`, `-)`, `--)`
/// - `alt|opt|loop|par|critical|rect|break [header]`, `else|and [header]`, `end`
/// - `title <text>`
///
/// Notes, activations, and `autonumber` are recognised and dropped. An `else`/`and` section
/// replaces the innermost open block rather than nesting inside it.
pub fn parse_sequence_diagram(input: &str) -> DiagramIr {
    let mut ir = DiagramIr::new(DiagramKind::Sequence);
    let mut lines = meaningful_lines(input).peekable();
    if lines.peek().is_some_and(|(_, line)| line.eq_ignore_ascii_case("sequenceDiagram")) {
        lines.next();
    }

    let mut block_stack = Vec::<String>::new();
    let mut next_block = 1usize;
    let mut next_message = 0usize;

    for (line_no, line) in lines {
        if let Some(title) = keyword_rest(line, "title") {
            ir.set_title(Some(title));
            continue;
        }

        if let Some(rest) = keyword_rest(line, "participant").or_else(|| keyword_rest(line, "actor"))
        {
            match parse_participant_decl(rest) {
                Some((id, display)) => ensure_participant(&mut ir, id, Some(display.unwrap_or(id))),
                None => trace!(line_no, line, "skipping malformed participant"),
            }
            continue;
        }

        if let Some(message) = parse_message(line) {
            ensure_participant(&mut ir, message.source, None);
            ensure_participant(&mut ir, message.target, None);

            let ordinal = next_message;
            next_message += 1;
            ir.push_edge(
                Edge::new(format!("msg_{ordinal}"), message.source, message.target, message.kind)
                    .with_label(message.label),
            );
            for block_id in &block_stack {
                if let Some(group) = ir.group_mut(block_id) {
                    group.cover_message(ordinal);
                }
            }
            continue;
        }

        if let Some((kind, header)) = block_start(line) {
            let id = format!("block_{next_block}");
            next_block += 1;
            ir.push_group(Group::new(id.clone(), kind.label(header), kind.group_kind()));
            block_stack.push(id);
            continue;
        }

        if let Some(label) = section_start(line) {
            let id = format!("block_{next_block}");
            next_block += 1;
            ir.push_group(Group::new(id.clone(), label, GroupKind::Warning));
            if let Some(top) = block_stack.last_mut() {
                *top = id;
            }
            continue;
        }

        if line.eq_ignore_ascii_case("end") {
            block_stack.pop();
            continue;
        }

        if DISCARDED_KEYWORDS.iter().any(|keyword| keyword_rest(line, keyword).is_some()) {
            continue;
        }

        trace!(line_no, line, "skipping unrecognised sequence line");
    }

    debug!(
        participants = ir.participants().len(),
        messages = ir.edges().len(),
        blocks = ir.groups().len(),
        "parsed sequence diagram"
    );
    ir
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::parse_sequence_diagram;
    use crate::model::{EdgeKind, GroupKind, MessageSpan, Participant, SemanticRole};

    #[test]
    fn parses_participants_and_messages() {
        let ir = parse_sequence_diagram("sequenceDiagram\n Alice->>Bob: Hello\n Bob-->>Alice: Hi back");

        let ids = ir.participants().map(Participant::id).collect::<Vec<_>>();
        assert_eq!(ids, ["Alice", "Bob"]);
        let messages = ir
            .edges()
            .iter()
            .map(|e| (e.id(), e.cell_ends(), e.kind(), e.label()))
            .collect::<Vec<_>>();
        assert_eq!(
            messages,
            vec![
                ("msg_0", Some(("Alice", "Bob")), EdgeKind::SeqRequest, "Hello"),
                ("msg_1", Some(("Bob", "Alice")), EdgeKind::SeqResponse, "Hi back"),
            ]
        );
    }

    #[rstest]
    #[case("A->>B: x", EdgeKind::SeqRequest)]
    #[case("A-->>B: x", EdgeKind::SeqResponse)]
    #[case("A-xB: x", EdgeKind::SeqError)]
    #[case("A--xB: x", EdgeKind::SeqError)]
    #[case("A-)B: x", EdgeKind::SeqRequest)]
    #[case("A--)B: x", EdgeKind::SeqResponse)]
    #[case("A ->> +B: x", EdgeKind::SeqRequest)]
    fn arrows_select_message_kind(#[case] line: &str, #[case] kind: EdgeKind) {
        let ir = parse_sequence_diagram(&format!("sequenceDiagram\n{line}"));
        assert_eq!(ir.edges().len(), 1);
        assert_eq!(ir.edges()[0].kind(), kind);
        assert_eq!(ir.edges()[0].cell_ends(), Some(("A", "B")));
    }

    #[test]
    fn explicit_participants_keep_declaration_order_and_display_names() {
        let input = "sequenceDiagram\n\
                     participant B as Bob\n\
                     actor A as Alice\n\
                     A->>B: msg\n\
                     participant B as Robert";
        let ir = parse_sequence_diagram(input);

        let labels = ir.participants().map(|p| (p.id(), p.label())).collect::<Vec<_>>();
        assert_eq!(labels, vec![("B", "Robert"), ("A", "Alice")]);
    }

    #[rstest]
    #[case("Client", SemanticRole::Queue)]
    #[case("WebBrowser", SemanticRole::Queue)]
    #[case("EndUser", SemanticRole::Person)]
    #[case("Server", SemanticRole::Compute)]
    #[case("PublicApi", SemanticRole::Networking)]
    #[case("Database", SemanticRole::Database)]
    #[case("RedisCache", SemanticRole::Database)]
    #[case("Kafka", SemanticRole::Queue)]
    #[case("AuthService", SemanticRole::Security)]
    #[case("Worker", SemanticRole::Compute)]
    fn guesses_roles_from_ids(#[case] id: &str, #[case] role: SemanticRole) {
        let ir = parse_sequence_diagram(&format!("sequenceDiagram\nparticipant {id}"));
        assert_eq!(ir.participant(id).and_then(Participant::role), Some(role));
    }

    #[test]
    fn blocks_open_groups_and_track_message_spans() {
        let input = "sequenceDiagram\n\
                     A->>B: request\n\
                     loop Every 5s\n\
                       B-->>A: status\n\
                       critical\n\
                         A->>B: commit\n\
                       end\n\
                     end\n\
                     A->>B: bye";
        let ir = parse_sequence_diagram(input);

        let groups = ir
            .groups()
            .iter()
            .map(|g| (g.id(), g.label(), g.kind(), g.span()))
            .collect::<Vec<_>>();
        assert_eq!(
            groups,
            vec![
                ("block_1", "LOOP: Every 5s", GroupKind::Warning, Some(MessageSpan { first: 1, last: 2 })),
                ("block_2", "CRITICAL", GroupKind::Danger, Some(MessageSpan { first: 2, last: 2 })),
            ]
        );
    }

    #[test]
    fn else_replaces_the_innermost_block() {
        let input = "sequenceDiagram\n\
                     A->>B: request\n\
                     alt success\n\
                       B-->>A: 200 OK\n\
                     else\n\
                       B-->>A: 500 Error\n\
                     end\n\
                     B->>A: after";
        let ir = parse_sequence_diagram(input);

        let groups = ir
            .groups()
            .iter()
            .map(|g| (g.label(), g.kind(), g.span()))
            .collect::<Vec<_>>();
        assert_eq!(
            groups,
            vec![
                ("ALT: success", GroupKind::Warning, Some(MessageSpan { first: 1, last: 1 })),
                ("else", GroupKind::Warning, Some(MessageSpan { first: 2, last: 2 })),
            ]
        );
        assert_eq!(ir.edges().len(), 4);
    }

    #[test]
    fn par_and_sections_take_their_header() {
        let ir = parse_sequence_diagram("sequenceDiagram\npar fan out\nA->>B: one\nand to C\nA->>C: two\nend");
        let labels = ir.groups().iter().map(|g| g.label()).collect::<Vec<_>>();
        assert_eq!(labels, ["PAR: fan out", "to C"]);
    }

    #[test]
    fn bare_and_sections_are_labelled_else() {
        let ir = parse_sequence_diagram("sequenceDiagram\npar\nA->>B: one\nand\nA->>C: two\nend");
        let labels = ir.groups().iter().map(|g| g.label()).collect::<Vec<_>>();
        assert_eq!(labels, ["PAR", "else"]);
    }

    #[test]
    fn notes_activations_and_autonumber_are_dropped() {
        let input = "sequenceDiagram\n\
                     autonumber\n\
                     A->>B: hi\n\
                     activate B\n\
                     Note right of B: thinking->>hard\n\
                     deactivate B";
        let ir = parse_sequence_diagram(input);
        assert_eq!(ir.participants().len(), 2);
        assert_eq!(ir.edges().len(), 1);
        assert!(ir.groups().is_empty());
    }

    #[test]
    fn title_line_sets_title() {
        let ir = parse_sequence_diagram("sequenceDiagram\ntitle Checkout flow\nA->>B: pay");
        assert_eq!(ir.title(), Some("Checkout flow"));
    }

    #[test]
    fn message_without_colon_is_skipped() {
        let ir = parse_sequence_diagram("sequenceDiagram\nA->>B hello");
        assert!(ir.edges().is_empty());
        assert_eq!(ir.participants().len(), 0);
    }
}
