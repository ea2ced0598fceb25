// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::DiagramKind;

use super::mermaid::meaningful_lines;

/// Classifies `input` by its first meaningful line. Never fails: unknown headers are `Generic`.
pub fn detect_kind(input: &str) -> DiagramKind {
    let Some((_, header)) = meaningful_lines(input).next() else {
        return DiagramKind::Generic;
    };
    kind_from_header(header)
}

fn kind_from_header(header: &str) -> DiagramKind {
    let token = header.split_whitespace().next().unwrap_or_default().to_ascii_lowercase();

    match token.as_str() {
        "graph" | "flowchart" => DiagramKind::Flowchart,
        "sequencediagram" => DiagramKind::Sequence,
        "erdiagram" => DiagramKind::Erd,
        _ if token.starts_with("c4container") => DiagramKind::C4Container,
        _ if token.starts_with("c4component") => DiagramKind::C4Component,
        _ if token.starts_with("c4") => DiagramKind::C4Context,
        _ => DiagramKind::Generic,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::detect_kind;
    use crate::model::DiagramKind;

    #[rstest]
    #[case("graph TD\nA-->B", DiagramKind::Flowchart)]
    #[case("flowchart LR\nA-->B", DiagramKind::Flowchart)]
    #[case("GRAPH td", DiagramKind::Flowchart)]
    #[case("sequenceDiagram\nA->>B: hi", DiagramKind::Sequence)]
    #[case("C4Context\nPerson(u, \"User\")", DiagramKind::C4Context)]
    #[case("C4Container", DiagramKind::C4Container)]
    #[case("c4component", DiagramKind::C4Component)]
    #[case("C4Dynamic", DiagramKind::C4Context)]
    #[case("C4Deployment", DiagramKind::C4Context)]
    #[case("erDiagram\nA ||--o{ B : has", DiagramKind::Erd)]
    #[case("pie title Pets\n\"Dogs\" : 3", DiagramKind::Generic)]
    #[case("graphviz digraph", DiagramKind::Generic)]
    #[case("", DiagramKind::Generic)]
    fn classifies_first_meaningful_line(#[case] input: &str, #[case] expected: DiagramKind) {
        assert_eq!(detect_kind(input), expected);
    }

    #[test]
    fn skips_leading_blank_and_comment_lines() {
        let input = "\n%% generated\n   \n  sequenceDiagram\n  A->>B: hi\n";
        assert_eq!(detect_kind(input), DiagramKind::Sequence);
    }

    #[test]
    fn only_the_first_meaningful_line_counts() {
        assert_eq!(detect_kind("title Checkout\nsequenceDiagram"), DiagramKind::Generic);
    }
}
