// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Deterministic diagram sources for benchmarks (no RNG).

use std::fmt::Write;

/// Layered flowchart: `layers` rows of `width` nodes, each linked to `fanout` nodes below.
/// Every fourth row sits in a subgraph.
pub fn flowchart(layers: usize, width: usize, fanout: usize) -> String {
    let mut out = String::from("flowchart TD\n");
    for layer in 0..layers {
        let grouped = layer % 4 == 3;
        if grouped {
            let _ = writeln!(out, "  subgraph s{layer} [Stage {layer}]");
        }
        for col in 0..width {
            let shape = match (layer + col) % 3 {
                0 => ("[", "]"),
                1 => ("(", ")"),
                _ => ("{", "}"),
            };
            let _ = writeln!(out, "    n{layer}_{col}{}Node {layer}.{col}{}", shape.0, shape.1);
        }
        if grouped {
            out.push_str("  end\n");
        }
    }
    for layer in 1..layers {
        for col in 0..width {
            for hop in 0..fanout {
                let to = (col + hop) % width;
                let arrow = if hop == 0 { "-->" } else { "-.->" };
                let _ = writeln!(out, "  n{}_{col} {arrow}|step {hop}| n{layer}_{to}", layer - 1);
            }
        }
    }
    out
}

/// Interaction diagram with `participants` lanes and `messages` messages, one `loop` per ten.
pub fn sequence(participants: usize, messages: usize) -> String {
    let mut out = String::from("sequenceDiagram\n");
    for p in 0..participants {
        let _ = writeln!(out, "  participant svc{p} as Service {p}");
    }
    for m in 0..messages {
        if m % 10 == 0 {
            let _ = writeln!(out, "  loop batch {}", m / 10);
        }
        let from = m % participants;
        let to = (m * 7 + 1) % participants;
        let arrow = if m % 2 == 0 { "->>" } else { "-->>" };
        let _ = writeln!(out, "  svc{from}{arrow}svc{to}: call {m} <payload & \"quoted\">");
        if m % 10 == 9 || m + 1 == messages {
            out.push_str("  end\n");
        }
    }
    out
}

/// Entity diagram: `entities` tables of `fields` columns chained by relationships.
pub fn entities(entities: usize, fields: usize) -> String {
    let mut out = String::from("erDiagram\n");
    for e in 0..entities {
        let _ = writeln!(out, "  T{e} {{");
        for f in 0..fields {
            let key = if f == 0 { " PK" } else if f == 1 { " FK" } else { "" };
            let _ = writeln!(out, "    string col{f}{key} \"column {f}\"");
        }
        out.push_str("  }\n");
    }
    for e in 1..entities {
        let _ = writeln!(out, "  T{} ||--o{{ T{e} : \"owns\"", e - 1);
    }
    out
}
