// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mermaid-ish dialect parsers.
//!
//! Every parser is total: lines it cannot classify are skipped (and traced), never rejected.

pub mod context;
pub mod entity;
pub mod flowchart;
pub mod generic;
mod ident;
pub mod sequence;

pub use context::parse_context;
pub use entity::parse_entity_relationship;
pub use flowchart::parse_flowchart;
pub use generic::parse_generic;
pub use sequence::parse_sequence_diagram;

pub(crate) fn is_comment_line(trimmed: &str) -> bool {
    trimmed.starts_with("%%")
}

/// Trimmed lines that carry content, paired with their 1-based line numbers.
pub(crate) fn meaningful_lines(input: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !is_comment_line(line))
}

/// Finds the earliest needle in `haystack`; on ties the longest needle wins.
pub(super) fn split_once_any<'a>(
    haystack: &'a str,
    needles: &[&'static str],
) -> Option<(&'a str, &'static str, &'a str)> {
    let mut best: Option<(usize, &'static str)> = None;
    for &needle in needles {
        if let Some(idx) = haystack.find(needle) {
            let take = match best {
                None => true,
                Some((best_idx, best_needle)) => {
                    idx < best_idx || (idx == best_idx && needle.len() > best_needle.len())
                }
            };
            if take {
                best = Some((idx, needle));
            }
        }
    }
    let (idx, needle) = best?;
    Some((&haystack[..idx], needle, &haystack[idx + needle.len()..]))
}

/// Matches a leading keyword case-insensitively, at a word boundary, and returns the trimmed rest.
pub(super) fn keyword_rest<'a>(trimmed: &'a str, keyword: &str) -> Option<&'a str> {
    let head = trimmed.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let rest = &trimmed[keyword.len()..];
    match rest.chars().next() {
        None => Some(""),
        Some(ch) if ch.is_whitespace() => Some(rest.trim()),
        Some(_) => None,
    }
}

/// Strips one pair of matching surrounding quotes.
pub(super) fn unquote(s: &str) -> &str {
    let s = s.trim();
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Splits a macro argument list on commas outside quotes; quotes are stripped from each argument.
pub(super) fn split_args(args: &str) -> Vec<String> {
    fn finish(raw: &str) -> String {
        raw.trim().trim_matches(|ch: char| ch == '"' || ch == '\'').to_owned()
    }

    let mut out = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0usize;

    for (idx, ch) in args.char_indices() {
        match (quote, ch) {
            (None, '"' | '\'') => quote = Some(ch),
            (Some(open), _) if ch == open => quote = None,
            (None, ',') => {
                out.push(finish(&args[start..idx]));
                start = idx + 1;
            }
            _ => {}
        }
    }
    if start < args.len() {
        out.push(finish(&args[start..]));
    }
    out
}
