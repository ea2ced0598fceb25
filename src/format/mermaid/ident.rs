// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

pub(super) fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

pub(super) fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Length in bytes of the identifier at the start of `s`, or `None` if `s` does not start with one.
pub(super) fn leading_ident_len(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    let (_, first) = chars.next()?;
    if !is_ident_start(first) {
        return None;
    }
    let end = chars.find(|(_, ch)| !is_ident_char(*ch)).map(|(idx, _)| idx).unwrap_or(s.len());
    Some(end)
}

/// Splits `s` into its leading identifier and the remainder.
pub(super) fn split_ident(s: &str) -> Option<(&str, &str)> {
    leading_ident_len(s).map(|len| s.split_at(len))
}
