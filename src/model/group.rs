// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::geometry::Bounds;

pub const DEFAULT_GROUP_WIDTH: f64 = 600.0;
pub const DEFAULT_GROUP_HEIGHT: f64 = 200.0;

/// Semantic severity of a group; selects its colour family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    #[default]
    Success,
    Info,
    Warning,
    Danger,
}

/// Inclusive range of message ordinals enclosed by an interaction block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSpan {
    pub first: usize,
    pub last: usize,
}

impl MessageSpan {
    pub fn single(ordinal: usize) -> Self {
        Self { first: ordinal, last: ordinal }
    }

    pub fn extend_to(&mut self, ordinal: usize) {
        self.first = self.first.min(ordinal);
        self.last = self.last.max(ordinal);
    }
}

/// A labelled container. Nodes and nested groups point at their group; the group lists neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    id: String,
    label: String,
    kind: GroupKind,
    bounds: Bounds,
    parent: Option<String>,
    style_override: Option<String>,
    span: Option<MessageSpan>,
}

impl Group {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: GroupKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            bounds: Bounds::sized(DEFAULT_GROUP_WIDTH, DEFAULT_GROUP_HEIGHT),
            parent: None,
            style_override: None,
            span: None,
        }
    }

    /// Nests this group inside `parent`.
    pub fn with_parent<T: Into<String>>(mut self, parent: Option<T>) -> Self {
        self.parent = parent.map(Into::into);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn bounds_mut(&mut self) -> &mut Bounds {
        &mut self.bounds
    }

    pub fn style_override(&self) -> Option<&str> {
        self.style_override.as_deref()
    }

    pub fn set_style_override<T: Into<String>>(&mut self, style: Option<T>) {
        self.style_override = style.map(Into::into);
    }

    pub fn span(&self) -> Option<MessageSpan> {
        self.span
    }

    /// Records that the message with `ordinal` was declared while this block was open.
    pub fn cover_message(&mut self, ordinal: usize) {
        match &mut self.span {
            Some(span) => span.extend_to(ordinal),
            None => self.span = Some(MessageSpan::single(ordinal)),
        }
    }
}
