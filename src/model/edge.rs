// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::geometry::Point;

/// Interaction type of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    #[default]
    Sync,
    Async,
    Error,
    ErrorResponse,
    Retry,
    Rollback,
    DataFlow,
    Dependency,
    Numbered,
    SeqRequest,
    SeqResponse,
    SeqError,
}

/// How an edge's endpoints are addressed.
///
/// Cell references are resolved by the consuming renderer; points bypass id resolution entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum EdgeEnds {
    Cells { source: String, target: String },
    Points { source: Point, target: Point },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    id: String,
    label: String,
    kind: EdgeKind,
    ends: EdgeEnds,
    style_override: Option<String>,
}

impl Edge {
    /// A cell-referenced edge between two element ids.
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        kind: EdgeKind,
    ) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            kind,
            ends: EdgeEnds::Cells { source: source.into(), target: target.into() },
            style_override: None,
        }
    }

    /// A point-addressed edge.
    pub fn between_points(id: impl Into<String>, source: Point, target: Point, kind: EdgeKind) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            kind,
            ends: EdgeEnds::Points { source, target },
            style_override: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn ends(&self) -> &EdgeEnds {
        &self.ends
    }

    pub fn set_ends(&mut self, ends: EdgeEnds) {
        self.ends = ends;
    }

    /// Source/target ids for cell-referenced edges, `None` once point-addressed.
    pub fn cell_ends(&self) -> Option<(&str, &str)> {
        match &self.ends {
            EdgeEnds::Cells { source, target } => Some((source, target)),
            EdgeEnds::Points { .. } => None,
        }
    }

    pub fn is_point_addressed(&self) -> bool {
        matches!(self.ends, EdgeEnds::Points { .. })
    }

    pub fn style_override(&self) -> Option<&str> {
        self.style_override.as_deref()
    }

    pub fn set_style_override<T: Into<String>>(&mut self, style: Option<T>) {
        self.style_override = style.map(Into::into);
    }
}
