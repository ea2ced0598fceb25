// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::geometry::Bounds;

pub const DEFAULT_NODE_WIDTH: f64 = 160.0;
pub const DEFAULT_NODE_HEIGHT: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeShape {
    Rect,
    #[default]
    RoundedRect,
    Stadium,
    Cylinder,
    Circle,
    Diamond,
    Hexagon,
    Parallelogram,
    Person,
    UmlClass,
    StartEnd,
    ErrorEnd,
}

impl NodeShape {
    /// Size a freshly declared node of this shape gets before layout.
    pub fn default_size(self) -> (f64, f64) {
        match self {
            Self::Diamond => (120.0, 80.0),
            Self::Circle => (80.0, 80.0),
            Self::StartEnd | Self::ErrorEnd => (100.0, 40.0),
            _ => (DEFAULT_NODE_WIDTH, DEFAULT_NODE_HEIGHT),
        }
    }
}

/// Semantic role of a vertex; drives its default presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticRole {
    Compute,
    Queue,
    Messaging,
    Database,
    Storage,
    External,
    Security,
    Networking,
    Monitoring,
    Person,
}

/// Storage flavour of an entity-relationship entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    #[default]
    Relational,
    NoSql,
    Cache,
    Search,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: String,
    label: String,
    shape: NodeShape,
    role: Option<SemanticRole>,
    bounds: Bounds,
    group: Option<String>,
    fields: Vec<String>,
    style_override: Option<String>,
    store: Option<StoreKind>,
}

impl Node {
    /// A rounded-rectangle node with default geometry.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new_with(id, label, NodeShape::default())
    }

    pub fn new_with(id: impl Into<String>, label: impl Into<String>, shape: NodeShape) -> Self {
        let (width, height) = shape.default_size();
        Self {
            id: id.into(),
            label: label.into(),
            shape,
            role: None,
            bounds: Bounds::sized(width, height),
            group: None,
            fields: Vec::new(),
            style_override: None,
            store: None,
        }
    }

    pub fn with_role(mut self, role: SemanticRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_group<T: Into<String>>(mut self, group: Option<T>) -> Self {
        self.group = group.map(Into::into);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.bounds.width = width;
        self.bounds.height = height;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn shape(&self) -> NodeShape {
        self.shape
    }

    pub fn set_shape(&mut self, shape: NodeShape) {
        self.shape = shape;
    }

    pub fn role(&self) -> Option<SemanticRole> {
        self.role
    }

    pub fn set_role(&mut self, role: Option<SemanticRole>) {
        self.role = role;
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn bounds_mut(&mut self) -> &mut Bounds {
        &mut self.bounds
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn set_group<T: Into<String>>(&mut self, group: Option<T>) {
        self.group = group.map(Into::into);
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn set_fields(&mut self, fields: Vec<String>) {
        self.fields = fields;
    }

    pub fn style_override(&self) -> Option<&str> {
        self.style_override.as_deref()
    }

    pub fn set_style_override<T: Into<String>>(&mut self, style: Option<T>) {
        self.style_override = style.map(Into::into);
    }

    pub fn store(&self) -> Option<StoreKind> {
        self.store
    }

    pub fn set_store(&mut self, store: Option<StoreKind>) {
        self.store = store;
    }
}
