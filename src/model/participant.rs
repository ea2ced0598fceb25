// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::geometry::Bounds;
use super::node::SemanticRole;

/// A lifeline owner in an interaction diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    id: String,
    label: String,
    role: Option<SemanticRole>,
    bounds: Bounds,
    lifeline_end: f64,
}

impl Participant {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            role: None,
            bounds: Bounds::new(0.0, 30.0, 140.0, 50.0),
            lifeline_end: 300.0,
        }
    }

    pub fn with_role(mut self, role: Option<SemanticRole>) -> Self {
        self.role = role;
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

    pub fn role(&self) -> Option<SemanticRole> {
        self.role
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn bounds_mut(&mut self) -> &mut Bounds {
        &mut self.bounds
    }

    /// Ordinate where the lifeline starts: the bottom edge of the header box.
    pub fn lifeline_top(&self) -> f64 {
        self.bounds.bottom()
    }

    pub fn lifeline_end(&self) -> f64 {
        self.lifeline_end
    }

    pub fn set_lifeline_end(&mut self, y: f64) {
        self.lifeline_end = y;
    }
}
