// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! TOML configuration.
//!
//! ```toml
//! [layout]
//! node_spacing_h = 80
//! message_spacing = 50
//!
//! [viewer]
//! toolbar = "zoom lightbox"
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::embed::ViewerOptions;
use crate::error::{MeridioError, Result};
use crate::layout::LayoutConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub viewer: ViewerOptions,
}

impl Config {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`MeridioError::Config`] for malformed TOML and [`MeridioError::InvalidConfig`]
    /// for values layout cannot use.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`MeridioError::Io`] when the file cannot be read, otherwise as
    /// [`Config::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");
        let text = fs::read_to_string(path).map_err(|err| MeridioError::io(path, err))?;
        Self::from_toml_str(&text)
    }

    /// Checks that sizes are finite and non-negative, and that element sizes are non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`MeridioError::InvalidConfig`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        for (key, value) in [
            ("layout.origin_x", layout.origin_x),
            ("layout.origin_y", layout.origin_y),
        ] {
            if !value.is_finite() {
                return Err(MeridioError::InvalidConfig(format!("{key} must be finite")));
            }
        }
        for (key, value) in [
            ("layout.node_spacing_h", layout.node_spacing_h),
            ("layout.node_spacing_v", layout.node_spacing_v),
            ("layout.group_padding", layout.group_padding),
            ("layout.group_label_band", layout.group_label_band),
            ("layout.participant_top", layout.participant_top),
            ("layout.first_message_offset", layout.first_message_offset),
            ("layout.lifeline_tail", layout.lifeline_tail),
            ("layout.block_padding", layout.block_padding),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MeridioError::InvalidConfig(format!("{key} must be a non-negative number")));
            }
        }
        for (key, value) in [
            ("layout.participant_width", layout.participant_width),
            ("layout.participant_height", layout.participant_height),
            ("layout.participant_spacing", layout.participant_spacing),
            ("layout.message_spacing", layout.message_spacing),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MeridioError::InvalidConfig(format!("{key} must be greater than zero")));
            }
        }
        Ok(())
    }
}
