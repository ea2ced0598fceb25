// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::PathBuf;

/// Failures at the crate's fallible edges: configuration and file I/O.
///
/// Conversion itself never fails; see [`crate::model::IrWarning`] for non-fatal findings.
#[derive(Debug, thiserror::Error)]
pub enum MeridioError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    InvalidConfig(String),
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),
}

impl MeridioError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T, E = MeridioError> = std::result::Result<T, E>;
