// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Meridio: Mermaid-style diagram text to draw.io.
//!
//! The pipeline is detect → parse → layout → generate → embed:
//!
//! ```
//! let html = meridio::mermaid_to_html("graph TD\n A[Start] --> B[End]");
//! assert!(html.starts_with("<div class=\"mxgraph\""));
//! assert!(!html.contains("&quot;"));
//! ```

pub mod config;
pub mod convert;
pub mod embed;
pub mod error;
pub mod format;
pub mod layout;
pub mod model;
pub mod render;
pub mod style;

pub use convert::{detect_kind, mermaid_to_html, mermaid_to_xml, Converter, Output};
pub use error::MeridioError;
