// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Generators: laid-out IR to the editor's `mxGraphModel` markup.
//!
//! Generation is a pure read of the IR; the same IR always yields the same markup.

pub mod cell;
pub mod entity;
pub mod graph;
mod ids;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod xml;

use crate::model::{DiagramIr, Dialect};

pub use cell::{CellBody, MxCell, MxGraphModel};
pub use entity::generate_entities;
pub use graph::generate_graph;
pub use xml::{format_number, write_model};

/// Builds the markup tree for `ir` with the generator its dialect pairs with.
pub fn generate(ir: &DiagramIr) -> MxGraphModel {
    match ir.kind().dialect() {
        Dialect::Flowchart | Dialect::Sequence | Dialect::Context | Dialect::Generic => {
            generate_graph(ir)
        }
        Dialect::Entity => generate_entities(ir),
    }
}

/// [`generate`] followed by [`write_model`].
pub fn render_xml(ir: &DiagramIr) -> String {
    write_model(&generate(ir))
}
