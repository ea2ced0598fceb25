// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram intermediate representation.
//!
//! Parsers populate a [`DiagramIr`], layout mutates its geometry in place, and generators read
//! it back out. Topology is frozen once parsing returns.

pub mod diagram;
pub mod edge;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod geometry;
pub mod group;
pub mod node;
pub mod participant;

pub use diagram::{DiagramIr, DiagramKind, Dialect, IrWarning, LayoutDirection};
pub use edge::{Edge, EdgeEnds, EdgeKind};
pub use geometry::{Bounds, Point};
pub use group::{Group, GroupKind, MessageSpan};
pub use node::{Node, NodeShape, SemanticRole, StoreKind};
pub use participant::Participant;
