// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Bounds, Point};

/// Id of the root cell every model starts with.
pub const ROOT_CELL_ID: &str = "0";
/// Id of the default layer; top-level cells are parented to it.
pub const LAYER_CELL_ID: &str = "1";

/// What a cell is, and the geometry that comes with it.
#[derive(Debug, Clone, PartialEq)]
pub enum CellBody {
    /// One of the two reserved cells (`0` and `1`).
    Reserved,
    Vertex(Bounds),
    /// Edge attached to two cells by id.
    Edge { source: String, target: String },
    /// Edge drawn between two absolute points, not attached to any cell.
    PointEdge { source: Point, target: Point },
}

/// One `mxCell` element.
#[derive(Debug, Clone, PartialEq)]
pub struct MxCell {
    id: String,
    value: String,
    style: String,
    parent: Option<String>,
    body: CellBody,
}

impl MxCell {
    fn reserved(id: &str, parent: Option<&str>) -> Self {
        Self {
            id: id.to_owned(),
            value: String::new(),
            style: String::new(),
            parent: parent.map(str::to_owned),
            body: CellBody::Reserved,
        }
    }

    pub fn vertex(
        id: impl Into<String>,
        value: impl Into<String>,
        style: impl Into<String>,
        bounds: Bounds,
    ) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            style: style.into(),
            parent: Some(LAYER_CELL_ID.to_owned()),
            body: CellBody::Vertex(bounds),
        }
    }

    pub fn edge(
        id: impl Into<String>,
        value: impl Into<String>,
        style: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            style: style.into(),
            parent: Some(LAYER_CELL_ID.to_owned()),
            body: CellBody::Edge { source: source.into(), target: target.into() },
        }
    }

    pub fn point_edge(
        id: impl Into<String>,
        value: impl Into<String>,
        style: impl Into<String>,
        source: Point,
        target: Point,
    ) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            style: style.into(),
            parent: Some(LAYER_CELL_ID.to_owned()),
            body: CellBody::PointEdge { source, target },
        }
    }

    /// Re-parents the cell; `None` keeps it on the default layer.
    pub fn with_parent(mut self, parent: Option<&str>) -> Self {
        self.parent = Some(parent.unwrap_or(LAYER_CELL_ID).to_owned());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn body(&self) -> &CellBody {
        &self.body
    }

    pub fn is_vertex(&self) -> bool {
        matches!(self.body, CellBody::Vertex(_))
    }

    pub fn is_edge(&self) -> bool {
        matches!(self.body, CellBody::Edge { .. } | CellBody::PointEdge { .. })
    }
}

/// The editor's document model: a flat, ordered list of cells under one root.
///
/// Document order is paint order, so containers must be pushed before their contents.
#[derive(Debug, Clone, PartialEq)]
pub struct MxGraphModel {
    cells: Vec<MxCell>,
}

impl Default for MxGraphModel {
    fn default() -> Self {
        Self::new()
    }
}

impl MxGraphModel {
    /// A model holding only the reserved root and layer cells.
    pub fn new() -> Self {
        Self {
            cells: vec![
                MxCell::reserved(ROOT_CELL_ID, None),
                MxCell::reserved(LAYER_CELL_ID, Some(ROOT_CELL_ID)),
            ],
        }
    }

    pub fn push(&mut self, cell: MxCell) {
        self.cells.push(cell);
    }

    pub fn cells(&self) -> &[MxCell] {
        &self.cells
    }

    pub fn cell(&self, id: &str) -> Option<&MxCell> {
        self.cells.iter().find(|cell| cell.id() == id)
    }

    /// Cells other than the two reserved ones.
    pub fn content(&self) -> &[MxCell] {
        &self.cells[2..]
    }
}

#[cfg(test)]
mod tests {
    use super::{CellBody, MxCell, MxGraphModel};
    use crate::model::{Bounds, Point};

    #[test]
    fn new_model_holds_reserved_cells() {
        let model = MxGraphModel::new();
        let ids = model.cells().iter().map(|c| (c.id(), c.parent())).collect::<Vec<_>>();
        assert_eq!(ids, vec![("0", None), ("1", Some("0"))]);
        assert!(model.content().is_empty());
    }

    #[test]
    fn cells_default_to_the_layer_parent() {
        let vertex = MxCell::vertex("a", "A", "s;", Bounds::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(vertex.parent(), Some("1"));
        assert_eq!(vertex.clone().with_parent(Some("g")).parent(), Some("g"));
        assert_eq!(vertex.with_parent(None).parent(), Some("1"));

        let edge = MxCell::point_edge("m", "", "s;", Point::new(0.0, 1.0), Point::new(2.0, 1.0));
        assert!(edge.is_edge());
        assert!(matches!(edge.body(), CellBody::PointEdge { .. }));
    }
}
