// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::DiagramIr;

use super::cell::{LAYER_CELL_ID, ROOT_CELL_ID};

/// Allocates unique `mxCell` ids for one model.
///
/// Diagram ids are kept verbatim unless they clash with a reserved id or with an id claimed
/// earlier; a clash gets the first free `<id>_<n>`. Groups, nodes, and participants are claimed
/// up front so they keep their names ahead of derived cells (lifelines, field rows, edges).
#[derive(Debug)]
pub(super) struct CellIds {
    taken: BTreeSet<String>,
    group_cells: Vec<String>,
    node_cells: Vec<String>,
    participant_cells: Vec<String>,
    groups: BTreeMap<String, String>,
    vertices: BTreeMap<String, String>,
}

impl CellIds {
    pub(super) fn new(ir: &DiagramIr) -> Self {
        let mut ids = Self {
            taken: BTreeSet::from([ROOT_CELL_ID.to_owned(), LAYER_CELL_ID.to_owned()]),
            group_cells: Vec::with_capacity(ir.groups().len()),
            node_cells: Vec::with_capacity(ir.node_count()),
            participant_cells: Vec::with_capacity(ir.participants().len()),
            groups: BTreeMap::new(),
            vertices: BTreeMap::new(),
        };

        for group in ir.groups() {
            let cell = ids.claim(group.id());
            ids.groups.entry(group.id().to_owned()).or_insert_with(|| cell.clone());
            ids.group_cells.push(cell);
        }
        for node in ir.nodes() {
            let cell = ids.claim(node.id());
            ids.vertices.entry(node.id().to_owned()).or_insert_with(|| cell.clone());
            ids.node_cells.push(cell);
        }
        for participant in ir.participants() {
            let cell = ids.claim(participant.id());
            ids.vertices.entry(participant.id().to_owned()).or_insert_with(|| cell.clone());
            ids.participant_cells.push(cell);
        }
        ids
    }

    /// Claims `wanted`, or the first free `wanted_<n>` when it is taken.
    pub(super) fn claim(&mut self, wanted: &str) -> String {
        let mut id = wanted.to_owned();
        let mut n = 1usize;
        while self.taken.contains(&id) {
            id = format!("{wanted}_{n}");
            n += 1;
        }
        self.taken.insert(id.clone());
        id
    }

    /// Cell ids of `ir.groups()`, index-aligned.
    pub(super) fn group_cells(&self) -> &[String] {
        &self.group_cells
    }

    /// Cell ids of `ir.nodes()`, index-aligned.
    pub(super) fn node_cells(&self) -> &[String] {
        &self.node_cells
    }

    /// Cell ids of `ir.participants()`, index-aligned.
    pub(super) fn participant_cells(&self) -> &[String] {
        &self.participant_cells
    }

    /// Cell id for a group reference; unknown groups pass through.
    pub(super) fn group<'a>(&'a self, id: &'a str) -> &'a str {
        self.groups.get(id).map_or(id, String::as_str)
    }

    /// Cell id for an edge endpoint; unknown endpoints pass through.
    pub(super) fn vertex<'a>(&'a self, id: &'a str) -> &'a str {
        self.vertices.get(id).map_or(id, String::as_str)
    }
}
