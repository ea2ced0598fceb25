// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::edge::Edge;
use super::group::Group;
use super::node::Node;
use super::participant::Participant;

/// The recognised diagram families, as classified from the header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagramKind {
    Flowchart,
    Sequence,
    C4Context,
    C4Container,
    C4Component,
    Erd,
    Generic,
}

impl DiagramKind {
    pub fn dialect(self) -> Dialect {
        match self {
            Self::Flowchart => Dialect::Flowchart,
            Self::Sequence => Dialect::Sequence,
            Self::C4Context | Self::C4Container | Self::C4Component => Dialect::Context,
            Self::Erd => Dialect::Entity,
            Self::Generic => Dialect::Generic,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Sequence => "sequence",
            Self::C4Context => "c4_context",
            Self::C4Container => "c4_container",
            Self::C4Component => "c4_component",
            Self::Erd => "erd",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parser/generator family. Every [`DiagramKind`] maps onto exactly one dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Flowchart,
    Sequence,
    Context,
    Entity,
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    #[default]
    TopBottom,
    LeftRight,
}

/// Intermediate representation shared by parsers, layout, and generators.
///
/// Node and participant ids are unique by construction: both collections are keyed by id and
/// keep declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramIr {
    kind: DiagramKind,
    title: Option<String>,
    direction: LayoutDirection,
    nodes: IndexMap<String, Node>,
    edges: Vec<Edge>,
    groups: Vec<Group>,
    participants: IndexMap<String, Participant>,
}

impl DiagramIr {
    pub fn new(kind: DiagramKind) -> Self {
        Self {
            kind,
            title: None,
            direction: LayoutDirection::default(),
            nodes: IndexMap::new(),
            edges: Vec::new(),
            groups: Vec::new(),
            participants: IndexMap::new(),
        }
    }

    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title<T: Into<String>>(&mut self, title: Option<T>) {
        self.title = title.map(Into::into);
    }

    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: LayoutDirection) {
        self.direction = direction;
    }

    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> + '_ {
        self.nodes.values_mut()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Inserts `node`, replacing any node with the same id in place. Returns the replaced node.
    pub fn insert_node(&mut self, node: Node) -> Option<Node> {
        self.nodes.insert(node.id().to_owned(), node)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }

    pub fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn groups_mut(&mut self) -> &mut [Group] {
        &mut self.groups
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.id() == id)
    }

    pub fn group_mut(&mut self, id: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|group| group.id() == id)
    }

    pub fn push_group(&mut self, group: Group) {
        self.groups.push(group);
    }

    pub fn participants(&self) -> impl ExactSizeIterator<Item = &Participant> + '_ {
        self.participants.values()
    }

    pub fn participants_mut(&mut self) -> impl Iterator<Item = &mut Participant> + '_ {
        self.participants.values_mut()
    }

    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.get(id)
    }

    pub fn participant_mut(&mut self, id: &str) -> Option<&mut Participant> {
        self.participants.get_mut(id)
    }

    pub fn insert_participant(&mut self, participant: Participant) -> Option<Participant> {
        self.participants.insert(participant.id().to_owned(), participant)
    }

    /// Inspects the IR for structural problems that do not block generation.
    pub fn validate(&self) -> Vec<IrWarning> {
        let mut warnings = Vec::new();

        if self.nodes.len() > 1 && self.edges.is_empty() {
            warnings.push(IrWarning::NoEdges { nodes: self.nodes.len() });
        }

        let known = self
            .nodes
            .keys()
            .chain(self.participants.keys())
            .map(String::as_str)
            .collect::<BTreeSet<_>>();

        for edge in &self.edges {
            let Some((source, target)) = edge.cell_ends() else {
                continue;
            };
            if !known.contains(source) {
                warnings.push(IrWarning::UnknownSource {
                    edge: edge.id().to_owned(),
                    source: source.to_owned(),
                });
            }
            if !known.contains(target) {
                warnings.push(IrWarning::UnknownTarget {
                    edge: edge.id().to_owned(),
                    target: target.to_owned(),
                });
            }
        }

        warnings
    }
}

/// A non-fatal finding reported by [`DiagramIr::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrWarning {
    NoEdges { nodes: usize },
    UnknownSource { edge: String, source: String },
    UnknownTarget { edge: String, target: String },
}

impl fmt::Display for IrWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEdges { nodes } => write!(
                f,
                "Diagram has {nodes} nodes but 0 edges; every multi-node diagram should have edges."
            ),
            Self::UnknownSource { edge, source } => {
                write!(f, "Edge {edge} references unknown source '{source}'")
            }
            Self::UnknownTarget { edge, target } => {
                write!(f, "Edge {edge} references unknown target '{target}'")
            }
        }
    }
}
