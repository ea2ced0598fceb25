// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{DiagramIr, DiagramKind, Edge, EdgeKind, Group, GroupKind, Node, Participant};

/// Diamond-shaped DAG: `a -> b`, `a -> c`, `b -> d`, `c -> d`.
pub(crate) fn flowchart_small_dag() -> DiagramIr {
    let mut ir = DiagramIr::new(DiagramKind::Flowchart);
    for id in ["a", "b", "c", "d"] {
        ir.insert_node(Node::new(id, id.to_uppercase()));
    }
    ir.push_edge(Edge::new("e1", "a", "b", EdgeKind::Sync));
    ir.push_edge(Edge::new("e2", "a", "c", EdgeKind::Sync));
    ir.push_edge(Edge::new("e3", "b", "d", EdgeKind::Sync));
    ir.push_edge(Edge::new("e4", "c", "d", EdgeKind::Sync));
    ir
}

/// `api -> worker -> store` with the last two inside `group_1`.
pub(crate) fn flowchart_grouped() -> DiagramIr {
    let mut ir = DiagramIr::new(DiagramKind::Flowchart);
    ir.push_group(Group::new("group_1", "Backend", GroupKind::Success));
    ir.insert_node(Node::new("api", "API"));
    ir.insert_node(Node::new("worker", "Worker").with_group(Some("group_1")));
    ir.insert_node(Node::new("store", "Store").with_group(Some("group_1")));
    ir.push_edge(Edge::new("e1", "api", "worker", EdgeKind::Sync));
    ir.push_edge(Edge::new("e2", "worker", "store", EdgeKind::DataFlow));
    ir
}

/// Two participants, a request and a response, the request wrapped in an `opt` block.
pub(crate) fn sequence_request_response() -> DiagramIr {
    let mut ir = DiagramIr::new(DiagramKind::Sequence);
    ir.insert_participant(Participant::new("client", "Client"));
    ir.insert_participant(Participant::new("api", "API"));
    ir.push_edge(Edge::new("msg_0", "client", "api", EdgeKind::SeqRequest).with_label("GET /"));
    ir.push_edge(Edge::new("msg_1", "api", "client", EdgeKind::SeqResponse).with_label("200"));

    let mut block = Group::new("block_1", "OPT: cached", GroupKind::Info);
    block.cover_message(0);
    ir.push_group(block);
    ir
}
