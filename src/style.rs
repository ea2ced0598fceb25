// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Editor style strings.
//!
//! The strings are opaque to the rest of the crate: generators look them up and copy them into
//! the `style` attribute unchanged.

use crate::model::{EdgeKind, GroupKind, NodeShape, SemanticRole, StoreKind};

pub const NODE_COMPUTE: &str = "rounded=1;whiteSpace=wrap;html=1;fillColor=#438DD5;fontColor=#ffffff;strokeColor=#3C7FC0;arcSize=10;align=center;verticalAlign=middle;fontSize=12;";
pub const NODE_QUEUE: &str = "rounded=1;whiteSpace=wrap;html=1;fillColor=#E8A735;fontColor=#ffffff;strokeColor=#C88B1E;arcSize=10;align=center;verticalAlign=middle;fontSize=12;";
pub const NODE_DATABASE: &str = "shape=cylinder3;whiteSpace=wrap;html=1;fillColor=#4CAF50;fontColor=#ffffff;strokeColor=#388E3C;boundedLbl=1;backgroundOutline=1;size=12;fontSize=12;";
pub const NODE_EXTERNAL: &str = "rounded=1;whiteSpace=wrap;html=1;fillColor=#999999;fontColor=#ffffff;strokeColor=#8A8A8A;arcSize=10;align=center;verticalAlign=middle;fontSize=12;";
pub const NODE_SECURITY: &str = "rounded=1;whiteSpace=wrap;html=1;fillColor=#E74C3C;fontColor=#ffffff;strokeColor=#C0392B;arcSize=10;align=center;verticalAlign=middle;fontSize=12;";
pub const NODE_NETWORKING: &str = "rounded=1;whiteSpace=wrap;html=1;fillColor=#7B1FA2;fontColor=#ffffff;strokeColor=#6A1B9A;arcSize=10;align=center;verticalAlign=middle;fontSize=12;";
pub const NODE_MONITORING: &str = "rounded=1;whiteSpace=wrap;html=1;fillColor=#999999;fontColor=#ffffff;strokeColor=#8A8A8A;arcSize=10;align=center;verticalAlign=middle;fontSize=12;";
pub const NODE_PERSON: &str = "shape=mxgraph.c4.person2;whiteSpace=wrap;html=1;align=center;metaEdit=1;fillColor=#08427B;fontColor=#ffffff;strokeColor=#073763;fontSize=12;";

pub const SHAPE_DECISION: &str = "shape=rhombus;fillColor=#FFF2CC;strokeColor=#D6B656;fontColor=#000000;whiteSpace=wrap;html=1;";
pub const SHAPE_START_END: &str = "ellipse;fillColor=#4CAF50;fontColor=#ffffff;strokeColor=#388E3C;whiteSpace=wrap;html=1;";
pub const SHAPE_ERROR_END: &str = "ellipse;fillColor=#F44336;fontColor=#ffffff;strokeColor=#C0392B;whiteSpace=wrap;html=1;";
pub const SHAPE_PARALLELOGRAM: &str = "shape=parallelogram;fillColor=#E0E0E0;strokeColor=#999999;fontColor=#000000;whiteSpace=wrap;html=1;";
pub const SHAPE_HEXAGON: &str = "shape=hexagon;fillColor=#E0E0E0;strokeColor=#999999;fontColor=#000000;perimeter=hexagonPerimeter2;whiteSpace=wrap;html=1;";
pub const SHAPE_UML_CLASS: &str = "swimlane;fontStyle=1;align=center;startSize=26;html=1;fillColor=#F5F5F5;strokeColor=#999999;fontColor=#000000;";

pub const EDGE_SYNC: &str = "endArrow=blockThin;html=1;fontSize=11;fontColor=#707070;strokeColor=#707070;endFill=1;edgeStyle=orthogonalEdgeStyle;curved=1;";
pub const EDGE_ASYNC_RESPONSE: &str = "endArrow=open;html=1;fontSize=11;fontColor=#707070;strokeColor=#707070;dashed=1;dashPattern=8 4;edgeStyle=orthogonalEdgeStyle;curved=1;";
pub const EDGE_ERROR: &str = "endArrow=blockThin;html=1;fontSize=11;fontColor=#F44336;strokeColor=#F44336;endFill=1;edgeStyle=orthogonalEdgeStyle;curved=1;";
pub const EDGE_ERROR_RESPONSE: &str = "endArrow=open;html=1;fontSize=11;fontColor=#F44336;strokeColor=#F44336;dashed=1;dashPattern=8 4;edgeStyle=orthogonalEdgeStyle;curved=1;";
pub const EDGE_RETRY: &str = "endArrow=blockThin;html=1;fontSize=11;fontColor=#FF9800;strokeColor=#FF9800;dashed=1;dashPattern=8 4;edgeStyle=orthogonalEdgeStyle;curved=1;";
pub const EDGE_ROLLBACK: &str = "endArrow=open;html=1;fontSize=11;fontColor=#F44336;strokeColor=#F44336;dashed=1;dashPattern=8 4;edgeStyle=orthogonalEdgeStyle;curved=1;";
pub const EDGE_DATA_FLOW: &str = "endArrow=blockThin;html=1;fontSize=11;fontColor=#4CAF50;strokeColor=#4CAF50;endFill=1;edgeStyle=orthogonalEdgeStyle;curved=1;";
pub const EDGE_DEPENDENCY: &str = "endArrow=open;html=1;fontSize=10;fontColor=#999999;strokeColor=#999999;dashed=1;dashPattern=2 2;";
pub const EDGE_NUMBERED: &str = "endArrow=blockThin;html=1;fontSize=11;fontColor=#707070;strokeColor=#707070;endFill=1;";
// Interaction messages are not orthogonally routed.
pub const EDGE_SEQ_REQUEST: &str = "endArrow=blockThin;html=1;fontSize=11;fontColor=#707070;strokeColor=#707070;endFill=1;";
pub const EDGE_SEQ_RESPONSE: &str = "endArrow=open;html=1;fontSize=11;fontColor=#707070;strokeColor=#707070;dashed=1;dashPattern=8 4;";
pub const EDGE_SEQ_ERROR: &str = "endArrow=blockThin;html=1;fontSize=11;fontColor=#F44336;strokeColor=#F44336;endFill=1;";

pub const LIFELINE: &str = "endArrow=none;html=1;strokeColor=#CCCCCC;strokeWidth=1;dashed=1;dashPattern=4 4;";

pub const GROUP_SUCCESS: &str = "rounded=1;whiteSpace=wrap;html=1;fillColor=#E8F5E9;strokeColor=#4CAF50;opacity=40;dashed=0;verticalAlign=top;align=left;spacingTop=8;spacingLeft=10;fontSize=14;fontStyle=1;fontColor=#4CAF50;";
pub const GROUP_INFO: &str = "rounded=1;whiteSpace=wrap;html=1;fillColor=#E3F2FD;strokeColor=#2196F3;opacity=40;dashed=0;verticalAlign=top;align=left;spacingTop=8;spacingLeft=10;fontSize=14;fontStyle=1;fontColor=#2196F3;";
pub const GROUP_WARNING: &str = "rounded=1;whiteSpace=wrap;html=1;fillColor=#FFF3E0;strokeColor=#FF9800;opacity=40;dashed=0;verticalAlign=top;align=left;spacingTop=8;spacingLeft=10;fontSize=14;fontStyle=1;fontColor=#FF9800;";
pub const GROUP_DANGER: &str = "rounded=1;whiteSpace=wrap;html=1;fillColor=#FFEBEE;strokeColor=#F44336;opacity=40;dashed=0;verticalAlign=top;align=left;spacingTop=8;spacingLeft=10;fontSize=14;fontStyle=1;fontColor=#F44336;";

pub const ERD_RELATIONAL: &str = "swimlane;fontStyle=1;align=center;startSize=26;html=1;fillColor=#E3F2FD;strokeColor=#438DD5;fontColor=#000000;";
pub const ERD_NOSQL: &str = "swimlane;fontStyle=1;align=center;startSize=26;html=1;fillColor=#FFF3E0;strokeColor=#E8A735;fontColor=#000000;";
pub const ERD_CACHE: &str = "swimlane;fontStyle=1;align=center;startSize=26;html=1;fillColor=#E8F5E9;strokeColor=#4CAF50;fontColor=#000000;";
pub const ERD_SEARCH: &str = "swimlane;fontStyle=1;align=center;startSize=26;html=1;fillColor=#F3E5F5;strokeColor=#7B1FA2;fontColor=#000000;";
pub const ERD_FIELD: &str = "text;html=1;align=left;verticalAlign=middle;strokeColor=none;fillColor=none;fontSize=11;fontColor=#333333;";

/// Appended to a participant's role style.
const PARTICIPANT_SUFFIX: &str = "fontStyle=1;fontSize=11;";

pub fn role_style(role: SemanticRole) -> &'static str {
    match role {
        SemanticRole::Compute => NODE_COMPUTE,
        SemanticRole::Queue | SemanticRole::Messaging => NODE_QUEUE,
        SemanticRole::Database | SemanticRole::Storage => NODE_DATABASE,
        SemanticRole::External => NODE_EXTERNAL,
        SemanticRole::Security => NODE_SECURITY,
        SemanticRole::Networking => NODE_NETWORKING,
        SemanticRole::Monitoring => NODE_MONITORING,
        SemanticRole::Person => NODE_PERSON,
    }
}

/// Shapes without a dedicated style draw as compute boxes.
pub fn shape_style(shape: NodeShape) -> &'static str {
    match shape {
        NodeShape::Diamond => SHAPE_DECISION,
        NodeShape::StartEnd | NodeShape::Circle => SHAPE_START_END,
        NodeShape::ErrorEnd => SHAPE_ERROR_END,
        NodeShape::Parallelogram => SHAPE_PARALLELOGRAM,
        NodeShape::Hexagon => SHAPE_HEXAGON,
        NodeShape::UmlClass => SHAPE_UML_CLASS,
        NodeShape::Cylinder => NODE_DATABASE,
        NodeShape::Person => NODE_PERSON,
        NodeShape::Rect | NodeShape::RoundedRect | NodeShape::Stadium => NODE_COMPUTE,
    }
}

/// Resolution order: explicit override, then role, then shape.
pub fn node_style<'a>(
    style_override: Option<&'a str>,
    role: Option<SemanticRole>,
    shape: NodeShape,
) -> &'a str {
    style_override.unwrap_or_else(|| role.map_or_else(|| shape_style(shape), role_style))
}

pub fn edge_kind_style(kind: EdgeKind) -> &'static str {
    match kind {
        EdgeKind::Sync => EDGE_SYNC,
        EdgeKind::Async => EDGE_ASYNC_RESPONSE,
        EdgeKind::Error => EDGE_ERROR,
        EdgeKind::ErrorResponse => EDGE_ERROR_RESPONSE,
        EdgeKind::Retry => EDGE_RETRY,
        EdgeKind::Rollback => EDGE_ROLLBACK,
        EdgeKind::DataFlow => EDGE_DATA_FLOW,
        EdgeKind::Dependency => EDGE_DEPENDENCY,
        EdgeKind::Numbered => EDGE_NUMBERED,
        EdgeKind::SeqRequest => EDGE_SEQ_REQUEST,
        EdgeKind::SeqResponse => EDGE_SEQ_RESPONSE,
        EdgeKind::SeqError => EDGE_SEQ_ERROR,
    }
}

pub fn group_kind_style(kind: GroupKind) -> &'static str {
    match kind {
        GroupKind::Success => GROUP_SUCCESS,
        GroupKind::Info => GROUP_INFO,
        GroupKind::Warning => GROUP_WARNING,
        GroupKind::Danger => GROUP_DANGER,
    }
}

pub fn store_style(store: StoreKind) -> &'static str {
    match store {
        StoreKind::Relational => ERD_RELATIONAL,
        StoreKind::NoSql => ERD_NOSQL,
        StoreKind::Cache => ERD_CACHE,
        StoreKind::Search => ERD_SEARCH,
    }
}

/// Participant header style: the role style (compute when unknown) with bold small text.
pub fn participant_style(role: Option<SemanticRole>) -> String {
    let base = role_style(role.unwrap_or(SemanticRole::Compute));
    format!("{};{PARTICIPANT_SUFFIX}", base.trim_end_matches(';'))
}
