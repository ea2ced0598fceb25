// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::model::{Bounds, Point};

use super::cell::{CellBody, MxCell, MxGraphModel};

/// Formats a coordinate the way the editor writes it: integral values without a fraction.
pub fn format_number(value: f64) -> String {
    const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < EXACT_INTEGER_LIMIT {
        let mut buf = itoa::Buffer::new();
        // `-0.0` formats as "0".
        buf.format(value as i64).to_owned()
    } else {
        value.to_string()
    }
}

struct ModelWriter {
    inner: Writer<Vec<u8>>,
}

impl ModelWriter {
    fn new() -> Self {
        Self { inner: Writer::new(Vec::new()) }
    }

    fn write(&mut self, event: Event<'_>) {
        self.inner.write_event(event).expect("writing xml into memory cannot fail");
    }

    fn open(&mut self, name: &str) {
        self.write(Event::Start(BytesStart::new(name)));
    }

    fn close(&mut self, name: &str) {
        self.write(Event::End(BytesEnd::new(name)));
    }

    fn geometry(&mut self, bounds: &Bounds) {
        let mut tag = BytesStart::new("mxGeometry");
        for (key, value) in [
            ("x", bounds.x),
            ("y", bounds.y),
            ("width", bounds.width),
            ("height", bounds.height),
        ] {
            tag.push_attribute((key, format_number(value).as_str()));
        }
        tag.push_attribute(("as", "geometry"));
        self.write(Event::Empty(tag));
    }

    fn point(&mut self, point: &Point, role: &str) {
        let mut tag = BytesStart::new("mxPoint");
        tag.push_attribute(("x", format_number(point.x).as_str()));
        tag.push_attribute(("y", format_number(point.y).as_str()));
        tag.push_attribute(("as", role));
        self.write(Event::Empty(tag));
    }

    fn relative_geometry() -> BytesStart<'static> {
        let mut tag = BytesStart::new("mxGeometry");
        tag.push_attribute(("relative", "1"));
        tag.push_attribute(("as", "geometry"));
        tag
    }

    fn cell(&mut self, cell: &MxCell) {
        let mut tag = BytesStart::new("mxCell");
        tag.push_attribute(("id", cell.id()));

        if let CellBody::Reserved = cell.body() {
            if let Some(parent) = cell.parent() {
                tag.push_attribute(("parent", parent));
            }
            self.write(Event::Empty(tag));
            return;
        }

        tag.push_attribute(("value", cell.value()));
        tag.push_attribute(("style", cell.style()));
        match cell.body() {
            CellBody::Vertex(_) => tag.push_attribute(("vertex", "1")),
            CellBody::Edge { source, target } => {
                tag.push_attribute(("edge", "1"));
                tag.push_attribute(("source", source.as_str()));
                tag.push_attribute(("target", target.as_str()));
            }
            CellBody::PointEdge { .. } => tag.push_attribute(("edge", "1")),
            CellBody::Reserved => {}
        }
        if let Some(parent) = cell.parent() {
            tag.push_attribute(("parent", parent));
        }
        self.write(Event::Start(tag));

        match cell.body() {
            CellBody::Vertex(bounds) => self.geometry(bounds),
            CellBody::Edge { .. } => self.write(Event::Empty(Self::relative_geometry())),
            CellBody::PointEdge { source, target } => {
                self.write(Event::Start(Self::relative_geometry()));
                self.point(source, "sourcePoint");
                self.point(target, "targetPoint");
                self.close("mxGeometry");
            }
            CellBody::Reserved => {}
        }
        self.close("mxCell");
    }

    fn finish(self) -> String {
        String::from_utf8(self.inner.into_inner()).expect("xml writer only emits utf-8")
    }
}

/// Serializes `model` as compact `<mxGraphModel><root>...</root></mxGraphModel>` markup.
///
/// Attribute values are escaped for double-quoted attributes; labels may therefore contain any
/// text, including markup and quotes.
pub fn write_model(model: &MxGraphModel) -> String {
    let mut writer = ModelWriter::new();
    writer.open("mxGraphModel");
    writer.open("root");
    for cell in model.cells() {
        writer.cell(cell);
    }
    writer.close("root");
    writer.close("mxGraphModel");
    writer.finish()
}
