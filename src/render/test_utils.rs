// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use quick_xml::events::Event;
use quick_xml::Reader;

/// Reads `xml` to the end, panicking on the first syntax error. Returns the element count.
pub(crate) fn count_elements(xml: &str) -> usize {
    let mut reader = Reader::from_str(xml);
    let mut elements = 0;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_) | Event::Empty(_)) => elements += 1,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => panic!("malformed xml at {}: {err}\n{xml}", reader.buffer_position()),
        }
    }
    elements
}

/// Raw (still escaped) value of `name` on the first `tag` element whose `id` is `id`.
pub(crate) fn raw_attribute(xml: &str, tag: &str, id: &str, name: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(el) | Event::Empty(el)) if el.name().as_ref() == tag.as_bytes() => {
                let matches_id = el
                    .try_get_attribute("id")
                    .ok()
                    .flatten()
                    .is_some_and(|attr| attr.value.as_ref() == id.as_bytes());
                if matches_id {
                    return el
                        .try_get_attribute(name)
                        .ok()
                        .flatten()
                        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned());
                }
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}

/// `(id, parent, source, target)` of every `mxCell`, in document order.
pub(crate) fn mx_cells(xml: &str) -> Vec<(String, Option<String>, Option<String>, Option<String>)> {
    let mut reader = Reader::from_str(xml);
    let mut cells = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(el) | Event::Empty(el)) if el.name().as_ref() == b"mxCell" => {
                let attr = |name: &str| {
                    el.try_get_attribute(name)
                        .ok()
                        .flatten()
                        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
                };
                let id = attr("id").unwrap_or_else(|| panic!("mxCell without id\n{xml}"));
                cells.push((id, attr("parent"), attr("source"), attr("target")));
            }
            Ok(Event::Eof) => return cells,
            Ok(_) => {}
            Err(err) => panic!("malformed xml at {}: {err}\n{xml}", reader.buffer_position()),
        }
    }
}
