// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end conversion: text → IR → layout → markup → embeddable HTML.

use rayon::prelude::*;
use tracing::debug;

use crate::config::Config;
use crate::embed;
use crate::format::{self, parse_diagram};
use crate::layout::auto_layout;
use crate::model::{DiagramIr, DiagramKind};
use crate::render::{self, MxGraphModel};

/// What a conversion produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Output {
    /// Raw `mxGraphModel` markup.
    #[default]
    Xml,
    /// Viewer `<div>` with the markup embedded.
    Html,
    /// The viewer `<div>` inside a `<figure>`.
    Figure,
    /// The laid-out IR as JSON.
    Ir,
}

impl Output {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Xml => "drawio",
            Self::Html | Self::Figure => "html",
            Self::Ir => "json",
        }
    }
}

/// Runs the pipeline with one configuration. Cheap to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: Config,
}

impl Converter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses `text` and lays the result out.
    pub fn to_ir(&self, text: &str) -> DiagramIr {
        let mut ir = parse_diagram(text);
        debug!(
            kind = %ir.kind(),
            nodes = ir.node_count(),
            participants = ir.participants().len(),
            edges = ir.edges().len(),
            groups = ir.groups().len(),
            "parsed diagram"
        );
        self.layout(&mut ir);
        ir
    }

    pub fn layout(&self, ir: &mut DiagramIr) {
        auto_layout(ir, &self.config.layout);
    }

    pub fn to_model(&self, ir: &DiagramIr) -> MxGraphModel {
        render::generate(ir)
    }

    pub fn to_xml(&self, text: &str) -> String {
        render::render_xml(&self.to_ir(text))
    }

    pub fn to_html(&self, text: &str) -> String {
        embed::embed(&self.to_xml(text), &self.config.viewer)
    }

    pub fn to_figure(&self, text: &str, caption: &str) -> String {
        embed::figure(&self.to_html(text), caption)
    }

    /// Converts one input to `output`. Figures are produced without a caption.
    pub fn convert(&self, text: &str, output: Output) -> String {
        match output {
            Output::Xml => self.to_xml(text),
            Output::Html => self.to_html(text),
            Output::Figure => self.to_figure(text, ""),
            Output::Ir => {
                serde_json::to_string_pretty(&self.to_ir(text)).expect("IR serializes to JSON")
            }
        }
    }

    /// Converts independent inputs in parallel; results keep input order.
    pub fn convert_batch(&self, inputs: &[String], output: Output) -> Vec<String> {
        inputs.par_iter().map(|text| self.convert(text, output)).collect()
    }
}

/// Classifies `text` from its header line.
pub fn detect_kind(text: &str) -> DiagramKind {
    format::detect_kind(text)
}

/// Markup for `text` with the default configuration.
pub fn mermaid_to_xml(text: &str) -> String {
    Converter::default().to_xml(text)
}

/// Embeddable viewer element for `text` with the default configuration.
pub fn mermaid_to_html(text: &str) -> String {
    Converter::default().to_html(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{detect_kind, mermaid_to_html, mermaid_to_xml, Converter, Output};
    use crate::config::Config;
    use crate::model::DiagramKind;

    const FLOW: &str = "graph TD\n A[Start] --> B[End]";

    #[test]
    fn facade_functions_use_default_configuration() {
        assert_eq!(detect_kind(FLOW), DiagramKind::Flowchart);
        assert_eq!(mermaid_to_xml(FLOW), Converter::default().to_xml(FLOW));
        assert!(mermaid_to_html(FLOW).starts_with("<div class=\"mxgraph\" data-mxgraph='{"));
    }

    #[test]
    fn to_ir_returns_laid_out_geometry() {
        let ir = Converter::default().to_ir(FLOW);
        let ys = ir.nodes().map(|n| n.bounds().y).collect::<Vec<_>>();
        assert_eq!(ys, vec![50.0, 190.0]);
    }

    #[test]
    fn configuration_reaches_layout_and_viewer() {
        let config = Config::from_toml_str("[layout]\nnode_spacing_v = 10.0\n[viewer]\ntoolbar = \"zoom\"")
            .expect("valid config");
        let converter = Converter::new(config);

        let ir = converter.to_ir(FLOW);
        assert_eq!(ir.node("B").map(|n| n.bounds().y), Some(140.0));
        assert!(converter.to_html(FLOW).contains(r#""toolbar":"zoom","#));
    }

    #[test]
    fn figure_wraps_the_viewer_element() {
        let converter = Converter::default();
        let figure = converter.to_figure(FLOW, "Flow");
        assert!(figure.starts_with("<figure class=\"drawio-diagram\">\n  <div class=\"mxgraph\""));
        assert!(figure.ends_with("  <figcaption>Flow</figcaption>\n</figure>"));
        assert_eq!(converter.convert(FLOW, Output::Figure), converter.to_figure(FLOW, ""));
    }

    #[test]
    fn ir_output_is_json() {
        let json = Converter::default().convert(FLOW, Output::Ir);
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["kind"], "flowchart");
    }

    #[test]
    fn batch_keeps_input_order() {
        let inputs = vec![
            FLOW.to_owned(),
            "sequenceDiagram\nA->>B: hi".to_owned(),
            "erDiagram\nA ||--o{ B : has".to_owned(),
        ];
        let converter = Converter::default();
        let batch = converter.convert_batch(&inputs, Output::Xml);
        let serial = inputs.iter().map(|text| converter.to_xml(text)).collect::<Vec<_>>();
        assert_eq!(batch, serial);
    }
}
