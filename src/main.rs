// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Meridio CLI entrypoint.
//!
//! Converts diagram files (or stdin, as `-`) to editor markup, viewer HTML, or IR JSON.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use meridio::config::Config;
use meridio::convert::{Converter, Output};
use meridio::error::{MeridioError, Result};

const STDIN_MARKER: &str = "-";

#[derive(Debug, Parser)]
#[command(name = "meridio", version, about = "Convert Mermaid-style diagram text to draw.io markup")]
struct Cli {
    /// Input files; `-` reads stdin.
    #[arg(required = true, value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// What to produce.
    #[arg(long, value_enum, default_value_t = Output::Xml)]
    emit: Output,

    /// Caption for `--emit figure`.
    #[arg(long)]
    caption: Option<String>,

    /// Output file (single input only). Defaults to stdout.
    #[arg(short, long, conflicts_with = "out_dir")]
    output: Option<PathBuf>,

    /// Directory receiving one file per input, named after the input's stem.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log validation warnings for every input.
    #[arg(long)]
    check: bool,

    /// Log filter, e.g. `debug` or `meridio=trace`. Falls back to `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn validate(&self) -> Result<()> {
        if self.output.is_some() && self.inputs.len() > 1 {
            return Err(MeridioError::InvalidArgs(
                "--output takes a single input; use --out-dir for several".to_owned(),
            ));
        }
        let stdin_inputs = self.inputs.iter().filter(|p| p.as_os_str() == STDIN_MARKER).count();
        if stdin_inputs > 1 {
            return Err(MeridioError::InvalidArgs("stdin (`-`) can be read only once".to_owned()));
        }
        if self.caption.is_some() && self.emit != Output::Figure {
            warn!("--caption only applies to --emit figure");
        }
        Ok(())
    }
}

fn init_logging(level: Option<&str>) {
    let filter = level
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_MARKER {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|err| MeridioError::io("<stdin>", err))?;
        return Ok(text);
    }
    fs::read_to_string(path).map_err(|err| MeridioError::io(path, err))
}

/// `<out_dir>/<input stem>.<ext>`; stdin is named `stdin`.
fn output_path(out_dir: &Path, input: &Path, output: Output) -> PathBuf {
    let stem = if input.as_os_str() == STDIN_MARKER {
        "stdin".into()
    } else {
        input.file_stem().map(|s| s.to_os_string()).unwrap_or_else(|| "diagram".into())
    };
    let mut name = stem;
    name.push(".");
    name.push(output.extension());
    out_dir.join(name)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|err| MeridioError::io(path, err))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    cli.validate()?;

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let converter = Converter::new(config);

    let texts = cli.inputs.iter().map(|path| read_input(path)).collect::<Result<Vec<_>>>()?;
    debug!(inputs = texts.len(), emit = ?cli.emit, "converting");

    if cli.check {
        for (path, text) in cli.inputs.iter().zip(&texts) {
            let ir = converter.to_ir(text);
            for warning in ir.validate() {
                warn!(input = %path.display(), kind = %ir.kind(), "{warning}");
            }
        }
    }

    let outputs = match (cli.emit, cli.caption.as_deref()) {
        (Output::Figure, Some(caption)) => {
            texts.iter().map(|text| converter.to_figure(text, caption)).collect()
        }
        (emit, _) => converter.convert_batch(&texts, emit),
    };

    if let Some(dir) = &cli.out_dir {
        fs::create_dir_all(dir).map_err(|err| MeridioError::io(dir, err))?;
        for (input, contents) in cli.inputs.iter().zip(&outputs) {
            write_file(&output_path(dir, input, cli.emit), contents)?;
        }
        return Ok(());
    }

    if let (Some(path), [contents]) = (&cli.output, outputs.as_slice()) {
        return write_file(path, contents);
    }

    let mut stdout = io::stdout().lock();
    for contents in &outputs {
        writeln!(stdout, "{contents}").map_err(|err| MeridioError::io("<stdout>", err))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
