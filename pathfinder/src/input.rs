use crate::config::GraphSpec;
use crate::parser;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ArgEnum)]
pub enum InputFormat {
    Text,
    Json,
}

impl InputFormat {
    /// `.json` files are JSON, everything else is an edge list.
    pub fn from_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext == "json" => InputFormat::Json,
            _ => InputFormat::Text,
        }
    }
}

pub fn load(path: &Path, format: Option<InputFormat>) -> Result<GraphSpec> {
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    log::info!("loading {} as {:?}", path.display(), format);
    match format {
        InputFormat::Json => GraphSpec::from_json(path),
        InputFormat::Text => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            parser::parse(&source)
                .with_context(|| format!("failed to parse {}", path.display()))
        }
    }
}
