//! Model and file listings.

use std::path::PathBuf;

use console::style;
use serde::Serialize;

use crate::error::Result;
use crate::models::{ModelKind, ModelRegistry};

/// One registry entry as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelRow {
    pub kind: ModelKind,
    pub name: String,
    pub url: String,
    pub path: PathBuf,
    pub cached: bool,
}

/// Flatten a registry into display rows, swap models first.
pub fn model_rows(registry: &ModelRegistry) -> Vec<ModelRow> {
    registry
        .iter()
        .map(|(kind, name, descriptor)| ModelRow {
            kind,
            name: name.to_string(),
            url: descriptor.url.clone(),
            path: descriptor.path.clone(),
            cached: descriptor.is_cached(),
        })
        .collect()
}

/// Print the registry as a table, or as JSON.
pub fn print_models(registry: &ModelRegistry, json: bool) -> Result<()> {
    let rows = model_rows(registry);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    for row in &rows {
        let status = if row.cached {
            style("cached").green()
        } else {
            style("missing").dim()
        };
        println!(
            "{:<8} {:<width$} {:<7} {}",
            row.kind.to_string(),
            row.name,
            status,
            row.path.display(),
            width = width
        );
    }
    println!("{} model(s)", rows.len());

    Ok(())
}

/// Print listed files one per line, or as a JSON array.
pub fn print_files(files: &[PathBuf], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(files)?);
        return Ok(());
    }

    for file in files {
        println!("{}", file.display());
    }

    Ok(())
}
