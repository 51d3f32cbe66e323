//! Startup configuration tables.
//!
//! Unit, shorthand, and property tables ship as JSON and are read once
//! during process startup; the deserialized form is handed to the engine
//! and never touched again.

use crate::engine::StyleEngine;
use crate::property::PropertyDefinition;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use style_shorthand::ShorthandDefinition;
use style_units::UnitDefinition;

/// In-memory form of the engine's startup tables. Every section is
/// optional; missing sections leave the builtin defaults untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StyleTables {
    /// Extra or overriding unit symbols.
    #[serde(default)]
    pub units: Vec<UnitDefinition>,
    /// Extra or overriding shorthand groups.
    #[serde(default)]
    pub shorthands: Vec<ShorthandDefinition>,
    /// Property grammars with their per-slot options.
    #[serde(default)]
    pub properties: Vec<PropertyDefinition>,
}

/// Read startup tables from a JSON file.
///
/// # Errors
/// Fails when the file cannot be read or does not parse as a table
/// document.
pub fn load_style_tables(path: &Path) -> anyhow::Result<StyleTables> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading style tables from {}", path.display()))?;
    let tables: StyleTables = serde_json::from_str(&text)
        .with_context(|| format!("parsing style tables from {}", path.display()))?;
    log::info!(
        "loaded style tables: {} unit(s), {} shorthand(s), {} property grammar(s)",
        tables.units.len(),
        tables.shorthands.len(),
        tables.properties.len()
    );
    Ok(tables)
}

impl StyleEngine {
    /// An engine composed from the builtin defaults extended by the given
    /// tables. Table entries replace builtin entries with the same key.
    pub fn from_tables(tables: StyleTables) -> Self {
        let mut engine = Self::builtin();
        for unit in tables.units {
            engine.register_unit(unit);
        }
        for shorthand in tables.shorthands {
            engine.register_shorthand(shorthand);
        }
        for property in tables.properties {
            engine.register_property(property);
        }
        engine
    }
}
