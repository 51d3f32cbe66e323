//! Unit symbols and the dimension groups they belong to.
//!
//! The table is populated once at startup (builtin defaults, optionally
//! extended from configuration tables) and is read-only afterwards. Every
//! symbol maps to exactly one dimension group.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The dimension a unit symbol measures.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionGroup {
    /// Absolute or font/viewport-relative lengths (`px`, `em`, `vw`, …).
    Length,
    /// Percentages (`%`).
    Percentage,
    /// Angles (`deg`, `rad`, `grad`, `turn`).
    Angle,
    /// Fractional flex units (`fr`).
    Flex,
}

impl fmt::Display for DimensionGroup {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Length => "length",
            Self::Percentage => "percentage",
            Self::Angle => "angle",
            Self::Flex => "flex",
        };
        formatter.write_str(name)
    }
}

/// One unit symbol together with its dimension group, as it appears in
/// startup configuration tables.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// Unit symbol as written after the numeric part, e.g. `px` or `%`.
    pub symbol: String,
    /// Dimension group the symbol belongs to.
    pub group: DimensionGroup,
}

/// Lookup table from unit symbols to dimension groups.
///
/// Lookups are ASCII-case-insensitive; symbols are stored lower-cased.
#[derive(Clone, Debug, Default)]
pub struct UnitTable {
    by_symbol: HashMap<String, DimensionGroup>,
}

impl UnitTable {
    /// An empty table with no registered symbols.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default unit set shipped with the engine.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for symbol in [
            "px", "em", "rem", "vw", "vh", "vmin", "vmax", "ch", "ex", "cm", "mm", "in", "pt",
            "pc", "q",
        ] {
            table.register(UnitDefinition {
                symbol: symbol.to_owned(),
                group: DimensionGroup::Length,
            });
        }
        table.register(UnitDefinition {
            symbol: "%".to_owned(),
            group: DimensionGroup::Percentage,
        });
        for symbol in ["deg", "rad", "grad", "turn"] {
            table.register(UnitDefinition {
                symbol: symbol.to_owned(),
                group: DimensionGroup::Angle,
            });
        }
        table.register(UnitDefinition {
            symbol: "fr".to_owned(),
            group: DimensionGroup::Flex,
        });
        table
    }

    /// Build a table from configuration entries. Later entries replace
    /// earlier ones for the same symbol.
    pub fn from_definitions(definitions: &[UnitDefinition]) -> Self {
        let mut table = Self::new();
        for definition in definitions {
            table.register(definition.clone());
        }
        table
    }

    /// Register one unit symbol. Re-registering a symbol replaces its group
    /// (last writer wins, intended for startup composition only).
    pub fn register(&mut self, definition: UnitDefinition) {
        let symbol = definition.symbol.to_ascii_lowercase();
        if let Some(previous) = self.by_symbol.insert(symbol, definition.group)
            && previous != definition.group
        {
            log::debug!(
                "unit symbol '{}' moved from {previous} to {}",
                definition.symbol,
                definition.group
            );
        }
    }

    /// Look up the dimension group for a unit symbol, if registered.
    pub fn dimension(&self, symbol: &str) -> Option<DimensionGroup> {
        self.by_symbol.get(&symbol.to_ascii_lowercase()).copied()
    }

    /// Whether any symbols are registered.
    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}
