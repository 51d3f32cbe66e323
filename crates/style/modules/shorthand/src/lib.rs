//! Shorthand property expansion and longhand reconciliation.
//!
//! A shorthand key expands into an ordered list of longhand keys; the
//! reverse direction reconciles the longhands' current values into the one
//! value a shorthand control can display, or the `mixed` sentinel when the
//! longhands disagree.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentinel display value for divergent longhand sets.
///
/// Editor controls render an indeterminate state from this instead of a
/// misleading single value.
pub const MIXED_VALUE: &str = "mixed";

/// One shorthand group as it appears in startup configuration tables.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShorthandDefinition {
    /// The shorthand property key, e.g. `margin`.
    pub shorthand: String,
    /// Ordered longhand keys the shorthand expands to.
    pub longhands: Vec<String>,
}

/// Mapping between shorthand keys and their longhand expansions.
///
/// Each longhand belongs to exactly one shorthand group; registering a group
/// that claims an already-owned longhand moves it (last writer wins, logged).
#[derive(Clone, Debug, Default)]
pub struct ShorthandTable {
    expansions: HashMap<String, Vec<String>>,
    owners: HashMap<String, String>,
}

impl ShorthandTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default shorthand groups shipped with the engine.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (shorthand, longhands) in [
            ("margin", sides("margin")),
            ("padding", sides("padding")),
            (
                "border-width",
                vec![
                    "border-top-width".to_owned(),
                    "border-right-width".to_owned(),
                    "border-bottom-width".to_owned(),
                    "border-left-width".to_owned(),
                ],
            ),
            (
                "border-color",
                vec![
                    "border-top-color".to_owned(),
                    "border-right-color".to_owned(),
                    "border-bottom-color".to_owned(),
                    "border-left-color".to_owned(),
                ],
            ),
            (
                "border-style",
                vec![
                    "border-top-style".to_owned(),
                    "border-right-style".to_owned(),
                    "border-bottom-style".to_owned(),
                    "border-left-style".to_owned(),
                ],
            ),
            (
                "border-radius",
                vec![
                    "border-top-left-radius".to_owned(),
                    "border-top-right-radius".to_owned(),
                    "border-bottom-right-radius".to_owned(),
                    "border-bottom-left-radius".to_owned(),
                ],
            ),
            (
                "gap",
                vec!["row-gap".to_owned(), "column-gap".to_owned()],
            ),
            (
                "inset",
                vec![
                    "top".to_owned(),
                    "right".to_owned(),
                    "bottom".to_owned(),
                    "left".to_owned(),
                ],
            ),
        ] {
            table.register(ShorthandDefinition {
                shorthand: shorthand.to_owned(),
                longhands,
            });
        }
        table
    }

    /// Build a table from configuration entries.
    pub fn from_definitions(definitions: &[ShorthandDefinition]) -> Self {
        let mut table = Self::new();
        for definition in definitions {
            table.register(definition.clone());
        }
        table
    }

    /// Register one shorthand group. Intended for startup composition only.
    pub fn register(&mut self, definition: ShorthandDefinition) {
        for longhand in &definition.longhands {
            if let Some(previous) = self
                .owners
                .insert(longhand.clone(), definition.shorthand.clone())
                && previous != definition.shorthand
            {
                log::warn!(
                    "longhand '{longhand}' moved from shorthand '{previous}' to '{}'",
                    definition.shorthand
                );
            }
        }
        self.expansions
            .insert(definition.shorthand, definition.longhands);
    }

    /// The ordered longhand keys a shorthand expands to, if registered.
    pub fn expand(&self, shorthand: &str) -> Option<&[String]> {
        self.expansions.get(shorthand).map(Vec::as_slice)
    }

    /// The shorthand that owns a longhand key, if any.
    pub fn shorthand_for(&self, longhand: &str) -> Option<&str> {
        self.owners.get(longhand).map(String::as_str)
    }

    /// Whether any groups are registered.
    pub fn is_empty(&self) -> bool {
        self.expansions.is_empty()
    }
}

/// Four-sided longhand expansion in top/right/bottom/left order.
fn sides(prefix: &str) -> Vec<String> {
    ["top", "right", "bottom", "left"]
        .iter()
        .map(|side| format!("{prefix}-{side}"))
        .collect()
}

/// Reconcile a set of longhand values into one shorthand display value.
///
/// All non-empty values agree ⇒ that value. No non-empty values ⇒ the empty
/// string. Disagreement ⇒ [`MIXED_VALUE`]. Total over any input, including
/// the empty slice.
pub fn resolve_longhand<ValueText: AsRef<str>>(values: &[ValueText]) -> String {
    let mut agreed: Option<&str> = None;
    for value in values {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        match agreed {
            None => agreed = Some(trimmed),
            Some(existing) if existing == trimmed => {}
            Some(_divergent) => return MIXED_VALUE.to_owned(),
        }
    }
    agreed.unwrap_or_default().to_owned()
}
