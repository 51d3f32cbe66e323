//! Property grammar declarations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use style_split::{Separator, split_value};
use style_tokens::OptionDefinition;

/// Declared grammar for one editable style property.
///
/// The expected slot count is derived by splitting `syntax` with the same
/// splitter and separator used for values, so grammar and value always
/// divide the same way.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    /// Property key, e.g. `margin-top`.
    pub key: String,
    /// Accepted slot pattern, e.g. `<width> <style> <color>`.
    pub syntax: String,
    /// Top-level separator the grammar splits on.
    pub separator: Separator,
    /// Admissible options per slot position. A trailing entry is reused for
    /// overflow slots, which supports repeatable tail patterns.
    #[serde(default)]
    pub slot_options: Vec<Vec<OptionDefinition>>,
}

impl PropertyDefinition {
    /// A property with no per-slot options declared yet.
    pub fn new(key: &str, syntax: &str, separator: Separator) -> Self {
        Self {
            key: key.to_owned(),
            syntax: syntax.to_owned(),
            separator,
            slot_options: Vec::new(),
        }
    }

    /// Attach per-slot option sets.
    pub fn with_slot_options(mut self, slot_options: Vec<Vec<OptionDefinition>>) -> Self {
        self.slot_options = slot_options;
        self
    }

    /// Number of slots the declared syntax expects.
    pub fn expected_slots(&self) -> usize {
        split_value(&self.syntax, self.separator.symbol()).len()
    }

    /// Options for a slot position, reusing the trailing set for overflow.
    pub fn options_for_slot(&self, index: usize) -> &[OptionDefinition] {
        let last = self.slot_options.len().saturating_sub(1);
        self.slot_options
            .get(index.min(last))
            .map_or(&[], Vec::as_slice)
    }
}

/// Property grammars keyed by property name, declared by the hosting
/// editor's style registry during startup.
#[derive(Clone, Debug, Default)]
pub struct PropertyRegistry {
    by_key: HashMap<String, PropertyDefinition>,
}

impl PropertyRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one property grammar. Re-registering a key replaces the
    /// prior grammar (last writer wins).
    pub fn register(&mut self, definition: PropertyDefinition) {
        if self.by_key.contains_key(&definition.key) {
            log::debug!("property '{}' re-registered", definition.key);
        }
        self.by_key.insert(definition.key.clone(), definition);
    }

    /// Look up a property grammar by key.
    pub fn get(&self, key: &str) -> Option<&PropertyDefinition> {
        self.by_key.get(key)
    }

    /// Whether any grammars are registered.
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
