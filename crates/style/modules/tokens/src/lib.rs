//! Token types for style value slots.
//!
//! Each slot of a composite value is classified by exactly one token type:
//! keyword, length, link, color, function, integer, or number. Matchers are
//! tried in ascending priority order and the first match wins, so the
//! unambiguous literal forms are tested before the permissive numeric ones.

#![forbid(unsafe_code)]

pub mod color;
pub mod dimension;
pub mod function;
pub mod keyword;
pub mod link;
pub mod numeric;

pub use color::ColorToken;
pub use dimension::DimensionToken;
pub use function::FunctionToken;
pub use keyword::KeywordToken;
pub use link::LinkToken;
pub use numeric::{IntegerToken, NumberToken};

use serde::{Deserialize, Serialize};
use style_units::UnitTable;

/// Category of an admissible option for a value slot.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionCategory {
    /// A literal keyword such as `auto` or `solid`.
    Keyword,
    /// A function name such as `translate` or `repeat`.
    Function,
    /// A dimensioned numeric entry such as a length control.
    Dimension,
    /// Anything else (links, free numerics).
    Other,
}

/// One admissible choice for a value slot.
///
/// Options are declared by the property tables and handed to the engine to
/// constrain which keywords and functions are legal per slot; editor
/// controls are populated from the same records. Never mutated after
/// creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptionDefinition {
    /// Display name of the option.
    pub name: String,
    /// The textual value the option stands for.
    pub value: String,
    /// Category used during classification.
    pub category: OptionCategory,
    /// Lower bound for numeric controls, when applicable.
    #[serde(default)]
    pub min: Option<f32>,
    /// Upper bound for numeric controls, when applicable.
    #[serde(default)]
    pub max: Option<f32>,
    /// Nested grammar for composite options, when applicable.
    #[serde(default)]
    pub syntax: Option<String>,
}

impl OptionDefinition {
    /// Create an option with no numeric bounds or nested grammar.
    pub fn new(name: &str, value: &str, category: OptionCategory) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
            category,
            min: None,
            max: None,
            syntax: None,
        }
    }
}

/// A successful classification of one slot by one token type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMatch {
    /// Canonical textual form of the slot.
    pub canonical: String,
    /// Name of the option that matched, when the match was option-driven.
    pub matched_option: Option<String>,
}

impl TokenMatch {
    /// A match carrying only a canonical form.
    pub fn of(canonical: String) -> Self {
        Self {
            canonical,
            matched_option: None,
        }
    }
}

/// A registered token type: classification, canonicalization, and option
/// construction for one category of value syntax.
pub trait TokenType: Send + Sync {
    /// Stable identifier of this token type.
    fn key(&self) -> &'static str;

    /// Ascending-order priority; lower numbers are tried first.
    fn priority(&self) -> u32;

    /// Attempt to classify `slot` given the admissible options for its
    /// position. Returns `None` when the slot does not belong to this type.
    fn classify(&self, slot: &str, options: &[OptionDefinition]) -> Option<TokenMatch>;

    /// Produce the canonical textual form of `slot`. Total and idempotent;
    /// input this type cannot parse canonicalizes to its trimmed self.
    fn canonicalize(&self, slot: &str) -> String;

    /// Build an option record stamped with this type's category.
    fn create_option(&self, name: &str, value: &str) -> OptionDefinition;
}

/// A slot classification together with the key of the type that produced it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassifiedToken {
    /// Key of the token type that matched.
    pub type_key: &'static str,
    /// Canonical textual form of the slot.
    pub canonical: String,
    /// Name of the option that matched, when the match was option-driven.
    pub matched_option: Option<String>,
}

/// Ordered set of token-type matchers.
///
/// Populated once during startup composition; iteration always runs in
/// ascending priority order.
#[derive(Default)]
pub struct TokenRegistry {
    matchers: Vec<Box<dyn TokenType>>,
}

impl TokenRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token type. Re-registering an existing key replaces the
    /// prior matcher (last writer wins, intended for startup composition).
    pub fn register(&mut self, matcher: Box<dyn TokenType>) {
        let key = matcher.key();
        if let Some(position) = self
            .matchers
            .iter()
            .position(|existing| existing.key() == key)
        {
            log::debug!("token type '{key}' re-registered");
            self.matchers[position] = matcher;
        } else {
            self.matchers.push(matcher);
        }
        self.matchers.sort_by_key(|entry| entry.priority());
    }

    /// Classify a slot against the registered matchers in priority order,
    /// returning the first match.
    pub fn classify(&self, slot: &str, options: &[OptionDefinition]) -> Option<ClassifiedToken> {
        for matcher in &self.matchers {
            if let Some(found) = matcher.classify(slot, options) {
                return Some(ClassifiedToken {
                    type_key: matcher.key(),
                    canonical: found.canonical,
                    matched_option: found.matched_option,
                });
            }
        }
        None
    }

    /// Look up a registered token type by key.
    pub fn get(&self, key: &str) -> Option<&dyn TokenType> {
        self.matchers
            .iter()
            .find(|matcher| matcher.key() == key)
            .map(AsRef::as_ref)
    }

    /// Registered keys in priority order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|matcher| matcher.key()).collect()
    }

    /// Whether no matchers are registered.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

/// The standard matcher set over a given unit table.
pub fn default_registry(units: UnitTable) -> TokenRegistry {
    let mut registry = TokenRegistry::new();
    registry.register(Box::new(KeywordToken));
    registry.register(Box::new(DimensionToken::new(units)));
    registry.register(Box::new(LinkToken));
    registry.register(Box::new(ColorToken));
    registry.register(Box::new(FunctionToken));
    registry.register(Box::new(IntegerToken));
    registry.register(Box::new(NumberToken));
    registry
}
