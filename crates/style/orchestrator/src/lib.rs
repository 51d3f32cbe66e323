//! Style value resolution for the block editor.
//!
//! This crate composes the style engine out of its module crates: the
//! bracket-aware splitter, the unit table, the priority-ordered token
//! matchers, and the shorthand groups. Collaborating editor code talks to
//! [`StyleEngine`] (or the free functions re-exported here) and treats every
//! failure as recoverable.

#![forbid(unsafe_code)]

mod engine;
mod error;
mod property;
mod resolver;
pub mod tables;

pub use engine::StyleEngine;
pub use error::{ClassificationError, RegistryError};
pub use property::{PropertyDefinition, PropertyRegistry};
pub use resolver::{ResolvedSlot, ResolvedValue, resolve_value};
pub use tables::{StyleTables, load_style_tables};

// Re-exports so collaborators depend on one crate.
pub use style_shorthand::{MIXED_VALUE, ShorthandDefinition, ShorthandTable, resolve_longhand};
pub use style_split::{Separator, split_value};
pub use style_tokens::{
    ClassifiedToken, OptionCategory, OptionDefinition, TokenMatch, TokenRegistry, TokenType,
    default_registry,
};
pub use style_units::{DimensionGroup, UnitDefinition, UnitTable};
