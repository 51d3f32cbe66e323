//! Error taxonomy for value resolution and registry lookups.
//!
//! Failures are recoverable by design: callers fall back to rendering the
//! raw string or flagging the control as invalid. Nothing here should ever
//! take the hosting editor down.

use std::error::Error;
use std::fmt;

/// A raw value failed to classify against its property's declared grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClassificationError {
    /// A slot matched no registered token type.
    UnmatchedSlot {
        /// Zero-based position of the offending slot.
        index: usize,
        /// The slot text as produced by the splitter.
        slot: String,
    },
    /// The produced slot count cannot be reconciled with the declared
    /// syntax, even after reusing the trailing option set.
    SlotCountMismatch {
        /// Slots the declared syntax expects.
        expected: usize,
        /// Slots the raw value produced.
        found: usize,
    },
}

impl fmt::Display for ClassificationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmatchedSlot { index, slot } => {
                write!(formatter, "slot {index} ('{slot}') matched no token type")
            }
            Self::SlotCountMismatch { expected, found } => {
                write!(
                    formatter,
                    "value produced {found} slot(s) where the syntax expects {expected}"
                )
            }
        }
    }
}

impl Error for ClassificationError {}

/// A lookup named a key none of the startup tables know.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistryError {
    /// No token type registered under this key.
    UnknownTokenType(String),
    /// No unit symbol registered under this spelling.
    UnknownUnit(String),
    /// No shorthand group registered under this key.
    UnknownShorthand(String),
    /// No property grammar registered under this key.
    UnknownProperty(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTokenType(key) => write!(formatter, "unknown token type '{key}'"),
            Self::UnknownUnit(symbol) => write!(formatter, "unknown unit symbol '{symbol}'"),
            Self::UnknownShorthand(key) => write!(formatter, "unknown shorthand '{key}'"),
            Self::UnknownProperty(key) => write!(formatter, "unknown property '{key}'"),
        }
    }
}

impl Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offender() {
        let classification = ClassificationError::UnmatchedSlot {
            index: 2,
            slot: "??".to_owned(),
        };
        assert_eq!(
            classification.to_string(),
            "slot 2 ('??') matched no token type"
        );
        let registry = RegistryError::UnknownShorthand("flex".to_owned());
        assert_eq!(registry.to_string(), "unknown shorthand 'flex'");
    }
}
