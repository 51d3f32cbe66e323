//! Composite value resolution.
//!
//! A raw textual value is split into slots with the property's separator,
//! each slot is classified by the token registry in priority order, and the
//! canonical forms are assembled into an ordered token sequence. Resolution
//! is a pure function of its inputs and the injected registries.

use crate::error::ClassificationError;
use crate::property::PropertyDefinition;
use style_split::{Separator, split_value};
use style_tokens::TokenRegistry;

/// One classified slot of a resolved value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedSlot {
    /// The slot text as produced by the splitter.
    pub raw_slot: String,
    /// Key of the token type that classified the slot.
    pub token_type_key: String,
    /// Canonical textual form of the slot.
    pub canonical: String,
}

/// The ordered token sequence a raw value resolved to.
///
/// Constructed per resolution call and immediately consumed by the caller;
/// the engine never retains one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedValue {
    /// Separator the value was split with.
    pub separator: Separator,
    /// Classified slots in source order.
    pub slots: Vec<ResolvedSlot>,
}

impl ResolvedValue {
    /// Join the canonical slot forms back into one display value.
    ///
    /// Resolving the result again yields an identical token sequence.
    pub fn display_value(&self) -> String {
        let canonicals: Vec<&str> = self
            .slots
            .iter()
            .map(|slot| slot.canonical.as_str())
            .collect();
        canonicals.join(self.separator.joiner())
    }
}

/// Resolve `raw_value` against a property's declared grammar.
///
/// Overflow slots beyond the declared option sets reuse the trailing set
/// (repeatable tail patterns); producing fewer slots than the syntax
/// expects is a mismatch.
///
/// # Errors
/// Returns [`ClassificationError::SlotCountMismatch`] when the slot count
/// cannot be reconciled with the declared syntax, and
/// [`ClassificationError::UnmatchedSlot`] when a slot matches no registered
/// token type. Both are recoverable; callers typically fall back to the raw
/// string.
pub fn resolve_value(
    registry: &TokenRegistry,
    property: &PropertyDefinition,
    raw_value: &str,
) -> Result<ResolvedValue, ClassificationError> {
    let slots = split_value(raw_value, property.separator.symbol());
    let expected = property.expected_slots();
    log::trace!(
        "resolving '{raw_value}' for '{}': {} slot(s), {expected} expected",
        property.key,
        slots.len()
    );
    if slots.len() < expected {
        return Err(ClassificationError::SlotCountMismatch {
            expected,
            found: slots.len(),
        });
    }

    let mut resolved = Vec::with_capacity(slots.len());
    for (index, slot) in slots.iter().enumerate() {
        let options = property.options_for_slot(index);
        let Some(token) = registry.classify(slot, options) else {
            log::warn!(
                "property '{}': slot {index} ('{slot}') matched no token type",
                property.key
            );
            return Err(ClassificationError::UnmatchedSlot {
                index,
                slot: slot.clone(),
            });
        };
        resolved.push(ResolvedSlot {
            raw_slot: slot.clone(),
            token_type_key: token.type_key.to_owned(),
            canonical: token.canonical,
        });
    }
    Ok(ResolvedValue {
        separator: property.separator,
        slots: resolved,
    })
}
