//! Dimension (length) token type.

use crate::numeric::canonical_number;
use crate::{OptionCategory, OptionDefinition, TokenMatch, TokenType};
use style_units::UnitTable;

/// Matches signed decimal literals carrying a registered unit symbol, or
/// the unitless zero.
///
/// The key stays `length` for historical reasons even though the unit table
/// also covers percentage, angle, and flex symbols.
pub struct DimensionToken {
    units: UnitTable,
}

impl DimensionToken {
    /// A dimension matcher over the given unit table.
    pub fn new(units: UnitTable) -> Self {
        Self { units }
    }

    /// Canonical form of a dimension slot, when it is one.
    fn canonical_dimension(&self, slot: &str) -> Option<String> {
        let trimmed = slot.trim();
        let (numeric_text, unit_text) = split_numeric_prefix(trimmed);
        let numeric_canonical = canonical_number(numeric_text)?;
        if unit_text.is_empty() {
            // Only the zero length may omit its unit.
            if numeric_canonical == "0" {
                return Some(numeric_canonical);
            }
            return None;
        }
        self.units.dimension(unit_text)?;
        Some(format!(
            "{numeric_canonical}{}",
            unit_text.to_ascii_lowercase()
        ))
    }
}

/// Split a slot into its leading numeric literal and the trailing unit text.
fn split_numeric_prefix(text: &str) -> (&str, &str) {
    let mut boundary = text.len();
    for (index, character) in text.char_indices() {
        let numeric = character.is_ascii_digit()
            || character == '.'
            || (index == 0 && (character == '+' || character == '-'));
        if !numeric {
            boundary = index;
            break;
        }
    }
    text.split_at(boundary)
}

impl TokenType for DimensionToken {
    fn key(&self) -> &'static str {
        "length"
    }

    fn priority(&self) -> u32 {
        20
    }

    fn classify(&self, slot: &str, _options: &[OptionDefinition]) -> Option<TokenMatch> {
        self.canonical_dimension(slot).map(TokenMatch::of)
    }

    fn canonicalize(&self, slot: &str) -> String {
        self.canonical_dimension(slot)
            .unwrap_or_else(|| slot.trim().to_owned())
    }

    fn create_option(&self, name: &str, value: &str) -> OptionDefinition {
        OptionDefinition::new(name, value, OptionCategory::Dimension)
    }
}
