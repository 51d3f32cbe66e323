//! Color token type.

use crate::function::{normalize_call, split_call};
use crate::{OptionCategory, OptionDefinition, TokenMatch, TokenType};

/// Hex color forms: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`.
pub(crate) fn is_hex_color(text: &str) -> bool {
    text.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 4 | 6 | 8)
            && digits.chars().all(|character| character.is_ascii_hexdigit())
    })
}

/// Whether a call name is one of the supported color function notations.
fn is_color_function(name: &str) -> bool {
    ["rgb", "rgba", "hsl", "hsla"]
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(name))
}

/// Matches hex colors, `rgb()/rgba()/hsl()/hsla()` notations, and named
/// colors declared among a slot's options.
///
/// Function forms are validated by `csscolorparser` before they count;
/// malformed channels fall through to later matchers. Canonical form is
/// lower-case hex for hex input, otherwise the function form with
/// normalized whitespace.
pub struct ColorToken;

impl TokenType for ColorToken {
    fn key(&self) -> &'static str {
        "color"
    }

    fn priority(&self) -> u32 {
        40
    }

    fn classify(&self, slot: &str, options: &[OptionDefinition]) -> Option<TokenMatch> {
        let trimmed = slot.trim();
        if is_hex_color(trimmed) {
            return Some(TokenMatch::of(trimmed.to_ascii_lowercase()));
        }
        if let Some((name, args)) = split_call(trimmed)
            && is_color_function(name)
        {
            if csscolorparser::parse(trimmed).is_ok() {
                return Some(TokenMatch::of(normalize_call(name, args)));
            }
            return None;
        }
        // Named colors count only when the property declares them as options.
        options
            .iter()
            .find(|option| option.value.eq_ignore_ascii_case(trimmed))
            .filter(|_option| csscolorparser::parse(trimmed).is_ok())
            .map(|option| TokenMatch {
                canonical: trimmed.to_ascii_lowercase(),
                matched_option: Some(option.name.clone()),
            })
    }

    fn canonicalize(&self, slot: &str) -> String {
        let trimmed = slot.trim();
        if is_hex_color(trimmed) {
            return trimmed.to_ascii_lowercase();
        }
        if let Some((name, args)) = split_call(trimmed)
            && is_color_function(name)
        {
            return normalize_call(name, args);
        }
        trimmed.to_owned()
    }

    fn create_option(&self, name: &str, value: &str) -> OptionDefinition {
        OptionDefinition::new(name, value, OptionCategory::Other)
    }
}
