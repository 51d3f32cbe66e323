//! Function token type.

use crate::{OptionCategory, OptionDefinition, TokenMatch, TokenType};
use style_split::split_value;

/// Split a `name(args)` call into its name and raw argument text.
///
/// The name must be non-empty and consist of ASCII alphanumerics, `-`, or
/// `_`; the closing parenthesis must terminate the slot.
pub(crate) fn split_call(text: &str) -> Option<(&str, &str)> {
    let open = text.find('(')?;
    if open == 0 || !text.ends_with(')') || text.len() < open + 2 {
        return None;
    }
    let name = &text[..open];
    let valid_name = name
        .chars()
        .all(|character| character.is_ascii_alphanumeric() || character == '-' || character == '_');
    if !valid_name {
        return None;
    }
    Some((name, &text[open + 1..text.len() - 1]))
}

/// Re-serialize a call with a lower-cased name and a single space after each
/// top-level argument comma. Nested calls and bracket groups are respected.
pub(crate) fn normalize_call(name: &str, args: &str) -> String {
    let parts: Vec<String> = split_value(args, ',')
        .iter()
        .map(|part| collapse_whitespace(part))
        .collect();
    format!("{}({})", name.to_ascii_lowercase(), parts.join(", "))
}

/// Collapse ASCII whitespace runs inside one argument to single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_ascii_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Matches `name(args)` calls whose name is declared among a slot's options
/// with category `function`.
pub struct FunctionToken;

impl TokenType for FunctionToken {
    fn key(&self) -> &'static str {
        "function"
    }

    fn priority(&self) -> u32 {
        50
    }

    fn classify(&self, slot: &str, options: &[OptionDefinition]) -> Option<TokenMatch> {
        let trimmed = slot.trim();
        let (name, args) = split_call(trimmed)?;
        options
            .iter()
            .filter(|option| option.category == OptionCategory::Function)
            .find(|option| {
                option.value.eq_ignore_ascii_case(name) || option.name.eq_ignore_ascii_case(name)
            })
            .map(|option| TokenMatch {
                canonical: normalize_call(name, args),
                matched_option: Some(option.name.clone()),
            })
    }

    fn canonicalize(&self, slot: &str) -> String {
        let trimmed = slot.trim();
        match split_call(trimmed) {
            Some((name, args)) => normalize_call(name, args),
            None => trimmed.to_owned(),
        }
    }

    fn create_option(&self, name: &str, value: &str) -> OptionDefinition {
        OptionDefinition::new(name, value, OptionCategory::Function)
    }
}
