//! Integer and number token types, plus the shared numeric canonicalizer.

use crate::{OptionCategory, OptionDefinition, TokenMatch, TokenType};

/// Canonical text of an optionally signed decimal literal.
///
/// Strips a redundant leading `+`, superfluous leading zeros, trailing
/// fraction zeros, and a trailing decimal point; a bare or dotted zero
/// collapses to `0` without sign. Returns `None` when `text` is not a
/// decimal literal.
pub(crate) fn canonical_number(text: &str) -> Option<String> {
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if unsigned.is_empty() {
        return None;
    }
    let (integer_text, fraction_text) = match unsigned.split_once('.') {
        Some((integer_part, fraction_part)) => (integer_part, fraction_part),
        None => (unsigned, ""),
    };
    let all_digits =
        |part: &str| part.chars().all(|character| character.is_ascii_digit());
    if !all_digits(integer_text) || !all_digits(fraction_text) {
        return None;
    }
    if integer_text.is_empty() && fraction_text.is_empty() {
        return None;
    }

    let integer_trimmed = integer_text.trim_start_matches('0');
    let integer_canonical = if integer_trimmed.is_empty() {
        "0"
    } else {
        integer_trimmed
    };
    let fraction_canonical = fraction_text.trim_end_matches('0');

    let mut canonical = String::new();
    let is_zero = integer_canonical == "0" && fraction_canonical.is_empty();
    if negative && !is_zero {
        canonical.push('-');
    }
    canonical.push_str(integer_canonical);
    if !fraction_canonical.is_empty() {
        canonical.push('.');
        canonical.push_str(fraction_canonical);
    }
    Some(canonical)
}

/// Canonical text of an optionally signed integer literal (no fraction).
fn canonical_integer(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.contains('.') {
        return None;
    }
    canonical_number(trimmed)
}

/// Matches signed integer literals.
pub struct IntegerToken;

impl TokenType for IntegerToken {
    fn key(&self) -> &'static str {
        "integer"
    }

    fn priority(&self) -> u32 {
        60
    }

    fn classify(&self, slot: &str, _options: &[OptionDefinition]) -> Option<TokenMatch> {
        canonical_integer(slot).map(TokenMatch::of)
    }

    fn canonicalize(&self, slot: &str) -> String {
        canonical_integer(slot).unwrap_or_else(|| slot.trim().to_owned())
    }

    fn create_option(&self, name: &str, value: &str) -> OptionDefinition {
        OptionDefinition::new(name, value, OptionCategory::Other)
    }
}

/// Matches any signed decimal literal, with or without a fraction.
///
/// This is the most permissive numeric form and therefore carries the
/// highest priority number: everything else gets a chance first.
pub struct NumberToken;

impl TokenType for NumberToken {
    fn key(&self) -> &'static str {
        "number"
    }

    fn priority(&self) -> u32 {
        70
    }

    fn classify(&self, slot: &str, _options: &[OptionDefinition]) -> Option<TokenMatch> {
        canonical_number(slot).map(TokenMatch::of)
    }

    fn canonicalize(&self, slot: &str) -> String {
        canonical_number(slot).unwrap_or_else(|| slot.trim().to_owned())
    }

    fn create_option(&self, name: &str, value: &str) -> OptionDefinition {
        OptionDefinition::new(name, value, OptionCategory::Other)
    }
}
