//! Keyword token type.

use crate::{OptionCategory, OptionDefinition, TokenMatch, TokenType};

/// Matches literal keywords declared among a slot's admissible options.
///
/// Keywords carry the lowest priority number so that a literal like `auto`
/// (or even one spelled `10`) is never captured by a numeric matcher.
pub struct KeywordToken;

impl TokenType for KeywordToken {
    fn key(&self) -> &'static str {
        "keyword"
    }

    fn priority(&self) -> u32 {
        10
    }

    fn classify(&self, slot: &str, options: &[OptionDefinition]) -> Option<TokenMatch> {
        let trimmed = slot.trim();
        options
            .iter()
            .filter(|option| option.category == OptionCategory::Keyword)
            .find(|option| option.value.eq_ignore_ascii_case(trimmed))
            .map(|option| TokenMatch {
                canonical: option.value.clone(),
                matched_option: Some(option.name.clone()),
            })
    }

    fn canonicalize(&self, slot: &str) -> String {
        slot.trim().to_ascii_lowercase()
    }

    fn create_option(&self, name: &str, value: &str) -> OptionDefinition {
        OptionDefinition::new(name, value, OptionCategory::Keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword_options() -> Vec<OptionDefinition> {
        vec![
            OptionDefinition::new("auto", "auto", OptionCategory::Keyword),
            OptionDefinition::new("repeat", "repeat", OptionCategory::Function),
        ]
    }

    #[test]
    fn test_matches_declared_keywords_case_insensitively() {
        let token = KeywordToken;
        let options = keyword_options();
        let found = token.classify(" AUTO ", &options);
        assert_eq!(
            found,
            Some(TokenMatch {
                canonical: "auto".to_owned(),
                matched_option: Some("auto".to_owned()),
            })
        );
    }

    #[test]
    fn test_ignores_non_keyword_options_and_strangers() {
        let token = KeywordToken;
        let options = keyword_options();
        // "repeat" is declared, but as a function option.
        assert!(token.classify("repeat", &options).is_none());
        assert!(token.classify("solid", &options).is_none());
        assert!(token.classify("auto", &[]).is_none());
    }

    #[test]
    fn test_canonicalize_lowercases() {
        let token = KeywordToken;
        assert_eq!(token.canonicalize("  Inherit "), "inherit");
        assert_eq!(token.canonicalize("inherit"), "inherit");
    }
}
