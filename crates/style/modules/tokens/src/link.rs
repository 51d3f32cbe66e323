//! Link token type.

use crate::{OptionCategory, OptionDefinition, TokenMatch, TokenType};
use url::Url;

/// Unwrap a `url(...)` slot into its raw target text.
fn unwrap_url(text: &str) -> Option<&str> {
    if text.len() >= 5
        && text.as_bytes()[..4].eq_ignore_ascii_case(b"url(")
        && text.ends_with(')')
    {
        return Some(text[4..text.len() - 1].trim());
    }
    None
}

/// Strip one pair of matching surrounding quotes.
fn strip_matching_quotes(text: &str) -> &str {
    let quoted = text.len() >= 2
        && ((text.starts_with('"') && text.ends_with('"'))
            || (text.starts_with('\'') && text.ends_with('\'')));
    if quoted {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// Whether a target must stay quoted inside `url()`.
fn needs_quoting(target: &str) -> bool {
    target.contains(|character: char| {
        character.is_ascii_whitespace()
            || matches!(character, '"' | '\'' | '(' | ')' | ',')
    })
}

/// Canonical `url()` form: quoting is dropped when the target survives
/// unquoted, otherwise the lightest quote style that avoids escaping wins.
fn canonical_wrapped(original: &str, target: &str) -> String {
    if !needs_quoting(target) {
        return format!("url({target})");
    }
    if !target.contains('"') {
        return format!("url(\"{target}\")");
    }
    if !target.contains('\'') {
        return format!("url('{target}')");
    }
    original.to_owned()
}

/// Whether a bare slot (no `url()` wrapper) reads as a URL reference.
///
/// Absolute URLs are validated with the `url` crate; relative references
/// must announce themselves with a path, fragment, or query prefix. Looser
/// heuristics would swallow keywords and numeric literals, which belong to
/// matchers that run later.
fn is_bare_link(text: &str) -> bool {
    if text.is_empty() || text.contains(|character: char| character.is_ascii_whitespace()) {
        return false;
    }
    // Hex colors also start with '#'; those belong to the color matcher.
    if crate::color::is_hex_color(text) {
        return false;
    }
    if Url::parse(text).is_ok() {
        return true;
    }
    ["/", "./", "../", "#", "?"]
        .iter()
        .any(|prefix| text.starts_with(prefix))
}

/// Matches URL references, either bare or wrapped in `url(...)`.
pub struct LinkToken;

impl TokenType for LinkToken {
    fn key(&self) -> &'static str {
        "link"
    }

    fn priority(&self) -> u32 {
        30
    }

    fn classify(&self, slot: &str, _options: &[OptionDefinition]) -> Option<TokenMatch> {
        let trimmed = slot.trim();
        if let Some(inner) = unwrap_url(trimmed) {
            let target = strip_matching_quotes(inner);
            if target.is_empty() {
                return None;
            }
            return Some(TokenMatch::of(canonical_wrapped(trimmed, target)));
        }
        if is_bare_link(trimmed) {
            return Some(TokenMatch::of(trimmed.to_owned()));
        }
        None
    }

    fn canonicalize(&self, slot: &str) -> String {
        let trimmed = slot.trim();
        match unwrap_url(trimmed) {
            Some(inner) => {
                let target = strip_matching_quotes(inner);
                if target.is_empty() {
                    trimmed.to_owned()
                } else {
                    canonical_wrapped(trimmed, target)
                }
            }
            None => trimmed.to_owned(),
        }
    }

    fn create_option(&self, name: &str, value: &str) -> OptionDefinition {
        OptionDefinition::new(name, value, OptionCategory::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_urls_drop_redundant_quotes() {
        let token = LinkToken;
        assert_eq!(
            token.classify("url(\"assets/bg.png\")", &[]),
            Some(TokenMatch::of("url(assets/bg.png)".to_owned()))
        );
        assert_eq!(
            token.classify("URL('https://example.com/a.png')", &[]),
            Some(TokenMatch::of("url(https://example.com/a.png)".to_owned()))
        );
    }

    #[test]
    fn test_wrapped_urls_keep_necessary_quotes() {
        let token = LinkToken;
        assert_eq!(
            token.classify("url(my image.png)", &[]),
            Some(TokenMatch::of("url(\"my image.png\")".to_owned()))
        );
    }

    #[test]
    fn test_bare_links_require_scheme_or_path_prefix() {
        let token = LinkToken;
        assert!(token.classify("https://example.com/x", &[]).is_some());
        assert!(token.classify("./relative.png", &[]).is_some());
        assert!(token.classify("#anchor", &[]).is_some());
        // Keywords and plain file names are not captured.
        assert!(token.classify("auto", &[]).is_none());
        assert!(token.classify("image.png", &[]).is_none());
        assert!(token.classify("two words", &[]).is_none());
    }

    #[test]
    fn test_hex_colors_are_left_to_the_color_matcher() {
        let token = LinkToken;
        assert!(token.classify("#ff0000", &[]).is_none());
        assert!(token.classify("#FFF", &[]).is_none());
        // A fragment that is not hex-shaped still counts.
        assert!(token.classify("#section-2", &[]).is_some());
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        let token = LinkToken;
        for raw in [
            "url( \"a.png\" )",
            "url(my image.png)",
            "url('it\"s.png')",
            "https://example.com/",
            "not-a-link",
        ] {
            let once = token.canonicalize(raw);
            assert_eq!(token.canonicalize(&once), once);
        }
    }
}
