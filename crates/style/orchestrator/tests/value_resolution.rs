#![cfg(test)]
#![allow(
    clippy::missing_errors_doc,
    reason = "Test helpers return Result for clear propagation"
)]
#![allow(
    clippy::missing_panics_doc,
    reason = "Assertions in tests are expected"
)]

use core::error::Error;
use style_orchestrator::{
    MIXED_VALUE, OptionCategory, OptionDefinition, PropertyDefinition, RegistryError, Separator,
    StyleEngine, resolve_longhand, split_value,
};

fn init_logging() {
    #[allow(
        clippy::let_underscore_must_use,
        reason = "An earlier test may already have installed the logger"
    )]
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A margin-side grammar: one length slot that also accepts `auto`.
fn margin_side_property(key: &str) -> PropertyDefinition {
    PropertyDefinition::new(key, "<length>", Separator::Space).with_slot_options(vec![vec![
        OptionDefinition::new("auto", "auto", OptionCategory::Keyword),
    ]])
}

/// An engine with a small editor-like property registry.
fn editor_engine() -> StyleEngine {
    let mut engine = StyleEngine::builtin();
    for side in ["top", "right", "bottom", "left"] {
        engine.register_property(margin_side_property(&format!("margin-{side}")));
    }
    engine.register_property(
        PropertyDefinition::new("grid-template-columns", "<track>", Separator::Space)
            .with_slot_options(vec![vec![
                OptionDefinition::new("repeat", "repeat", OptionCategory::Function),
                OptionDefinition::new("none", "none", OptionCategory::Keyword),
            ]]),
    );
    engine.register_property(
        PropertyDefinition::new("background-image", "<image>", Separator::Comma)
            .with_slot_options(vec![vec![OptionDefinition::new(
                "none",
                "none",
                OptionCategory::Keyword,
            )]]),
    );
    engine
}

#[test]
fn test_split_contract_examples() {
    init_logging();
    assert_eq!(split_value("a [b|c] d|e", '|'), vec!["a [b|c] d", "e"]);
    assert_eq!(split_value("a b | c d", '|'), vec!["a b", "c d"]);
    assert_eq!(split_value("[a|b]|c", '|'), vec!["[a|b]", "c"]);
    assert_eq!(split_value("abc", '|'), vec!["abc"]);
}

#[test]
fn test_keyword_literals_beat_numeric_matchers() -> Result<(), Box<dyn Error>> {
    init_logging();
    let engine = StyleEngine::builtin();
    // A keyword option literally spelled "10" wins over integer and number.
    let property = PropertyDefinition::new("line-count", "<count>", Separator::Space)
        .with_slot_options(vec![vec![OptionDefinition::new(
            "ten",
            "10",
            OptionCategory::Keyword,
        )]]);
    let resolved = engine.resolve(&property, "10")?;
    assert_eq!(resolved.slots[0].token_type_key, "keyword");
    Ok(())
}

#[test]
fn test_longhand_reconciliation_contract() {
    let uniform = ["2px", "2px", "2px", "2px"];
    assert_eq!(resolve_longhand(&uniform), "2px");
    let absent = ["", "", ""];
    assert_eq!(resolve_longhand(&absent), "");
    let divergent = ["2px", "4px"];
    assert_eq!(resolve_longhand(&divergent), MIXED_VALUE);
}

#[test]
fn test_canonicalization_is_idempotent_per_type() -> Result<(), Box<dyn Error>> {
    init_logging();
    let engine = StyleEngine::builtin();
    let samples = [
        ("keyword", vec!["AUTO", "inherit "]),
        ("length", vec!["+010.50px", "0", "not-a-length"]),
        ("link", vec!["url( \"a.png\" )", "https://example.com/"]),
        ("color", vec!["#ABCDEF", "rgb( 1, 2 , 3 )", "tomato"]),
        ("function", vec!["Translate( 1px ,2px )", "stray"]),
        ("integer", vec!["-007", "+12"]),
        ("number", vec!["00.50", ".25"]),
    ];
    for (key, inputs) in samples {
        let token_type = engine.token_type(key)?;
        for input in inputs {
            let once = token_type.canonicalize(input);
            assert_eq!(token_type.canonicalize(&once), once, "{key}: {input}");
        }
    }
    Ok(())
}

#[test]
fn test_margin_shorthand_flow_end_to_end() -> Result<(), Box<dyn Error>> {
    init_logging();
    let engine = editor_engine();
    let longhands = engine.expand_shorthand("margin")?;
    assert_eq!(longhands.len(), 4);

    // All four sides agree: the shorthand control shows the shared value.
    let mut canonical_sides = Vec::new();
    for longhand in longhands {
        let property = engine.property(longhand)?;
        let resolved = engine.resolve(property, " 2.0px ")?;
        canonical_sides.push(resolved.display_value());
    }
    assert_eq!(resolve_longhand(&canonical_sides), "2px");

    // One side diverges: the shorthand control shows the mixed state.
    canonical_sides[2] = "4px".to_owned();
    assert_eq!(resolve_longhand(&canonical_sides), MIXED_VALUE);
    Ok(())
}

#[test]
fn test_repeatable_tail_and_round_trip() -> Result<(), Box<dyn Error>> {
    init_logging();
    let engine = editor_engine();
    let property = engine.property("background-image")?;
    let resolved = engine.resolve(property, "url('a.png') ,none,  url(b b.png)")?;
    let keys: Vec<&str> = resolved
        .slots
        .iter()
        .map(|slot| slot.token_type_key.as_str())
        .collect();
    assert_eq!(keys, vec!["link", "keyword", "link"]);
    assert_eq!(
        resolved.display_value(),
        "url(a.png), none, url(\"b b.png\")"
    );

    // The canonical display value is a fixed point of resolution.
    let again = engine.resolve(property, &resolved.display_value())?;
    let and_again = engine.resolve(property, &again.display_value())?;
    assert_eq!(again, and_again);
    assert_eq!(again.display_value(), resolved.display_value());
    Ok(())
}

#[test]
fn test_grid_tracks_mix_functions_and_dimensions() -> Result<(), Box<dyn Error>> {
    init_logging();
    let engine = editor_engine();
    let property = engine.property("grid-template-columns")?;
    let resolved = engine.resolve(property, "REPEAT( 2 , 1fr ) 10px")?;
    let keys: Vec<&str> = resolved
        .slots
        .iter()
        .map(|slot| slot.token_type_key.as_str())
        .collect();
    assert_eq!(keys, vec!["function", "length"]);
    assert_eq!(resolved.display_value(), "repeat(2, 1fr) 10px");
    Ok(())
}

#[test]
fn test_unknown_property_is_a_registry_error() {
    let engine = editor_engine();
    assert_eq!(
        engine.property("perspective").err(),
        Some(RegistryError::UnknownProperty("perspective".to_owned()))
    );
}
