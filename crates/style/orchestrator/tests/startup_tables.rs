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
use std::io::Write;
use style_orchestrator::{StyleEngine, load_style_tables};

fn init_logging() {
    #[allow(
        clippy::let_underscore_must_use,
        reason = "An earlier test may already have installed the logger"
    )]
    let _ = env_logger::builder().is_test(true).try_init();
}

const TABLE_DOCUMENT: &str = r#"{
    "units": [
        { "symbol": "x", "group": "length" }
    ],
    "shorthands": [
        { "shorthand": "overscroll-behavior",
          "longhands": ["overscroll-behavior-x", "overscroll-behavior-y"] }
    ],
    "properties": [
        {
            "key": "letter-spacing",
            "syntax": "<length>",
            "separator": "space",
            "slot_options": [[
                { "name": "normal", "value": "normal", "category": "keyword" }
            ]]
        }
    ]
}"#;

#[test]
fn test_tables_load_from_disk_and_compose() -> Result<(), Box<dyn Error>> {
    init_logging();
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(TABLE_DOCUMENT.as_bytes())?;

    let tables = load_style_tables(file.path())?;
    assert_eq!(tables.units.len(), 1);

    let engine = StyleEngine::from_tables(tables);
    assert!(engine.unit_dimension("x").is_some());
    assert!(engine.expand_shorthand("overscroll-behavior").is_ok());

    let property = engine.property("letter-spacing")?;
    let keyword = engine.resolve(property, "Normal")?;
    assert_eq!(keyword.display_value(), "normal");
    let length = engine.resolve(property, "1.5x")?;
    assert_eq!(length.slots[0].token_type_key, "length");
    Ok(())
}

#[test]
fn test_missing_table_file_is_an_error() -> Result<(), Box<dyn Error>> {
    init_logging();
    let directory = tempfile::tempdir()?;
    let absent = directory.path().join("no-such-tables.json");
    assert!(load_style_tables(&absent).is_err());
    Ok(())
}

#[test]
fn test_malformed_table_file_is_an_error() -> Result<(), Box<dyn Error>> {
    init_logging();
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(b"{ not json")?;
    assert!(load_style_tables(file.path()).is_err());
    Ok(())
}
