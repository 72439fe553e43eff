//! Loader for the JSON datasets bundled with content modules.
//!
//! Each dataset is checked against `schema/content_dataset.schema.json` before
//! it is deserialized into the module's entry type, so a broken dataset fails
//! at bootstrap with every schema violation listed instead of surfacing later
//! as missing search results.

use crate::error::ConfigurationError;
use jsonschema::JSONSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::OnceLock;

const DATASET_SCHEMA: &str = include_str!("../schema/content_dataset.schema.json");

static DATASET_VALIDATOR: OnceLock<Result<JSONSchema, String>> = OnceLock::new();

/// Parse, validate, and deserialize a bundled dataset.
///
/// `category` is only used to attribute errors to the right module.
pub fn load_dataset<E: DeserializeOwned>(
    category: &str,
    raw: &str,
) -> Result<Vec<E>, ConfigurationError> {
    let invalid = |details: String| ConfigurationError::InvalidDataset {
        category: category.to_string(),
        details,
    };

    let value: Value =
        serde_json::from_str(raw).map_err(|err| invalid(format!("parsing dataset: {err}")))?;
    validate_against_schema(&value).map_err(invalid)?;
    serde_json::from_value(value).map_err(|err| invalid(format!("decoding entries: {err}")))
}

/// Compiled dataset schema, built on first use and shared afterwards.
fn dataset_validator() -> Result<&'static JSONSchema, String> {
    DATASET_VALIDATOR
        .get_or_init(compile_dataset_schema)
        .as_ref()
        .map_err(Clone::clone)
}

fn compile_dataset_schema() -> Result<JSONSchema, String> {
    let schema: Value = serde_json::from_str(DATASET_SCHEMA)
        .map_err(|err| format!("parsing dataset schema: {err}"))?;
    JSONSchema::compile(&schema).map_err(|err| format!("compiling dataset schema: {err}"))
}

fn validate_against_schema(dataset: &Value) -> Result<(), String> {
    let compiled = dataset_validator()?;
    if let Err(errors) = compiled.validate(dataset) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        return Err(details);
    }
    Ok(())
}
