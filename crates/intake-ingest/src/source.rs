//! Top-level input acceptance.
//!
//! A workflow export arrives in one of four shapes: a bare list of cases,
//! a mapping with a `cases` list, a mapping with a `data` value (list or
//! single case), or a mapping that is itself one case. Anything else is
//! an input-shape error that aborts the run. Individual cases, by
//! contrast, never abort: a malformed case decodes to the all-default
//! case with a warning.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use intake_model::{IntakeError, RawCase, Result};

/// Reads a JSON document from disk and resolves it into a case list.
pub fn load_cases_from_path(path: &Path) -> Result<Vec<RawCase>> {
    let contents = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), "loaded intake export");
    cases_from_value(value)
}

/// Resolves an in-memory JSON value into a case list and decodes it.
pub fn cases_from_value(value: Value) -> Result<Vec<RawCase>> {
    let values = resolve_case_values(value)?;
    Ok(decode_cases(values))
}

/// Applies the documented shape-resolution order, returning the raw case
/// values in input order.
pub fn resolve_case_values(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => {
            if let Some(cases) = map.remove("cases") {
                match cases {
                    Value::Array(items) => Ok(items),
                    other => Err(IntakeError::InputShape(format!(
                        "`cases` must hold a list, found {}",
                        value_kind(&other)
                    ))),
                }
            } else if let Some(data) = map.remove("data") {
                match data {
                    Value::Array(items) => Ok(items),
                    single @ Value::Object(_) => Ok(vec![single]),
                    other => Err(IntakeError::InputShape(format!(
                        "`data` must hold a list or mapping, found {}",
                        value_kind(&other)
                    ))),
                }
            } else {
                Ok(vec![Value::Object(map)])
            }
        }
        other => Err(IntakeError::InputShape(format!(
            "expected a mapping or list at the top level, found {}",
            value_kind(&other)
        ))),
    }
}

/// Decodes each case value leniently. A case of unexpected shape becomes
/// the default (all fallback) case rather than halting the batch.
pub fn decode_cases(values: Vec<Value>) -> Vec<RawCase> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match serde_json::from_value(value) {
            Ok(case) => case,
            Err(error) => {
                warn!(index, %error, "malformed case, substituting defaults");
                RawCase::default()
            }
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
