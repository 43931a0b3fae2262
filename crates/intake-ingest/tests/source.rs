//! Tests for input shape resolution and lenient case decoding.

use std::io::Write;

use serde_json::json;

use intake_ingest::{cases_from_value, load_cases_from_path, resolve_case_values, sample_batch};
use intake_model::IntakeError;

#[test]
fn bare_list_is_the_case_list() {
    let values = resolve_case_values(json!([{"pipeline_id": "A"}, {"pipeline_id": "B"}])).unwrap();
    assert_eq!(values.len(), 2);
}

#[test]
fn cases_key_is_used_when_present() {
    let values =
        resolve_case_values(json!({"cases": [{"pipeline_id": "A"}], "data": "ignored"})).unwrap();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0]["pipeline_id"], "A");
}

#[test]
fn data_key_accepts_a_list() {
    let values = resolve_case_values(json!({"data": [{}, {}, {}]})).unwrap();
    assert_eq!(values.len(), 3);
}

#[test]
fn data_key_wraps_a_single_mapping() {
    let values = resolve_case_values(json!({"data": {"pipeline_id": "SOLO"}})).unwrap();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0]["pipeline_id"], "SOLO");
}

#[test]
fn plain_mapping_is_a_single_case() {
    let values = resolve_case_values(json!({"pipeline_id": "ONLY", "province": "ON"})).unwrap();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0]["province"], "ON");
}

#[test]
fn scalar_top_level_is_a_shape_error() {
    for bad in [json!(42), json!("cases"), json!(true), json!(null)] {
        let error = resolve_case_values(bad).unwrap_err();
        assert!(matches!(error, IntakeError::InputShape(_)));
    }
}

#[test]
fn non_list_cases_key_is_a_shape_error() {
    let error = resolve_case_values(json!({"cases": "three of them"})).unwrap_err();
    assert!(matches!(error, IntakeError::InputShape(_)));
}

#[test]
fn malformed_case_degrades_to_defaults() {
    let cases = cases_from_value(json!([{"pipeline_id": "OK"}, "not-a-case"])).unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].pipeline_id.as_deref(), Some("OK"));
    assert!(cases[1].pipeline_id.is_none());
}

#[test]
fn loads_cases_from_a_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"cases": [{{"pipeline_id": "FILE-1"}}, {{"pipeline_id": "FILE-2"}}]}}"#
    )
    .unwrap();
    let cases = load_cases_from_path(file.path()).unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[1].pipeline_id.as_deref(), Some("FILE-2"));
}

#[test]
fn missing_file_is_an_io_error() {
    let error = load_cases_from_path(std::path::Path::new("/no/such/export.json")).unwrap_err();
    assert!(matches!(error, IntakeError::Io(_)));
}

#[test]
fn sample_batch_has_three_cases_in_order() {
    let cases = cases_from_value(sample_batch()).unwrap();
    assert_eq!(cases.len(), 3);
    assert_eq!(cases[0].pipeline_id.as_deref(), Some("PIPE-1736607000001"));
    assert_eq!(cases[1].name.as_deref(), Some("Marie Tremblay"));
    assert_eq!(cases[2].name.as_deref(), Some("Acme Corp"));
}
