//! Tests for per-field fallback resolution.

use serde_json::json;

use intake_model::{RawCase, Scalar};
use intake_transform::normalize_case;

fn case_from(value: serde_json::Value) -> RawCase {
    serde_json::from_value(value).unwrap()
}

#[test]
fn empty_case_gets_every_documented_default() {
    let record = normalize_case(&RawCase::default());
    assert_eq!(record.pipeline_id, "UNKNOWN");
    assert_eq!(record.client_name, "Unknown");
    assert_eq!(record.email, "");
    assert_eq!(record.province, "UNKNOWN");
    assert_eq!(record.service_type, "PERSONAL");
    assert_eq!(record.complexity_tier, "SIMPLE");
    assert_eq!(record.triage_score, Scalar::Number(0.0));
    assert_eq!(record.estimated_time_mins, Scalar::Number(45.0));
    assert_eq!(record.nexus_tier, "STANDARD");
    assert_eq!(record.nexus_score, Scalar::Number(0.0));
    assert_eq!(record.is_multi_jurisdiction, Scalar::Bool(false));
    assert_eq!(record.jurisdictions, "");
    assert_eq!(record.bill96_applies, Scalar::Bool(false));
    assert_eq!(record.bill96_risk_level, "NONE");
    assert_eq!(record.bill96_score, Scalar::Number(0.0));
    assert_eq!(record.is_francophone, Scalar::Bool(false));
    assert_eq!(record.total_complexity_score, Scalar::Number(0.0));
    assert_eq!(record.priority_level, "NORMAL");
    assert_eq!(record.billing_multiplier, Scalar::Number(1.0));
    assert_eq!(record.assigned_to, "general_queue");
    assert_eq!(record.docs_required_count, Scalar::Number(0.0));
    assert_eq!(record.all_flags, "");
    assert_eq!(record.required_forms, "");
    // Absent timestamps default to the current time, never to empty.
    assert!(!record.received_at.is_empty());
    assert!(!record.processed_at.is_empty());
}

#[test]
fn direct_stage_value_beats_summary() {
    let record = normalize_case(&case_from(json!({
        "triage": {"service_type": "CORPORATE", "complexity_tier": "COMPLEX"},
        "finalAnalysis": {"triage_summary": {"service_type": "PERSONAL",
                                             "complexity": "SIMPLE"}},
    })));
    assert_eq!(record.service_type, "CORPORATE");
    assert_eq!(record.complexity_tier, "COMPLEX");
}

#[test]
fn summary_value_used_when_direct_is_absent() {
    let record = normalize_case(&case_from(json!({
        "finalAnalysis": {
            "triage_summary": {"service_type": "CORPORATE", "complexity": "MODERATE",
                               "estimated_time": 90},
            "nexus_summary": {"tier": "HIGH", "is_multi_jurisdiction": true,
                              "jurisdictions": ["ON", "QC"]},
            "bill96_summary": {"applies": true, "risk_level": "HIGH", "francophone": true},
            "docs_summary": {"required_count": 5},
        },
    })));
    assert_eq!(record.service_type, "CORPORATE");
    assert_eq!(record.complexity_tier, "MODERATE");
    assert_eq!(record.estimated_time_mins, Scalar::Number(90.0));
    assert_eq!(record.nexus_tier, "HIGH");
    assert_eq!(record.is_multi_jurisdiction, Scalar::Bool(true));
    assert_eq!(record.jurisdictions, "ON, QC");
    assert_eq!(record.bill96_applies, Scalar::Bool(true));
    assert_eq!(record.bill96_risk_level, "HIGH");
    assert_eq!(record.is_francophone, Scalar::Bool(true));
    assert_eq!(record.docs_required_count, Scalar::Number(5.0));
}

#[test]
fn precedence_is_independent_per_field() {
    // risk_level comes from the direct stage while applies falls back to
    // the summary on the same record.
    let record = normalize_case(&case_from(json!({
        "bill96": {"risk_level": "LOW"},
        "finalAnalysis": {"bill96_summary": {"applies": true, "risk_level": "HIGH"}},
    })));
    assert_eq!(record.bill96_risk_level, "LOW");
    assert_eq!(record.bill96_applies, Scalar::Bool(true));
}

#[test]
fn triage_score_and_total_complexity_cross_fallbacks() {
    // triage_score prefers the stage score and falls back to the
    // consolidated total; total_complexity_score is the reverse.
    let both = normalize_case(&case_from(json!({
        "triage": {"priority_score": 30},
        "finalAnalysis": {"total_complexity_score": 115},
    })));
    assert_eq!(both.triage_score, Scalar::Number(30.0));
    assert_eq!(both.total_complexity_score, Scalar::Number(115.0));

    let stage_only = normalize_case(&case_from(json!({
        "triage": {"priority_score": 30},
    })));
    assert_eq!(stage_only.triage_score, Scalar::Number(30.0));
    assert_eq!(stage_only.total_complexity_score, Scalar::Number(30.0));

    let summary_only = normalize_case(&case_from(json!({
        "finalAnalysis": {"total_complexity_score": 115},
    })));
    assert_eq!(summary_only.triage_score, Scalar::Number(115.0));
    assert_eq!(summary_only.total_complexity_score, Scalar::Number(115.0));
}

#[test]
fn scores_without_summary_fallback_default_to_zero() {
    let record = normalize_case(&case_from(json!({
        "finalAnalysis": {"nexus_summary": {"tier": "HIGH"},
                          "bill96_summary": {"risk_level": "HIGH"}},
    })));
    assert_eq!(record.nexus_score, Scalar::Number(0.0));
    assert_eq!(record.bill96_score, Scalar::Number(0.0));
}

#[test]
fn assigned_to_falls_back_to_triage_assignment() {
    let record = normalize_case(&case_from(json!({
        "triage": {"assign_to": "staff"},
    })));
    assert_eq!(record.assigned_to, "staff");

    let consolidated = normalize_case(&case_from(json!({
        "triage": {"assign_to": "staff"},
        "finalAnalysis": {"assigned_to": "partner"},
    })));
    assert_eq!(consolidated.assigned_to, "partner");
}

#[test]
fn required_forms_prefers_consolidated_list() {
    let record = normalize_case(&case_from(json!({
        "triage": {"required_forms": ["T1"]},
        "finalAnalysis": {"all_required_forms": ["T2", "T1135"]},
    })));
    assert_eq!(record.required_forms, "T2, T1135");

    let triage_only = normalize_case(&case_from(json!({
        "triage": {"required_forms": ["T1", "TP1"]},
    })));
    assert_eq!(triage_only.required_forms, "T1, TP1");
}

#[test]
fn empty_lists_join_to_empty_strings() {
    let record = normalize_case(&case_from(json!({
        "nexus": {"jurisdictions": []},
        "finalAnalysis": {"all_flags": []},
    })));
    assert_eq!(record.jurisdictions, "");
    assert_eq!(record.all_flags, "");
}

#[test]
fn present_timestamps_pass_through_unchanged() {
    let record = normalize_case(&case_from(json!({
        "received_at": "2026-01-11T10:00:00Z",
        "finalAnalysis": {"processed_at": "2026-01-11T10:05:00Z"},
    })));
    assert_eq!(record.received_at, "2026-01-11T10:00:00Z");
    assert_eq!(record.processed_at, "2026-01-11T10:05:00Z");
}

#[test]
fn malformed_present_timestamp_is_kept_for_coercion() {
    // The "now" default only covers absence; garbage stays garbage here
    // and nulls out in the table builder.
    let record = normalize_case(&case_from(json!({
        "received_at": "sometime last week",
    })));
    assert_eq!(record.received_at, "sometime last week");
}
