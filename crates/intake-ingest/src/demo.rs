//! Embedded demonstration batch.
//!
//! Three representative cases exercised by the CLI demo mode and the
//! end-to-end tests: a simple personal return, a Quebec francophone
//! client with Bill 96 exposure, and a multi-jurisdiction corporation.

use serde_json::{Value, json};

/// The demonstration batch as a raw JSON case list.
pub fn sample_batch() -> Value {
    json!([
        {
            "pipeline_id": "PIPE-1736607000001",
            "name": "John Doe",
            "email": "john@example.com",
            "province": "ON",
            "triage": {"service_type": "PERSONAL", "complexity_tier": "SIMPLE",
                       "priority_score": 15, "estimated_time_minutes": 45,
                       "assign_to": "general_queue", "required_forms": ["T1"]},
            "nexus": {"complexity_tier": "STANDARD", "complexity_score": 0,
                      "is_multi_jurisdiction": false, "jurisdictions": []},
            "bill96": {"applies": false, "risk_level": "NONE", "risk_score": 0,
                       "is_francophone": false},
            "finalAnalysis": {"total_complexity_score": 15, "priority_level": "NORMAL",
                              "billing_multiplier": 1.0, "assigned_to": "general_queue",
                              "all_flags": ["COUPLED_RETURN"], "all_required_forms": ["T1"]},
            "documentCollection": {"total_required": 3},
            "received_at": "2026-01-11T10:00:00Z"
        },
        {
            "pipeline_id": "PIPE-1736607000002",
            "name": "Marie Tremblay",
            "email": "marie@example.com",
            "province": "QC",
            "triage": {"service_type": "PERSONAL", "complexity_tier": "MODERATE",
                       "priority_score": 30, "estimated_time_minutes": 75,
                       "assign_to": "staff", "required_forms": ["T1", "TP1"]},
            "nexus": {"complexity_tier": "STANDARD", "complexity_score": 15,
                      "is_multi_jurisdiction": false, "jurisdictions": ["QC"]},
            "bill96": {"applies": true, "risk_level": "MEDIUM", "risk_score": 40,
                       "is_francophone": true},
            "finalAnalysis": {"total_complexity_score": 45, "priority_level": "MEDIUM",
                              "billing_multiplier": 1.25, "assigned_to": "staff",
                              "all_flags": ["QUEBEC_NEXUS", "FRANCOPHONE_CLIENT"],
                              "all_required_forms": ["T1", "TP1"]},
            "documentCollection": {"total_required": 4},
            "received_at": "2026-01-11T11:00:00Z"
        },
        {
            "pipeline_id": "PIPE-1736607000003",
            "name": "Acme Corp",
            "email": "finance@acmecorp.ca",
            "province": "ON",
            "triage": {"service_type": "CORPORATE", "complexity_tier": "COMPLEX",
                       "priority_score": 60, "estimated_time_minutes": 180,
                       "assign_to": "senior_accountant", "required_forms": ["T2"]},
            "nexus": {"complexity_tier": "HIGH", "complexity_score": 55,
                      "is_multi_jurisdiction": true, "jurisdictions": ["ON", "QC", "US-NY"]},
            "bill96": {"applies": false, "risk_level": "NONE", "risk_score": 0,
                       "is_francophone": false},
            "finalAnalysis": {"total_complexity_score": 115, "priority_level": "CRITICAL",
                              "billing_multiplier": 2.0, "assigned_to": "partner",
                              "all_flags": ["CCPC", "MULTI_PROVINCE", "CROSS_BORDER_US_CA"],
                              "all_required_forms": ["T2", "T1135", "1040"]},
            "documentCollection": {"total_required": 6},
            "received_at": "2026-01-11T14:30:00Z"
        }
    ])
}
