//! Flat normalized record, one per raw case.

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;

/// Output of the record normalizer: every field populated, with numeric,
/// boolean, and temporal fields still held as [`Scalar`]/text so the
/// table builder applies coercion (unparsable values become nulls there,
/// not here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub pipeline_id: String,
    pub client_name: String,
    pub email: String,
    pub province: String,
    pub service_type: String,
    pub complexity_tier: String,
    pub triage_score: Scalar,
    pub estimated_time_mins: Scalar,
    pub nexus_tier: String,
    pub nexus_score: Scalar,
    pub is_multi_jurisdiction: Scalar,
    pub jurisdictions: String,
    pub bill96_applies: Scalar,
    pub bill96_risk_level: String,
    pub bill96_score: Scalar,
    pub is_francophone: Scalar,
    pub total_complexity_score: Scalar,
    pub priority_level: String,
    pub billing_multiplier: Scalar,
    pub assigned_to: String,
    pub docs_required_count: Scalar,
    pub received_at: String,
    pub processed_at: String,
    pub all_flags: String,
    pub required_forms: String,
}

/// Column names of the case table, in output order.
pub const COLUMN_ORDER: [&str; 25] = [
    "pipeline_id",
    "client_name",
    "email",
    "province",
    "service_type",
    "complexity_tier",
    "triage_score",
    "estimated_time_mins",
    "nexus_tier",
    "nexus_score",
    "is_multi_jurisdiction",
    "jurisdictions",
    "bill96_applies",
    "bill96_risk_level",
    "bill96_score",
    "is_francophone",
    "total_complexity_score",
    "priority_level",
    "billing_multiplier",
    "assigned_to",
    "docs_required_count",
    "received_at",
    "processed_at",
    "all_flags",
    "required_forms",
];

