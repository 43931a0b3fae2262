//! Raw case schema for the multi-stage intake workflow.
//!
//! A case moves through triage, nexus (jurisdiction), and Bill 96
//! (Quebec language compliance) analysis, then gets a consolidated
//! `finalAnalysis` summary that may duplicate or supersede per-stage
//! fields. Exports are only loosely shaped, so every field is optional
//! and every sub-object decodes leniently: a value of unexpected type
//! becomes `None` instead of failing the case.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::scalar::Scalar;

/// Deserializes a value as `Some(T)` when it matches the expected shape,
/// `None` otherwise. JSON `null` and a structurally absent key both map
/// to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// One raw intake case as exported by the workflow.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCase {
    #[serde(deserialize_with = "lenient")]
    pub pipeline_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub province: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub triage: Option<TriageStage>,
    #[serde(deserialize_with = "lenient")]
    pub nexus: Option<NexusStage>,
    #[serde(deserialize_with = "lenient")]
    pub bill96: Option<Bill96Stage>,
    #[serde(rename = "finalAnalysis", deserialize_with = "lenient")]
    pub final_analysis: Option<FinalAnalysis>,
    #[serde(rename = "documentCollection", deserialize_with = "lenient")]
    pub document_collection: Option<DocumentCollection>,
    #[serde(deserialize_with = "lenient")]
    pub received_at: Option<Scalar>,
}

/// Initial classification stage: service type, complexity, priority.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TriageStage {
    #[serde(deserialize_with = "lenient")]
    pub service_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub complexity_tier: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub priority_score: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub estimated_time_minutes: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub assign_to: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub required_forms: Option<Vec<String>>,
}

/// Multi-jurisdiction tax exposure stage.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NexusStage {
    #[serde(deserialize_with = "lenient")]
    pub complexity_tier: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub complexity_score: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub is_multi_jurisdiction: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub jurisdictions: Option<Vec<String>>,
}

/// Quebec francophone-language compliance stage.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Bill96Stage {
    #[serde(deserialize_with = "lenient")]
    pub applies: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub risk_level: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub risk_score: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub is_francophone: Option<Scalar>,
}

/// Consolidated end-of-pipeline summary. Per-stage values take precedence
/// over the nested summaries here when both are present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FinalAnalysis {
    #[serde(deserialize_with = "lenient")]
    pub total_complexity_score: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub priority_level: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub billing_multiplier: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub assigned_to: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub all_flags: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub all_required_forms: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub processed_at: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub triage_summary: Option<TriageSummary>,
    #[serde(deserialize_with = "lenient")]
    pub nexus_summary: Option<NexusSummary>,
    #[serde(deserialize_with = "lenient")]
    pub bill96_summary: Option<Bill96Summary>,
    #[serde(deserialize_with = "lenient")]
    pub docs_summary: Option<DocsSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TriageSummary {
    #[serde(deserialize_with = "lenient")]
    pub service_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub complexity: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub estimated_time: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NexusSummary {
    #[serde(deserialize_with = "lenient")]
    pub tier: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_multi_jurisdiction: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub jurisdictions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Bill96Summary {
    #[serde(deserialize_with = "lenient")]
    pub applies: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub risk_level: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub francophone: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocsSummary {
    #[serde(deserialize_with = "lenient")]
    pub required_count: Option<Scalar>,
}

/// Document-collection stage output.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocumentCollection {
    #[serde(deserialize_with = "lenient")]
    pub total_required: Option<Scalar>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_a_full_case() {
        let case: RawCase = serde_json::from_value(json!({
            "pipeline_id": "PIPE-1",
            "name": "John Doe",
            "triage": {"service_type": "PERSONAL", "priority_score": 15},
            "finalAnalysis": {"total_complexity_score": 15,
                              "triage_summary": {"complexity": "SIMPLE"}},
        }))
        .unwrap();
        assert_eq!(case.pipeline_id.as_deref(), Some("PIPE-1"));
        let triage = case.triage.unwrap();
        assert_eq!(triage.priority_score, Some(Scalar::Number(15.0)));
        let fa = case.final_analysis.unwrap();
        assert_eq!(
            fa.triage_summary.unwrap().complexity.as_deref(),
            Some("SIMPLE")
        );
    }

    #[test]
    fn unexpected_stage_shape_degrades_to_none() {
        let case: RawCase = serde_json::from_value(json!({
            "triage": "not-an-object",
            "nexus": 17,
        }))
        .unwrap();
        assert!(case.triage.is_none());
        assert!(case.nexus.is_none());
    }

    #[test]
    fn unexpected_leaf_shape_degrades_without_dropping_the_stage() {
        let case: RawCase = serde_json::from_value(json!({
            "triage": {"service_type": {"nested": true}, "priority_score": "30"},
        }))
        .unwrap();
        let triage = case.triage.unwrap();
        assert!(triage.service_type.is_none());
        assert_eq!(triage.priority_score, Some(Scalar::Text("30".into())));
    }

    #[test]
    fn null_and_absent_are_equivalent() {
        let case: RawCase = serde_json::from_value(json!({
            "pipeline_id": null,
        }))
        .unwrap();
        assert!(case.pipeline_id.is_none());
        assert!(case.received_at.is_none());
    }
}
