pub mod case;
pub mod error;
pub mod record;
pub mod scalar;

pub use case::{
    Bill96Stage, Bill96Summary, DocsSummary, DocumentCollection, FinalAnalysis, NexusStage,
    NexusSummary, RawCase, TriageStage, TriageSummary,
};
pub use error::{IntakeError, Result};
pub use record::{COLUMN_ORDER, NormalizedRecord};
pub use scalar::{Scalar, format_numeric, parse_f64, parse_i64};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_order_covers_every_record_field() {
        // The struct and the column list must stay in lockstep; a record
        // serialized to JSON has exactly the table's columns.
        let record = NormalizedRecord {
            pipeline_id: "PIPE-1".into(),
            client_name: "Unknown".into(),
            email: String::new(),
            province: "UNKNOWN".into(),
            service_type: "PERSONAL".into(),
            complexity_tier: "SIMPLE".into(),
            triage_score: Scalar::Number(0.0),
            estimated_time_mins: Scalar::Number(45.0),
            nexus_tier: "STANDARD".into(),
            nexus_score: Scalar::Number(0.0),
            is_multi_jurisdiction: Scalar::Bool(false),
            jurisdictions: String::new(),
            bill96_applies: Scalar::Bool(false),
            bill96_risk_level: "NONE".into(),
            bill96_score: Scalar::Number(0.0),
            is_francophone: Scalar::Bool(false),
            total_complexity_score: Scalar::Number(0.0),
            priority_level: "NORMAL".into(),
            billing_multiplier: Scalar::Number(1.0),
            assigned_to: "general_queue".into(),
            docs_required_count: Scalar::Number(0.0),
            received_at: "2026-01-11T10:00:00Z".into(),
            processed_at: "2026-01-11T10:05:00Z".into(),
            all_flags: String::new(),
            required_forms: String::new(),
        };
        let json = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), COLUMN_ORDER.len());
        for column in COLUMN_ORDER {
            assert!(keys.contains(&column), "missing column {column}");
        }
    }
}
