//! Record normalizer.
//!
//! Each raw case yields exactly one flat record. Dual-sourced fields
//! resolve through a fixed precedence chain, applied independently per
//! field: the direct per-stage value wins, the corresponding
//! `finalAnalysis` summary value is the fallback, and a documented
//! default closes the chain. The chains below must match the workflow's
//! field pairs verbatim; changing one changes the meaning of historical
//! exports.

use chrono::{SecondsFormat, Utc};

use intake_model::{NormalizedRecord, RawCase, Scalar};

/// Resolves one field through its fallback chain.
fn resolve<T>(direct: Option<T>, summary: Option<T>, default: T) -> T {
    direct.or(summary).unwrap_or(default)
}

/// Comma-space join; an empty list yields the empty string.
fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// Current time in the format exports use for timestamps.
fn now_text() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Maps one raw case to one flat record. Pure aside from reading the
/// clock for absent timestamps; absence never errors, it resolves
/// through the chain to the field default.
pub fn normalize_case(case: &RawCase) -> NormalizedRecord {
    let triage = case.triage.as_ref();
    let nexus = case.nexus.as_ref();
    let bill96 = case.bill96.as_ref();
    let fa = case.final_analysis.as_ref();
    let docs = case.document_collection.as_ref();
    let triage_sum = fa.and_then(|f| f.triage_summary.as_ref());
    let nexus_sum = fa.and_then(|f| f.nexus_summary.as_ref());
    let bill96_sum = fa.and_then(|f| f.bill96_summary.as_ref());
    let docs_sum = fa.and_then(|f| f.docs_summary.as_ref());

    NormalizedRecord {
        pipeline_id: case.pipeline_id.clone().unwrap_or_else(|| "UNKNOWN".into()),
        client_name: case.name.clone().unwrap_or_else(|| "Unknown".into()),
        email: case.email.clone().unwrap_or_default(),
        province: case.province.clone().unwrap_or_else(|| "UNKNOWN".into()),

        service_type: resolve(
            triage.and_then(|t| t.service_type.clone()),
            triage_sum.and_then(|s| s.service_type.clone()),
            "PERSONAL".into(),
        ),
        complexity_tier: resolve(
            triage.and_then(|t| t.complexity_tier.clone()),
            triage_sum.and_then(|s| s.complexity.clone()),
            "SIMPLE".into(),
        ),
        triage_score: resolve(
            triage.and_then(|t| t.priority_score.clone()),
            fa.and_then(|f| f.total_complexity_score.clone()),
            Scalar::Number(0.0),
        ),
        estimated_time_mins: resolve(
            triage.and_then(|t| t.estimated_time_minutes.clone()),
            triage_sum.and_then(|s| s.estimated_time.clone()),
            Scalar::Number(45.0),
        ),

        nexus_tier: resolve(
            nexus.and_then(|n| n.complexity_tier.clone()),
            nexus_sum.and_then(|s| s.tier.clone()),
            "STANDARD".into(),
        ),
        nexus_score: nexus
            .and_then(|n| n.complexity_score.clone())
            .unwrap_or(Scalar::Number(0.0)),
        is_multi_jurisdiction: resolve(
            nexus.and_then(|n| n.is_multi_jurisdiction.clone()),
            nexus_sum.and_then(|s| s.is_multi_jurisdiction.clone()),
            Scalar::Bool(false),
        ),
        jurisdictions: join_list(&resolve(
            nexus.and_then(|n| n.jurisdictions.clone()),
            nexus_sum.and_then(|s| s.jurisdictions.clone()),
            Vec::new(),
        )),

        bill96_applies: resolve(
            bill96.and_then(|b| b.applies.clone()),
            bill96_sum.and_then(|s| s.applies.clone()),
            Scalar::Bool(false),
        ),
        bill96_risk_level: resolve(
            bill96.and_then(|b| b.risk_level.clone()),
            bill96_sum.and_then(|s| s.risk_level.clone()),
            "NONE".into(),
        ),
        bill96_score: bill96
            .and_then(|b| b.risk_score.clone())
            .unwrap_or(Scalar::Number(0.0)),
        is_francophone: resolve(
            bill96.and_then(|b| b.is_francophone.clone()),
            bill96_sum.and_then(|s| s.francophone.clone()),
            Scalar::Bool(false),
        ),

        // Reversed chain relative to triage_score: the consolidated view
        // wins here, the triage score is only the fallback.
        total_complexity_score: resolve(
            fa.and_then(|f| f.total_complexity_score.clone()),
            triage.and_then(|t| t.priority_score.clone()),
            Scalar::Number(0.0),
        ),
        priority_level: fa
            .and_then(|f| f.priority_level.clone())
            .unwrap_or_else(|| "NORMAL".into()),
        billing_multiplier: fa
            .and_then(|f| f.billing_multiplier.clone())
            .unwrap_or(Scalar::Number(1.0)),
        assigned_to: resolve(
            fa.and_then(|f| f.assigned_to.clone()),
            triage.and_then(|t| t.assign_to.clone()),
            "general_queue".into(),
        ),

        docs_required_count: resolve(
            docs.and_then(|d| d.total_required.clone()),
            docs_sum.and_then(|s| s.required_count.clone()),
            Scalar::Number(0.0),
        ),

        // The "current time" default applies only to structural absence;
        // a present-but-malformed value stays as-is and nulls out during
        // table coercion.
        received_at: case
            .received_at
            .as_ref()
            .map(Scalar::as_text)
            .unwrap_or_else(now_text),
        processed_at: fa
            .and_then(|f| f.processed_at.as_ref())
            .map(Scalar::as_text)
            .unwrap_or_else(now_text),

        all_flags: join_list(fa.and_then(|f| f.all_flags.as_deref()).unwrap_or_default()),
        required_forms: join_list(&resolve(
            fa.and_then(|f| f.all_required_forms.clone()),
            triage.and_then(|t| t.required_forms.clone()),
            Vec::new(),
        )),
    }
}
