//! Table builder: normalized records into a column-typed DataFrame.
//!
//! Coercion happens here, after normalization. A resolved value that
//! fails numeric or temporal parsing becomes a null in its column; a
//! malformed timestamp is NOT re-defaulted to the current time (the
//! "now" default applies only to structural absence, in the normalizer).

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::info;

use intake_model::{COLUMN_ORDER, NormalizedRecord, RawCase, Scalar};

use crate::datetime::parse_timestamp;
use crate::normalize::normalize_case;

/// Normalizes every case and assembles the case table, one row per
/// input case in input order.
pub fn build_table(cases: &[RawCase]) -> Result<DataFrame> {
    let records: Vec<NormalizedRecord> = cases.iter().map(normalize_case).collect();
    build_frame(&records)
}

/// Assembles the typed DataFrame from already-normalized records.
pub fn build_frame(records: &[NormalizedRecord]) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(COLUMN_ORDER.len());
    for name in COLUMN_ORDER {
        columns.push(build_column(records, name));
    }
    let df = DataFrame::new(columns).context("assemble case table")?;
    info!(cases = df.height(), "case table built");
    Ok(df)
}

fn build_column(records: &[NormalizedRecord], name: &str) -> Column {
    match name {
        "pipeline_id" => text(name, records, |r| r.pipeline_id.clone()),
        "client_name" => text(name, records, |r| r.client_name.clone()),
        "email" => text(name, records, |r| r.email.clone()),
        "province" => text(name, records, |r| r.province.clone()),
        "service_type" => text(name, records, |r| r.service_type.clone()),
        "complexity_tier" => text(name, records, |r| r.complexity_tier.clone()),
        "triage_score" => float(name, records, |r| r.triage_score.clone()),
        "estimated_time_mins" => float(name, records, |r| r.estimated_time_mins.clone()),
        "nexus_tier" => text(name, records, |r| r.nexus_tier.clone()),
        "nexus_score" => float(name, records, |r| r.nexus_score.clone()),
        "is_multi_jurisdiction" => boolean(name, records, |r| r.is_multi_jurisdiction.clone()),
        "jurisdictions" => text(name, records, |r| r.jurisdictions.clone()),
        "bill96_applies" => boolean(name, records, |r| r.bill96_applies.clone()),
        "bill96_risk_level" => text(name, records, |r| r.bill96_risk_level.clone()),
        "bill96_score" => float(name, records, |r| r.bill96_score.clone()),
        "is_francophone" => boolean(name, records, |r| r.is_francophone.clone()),
        "total_complexity_score" => float(name, records, |r| r.total_complexity_score.clone()),
        "priority_level" => text(name, records, |r| r.priority_level.clone()),
        "billing_multiplier" => float(name, records, |r| r.billing_multiplier.clone()),
        "assigned_to" => text(name, records, |r| r.assigned_to.clone()),
        "docs_required_count" => integer(name, records, |r| r.docs_required_count.clone()),
        "received_at" => datetime(name, records, |r| r.received_at.clone()),
        "processed_at" => datetime(name, records, |r| r.processed_at.clone()),
        "all_flags" => text(name, records, |r| r.all_flags.clone()),
        "required_forms" => text(name, records, |r| r.required_forms.clone()),
        other => unreachable!("unknown column {other}"),
    }
}

fn text(name: &str, records: &[NormalizedRecord], get: impl Fn(&NormalizedRecord) -> String) -> Column {
    let values: Vec<String> = records.iter().map(get).collect();
    Series::new(name.into(), values).into()
}

fn float(
    name: &str,
    records: &[NormalizedRecord],
    get: impl Fn(&NormalizedRecord) -> Scalar,
) -> Column {
    let values: Vec<Option<f64>> = records.iter().map(|r| get(r).as_f64()).collect();
    Series::new(name.into(), values).into()
}

fn integer(
    name: &str,
    records: &[NormalizedRecord],
    get: impl Fn(&NormalizedRecord) -> Scalar,
) -> Column {
    let values: Vec<Option<i64>> = records.iter().map(|r| get(r).as_i64()).collect();
    Series::new(name.into(), values).into()
}

fn boolean(
    name: &str,
    records: &[NormalizedRecord],
    get: impl Fn(&NormalizedRecord) -> Scalar,
) -> Column {
    let values: Vec<bool> = records.iter().map(|r| get(r).truthy()).collect();
    Series::new(name.into(), values).into()
}

fn datetime(
    name: &str,
    records: &[NormalizedRecord],
    get: impl Fn(&NormalizedRecord) -> String,
) -> Column {
    let values: Vec<Option<NaiveDateTime>> = records
        .iter()
        .map(|r| parse_timestamp(&get(r)))
        .collect();
    Series::new(name.into(), values).into()
}
