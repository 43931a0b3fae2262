//! Descriptive statistics over the case table.

use std::collections::BTreeMap;

use anyhow::Result;
use polars::prelude::DataFrame;

use crate::values::{bool_values, float_values, mean, text_values, total};

/// Summary of one analyzed batch.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub total_cases: usize,
    pub by_service_type: Vec<(String, usize)>,
    pub by_complexity_tier: Vec<(String, usize)>,
    pub by_priority_level: Vec<(String, usize)>,
    pub by_assignee: Vec<(String, usize)>,
    pub mean_triage_score: Option<f64>,
    pub mean_nexus_score: Option<f64>,
    pub mean_bill96_score: Option<f64>,
    pub mean_total_complexity: Option<f64>,
    pub multi_jurisdiction_cases: usize,
    pub bill96_cases: usize,
    pub bill96_by_risk: Vec<(String, usize)>,
    pub total_estimated_minutes: f64,
    pub mean_estimated_minutes: Option<f64>,
    pub mean_billing_multiplier: Option<f64>,
}

impl BatchSummary {
    /// Share of cases with multi-jurisdiction exposure, as a percentage.
    pub fn multi_jurisdiction_pct(&self) -> f64 {
        percentage(self.multi_jurisdiction_cases, self.total_cases)
    }

    /// Share of cases where Bill 96 applies, as a percentage.
    pub fn bill96_pct(&self) -> f64 {
        percentage(self.bill96_cases, self.total_cases)
    }

    /// Total estimated processing time in hours.
    pub fn total_estimated_hours(&self) -> f64 {
        self.total_estimated_minutes / 60.0
    }
}

fn percentage(count: usize, out_of: usize) -> f64 {
    if out_of == 0 {
        0.0
    } else {
        count as f64 / out_of as f64 * 100.0
    }
}

/// Counts distinct values, most frequent first (ties break
/// alphabetically for stable output).
pub fn value_counts(values: &[String]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Computes the batch summary from the case table.
pub fn summarize(df: &DataFrame) -> Result<BatchSummary> {
    let bill96_applies = bool_values(df, "bill96_applies")?;
    let risk_levels = text_values(df, "bill96_risk_level")?;
    let bill96_risk: Vec<String> = risk_levels
        .into_iter()
        .zip(&bill96_applies)
        .filter(|(_, applies)| **applies)
        .map(|(level, _)| level)
        .collect();
    let estimated = float_values(df, "estimated_time_mins")?;

    Ok(BatchSummary {
        total_cases: df.height(),
        by_service_type: value_counts(&text_values(df, "service_type")?),
        by_complexity_tier: value_counts(&text_values(df, "complexity_tier")?),
        by_priority_level: value_counts(&text_values(df, "priority_level")?),
        by_assignee: value_counts(&text_values(df, "assigned_to")?),
        mean_triage_score: mean(&float_values(df, "triage_score")?),
        mean_nexus_score: mean(&float_values(df, "nexus_score")?),
        mean_bill96_score: mean(&float_values(df, "bill96_score")?),
        mean_total_complexity: mean(&float_values(df, "total_complexity_score")?),
        multi_jurisdiction_cases: bool_values(df, "is_multi_jurisdiction")?
            .into_iter()
            .filter(|v| *v)
            .count(),
        bill96_cases: bill96_applies.iter().filter(|v| **v).count(),
        bill96_by_risk: value_counts(&bill96_risk),
        total_estimated_minutes: total(&estimated),
        mean_estimated_minutes: mean(&estimated),
        mean_billing_multiplier: mean(&float_values(df, "billing_multiplier")?),
    })
}
