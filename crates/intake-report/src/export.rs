//! Tabular exports: CSV and a multi-sheet workbook.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, CsvWriter, DataFrame, NamedFrom, SerWriter, Series};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::info;

use crate::values::{
    bool_values, float_values, mean, text_values, total, value_to_f64, value_to_string,
};

/// Writes the full case table as CSV.
pub fn export_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("create csv export {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df.clone())
        .context("write csv export")?;
    info!(path = %path.display(), "csv export written");
    Ok(())
}

/// Per-group aggregates used by the workbook sheets.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAggregate {
    pub key: String,
    pub cases: usize,
    pub mean_triage_score: Option<f64>,
    pub mean_total_complexity: Option<f64>,
    pub mean_billing_multiplier: Option<f64>,
    pub total_estimated_minutes: f64,
}

/// Groups the table by a string column and aggregates the score columns,
/// keys in ascending order.
pub fn aggregate_by(df: &DataFrame, key_column: &str) -> Result<Vec<GroupAggregate>> {
    let keys = text_values(df, key_column)?;
    let triage = float_values(df, "triage_score")?;
    let complexity = float_values(df, "total_complexity_score")?;
    let billing = float_values(df, "billing_multiplier")?;
    let estimated = float_values(df, "estimated_time_mins")?;

    let mut groups: std::collections::BTreeMap<String, Vec<usize>> =
        std::collections::BTreeMap::new();
    for (row, key) in keys.iter().enumerate() {
        groups.entry(key.clone()).or_default().push(row);
    }

    let pick = |source: &[Option<f64>], rows: &[usize]| -> Vec<Option<f64>> {
        rows.iter().map(|row| source[*row]).collect()
    };
    Ok(groups
        .into_iter()
        .map(|(key, rows)| GroupAggregate {
            key,
            cases: rows.len(),
            mean_triage_score: mean(&pick(&triage, &rows)),
            mean_total_complexity: mean(&pick(&complexity, &rows)),
            mean_billing_multiplier: mean(&pick(&billing, &rows)),
            total_estimated_minutes: total(&pick(&estimated, &rows)),
        })
        .collect())
}

/// The subset of cases where Bill 96 applies.
pub fn bill96_subset(df: &DataFrame) -> Result<DataFrame> {
    let mask = Series::new("mask".into(), bool_values(df, "bill96_applies")?);
    let mask = mask.bool().context("boolean mask")?;
    df.filter(mask).context("filter bill 96 cases")
}

/// Writes the multi-sheet workbook: full data, per-complexity-tier and
/// per-service-type aggregates, and the Bill 96 subset when non-empty.
pub fn export_workbook(df: &DataFrame, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let cases = workbook.add_worksheet();
    cases.set_name("Cases")?;
    write_frame_sheet(cases, df, &header)?;

    let by_tier = workbook.add_worksheet();
    by_tier.set_name("By Complexity")?;
    write_header(
        by_tier,
        &[
            "Complexity Tier",
            "Cases",
            "Avg Triage Score",
            "Avg Total Complexity",
            "Avg Billing Multiplier",
            "Total Estimated Minutes",
        ],
        &header,
    )?;
    for (idx, group) in aggregate_by(df, "complexity_tier")?.iter().enumerate() {
        let row = idx as u32 + 1;
        by_tier.write_string(row, 0, &group.key)?;
        by_tier.write_number(row, 1, group.cases as f64)?;
        write_optional(by_tier, row, 2, group.mean_triage_score)?;
        write_optional(by_tier, row, 3, group.mean_total_complexity)?;
        write_optional(by_tier, row, 4, group.mean_billing_multiplier)?;
        by_tier.write_number(row, 5, round2(group.total_estimated_minutes))?;
    }

    let by_service = workbook.add_worksheet();
    by_service.set_name("By Service Type")?;
    write_header(
        by_service,
        &[
            "Service Type",
            "Cases",
            "Avg Total Complexity",
            "Avg Billing Multiplier",
        ],
        &header,
    )?;
    for (idx, group) in aggregate_by(df, "service_type")?.iter().enumerate() {
        let row = idx as u32 + 1;
        by_service.write_string(row, 0, &group.key)?;
        by_service.write_number(row, 1, group.cases as f64)?;
        write_optional(by_service, row, 2, group.mean_total_complexity)?;
        write_optional(by_service, row, 3, group.mean_billing_multiplier)?;
    }

    let subset = bill96_subset(df)?;
    if subset.height() > 0 {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Bill 96 Cases")?;
        write_frame_sheet(sheet, &subset, &header)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("write workbook {}", path.display()))?;
    info!(path = %path.display(), "workbook export written");
    Ok(())
}

fn write_header(sheet: &mut Worksheet, names: &[&str], format: &Format) -> Result<()> {
    for (col, name) in names.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, format)?;
    }
    Ok(())
}

fn write_optional(sheet: &mut Worksheet, row: u32, col: u16, value: Option<f64>) -> Result<()> {
    if let Some(v) = value {
        sheet.write_number(row, col, round2(v))?;
    }
    Ok(())
}

fn write_frame_sheet(sheet: &mut Worksheet, df: &DataFrame, header: &Format) -> Result<()> {
    let names = df.get_column_names();
    for (col, name) in names.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, name.as_str(), header)?;
    }
    for (col, name) in names.iter().enumerate() {
        let column = df.column(name.as_str())?;
        for row in 0..df.height() {
            let value = column.get(row).unwrap_or(AnyValue::Null);
            write_cell(sheet, row as u32 + 1, col as u16, &value)?;
        }
    }
    Ok(())
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, value: &AnyValue<'_>) -> Result<()> {
    match value {
        AnyValue::Null => {}
        AnyValue::Boolean(b) => {
            sheet.write_boolean(row, col, *b)?;
        }
        other => {
            if let Some(number) = value_to_f64(other) {
                sheet.write_number(row, col, number)?;
            } else {
                sheet.write_string(row, col, value_to_string(other))?;
            }
        }
    }
    Ok(())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
