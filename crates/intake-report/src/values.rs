//! Polars value extraction helpers for the case table.

use anyhow::Result;
use chrono::{DateTime, NaiveDateTime};
use polars::prelude::{AnyValue, DataFrame, TimeUnit};

use intake_model::format_numeric;

/// Converts a cell to its string representation. Nulls become empty
/// strings; floats drop trailing zeros.
pub fn value_to_string(value: &AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Boolean(b) => b.to_string(),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(*v)),
        AnyValue::Float64(v) => format_numeric(*v),
        AnyValue::Datetime(v, unit, _) => datetime_text(*v, *unit),
        AnyValue::DatetimeOwned(v, unit, _) => datetime_text(*v, *unit),
        other => other.to_string(),
    }
}

/// Converts a cell to f64 where it carries a number.
pub fn value_to_f64(value: &AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Int8(v) => Some(f64::from(*v)),
        AnyValue::Int16(v) => Some(f64::from(*v)),
        AnyValue::Int32(v) => Some(f64::from(*v)),
        AnyValue::Int64(v) => Some(*v as f64),
        AnyValue::UInt8(v) => Some(f64::from(*v)),
        AnyValue::UInt16(v) => Some(f64::from(*v)),
        AnyValue::UInt32(v) => Some(f64::from(*v)),
        AnyValue::UInt64(v) => Some(*v as f64),
        AnyValue::Float32(v) => Some(f64::from(*v)),
        AnyValue::Float64(v) => Some(*v),
        _ => None,
    }
}

/// Converts a datetime cell to a chrono value, normalized to UTC.
pub fn value_to_datetime(value: &AnyValue<'_>) -> Option<NaiveDateTime> {
    match value {
        AnyValue::Datetime(v, unit, _) => from_timestamp(*v, *unit),
        AnyValue::DatetimeOwned(v, unit, _) => from_timestamp(*v, *unit),
        _ => None,
    }
}

fn from_timestamp(value: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    let utc = match unit {
        TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(value)),
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(value),
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(value),
    }?;
    Some(utc.naive_utc())
}

fn datetime_text(value: i64, unit: TimeUnit) -> String {
    from_timestamp(value, unit)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Extracts a column as strings (nulls become empty strings).
pub fn text_values(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(value_to_string(&column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

/// Extracts a numeric column; non-numeric cells (including nulls) are None.
pub fn float_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(value_to_f64(&column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

/// Extracts a boolean column; nulls read as false.
pub fn bool_values(df: &DataFrame, name: &str) -> Result<Vec<bool>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(matches!(
            column.get(idx).unwrap_or(AnyValue::Null),
            AnyValue::Boolean(true)
        ));
    }
    Ok(values)
}

/// Extracts a datetime column.
pub fn datetime_values(df: &DataFrame, name: &str) -> Result<Vec<Option<NaiveDateTime>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(value_to_datetime(&column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

/// Mean over the non-null entries.
pub fn mean(values: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}

/// Sum over the non-null entries.
pub fn total(values: &[Option<f64>]) -> f64 {
    values.iter().flatten().sum()
}
