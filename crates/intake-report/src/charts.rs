//! Static chart sheets for a batch.
//!
//! Three PNG sheets mirror the review workflow: complexity overview,
//! nexus exposure, and Bill 96 compliance. Tier and risk colors follow
//! the firm's established traffic-light key.

use std::path::Path;

use anyhow::{Result, anyhow};
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use polars::prelude::DataFrame;
use tracing::info;

use crate::stats::value_counts;
use crate::values::{bool_values, float_values, text_values};

pub(crate) fn chart_error<E: std::fmt::Display>(error: E) -> anyhow::Error {
    anyhow!("chart rendering: {error}")
}

pub(crate) fn tier_color(tier: &str) -> RGBColor {
    match tier {
        "SIMPLE" => RGBColor(0x90, 0xEE, 0x90),
        "MODERATE" => RGBColor(0xFF, 0xD7, 0x00),
        "COMPLEX" => RGBColor(0xFF, 0x63, 0x47),
        _ => RGBColor(0xCC, 0xCC, 0xCC),
    }
}

fn priority_color(level: &str) -> RGBColor {
    match level {
        "LOW" => RGBColor(0x90, 0xEE, 0x90),
        "NORMAL" => RGBColor(0xAD, 0xD8, 0xE6),
        "MEDIUM" => RGBColor(0xFF, 0xD7, 0x00),
        "HIGH" => RGBColor(0xFF, 0xA5, 0x00),
        "CRITICAL" => RGBColor(0xFF, 0x63, 0x47),
        _ => RGBColor(0xCC, 0xCC, 0xCC),
    }
}

fn nexus_color(tier: &str) -> RGBColor {
    match tier {
        "STANDARD" => RGBColor(0x90, 0xEE, 0x90),
        "MEDIUM" => RGBColor(0xFF, 0xD7, 0x00),
        "HIGH" => RGBColor(0xFF, 0x63, 0x47),
        _ => RGBColor(0xCC, 0xCC, 0xCC),
    }
}

fn risk_color(level: &str) -> RGBColor {
    match level {
        "NONE" => RGBColor(0x90, 0xEE, 0x90),
        "LOW" => RGBColor(0xAD, 0xD8, 0xE6),
        "MEDIUM" => RGBColor(0xFF, 0xD7, 0x00),
        "HIGH" => RGBColor(0xFF, 0x63, 0x47),
        _ => RGBColor(0xCC, 0xCC, 0xCC),
    }
}

pub(crate) fn palette_color(index: usize) -> RGBColor {
    const PALETTE: [RGBColor; 6] = [
        RGBColor(0x66, 0xC2, 0xA5),
        RGBColor(0xFC, 0x8D, 0x62),
        RGBColor(0x8D, 0xA0, 0xCB),
        RGBColor(0xE7, 0x8A, 0xC3),
        RGBColor(0xA6, 0xD8, 0x54),
        RGBColor(0xFF, 0xD9, 0x2F),
    ];
    PALETTE[index % PALETTE.len()]
}

/// Complexity overview: tier and priority bars, service-type pie, and a
/// total-complexity histogram with the batch mean marked.
pub fn render_complexity_distribution(df: &DataFrame, path: &Path) -> Result<()> {
    let tiers = value_counts(&text_values(df, "complexity_tier")?);
    let priorities = value_counts(&text_values(df, "priority_level")?);
    let services = value_counts(&text_values(df, "service_type")?);
    let scores: Vec<f64> = float_values(df, "total_complexity_score")?
        .into_iter()
        .flatten()
        .collect();

    let root = BitMapBackend::new(path, (1400, 1000)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;
    let panels = root.split_evenly((2, 2));
    bar_panel(&panels[0], "Cases by Complexity Tier", &tiers, tier_color)?;
    bar_panel(&panels[1], "Cases by Priority Level", &priorities, priority_color)?;
    pie_panel(&panels[2], "Service Types", &services)?;
    histogram_panel(&panels[3], "Total Complexity Score", &scores)?;
    root.present().map_err(chart_error)?;
    info!(path = %path.display(), "complexity distribution chart written");
    Ok(())
}

/// Nexus exposure: multi-jurisdiction split and nexus tier bars.
pub fn render_nexus_analysis(df: &DataFrame, path: &Path) -> Result<()> {
    let multi = bool_values(df, "is_multi_jurisdiction")?;
    let multi_count = multi.iter().filter(|v| **v).count();
    let split = vec![
        ("Multi-jurisdiction".to_string(), multi_count),
        ("Single jurisdiction".to_string(), multi.len() - multi_count),
    ];
    let tiers = value_counts(&text_values(df, "nexus_tier")?);

    let root = BitMapBackend::new(path, (1400, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;
    let panels = root.split_evenly((1, 2));
    pie_panel(&panels[0], "Multi-Jurisdiction Cases", &split)?;
    bar_panel(&panels[1], "Nexus Tier", &tiers, nexus_color)?;
    root.present().map_err(chart_error)?;
    info!(path = %path.display(), "nexus analysis chart written");
    Ok(())
}

/// Bill 96 compliance: applicability split, then risk levels and the
/// language profile over the applicable subset.
pub fn render_bill96_compliance(df: &DataFrame, path: &Path) -> Result<()> {
    let applies = bool_values(df, "bill96_applies")?;
    let applicable = applies.iter().filter(|v| **v).count();
    let split = vec![
        ("Applies".to_string(), applicable),
        ("Does not apply".to_string(), applies.len() - applicable),
    ];
    let risk_levels: Vec<String> = text_values(df, "bill96_risk_level")?
        .into_iter()
        .zip(&applies)
        .filter(|(_, a)| **a)
        .map(|(level, _)| level)
        .collect();
    let francophone: Vec<bool> = bool_values(df, "is_francophone")?
        .into_iter()
        .zip(&applies)
        .filter(|(_, a)| **a)
        .map(|(v, _)| v)
        .collect();
    let franco_count = francophone.iter().filter(|v| **v).count();
    let franco_split = vec![
        ("Francophone".to_string(), franco_count),
        (
            "Non-francophone".to_string(),
            francophone.len() - franco_count,
        ),
    ];

    let root = BitMapBackend::new(path, (1600, 520)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;
    let panels = root.split_evenly((1, 3));
    pie_panel(&panels[0], "Bill 96 Applicability", &split)?;
    if applicable > 0 {
        bar_panel(
            &panels[1],
            "Bill 96 Risk Level",
            &value_counts(&risk_levels),
            risk_color,
        )?;
        pie_panel(&panels[2], "Language Profile (Bill 96)", &franco_split)?;
    } else {
        placeholder(&panels[1], "Bill 96 Risk Level", "No Bill 96 cases")?;
        placeholder(&panels[2], "Language Profile (Bill 96)", "No Bill 96 cases")?;
    }
    root.present().map_err(chart_error)?;
    info!(path = %path.display(), "bill 96 compliance chart written");
    Ok(())
}

pub(crate) fn bar_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    data: &[(String, usize)],
    color_for: fn(&str) -> RGBColor,
) -> Result<()> {
    if data.is_empty() {
        return placeholder(area, title, "No cases");
    }
    let tallest = data.iter().map(|(_, count)| *count).max().unwrap_or(1) as f64;
    let labels: Vec<String> = data.iter().map(|(key, _)| key.clone()).collect();
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(32)
        .y_label_area_size(44)
        .build_cartesian_2d(-0.5f64..data.len() as f64 - 0.5, 0f64..tallest * 1.15)
        .map_err(chart_error)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(data.len())
        .x_label_formatter(&|x| {
            let idx = x.round();
            if (x - idx).abs() > 0.3 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .y_desc("Cases")
        .draw()
        .map_err(chart_error)?;
    chart
        .draw_series(data.iter().enumerate().map(|(idx, (key, count))| {
            Rectangle::new(
                [(idx as f64 - 0.35, 0.0), (idx as f64 + 0.35, *count as f64)],
                color_for(key).filled(),
            )
        }))
        .map_err(chart_error)?;
    Ok(())
}

pub(crate) fn pie_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    data: &[(String, usize)],
) -> Result<()> {
    let area = area.titled(title, ("sans-serif", 22)).map_err(chart_error)?;
    let slices: Vec<(String, usize)> = data.iter().filter(|(_, c)| *c > 0).cloned().collect();
    if slices.is_empty() {
        return centered_panel(&area, "No data");
    }
    let (width, height) = area.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.32;
    let sizes: Vec<f64> = slices.iter().map(|(_, count)| *count as f64).collect();
    let colors: Vec<RGBColor> = (0..slices.len()).map(palette_color).collect();
    let labels: Vec<String> = slices
        .iter()
        .map(|(key, count)| format!("{key} ({count})"))
        .collect();
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 15));
    area.draw(&pie).map_err(chart_error)?;
    Ok(())
}

fn histogram_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    values: &[f64],
) -> Result<()> {
    if values.is_empty() {
        return placeholder(area, title, "No scores");
    }
    const BINS: usize = 20;
    let low = values.iter().copied().fold(f64::INFINITY, f64::min);
    let high = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if high > low { high - low } else { 1.0 };
    let bin_width = span / BINS as f64;
    let mut counts = [0usize; BINS];
    for value in values {
        let bin = (((value - low) / bin_width) as usize).min(BINS - 1);
        counts[bin] += 1;
    }
    let tallest = counts.iter().copied().max().unwrap_or(1) as f64;
    let mean_score = values.iter().sum::<f64>() / values.len() as f64;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(32)
        .y_label_area_size(44)
        .build_cartesian_2d(low..low + span, 0f64..tallest * 1.15)
        .map_err(chart_error)?;
    chart
        .configure_mesh()
        .y_desc("Cases")
        .draw()
        .map_err(chart_error)?;
    chart
        .draw_series(counts.iter().enumerate().map(|(idx, count)| {
            let x0 = low + idx as f64 * bin_width;
            Rectangle::new(
                [(x0, 0.0), (x0 + bin_width, *count as f64)],
                RGBColor(0x87, 0xCE, 0xEB).filled(),
            )
        }))
        .map_err(chart_error)?;
    chart
        .draw_series(LineSeries::new(
            vec![(mean_score, 0.0), (mean_score, tallest * 1.15)],
            RED.stroke_width(2),
        ))
        .map_err(chart_error)?
        .label(format!("Mean: {mean_score:.1}"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .draw()
        .map_err(chart_error)?;
    Ok(())
}

pub(crate) fn placeholder<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    message: &str,
) -> Result<()> {
    let area = area.titled(title, ("sans-serif", 22)).map_err(chart_error)?;
    centered_panel(&area, message)
}

pub(crate) fn centered_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    message: &str,
) -> Result<()> {
    let (width, height) = area.dim_in_pixel();
    let anchor = (
        width as i32 / 2 - message.len() as i32 * 4,
        height as i32 / 2,
    );
    area.draw(&Text::new(message.to_string(), anchor, ("sans-serif", 18)))
        .map_err(chart_error)?;
    Ok(())
}
