//! Self-contained HTML dashboard.
//!
//! Four SVG panels rendered in-memory and embedded into one file, so the
//! dashboard opens anywhere without a server or external assets.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, SecondsFormat, Utc};
use plotters::prelude::*;
use polars::prelude::DataFrame;
use tracing::info;

use crate::charts::{centered_panel, chart_error, pie_panel, tier_color};
use crate::stats::value_counts;
use crate::values::{datetime_values, float_values, text_values};

const PANEL_SIZE: (u32, u32) = (640, 420);

/// Renders the dashboard HTML file.
pub fn render_dashboard(df: &DataFrame, path: &Path) -> Result<()> {
    let panels = [
        ("Complexity by Service Type", svg_complexity_by_service(df)?),
        ("Cases Received per Day", svg_daily_cases(df)?),
        (
            "Billing Multiplier vs Total Complexity",
            svg_billing_scatter(df)?,
        ),
        ("Assignment Breakdown", svg_assignment_pie(df)?),
    ];
    let html = page(df.height(), &panels);
    fs::write(path, html).with_context(|| format!("write dashboard {}", path.display()))?;
    info!(path = %path.display(), "dashboard written");
    Ok(())
}

fn tier_rank(tier: &str) -> usize {
    match tier {
        "SIMPLE" => 0,
        "MODERATE" => 1,
        "COMPLEX" => 2,
        _ => 3,
    }
}

fn svg_complexity_by_service(df: &DataFrame) -> Result<String> {
    let service_column = text_values(df, "service_type")?;
    let tier_column = text_values(df, "complexity_tier")?;
    let mut services = service_column.clone();
    services.sort();
    services.dedup();
    let mut tiers = tier_column.clone();
    tiers.sort();
    tiers.dedup();
    tiers.sort_by_key(|t| tier_rank(t));
    let mut counts: BTreeMap<(usize, usize), usize> = BTreeMap::new();
    for (service, tier) in service_column.iter().zip(&tier_column) {
        let s = services.iter().position(|x| x == service).unwrap_or(0);
        let t = tiers.iter().position(|x| x == tier).unwrap_or(0);
        *counts.entry((s, t)).or_default() += 1;
    }

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, PANEL_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;
        if services.is_empty() {
            centered_panel(&root, "No cases")?;
        } else {
            let tallest = counts.values().copied().max().unwrap_or(1) as f64;
            let labels = services.clone();
            let mut chart = ChartBuilder::on(&root)
                .margin(12)
                .x_label_area_size(32)
                .y_label_area_size(44)
                .build_cartesian_2d(
                    -0.5f64..services.len() as f64 - 0.5,
                    0f64..tallest * 1.2,
                )
                .map_err(chart_error)?;
            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_labels(services.len())
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
            let bar_width = 0.8 / tiers.len() as f64;
            for (t_idx, tier) in tiers.iter().enumerate() {
                let color = tier_color(tier);
                let bars: Vec<Rectangle<(f64, f64)>> = services
                    .iter()
                    .enumerate()
                    .filter_map(|(s_idx, _)| {
                        let count = counts.get(&(s_idx, t_idx)).copied().unwrap_or(0);
                        if count == 0 {
                            return None;
                        }
                        let x0 = s_idx as f64 - 0.4 + t_idx as f64 * bar_width;
                        Some(Rectangle::new(
                            [(x0, 0.0), (x0 + bar_width * 0.9, count as f64)],
                            color.filled(),
                        ))
                    })
                    .collect();
                chart
                    .draw_series(bars)
                    .map_err(chart_error)?
                    .label(tier.clone())
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
                    });
            }
            chart
                .configure_series_labels()
                .border_style(&BLACK)
                .draw()
                .map_err(chart_error)?;
        }
        root.present().map_err(chart_error)?;
    }
    Ok(buffer)
}

fn svg_daily_cases(df: &DataFrame) -> Result<String> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for received in datetime_values(df, "received_at")?.into_iter().flatten() {
        *counts.entry(received.date()).or_default() += 1;
    }
    let points: Vec<(NaiveDate, usize)> = counts.into_iter().collect();

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, PANEL_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;
        if points.is_empty() {
            centered_panel(&root, "No dated cases")?;
        } else {
            let tallest = points.iter().map(|(_, c)| *c).max().unwrap_or(1) as f64;
            let labels: Vec<String> = points
                .iter()
                .map(|(date, _)| date.format("%Y-%m-%d").to_string())
                .collect();
            let mut chart = ChartBuilder::on(&root)
                .margin(12)
                .x_label_area_size(32)
                .y_label_area_size(44)
                .build_cartesian_2d(
                    -0.5f64..points.len() as f64 - 0.5,
                    0f64..tallest * 1.2,
                )
                .map_err(chart_error)?;
            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_labels(points.len().min(8))
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
            let line: Vec<(f64, f64)> = points
                .iter()
                .enumerate()
                .map(|(idx, (_, count))| (idx as f64, *count as f64))
                .collect();
            chart
                .draw_series(LineSeries::new(
                    line.clone(),
                    RGBColor(0x34, 0x98, 0xDB).stroke_width(2),
                ))
                .map_err(chart_error)?;
            chart
                .draw_series(
                    line.iter()
                        .map(|(x, y)| Circle::new((*x, *y), 4, RGBColor(0x34, 0x98, 0xDB).filled())),
                )
                .map_err(chart_error)?;
        }
        root.present().map_err(chart_error)?;
    }
    Ok(buffer)
}

fn svg_billing_scatter(df: &DataFrame) -> Result<String> {
    let complexity = float_values(df, "total_complexity_score")?;
    let billing = float_values(df, "billing_multiplier")?;
    let triage = float_values(df, "triage_score")?;
    let points: Vec<(f64, f64, f64)> = complexity
        .iter()
        .zip(&billing)
        .zip(&triage)
        .filter_map(|((c, b), t)| Some(((*c)?, (*b)?, t.unwrap_or(0.0))))
        .collect();

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, PANEL_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;
        if points.is_empty() {
            centered_panel(&root, "No scored cases")?;
        } else {
            let x_high = points.iter().map(|(x, _, _)| *x).fold(f64::MIN, f64::max);
            let y_high = points.iter().map(|(_, y, _)| *y).fold(f64::MIN, f64::max);
            let t_low = points.iter().map(|(_, _, t)| *t).fold(f64::MAX, f64::min);
            let t_high = points.iter().map(|(_, _, t)| *t).fold(f64::MIN, f64::max);
            let t_span = if t_high > t_low { t_high - t_low } else { 1.0 };
            let mut chart = ChartBuilder::on(&root)
                .margin(12)
                .x_label_area_size(32)
                .y_label_area_size(44)
                .build_cartesian_2d(0f64..x_high * 1.1 + 1.0, 0f64..y_high * 1.2 + 0.1)
                .map_err(chart_error)?;
            chart
                .configure_mesh()
                .x_desc("Total complexity score")
                .y_desc("Billing multiplier")
                .draw()
                .map_err(chart_error)?;
            chart
                .draw_series(points.iter().map(|(x, y, t)| {
                    let shade = gradient((t - t_low) / t_span);
                    Circle::new((*x, *y), 6, shade.filled())
                }))
                .map_err(chart_error)?;
        }
        root.present().map_err(chart_error)?;
    }
    Ok(buffer)
}

fn svg_assignment_pie(df: &DataFrame) -> Result<String> {
    let assignments = value_counts(&text_values(df, "assigned_to")?);
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, PANEL_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;
        pie_panel(&root, "Assignment", &assignments)?;
        root.present().map_err(chart_error)?;
    }
    Ok(buffer)
}

/// Low-to-high triage-score shade, blue through red.
fn gradient(fraction: f64) -> RGBColor {
    let f = fraction.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * f).round() as u8;
    RGBColor(
        lerp(0x44, 0xD9),
        lerp(0x7A, 0x3D),
        lerp(0xB3, 0x2F),
    )
}

fn page(total_cases: usize, panels: &[(&str, String)]) -> String {
    let generated = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut figures = String::new();
    for (title, svg) in panels {
        figures.push_str("      <figure>\n        <figcaption>");
        figures.push_str(title);
        figures.push_str("</figcaption>\n");
        figures.push_str(svg);
        figures.push_str("\n      </figure>\n");
    }
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Tax Intake Analytics Dashboard</title>
    <style>
      body {{ font-family: sans-serif; margin: 24px; color: #222; }}
      header p {{ color: #666; }}
      .grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(660px, 1fr)); gap: 16px; }}
      figure {{ margin: 0; border: 1px solid #ddd; border-radius: 6px; padding: 12px; }}
      figcaption {{ font-weight: bold; margin-bottom: 8px; }}
    </style>
  </head>
  <body>
    <header>
      <h1>Tax Intake Analytics Dashboard</h1>
      <p>{total_cases} cases analyzed &middot; generated {generated}</p>
    </header>
    <div class="grid">
{figures}    </div>
  </body>
</html>
"#
    )
}
