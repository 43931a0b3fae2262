pub mod charts;
pub mod dashboard;
pub mod export;
pub mod stats;
pub mod values;

pub use charts::{render_bill96_compliance, render_complexity_distribution, render_nexus_analysis};
pub use dashboard::render_dashboard;
pub use export::{GroupAggregate, aggregate_by, bill96_subset, export_csv, export_workbook};
pub use stats::{BatchSummary, summarize, value_counts};
