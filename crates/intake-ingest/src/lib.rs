pub mod demo;
pub mod source;

pub use demo::sample_batch;
pub use source::{cases_from_value, decode_cases, load_cases_from_path, resolve_case_values};
