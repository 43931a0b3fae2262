pub mod datetime;
pub mod frame;
pub mod normalize;

pub use datetime::parse_timestamp;
pub use frame::{build_frame, build_table};
pub use normalize::normalize_case;
