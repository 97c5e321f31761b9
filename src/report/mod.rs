// Tue Aug 25 2026 - Alex

pub mod builder;
pub mod size;

pub use builder::{ReportBuilder, ReportEntry, FLAT_HEADER, GROUPED_HEADER};
pub use size::human_size;
