// Mon Aug 24 2026 - Alex

pub mod input;
pub mod linkmap;
pub mod report;
pub mod utils;

pub use linkmap::{LinkMapError, LinkMapParser, ObjectRecord, SymbolIndex};
pub use report::{ReportBuilder, ReportEntry};
