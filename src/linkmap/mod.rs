// Mon Aug 24 2026 - Alex

pub mod error;
pub mod index;
pub mod parser;
pub mod state;

pub use error::LinkMapError;
pub use index::{base_name, ObjectRecord, SymbolIndex};
pub use parser::LinkMapParser;
pub use state::{LineClass, ParserState};
