// Mon Aug 24 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkMapError {
    #[error("invalid link map: missing '# Path:', '# Object files:' or '# Symbols:' marker")]
    InvalidFormat,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
