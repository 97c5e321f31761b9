// Mon Aug 24 2026 - Alex

/// Region of an ld64 `-map` file the scanner is currently inside.
///
/// The format opens its three regions in a fixed order and never re-opens
/// a closed one, so the only legal transitions move forward. A directive
/// that arrives out of order leaves the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    BeforeFiles,
    InFiles,
    InSections,
    InSymbols,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Directive,
    FileTable,
    SymbolTable,
    Other,
}

impl ParserState {
    /// Applies a region-start directive, if `line` is one.
    pub fn advance(self, line: &str) -> ParserState {
        if !line.starts_with('#') {
            return self;
        }
        match self {
            ParserState::BeforeFiles if line.starts_with("# Object files:") => ParserState::InFiles,
            ParserState::InFiles if line.starts_with("# Sections:") => ParserState::InSections,
            ParserState::InSections if line.starts_with("# Symbols:") => ParserState::InSymbols,
            other => other,
        }
    }

    /// Tags a line with the table it belongs to. The section-table body is
    /// never parsed, so it falls under `Other` along with blanks and
    /// anything outside an open region.
    pub fn classify(self, line: &str) -> LineClass {
        if line.starts_with('#') {
            return LineClass::Directive;
        }
        match self {
            ParserState::InFiles => LineClass::FileTable,
            ParserState::InSymbols => LineClass::SymbolTable,
            _ => LineClass::Other,
        }
    }
}
