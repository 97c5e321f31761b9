// Mon Aug 24 2026 - Alex

use crate::linkmap::{LineClass, LinkMapError, ParserState, SymbolIndex};
use log::debug;

const PATH_MARKER: &str = "# Path:";
const OBJECT_FILES_MARKER: &str = "# Object files:";
const SYMBOLS_MARKER: &str = "# Symbols:";

/// Single-pass parser for ld64 link map text.
///
/// One call builds one fresh [`SymbolIndex`]; the parser holds no state
/// across invocations. Individual malformed lines are skipped, never
/// fatal; the only hard failure is an input that is not a link map at all.
pub struct LinkMapParser;

impl LinkMapParser {
    /// The three markers every ld64 map carries. Checked before any line
    /// is parsed; without them the input is some other kind of file.
    pub fn check_format(content: &str) -> bool {
        content.contains(PATH_MARKER)
            && content.contains(OBJECT_FILES_MARKER)
            && content.contains(SYMBOLS_MARKER)
    }

    pub fn parse(content: &str) -> Result<SymbolIndex, LinkMapError> {
        if !Self::check_format(content) {
            return Err(LinkMapError::InvalidFormat);
        }

        let mut state = ParserState::BeforeFiles;
        let mut index = SymbolIndex::new();

        for line in content.split('\n') {
            state = state.advance(line);
            match state.classify(line) {
                LineClass::FileTable => Self::parse_file_entry(line, &mut index),
                LineClass::SymbolTable => Self::parse_symbol_entry(line, &mut index),
                LineClass::Directive | LineClass::Other => {}
            }
        }

        Ok(index)
    }

    /// A file-table line reads `[  3] /path/libFoo.a(Bar.o)`. The token up
    /// to and including the first `]` is the lookup key and stays
    /// byte-exact; the remainder is the path.
    fn parse_file_entry(line: &str, index: &mut SymbolIndex) {
        match line.find(']') {
            Some(pos) => {
                let (token, path) = line.split_at(pos + 1);
                index.insert(token.to_string(), path.to_string());
            }
            None => {
                if !line.is_empty() {
                    debug!("file table line without ']', skipping: {:?}", line);
                }
            }
        }
    }

    /// A symbol-table line reads `0x100004000\t0x00000428\t[  3] _name`.
    /// Anything that is not exactly three tab-separated fields is skipped.
    fn parse_symbol_entry(line: &str, index: &mut SymbolIndex) {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            if !line.is_empty() {
                debug!("symbol line with {} fields, skipping: {:?}", fields.len(), line);
            }
            return;
        }

        let size = parse_hex_size(fields[1]);
        let key_and_name = fields[2];
        let Some(pos) = key_and_name.find(']') else {
            debug!("symbol line without file index, skipping: {:?}", line);
            return;
        };

        let token = &key_and_name[..=pos];
        if !index.accumulate(token, size) {
            debug!("symbol references unknown file index {:?}", token);
        }
    }
}

/// Parses the size column as base-16, tolerating the conventional `0x`
/// prefix. The format guarantees valid hex here; anything else counts as
/// zero so one damaged line cannot abort the aggregation.
fn parse_hex_size(field: &str) -> u64 {
    let trimmed = field.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    u64::from_str_radix(digits, 16).unwrap_or(0)
}
