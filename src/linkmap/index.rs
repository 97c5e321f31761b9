// Mon Aug 24 2026 - Alex

use indexmap::IndexMap;
use serde::Serialize;

/// Accumulated size of one object file from the link map's file table.
///
/// `path` is kept byte-exact as the linker printed it, including the
/// leading space after the index token and any `libFoo.a(Bar.o)` archive
/// member suffix.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectRecord {
    pub path: String,
    pub total_size: u64,
}

impl ObjectRecord {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            total_size: 0,
        }
    }

    pub fn base_name(&self) -> &str {
        base_name(&self.path)
    }
}

/// Last `/`-delimited segment of a path, or the whole string when it
/// contains no separator.
pub fn base_name(path: &str) -> &str {
    path.rfind('/').map_or(path, |i| &path[i + 1..])
}

/// Size records keyed by the bracketed file-index token (`[  3]`), exactly
/// as it appears in both the object-file table and the symbol table.
#[derive(Debug, Default)]
pub struct SymbolIndex {
    records: IndexMap<String, ObjectRecord>,
}

impl SymbolIndex {
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }

    /// Seeds a zero-sized record for a file-table entry. A repeated token
    /// overwrites the previous entry; ld64 does not reuse indices.
    pub fn insert(&mut self, token: String, path: String) {
        self.records.insert(token, ObjectRecord::new(path));
    }

    /// Adds `size` to the record for `token`. Returns false when the token
    /// is unknown, i.e. the symbol references a file absent from the
    /// object-file table.
    pub fn accumulate(&mut self, token: &str, size: u64) -> bool {
        match self.records.get_mut(token) {
            Some(record) => {
                record.total_size += size;
                true
            }
            None => false,
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &ObjectRecord> {
        self.records.values()
    }

    pub fn total_size(&self) -> u64 {
        self.records.values().map(|r| r.total_size).sum()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
