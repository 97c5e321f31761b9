// Tue Aug 25 2026 - Alex

use crate::linkmap::{base_name, ObjectRecord, SymbolIndex};
use crate::report::size::{human_size, total_megabytes};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;

pub const FLAT_HEADER: &str = "文件大小\t文件名称";
pub const GROUPED_HEADER: &str = "库大小\t库名称";

/// One line of the final report, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub path: String,
    pub size: u64,
    pub display_size: String,
}

/// Builds the size report from an aggregated [`SymbolIndex`].
///
/// Flat mode lists every object file; grouped mode collapses archive
/// members into one row per static library. Both sort largest-first and
/// share the case-sensitive substring filter.
pub struct ReportBuilder {
    grouped: bool,
    search_key: String,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            grouped: false,
            search_key: String::new(),
        }
    }

    pub fn with_grouping(mut self, grouped: bool) -> Self {
        self.grouped = grouped;
        self
    }

    pub fn with_search_key(mut self, key: impl Into<String>) -> Self {
        self.search_key = key.into();
        self
    }

    /// Sorted, filtered records in display order. The filter matches
    /// against the record's full path in flat mode and against the group
    /// key in grouped mode, exactly what `path` holds in each case.
    pub fn entries(&self, index: &SymbolIndex) -> Vec<ReportEntry> {
        let records = if self.grouped {
            group_by_library(index.records())
        } else {
            index.records().cloned().collect()
        };

        records
            .into_iter()
            .sorted_by(|a, b| b.total_size.cmp(&a.total_size))
            .filter(|r| self.search_key.is_empty() || r.path.contains(&self.search_key))
            .map(|r| ReportEntry {
                name: base_name(&r.path).to_string(),
                display_size: human_size(r.total_size),
                size: r.total_size,
                path: r.path,
            })
            .collect()
    }

    /// Full report text: header row, blank row, one line per entry and the
    /// total trailer. CRLF terminators throughout, so the artifact matches
    /// what the original tool saved to disk.
    pub fn build(&self, index: &SymbolIndex) -> String {
        let entries = self.entries(index);
        let header = if self.grouped { GROUPED_HEADER } else { FLAT_HEADER };

        let mut out = String::new();
        out.push_str(header);
        out.push_str("\r\n\r\n");

        let mut total: u64 = 0;
        for entry in &entries {
            out.push_str(&entry.display_size);
            out.push('\t');
            out.push_str(&entry.name);
            out.push_str("\r\n");
            total += entry.size;
        }

        out.push_str("\r\n总大小: ");
        out.push_str(&total_megabytes(total));
        out.push_str("\r\n");
        out
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapses archive members (`.../libFoo.a(Bar.o)`) into one record per
/// library, keyed by the library name alone. Only the final path segment
/// is inspected for the member pattern; a parenthesis earlier in the path
/// does not make a record an archive member. Records that are not members
/// keep their whole path as the group key, so same-named binaries in
/// different directories stay distinct.
fn group_by_library<'a>(records: impl Iterator<Item = &'a ObjectRecord>) -> Vec<ObjectRecord> {
    let mut groups: IndexMap<String, ObjectRecord> = IndexMap::new();

    for record in records {
        let segment = base_name(&record.path);
        let key = match archive_library(segment) {
            Some(lib) => lib.to_string(),
            None => record.path.clone(),
        };
        groups
            .entry(key.clone())
            .or_insert_with(|| ObjectRecord::new(key))
            .total_size += record.total_size;
    }

    groups.into_values().collect()
}

/// `libFoo.a(Bar.o)` → `libFoo.a`. Anything not shaped like an archive
/// member yields `None`.
fn archive_library(segment: &str) -> Option<&str> {
    if !segment.ends_with(')') {
        return None;
    }
    segment.split_once('(').map(|(lib, _)| lib)
}
