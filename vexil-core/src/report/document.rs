//! The report document
//!
//! Locates the violations table inside a generated report, splits its body
//! into row fragments, and re-emits the document with rows permuted and
//! every other byte unchanged.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use vexil_model::{ColumnMarker, SortMode};

use crate::error::{ReportError, Result};
use crate::sorting::{SortableRow, context, sort_rows};

use super::scanner::{Tag, TagKind, TagScanner};

/// The id the report generator gives the violations table.
pub const DEFAULT_TABLE_ID: &str = "violationsTable";

/// How to find the violations table inside a report document.
///
/// Lookup follows `getElementById` semantics: the first element carrying the
/// id wins, whatever its tag name, and the table body is the first `tbody`
/// among its descendants.
#[derive(Debug, Clone)]
pub struct TableLocator {
    table_id: String,
}

impl TableLocator {
    /// Locate the element whose `id` attribute equals `table_id`.
    pub fn new(table_id: impl Into<String>) -> Self {
        TableLocator { table_id: table_id.into() }
    }

    /// The id being searched for.
    pub fn table_id(&self) -> &str {
        &self.table_id
    }
}

impl Default for TableLocator {
    fn default() -> Self {
        TableLocator::new(DEFAULT_TABLE_ID)
    }
}

/// One `<tr>` of the table body.
///
/// The fragment is the verbatim source of the whole row, nested markup
/// included. Cell values are the raw inner markup of the first descendant
/// carrying each marker class; a marked cell that never closes is treated
/// as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    fragment: String,
    priority: Option<String>,
    rule: Option<String>,
    path: Option<String>,
}

impl ReportRow {
    fn from_fragment(fragment: &str) -> Self {
        let mut priority = None;
        let mut rule = None;
        let mut path = None;

        let mut scanner = TagScanner::new(fragment);
        // The row's own open tag is not a cell; markers on it do not count.
        scanner.next_tag();
        while let Some(tag) = scanner.next_tag() {
            if !matches!(tag.kind(), TagKind::Open | TagKind::SelfClosing) {
                continue;
            }
            for marker in ColumnMarker::ALL {
                let slot = match marker {
                    ColumnMarker::Priority => &mut priority,
                    ColumnMarker::Rule => &mut rule,
                    ColumnMarker::Path => &mut path,
                };
                if slot.is_none() && tag.class_has_token(marker.class_name()) {
                    *slot = inner_markup(fragment, &tag);
                    if slot.is_none() {
                        warn!(%marker, "marked cell never closes; treated as absent");
                    }
                }
            }
        }

        ReportRow { fragment: fragment.to_string(), priority, rule, path }
    }

    /// The verbatim source of the row, `<tr>` through `</tr>`.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Inner markup of the first `priorityColumn` cell.
    pub fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }

    /// Inner markup of the first `ruleColumn` cell.
    pub fn rule(&self) -> Option<&str> {
        self.rule.as_deref()
    }

    /// Inner markup of the first `pathColumn` cell.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl SortableRow for ReportRow {
    fn cell_text(&self, marker: ColumnMarker) -> Option<&str> {
        match marker {
            ColumnMarker::Priority => self.priority.as_deref(),
            ColumnMarker::Rule => self.rule.as_deref(),
            ColumnMarker::Path => self.path.as_deref(),
        }
    }
}

fn inner_markup(fragment: &str, tag: &Tag<'_>) -> Option<String> {
    if !tag.has_content() {
        // Void or self-closed cells exist but hold nothing.
        return Some(String::new());
    }
    let rest = &fragment[tag.end..];
    let mut probe = TagScanner::new(rest);
    let close = probe.matching_close(tag.name())?;
    Some(rest[..close.start].to_string())
}

/// A report document with its violations table split into sortable rows.
///
/// Everything outside the row fragments is kept byte for byte: the document
/// prefix and suffix, and the glue between row slots (whitespace, comments,
/// stray markup). Serializing an unsorted document reproduces the input
/// exactly; sorting permutes row fragments across the fixed slots.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    source: String,
    body_start: usize,
    body_end: usize,
    rows: Vec<ReportRow>,
    glue: Vec<String>,
    table_id: String,
}

impl ReportDocument {
    /// Parse `source` and split out the table the locator points at.
    ///
    /// Fails with [`ReportError::TableNotFound`] when no element carries the
    /// locator's id, and [`ReportError::BodyNotFound`] when that element has
    /// no `tbody` descendant.
    pub fn parse(source: &str, locator: &TableLocator) -> Result<Self> {
        let table_id = locator.table_id().to_string();
        let not_found = || ReportError::TableNotFound { table_id: locator.table_id().to_string() };
        let no_body = || ReportError::BodyNotFound { table_id: locator.table_id().to_string() };

        let mut scanner = TagScanner::new(source);

        let host = loop {
            let Some(tag) = scanner.next_tag() else {
                return Err(not_found());
            };
            if tag.attr("id") == Some(locator.table_id()) {
                break tag;
            }
        };
        if !host.has_content() {
            return Err(no_body());
        }
        let host_name = host.name();

        // First tbody among the host's descendants, nested tables included.
        let mut host_depth = 1usize;
        let body_open = loop {
            let Some(tag) = scanner.next_tag() else {
                return Err(no_body());
            };
            if tag.is_named(host_name) {
                match tag.kind() {
                    TagKind::Open => host_depth += 1,
                    TagKind::Close => {
                        host_depth -= 1;
                        if host_depth == 0 {
                            return Err(no_body());
                        }
                    }
                    TagKind::SelfClosing => {}
                }
            } else if tag.is_open() && tag.is_named("tbody") {
                break tag;
            }
        };
        let body_start = body_open.end;

        // Rows are the body's own <tr> elements. A tr swallows everything
        // through its close tag, so nested tables travel with their row.
        let mut spans: Vec<(usize, usize)> = Vec::new();
        let mut tbody_depth = 1usize;
        let body_end = loop {
            let Some(tag) = scanner.next_tag() else {
                return Err(ReportError::InvalidReport("table body never closes".to_string()));
            };
            if tag.is_named("tbody") {
                match tag.kind() {
                    TagKind::Open => tbody_depth += 1,
                    TagKind::Close => {
                        tbody_depth -= 1;
                        if tbody_depth == 0 {
                            break tag.start;
                        }
                    }
                    TagKind::SelfClosing => {}
                }
            } else if tbody_depth == 1 && tag.is_open() && tag.is_named("tr") {
                let row_start = tag.start;
                let Some(close) = scanner.matching_close("tr") else {
                    return Err(ReportError::InvalidReport("table row never closes".to_string()));
                };
                spans.push((row_start, close.end));
            }
        };

        let mut glue = Vec::with_capacity(spans.len() + 1);
        let mut cursor = body_start;
        for &(start, end) in &spans {
            glue.push(source[cursor..start].to_string());
            cursor = end;
        }
        glue.push(source[cursor..body_end].to_string());

        let rows = spans
            .iter()
            .map(|&(start, end)| ReportRow::from_fragment(&source[start..end]))
            .collect::<Vec<_>>();

        debug!(table = %table_id, rows = rows.len(), "parsed violations table");
        Ok(ReportDocument {
            source: source.to_string(),
            body_start,
            body_end,
            rows,
            glue,
            table_id,
        })
    }

    /// Read and parse a report file.
    ///
    /// The file must be valid UTF-8; anything else surfaces as
    /// [`ReportError::Io`].
    pub fn from_file(path: impl AsRef<Path>, locator: &TableLocator) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source, locator)
    }

    /// The id of the table this document was split around.
    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    /// The table body's rows, in their current order.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Number of rows in the table body.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Reorder the table's rows in place.
    ///
    /// Fails without touching the document when any row cannot produce the
    /// key `mode` sorts by.
    pub fn sort(&mut self, mode: SortMode) -> Result<()> {
        debug!(table = %self.table_id, %mode, rows = self.rows.len(), "sorting violations table");
        sort_rows(&mut self.rows, mode)
    }

    /// Occurrences of each rule cell value across the table body.
    pub fn rule_counts(&self) -> HashMap<String, u32> {
        context::count_column(&self.rows, ColumnMarker::Rule)
    }

    /// Occurrences of each path cell value across the table body.
    pub fn file_counts(&self) -> HashMap<String, u32> {
        context::count_column(&self.rows, ColumnMarker::Path)
    }

    /// Serialize the document, rows in their current order.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        out.push_str(&self.source[..self.body_start]);
        for (i, row) in self.rows.iter().enumerate() {
            out.push_str(&self.glue[i]);
            out.push_str(&row.fragment);
        }
        out.push_str(&self.glue[self.rows.len()]);
        out.push_str(&self.source[self.body_end..]);
        out
    }
}
