//! Line classification for the authored format.
//!
//! Each input line is one of: a heading (leading `#` run plus a space), a
//! table row (first non-space character is `|`), blank, or prose. Table
//! separator rows are detected separately by [`separator_alignments`]
//! because they are only meaningful directly under a header row.

use crate::model::Alignment;
use regex::Regex;
use std::sync::OnceLock;

/// A classified input line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Line<'a> {
    /// A heading with its depth (number of `#` markers) and title text.
    Heading { level: u8, text: &'a str },

    /// A table row with its cells, unescaped and trimmed.
    TableRow { cells: Vec<String> },

    /// An empty or whitespace-only line.
    Blank,

    /// Anything else, trimmed.
    Prose(&'a str),
}

/// Classify a single input line.
pub(crate) fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }

    if trimmed.starts_with('#') {
        let marker_len = trimmed.chars().take_while(|&c| c == '#').count();
        let rest = &trimmed[marker_len..];
        // A marker run not followed by a space is prose, not a heading.
        if let Some(text) = rest.strip_prefix(' ') {
            // Depths beyond u8 are not representable; nobody nests that deep.
            let level = marker_len.min(u8::MAX as usize) as u8;
            return Line::Heading {
                level,
                text: text.trim(),
            };
        }
    }

    if trimmed.starts_with('|') {
        return Line::TableRow {
            cells: split_cells(trimmed),
        };
    }

    Line::Prose(trimmed)
}

/// Split a table row line into trimmed cells, honoring `\|` escapes.
///
/// The leading delimiter is dropped, as is a trailing empty cell produced
/// by a closing delimiter.
pub(crate) fn split_cells(line: &str) -> Vec<String> {
    let body = line.strip_prefix('|').unwrap_or(line);

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('|') => current.push('|'),
                Some(other) => {
                    current.push('\\');
                    current.push(other);
                }
                None => current.push('\\'),
            },
            '|' => {
                cells.push(current.trim().to_string());
                current = String::new();
            }
            _ => current.push(c),
        }
    }

    let last = current.trim();
    if !last.is_empty() {
        cells.push(last.to_string());
    }

    cells
}

fn separator_cell_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^:?-+:?$").expect("separator pattern is valid"))
}

/// If every cell looks like a markdown-style separator (`---`, `:--`,
/// `:-:`, `--:`), return the per-column alignments; otherwise `None`.
pub(crate) fn separator_alignments(cells: &[String]) -> Option<Vec<Alignment>> {
    if cells.is_empty() || !cells.iter().all(|c| separator_cell_re().is_match(c)) {
        return None;
    }

    let alignments = cells
        .iter()
        .map(|cell| {
            let open = cell.starts_with(':');
            let close = cell.ends_with(':');
            match (open, close) {
                (true, true) => Alignment::Center,
                (false, true) => Alignment::Right,
                _ => Alignment::Left,
            }
        })
        .collect();
    Some(alignments)
}
