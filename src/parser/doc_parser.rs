//! Single-pass parser for the authored report format.

use log::debug;

use crate::error::{Error, Result};
use crate::model::{Document, Paragraph, Section, Table};

use super::line::{classify, separator_alignments, Line};
use super::ParseOptions;

/// Parser for report source text.
///
/// Scans the input line by line in a single forward pass, accumulating
/// prose into paragraphs and contiguous table rows into tables. Structural
/// violations (skipped heading depths, ragged tables) fail with
/// [`Error::Format`] carrying the offending 1-based line number.
pub struct DocParser {
    options: ParseOptions,
}

/// A table under construction, remembered until a non-table line closes it.
struct TableBuilder {
    table: Table,
    saw_separator: bool,
}

impl DocParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with the given options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse source text into a [`Document`].
    pub fn parse(&self, input: &str) -> Result<Document> {
        let limit = self.options.max_input_bytes;
        if limit > 0 && input.len() > limit {
            return Err(Error::InputTooLarge {
                size: input.len(),
                limit,
            });
        }

        let mut doc = Document::new(self.options.title.clone().unwrap_or_default());
        let mut section = Section::preamble();
        let mut prev_level: u8 = 0;

        let mut paragraph: Vec<&str> = Vec::new();
        let mut table: Option<TableBuilder> = None;

        let mut line_count = 0;
        for (index, raw) in input.lines().enumerate() {
            let line_no = index + 1;
            line_count = line_no;

            match classify(raw) {
                Line::Heading { level, text } => {
                    flush_paragraph(&mut paragraph, &mut section);
                    flush_table(&mut table, &mut section);

                    if level > prev_level + 1 {
                        return Err(Error::format(
                            line_no,
                            format!(
                                "heading level {} skips a depth (previous level was {})",
                                level, prev_level
                            ),
                        ));
                    }
                    prev_level = level;

                    if !(section.is_preamble() && section.is_empty()) {
                        doc.add_section(section);
                    }
                    section = Section::new(text, level);
                }
                Line::TableRow { cells } => {
                    flush_paragraph(&mut paragraph, &mut section);

                    match table.as_mut() {
                        None => {
                            table = Some(TableBuilder {
                                table: Table::new(cells),
                                saw_separator: false,
                            });
                        }
                        Some(builder) => {
                            let expected = builder.table.column_count();
                            let is_separator_slot =
                                builder.table.is_empty() && !builder.saw_separator;
                            if is_separator_slot {
                                if let Some(alignments) = separator_alignments(&cells) {
                                    if alignments.len() != expected {
                                        return Err(Error::format(
                                            line_no,
                                            format!(
                                                "table separator has {} columns, expected {}",
                                                alignments.len(),
                                                expected
                                            ),
                                        ));
                                    }
                                    builder.table.alignments = alignments;
                                    builder.saw_separator = true;
                                    continue;
                                }
                            }
                            if cells.len() != expected {
                                return Err(Error::format(
                                    line_no,
                                    format!(
                                        "table row has {} columns, expected {}",
                                        cells.len(),
                                        expected
                                    ),
                                ));
                            }
                            builder.table.add_row(cells);
                        }
                    }
                }
                Line::Blank => {
                    flush_paragraph(&mut paragraph, &mut section);
                    flush_table(&mut table, &mut section);
                }
                Line::Prose(text) => {
                    flush_table(&mut table, &mut section);
                    paragraph.push(text);
                }
            }
        }

        flush_paragraph(&mut paragraph, &mut section);
        flush_table(&mut table, &mut section);
        if !(section.is_preamble() && section.is_empty()) {
            doc.add_section(section);
        }

        debug!(
            "parsed {} sections from {} lines",
            doc.section_count(),
            line_count
        );
        Ok(doc)
    }
}

impl Default for DocParser {
    fn default() -> Self {
        Self::new()
    }
}

fn flush_paragraph(lines: &mut Vec<&str>, section: &mut Section) {
    if lines.is_empty() {
        return;
    }
    let text = lines.join(" ");
    lines.clear();
    section.add_paragraph(Paragraph::new(text));
}

fn flush_table(builder: &mut Option<TableBuilder>, section: &mut Section) {
    if let Some(builder) = builder.take() {
        section.add_table(builder.table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, Block};

    fn parse(input: &str) -> Result<Document> {
        DocParser::new().parse(input)
    }

    #[test]
    fn test_parse_empty_input() {
        let doc = parse("").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_heading_and_prose() {
        let doc = parse("# Summary\n\nFirst line\nsecond line.\n").unwrap();
        assert_eq!(doc.section_count(), 1);

        let section = &doc.sections[0];
        assert_eq!(section.title, "Summary");
        assert_eq!(section.level, 1);
        assert_eq!(
            section.blocks[0],
            Block::Paragraph(Paragraph::new("First line second line."))
        );
    }

    #[test]
    fn test_parse_preamble() {
        let doc = parse("Leading prose.\n\n# First\n").unwrap();
        assert_eq!(doc.section_count(), 2);
        assert!(doc.sections[0].is_preamble());
        assert_eq!(doc.sections[1].title, "First");
    }

    #[test]
    fn test_parse_table_with_separator() {
        let input = "\
# Data

| Name | Score |
| :--- | ---: |
| Alice | 9 |
| Bob | 7 |
";
        let doc = parse(input).unwrap();
        let Block::Table(table) = &doc.sections[0].blocks[0] else {
            panic!("expected table block");
        };
        assert_eq!(table.headers, vec!["Name", "Score"]);
        assert_eq!(table.alignments, vec![Alignment::Left, Alignment::Right]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_parse_table_without_separator() {
        let doc = parse("| A | B |\n| 1 | 2 |\n").unwrap();
        let Block::Table(table) = &doc.sections[0].blocks[0] else {
            panic!("expected table block");
        };
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["1".to_string(), "2".to_string()]]);
    }

    #[test]
    fn test_ragged_table_row_fails() {
        let err = parse("| A | B |\n| 1 | 2 | 3 |\n").unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert!(err.to_string().contains("3 columns, expected 2"));
    }

    #[test]
    fn test_ragged_separator_fails() {
        let err = parse("| A | B |\n| --- |\n").unwrap_err();
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_skipped_heading_depth_fails() {
        let err = parse("# One\n\n### Three\n").unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert!(err.to_string().contains("skips a depth"));
    }

    #[test]
    fn test_first_heading_must_be_top_level() {
        let err = parse("## Not Top\n").unwrap_err();
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn test_heading_depth_may_drop_freely() {
        let doc = parse("# A\n## B\n### C\n# D\n").unwrap();
        let levels: Vec<u8> = doc.sections.iter().map(|s| s.level).collect();
        assert_eq!(levels, vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_blank_line_splits_tables() {
        let doc = parse("| A |\n| 1 |\n\n| B |\n| 2 |\n").unwrap();
        assert_eq!(doc.sections[0].block_count(), 2);
    }

    #[test]
    fn test_input_size_ceiling() {
        let parser = DocParser::with_options(ParseOptions::new().with_max_input_bytes(8));
        let err = parser.parse("# A heading well over eight bytes\n").unwrap_err();
        assert!(matches!(err, Error::InputTooLarge { limit: 8, .. }));
    }

    #[test]
    fn test_title_from_options() {
        let parser = DocParser::with_options(ParseOptions::new().with_title("Report"));
        let doc = parser.parse("# Body\n").unwrap();
        assert_eq!(doc.title, "Report");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let input = "# A\n\nProse here.\n\n| X | Y |\n| 1 | 2 |\n";
        let first = parse(input).unwrap();
        let second = parse(input).unwrap();
        assert_eq!(first, second);
    }
}
