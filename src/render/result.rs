//! Rendering result with content statistics.

use crate::model::{Block, Document};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (HTML, text, etc.)
    pub content: String,

    /// Content statistics
    pub stats: DocumentStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: DocumentStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Number of sections (preamble included)
    pub section_count: usize,

    /// Number of paragraph blocks
    pub paragraph_count: usize,

    /// Number of table blocks
    pub table_count: usize,

    /// Number of table body rows across all tables
    pub table_row_count: usize,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: usize,

    /// Character count (excluding whitespace)
    pub char_count: usize,
}

impl DocumentStats {
    /// Collect statistics from a document without mutating it.
    pub fn collect(doc: &Document) -> Self {
        let mut stats = Self {
            section_count: doc.section_count(),
            ..Self::default()
        };

        for section in &doc.sections {
            for block in &section.blocks {
                match block {
                    Block::Paragraph(_) => stats.paragraph_count += 1,
                    Block::Table(t) => {
                        stats.table_count += 1;
                        stats.table_row_count += t.row_count();
                    }
                }
            }
        }

        let text = doc.plain_text();
        stats.word_count = text.split_whitespace().count();
        stats.char_count = text.chars().filter(|c| !c.is_whitespace()).count();

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, Section, Table};

    #[test]
    fn test_collect_stats() {
        let mut doc = Document::new("");
        let mut section = Section::new("Summary", 1);
        section.add_paragraph(Paragraph::new("one two three"));
        let mut table = Table::new(vec!["H".into()]);
        table.add_row(vec!["x".into()]);
        table.add_row(vec!["y".into()]);
        section.add_table(table);
        doc.add_section(section);

        let stats = DocumentStats::collect(&doc);
        assert_eq!(stats.section_count, 1);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.table_count, 1);
        assert_eq!(stats.table_row_count, 2);
        assert_eq!(stats.word_count, 7); // title + prose + header + cells
    }

    #[test]
    fn test_render_result() {
        let result = RenderResult::new("<p>hi</p>".to_string(), DocumentStats::default());
        assert_eq!(result.content_len(), 9);
    }
}
