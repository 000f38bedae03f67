//! Section-level types.

use super::{Block, Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A titled, nestable unit of document content.
///
/// Sections are stored flat in the [`Document`](super::Document); `level`
/// records the heading depth (1 = top level). The parser guarantees that in
/// document order levels never increase by more than one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section title. Empty for the implicit preamble section.
    pub title: String,

    /// Heading depth (1 = top level).
    pub level: u8,

    /// Content blocks in the section.
    pub blocks: Vec<Block>,
}

impl Section {
    /// Create a new empty section.
    pub fn new(title: impl Into<String>, level: u8) -> Self {
        Self {
            title: title.into(),
            level: level.max(1),
            blocks: Vec::new(),
        }
    }

    /// Create the implicit untitled preamble section that holds content
    /// appearing before the first heading.
    pub fn preamble() -> Self {
        Self::new("", 1)
    }

    /// Whether this is the untitled preamble section.
    pub fn is_preamble(&self) -> bool {
        self.title.is_empty()
    }

    /// Add a block to the section.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Add a paragraph to the section.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    /// Add a table to the section.
    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// Get the number of blocks in the section.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the section has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get plain text content of the section, title included.
    pub fn plain_text(&self) -> String {
        let mut parts = Vec::with_capacity(self.blocks.len() + 1);
        if !self.title.is_empty() {
            parts.push(self.title.clone());
        }
        parts.extend(self.blocks.iter().map(|block| block.plain_text()));
        parts.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_new() {
        let section = Section::new("Findings", 2);
        assert_eq!(section.title, "Findings");
        assert_eq!(section.level, 2);
        assert!(section.is_empty());
    }

    #[test]
    fn test_section_level_floor() {
        // Level 0 is not representable; constructor clamps to 1.
        let section = Section::new("Top", 0);
        assert_eq!(section.level, 1);
    }

    #[test]
    fn test_preamble() {
        let preamble = Section::preamble();
        assert!(preamble.is_preamble());
        assert_eq!(preamble.level, 1);

        let titled = Section::new("Intro", 1);
        assert!(!titled.is_preamble());
    }

    #[test]
    fn test_section_blocks() {
        let mut section = Section::new("Data", 1);
        section.add_paragraph(Paragraph::new("Context."));
        section.add_table(Table::new(vec!["A".into(), "B".into()]));

        assert_eq!(section.block_count(), 2);
        assert!(section.blocks[0].is_paragraph());
        assert!(section.blocks[1].is_table());
    }
}
