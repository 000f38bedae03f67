//! Document-level types.

use super::Section;
use serde::{Deserialize, Serialize};

/// A parsed report document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document title. The authored format has no title syntax, so this is
    /// supplied by the caller (empty if unset).
    pub title: String,

    /// Sections in document order. Nesting is expressed by `Section::level`.
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a new empty document.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Get the number of sections in the document.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Add a section to the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Check if the document has any sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.sections
            .iter()
            .map(|section| section.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Derive the document outline: section titles and depths in order.
    ///
    /// Sections without a title (the preamble) are skipped.
    pub fn outline(&self) -> Outline {
        let items = self
            .sections
            .iter()
            .filter(|s| !s.title.is_empty())
            .map(|s| OutlineItem::new(s.title.clone(), s.level))
            .collect();
        Outline { items }
    }
}

/// Document outline (table of contents view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Outline entries in document order.
    pub items: Vec<OutlineItem>,
}

impl Outline {
    /// Check if the outline is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// A single outline entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineItem {
    /// Section title.
    pub title: String,

    /// Section depth (1 = top level).
    pub level: u8,
}

impl OutlineItem {
    /// Create a new outline entry.
    pub fn new(title: impl Into<String>, level: u8) -> Self {
        Self {
            title: title.into(),
            level,
        }
    }
}
