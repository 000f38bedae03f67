//! # docweave
//!
//! Structured-text report parsing and rendering for Rust.
//!
//! This library parses a plain-text report source into a structured
//! document model and renders it to styled HTML or plain text.
//!
//! ## Source format
//!
//! - Headings: a run of `#` markers plus a space; the marker count is the
//!   section depth. Depths may not skip levels going deeper.
//! - Tables: contiguous lines starting with `|`; the first row is the
//!   header, an optional `| --- | :-: |` separator row sets per-column
//!   alignment, and every row must match the header's column count.
//! - Everything else is prose, accumulated into paragraphs at blank lines.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docweave::{parse_file, render};
//!
//! fn main() -> docweave::Result<()> {
//!     let doc = parse_file("report.txt")?;
//!
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&doc, &options)?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Alignment, Block, Document, Outline, OutlineItem, Paragraph, Section, Table};
pub use parser::{DocParser, ParseOptions};
pub use render::{DocumentStats, JsonFormat, OutputFormat, RenderOptions, RenderResult};

use std::io::Read;
use std::path::Path;

/// Parse report source text into a structured document.
pub fn parse_str(input: &str) -> Result<Document> {
    DocParser::new().parse(input)
}

/// Parse report source text with custom options.
pub fn parse_str_with_options(input: &str, options: ParseOptions) -> Result<Document> {
    DocParser::with_options(options).parse(input)
}

/// Parse a report source file and return a structured document.
///
/// # Example
///
/// ```no_run
/// use docweave::parse_file;
///
/// let doc = parse_file("report.txt").unwrap();
/// println!("Sections: {}", doc.section_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    parse_file_with_options(path, ParseOptions::default())
}

/// Parse a report source file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let input = std::fs::read_to_string(path)?;
    parse_str_with_options(&input, options)
}

/// Parse report source from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    parse_reader_with_options(reader, ParseOptions::default())
}

/// Parse report source from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Document> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_str_with_options(&input, options)
}

/// Convert a report source file to HTML.
///
/// # Example
///
/// ```no_run
/// use docweave::to_html;
///
/// let html = to_html("report.txt").unwrap();
/// std::fs::write("report.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_html(&doc, &RenderOptions::default())
}

/// Convert a report source file to plain text.
pub fn to_text<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_text(&doc, options)
}

/// Builder for parsing and rendering report documents.
///
/// # Example
///
/// ```no_run
/// use docweave::Docweave;
///
/// let html = Docweave::new()
///     .with_title("Quarterly Review")
///     .standalone()
///     .with_toc()
///     .parse("report.txt")?
///     .to_html()?;
/// # Ok::<(), docweave::Error>(())
/// ```
pub struct Docweave {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Docweave {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_title(title);
        self
    }

    /// Set the input size ceiling in bytes.
    pub fn with_max_input_bytes(mut self, bytes: usize) -> Self {
        self.parse_options = self.parse_options.with_max_input_bytes(bytes);
        self
    }

    /// Emit standalone HTML pages.
    pub fn standalone(mut self) -> Self {
        self.render_options = self.render_options.with_standalone(true);
        self
    }

    /// Include a table of contents in output.
    pub fn with_toc(mut self) -> Self {
        self.render_options = self.render_options.with_toc(true);
        self
    }

    /// Set the maximum HTML heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.render_options = self.render_options.with_max_heading(level);
        self
    }

    /// Parse a source file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<DocweaveResult> {
        let document = parse_file_with_options(path, self.parse_options)?;
        Ok(DocweaveResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse source text and return a result wrapper.
    pub fn parse_str(self, input: &str) -> Result<DocweaveResult> {
        let document = parse_str_with_options(input, self.parse_options)?;
        Ok(DocweaveResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Docweave {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a report document.
pub struct DocweaveResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl DocweaveResult {
    /// Convert to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Write back to the authored source format.
    pub fn to_source(&self) -> String {
        render::to_source(&self.document)
    }

    /// Collect content statistics.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats::collect(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
