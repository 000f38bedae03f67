//! Rendering module for converting documents to output formats.

mod html;
mod json;
mod options;
mod result;
mod source;
mod text;

pub use html::{to_html, to_html_with_stats, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use options::{OutputFormat, RenderOptions};
pub use result::{DocumentStats, RenderResult};
pub use source::to_source;
pub use text::to_text;

use crate::error::Result;
use crate::model::Document;

/// Render a document to the given output format.
///
/// Pure transform: the document is borrowed read-only and the returned
/// bytes are not written anywhere; writing is the caller's responsibility.
pub fn render(doc: &Document, format: OutputFormat, options: &RenderOptions) -> Result<Vec<u8>> {
    let content = match format {
        OutputFormat::Html => to_html(doc, options)?,
        OutputFormat::PlainText => to_text(doc, options)?,
    };
    Ok(content.into_bytes())
}
