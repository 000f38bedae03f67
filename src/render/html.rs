//! HTML rendering for report documents.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::error::Result;
use crate::model::{Alignment, Block, Document, Paragraph, Section, Table};

use super::{DocumentStats, RenderOptions, RenderResult};

/// Default stylesheet embedded in standalone pages.
const DEFAULT_STYLE: &str = "\
body { font-family: -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif;
       max-width: 48rem; margin: 2rem auto; padding: 0 1rem; line-height: 1.6;
       color: #1f2328; }
h1, h2, h3, h4, h5, h6 { line-height: 1.25; margin-top: 1.5em; }
table { border-collapse: collapse; margin: 1em 0; }
th, td { border: 1px solid #d0d7de; padding: 0.4em 0.8em; }
th { background: #f6f8fa; }
nav.toc { border: 1px solid #d0d7de; border-radius: 6px; padding: 0.5em 1em;
          margin: 1em 0; }
nav.toc ul { list-style: none; margin: 0; padding: 0; }
";

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to HTML along with content statistics.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let content = to_html(doc, options)?;
    Ok(RenderResult::new(content, DocumentStats::collect(doc)))
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to HTML.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();
        let slugs = assign_slugs(doc);

        if self.options.standalone {
            self.render_head(&mut output, doc);
        }

        if !doc.title.is_empty() {
            output.push_str(&format!(
                "<h1 class=\"title\">{}</h1>\n",
                encode_text(&doc.title)
            ));
        }

        if self.options.include_toc {
            self.render_toc(&mut output, doc, &slugs);
        }

        for (section, slug) in doc.sections.iter().zip(&slugs) {
            self.render_section(&mut output, section, slug.as_deref());
        }

        if self.options.standalone {
            output.push_str("</body>\n</html>\n");
        }

        Ok(output)
    }

    fn render_head(&self, output: &mut String, doc: &Document) {
        let title = if doc.title.is_empty() {
            "Document"
        } else {
            &doc.title
        };
        output.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        output.push_str(&format!("<title>{}</title>\n", encode_text(title)));
        output.push_str("<style>\n");
        output.push_str(DEFAULT_STYLE);
        output.push_str("</style>\n</head>\n<body>\n");
    }

    fn render_toc(&self, output: &mut String, doc: &Document, slugs: &[Option<String>]) {
        let outline = doc.outline();
        if outline.is_empty() {
            return;
        }

        output.push_str("<nav class=\"toc\">\n<ul>\n");
        for (section, slug) in doc.sections.iter().zip(slugs) {
            let Some(slug) = slug else { continue };
            let indent = section.level.saturating_sub(1);
            output.push_str(&format!(
                "<li style=\"padding-left: {}rem\"><a href=\"#{}\">{}</a></li>\n",
                indent,
                encode_double_quoted_attribute(slug),
                encode_text(&section.title)
            ));
        }
        output.push_str("</ul>\n</nav>\n");
    }

    fn render_section(&self, output: &mut String, section: &Section, slug: Option<&str>) {
        if let Some(slug) = slug {
            let level = section.level.min(self.options.max_heading_level);
            output.push_str(&format!(
                "<h{} id=\"{}\">{}</h{}>\n",
                level,
                encode_double_quoted_attribute(slug),
                encode_text(&section.title),
                level
            ));
        }
        for block in &section.blocks {
            self.render_block(output, block);
        }
    }

    fn render_block(&self, output: &mut String, block: &Block) {
        match block {
            Block::Paragraph(p) => self.render_paragraph(output, p),
            Block::Table(t) => self.render_table(output, t),
        }
    }

    fn render_paragraph(&self, output: &mut String, para: &Paragraph) {
        if para.is_empty() {
            return;
        }
        output.push_str(&format!("<p>{}</p>\n", encode_text(&para.text)));
    }

    fn render_table(&self, output: &mut String, table: &Table) {
        output.push_str("<table>\n<thead>\n<tr>");
        for (header, alignment) in table.headers.iter().zip(&table.alignments) {
            output.push_str(&format!(
                "<th{}>{}</th>",
                align_attr(*alignment),
                encode_text(header)
            ));
        }
        output.push_str("</tr>\n</thead>\n<tbody>\n");

        for row in &table.rows {
            output.push_str("<tr>");
            for (cell, alignment) in row.iter().zip(&table.alignments) {
                output.push_str(&format!(
                    "<td{}>{}</td>",
                    align_attr(*alignment),
                    encode_text(cell)
                ));
            }
            output.push_str("</tr>\n");
        }

        output.push_str("</tbody>\n</table>\n");
    }
}

fn align_attr(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "",
        Alignment::Center => " style=\"text-align: center\"",
        Alignment::Right => " style=\"text-align: right\"",
    }
}

/// Compute a unique anchor slug per titled section; `None` for the preamble.
fn assign_slugs(doc: &Document) -> Vec<Option<String>> {
    let mut used: Vec<String> = Vec::new();
    doc.sections
        .iter()
        .map(|section| {
            if section.title.is_empty() {
                return None;
            }
            let base = slugify(&section.title);
            let mut slug = base.clone();
            let mut counter = 1;
            while used.contains(&slug) {
                slug = format!("{}-{}", base, counter);
                counter += 1;
            }
            used.push(slug.clone());
            Some(slug)
        })
        .collect()
}

/// Lowercase a title into a URL-safe anchor id.
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = true;
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    let trimmed = slug.trim_end_matches('-');
    if trimmed.is_empty() {
        "section".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;

    fn sample_doc() -> Document {
        let mut doc = Document::new("Risk Review");
        let mut summary = Section::new("Summary", 1);
        summary.add_paragraph(Paragraph::new("Prose with <angle> & ampersand."));
        let mut table = Table::new(vec!["Platform".into(), "Severity".into()]);
        table.add_row(vec!["Gateway".into(), "High".into()]);
        table.add_row(vec!["Portal".into(), "Low".into()]);
        summary.add_table(table);
        doc.add_section(summary);
        doc
    }

    #[test]
    fn test_fragment_output() {
        let html = to_html(&sample_doc(), &RenderOptions::default()).unwrap();
        assert!(html.contains("<h1 id=\"summary\">Summary</h1>"));
        assert!(html.contains("&lt;angle&gt;"));
        assert!(!html.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn test_standalone_output() {
        let options = RenderOptions::new().with_standalone(true);
        let html = to_html(&sample_doc(), &options).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Risk Review</title>"));
        assert!(html.contains("<style>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_table_header_and_body() {
        let html = to_html(&sample_doc(), &RenderOptions::default()).unwrap();
        assert_eq!(html.matches("<th>").count(), 2);
        assert_eq!(html.matches("<td>").count(), 4);
        assert!(html.contains("<thead>"));
        assert!(html.contains("<tbody>"));
    }

    #[test]
    fn test_toc_links_match_heading_ids() {
        let mut doc = sample_doc();
        doc.add_section(Section::new("Details", 2));
        let options = RenderOptions::new().with_toc(true);
        let html = to_html(&doc, &options).unwrap();
        assert!(html.contains("<nav class=\"toc\">"));
        assert!(html.contains("href=\"#summary\""));
        assert!(html.contains("<h2 id=\"details\">"));
    }

    #[test]
    fn test_duplicate_titles_get_unique_ids() {
        let mut doc = Document::new("");
        doc.add_section(Section::new("Notes", 1));
        doc.add_section(Section::new("Notes", 1));
        let html = to_html(&doc, &RenderOptions::default()).unwrap();
        assert!(html.contains("id=\"notes\""));
        assert!(html.contains("id=\"notes-1\""));
    }

    #[test]
    fn test_heading_level_clamped() {
        let mut doc = Document::new("");
        for (title, level) in [("A", 1), ("B", 2), ("C", 3)] {
            doc.add_section(Section::new(title, level));
        }
        let options = RenderOptions::new().with_max_heading(2);
        let html = to_html(&doc, &options).unwrap();
        assert!(html.contains("<h2 id=\"c\">C</h2>"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Root Cause Analysis"), "root-cause-analysis");
        assert_eq!(slugify("  %% "), "section");
        assert_eq!(slugify("CVE-2024-1234!"), "cve-2024-1234");
    }
}
