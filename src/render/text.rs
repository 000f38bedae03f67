//! Plain text rendering for report documents.

use crate::error::Result;
use crate::model::{Alignment, Block, Document, Section, Table};

use super::RenderOptions;

/// Convert a document to plain text.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    if !doc.title.is_empty() {
        push_underlined(&mut output, &doc.title, '=');
    }

    if options.include_toc {
        render_toc(&mut output, doc);
    }

    for section in &doc.sections {
        render_section(&mut output, section);
    }

    Ok(output.trim_end().to_string() + "\n")
}

fn render_toc(output: &mut String, doc: &Document) {
    let outline = doc.outline();
    if outline.is_empty() {
        return;
    }
    output.push_str("Contents\n\n");
    for item in &outline.items {
        let indent = "  ".repeat(item.level.saturating_sub(1) as usize);
        output.push_str(&format!("{}- {}\n", indent, item.title));
    }
    output.push('\n');
}

fn render_section(output: &mut String, section: &Section) {
    match (section.title.is_empty(), section.level) {
        (true, _) => {}
        (false, 1) => push_underlined(output, &section.title, '='),
        (false, 2) => push_underlined(output, &section.title, '-'),
        (false, level) => {
            let indent = "  ".repeat(level.saturating_sub(2) as usize);
            output.push_str(&format!("{}{}\n\n", indent, section.title));
        }
    }

    for block in &section.blocks {
        match block {
            Block::Paragraph(p) => {
                if !p.is_empty() {
                    output.push_str(&p.text);
                    output.push_str("\n\n");
                }
            }
            Block::Table(t) => render_table(output, t),
        }
    }
}

fn push_underlined(output: &mut String, title: &str, ruler: char) {
    output.push_str(title);
    output.push('\n');
    output.push_str(&ruler.to_string().repeat(title.chars().count()));
    output.push_str("\n\n");
}

/// Render a table as width-aligned ASCII columns with a dash ruler under
/// the header row.
fn render_table(output: &mut String, table: &Table) {
    let widths = column_widths(table);

    output.push_str(&format_row(&table.headers, &table.alignments, &widths));
    output.push('\n');

    let ruler: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&ruler.join("  "));
    output.push('\n');

    for row in &table.rows {
        output.push_str(&format_row(row, &table.alignments, &widths));
        output.push('\n');
    }
    output.push('\n');
}

fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }
    widths
}

fn format_row(cells: &[String], alignments: &[Alignment], widths: &[usize]) -> String {
    let formatted: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            let alignment = alignments.get(i).copied().unwrap_or_default();
            pad_cell(cell, *width, alignment)
        })
        .collect();
    formatted.join("  ").trim_end().to_string()
}

fn pad_cell(cell: &str, width: usize, alignment: Alignment) -> String {
    let len = cell.chars().count();
    let pad = width.saturating_sub(len);
    match alignment {
        Alignment::Left => format!("{}{}", cell, " ".repeat(pad)),
        Alignment::Right => format!("{}{}", " ".repeat(pad), cell),
        Alignment::Center => {
            let left = pad / 2;
            format!("{}{}{}", " ".repeat(left), cell, " ".repeat(pad - left))
        }
    }
}
