//! Authored-format writer.
//!
//! Emits the same plain-text convention the parser consumes, so that for
//! any parser-produced document `d`, parsing `to_source(&d)` yields a
//! document structurally equal to `d` (the title travels out of band via
//! [`ParseOptions::with_title`](crate::parser::ParseOptions::with_title)).
//! Hand-built documents whose paragraph text starts with `#` or `|` are
//! not round-trip safe.

use crate::model::{Alignment, Block, Document, Section, Table};

/// Write a document back to the authored source format.
pub fn to_source(doc: &Document) -> String {
    let mut output = String::new();
    for section in &doc.sections {
        render_section(&mut output, section);
    }
    output
}

fn render_section(output: &mut String, section: &Section) {
    if !section.title.is_empty() {
        output.push_str(&"#".repeat(section.level as usize));
        output.push(' ');
        output.push_str(&section.title);
        output.push_str("\n\n");
    }

    for block in &section.blocks {
        match block {
            Block::Paragraph(p) => {
                output.push_str(&p.text);
                output.push_str("\n\n");
            }
            Block::Table(t) => render_table(output, t),
        }
    }
}

fn render_table(output: &mut String, table: &Table) {
    push_row(output, &table.headers);

    output.push('|');
    for alignment in &table.alignments {
        let marker = match alignment {
            Alignment::Left => " --- |",
            Alignment::Center => " :-: |",
            Alignment::Right => " --: |",
        };
        output.push_str(marker);
    }
    output.push('\n');

    for row in &table.rows {
        push_row(output, row);
    }
    output.push('\n');
}

fn push_row(output: &mut String, cells: &[String]) {
    output.push('|');
    for cell in cells {
        output.push(' ');
        output.push_str(&escape_cell(cell));
        output.push_str(" |");
    }
    output.push('\n');
}

/// Escape delimiter characters so cell content survives re-parsing.
fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}
