//! DOCX text extraction.
//!
//! `docx-rs` decodes the container directly from bytes, so no temp-file
//! staging is involved. Paragraph and table text is flattened, one
//! paragraph per line, in document order.

use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};
use tracing::debug;

use crate::errors::AnalyzerError;

/// Extracts the flattened text of a DOCX document held fully in memory.
pub fn extract_text_from_docx(bytes: &[u8]) -> Result<String, AnalyzerError> {
    let docx = read_docx(bytes)?;

    let mut lines: Vec<String> = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => push_paragraph(paragraph, &mut lines),
            DocumentChild::Table(table) => push_table(table, &mut lines),
            _ => {}
        }
    }

    debug!(lines = lines.len(), "Extracted DOCX text");

    Ok(lines.join("\n"))
}

/// Flattens one paragraph's runs (including hyperlink runs) into a line.
/// Paragraphs with no visible text contribute nothing.
fn push_paragraph(paragraph: &Paragraph, lines: &mut Vec<String>) {
    let mut line = String::new();
    for child in &paragraph.children {
        match child {
            ParagraphChild::Run(run) => push_run(run, &mut line),
            ParagraphChild::Hyperlink(link) => {
                for linked in &link.children {
                    if let ParagraphChild::Run(run) = linked {
                        push_run(run, &mut line);
                    }
                }
            }
            _ => {}
        }
    }
    if !line.trim().is_empty() {
        lines.push(line);
    }
}

fn push_run(run: &Run, line: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(text) => line.push_str(&text.text),
            RunChild::Tab(_) => line.push(' '),
            _ => {}
        }
    }
}

/// Tables flatten cell-by-cell in row order, one cell paragraph per line.
fn push_table(table: &Table, lines: &mut Vec<String>) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            for content in &cell.children {
                if let TableCellContent::Paragraph(paragraph) = content {
                    push_paragraph(paragraph, lines);
                }
            }
        }
    }
}
