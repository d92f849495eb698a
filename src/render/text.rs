use super::{SegmentRenderer, Table};

/// Bordered fixed-width table for terminal output.
pub fn render_text_table(table: &Table) -> String {
    render_rows(table.columns(), table.rows())
}

fn render_rows(columns: &[String], rows: &[Vec<String>]) -> String {
    // Compute column widths
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (ci, cell) in row.iter().enumerate().take(widths.len()) {
            widths[ci] = widths[ci].max(cell.chars().count());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    push_line(&mut out, columns.iter().map(String::as_str), &widths);
    out.push_str(&sep);
    out.push('\n');
    for row in rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut cells = cells;
    out.push('|');
    for width in widths {
        let cell = cells.next().unwrap_or("");
        out.push(' ');
        out.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        if pad > 0 {
            out.push_str(&" ".repeat(pad));
        }
        out.push_str(" |");
    }
    out.push('\n');
}

/// Month sections as a title line over a bordered table.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer;

impl SegmentRenderer for TextRenderer {
    fn render_segment(&self, label: &str, rows: &[Vec<String>], columns: &[String]) -> String {
        format!("{label}\n{}", render_rows(columns, rows))
    }
}
