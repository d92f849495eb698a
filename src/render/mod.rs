//! Tabular rendering of a plan: a plain matrix of display strings plus
//! renderers that split it into month sections.

use crate::calendar::MonthSegment;

pub mod html;
pub mod text;

pub use html::HtmlRenderer;
pub use text::{TextRenderer, render_text_table};

/// A matrix of display strings with a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Rows inside `segment`; out-of-range segments yield no rows.
    pub fn segment_rows(&self, segment: &MonthSegment) -> &[Vec<String>] {
        self.rows.get(segment.rows.clone()).unwrap_or(&[])
    }
}

/// Produces one self-contained block per month section.
pub trait SegmentRenderer {
    fn render_segment(&self, label: &str, rows: &[Vec<String>], columns: &[String]) -> String;
}

/// Renders every segment in order and concatenates the blocks.
pub fn render_segments<R: SegmentRenderer + ?Sized>(
    renderer: &R,
    table: &Table,
    segments: &[MonthSegment],
) -> String {
    segments
        .iter()
        .map(|segment| {
            renderer.render_segment(&segment.label, table.segment_rows(segment), table.columns())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
