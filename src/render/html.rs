use super::{SegmentRenderer, Table, render_segments};
use crate::calendar::MonthSegment;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const STYLE: &str = "body { font-family: sans-serif; } \
table { border-collapse: collapse; margin-bottom: 1.5em; } \
th, td { border: 1px solid #999; padding: 2px 6px; text-align: left; }";

/// Month sections as `<h3>` headings followed by presentation tables.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    section_title: String,
}

impl HtmlRenderer {
    /// `section_title` prefixes each month heading, e.g.
    /// "Horner Classic Bible Reading Plan - January 2023".
    pub fn new(section_title: impl Into<String>) -> Self {
        Self {
            section_title: section_title.into(),
        }
    }

    pub fn month_block(&self, label: &str, rows: &[Vec<String>], columns: &[String]) -> Markup {
        html! {
            h3 { (self.section_title) " - " (label) }
            table role="presentation" {
                thead {
                    tr {
                        @for column in columns {
                            th { (column) }
                        }
                    }
                }
                tbody {
                    @for row in rows {
                        tr {
                            @for cell in row {
                                td { (cell) }
                            }
                        }
                    }
                }
            }
        }
    }

    /// A complete HTML document with one section per month.
    pub fn document(&self, heading: &str, table: &Table, segments: &[MonthSegment]) -> String {
        let body = render_segments(self, table, segments);
        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { (heading) }
                    style { (PreEscaped(STYLE)) }
                }
                body {
                    h2 { (heading) }
                    (PreEscaped(body))
                }
            }
        };
        markup.into_string()
    }
}

impl SegmentRenderer for HtmlRenderer {
    fn render_segment(&self, label: &str, rows: &[Vec<String>], columns: &[String]) -> String {
        self.month_block(label, rows, columns).into_string()
    }
}
