use crate::calendar;
use crate::error::{PlanError, PlanResult};
use crate::reference::ReferenceData;
use crate::render::Table;
use crate::schedule::ReadingSchedule;
use crate::track::ReadingUnit;

pub use crate::calendar::format_date;

/// Turns raw readings into display strings using abbreviations.
pub struct ReadingFormatter<'a> {
    reference: &'a ReferenceData,
}

impl<'a> ReadingFormatter<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    /// Single-chapter books render as the full name with spaces removed
    /// ("2 John" becomes "2John"); everything else as "{abbreviation} {chapter}".
    ///
    /// The collapsed form is display-only and does not parse back into a
    /// [`ReadingUnit`].
    pub fn format_reading(&self, unit: &ReadingUnit) -> PlanResult<String> {
        let info = self
            .reference
            .get(&unit.book)
            .ok_or_else(|| PlanError::UnknownBook {
                track: String::new(),
                book: unit.book.clone(),
            })?;
        if info.is_single_chapter() {
            Ok(info.name.replace(' ', ""))
        } else {
            Ok(format!("{} {}", info.abbreviation, unit.chapter))
        }
    }

    /// Parses a raw "book chapter" string, then formats it.
    pub fn format_reading_str(&self, raw: &str) -> PlanResult<String> {
        let unit: ReadingUnit = raw.parse()?;
        self.format_reading(&unit)
    }

    /// Every row of `schedule` as display strings, `Date` column first.
    pub fn format_schedule(&self, schedule: &ReadingSchedule) -> PlanResult<Table> {
        let mut table = Table::new(date_columns(schedule.columns()));
        for row in schedule.rows() {
            let mut cells = Vec::with_capacity(row.readings.len() + 1);
            cells.push(calendar::format_date(row.date));
            for (column, unit) in schedule.columns().iter().zip(&row.readings) {
                let cell = self.format_reading(unit).map_err(|err| match err {
                    PlanError::UnknownBook { book, .. } => PlanError::UnknownBook {
                        track: column.clone(),
                        book,
                    },
                    other => other,
                })?;
                cells.push(cell);
            }
            table.push_row(cells);
        }
        Ok(table)
    }
}

/// Free-function form of [`ReadingFormatter::format_reading`].
pub fn format_reading(unit: &ReadingUnit, reference: &ReferenceData) -> PlanResult<String> {
    ReadingFormatter::new(reference).format_reading(unit)
}

/// The raw schedule as a table of `YYYY-MM-DD` dates and "book chapter" strings.
pub fn raw_table(schedule: &ReadingSchedule) -> Table {
    let mut table = Table::new(date_columns(schedule.columns()));
    for row in schedule.rows() {
        let mut cells = Vec::with_capacity(row.readings.len() + 1);
        cells.push(row.date.format("%Y-%m-%d").to_string());
        cells.extend(row.readings.iter().map(ToString::to_string));
        table.push_row(cells);
    }
    table
}

fn date_columns(tracks: &[String]) -> Vec<String> {
    std::iter::once("Date".to_string())
        .chain(tracks.iter().cloned())
        .collect()
}
