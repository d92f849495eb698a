use crate::calendar::{self, MonthBoundary, MonthSegment};
use crate::error::{PlanError, PlanResult};
use crate::metadata::PlanMetadata;
use crate::reference::ReferenceData;
use crate::track::{ReadingUnit, Track};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// One calendar day: the date and each track's reading, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub date: NaiveDate,
    pub readings: Vec<ReadingUnit>,
}

/// Day-by-day readings for a closed date range.
///
/// Rows are value snapshots; they do not reference the tracks that produced
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingSchedule {
    columns: Vec<String>,
    rows: Vec<ScheduleRow>,
}

impl ReadingSchedule {
    /// Advances `tracks` in lock-step, one reading per day, from `start`
    /// through `end`.
    ///
    /// Each track's current reading is captured before it advances. Cursors
    /// are left where the last day put them, so running again on the same
    /// tracks continues the cycle rather than restarting it.
    pub fn generate(start: NaiveDate, end: NaiveDate, tracks: &mut [Track]) -> PlanResult<Self> {
        if end < start {
            return Err(PlanError::InvalidRange { start, end });
        }
        let mut names = HashSet::new();
        for track in tracks.iter() {
            if !names.insert(track.name()) {
                return Err(PlanError::DuplicateTrack(track.name().to_string()));
            }
        }

        for track in tracks.iter() {
            info!(track = track.name(), readings = track.len(), "track sequence built");
            if track.len() == 1 {
                warn!(track = track.name(), "track repeats a single reading every day");
            }
        }

        let columns = tracks.iter().map(|t| t.name().to_string()).collect();
        let days = (end - start).num_days() as usize + 1;
        let mut rows = Vec::with_capacity(days);
        for date in calendar::days_in_range(start, end) {
            let mut readings = Vec::with_capacity(tracks.len());
            for track in tracks.iter_mut() {
                readings.push(track.current()?.clone());
                track.advance();
            }
            rows.push(ScheduleRow { date, readings });
        }
        debug!(days = rows.len(), %start, %end, "schedule generated");

        Ok(Self { columns, rows })
    }

    /// Assembles a schedule from rows read back from an export.
    pub fn from_rows(columns: Vec<String>, rows: Vec<ScheduleRow>) -> PlanResult<Self> {
        for row in &rows {
            if row.readings.len() != columns.len() {
                return Err(PlanError::InvalidConfig(format!(
                    "row for {} has {} readings but there are {} tracks",
                    row.date,
                    row.readings.len(),
                    columns.len()
                )));
            }
        }
        for pair in rows.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(PlanError::InvalidRange {
                    start: pair[0].date,
                    end: pair[1].date,
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Checks every reading against `reference`. Used on schedules read back
    /// from an export, which may not match the reference data.
    pub fn check_readings(&self, reference: &ReferenceData) -> PlanResult<()> {
        for row in &self.rows {
            for (column, unit) in self.columns.iter().zip(&row.readings) {
                reference.check_reading(unit).map_err(|err| match err {
                    PlanError::UnknownBook { book, .. } => PlanError::UnknownBook {
                        track: column.clone(),
                        book,
                    },
                    other => other,
                })?;
            }
        }
        Ok(())
    }

    /// Track names in column order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn days(&self) -> usize {
        self.rows.len()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|row| row.date)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|row| row.date)
    }

    pub fn month_boundaries(&self) -> Vec<MonthBoundary> {
        let boundaries = calendar::month_boundaries(self.rows.iter().map(|row| row.date));
        for boundary in &boundaries {
            debug!(label = ?boundary.label, index = boundary.index, "month boundary");
        }
        boundaries
    }

    pub fn month_segments(&self) -> Vec<MonthSegment> {
        calendar::month_segments(&self.month_boundaries())
    }

    /// "Bible Reading Plan for: 2023-01-01 to 2023-12-31".
    pub fn heading(&self) -> String {
        match (self.start_date(), self.end_date()) {
            (Some(start), Some(end)) => format!("Bible Reading Plan for: {start} to {end}"),
            _ => "Bible Reading Plan".to_string(),
        }
    }

    /// Metadata describing this schedule's span under `plan_name`.
    pub fn metadata(&self, plan_name: &str) -> Option<PlanMetadata> {
        Some(PlanMetadata::new(plan_name, self.start_date()?, self.end_date()?))
    }
}

/// Shorthand for [`ReadingSchedule::generate`].
pub fn generate(
    start: NaiveDate,
    end: NaiveDate,
    tracks: &mut [Track],
) -> PlanResult<ReadingSchedule> {
    ReadingSchedule::generate(start, end, tracks)
}
