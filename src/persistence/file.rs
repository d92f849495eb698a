use super::{PersistenceError, PersistenceResult};
use crate::config::PlanConfig;
use crate::error::PlanError;
use crate::format;
use crate::playlist::{DailyPlaylist, PlaylistSettings};
use crate::reference::{BookInfo, ReferenceData};
use crate::render::Table;
use crate::schedule::{ReadingSchedule, ScheduleRow};
use crate::track::ReadingUnit;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Deserialize)]
struct BookCsvRecord {
    book: String,
    abbreviation: String,
    chapters: String,
}

impl BookCsvRecord {
    fn into_book(self) -> PersistenceResult<BookInfo> {
        let chapters = self.chapters.trim().parse::<u32>().map_err(|e| {
            PlanError::InvalidReference(format!(
                "invalid chapter count '{}' for '{}': {e}",
                self.chapters, self.book
            ))
        })?;
        Ok(BookInfo::new(
            self.book.trim(),
            self.abbreviation.trim(),
            chapters,
        ))
    }
}

/// Reads `book,abbreviation,chapters` records.
pub fn read_reference_data<R: Read>(input: R) -> PersistenceResult<ReferenceData> {
    let mut reader = csv::Reader::from_reader(input);
    let mut books = Vec::new();
    for record in reader.deserialize::<BookCsvRecord>() {
        books.push(record?.into_book()?);
    }
    Ok(ReferenceData::from_records(books)?)
}

pub fn load_reference_data<P: AsRef<Path>>(path: P) -> PersistenceResult<ReferenceData> {
    let file = File::open(path)?;
    read_reference_data(file)
}

pub fn load_config<P: AsRef<Path>>(path: P) -> PersistenceResult<PlanConfig> {
    let text = fs::read_to_string(path)?;
    Ok(PlanConfig::from_toml_str(&text)?)
}

pub fn save_table_to_csv<P: AsRef<Path>>(table: &Table, path: P) -> PersistenceResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Raw export: ISO dates and unabbreviated "book chapter" readings. This is
/// the form playlists are re-derived from.
pub fn save_schedule_to_csv<P: AsRef<Path>>(
    schedule: &ReadingSchedule,
    path: P,
) -> PersistenceResult<()> {
    save_table_to_csv(&format::raw_table(schedule), path)
}

pub fn save_schedule_to_json<P: AsRef<Path>>(
    schedule: &ReadingSchedule,
    path: P,
) -> PersistenceResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, schedule)?;
    Ok(())
}

/// Parses a raw export back into a schedule.
pub fn read_raw_schedule_csv<R: Read>(input: R) -> PersistenceResult<ReadingSchedule> {
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader.headers()?.clone();
    let mut headers = headers.iter();
    match headers.next() {
        Some("Date") => {}
        other => {
            return Err(PersistenceError::InvalidData(format!(
                "expected first column 'Date', found {other:?}"
            )));
        }
    }
    let columns: Vec<String> = headers.map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut fields = record.iter();
        let date = parse_date(fields.next().unwrap_or_default())?;
        let readings = fields
            .map(|field| field.parse::<ReadingUnit>())
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(ScheduleRow { date, readings });
    }

    if rows.is_empty() {
        return Err(PersistenceError::InvalidData(
            "CSV file contained no readings".into(),
        ));
    }
    Ok(ReadingSchedule::from_rows(columns, rows)?)
}

pub fn load_raw_schedule_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<ReadingSchedule> {
    let file = File::open(path)?;
    read_raw_schedule_csv(file)
}

pub fn save_html<P: AsRef<Path>>(document: &str, path: P) -> PersistenceResult<()> {
    fs::write(path, document)?;
    Ok(())
}

/// Writes one `.m3u` per playlist into `dir`, creating it if needed.
pub fn write_playlists<P: AsRef<Path>>(
    dir: P,
    playlists: &[DailyPlaylist],
    settings: &PlaylistSettings,
) -> PersistenceResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(playlists.len());
    for playlist in playlists {
        let path = dir.join(&playlist.file_name);
        fs::write(&path, playlist.to_m3u(settings))?;
        written.push(path);
    }
    info!(count = written.len(), dir = %dir.display(), "playlists written");
    Ok(written)
}

fn parse_date(input: &str) -> PersistenceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| PersistenceError::InvalidData(format!("invalid date '{input}': {e}")))
}
