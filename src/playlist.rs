//! Daily M3U playlists pointing at per-chapter audio files.
//!
//! Media files follow the layout
//! `{ot|nt}/{NN}_{slug}/{NN}_{slug}_{chapter}.{ext}`, where `NN` is the book's
//! number within its testament and the chapter is padded to three digits in
//! the Old Testament and two in the New.

use crate::calendar;
use crate::canon::{self, Testament};
use crate::error::{PlanError, PlanResult};
use crate::schedule::ScheduleRow;
use crate::track::{ReadingUnit, SONG_OF_SONGS};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Derived media reference for one reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub book: String,
    pub chapter: u32,
    pub testament: Testament,
    /// Book number within its testament, two digits.
    pub book_number: String,
    pub chapter_padded: String,
    /// Logical relative path, always `/`-separated.
    pub path: String,
}

impl PlaylistEntry {
    pub fn derive(unit: &ReadingUnit, extension: &str) -> PlanResult<Self> {
        let ordinal = canon::ordinal(&unit.book).ok_or_else(|| PlanError::UnknownBook {
            track: String::new(),
            book: unit.book.clone(),
        })?;
        let testament = Testament::from_ordinal(ordinal);
        let number = match testament {
            Testament::Old => ordinal,
            Testament::New => ordinal - canon::OLD_TESTAMENT_BOOKS,
        };
        let book_number = format!("{number:02}");
        let chapter_padded = format!(
            "{:0width$}",
            unit.chapter,
            width = testament.chapter_width()
        );
        let slug = book_slug(&unit.book);
        let path = format!(
            "{testament}/{book_number}_{slug}/{book_number}_{slug}_{chapter_padded}.{extension}"
        );
        Ok(Self {
            book: unit.book.clone(),
            chapter: unit.chapter,
            testament,
            book_number,
            chapter_padded,
            path,
        })
    }

    /// Parses the raw "book chapter" form before deriving.
    pub fn derive_raw(raw: &str, extension: &str) -> PlanResult<Self> {
        let unit: ReadingUnit = raw.parse()?;
        Self::derive(&unit, extension)
    }

    /// "Genesis 1".
    pub fn title(&self) -> String {
        format!("{} {}", self.book, self.chapter)
    }
}

/// Lowercased, hyphenated book name used in media file names.
pub fn book_slug(book: &str) -> String {
    if book == SONG_OF_SONGS {
        return "songofsolomon".to_string();
    }
    book.replace(' ', "-").to_lowercase()
}

/// How a logical relative path is written into a playlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathTarget {
    #[default]
    Relative,
    /// Joined under an absolute root, e.g. a device's music directory.
    Absolute { prefix: String },
    /// Backslash separators.
    Windows,
}

impl PathTarget {
    pub fn render(&self, path: &str) -> String {
        match self {
            PathTarget::Relative => path.to_string(),
            PathTarget::Absolute { prefix } => {
                if !prefix.starts_with('/') && !prefix.contains(":\\") {
                    warn!(%prefix, "absolute playlist prefix does not look absolute");
                }
                format!("{}/{}", prefix.trim_end_matches('/'), path)
            }
            PathTarget::Windows => path.replace('/', "\\"),
        }
    }
}

/// Fixed header values written at the top of each playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSettings {
    pub extension: String,
    pub album: String,
    pub artist: String,
    pub target: PathTarget,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            extension: "mp3".to_string(),
            album: "KJV Bible".to_string(),
            artist: "Talking Bibles International".to_string(),
            target: PathTarget::Relative,
        }
    }
}

/// One day's playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPlaylist {
    pub file_name: String,
    pub title: String,
    pub entries: Vec<PlaylistEntry>,
}

impl DailyPlaylist {
    /// Entries follow the row's track order; `columns` names the tracks for
    /// error reporting.
    pub fn for_row(
        row: &ScheduleRow,
        columns: &[String],
        settings: &PlaylistSettings,
    ) -> PlanResult<Self> {
        if columns.len() != row.readings.len() {
            return Err(PlanError::InvalidConfig(format!(
                "row for {} has {} readings but there are {} tracks",
                row.date,
                row.readings.len(),
                columns.len()
            )));
        }
        let entries = columns
            .iter()
            .zip(&row.readings)
            .map(|(column, unit)| {
                PlaylistEntry::derive(unit, &settings.extension).map_err(|err| match err {
                    PlanError::UnknownBook { book, .. } => PlanError::NoPlaylistNumber {
                        track: column.clone(),
                        date: row.date,
                        book,
                    },
                    other => other,
                })
            })
            .collect::<PlanResult<Vec<_>>>()?;
        Ok(Self {
            file_name: format!("{}.m3u", calendar::playlist_token(row.date)),
            title: calendar::long_date(row.date),
            entries,
        })
    }

    pub fn to_m3u(&self, settings: &PlaylistSettings) -> String {
        let mut out = String::new();
        out.push_str("#EXTM3U\n");
        out.push_str(&format!("#PLAYLIST:{}\n", self.title));
        out.push_str(&format!("#EXTALB: {}\n", settings.album));
        out.push_str(&format!("#EXTART: {}\n", settings.artist));
        out.push_str("#EXTGENRE:Speech\n");
        for entry in &self.entries {
            out.push_str(&format!("#EXTINF:0,{}\n", entry.title()));
            out.push_str(&settings.target.render(&entry.path));
            out.push('\n');
        }
        out
    }
}

/// Free-function form of [`PlaylistEntry::derive_raw`] with the default
/// extension.
pub fn derive(raw: &str) -> PlanResult<PlaylistEntry> {
    PlaylistEntry::derive_raw(raw, "mp3")
}
