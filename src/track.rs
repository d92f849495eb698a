use crate::error::{PlanError, PlanResult};
use crate::reference::ReferenceData;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The one multi-word book name that is not a numbered book.
pub const SONG_OF_SONGS: &str = "Song of Songs";

/// A single day's reading within a track: one chapter of one book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadingUnit {
    pub book: String,
    pub chapter: u32,
}

impl ReadingUnit {
    pub fn new(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
        }
    }
}

impl fmt::Display for ReadingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)
    }
}

impl FromStr for ReadingUnit {
    type Err = PlanError;

    /// Parses the raw `"{book} {chapter}"` form.
    ///
    /// "Song of Songs" is matched first; otherwise the last space separates the
    /// book (which may itself contain spaces, e.g. "1 Samuel") from the chapter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PlanError::MalformedReading(s.to_string());
        let trimmed = s.trim();
        let (book, chapter) = match trimmed.strip_prefix(SONG_OF_SONGS) {
            Some(rest) if rest.starts_with(' ') => (SONG_OF_SONGS, &rest[1..]),
            _ => trimmed.rsplit_once(' ').ok_or_else(malformed)?,
        };
        if book.trim().is_empty()
            || chapter.is_empty()
            || !chapter.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }
        let chapter = chapter.parse::<u32>().map_err(|_| malformed())?;
        if chapter == 0 {
            return Err(malformed());
        }
        Ok(ReadingUnit::new(book.trim_end(), chapter))
    }
}

/// A named, wrapping sequence of readings with a cursor.
///
/// The cursor is advanced once per scheduled day, after that day's reading has
/// been taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    name: String,
    books: Vec<String>,
    readings: Vec<ReadingUnit>,
    cursor: usize,
}

impl Track {
    /// Expands `books` into chapters 1..=count for each book, in list order.
    pub fn build<I, S>(
        name: impl Into<String>,
        books: I,
        reference: &ReferenceData,
    ) -> PlanResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let books: Vec<String> = books.into_iter().map(Into::into).collect();
        if books.is_empty() {
            return Err(PlanError::NoBooks(name));
        }

        let mut readings = Vec::new();
        for book in &books {
            let chapters = reference
                .chapter_count(book)
                .ok_or_else(|| PlanError::UnknownBook {
                    track: name.clone(),
                    book: book.clone(),
                })?;
            readings.extend((1..=chapters).map(|chapter| ReadingUnit::new(book.as_str(), chapter)));
        }

        Ok(Self {
            name,
            books,
            readings,
            cursor: 0,
        })
    }

    /// A track over an explicit sequence. The book list is derived from the
    /// readings, first occurrence order.
    pub fn from_readings(name: impl Into<String>, readings: Vec<ReadingUnit>) -> Self {
        let mut books: Vec<String> = Vec::new();
        for unit in &readings {
            if !books.contains(&unit.book) {
                books.push(unit.book.clone());
            }
        }
        Self {
            name: name.into(),
            books,
            readings,
            cursor: 0,
        }
    }

    /// Places the cursor at `offset`, wrapped to the sequence length.
    pub fn starting_at(mut self, offset: usize) -> Self {
        if !self.readings.is_empty() {
            self.cursor = offset % self.readings.len();
        }
        self
    }

    pub fn current(&self) -> PlanResult<&ReadingUnit> {
        self.readings
            .get(self.cursor)
            .ok_or_else(|| PlanError::EmptyTrack(self.name.clone()))
    }

    pub fn advance(&mut self) {
        if self.readings.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.readings.len();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn books(&self) -> &[String] {
        &self.books
    }

    pub fn readings(&self) -> &[ReadingUnit] {
        &self.readings
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
