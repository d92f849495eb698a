use crate::error::{PlanError, PlanResult};
use crate::track::ReadingUnit;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of reference data: a book, its short abbreviation and chapter count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInfo {
    pub name: String,
    pub abbreviation: String,
    pub chapters: u32,
}

impl BookInfo {
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>, chapters: u32) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            chapters,
        }
    }

    pub fn is_single_chapter(&self) -> bool {
        self.chapters == 1
    }
}

/// Immutable lookup of chapter counts and abbreviations keyed by book name.
///
/// Records keep their source order, which `books()` exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    books: Vec<BookInfo>,
    index: HashMap<String, usize>,
}

impl ReferenceData {
    /// Validates and indexes a set of records.
    ///
    /// Rejects empty book names, zero chapter counts and duplicate names.
    pub fn from_records<I>(records: I) -> PlanResult<Self>
    where
        I: IntoIterator<Item = BookInfo>,
    {
        let mut books = Vec::new();
        let mut index = HashMap::new();
        for record in records {
            if record.name.trim().is_empty() {
                return Err(PlanError::InvalidReference("empty book name".into()));
            }
            if record.chapters == 0 {
                return Err(PlanError::InvalidReference(format!(
                    "book '{}' has a chapter count of 0",
                    record.name
                )));
            }
            if index.contains_key(&record.name) {
                return Err(PlanError::InvalidReference(format!(
                    "book '{}' appears more than once",
                    record.name
                )));
            }
            index.insert(record.name.clone(), books.len());
            books.push(record);
        }
        if books.is_empty() {
            return Err(PlanError::InvalidReference("no books defined".into()));
        }
        Ok(Self { books, index })
    }

    /// The 66-book table compiled into the crate.
    pub fn bundled() -> crate::persistence::PersistenceResult<Self> {
        crate::persistence::read_reference_data(BUNDLED_REFERENCE.as_bytes())
    }

    pub fn get(&self, book: &str) -> Option<&BookInfo> {
        self.index.get(book).map(|&idx| &self.books[idx])
    }

    pub fn contains(&self, book: &str) -> bool {
        self.index.contains_key(book)
    }

    pub fn chapter_count(&self, book: &str) -> Option<u32> {
        self.get(book).map(|info| info.chapters)
    }

    /// Checks that `unit` names a known book and a chapter within its count.
    pub fn check_reading(&self, unit: &ReadingUnit) -> PlanResult<()> {
        let chapters = self
            .chapter_count(&unit.book)
            .ok_or_else(|| PlanError::UnknownBook {
                track: String::new(),
                book: unit.book.clone(),
            })?;
        if unit.chapter == 0 || unit.chapter > chapters {
            return Err(PlanError::ChapterOutOfRange {
                book: unit.book.clone(),
                chapter: unit.chapter,
                chapters,
            });
        }
        Ok(())
    }

    pub fn abbreviation(&self, book: &str) -> Option<&str> {
        self.get(book).map(|info| info.abbreviation.as_str())
    }

    pub fn books(&self) -> &[BookInfo] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

const BUNDLED_REFERENCE: &str = include_str!("../data/bible_book_info.csv");
