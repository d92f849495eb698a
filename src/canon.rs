//! Canonical 66-book ordering and the testament split used for media numbering.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const CANONICAL_BOOKS: [&str; 66] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Songs",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Ordinal of the last Old Testament book (Malachi).
pub const OLD_TESTAMENT_BOOKS: usize = 39;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    pub fn from_ordinal(ordinal: usize) -> Self {
        if ordinal <= OLD_TESTAMENT_BOOKS {
            Testament::Old
        } else {
            Testament::New
        }
    }

    /// Directory tag used by the audio file layout.
    pub fn as_str(&self) -> &'static str {
        match self {
            Testament::Old => "ot",
            Testament::New => "nt",
        }
    }

    /// Zero-padding width for chapter numbers in media file names.
    pub fn chapter_width(&self) -> usize {
        match self {
            Testament::Old => 3,
            Testament::New => 2,
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1-based position of `book` in the canonical ordering.
pub fn ordinal(book: &str) -> Option<usize> {
    CANONICAL_BOOKS
        .iter()
        .position(|name| *name == book)
        .map(|idx| idx + 1)
}

pub fn testament(book: &str) -> Option<Testament> {
    ordinal(book).map(Testament::from_ordinal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malachi_closes_the_old_testament() {
        assert_eq!(ordinal("Malachi"), Some(39));
        assert_eq!(testament("Malachi"), Some(Testament::Old));
        assert_eq!(ordinal("Matthew"), Some(40));
        assert_eq!(testament("Matthew"), Some(Testament::New));
    }

    #[test]
    fn unknown_books_have_no_ordinal() {
        assert_eq!(ordinal("Tobit"), None);
    }

    #[test]
    fn bundled_reference_follows_canonical_order() {
        let reference = crate::ReferenceData::bundled().unwrap();
        let names: Vec<&str> = reference.books().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, CANONICAL_BOOKS.to_vec());
    }
}
