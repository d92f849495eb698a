//! Error types for plan construction, scheduling and formatting.

use chrono::NaiveDate;

/// Broad classification of a [`PlanError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad reference data or plan configuration; raised before any rows exist.
    Configuration,
    /// Invalid date interval.
    Range,
    /// A reading could not be parsed into book and chapter.
    Format,
    /// A track was queried in a state it should never reach.
    State,
}

/// Error type for all fallible operations on tracks, schedules and readings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// A track lists a book that the reference data does not know.
    #[error("track '{track}' references unknown book '{book}'")]
    UnknownBook {
        /// Name of the offending track (empty when no track is involved).
        track: String,
        /// The unknown book name.
        book: String,
    },

    /// Reference data failed validation.
    #[error("invalid reference data: {0}")]
    InvalidReference(String),

    /// Two tracks share a name.
    #[error("duplicate track name '{0}'")]
    DuplicateTrack(String),

    /// A track was configured without any books.
    #[error("track '{0}' has no books")]
    NoBooks(String),

    /// Plan configuration is inconsistent.
    #[error("invalid plan configuration: {0}")]
    InvalidConfig(String),

    /// End date precedes start date.
    #[error("end date {end} precedes start date {start}")]
    InvalidRange {
        /// First day of the requested range.
        start: NaiveDate,
        /// Last day of the requested range.
        end: NaiveDate,
    },

    /// Text that should hold "book chapter" does not.
    #[error("reading '{0}' does not contain a book and chapter in the expected format")]
    MalformedReading(String),

    /// A parsed reading names a chapter the book does not have.
    #[error("reading '{book} {chapter}' is outside chapters 1..={chapters}")]
    ChapterOutOfRange {
        book: String,
        chapter: u32,
        /// Chapter count from the reference data.
        chapters: u32,
    },

    /// A reading's book is outside the 66-book canon, so it has no media
    /// file number.
    #[error("track '{track}' on {date}: book '{book}' has no playlist number")]
    NoPlaylistNumber {
        track: String,
        date: NaiveDate,
        book: String,
    },

    /// `current()` was called on a track with no readings.
    #[error("track '{0}' has no readings")]
    EmptyTrack(String),
}

impl PlanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlanError::UnknownBook { .. }
            | PlanError::InvalidReference(_)
            | PlanError::DuplicateTrack(_)
            | PlanError::NoBooks(_)
            | PlanError::InvalidConfig(_)
            | PlanError::NoPlaylistNumber { .. } => ErrorCategory::Configuration,
            PlanError::InvalidRange { .. } => ErrorCategory::Range,
            PlanError::MalformedReading(_) | PlanError::ChapterOutOfRange { .. } => {
                ErrorCategory::Format
            }
            PlanError::EmptyTrack(_) => ErrorCategory::State,
        }
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
