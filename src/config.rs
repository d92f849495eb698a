use crate::error::{PlanError, PlanResult};
use crate::metadata::PlanMetadata;
use crate::playlist::{PathTarget, PlaylistSettings};
use crate::reference::ReferenceData;
use crate::track::Track;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Top-level plan configuration, usually read from TOML.
///
/// Dates are ISO `YYYY-MM-DD` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Reference CSV (`book,abbreviation,chapters`); bundled data when absent.
    #[serde(default)]
    pub reference: Option<PathBuf>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    pub tracks: Vec<TrackConfig>,
    #[serde(default)]
    pub playlist: PlaylistConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackConfig {
    pub name: String,
    pub books: Vec<String>,
    /// Zero-based reading to begin on.
    #[serde(default)]
    pub start: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum TargetKind {
    #[default]
    Relative,
    Absolute,
    Windows,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaylistConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_album")]
    pub album: String,
    #[serde(default = "default_artist")]
    pub artist: String,
    #[serde(default)]
    pub target: TargetKind,
    /// Root directory for the `absolute` target.
    #[serde(default)]
    pub prefix: Option<String>,
}

fn default_name() -> String {
    "Horner Classic".to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_true() -> bool {
    true
}
fn default_extension() -> String {
    "mp3".to_string()
}
fn default_album() -> String {
    "KJV Bible".to_string()
}
fn default_artist() -> String {
    "Talking Bibles International".to_string()
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            extension: default_extension(),
            album: default_album(),
            artist: default_artist(),
            target: TargetKind::Relative,
            prefix: None,
        }
    }
}

impl PlaylistConfig {
    pub fn settings(&self) -> PlanResult<PlaylistSettings> {
        let target = match (self.target, &self.prefix) {
            (TargetKind::Relative, _) => PathTarget::Relative,
            (TargetKind::Windows, _) => PathTarget::Windows,
            (TargetKind::Absolute, Some(prefix)) if !prefix.trim().is_empty() => {
                PathTarget::Absolute {
                    prefix: prefix.clone(),
                }
            }
            (TargetKind::Absolute, _) => {
                return Err(PlanError::InvalidConfig(
                    "the absolute playlist target requires a prefix".into(),
                ));
            }
        };
        Ok(PlaylistSettings {
            extension: self.extension.clone(),
            album: self.album.clone(),
            artist: self.artist.clone(),
            target,
        })
    }
}

impl TrackConfig {
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        books: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            books: books.into_iter().map(Into::into).collect(),
            start: 0,
        }
    }
}

impl Default for PlanConfig {
    /// The ten-list Horner plan for calendar year 2023.
    fn default() -> Self {
        let metadata = PlanMetadata::default();
        Self {
            name: metadata.plan_name,
            start_date: metadata.start_date,
            end_date: metadata.end_date,
            reference: None,
            output_dir: default_output_dir(),
            tracks: horner_tracks(),
            playlist: PlaylistConfig::default(),
        }
    }
}

impl PlanConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    pub fn metadata(&self) -> PlanMetadata {
        PlanMetadata::new(self.name.clone(), self.start_date, self.end_date)
    }

    /// Checks dates and track names without touching reference data.
    pub fn validate(&self) -> PlanResult<()> {
        if self.end_date < self.start_date {
            return Err(PlanError::InvalidRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.tracks.is_empty() {
            return Err(PlanError::InvalidConfig("no tracks configured".into()));
        }
        let mut seen = HashSet::new();
        for track in &self.tracks {
            if !seen.insert(track.name.as_str()) {
                return Err(PlanError::DuplicateTrack(track.name.clone()));
            }
        }
        Ok(())
    }

    /// Builds every track in configured order, each at its start offset.
    pub fn build_tracks(&self, reference: &ReferenceData) -> PlanResult<Vec<Track>> {
        self.validate()?;
        self.tracks
            .iter()
            .map(|cfg| {
                Track::build(cfg.name.clone(), cfg.books.iter().cloned(), reference)
                    .map(|track| track.starting_at(cfg.start))
            })
            .collect()
    }
}

fn horner_tracks() -> Vec<TrackConfig> {
    vec![
        TrackConfig::new("Gospels", ["Matthew", "Mark", "Luke", "John"]),
        TrackConfig::new(
            "Pentateuch",
            ["Genesis", "Exodus", "Leviticus", "Numbers", "Deuteronomy"],
        ),
        TrackConfig::new(
            "Epistles1",
            [
                "Romans",
                "1 Corinthians",
                "2 Corinthians",
                "Galatians",
                "Ephesians",
                "Philippians",
                "Colossians",
                "Hebrews",
            ],
        ),
        TrackConfig::new(
            "Epistles2",
            [
                "1 Thessalonians",
                "2 Thessalonians",
                "1 Timothy",
                "2 Timothy",
                "Titus",
                "Philemon",
                "James",
                "1 Peter",
                "2 Peter",
                "1 John",
                "2 John",
                "3 John",
                "Jude",
                "Revelation",
            ],
        ),
        TrackConfig::new("Wisdom", ["Job", "Ecclesiastes", "Song of Songs"]),
        TrackConfig::new("Psalms", ["Psalms"]),
        TrackConfig::new("Proverbs", ["Proverbs"]),
        TrackConfig::new(
            "History",
            [
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
            ],
        ),
        TrackConfig::new(
            "Prophets",
            [
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
            ],
        ),
        TrackConfig::new("Acts", ["Acts"]),
    ]
}
