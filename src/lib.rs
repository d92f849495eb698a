//! Daily Bible reading plans built from independently cycling reading lists.
//!
//! Each [`Track`] walks its own list of chapters and wraps around when it runs
//! out; [`ReadingSchedule::generate`] advances every track once per calendar
//! day. The resulting schedule can be formatted for display, split into
//! month sections, exported as CSV/JSON/HTML, and turned into per-day M3U
//! playlists.

pub mod calendar;
pub mod canon;
pub mod config;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod metadata;
pub mod persistence;
pub mod playlist;
pub mod reference;
pub mod render;
pub mod schedule;
pub mod track;

pub use calendar::{MonthBoundary, MonthSegment};
pub use config::{PlanConfig, PlaylistConfig, TargetKind, TrackConfig};
pub use error::{ErrorCategory, PlanError, PlanResult};
pub use format::ReadingFormatter;
pub use metadata::PlanMetadata;
pub use persistence::{
    ExportSummary, GeneratedPlan, PersistenceError, PersistenceResult, export_plan,
    generate_plan, load_config, load_raw_schedule_csv, load_reference_data,
};
pub use playlist::{DailyPlaylist, PathTarget, PlaylistEntry, PlaylistSettings};
pub use reference::{BookInfo, ReferenceData};
pub use render::{HtmlRenderer, Table, TextRenderer};
pub use schedule::{ReadingSchedule, ScheduleRow};
pub use track::{ReadingUnit, Track};
