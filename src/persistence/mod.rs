use crate::error::PlanError;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

pub mod export;
pub mod file;

pub use export::{
    ExportSummary, GeneratedPlan, PLAYLIST_DIR, build_playlists, export_plan, export_playlists,
    generate_plan, plan_reference, rebuild_playlists,
};
pub use file::{
    load_config, load_raw_schedule_csv, load_reference_data, read_raw_schedule_csv,
    read_reference_data, save_html, save_schedule_to_csv, save_schedule_to_json,
    save_table_to_csv, write_playlists,
};
