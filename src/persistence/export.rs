use super::PersistenceResult;
use super::file::{
    load_reference_data, save_html, save_schedule_to_csv, save_schedule_to_json,
    save_table_to_csv, write_playlists,
};
use crate::config::PlanConfig;
use crate::format::ReadingFormatter;
use crate::metadata::PlanMetadata;
use crate::playlist::{DailyPlaylist, PlaylistSettings};
use crate::reference::ReferenceData;
use crate::render::{HtmlRenderer, Table};
use crate::schedule::ReadingSchedule;
use std::path::{Path, PathBuf};
use tracing::info;

/// Directory (under the output directory) holding daily playlists.
pub const PLAYLIST_DIR: &str = "m3us";

/// A schedule together with the data needed to render it.
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub metadata: PlanMetadata,
    pub reference: ReferenceData,
    pub schedule: ReadingSchedule,
}

/// Files written by [`export_plan`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub raw_csv: PathBuf,
    pub raw_json: PathBuf,
    pub formatted_csv: PathBuf,
    pub html: PathBuf,
    pub playlists: Vec<PathBuf>,
}

impl ExportSummary {
    pub fn files(&self) -> impl Iterator<Item = &PathBuf> {
        [&self.raw_csv, &self.raw_json, &self.formatted_csv, &self.html]
            .into_iter()
            .chain(self.playlists.iter())
    }
}

/// The configured reference file, or the bundled table when none is set.
pub fn plan_reference(config: &PlanConfig) -> PersistenceResult<ReferenceData> {
    match &config.reference {
        Some(path) => load_reference_data(path),
        None => ReferenceData::bundled(),
    }
}

/// Loads reference data, builds the tracks and generates the schedule.
pub fn generate_plan(config: &PlanConfig) -> PersistenceResult<GeneratedPlan> {
    let reference = plan_reference(config)?;
    let mut tracks = config.build_tracks(&reference)?;
    let schedule = ReadingSchedule::generate(config.start_date, config.end_date, &mut tracks)?;
    Ok(GeneratedPlan {
        metadata: config.metadata(),
        reference,
        schedule,
    })
}

impl GeneratedPlan {
    pub fn formatted_table(&self) -> PersistenceResult<Table> {
        Ok(ReadingFormatter::new(&self.reference).format_schedule(&self.schedule)?)
    }

    /// HTML document with one heading and table per month of `table`.
    pub fn html_document(&self, table: &Table) -> String {
        HtmlRenderer::new(self.metadata.section_title()).document(
            &self.schedule.heading(),
            table,
            &self.schedule.month_segments(),
        )
    }

    pub fn playlists(&self, settings: &PlaylistSettings) -> PersistenceResult<Vec<DailyPlaylist>> {
        build_playlists(&self.schedule, settings)
    }
}

pub fn build_playlists(
    schedule: &ReadingSchedule,
    settings: &PlaylistSettings,
) -> PersistenceResult<Vec<DailyPlaylist>> {
    Ok(schedule
        .rows()
        .iter()
        .map(|row| DailyPlaylist::for_row(row, schedule.columns(), settings))
        .collect::<Result<Vec<_>, _>>()?)
}

/// Builds and writes playlists for every day of `schedule` into
/// `output_dir/m3us`.
pub fn export_playlists(
    schedule: &ReadingSchedule,
    settings: &PlaylistSettings,
    output_dir: &Path,
) -> PersistenceResult<Vec<PathBuf>> {
    let playlists = build_playlists(schedule, settings)?;
    write_playlists(output_dir.join(PLAYLIST_DIR), &playlists, settings)
}

/// Checks a schedule read back from a raw export against `reference`, then
/// writes its playlists. Nothing is written if any reading is invalid.
pub fn rebuild_playlists(
    schedule: &ReadingSchedule,
    reference: &ReferenceData,
    settings: &PlaylistSettings,
    output_dir: &Path,
) -> PersistenceResult<Vec<PathBuf>> {
    schedule.check_readings(reference)?;
    export_playlists(schedule, settings, output_dir)
}

/// Runs the full pipeline and writes every export under `output_dir`.
///
/// Every artifact is built in memory first, so a plan that cannot be
/// rendered or turned into playlists leaves `output_dir` untouched.
pub fn export_plan(config: &PlanConfig, output_dir: &Path) -> PersistenceResult<ExportSummary> {
    let playlist_settings = config.playlist.settings()?;
    let plan = generate_plan(config)?;
    let formatted = plan.formatted_table()?;
    let document = plan.html_document(&formatted);
    let playlists = if config.playlist.enabled {
        plan.playlists(&playlist_settings)?
    } else {
        Vec::new()
    };

    std::fs::create_dir_all(output_dir)?;
    let range = plan.metadata.date_range_token();
    let raw_prefix = plan.metadata.raw_prefix();
    let formatted_prefix = plan.metadata.formatted_prefix();

    let raw_csv = output_dir.join(format!("{raw_prefix}-{range}.csv"));
    save_schedule_to_csv(&plan.schedule, &raw_csv)?;

    let raw_json = output_dir.join(format!("{raw_prefix}-{range}.json"));
    save_schedule_to_json(&plan.schedule, &raw_json)?;

    let formatted_csv = output_dir.join(format!("{formatted_prefix}-{range}.csv"));
    save_table_to_csv(&formatted, &formatted_csv)?;

    let html = output_dir.join(format!("{formatted_prefix}-{range}.html"));
    save_html(&document, &html)?;

    let playlists = if config.playlist.enabled {
        write_playlists(
            output_dir.join(PLAYLIST_DIR),
            &playlists,
            &playlist_settings,
        )?
    } else {
        Vec::new()
    };

    let summary = ExportSummary {
        raw_csv,
        raw_json,
        formatted_csv,
        html,
        playlists,
    };
    for path in summary.files().take(4) {
        info!(path = %path.display(), "wrote export");
    }
    Ok(summary)
}
