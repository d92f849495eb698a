use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use reading_plan::persistence::{plan_reference, rebuild_playlists};
use reading_plan::render::{TextRenderer, render_segments, render_text_table};
use reading_plan::{
    PlanConfig, ReadingFormatter, ReferenceData, TargetKind, canon, export_plan, format,
    generate_plan, load_config, load_raw_schedule_csv, load_reference_data, logging,
};

/// Daily Bible reading plan generator.
#[derive(Parser)]
#[command(name = "reading-plan", version, about = "Daily Bible reading plan generator")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the plan and write CSV, JSON, HTML and playlist exports.
    Generate(GenerateArgs),
    /// Print the plan as text tables, one per month.
    Show(ShowArgs),
    /// Re-derive daily playlists from a raw CSV export.
    Playlists(PlaylistArgs),
    /// List reference books with canonical ordinals.
    Books(BooksArgs),
}

#[derive(Args)]
struct PlanArgs {
    /// Plan configuration (TOML). The built-in Horner plan is used when absent.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// First day of the plan (YYYY-MM-DD).
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last day of the plan (YYYY-MM-DD).
    #[arg(long)]
    end: Option<NaiveDate>,
}

#[derive(Args)]
struct TargetArgs {
    /// How media paths are written into playlists.
    #[arg(long, value_enum)]
    target: Option<TargetKind>,

    /// Root directory for the absolute target.
    #[arg(long)]
    prefix: Option<String>,
}

#[derive(Args)]
struct GenerateArgs {
    #[command(flatten)]
    plan: PlanArgs,

    /// Directory for exported files.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Skip writing playlists.
    #[arg(long)]
    no_playlists: bool,

    #[command(flatten)]
    target: TargetArgs,
}

#[derive(Args)]
struct ShowArgs {
    #[command(flatten)]
    plan: PlanArgs,

    /// Show unabbreviated readings and ISO dates.
    #[arg(long)]
    raw: bool,
}

#[derive(Args)]
struct PlaylistArgs {
    /// Raw CSV export to read.
    #[arg(long)]
    csv: PathBuf,

    /// Directory that receives the m3us/ folder.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Plan configuration supplying playlist settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    target: TargetArgs,
}

#[derive(Args)]
struct BooksArgs {
    /// Reference CSV (book,abbreviation,chapters); bundled data when absent.
    #[arg(short, long)]
    reference: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate(args),
        Command::Show(args) => show(args),
        Command::Playlists(args) => playlists(args),
        Command::Books(args) => books(args),
    }
}

fn resolve_config(config: Option<&Path>) -> Result<PlanConfig> {
    match config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(PlanConfig::default()),
    }
}

fn plan_config(args: &PlanArgs) -> Result<PlanConfig> {
    let mut config = resolve_config(args.config.as_deref())?;
    if let Some(start) = args.start {
        config.start_date = start;
    }
    if let Some(end) = args.end {
        config.end_date = end;
    }
    Ok(config)
}

fn apply_target(config: &mut PlanConfig, args: &TargetArgs) {
    if let Some(target) = args.target {
        config.playlist.target = target;
    }
    if let Some(prefix) = &args.prefix {
        config.playlist.prefix = Some(prefix.clone());
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let mut config = plan_config(&args.plan)?;
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    if args.no_playlists {
        config.playlist.enabled = false;
    }
    apply_target(&mut config, &args.target);

    let output_dir = config.output_dir.clone();
    let summary = export_plan(&config, &output_dir)?;
    println!("Raw CSV       : {}", summary.raw_csv.display());
    println!("Raw JSON      : {}", summary.raw_json.display());
    println!("Formatted CSV : {}", summary.formatted_csv.display());
    println!("HTML          : {}", summary.html.display());
    println!("Playlists     : {}", summary.playlists.len());
    Ok(())
}

fn show(args: ShowArgs) -> Result<()> {
    let config = plan_config(&args.plan)?;
    let plan = generate_plan(&config)?;
    let table = if args.raw {
        format::raw_table(&plan.schedule)
    } else {
        ReadingFormatter::new(&plan.reference).format_schedule(&plan.schedule)?
    };

    println!("{}\n", plan.schedule.heading());
    let segments = plan.schedule.month_segments();
    if segments.len() > 1 {
        println!("{}", render_segments(&TextRenderer, &table, &segments));
    } else {
        println!("{}", render_text_table(&table));
    }
    Ok(())
}

fn playlists(args: PlaylistArgs) -> Result<()> {
    let mut config = resolve_config(args.config.as_deref())?;
    apply_target(&mut config, &args.target);
    let settings = config.playlist.settings()?;

    let schedule = load_raw_schedule_csv(&args.csv)
        .with_context(|| format!("failed to read {}", args.csv.display()))?;
    let reference = plan_reference(&config)?;
    let written = rebuild_playlists(&schedule, &reference, &settings, &args.output_dir)
        .with_context(|| format!("invalid readings in {}", args.csv.display()))?;
    if written.is_empty() {
        bail!("no playlists written");
    }
    println!("Wrote {} playlists.", written.len());
    Ok(())
}

fn books(args: BooksArgs) -> Result<()> {
    let reference = match &args.reference {
        Some(path) => load_reference_data(path)
            .with_context(|| format!("failed to load reference {}", path.display()))?,
        None => ReferenceData::bundled()?,
    };
    for book in reference.books() {
        let ordinal = canon::ordinal(&book.name)
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>2}  {:<16} {:<7} {:>3}",
            ordinal, book.name, book.abbreviation, book.chapters
        );
    }
    Ok(())
}
