use chrono::NaiveDate;
use reading_plan::format::{format_reading, raw_table};
use reading_plan::{
    ErrorCategory, PlanConfig, PlanError, ReadingFormatter, ReadingSchedule, ReadingUnit,
    ReferenceData,
};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn multi_chapter_books_use_abbreviation() {
    let reference = ReferenceData::bundled().unwrap();
    let formatter = ReadingFormatter::new(&reference);
    assert_eq!(
        formatter.format_reading(&ReadingUnit::new("Genesis", 12)).unwrap(),
        "Gen 12"
    );
    assert_eq!(
        formatter.format_reading(&ReadingUnit::new("1 Samuel", 3)).unwrap(),
        "1Sam 3"
    );
    assert_eq!(
        format_reading(&ReadingUnit::new("Song of Songs", 2), &reference).unwrap(),
        "Song 2"
    );
}

#[test]
fn single_chapter_books_collapse_to_full_name() {
    let reference = ReferenceData::bundled().unwrap();
    let formatter = ReadingFormatter::new(&reference);
    assert_eq!(
        formatter.format_reading(&ReadingUnit::new("2 John", 1)).unwrap(),
        "2John"
    );
    assert_eq!(
        formatter.format_reading(&ReadingUnit::new("Philemon", 1)).unwrap(),
        "Philemon"
    );
    assert_eq!(
        formatter.format_reading(&ReadingUnit::new("Obadiah", 1)).unwrap(),
        "Obadiah"
    );
}

#[test]
fn collapsed_single_chapter_output_does_not_parse_back() {
    let reference = ReferenceData::bundled().unwrap();
    let formatter = ReadingFormatter::new(&reference);
    let display = formatter.format_reading(&ReadingUnit::new("3 John", 1)).unwrap();
    assert_eq!(display, "3John");
    assert!(display.parse::<ReadingUnit>().is_err());
}

#[test]
fn malformed_raw_reading_is_a_format_error() {
    let reference = ReferenceData::bundled().unwrap();
    let formatter = ReadingFormatter::new(&reference);
    let err = formatter.format_reading_str("Genesis").unwrap_err();
    assert_eq!(err, PlanError::MalformedReading("Genesis".into()));
    assert_eq!(err.category(), ErrorCategory::Format);

    assert_eq!(formatter.format_reading_str("1 Kings 8").unwrap(), "1Kgs 8");
}

#[test]
fn formatted_schedule_starts_with_display_date() {
    let reference = ReferenceData::bundled().unwrap();
    let mut tracks = PlanConfig::default().build_tracks(&reference).unwrap();
    let schedule = ReadingSchedule::generate(d(2023, 1, 1), d(2023, 2, 28), &mut tracks).unwrap();
    let table = ReadingFormatter::new(&reference)
        .format_schedule(&schedule)
        .unwrap();

    assert_eq!(table.columns()[0], "Date");
    assert_eq!(table.columns().len(), 11);
    assert_eq!(table.height(), 59);
    assert_eq!(
        table.rows()[0],
        vec![
            "L.D. 1/1", "Matt 1", "Gen 1", "Rom 1", "1Thess 1", "Job 1", "Ps 1", "Prov 1",
            "Josh 1", "Isa 1", "Acts 1",
        ]
    );

    // Epistles2 reaches Philemon on day 21 and 2 John on day 40.
    let epistles2 = table.columns().iter().position(|c| c == "Epistles2").unwrap();
    assert_eq!(table.rows()[21][epistles2], "Philemon");
    assert_eq!(table.rows()[40][epistles2], "2John");
    assert_eq!(table.rows()[21][0], "L.D. 1/22");
}

#[test]
fn raw_table_keeps_iso_dates_and_full_names() {
    let reference = ReferenceData::bundled().unwrap();
    let mut tracks = PlanConfig::default().build_tracks(&reference).unwrap();
    let schedule = ReadingSchedule::generate(d(2023, 1, 1), d(2023, 1, 1), &mut tracks).unwrap();
    let table = raw_table(&schedule);
    assert_eq!(table.rows()[0][0], "2023-01-01");
    assert_eq!(table.rows()[0][4], "1 Thessalonians 1");
}

#[test]
fn unknown_book_in_schedule_names_its_column() {
    let reference = ReferenceData::bundled().unwrap();
    let mut tracks = vec![reading_plan::Track::from_readings(
        "Extra",
        vec![ReadingUnit::new("Tobit", 1)],
    )];
    let schedule = ReadingSchedule::generate(d(2023, 1, 1), d(2023, 1, 1), &mut tracks).unwrap();
    let err = ReadingFormatter::new(&reference)
        .format_schedule(&schedule)
        .unwrap_err();
    assert_eq!(
        err,
        PlanError::UnknownBook {
            track: "Extra".into(),
            book: "Tobit".into(),
        }
    );
}
