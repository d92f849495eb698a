use chrono::NaiveDate;
use reading_plan::{
    PlanConfig, PlanError, ReadingSchedule, ReadingUnit, ReferenceData, ScheduleRow, Track,
};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn horner_tracks(reference: &ReferenceData) -> Vec<Track> {
    PlanConfig::default().build_tracks(reference).unwrap()
}

#[test]
fn row_count_matches_inclusive_day_span() {
    let reference = ReferenceData::bundled().unwrap();
    for (start, end) in [
        (d(2023, 1, 1), d(2023, 12, 31)),
        (d(2024, 2, 27), d(2024, 3, 2)),
        (d(2023, 12, 30), d(2025, 1, 2)),
    ] {
        let mut tracks = horner_tracks(&reference);
        let schedule = ReadingSchedule::generate(start, end, &mut tracks).unwrap();
        assert_eq!(schedule.days() as i64, (end - start).num_days() + 1);
        assert_eq!(schedule.start_date(), Some(start));
        assert_eq!(schedule.end_date(), Some(end));
    }
}

#[test]
fn single_day_plan_has_one_row() {
    let reference = ReferenceData::bundled().unwrap();
    let mut tracks = horner_tracks(&reference);
    let schedule = ReadingSchedule::generate(d(2023, 5, 1), d(2023, 5, 1), &mut tracks).unwrap();
    assert_eq!(schedule.days(), 1);
    assert_eq!(schedule.rows()[0].date, d(2023, 5, 1));
}

#[test]
fn end_before_start_is_a_range_error() {
    let reference = ReferenceData::bundled().unwrap();
    let mut tracks = horner_tracks(&reference);
    let err = ReadingSchedule::generate(d(2023, 2, 1), d(2023, 1, 31), &mut tracks).unwrap_err();
    assert_eq!(
        err,
        PlanError::InvalidRange {
            start: d(2023, 2, 1),
            end: d(2023, 1, 31),
        }
    );
    // No track was advanced.
    assert!(tracks.iter().all(|t| t.cursor() == 0));
}

#[test]
fn first_day_reads_first_chapter_of_every_track() {
    let reference = ReferenceData::bundled().unwrap();
    let mut tracks = horner_tracks(&reference);
    let schedule = ReadingSchedule::generate(d(2023, 1, 1), d(2023, 1, 31), &mut tracks).unwrap();

    assert_eq!(
        schedule.columns(),
        &[
            "Gospels",
            "Pentateuch",
            "Epistles1",
            "Epistles2",
            "Wisdom",
            "Psalms",
            "Proverbs",
            "History",
            "Prophets",
            "Acts",
        ]
    );
    let first: Vec<String> = schedule.rows()[0]
        .readings
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        first,
        vec![
            "Matthew 1",
            "Genesis 1",
            "Romans 1",
            "1 Thessalonians 1",
            "Job 1",
            "Psalms 1",
            "Proverbs 1",
            "Joshua 1",
            "Isaiah 1",
            "Acts 1",
        ]
    );
}

#[test]
fn tracks_cycle_independently() {
    let reference = ReferenceData::bundled().unwrap();
    let mut tracks = horner_tracks(&reference);
    let schedule = ReadingSchedule::generate(d(2023, 1, 1), d(2023, 2, 28), &mut tracks).unwrap();
    let acts = schedule.columns().iter().position(|c| c == "Acts").unwrap();
    let proverbs = schedule.columns().iter().position(|c| c == "Proverbs").unwrap();
    let gospels = schedule.columns().iter().position(|c| c == "Gospels").unwrap();

    // Acts has 28 chapters, Proverbs 31.
    assert_eq!(schedule.rows()[27].readings[acts], ReadingUnit::new("Acts", 28));
    assert_eq!(schedule.rows()[28].readings[acts], ReadingUnit::new("Acts", 1));
    assert_eq!(schedule.rows()[30].readings[proverbs], ReadingUnit::new("Proverbs", 31));
    assert_eq!(schedule.rows()[31].readings[proverbs], ReadingUnit::new("Proverbs", 1));
    assert_eq!(schedule.rows()[28].readings[gospels], ReadingUnit::new("Mark", 1));
}

#[test]
fn cursors_continue_across_runs() {
    let reference = ReferenceData::bundled().unwrap();
    let mut tracks = vec![Track::build("Acts", ["Acts"], &reference).unwrap()];
    ReadingSchedule::generate(d(2023, 1, 1), d(2023, 1, 10), &mut tracks).unwrap();
    let second = ReadingSchedule::generate(d(2023, 1, 11), d(2023, 1, 11), &mut tracks).unwrap();
    assert_eq!(second.rows()[0].readings[0], ReadingUnit::new("Acts", 11));

    let mut fresh = vec![Track::build("Acts", ["Acts"], &reference).unwrap()];
    let restarted = ReadingSchedule::generate(d(2023, 1, 11), d(2023, 1, 11), &mut fresh).unwrap();
    assert_eq!(restarted.rows()[0].readings[0], ReadingUnit::new("Acts", 1));
}

#[test]
fn empty_track_fails_generation() {
    let mut tracks = vec![Track::from_readings("Empty", Vec::new())];
    let err = ReadingSchedule::generate(d(2023, 1, 1), d(2023, 1, 2), &mut tracks).unwrap_err();
    assert_eq!(err, PlanError::EmptyTrack("Empty".into()));
}

#[test]
fn duplicate_track_names_are_rejected() {
    let reference = ReferenceData::bundled().unwrap();
    let mut tracks = vec![
        Track::build("Law", ["Genesis"], &reference).unwrap(),
        Track::build("Law", ["Exodus"], &reference).unwrap(),
    ];
    let err = ReadingSchedule::generate(d(2023, 1, 1), d(2023, 1, 2), &mut tracks).unwrap_err();
    assert_eq!(err, PlanError::DuplicateTrack("Law".into()));
    assert_eq!(tracks[0].cursor(), 0);
}

#[test]
fn imported_readings_are_checked_against_reference() {
    let reference = ReferenceData::bundled().unwrap();
    let schedule = ReadingSchedule::from_rows(
        vec!["Law".into()],
        vec![
            ScheduleRow {
                date: d(2023, 1, 1),
                readings: vec![ReadingUnit::new("Genesis", 50)],
            },
            ScheduleRow {
                date: d(2023, 1, 2),
                readings: vec![ReadingUnit::new("Genesis", 51)],
            },
        ],
    )
    .unwrap();
    assert_eq!(
        schedule.check_readings(&reference),
        Err(PlanError::ChapterOutOfRange {
            book: "Genesis".into(),
            chapter: 51,
            chapters: 50,
        })
    );
}

#[test]
fn heading_names_the_range() {
    let reference = ReferenceData::bundled().unwrap();
    let mut tracks = horner_tracks(&reference);
    let schedule = ReadingSchedule::generate(d(2023, 1, 1), d(2023, 12, 31), &mut tracks).unwrap();
    assert_eq!(
        schedule.heading(),
        "Bible Reading Plan for: 2023-01-01 to 2023-12-31"
    );
}

#[test]
fn from_rows_rejects_ragged_rows() {
    let rows = vec![reading_plan::ScheduleRow {
        date: d(2023, 1, 1),
        readings: vec![ReadingUnit::new("Acts", 1)],
    }];
    let err = ReadingSchedule::from_rows(vec!["Acts".into(), "Psalms".into()], rows).unwrap_err();
    assert!(matches!(err, PlanError::InvalidConfig(_)));
}
