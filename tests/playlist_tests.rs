use chrono::NaiveDate;
use reading_plan::canon::Testament;
use reading_plan::playlist::{book_slug, derive};
use reading_plan::{
    DailyPlaylist, PathTarget, PlanError, PlaylistEntry, PlaylistSettings, ReadingUnit,
    ScheduleRow,
};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn song_of_songs_uses_fixed_slug() {
    let entry = derive("Song of Songs 3").unwrap();
    assert_eq!(entry.book, "Song of Songs");
    assert_eq!(entry.chapter, 3);
    assert_eq!(entry.testament, Testament::Old);
    assert_eq!(entry.book_number, "22");
    assert_eq!(entry.chapter_padded, "003");
    assert_eq!(entry.path, "ot/22_songofsolomon/22_songofsolomon_003.mp3");
}

#[test]
fn old_testament_chapters_pad_to_three_digits() {
    let entry = derive("Genesis 1").unwrap();
    assert_eq!(entry.path, "ot/01_genesis/01_genesis_001.mp3");
    let entry = derive("Psalms 119").unwrap();
    assert_eq!(entry.path, "ot/19_psalms/19_psalms_119.mp3");
    let entry = derive("Malachi 4").unwrap();
    assert_eq!(entry.path, "ot/39_malachi/39_malachi_004.mp3");
}

#[test]
fn new_testament_numbers_restart_and_pad_to_two_digits() {
    let entry = derive("Matthew 5").unwrap();
    assert_eq!(entry.testament, Testament::New);
    assert_eq!(entry.path, "nt/01_matthew/01_matthew_05.mp3");
    let entry = derive("1 John 5").unwrap();
    assert_eq!(entry.path, "nt/23_1-john/23_1-john_05.mp3");
    let entry = derive("Revelation 22").unwrap();
    assert_eq!(entry.path, "nt/27_revelation/27_revelation_22.mp3");
}

#[test]
fn numbered_book_names_split_on_last_space() {
    let entry = derive("2 Chronicles 36").unwrap();
    assert_eq!(entry.book, "2 Chronicles");
    assert_eq!(entry.path, "ot/14_2-chronicles/14_2-chronicles_036.mp3");
}

#[test]
fn unparseable_input_is_a_format_error() {
    assert_eq!(
        derive("2John").unwrap_err(),
        PlanError::MalformedReading("2John".into())
    );
}

#[test]
fn unknown_book_is_rejected() {
    let err = PlaylistEntry::derive(&ReadingUnit::new("Tobit", 1), "mp3").unwrap_err();
    assert!(matches!(err, PlanError::UnknownBook { .. }));
}

#[test]
fn slugs_are_lowercase_and_hyphenated() {
    assert_eq!(book_slug("1 Thessalonians"), "1-thessalonians");
    assert_eq!(book_slug("Song of Songs"), "songofsolomon");
    assert_eq!(book_slug("Acts"), "acts");
}

#[test]
fn targets_only_change_prefix_and_separators() {
    let path = "nt/05_acts/05_acts_01.mp3";
    assert_eq!(PathTarget::Relative.render(path), path);
    assert_eq!(
        PathTarget::Absolute {
            prefix: "/storage/emulated/0/Music/".into()
        }
        .render(path),
        "/storage/emulated/0/Music/nt/05_acts/05_acts_01.mp3"
    );
    assert_eq!(
        PathTarget::Windows.render(path),
        "nt\\05_acts\\05_acts_01.mp3"
    );
}

#[test]
fn sunday_playlist_uses_override_in_file_name() {
    let row = ScheduleRow {
        date: d(2023, 1, 1),
        readings: vec![ReadingUnit::new("Matthew", 1), ReadingUnit::new("Genesis", 1)],
    };
    let columns = vec!["Gospels".to_string(), "Pentateuch".to_string()];
    let settings = PlaylistSettings::default();
    let playlist = DailyPlaylist::for_row(&row, &columns, &settings).unwrap();
    assert_eq!(playlist.file_name, "20230101-LD.m3u");

    let m3u = playlist.to_m3u(&settings);
    assert_eq!(
        m3u,
        "#EXTM3U\n\
         #PLAYLIST:Sunday, 1 January 2023\n\
         #EXTALB: KJV Bible\n\
         #EXTART: Talking Bibles International\n\
         #EXTGENRE:Speech\n\
         #EXTINF:0,Matthew 1\n\
         nt/01_matthew/01_matthew_01.mp3\n\
         #EXTINF:0,Genesis 1\n\
         ot/01_genesis/01_genesis_001.mp3\n"
    );
}

#[test]
fn weekday_playlist_uses_lowercase_abbreviation() {
    let row = ScheduleRow {
        date: d(2023, 1, 3),
        readings: vec![ReadingUnit::new("Acts", 3)],
    };
    let settings = PlaylistSettings {
        target: PathTarget::Windows,
        extension: "ogg".into(),
        ..PlaylistSettings::default()
    };
    let playlist = DailyPlaylist::for_row(&row, &["Acts".to_string()], &settings).unwrap();
    assert_eq!(playlist.file_name, "20230103-tue.m3u");
    assert!(
        playlist
            .to_m3u(&settings)
            .ends_with("#EXTINF:0,Acts 3\nnt\\05_acts\\05_acts_03.ogg\n")
    );
}

#[test]
fn chapter_zero_is_not_a_reading() {
    assert_eq!(
        derive("Genesis 0"),
        Err(PlanError::MalformedReading("Genesis 0".into()))
    );
}

#[test]
fn books_outside_the_canon_name_track_and_date() {
    let row = ScheduleRow {
        date: d(2023, 1, 2),
        readings: vec![ReadingUnit::new("Acts", 1), ReadingUnit::new("Tobit", 1)],
    };
    let columns = vec!["Acts".to_string(), "Extra".to_string()];
    let err = DailyPlaylist::for_row(&row, &columns, &PlaylistSettings::default()).unwrap_err();
    assert_eq!(
        err,
        PlanError::NoPlaylistNumber {
            track: "Extra".into(),
            date: d(2023, 1, 2),
            book: "Tobit".into(),
        }
    );
    assert_eq!(
        err.to_string(),
        "track 'Extra' on 2023-01-02: book 'Tobit' has no playlist number"
    );
}
