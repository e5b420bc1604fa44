use calendar_profile::{
    CellText, CellValue, DayOfMonth, Decade, LONG_PROFILE, Profile, ProfileError, ProfileRegistry, SHORT_PROFILE,
    presets,
};

#[test]
fn short_and_long_presets_share_schema() {
    let short = presets().require(SHORT_PROFILE).unwrap();
    let long = presets().require(LONG_PROFILE).unwrap();

    assert_eq!(short.months()[0], "Jan");
    assert_eq!(long.months()[0], "January");
    for profile in [short, long] {
        assert_eq!(profile.days().len(), 7);
        assert_eq!(profile.months().len(), 12);
        assert!(profile.day_offset().get() <= 6);
    }
}

#[test]
fn month_grid_row_from_profile() {
    let profile = presets().require(SHORT_PROFILE).unwrap();
    let headers = profile.weekday_headers();
    assert_eq!(headers[0], "Tu");

    // A month starting on a Thursday: two leading cells before day 1.
    let first_column = profile.weekday_column(4).unwrap();
    assert_eq!(first_column, 2);

    let mut row: Vec<CellValue> = (30..=31)
        .map(|d| CellValue::trailing(DayOfMonth::new(d).unwrap()))
        .collect();
    row.extend((1..=5).map(|d| CellValue::day(DayOfMonth::new(d).unwrap())));

    assert_eq!(row.len(), headers.len());
    assert!(!row[first_column - 1].is_active());
    assert_eq!(row[first_column].text(), &CellText::Number(1));
    assert!(row.iter().filter(|cell| cell.is_active()).all(|cell| (1..=31).contains(&cell.value())));
}

#[test]
fn decade_picker_from_profile() {
    let profile = presets().require(LONG_PROFILE).unwrap();
    let reference = 2024;

    let decades: Vec<Decade> = profile.decades(reference).collect();
    assert!(decades.iter().all(|decade| decade.end() - decade.start() == 9));
    assert!(decades.iter().any(|decade| decade.contains(reference)));

    let bounds = profile.year_bounds(reference);
    let first = decades.first().unwrap();
    let last = decades.last().unwrap();
    assert!(first.contains(*bounds.start()));
    assert!(last.contains(*bounds.end()));

    assert_eq!(profile.clamp_year(reference, 1800), *bounds.start());
    assert!(profile.is_scroll_offset_valid(-i32::from(profile.years_range())));
    assert!(!profile.is_scroll_offset_valid(i32::from(profile.years_range()) + 1));
}

#[test]
fn registry_loads_profiles_from_json() {
    let json = r#"{
        "compact": {
            "days": ["S", "M", "T", "W", "T", "F", "S"],
            "months": ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
            "dayOffset": 1,
            "yearsRange": 20
        }
    }"#;

    let registry: ProfileRegistry = serde_json::from_str(json).unwrap();
    let compact = registry.require("compact").unwrap();
    assert_eq!(compact.weekday_headers()[0], "M");
    assert_eq!(compact.year_bounds(2000), 1980..=2020);
    assert!(matches!(registry.require("short"), Err(ProfileError::UnknownProfile(_))));
}

#[test]
fn registry_rejects_profile_with_eleven_months() {
    let json = r#"{
        "broken": {
            "days": ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
            "months": ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov"],
            "dayOffset": 0,
            "yearsRange": 10
        }
    }"#;

    let err = serde_json::from_str::<ProfileRegistry>(json).unwrap_err();
    assert!(err.to_string().contains("months needs 12 labels, found 11"));
}

#[test]
fn custom_profile_alongside_presets() {
    let mut registry = ProfileRegistry::builtin();
    let custom = Profile::long().with_years_range(5);
    registry.register("recent", custom).unwrap();

    assert_eq!(registry.len(), 3);
    assert_eq!(registry.require("recent").unwrap().months()[11], "December");
    assert!(registry.register(LONG_PROFILE, Profile::long()).is_err());
}

#[test]
fn cells_and_decades_round_trip_through_json() {
    let cells = vec![
        CellValue::label("2020s", 2020),
        CellValue::day(DayOfMonth::new(14).unwrap()),
    ];
    let json = serde_json::to_string(&cells).unwrap();
    assert_eq!(
        json,
        r#"[{"text":"2020s","active":false,"value":2020},{"text":14,"active":true,"value":14}]"#
    );
    let parsed: Vec<CellValue> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, cells);

    let decade: Decade = "1990/1999".parse().unwrap();
    let parsed: Decade = serde_json::from_str(&serde_json::to_string(&decade).unwrap()).unwrap();
    assert_eq!(parsed, decade);
}
