// File: crates/timeline-core/tests/normalize.rs
// Purpose: Record normalization: x parsing, sorting, per-series NaN filtering, config errors.

use chrono::{NaiveDate, NaiveDateTime};
use timeline_core::{
    DateParser, FieldValue, InvalidDatePolicy, Record, SeriesNormalizer, TimelineConfig, TimelineError, Timestamp,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
}

fn row(date: &str, a: &str, b: &str) -> Record {
    Record::new().with("date", date).with("a", a).with("b", b)
}

fn xy(s: &timeline_core::Series) -> Vec<(NaiveDateTime, f64)> { s.xy().collect() }

#[test]
fn two_columns_drop_non_numeric_independently() {
    let cfg = TimelineConfig::new().x("date").y_fields(["a", "b"]);
    let out = SeriesNormalizer::configure(&cfg)
        .unwrap()
        .ingest(&[row("2020-01-01", "5", "x"), row("2020-01-02", "7", "2")])
        .unwrap();

    assert_eq!(out.series.len(), 2);
    assert_eq!(out.series[0].name, "a");
    assert_eq!(xy(&out.series[0]), vec![(day(2020, 1, 1), 5.0), (day(2020, 1, 2), 7.0)]);
    assert_eq!(out.series[1].name, "b");
    assert_eq!(xy(&out.series[1]), vec![(day(2020, 1, 2), 2.0)]);
    // row index still points at the second record
    assert_eq!(out.series[1].values[0].row, 1);
}

#[test]
fn records_are_sorted_by_date_and_ties_keep_order() {
    let cfg = TimelineConfig::new().x("date").y("a");
    let input = vec![
        row("2020-03-01", "3", ""),
        row("2020-01-01", "1", "first"),
        row("2020-02-01", "2", ""),
        row("2020-01-01", "9", "second"),
    ];
    let out = SeriesNormalizer::configure(&cfg).unwrap().ingest(&input).unwrap();
    let ys: Vec<f64> = out.series[0].values.iter().map(|p| p.y).collect();
    assert_eq!(ys, vec![1.0, 9.0, 2.0, 3.0]);
    assert_eq!(out.records[0].fields.get("b"), Some(&FieldValue::from("first")));
    assert_eq!(out.records[1].fields.get("b"), Some(&FieldValue::from("second")));
}

#[test]
fn x_field_is_removed_and_input_untouched() {
    let cfg = TimelineConfig::new().x("date").y("a").fill("b");
    let input = vec![row("2020-01-01", "1", "red")];
    let snapshot = input.clone();
    let out = SeriesNormalizer::configure(&cfg).unwrap().ingest(&input).unwrap();

    assert_eq!(input, snapshot);
    let rec = &out.records[0];
    assert!(!rec.fields.contains("date"));
    assert_eq!(rec.x, Timestamp::Valid(day(2020, 1, 1)));
    assert_eq!(rec.color, Some(FieldValue::from("red")));
}

#[test]
fn date_values_pass_through_unparsed() {
    let cfg = TimelineConfig::new().x("when").y("v").parse_date("%d/%m/%Y");
    let input = vec![
        Record::new().with("when", day(2021, 6, 1)).with("v", 1.0),
        Record::new().with("when", "15/05/2021").with("v", 2.0),
    ];
    let out = SeriesNormalizer::configure(&cfg).unwrap().ingest(&input).unwrap();
    assert_eq!(xy(&out.series[0]), vec![(day(2021, 5, 15), 2.0), (day(2021, 6, 1), 1.0)]);
}

#[test]
fn series_columns_used_when_y_absent() {
    let cfg = TimelineConfig::new().x("date").series(["b", "a"]);
    let out = SeriesNormalizer::configure(&cfg).unwrap().ingest(&[row("2020-01-01", "1", "2")]).unwrap();
    let names: Vec<&str> = out.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn missing_mappings_are_configuration_errors() {
    let no_x = TimelineConfig::new().y("a");
    assert_eq!(SeriesNormalizer::configure(&no_x).unwrap_err(), TimelineError::MissingField("x"));
    let no_y = TimelineConfig::new().x("date");
    assert_eq!(SeriesNormalizer::configure(&no_y).unwrap_err(), TimelineError::MissingField("y"));
}

#[test]
fn missing_and_blank_y_cells() {
    let cfg = TimelineConfig::new().x("date").y_fields(["a", "c"]);
    let out = SeriesNormalizer::configure(&cfg)
        .unwrap()
        .ingest(&[row("2020-01-01", "", "1"), row("2020-01-02", "inf", "1")])
        .unwrap();
    // blank coerces to zero, infinity is not plottable
    assert_eq!(xy(&out.series[0]), vec![(day(2020, 1, 1), 0.0)]);
    // column `c` never exists
    assert!(out.series[1].is_empty());
}

#[test]
fn invalid_date_policies() {
    let input = vec![row("2020-01-02", "1", ""), row("not a date", "2", ""), row("2020-01-01", "3", "")];

    let cfg = TimelineConfig::new().x("date").y("a");
    let out = SeriesNormalizer::configure(&cfg).unwrap().ingest(&input).unwrap();
    assert_eq!(out.records.len(), 3);
    // invalid sorts last
    assert_eq!(out.records[2].x, Timestamp::Invalid { raw: "not a date".into() });

    let cfg = cfg.invalid_dates(InvalidDatePolicy::Reject);
    let err = SeriesNormalizer::configure(&cfg).unwrap().ingest(&input).unwrap_err();
    assert_eq!(err, TimelineError::ParseFailure { column: "date".into(), value: "not a date".into() });

    let cfg = cfg.invalid_dates(InvalidDatePolicy::Drop);
    let out = SeriesNormalizer::configure(&cfg).unwrap().ingest(&input).unwrap();
    assert_eq!(out.records.len(), 2);
    assert!(out.series[0].values.iter().all(|p| p.x.is_valid()));
}

#[test]
fn custom_parser_is_used() {
    let parser = DateParser::custom(|s| {
        let year: i32 = s.strip_prefix("Y")?.parse().ok()?;
        NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)
    });
    let cfg = TimelineConfig::new().x("date").y("a").date_parser(parser);
    let out = SeriesNormalizer::configure(&cfg).unwrap().ingest(&[row("Y1999", "4", "")]).unwrap();
    assert_eq!(xy(&out.series[0]), vec![(day(1999, 1, 1), 4.0)]);
}
