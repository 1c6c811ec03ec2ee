// File: crates/timeline-core/tests/properties.rs
// Purpose: Property checks over random record sets: series count/order, finite y, ordering, idempotence.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use timeline_core::{resolve_domains, x_scale_stops, Record, SeriesNormalizer, TimelineConfig};

const COLUMNS: [&str; 3] = ["a", "b", "c"];

fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        (-1.0e6f64..1.0e6).prop_map(|v| format!("{v}")),
        Just("".to_string()),
        Just("n/a".to_string()),
        Just("NaN".to_string()),
        "[a-z]{1,4}",
    ]
}

fn rows() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((0i64..400, cell(), cell(), cell()), 0..40).prop_map(|rows| {
        let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        rows.into_iter()
            .map(|(offset, a, b, c)| {
                let date = (base + Duration::days(offset)).format("%Y-%m-%d").to_string();
                Record::new().with("date", date).with("a", a).with("b", b).with("c", c)
            })
            .collect()
    })
}

fn columns() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(COLUMNS.to_vec(), 1..=3)
        .prop_shuffle()
        .prop_map(|v| v.into_iter().map(String::from).collect())
}

proptest! {
    #[test]
    fn series_follow_configuration(records in rows(), cols in columns()) {
        let cfg = TimelineConfig::new().x("date").y_fields(cols.clone());
        let out = SeriesNormalizer::configure(&cfg).unwrap().ingest(&records).unwrap();
        let names: Vec<String> = out.series.iter().map(|s| s.name.clone()).collect();
        prop_assert_eq!(names, cols);
    }

    #[test]
    fn every_point_is_finite_and_ordered(records in rows()) {
        let cfg = TimelineConfig::new().x("date").y_fields(COLUMNS);
        let out = SeriesNormalizer::configure(&cfg).unwrap().ingest(&records).unwrap();
        prop_assert_eq!(out.records.len(), records.len());
        for pair in out.records.windows(2) {
            prop_assert!(pair[0].x.valid() <= pair[1].x.valid());
        }
        for s in &out.series {
            for p in &s.values {
                prop_assert!(p.y.is_finite());
            }
            for pair in s.values.windows(2) {
                prop_assert!(pair[0].x.valid() <= pair[1].x.valid());
                prop_assert!(pair[0].row < pair[1].row);
            }
        }
    }

    #[test]
    fn ingest_is_idempotent(records in rows()) {
        let cfg = TimelineConfig::new().x("date").y_fields(["a", "c"]);
        let n = SeriesNormalizer::configure(&cfg).unwrap();
        let first = n.ingest(&records).unwrap();
        let second = n.ingest(&records).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn one_distinct_date_gives_three_stops(values in prop::collection::vec(-1.0e3f64..1.0e3, 1..8), width in 10.0f32..2000.0) {
        let records: Vec<Record> = values.iter().map(|v| Record::new().with("date", "2021-07-04").with("a", *v)).collect();
        let cfg = TimelineConfig::new().x("date").y("a");
        let out = SeriesNormalizer::configure(&cfg).unwrap().ingest(&records).unwrap();
        let d = resolve_domains(&out.series, false).unwrap();
        let (domain, range) = x_scale_stops(d.x, 0.0, width);
        prop_assert_eq!(domain.len(), 3);
        prop_assert_eq!(domain[1], d.x.min);
        prop_assert_eq!(range[1], width / 2.0);
    }
}
