//! Integration tests for field normalisation

use ashtools_field::{
    normalize, read_field_json, write_field_json, Error, Field, Metadata, Normalizer,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use ndarray::{array, Array3};
use rstest::{fixture, rstest};

#[fixture]
fn eruption() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 8, 27, 12, 0, 0).unwrap()
}

#[fixture]
fn spurr() -> Field {
    read_field_json("./data/spurr_2018_deposit.json").unwrap()
}

#[rstest]
fn reads_example(spurr: Field) {
    assert_eq!(spurr.shape(), (3, 3, 4));
    assert_eq!(spurr.metadata.units.as_deref(), Some("mm"));
    assert_eq!(spurr.metadata.attributes["model"], "Ash3d");
    assert!(spurr.values()[[2, 2, 1]].is_nan());
    assert_eq!(spurr.values()[[2, 1, 2]], 1.6);
}

#[rstest]
fn crops_to_final_deposit(spurr: Field, eruption: DateTime<Utc>) {
    let result = normalize(&spurr, 0.0, eruption).unwrap();

    assert_eq!(result.shape(), (4, 2, 2));
    assert_eq!(result.latitudes(), &[61.0, 61.5]);
    assert_eq!(result.longitudes(), &[-152.5, -152.0]);

    // first frame is the empty eruption frame
    assert_eq!(result.times()[0], eruption);
    assert!(result.frame(0).unwrap().iter().all(|v| v.is_nan()));

    // zero and missing cells end up missing, deposit is untouched
    assert!(result.values()[[1, 0, 0]].is_nan());
    assert_eq!(result.values()[[1, 0, 1]], 0.2);
    assert!(result.values()[[3, 1, 0]].is_nan());
    assert_eq!(result.values()[[3, 0, 1]], 1.6);
}

#[rstest]
#[case(0.0, (2, 2))]
#[case(0.1, (2, 1))]
#[case(1.0, (1, 1))]
#[case(2.0, (3, 4))]
fn extent_depends_on_threshold(
    spurr: Field,
    eruption: DateTime<Utc>,
    #[case] threshold: f64,
    #[case] extent: (usize, usize),
) {
    let result = normalize(&spurr, threshold, eruption).unwrap();
    let (n_times, n_rows, n_columns) = result.shape();

    assert_eq!(n_times, spurr.n_times() + 1);
    assert_eq!((n_rows, n_columns), extent);
}

#[rstest]
#[case(0.0)]
#[case(0.1)]
#[case(0.5)]
fn normalising_twice_keeps_extent(
    spurr: Field,
    eruption: DateTime<Utc>,
    #[case] threshold: f64,
) {
    let once = normalize(&spurr, threshold, eruption).unwrap();
    let twice = normalize(&once, threshold, eruption - Duration::hours(1)).unwrap();

    assert_eq!(once.latitudes(), twice.latitudes());
    assert_eq!(once.longitudes(), twice.longitudes());
    assert_eq!(twice.n_times(), once.n_times() + 1);
}

#[rstest]
fn times_strictly_increasing(spurr: Field, eruption: DateTime<Utc>) {
    let result = normalize(&spurr, 0.0, eruption).unwrap();
    for pair in result.times().windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[rstest]
fn overrides_units(spurr: Field, eruption: DateTime<Utc>) {
    let mut normalizer = Normalizer::new(0.0);
    normalizer.set_units("cm");
    let result = normalizer.normalize(&spurr, eruption).unwrap();

    assert_eq!(result.metadata.units.as_deref(), Some("cm"));
    assert_eq!(result.metadata.attributes["variable"], "DepositThickness");
}

#[rstest]
fn json_round_trip(spurr: Field, eruption: DateTime<Utc>) {
    let result = normalize(&spurr, 0.0, eruption).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("normalised.json");
    write_field_json(&result, &path).unwrap();
    let copy = read_field_json(&path).unwrap();

    assert_eq!(copy.shape(), result.shape());
    assert_eq!(copy.times(), result.times());
    assert_eq!(copy.metadata, result.metadata);
    for (a, b) in copy.values().iter().zip(result.values().iter()) {
        assert!(a == b || (a.is_nan() && b.is_nan()));
    }
}

#[test]
fn two_by_two_scenario() {
    let eruption = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let times = vec![eruption + Duration::hours(1), eruption + Duration::hours(2)];
    let values = array![[[0.0, 0.0], [0.0, 2.0]], [[0.0, 0.0], [0.0, 5.0]]];
    let metadata = Metadata {
        units: Some("kg/m2".to_string()),
        ..Default::default()
    };
    let field = Field::new(times, vec![0.0, 1.0], vec![10.0, 11.0], values, metadata).unwrap();

    let result = normalize(&field, 0.0, eruption).unwrap();
    assert_eq!(result.shape(), (3, 1, 1));
    assert_eq!(result.latitudes(), &[1.0]);
    assert_eq!(result.longitudes(), &[11.0]);
}

#[test]
fn mismatched_values_fail() {
    let json = r#"{
        "times": ["2018-08-27T13:00:00Z"],
        "latitudes": [60.5, 61.0],
        "longitudes": [-153.0],
        "values": [0.0, 0.0, 1.0]
    }"#;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, json).unwrap();

    assert!(matches!(read_field_json(&path), Err(Error::Shape(_))));
}

#[test]
fn empty_time_axis_fails() {
    let result = Field::new(
        vec![],
        vec![0.0],
        vec![0.0],
        Array3::zeros((0, 1, 1)),
        Metadata::default(),
    );
    assert!(matches!(result, Err(Error::NoTimeSteps)));
}
