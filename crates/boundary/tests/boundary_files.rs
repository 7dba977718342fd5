//! Integration tests for reading and writing boundary files

use ashtools_boundary::{
    parse_boundary, read_boundary_file, write_boundary, write_json, Error, Polylines,
};
use rstest::{fixture, rstest};

#[fixture]
fn cook_inlet() -> Polylines {
    read_boundary_file("./data/cook_inlet.xy").unwrap()
}

#[rstest]
fn leading_header_gives_empty_first_segment(cook_inlet: Polylines) {
    // three headers, so four segments with the first one empty
    assert_eq!(cook_inlet.number_of_segments(), 4);
    assert!(cook_inlet.longitudes()[0].is_empty());
    assert_eq!(cook_inlet.longitudes()[1].len(), 4);
    assert_eq!(cook_inlet.longitudes()[2].len(), 3);
    assert_eq!(cook_inlet.longitudes()[3].len(), 5);
    assert_eq!(cook_inlet.number_of_points(), 12);
}

#[rstest]
fn segment_lengths_match(cook_inlet: Polylines) {
    for (lon, lat) in cook_inlet.segments() {
        assert_eq!(lon.len(), lat.len());
    }
    assert_eq!(cook_inlet.longitudes()[2][0], -152.4167);
    assert_eq!(cook_inlet.latitudes()[2][0], 60.1822);
}

#[rstest]
fn extent_of_file(cook_inlet: Polylines) {
    let region = cook_inlet.extent().unwrap();
    assert_eq!(region.lon_min, -153.4311);
    assert_eq!(region.lon_max, -151.6021);
    assert_eq!(region.lat_min, 59.3625);
    assert_eq!(region.lat_max, 60.2694);
}

#[rstest]
#[case("", 1)]
#[case(">", 2)]
#[case("1 2\n>\n3 4\n>\n5 6", 3)]
#[case(">\n>\n>", 4)]
#[case("1 2\n3 4\n5 6\n", 1)]
fn segments_are_separators_plus_one(#[case] text: &str, #[case] expected: usize) {
    let polylines = parse_boundary(text.lines()).unwrap();
    assert_eq!(polylines.number_of_segments(), expected);
    assert_eq!(polylines.latitudes().len(), polylines.longitudes().len());
}

#[test]
fn single_segment_values() {
    let polylines = read_boundary_file("./data/single_segment.xy").unwrap();
    let (latitudes, longitudes) = polylines.into_lat_lon();

    assert_eq!(latitudes.len(), 1);
    assert_eq!(longitudes.len(), 1);

    let expected = [(-122.18, 46.20), (-121.76, 46.85), (-121.70, 45.37)];
    for (i, (lon, lat)) in expected.iter().enumerate() {
        assert!((longitudes[0][i] - lon).abs() < 1e-12);
        assert!((latitudes[0][i] - lat).abs() < 1e-12);
    }
}

#[test]
fn malformed_file_fails() {
    let result = read_boundary_file("./data/malformed.xy");
    assert!(matches!(result, Err(Error::MalformedInput { line: 2, .. })));
}

#[test]
fn missing_file_fails() {
    let result = read_boundary_file("./data/does_not_exist.xy");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[rstest]
fn written_file_reads_back(cook_inlet: Polylines) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("copy.xy");

    write_boundary(&cook_inlet, &path).unwrap();
    let copy = read_boundary_file(&path).unwrap();

    assert_eq!(copy, cook_inlet);
}

#[rstest]
fn json_output(cook_inlet: Polylines) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("coast.json");

    write_json(&cook_inlet, &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(value["latitude"].as_array().unwrap().len(), 4);
    assert_eq!(value["longitude"][1][0].as_f64(), Some(-151.9125));
}
