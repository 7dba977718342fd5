//! Integration tests for finding source locations from file names

use ashtools_sites::{site_key_from_path, Error, SiteTable};
use ashtools_utils::Coordinate;
use rstest::{fixture, rstest};

#[fixture]
fn table() -> SiteTable {
    SiteTable::volcanoes()
}

#[rstest]
#[case("spurr_2018_deposit.json", 61.299, -152.251)]
#[case("/data/runs/Redoubt_2009_03_23.nc", 60.485, -152.742)]
#[case("./STHELENS_1980.nc", 46.200, -122.180)]
#[case("augustine.json", 59.363, -153.435)]
fn lookup_from_filename(
    table: SiteTable,
    #[case] path: &str,
    #[case] latitude: f64,
    #[case] longitude: f64,
) {
    let key = site_key_from_path(path).unwrap();
    let location = table.lookup(&key).unwrap();
    assert_eq!(location, Coordinate::new(latitude, longitude));
}

#[rstest]
#[case("")]
#[case("_deposit.nc")]
#[case("st-helens_1980.nc")]
#[case(".json")]
fn unusable_filenames(#[case] path: &str) {
    assert!(matches!(
        site_key_from_path(path),
        Err(Error::InvalidFilename(_))
    ));
}

#[rstest]
fn unknown_site(table: SiteTable) {
    let key = site_key_from_path("hekla_2000.nc").unwrap();
    assert_eq!(key, "hekla");
    assert_eq!(
        table.lookup(&key),
        Err(Error::SiteNotFound("hekla".to_string()))
    );
}

#[test]
fn substituted_table() {
    let table: SiteTable = [("hekla", Coordinate::new(63.983, -19.666))]
        .into_iter()
        .collect();

    let key = site_key_from_path("hekla_2000.nc").unwrap();
    assert_eq!(table.lookup(&key).unwrap().lon_lat(), (-19.666, 63.983));
}
