/// A geographic point in decimal degrees
///
/// Latitude comes first to match how vent locations are usually quoted, e.g.
/// Mount Spurr at 61.30N, 152.25W is `Coordinate::new(61.30, -152.25)`.
///
/// ```rust
/// # use ashtools_utils::Coordinate;
/// let spurr = Coordinate::new(61.30, -152.25);
/// assert_eq!(spurr.to_string(), "61.3000N 152.2500W");
/// assert_eq!(spurr.lon_lat(), (-152.25, 61.30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    /// Degrees north, -ve for the southern hemisphere
    pub latitude: f64,
    /// Degrees east, -ve for the western hemisphere
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate from latitude and longitude
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The (longitude, latitude) order used by plotting and GMT tools
    pub fn lon_lat(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.4}{ns} {:.4}{ew}",
            self.latitude.abs(),
            self.longitude.abs()
        )
    }
}
