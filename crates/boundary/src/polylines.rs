//! Module for parsed boundary segments

// crate modules
use crate::coast::Region;

// ashtools modules
use ashtools_utils::{f, SliceExt};

// external crates
use serde::Serialize;

/// Longitude and latitude lists for every segment of a boundary file
///
/// Each segment is a separate polyline, e.g. a stretch of coastline or an
/// island outline. Segment `n` of the longitudes always has the same length
/// as segment `n` of the latitudes.
///
/// Serialises to the `{"latitude": [...], "longitude": [...]}` dictionary
/// layout that plotting scripts expect.
///
/// ```rust
/// # use ashtools_boundary::parse_boundary;
/// let polylines = parse_boundary(["1.0 2.0", "1.5 2.5", ">", "3.0 4.0"]).unwrap();
///
/// assert_eq!(polylines.number_of_segments(), 2);
/// assert_eq!(polylines.number_of_points(), 3);
///
/// let (latitudes, longitudes) = polylines.into_lat_lon();
/// assert_eq!(latitudes, vec![vec![2.0, 2.5], vec![4.0]]);
/// assert_eq!(longitudes, vec![vec![1.0, 1.5], vec![3.0]]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polylines {
    #[serde(rename = "latitude")]
    latitudes: Vec<Vec<f64>>,
    #[serde(rename = "longitude")]
    longitudes: Vec<Vec<f64>>,
}

impl Polylines {
    /// No segments at all, only used as a starting point by the reader
    pub(crate) fn empty() -> Self {
        Self {
            latitudes: Vec::new(),
            longitudes: Vec::new(),
        }
    }

    /// Latitudes of every segment
    pub fn latitudes(&self) -> &[Vec<f64>] {
        &self.latitudes
    }

    /// Longitudes of every segment
    pub fn longitudes(&self) -> &[Vec<f64>] {
        &self.longitudes
    }

    /// Number of segments, including any empty ones
    pub fn number_of_segments(&self) -> usize {
        self.longitudes.len()
    }

    /// Total number of coordinate pairs over all segments
    pub fn number_of_points(&self) -> usize {
        self.longitudes.iter().map(Vec::len).sum()
    }

    /// Iterate over `(longitudes, latitudes)` for each segment
    ///
    /// ```rust
    /// # use ashtools_boundary::parse_boundary;
    /// let polylines = parse_boundary(["1.0 2.0", ">", "3.0 4.0"]).unwrap();
    /// for (lon, lat) in polylines.segments() {
    ///     assert_eq!(lon.len(), lat.len());
    /// }
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = (&[f64], &[f64])> {
        self.longitudes
            .iter()
            .zip(self.latitudes.iter())
            .map(|(lon, lat)| (lon.as_slice(), lat.as_slice()))
    }

    /// Bounding region of every point in the file
    ///
    /// Returns `None` when there are no points, or if any coordinate is not a
    /// finite number. The region may be degenerate for a single point.
    pub fn extent(&self) -> Option<Region> {
        let lon = self.longitudes.concat();
        let lat = self.latitudes.concat();

        Some(Region {
            lon_min: lon.try_min().ok()?,
            lon_max: lon.try_max().ok()?,
            lat_min: lat.try_min().ok()?,
            lat_max: lat.try_max().ok()?,
        })
    }

    /// Consume into the `(latitudes, longitudes)` pair
    pub fn into_lat_lon(self) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        (self.latitudes, self.longitudes)
    }

    /// Add a completed segment, lengths are guaranteed equal by the reader
    pub(crate) fn push_segment(&mut self, longitudes: Vec<f64>, latitudes: Vec<f64>) {
        debug_assert_eq!(longitudes.len(), latitudes.len());
        self.longitudes.push(longitudes);
        self.latitudes.push(latitudes);
    }
}

impl std::fmt::Display for Polylines {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "Polylines {\n".to_string();
        s += &f!("    segments: {}\n", self.number_of_segments());
        s += &f!("    points: {}\n", self.number_of_points());
        match self.extent() {
            Some(region) => s += &f!("    extent: {region}\n}}"),
            None => s += "    extent: none\n}",
        }
        write!(f, "{}", s)
    }
}
