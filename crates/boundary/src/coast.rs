//! Describing coastline extraction requests
//!
//! Boundary files are produced by running `gmt pscoast` over a region of
//! interest. Nothing here runs GMT, but the argument list is built so that the
//! caller can spawn the process however they like and feed the text output to
//! [read_boundary()](crate::read_boundary).

// crate modules
use crate::error::{Error, Result};

// ashtools modules
use ashtools_utils::f;

// standard library
use std::str::FromStr;

/// GMT shoreline database resolution
///
/// Parsed from the single letter used by the `-D` option, case-insensitive.
///
/// ```rust
/// # use ashtools_boundary::Resolution;
/// let resolution: Resolution = "i".parse().unwrap();
/// assert_eq!(resolution, Resolution::Intermediate);
/// assert_eq!(resolution.to_string(), "i");
///
/// assert!("x".parse::<Resolution>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    /// Full resolution (f)
    Full,
    /// High resolution (h)
    High,
    /// Intermediate resolution (i)
    Intermediate,
    /// Low resolution (l), the GMT default
    #[default]
    Low,
    /// Crude resolution (c)
    Crude,
}

impl Resolution {
    /// The letter GMT expects for the `-D` option
    pub fn letter(&self) -> char {
        match self {
            Self::Full => 'f',
            Self::High => 'h',
            Self::Intermediate => 'i',
            Self::Low => 'l',
            Self::Crude => 'c',
        }
    }
}

impl FromStr for Resolution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "f" | "full" => Ok(Self::Full),
            "h" | "high" => Ok(Self::High),
            "i" | "intermediate" => Ok(Self::Intermediate),
            "l" | "low" => Ok(Self::Low),
            "c" | "crude" => Ok(Self::Crude),
            _ => Err(Error::UnknownResolution(s.to_string())),
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Longitude and latitude bounds in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Western bound
    pub lon_min: f64,
    /// Eastern bound
    pub lon_max: f64,
    /// Southern bound
    pub lat_min: f64,
    /// Northern bound
    pub lat_max: f64,
}

impl Region {
    /// Create a region, checking it describes a real area
    ///
    /// ```rust
    /// # use ashtools_boundary::Region;
    /// assert!(Region::new(-156.0, -148.0, 58.0, 63.0).is_ok());
    ///
    /// // bounds the wrong way round, or off the globe
    /// assert!(Region::new(-148.0, -156.0, 58.0, 63.0).is_err());
    /// assert!(Region::new(-156.0, -148.0, 58.0, 93.0).is_err());
    /// ```
    pub fn new(lon_min: f64, lon_max: f64, lat_min: f64, lat_max: f64) -> Result<Self> {
        let region = Self {
            lon_min,
            lon_max,
            lat_min,
            lat_max,
        };
        region.validate()?;
        Ok(region)
    }

    /// Check bounds are finite, ordered, and latitudes are on the globe
    pub fn validate(&self) -> Result<()> {
        let values = [self.lon_min, self.lon_max, self.lat_min, self.lat_max];
        if values.iter().any(|v| !v.is_finite())
            || self.lon_min >= self.lon_max
            || self.lat_min >= self.lat_max
            || self.lat_min < -90.0
            || self.lat_max > 90.0
        {
            return Err(Error::InvalidRegion(self.to_string()));
        }
        Ok(())
    }

    /// Region in the `west/east/south/north` form of the GMT `-R` option
    pub fn gmt_region(&self) -> String {
        f!(
            "{}/{}/{}/{}",
            self.lon_min,
            self.lon_max,
            self.lat_min,
            self.lat_max
        )
    }
}

impl FromStr for Region {
    type Err = Error;

    /// Parse the `west/east/south/north` form used by GMT
    ///
    /// ```rust
    /// # use ashtools_boundary::Region;
    /// let region: Region = "-156/-148/58/63".parse().unwrap();
    /// assert_eq!(region.lon_min, -156.0);
    /// assert_eq!(region.lat_max, 63.0);
    ///
    /// assert!("-156/-148/58".parse::<Region>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split('/')
            .map(|v| v.trim().parse::<f64>())
            .collect::<core::result::Result<Vec<f64>, _>>()
            .map_err(|_| Error::InvalidRegion(s.to_string()))?;

        match values[..] {
            [lon_min, lon_max, lat_min, lat_max] => {
                Self::new(lon_min, lon_max, lat_min, lat_max)
            }
            _ => Err(Error::InvalidRegion(s.to_string())),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}] lon x [{}, {}] lat",
            self.lon_min, self.lon_max, self.lat_min, self.lat_max
        )
    }
}

/// Everything needed to ask GMT for boundary data
///
/// ```rust
/// # use ashtools_boundary::{CoastlineRequest, Region, Resolution};
/// let region = Region::new(-156.0, -148.0, 58.0, 63.0).unwrap();
/// let request = CoastlineRequest::new(region, Resolution::High).unwrap();
///
/// assert_eq!(
///     request.pscoast_args(),
///     vec!["pscoast", "-JB-156/58/58/63/4.7i", "-R-156/-148/58/63", "-Dh", "-W", "-M"]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoastlineRequest {
    /// Area to extract boundaries for
    pub region: Region,
    /// Shoreline database resolution
    pub resolution: Resolution,
}

impl CoastlineRequest {
    /// Create a new request for a valid region
    pub fn new(region: Region, resolution: Resolution) -> Result<Self> {
        region.validate()?;
        Ok(Self { region, resolution })
    }

    /// Arguments to pass to the `gmt` executable
    ///
    /// The projection (`-J`) is required by `pscoast` but has no effect on the
    /// dumped coordinates. `-M` asks for multi-segment text output.
    pub fn pscoast_args(&self) -> Vec<String> {
        let r = &self.region;
        vec![
            "pscoast".to_string(),
            f!("-JB{}/{}/{}/{}/4.7i", r.lon_min, r.lat_min, r.lat_min, r.lat_max),
            f!("-R{}", r.gmt_region()),
            f!("-D{}", self.resolution),
            "-W".to_string(),
            "-M".to_string(),
        ]
    }
}
