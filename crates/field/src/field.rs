//! Module for gridded time series data and implementations

// crate modules
use crate::bounds::BoundingBox;
use crate::error::{Error, Result};

// ashtools modules
use ashtools_utils::{f, Coordinate, OptionExt};

// standard library
use std::collections::BTreeMap;

// external crates
use chrono::{DateTime, Utc};
use itertools::Itertools;
use log::warn;
use ndarray::{Array3, ArrayView2, Axis, Slice};

/// Sentinel for cells with no meaningful deposit
///
/// Plotting libraries leave `NaN` cells blank, where a `0.0` would still be
/// drawn with the lowest colour.
pub const MISSING: f64 = f64::NAN;

/// Check if a cell value counts as deposit for a given threshold
///
/// A cell is significant only if it is strictly above the threshold, so values
/// equal to the threshold and [MISSING] cells never are.
///
/// ```rust
/// # use ashtools_field::{is_significant, MISSING};
/// assert!(is_significant(0.1, 0.0));
/// assert!(!is_significant(0.0, 0.0));
/// assert!(!is_significant(MISSING, 0.0));
/// ```
pub fn is_significant(value: f64, threshold: f64) -> bool {
    value > threshold
}

/// Descriptive attributes carried alongside the grid
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata {
    /// Start of the eruption
    pub eruption_time: Option<DateTime<Utc>>,
    /// Vent location of the source volcano
    pub source: Option<Coordinate>,
    /// Measurement units of the cell values, e.g. "mm"
    pub units: Option<String>,
    /// Any other text attributes provided by the model output
    pub attributes: BTreeMap<String, String>,
}

/// A time series of 2D ashfall deposit grids
///
/// Values are indexed as (time, row, column), where rows follow the latitude
/// axis and columns follow the longitude axis.
///
/// The grid is always consistent with its coordinate axes, there is at least
/// one time step, and times are strictly increasing. These are checked when
/// the field is created with [Field::new()].
///
/// ```rust
/// # use ashtools_field::{Field, Metadata};
/// # use chrono::{TimeZone, Utc};
/// # use ndarray::Array3;
/// let times = vec![Utc.with_ymd_and_hms(2018, 8, 27, 12, 0, 0).unwrap()];
/// let latitudes = vec![61.0, 61.5];
/// let longitudes = vec![-153.0, -152.5, -152.0];
/// let values = Array3::zeros((1, 2, 3));
///
/// let field = Field::new(times, latitudes, longitudes, values, Metadata::default()).unwrap();
/// assert_eq!(field.shape(), (1, 2, 3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    times: Vec<DateTime<Utc>>,
    latitudes: Vec<f64>,
    longitudes: Vec<f64>,
    values: Array3<f64>,
    /// Attributes of the field
    pub metadata: Metadata,
}

impl Field {
    /// Create a new field, checking the grid against its axes
    ///
    /// Negative cell values are not physical for a deposit and are set to
    /// `0.0` with a warning.
    pub fn new(
        times: Vec<DateTime<Utc>>,
        latitudes: Vec<f64>,
        longitudes: Vec<f64>,
        mut values: Array3<f64>,
        metadata: Metadata,
    ) -> Result<Self> {
        let negatives = values.iter().filter(|v| **v < 0.0).count();
        if negatives > 0 {
            warn!("{negatives} negative cell values set to 0.0");
            values.mapv_inplace(|v| if v < 0.0 { 0.0 } else { v });
        }

        let field = Self {
            times,
            latitudes,
            longitudes,
            values,
            metadata,
        };

        field.validate()?;
        Ok(field)
    }

    /// Check the grid shape against the coordinate axes and time ordering
    pub fn validate(&self) -> Result<()> {
        if self.times.is_empty() {
            return Err(Error::NoTimeSteps);
        }

        let (n_times, n_rows, n_columns) = self.values.dim();
        let axes = [
            ("time", n_times, self.times.len()),
            ("latitude", n_rows, self.latitudes.len()),
            ("longitude", n_columns, self.longitudes.len()),
        ];

        for (axis, expected, found) in axes {
            if expected != found {
                return Err(Error::AxisLengthMismatch {
                    axis,
                    expected,
                    found,
                });
            }
        }

        if let Some((a, b)) = self.times.iter().tuple_windows().find(|(a, b)| a >= b) {
            return Err(Error::NonIncreasingTime(f!("{a} followed by {b}")));
        }

        Ok(())
    }

    /// Timestamps of every frame
    pub fn times(&self) -> &[DateTime<Utc>] {
        &self.times
    }

    /// Row coordinates
    pub fn latitudes(&self) -> &[f64] {
        &self.latitudes
    }

    /// Column coordinates
    pub fn longitudes(&self) -> &[f64] {
        &self.longitudes
    }

    /// Full (time, row, column) grid
    pub fn values(&self) -> &Array3<f64> {
        &self.values
    }

    /// Grid dimensions as (time, row, column)
    pub fn shape(&self) -> (usize, usize, usize) {
        self.values.dim()
    }

    /// Number of time steps
    pub fn n_times(&self) -> usize {
        self.times.len()
    }

    /// Grid at a single time step
    pub fn frame(&self, index: usize) -> Option<ArrayView2<f64>> {
        (index < self.n_times()).then(|| self.values.index_axis(Axis(0), index))
    }

    /// Grid at the final time step, i.e. the total accumulated deposit
    pub fn last_frame(&self) -> ArrayView2<f64> {
        self.values.index_axis(Axis(0), self.n_times() - 1)
    }

    /// Minimum and maximum of all non-missing cells
    ///
    /// ```rust
    /// # use ashtools_field::{Field, Metadata, MISSING};
    /// # use chrono::Utc;
    /// # use ndarray::array;
    /// let values = array![[[MISSING, 0.5], [3.0, 1.5]]];
    /// let field = Field::new(vec![Utc::now()], vec![0.0, 1.0], vec![0.0, 1.0], values, Metadata::default()).unwrap();
    /// assert_eq!(field.value_range(), Some((0.5, 3.0)));
    /// ```
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .filter(|v| !v.is_nan())
            .copied()
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()
    }

    /// Bounding box of significant cells in the final frame
    pub fn bounding_box(&self, threshold: f64) -> Option<BoundingBox> {
        BoundingBox::from_frame(self.last_frame(), threshold)
    }

    /// New field restricted to the rows and columns of `bounds`
    ///
    /// Every time step is cropped identically, along with both coordinate
    /// axes. Metadata are copied unchanged.
    pub fn crop(&self, bounds: &BoundingBox) -> Result<Self> {
        let (_, n_rows, n_columns) = self.shape();
        if bounds.row_min > bounds.row_max
            || bounds.col_min > bounds.col_max
            || bounds.row_max >= n_rows
            || bounds.col_max >= n_columns
        {
            return Err(Error::CropOutOfBounds {
                rows: (bounds.row_min, bounds.row_max),
                columns: (bounds.col_min, bounds.col_max),
                shape: (n_rows, n_columns),
            });
        }

        let rows = bounds.row_min..bounds.row_max + 1;
        let columns = bounds.col_min..bounds.col_max + 1;

        Ok(Self {
            times: self.times.clone(),
            latitudes: self.latitudes[rows.clone()].to_vec(),
            longitudes: self.longitudes[columns.clone()].to_vec(),
            values: self
                .values
                .slice_axis(Axis(1), Slice::from(rows))
                .slice_axis(Axis(2), Slice::from(columns))
                .to_owned(),
            metadata: self.metadata.clone(),
        })
    }

    /// Replace every cell that is not significant with [MISSING]
    pub fn mask(&mut self, threshold: f64) {
        self.values.mapv_inplace(|v| {
            if is_significant(v, threshold) {
                v
            } else {
                MISSING
            }
        });
    }

    /// Insert an all-[MISSING] frame before the first time step
    ///
    /// `time` must be earlier than the current first time step.
    pub fn prepend_empty_frame(&mut self, time: DateTime<Utc>) -> Result<()> {
        let first = self.times[0];
        if time >= first {
            return Err(Error::NonIncreasingTime(f!(
                "{time} is not before the first time step {first}"
            )));
        }

        let (n_times, n_rows, n_columns) = self.shape();
        let mut values = Array3::from_elem((n_times + 1, n_rows, n_columns), MISSING);
        values
            .slice_axis_mut(Axis(0), Slice::new(1, None, 1))
            .assign(&self.values);

        self.values = values;
        self.times.insert(0, time);
        Ok(())
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (n_times, n_rows, n_columns) = self.shape();
        let mut s = "Field {\n".to_string();
        s += &f!("    grid: {n_times} x {n_rows} x {n_columns} (time x lat x lon)\n");
        s += &f!(
            "    times: {} to {}\n",
            self.times[0],
            self.times[n_times - 1]
        );
        s += &f!(
            "    values: {}\n",
            self.value_range()
                .map(|(min, max)| f!("{min:.5e} to {max:.5e}"))
                .or_unset()
        );
        s += &f!("    units: {}\n", self.metadata.units.or_unset());
        s += &f!("    eruption: {}\n", self.metadata.eruption_time.or_unset());
        s += &f!("    source: {}\n}}", self.metadata.source.or_unset());
        write!(f, "{}", s)
    }
}
