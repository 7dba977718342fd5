//! Preparing raw model output for plotting

// crate modules
use crate::error::{Error, Result};
use crate::field::Field;

// standard library
use std::collections::BTreeMap;

// external crates
use chrono::{DateTime, Utc};
use log::{debug, warn};

/// Crop, mask, and time-extend a field in one go
///
/// Shorthand for [Normalizer::new()] with no overrides.
///
/// ```rust
/// # use ashtools_field::{normalize, Field, Metadata};
/// # use chrono::{TimeZone, Utc};
/// # use ndarray::array;
/// let eruption = Utc.with_ymd_and_hms(2018, 8, 27, 12, 0, 0).unwrap();
/// let times = vec![
///     Utc.with_ymd_and_hms(2018, 8, 27, 13, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2018, 8, 27, 14, 0, 0).unwrap(),
/// ];
/// let values = array![
///     [[0.0, 0.0], [0.0, 1.0]],
///     [[0.0, 0.0], [0.0, 5.0]],
/// ];
/// let metadata = Metadata {
///     units: Some("mm".to_string()),
///     ..Default::default()
/// };
///
/// let field = Field::new(times, vec![60.0, 60.5], vec![-153.0, -152.5], values, metadata).unwrap();
/// let result = normalize(&field, 0.0, eruption).unwrap();
///
/// // cropped to the one cell with deposit, with an extra empty frame at the start
/// assert_eq!(result.shape(), (3, 1, 1));
/// assert_eq!(result.times()[0], eruption);
/// assert!(result.values()[[0, 0, 0]].is_nan());
/// ```
pub fn normalize(field: &Field, threshold: f64, eruption_time: DateTime<Utc>) -> Result<Field> {
    Normalizer::new(threshold).normalize(field, eruption_time)
}

/// Configurable preparation of ashfall fields for plotting
///
/// The steps applied to a copy of the input field are:
///
/// - Find the bounding box of cells strictly above the threshold in the final
///   time step, i.e. the total deposit
/// - Crop every time step and the coordinate axes to that box
/// - Replace every cell at or below the threshold with
///   [MISSING](crate::MISSING)
/// - Insert an all-missing frame at the eruption time
///
/// If nothing in the final frame is above the threshold the full extent is
/// kept, and every cell ends up missing. This is a perfectly valid outcome for
/// an early forecast or a weak eruption, so only a warning is logged.
///
/// The result always needs a units attribute, either from the input field or
/// from [set_units()](Normalizer::set_units).
///
/// ```rust, no_run
/// # use ashtools_field::{read_field_json, Normalizer};
/// # use chrono::{TimeZone, Utc};
/// let field = read_field_json("path/to/deposit.json").unwrap();
/// let eruption = Utc.with_ymd_and_hms(2018, 8, 27, 12, 0, 0).unwrap();
///
/// let mut normalizer = Normalizer::new(0.01);
/// normalizer.set_units("mm");
/// normalizer.set_attribute("title", "Deposit thickness");
///
/// let result = normalizer.normalize(&field, eruption).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    /// Cells must be strictly above this to count as deposit
    threshold: f64,
    /// Override for the units attribute
    units: Option<String>,
    /// Additional or replacement text attributes
    attributes: BTreeMap<String, String>,
}

impl Normalizer {
    /// New normalizer with no attribute overrides
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    /// Setter for the units label on the result
    pub fn set_units<S: Into<String>>(&mut self, units: S) {
        self.units = Some(units.into());
    }

    /// Add or replace a text attribute on the result
    pub fn set_attribute<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Threshold used to decide which cells count as deposit
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Run every normalisation step on a copy of `field`
    pub fn normalize(&self, field: &Field, eruption_time: DateTime<Utc>) -> Result<Field> {
        if self.threshold.is_nan() {
            return Err(Error::InvalidThreshold(self.threshold));
        }

        // make sure the field is still sound before relying on the shape
        field.validate()?;

        let units = self
            .units
            .clone()
            .or_else(|| field.metadata.units.clone())
            .ok_or_else(|| Error::MissingAttribute("units".to_string()))?;

        // crop to the final deposit, or keep everything if there is none
        let mut result = match field.bounding_box(self.threshold) {
            Some(bounds) => {
                debug!("Cropping to {bounds}");
                field.crop(&bounds)?
            }
            None => {
                warn!(
                    "Nothing above {} in the final time step, keeping full extent",
                    self.threshold
                );
                field.clone()
            }
        };

        result.mask(self.threshold);
        result.prepend_empty_frame(eruption_time)?;

        result.metadata.eruption_time = Some(eruption_time);
        result.metadata.units = Some(units);
        result.metadata.attributes.extend(self.attributes.clone());

        debug!("Normalised field to {:?} (time, lat, lon)", result.shape());
        Ok(result)
    }
}
