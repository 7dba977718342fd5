//! JSON exchange format for fields
//!
//! The dispersion models write netCDF, which is read by an external loader
//! and handed over as a simple JSON document:
//!
//! ```json
//! {
//!   "times": ["2018-08-27T13:00:00Z", "2018-08-27T14:00:00Z"],
//!   "latitudes": [60.0, 60.5],
//!   "longitudes": [-153.0, -152.5],
//!   "values": [0.0, 0.0, 0.0, 1.2, 0.0, 0.0, 0.3, 2.4],
//!   "units": "mm",
//!   "eruption_time": "2018-08-27T12:00:00Z",
//!   "source": [61.3, -152.25],
//!   "attributes": {"model": "Ash3d"}
//! }
//! ```
//!
//! Values are flattened in (time, row, column) order with missing cells as
//! `null`. Everything after `values` is optional.

// crate modules
use crate::error::Result;
use crate::field::{Field, Metadata, MISSING};

// ashtools modules
use ashtools_utils::Coordinate;

// standard library
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

// external crates
use chrono::{DateTime, Utc};
use ndarray::Array3;
use serde::{Deserialize, Serialize};

/// On-disk layout of a [Field]
#[derive(Debug, Serialize, Deserialize)]
struct FieldRecord {
    times: Vec<DateTime<Utc>>,
    latitudes: Vec<f64>,
    longitudes: Vec<f64>,
    values: Vec<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    units: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    eruption_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
}

impl FieldRecord {
    /// Rebuild the grid and check it with [Field::new()]
    fn into_field(self) -> Result<Field> {
        let shape = (
            self.times.len(),
            self.latitudes.len(),
            self.longitudes.len(),
        );
        let values = self
            .values
            .into_iter()
            .map(|v| v.unwrap_or(MISSING))
            .collect();

        let metadata = Metadata {
            eruption_time: self.eruption_time,
            source: self.source.map(|[lat, lon]| Coordinate::new(lat, lon)),
            units: self.units,
            attributes: self.attributes,
        };

        Field::new(
            self.times,
            self.latitudes,
            self.longitudes,
            Array3::from_shape_vec(shape, values)?,
            metadata,
        )
    }

    /// Flatten a field, with missing cells as `None`
    fn from_field(field: &Field) -> Self {
        Self {
            times: field.times().to_vec(),
            latitudes: field.latitudes().to_vec(),
            longitudes: field.longitudes().to_vec(),
            values: field
                .values()
                .iter()
                .map(|v| (!v.is_nan()).then_some(*v))
                .collect(),
            units: field.metadata.units.clone(),
            eruption_time: field.metadata.eruption_time,
            source: field.metadata.source.map(|c| [c.latitude, c.longitude]),
            attributes: field.metadata.attributes.clone(),
        }
    }
}

/// Read a [Field] from a JSON file
///
/// The grid is checked against the axes exactly as in [Field::new()].
///
/// ```rust, no_run
/// # use ashtools_field::read_field_json;
/// let field = read_field_json("path/to/spurr_2018_deposit.json").unwrap();
/// println!("{field}");
/// ```
pub fn read_field_json<P: AsRef<Path>>(path: P) -> Result<Field> {
    let reader = BufReader::new(File::open(path)?);
    let record: FieldRecord = serde_json::from_reader(reader)?;
    record.into_field()
}

/// Write a [Field] to a JSON file
///
/// [MISSING] cells are written as `null`.
///
/// ```rust, no_run
/// # use ashtools_field::{read_field_json, write_field_json};
/// let field = read_field_json("path/to/deposit.json").unwrap();
/// write_field_json(&field, "path/to/copy.json").unwrap();
/// ```
pub fn write_field_json<P: AsRef<Path>>(field: &Field, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, &FieldRecord::from_field(field))?;
    writer.flush()?;
    Ok(())
}
