//! Result and Error types for ashtools-field

/// Type alias for `Result<T, field::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `ashtools-field` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to (de)serialise a JSON field
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Flattened values that do not fit the grid dimensions
    #[error("values do not fit the grid shape")]
    Shape(#[from] ndarray::ShapeError),

    /// A field needs at least one time step
    #[error("field has no time steps")]
    NoTimeSteps,

    /// Coordinate axis length does not match the grid
    #[error("{axis} axis has {found} values but the grid has {expected}")]
    AxisLengthMismatch {
        axis: &'static str,
        expected: usize,
        found: usize,
    },

    /// Crop region extends past the edge of the grid
    #[error("crop rows {rows:?} and columns {columns:?} outside of a {shape:?} grid")]
    CropOutOfBounds {
        rows: (usize, usize),
        columns: (usize, usize),
        shape: (usize, usize),
    },

    /// Metadata needed to build a result is not available
    #[error("required attribute \"{0}\" is missing")]
    MissingAttribute(String),

    /// Threshold that can not be compared against cell values
    #[error("threshold {0} is not a real number")]
    InvalidThreshold(f64),

    /// Time axis would not be strictly increasing
    #[error("time steps are not strictly increasing ({0})")]
    NonIncreasingTime(String),
}
