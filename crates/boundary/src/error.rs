//! Result and Error types for ashtools-boundary

/// Type alias for `Result<T, boundary::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `ashtools-boundary` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// A coordinate line without two floating point values
    #[error("malformed boundary data on line {line}: \"{content}\"")]
    MalformedInput { line: usize, content: String },

    /// Not one of the f, h, i, l, c GMT resolutions
    #[error("unknown coastline resolution \"{0}\"")]
    UnknownResolution(String),

    /// Region bounds that can not describe an area on the globe
    #[error("invalid region {0}")]
    InvalidRegion(String),
}
