//! Result and Error types for ashtools-sites

/// Type alias for `Result<T, sites::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `ashtools-sites` crate
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    /// Key is not in the lookup table
    #[error("no source location for site \"{0}\"")]
    SiteNotFound(String),

    /// Unable to take a site key from the file name
    #[error("failed to infer site from \"{0}\"")]
    InvalidFilename(String),
}
