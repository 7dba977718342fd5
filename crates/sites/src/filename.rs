//! Naming convention for model output files

// crate modules
use crate::error::{Error, Result};

// standard library
use std::path::Path;

/// Site key from the name of a model output file
///
/// Files are expected to be named `<site>_<anything else>.<ext>`. The key is
/// the part of the file name before the first underscore, in lowercase. A
/// file with no underscore uses the whole file stem.
///
/// ```rust
/// # use ashtools_sites::site_key_from_path;
/// assert_eq!(site_key_from_path("/runs/Spurr_2018_deposit.nc").unwrap(), "spurr");
/// assert_eq!(site_key_from_path("redoubt.json").unwrap(), "redoubt");
///
/// // the key must be a plain alphanumeric name
/// assert!(site_key_from_path("/runs/_2018_deposit.nc").is_err());
/// ```
pub fn site_key_from_path<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    path.file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.split('_').next())
        .filter(|key| !key.is_empty() && key.chars().all(char::is_alphanumeric))
        .map(str::to_lowercase)
        .ok_or_else(|| Error::InvalidFilename(path.display().to_string()))
}
