//! Volcano source locations
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod filename;
mod table;

// Inline anything important for a nice public API
#[doc(inline)]
pub use table::SiteTable;

#[doc(inline)]
pub use filename::site_key_from_path;

#[doc(inline)]
pub use error::{Error, Result};
