//! Gridded ashfall deposit fields
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod bounds;
mod error;
mod field;
mod io;
mod normalize;

// Inline anything important for a nice public API
#[doc(inline)]
pub use field::{is_significant, Field, Metadata, MISSING};

#[doc(inline)]
pub use bounds::BoundingBox;

#[doc(inline)]
pub use normalize::{normalize, Normalizer};

#[doc(inline)]
pub use io::{read_field_json, write_field_json};

#[doc(inline)]
pub use error::{Error, Result};
