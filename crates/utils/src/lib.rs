//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, checking a coordinate axis is ordered or finding the extent of
//! a set of longitudes is useful everywhere.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod coordinate;
mod error;
mod option_ext;
mod slice_ext;

// Flatten
pub use coordinate::Coordinate;
pub use error::{Error, Result};
pub use option_ext::OptionExt;
pub use slice_ext::SliceExt;
