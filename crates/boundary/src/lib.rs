//! Reading and writing GMT boundary polylines
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod coast;
mod error;
mod parsers;
mod polylines;
mod reader;
mod writer;

// Inline anything important for a nice public API
#[doc(inline)]
pub use polylines::Polylines;

#[doc(inline)]
pub use reader::{parse_boundary, read_boundary, read_boundary_file};

#[doc(inline)]
pub use writer::{write_boundary, write_gmt, write_json};

#[doc(inline)]
pub use coast::{CoastlineRequest, Region, Resolution};

#[doc(inline)]
pub use error::{Error, Result};
