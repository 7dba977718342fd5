//! `ashtools` is a small toolkit for preparing volcanic ashfall model output
//! for plotting
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use ashtools_utils as utils;

#[cfg(feature = "boundary")]
#[cfg_attr(docsrs, doc(cfg(feature = "boundary")))]
#[doc(inline)]
pub use ashtools_boundary as boundary;

#[cfg(feature = "field")]
#[cfg_attr(docsrs, doc(cfg(feature = "field")))]
#[doc(inline)]
pub use ashtools_field as field;

#[cfg(feature = "sites")]
#[cfg_attr(docsrs, doc(cfg(feature = "sites")))]
#[doc(inline)]
pub use ashtools_sites as sites;
