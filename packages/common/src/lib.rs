//! Shared policy and formatting modules
//!
//! The markup and style compilers walk the tree independently, so every
//! decision they must agree on lives here: node classification, selector
//! derivation, and length/color formatting.

pub mod classify;
pub mod color;
pub mod selector;
pub mod units;

use std::collections::HashMap;

/// Mapping from node id to a resolved raster-image URL, supplied by the
/// external image-resolution step. Nodes without an entry fall back to
/// non-image rendering.
pub type ImageMap = HashMap<String, String>;
