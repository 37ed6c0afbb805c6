//! Catalog module: the fixed, ordered list of playable tracks.
//!
//! The catalog is built once at startup, either from the built-in entries or
//! from `[[catalog.tracks]]` in the config file. Track identity is the index.

mod model;

pub use model::*;
