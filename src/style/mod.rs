//! Style codes and style state
//!
//! `registry` holds the fixed code table (colors and display names);
//! `state` holds the per-run combination of active codes.

pub mod registry;
mod state;

pub use registry::{
    entries, lookup, Category, Effect, Rgb, StyleCode, StyleEntry, UnknownCodeError,
    UnknownStyleName,
};
pub use state::{StyleSet, StyleState};
