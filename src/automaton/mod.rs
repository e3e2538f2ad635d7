//! Step engine
//!
//! The pure next-generation function for Conway's rules over a bounded,
//! edge-clamped grid.

pub mod step;

pub use step::{life_rule, step};
