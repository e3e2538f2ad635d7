// src/lib.rs
//! Lifegrid
//!
//! A headless core for browser-style Conway's Game of Life toys: a bounded
//! binary grid, a pure edge-clamped step engine, and a run controller that
//! sequences stepping on an abstract repeating timer while arbitrating
//! direct user edits (toggle and drag-paint), grid density changes, and
//! tick-speed changes.
//!
//! The crate never renders. The embedding UI attaches a [`view::GridView`]
//! for redraw notifications and pumps [`control::RunController::poll`] from
//! its loop; everything runs synchronously on the caller's thread.

pub mod automaton;
pub mod config;
pub mod control;
pub mod error;
pub mod grid;
pub mod prelude;
pub mod view;

// Re-export main types for convenience
pub use control::RunController;
pub use error::GridError;
pub use grid::{Cell, GridState};

/// Creates an idle controller over a medium-density grid at medium speed
pub fn default() -> RunController {
    let (columns, rows) = config::Density::default().dimensions();
    RunController::new(columns, rows).expect("default density is positive")
}
