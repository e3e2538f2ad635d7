//! Grid state
//!
//! The authoritative cell storage for one Game of Life instance: a fixed
//! `columns x rows` rectangle of dead/alive cells in row-major order.

pub mod state;

pub use state::{Cell, GridState};
