//! # Lifegrid Prelude
//!
//! Convenient single import for the types a typical embedding needs:
//!
//! ```rust
//! use lifegrid::prelude::*;
//!
//! let mut controller = lifegrid::default();
//! controller.toggle(1, 1).unwrap();
//! controller.step();
//! // A lone cell starves.
//! assert_eq!(controller.grid().get(1, 1).unwrap(), Cell::Dead);
//! ```

// Re-export core state and stepping
pub use crate::automaton::step;
pub use crate::grid::{Cell, GridState};

// Re-export the control surface
pub use crate::control::{PaintGesture, PaintMode, RunController};
pub use crate::control::{IntervalTimer, ManualTimer, TickTimer, TimerHandle};

// Re-export configuration and errors
pub use crate::config::{Density, Speed};
pub use crate::error::GridError;

// Re-export the rendering seam
pub use crate::view::{GridView, NullView};

// Re-export common standard library types
pub use std::time::Duration;
