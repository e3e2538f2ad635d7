//! Run control
//!
//! Sequencing of the step engine on an abstract repeating timer, plus the
//! request surface that input layers call into: start/stop/step/clear,
//! density and speed changes, and direct cell edits.

pub mod controller;
pub mod paint;
pub mod timer;

pub use controller::RunController;
pub use paint::{PaintGesture, PaintMode};
pub use timer::{IntervalTimer, ManualTimer, TickTimer, TimerHandle};
