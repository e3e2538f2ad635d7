//! Drag-paint gestures
//!
//! A paint gesture spans one continuous pointer drag: the mode is chosen
//! once at pointer-down and applied to every cell the pointer crosses until
//! pointer-up, wherever that happens. Applying the same mode to a cell that
//! already holds it is harmless, so crossing a cell twice changes nothing.

use crate::control::RunController;
use crate::error::Result;
use crate::grid::Cell;
use crate::view::GridView;

/// What a gesture writes into the cells it crosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    /// Set cells alive.
    Draw,
    /// Set cells dead.
    Erase,
}

impl PaintMode {
    /// The cell value this mode writes.
    pub fn cell(self) -> Cell {
        match self {
            PaintMode::Draw => Cell::Alive,
            PaintMode::Erase => Cell::Dead,
        }
    }
}

/// Transient state of one drag-paint session.
///
/// How the input device picks the mode (mouse button, modifier key, tool
/// selection) is the caller's concern; this type only holds the choice for
/// the duration of the gesture.
#[derive(Debug, Default)]
pub struct PaintGesture {
    mode: Option<PaintMode>,
}

impl PaintGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a gesture at pointer-down. A gesture already in progress is
    /// replaced.
    pub fn begin(&mut self, mode: PaintMode) {
        self.mode = Some(mode);
    }

    /// End the gesture at pointer-up. Safe to call when no gesture is
    /// active.
    pub fn end(&mut self) {
        self.mode = None;
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.mode.is_some()
    }

    /// Apply the gesture's mode to the cell under the pointer.
    ///
    /// Does nothing when no gesture is active. An out-of-bounds position is
    /// reported to the caller but does not end the gesture; drags routinely
    /// leave the grid and come back.
    pub fn apply<V: GridView>(
        &self,
        controller: &mut RunController<V>,
        row: usize,
        col: usize,
    ) -> Result<()> {
        match self.mode {
            Some(mode) => controller.paint(row, col, mode),
            None => Ok(()),
        }
    }
}
