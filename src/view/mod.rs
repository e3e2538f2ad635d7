//! Rendering collaborator interface
//!
//! The controller never draws anything. It reports grid changes through
//! [`GridView`] and the embedding UI redraws however it likes: DOM nodes,
//! terminal cells, a texture upload. Every method has a no-op default so a
//! view implements only the notifications it cares about.

use crate::grid::{Cell, GridState};

/// Receiver for grid-change notifications.
pub trait GridView {
    /// The grid was rebuilt with new dimensions (all cells dead).
    fn on_grid_resized(&mut self, _columns: usize, _rows: usize) {}

    /// A single cell changed. `index` is row-major.
    fn on_cell_changed(&mut self, _index: usize, _value: Cell) {}

    /// The whole grid was replaced (a step, or a clear).
    fn on_grid_replaced(&mut self, _grid: &GridState) {}
}

/// View that ignores every notification, for headless use and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl GridView for NullView {}
