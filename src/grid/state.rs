//! Cell values and the authoritative grid
//!
//! `GridState` owns a flat row-major vector of cells over a bounded
//! rectangle. All access is bounds-checked; invalid requests are rejected
//! before any mutation, so a failed call leaves the grid untouched.

use crate::error::{GridError, Result};

/// A single cell: dead or alive.
///
/// The discriminants match the 0/1 values exchanged with input layers, so a
/// raw byte converts via [`Cell::try_from`] and back via [`Cell::as_u8`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Raw 0/1 value for this cell.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether this cell is alive.
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// The opposite state.
    pub fn toggled(self) -> Cell {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Cell> {
        match value {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            other => Err(GridError::InvalidValue(other)),
        }
    }
}

/// The authoritative cell array for one grid instance.
///
/// Dimensions are fixed for the lifetime of the instance; resizing means
/// building a fresh instance. Cells are stored row-major:
/// `index = row * columns + col`.
///
/// Cloning produces an independent snapshot, which is how the step engine
/// reads one generation while writing the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl GridState {
    /// Create an all-dead grid of the given dimensions.
    ///
    /// Both dimensions must be positive.
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(GridError::InvalidDimension);
        }
        Ok(Self {
            columns,
            rows,
            cells: vec![Cell::Dead; columns * rows],
        })
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `(columns, rows)` pair.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    /// Row-major index of a cell, checked against the current bounds.
    pub fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.columns {
            return Err(GridError::OutOfBounds { row, col });
        }
        Ok(row * self.columns + col)
    }

    /// Cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        Ok(self.cells[self.index_of(row, col)?])
    }

    /// Set the cell at `(row, col)`. No other cell is touched.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let index = self.index_of(row, col)?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Set from a raw 0/1 value, as received from an input layer.
    pub fn set_raw(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        // Validate the value before the position so neither check mutates.
        let cell = Cell::try_from(value)?;
        self.set(row, col, cell)
    }

    /// Flip the cell at `(row, col)` and return its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell> {
        let index = self.index_of(row, col)?;
        let next = self.cells[index].toggled();
        self.cells[index] = next;
        Ok(next)
    }

    /// Kill every cell. Dimensions are unchanged.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Number of alive cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Whether every cell is dead.
    pub fn is_empty(&self) -> bool {
        self.live_count() == 0
    }

    /// Row-major cell slice, for renderers that redraw the whole grid.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable cell slice for the step engine's output pass.
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}
