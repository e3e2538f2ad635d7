//! The run controller
//!
//! `RunController` owns the one authoritative [`GridState`], sequences the
//! step engine on its [`TickTimer`], and routes direct edits from the input
//! layer. All of it runs on the caller's thread: the host pumps
//! [`poll`](RunController::poll) from its loop and every transition is a
//! plain synchronous call.

use std::time::Duration;

use log::{debug, trace};

use crate::automaton;
use crate::config::{Density, Speed};
use crate::control::paint::PaintMode;
use crate::control::timer::{IntervalTimer, TickTimer, TimerHandle};
use crate::error::{GridError, Result};
use crate::grid::{Cell, GridState};
use crate::view::{GridView, NullView};

/// Owns a grid and runs the simulation over it.
///
/// The controller is either idle or running. While running, a repeating
/// timer schedule is held and each due tick advances one generation; while
/// idle, the grid only changes through explicit requests. `start`, `stop`,
/// and the manual `step` are idempotent in the direction that matters:
/// starting a running controller, stopping an idle one, and stepping a
/// running one are all no-ops.
pub struct RunController<V: GridView = NullView> {
    grid: GridState,
    view: V,
    timer: Box<dyn TickTimer>,
    tick_interval: Duration,
    handle: Option<TimerHandle>,
    generation: u64,
}

impl RunController<NullView> {
    /// Create an idle controller over a fresh all-dead grid, with a
    /// wall-clock timer and no view.
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        Ok(Self {
            grid: GridState::new(columns, rows)?,
            view: NullView,
            timer: Box::new(IntervalTimer::new()),
            tick_interval: Speed::default().tick_interval(),
            handle: None,
            generation: 0,
        })
    }
}

impl<V: GridView> RunController<V> {
    /// Attach a rendering collaborator, replacing the current one.
    pub fn with_view<W: GridView>(self, view: W) -> RunController<W> {
        RunController {
            grid: self.grid,
            view,
            timer: self.timer,
            tick_interval: self.tick_interval,
            handle: self.handle,
            generation: self.generation,
        }
    }

    /// Replace the tick source. Intended for tests and unusual hosts; the
    /// default wall-clock timer suits a polling loop.
    pub fn with_timer(mut self, timer: impl TickTimer + 'static) -> Self {
        self.timer = Box::new(timer);
        self
    }

    /// Set the tick period before starting, builder-style.
    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.tick_interval = speed.tick_interval();
        self
    }

    /// Whether the simulation is running.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// The authoritative grid.
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Generations advanced since the grid was last created or cleared.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current tick period.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// The attached view.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Begin running. No-op if already running.
    pub fn start(&mut self) {
        if self.handle.is_some() {
            debug!("start requested while already running");
            return;
        }
        self.handle = Some(self.timer.schedule(self.tick_interval));
        debug!("running at {:?} per tick", self.tick_interval);
    }

    /// Stop running. No-op if already idle. After this returns, no further
    /// tick can advance the grid until the next `start`.
    pub fn stop(&mut self) {
        match self.handle.take() {
            Some(handle) => {
                self.timer.cancel(handle);
                debug!("stopped at generation {}", self.generation);
            }
            None => debug!("stop requested while idle"),
        }
    }

    /// Advance one generation per tick that has come due. Hosts call this
    /// from their loop; it returns the number of generations applied (zero
    /// while idle or between ticks).
    pub fn poll(&mut self) -> u32 {
        let mut applied = 0;
        while let Some(handle) = self.handle {
            if !self.timer.due(handle) {
                break;
            }
            self.apply_step();
            applied += 1;
        }
        applied
    }

    /// Manually advance a single generation. Only permitted while idle;
    /// while running this is a no-op, mirroring UIs that disable the step
    /// button during simulation.
    pub fn step(&mut self) {
        if self.handle.is_some() {
            debug!("manual step ignored while running");
            return;
        }
        self.apply_step();
    }

    /// Stop if running, then kill every cell.
    pub fn clear(&mut self) {
        if self.is_running() {
            self.stop();
        }
        self.grid.clear();
        self.generation = 0;
        self.view.on_grid_replaced(&self.grid);
        debug!("grid cleared");
    }

    /// Change the tick period. Takes effect on the next tick: if running,
    /// the schedule is restarted so no old-period tick carries over.
    pub fn set_tick_interval(&mut self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(GridError::InvalidInterval);
        }
        self.tick_interval = interval;
        if let Some(handle) = self.handle.take() {
            self.timer.cancel(handle);
            self.handle = Some(self.timer.schedule(interval));
        }
        debug!("tick interval set to {:?}", interval);
        Ok(())
    }

    /// Set the tick period from a speed preset.
    pub fn set_speed(&mut self, speed: Speed) {
        // Preset intervals are positive, so this cannot fail.
        let _ = self.set_tick_interval(speed.tick_interval());
    }

    /// Stop and replace the grid with a fresh all-dead one of the given
    /// dimensions. On invalid dimensions nothing changes, not even the
    /// running state.
    pub fn resize(&mut self, columns: usize, rows: usize) -> Result<()> {
        let grid = GridState::new(columns, rows)?;
        if self.is_running() {
            self.stop();
        }
        self.grid = grid;
        self.generation = 0;
        self.view.on_grid_resized(columns, rows);
        debug!("grid resized to {columns}x{rows}");
        Ok(())
    }

    /// Resize from a density preset.
    pub fn set_density(&mut self, density: Density) {
        let (columns, rows) = density.dimensions();
        // Preset dimensions are positive, so this cannot fail.
        let _ = self.resize(columns, rows);
    }

    /// Flip one cell, returning its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell> {
        let index = self.grid.index_of(row, col)?;
        let cell = self.grid.toggle(row, col)?;
        self.view.on_cell_changed(index, cell);
        Ok(cell)
    }

    /// Write one cell with a paint mode's value. The write and the view
    /// notification happen even if the cell already held that value, so
    /// repeated paints over the same cell are idempotent in effect.
    pub fn paint(&mut self, row: usize, col: usize, mode: PaintMode) -> Result<()> {
        let index = self.grid.index_of(row, col)?;
        let cell = mode.cell();
        self.grid.set(row, col, cell)?;
        self.view.on_cell_changed(index, cell);
        Ok(())
    }

    fn apply_step(&mut self) {
        self.grid = automaton::step(&self.grid);
        self.generation += 1;
        trace!("advanced to generation {}", self.generation);
        self.view.on_grid_replaced(&self.grid);
    }
}
