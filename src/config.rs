//! Grid density and tick speed options
//!
//! The selector values a toy UI exposes, with this crate's default
//! mappings. The controller itself accepts arbitrary positive dimensions
//! and intervals; these enums just name the presets.

use std::time::Duration;

/// Grid density selector: how many cells fit in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Density {
    Small,
    #[default]
    Medium,
    Large,
}

impl Density {
    /// Default `(columns, rows)` for this density.
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            Density::Small => (24, 16),
            Density::Medium => (48, 32),
            Density::Large => (96, 64),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Density::Small => "small",
            Density::Medium => "medium",
            Density::Large => "large",
        }
    }
}

/// Simulation speed selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl Speed {
    /// Tick period for this speed.
    pub fn tick_interval(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(600),
            Speed::Medium => Duration::from_millis(300),
            Speed::Fast => Duration::from_millis(120),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Medium => "medium",
            Speed::Fast => "fast",
        }
    }
}
