//! Error types. The search itself has no error taxonomy: it finds a path or it
//! does not. These cover the observer's stop signal and the driver-facing API.

use crate::coord::Coord;
use thiserror::Error;

/// Returned by an observer to stop the running search. The search then reports
/// no path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("search cancelled by observer")]
pub struct Cancelled;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid needs at least one row")]
    NoRows,
    #[error("width {width} is too small for {rows} rows")]
    TooNarrow { rows: usize, width: u32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Coord),
    #[error("pointer position ({x}, {y}) is outside the board")]
    OffBoard { x: u32, y: u32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("edit error: {0}")]
    Edit(#[from] EditError),
}

pub type Result<T> = std::result::Result<T, Error>;
