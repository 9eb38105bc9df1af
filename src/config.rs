use crate::error::{ConfigError, Result};
use crate::{DEFAULT_ROWS, DEFAULT_WIDTH};

/// Size of the board. `width` is in pixels and only matters for mapping
/// pointer positions; the search works on rows alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub rows: usize,
    pub width: u32,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            rows: DEFAULT_ROWS,
            width: DEFAULT_WIDTH,
        }
    }
}

impl GridConfig {
    pub fn new(rows: usize, width: u32) -> Result<GridConfig> {
        if rows == 0 {
            return Err(ConfigError::NoRows.into());
        }
        if (width as usize) < rows {
            return Err(ConfigError::TooNarrow { rows, width }.into());
        }
        Ok(GridConfig { rows, width })
    }

    /// Pixel size of one cell, rounded down.
    pub fn cell_size(&self) -> u32 {
        self.width / self.rows as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn default_matches_board() {
        let config = GridConfig::default();
        assert_eq!(config.rows, 50);
        assert_eq!(config.cell_size(), 20);
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert_eq!(
            GridConfig::new(0, 100),
            Err(Error::Config(ConfigError::NoRows))
        );
        assert_eq!(
            GridConfig::new(10, 5),
            Err(Error::Config(ConfigError::TooNarrow { rows: 10, width: 5 }))
        );
        assert!(GridConfig::new(10, 10).is_ok());
    }
}
