//! Game configuration.
//!
//! The board is 6 rows by 7 columns unless a caller asks otherwise. The
//! number of pieces needed in a line is fixed at [`CONNECT`].

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default number of rows.
pub const DEFAULT_HEIGHT: usize = 6;

/// Default number of columns.
pub const DEFAULT_WIDTH: usize = 7;

/// Pieces in a row needed to win.
pub const CONNECT: usize = 4;

/// Largest accepted height or width.
pub const MAX_DIMENSION: usize = 255;

/// Board dimensions for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows (H).
    pub height: usize,

    /// Number of columns (W).
    pub width: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

impl GameConfig {
    /// Create a validated configuration.
    pub fn new(height: usize, width: usize) -> Result<Self, ConfigError> {
        Self { height, width }.validated()
    }

    /// Set the height (builder pattern). Call [`GameConfig::validated`] after.
    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Set the width (builder pattern). Call [`GameConfig::validated`] after.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Check both dimensions are in `1..=MAX_DIMENSION`.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let ok = |d: usize| (1..=MAX_DIMENSION).contains(&d);
        if ok(self.height) && ok(self.width) {
            Ok(self)
        } else {
            Err(ConfigError::InvalidDimensions {
                height: self.height,
                width: self.width,
            })
        }
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_six_by_seven() {
        let config = GameConfig::default();
        assert_eq!(config.height, 6);
        assert_eq!(config.width, 7);
        assert_eq!(config.cell_count(), 42);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default()
            .with_height(4)
            .with_width(5)
            .validated()
            .unwrap();
        assert_eq!(config, GameConfig::new(4, 5).unwrap());
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert_eq!(
            GameConfig::new(0, 7),
            Err(ConfigError::InvalidDimensions { height: 0, width: 7 })
        );
        assert!(GameConfig::new(6, 0).is_err());
        assert!(GameConfig::new(6, MAX_DIMENSION + 1).is_err());
        assert!(GameConfig::new(MAX_DIMENSION, 1).is_ok());
    }
}
