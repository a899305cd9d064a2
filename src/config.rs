use clap::Args;
use thiserror::Error;

use crate::controllers::interactive::errors::rules_engine::RulesEngineError;
use crate::core::data::board_geometry::BoardGeometry;
use crate::core::data::square::BOARD_DIMENSION;
use crate::engines::owlchess::OwlchessEngine;

pub const DEFAULT_BOARD_SIZE: u32 = 512;
pub const DEFAULT_UNDO_KEY: char = 'z';
/// Largest accepted board edge in pixels.
pub const MAX_BOARD_SIZE: u32 = 8192;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be a positive multiple of {dim} no larger than {max}, got {0}", dim = BOARD_DIMENSION, max = MAX_BOARD_SIZE)]
    BoardSize(u32),
    #[error("undo key must be a single ASCII letter, got {0:?}")]
    UndoKey(char),
}

/// Settings shared by the headless and windowed front ends.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ViewerConfig {
    /// Board edge length in pixels
    #[arg(long, env = "CHESSBOARD_BOARD_SIZE", default_value_t = DEFAULT_BOARD_SIZE)]
    pub board_size: u32,

    /// Starting position in FEN (defaults to the standard initial position)
    #[arg(long, env = "CHESSBOARD_FEN")]
    pub fen: Option<String>,

    /// Key that takes back the last move
    #[arg(long, env = "CHESSBOARD_UNDO_KEY", default_value_t = DEFAULT_UNDO_KEY)]
    pub undo_key: char,

    /// tracing filter directive, e.g. `debug` or `chessboard_viewer=trace`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            fen: None,
            undo_key: DEFAULT_UNDO_KEY,
            log_filter: "info".to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dim = BOARD_DIMENSION as u32;
        if self.board_size == 0 || self.board_size % dim != 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardSize(self.board_size));
        }

        if !self.undo_key.is_ascii_alphabetic() {
            return Err(ConfigError::UndoKey(self.undo_key));
        }

        Ok(())
    }

    #[must_use]
    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::from_board_size(self.board_size)
    }

    /// Case-insensitive match against the configured undo key.
    #[must_use]
    pub fn is_undo_key(&self, key: char) -> bool {
        key.eq_ignore_ascii_case(&self.undo_key)
    }

    pub fn build_engine(&self) -> Result<OwlchessEngine, RulesEngineError> {
        match &self.fen {
            Some(fen) => OwlchessEngine::from_fen(fen),
            None => Ok(OwlchessEngine::initial()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ViewerConfig,
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ViewerConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.geometry().cell_size(), 64);
    }

    #[test]
    fn test_board_size_must_divide_into_cells() {
        let zero = ViewerConfig { board_size: 0, ..ViewerConfig::default() };
        let ragged = ViewerConfig { board_size: 500, ..ViewerConfig::default() };

        assert_eq!(zero.validate(), Err(ConfigError::BoardSize(0)));
        assert_eq!(ragged.validate(), Err(ConfigError::BoardSize(500)));
    }

    #[test]
    fn test_board_size_has_an_upper_bound() {
        let largest = ViewerConfig { board_size: MAX_BOARD_SIZE, ..ViewerConfig::default() };
        let oversized = ViewerConfig { board_size: MAX_BOARD_SIZE + 8, ..ViewerConfig::default() };
        let huge = ViewerConfig { board_size: 2_147_483_640, ..ViewerConfig::default() };

        assert_eq!(largest.validate(), Ok(()));
        assert_eq!(oversized.validate(), Err(ConfigError::BoardSize(MAX_BOARD_SIZE + 8)));
        assert_eq!(huge.validate(), Err(ConfigError::BoardSize(2_147_483_640)));
    }

    #[test]
    fn test_undo_key_must_be_a_letter() {
        let config = ViewerConfig { undo_key: '1', ..ViewerConfig::default() };

        assert_eq!(config.validate(), Err(ConfigError::UndoKey('1')));
    }

    #[test]
    fn test_undo_key_matches_either_case() {
        let config = ViewerConfig::default();

        assert!(config.is_undo_key('z'));
        assert!(config.is_undo_key('Z'));
        assert!(!config.is_undo_key('x'));
    }

    #[test]
    fn test_cli_flags_override_defaults() {
        let cli = TestCli::try_parse_from([
            "viewer",
            "--board-size",
            "400",
            "--undo-key",
            "u",
            "--fen",
            "8/8/8/8/8/8/8/K6k w - - 0 1",
        ])
        .unwrap();

        assert_eq!(cli.config.board_size, 400);
        assert_eq!(cli.config.undo_key, 'u');
        assert_eq!(cli.config.geometry().cell_size(), 50);
        assert!(cli.config.build_engine().is_ok());
    }

    #[test]
    fn test_bad_fen_surfaces_engine_error() {
        let config = ViewerConfig {
            fen: Some("garbage".to_string()),
            ..ViewerConfig::default()
        };

        assert!(config.build_engine().is_err());
    }
}
