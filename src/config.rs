use std::path::Path;

use crossterm::style::Color;
use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Piece, PieceColours, RenderStyle};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
    pub render: RenderConfig,
}

/// Largest accepted board side, in cells.
pub const MAX_DIMENSION: usize = 64;

/// Board dimensions and the run length needed to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: usize,
    pub rows: usize,
    pub goal: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            columns: 7,
            rows: 6,
            goal: 4,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::Validation(
                "board.columns must be >= 1".into(),
            ));
        }
        if self.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be >= 1".into()));
        }
        if self.columns > MAX_DIMENSION || self.rows > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.columns and board.rows must be <= {MAX_DIMENSION}"
            )));
        }
        if self.goal == 0 {
            return Err(ConfigError::Validation("board.goal must be >= 1".into()));
        }
        if self.goal > self.columns.max(self.rows) {
            return Err(ConfigError::Validation(
                "board.goal must fit on the board (<= max(columns, rows))".into(),
            ));
        }
        Ok(())
    }
}

/// Background colours for the two players' pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub x: Colour,
    pub o: Colour,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            x: Colour::Red,
            o: Colour::Yellow,
        }
    }
}

impl PlayersConfig {
    /// Colour map in turn order: X moves first and is checked first.
    pub fn piece_colours(&self) -> PieceColours<Piece> {
        PieceColours::classic_with(self.x.into(), self.o.into())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub style: RenderStyle,
}

/// Terminal colours a player can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl From<Colour> for Color {
    // The standard 8-colour palette (SGR 40-47).
    fn from(colour: Colour) -> Color {
        match colour {
            Colour::Black => Color::Black,
            Colour::Red => Color::DarkRed,
            Colour::Green => Color::DarkGreen,
            Colour::Yellow => Color::DarkYellow,
            Colour::Blue => Color::DarkBlue,
            Colour::Magenta => Color::DarkMagenta,
            Colour::Cyan => Color::DarkCyan,
            Colour::White => Color::Grey,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()?;

        if self.players.x == self.players.o {
            return Err(ConfigError::Validation(
                "players.x and players.o must use different colours".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
