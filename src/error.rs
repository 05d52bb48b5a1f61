use std::path::PathBuf;

/// Errors raised when a piece cannot be placed. Placement never mutates the
/// board when it fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("column {column} does not exist on the board (valid columns: 0..{columns})")]
    ColumnOutOfRange { column: isize, columns: usize },

    #[error("cannot place in column {column}: it is already full")]
    ColumnFull { column: usize },
}

/// Errors raised when building a piece→colour mapping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColourMapError {
    #[error("no colour given for piece {0}")]
    MissingPiece(String),

    #[error("piece {0} has more than one colour")]
    DuplicatePiece(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors raised when a menu is built from malformed options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("the options list must have at least 1 option")]
    NoOptions,

    #[error("bracket {start}..{end} of option '{label}' is outside the label")]
    BracketOutOfRange {
        label: String,
        start: usize,
        end: usize,
    },

    #[error("bracket of option '{label}' ends before it starts")]
    ReversedBracket { label: String },
}
