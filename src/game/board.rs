use tracing::debug;

use crate::config::BoardConfig;
use crate::error::{ConfigError, PlacementError};

use super::grid::GridState;
use super::piece::{Piece, PieceColours, PieceId};
use super::render::{self, RenderStyle};
use super::win::{self, Win};

/// The board engine: storage, win detection and rendering behind one surface.
///
/// The board performs no I/O and never calls back into the game loop. It also
/// does not detect draws: a full board with no winner is indistinguishable
/// from a game in progress, so callers check every column themselves.
#[derive(Debug, Clone)]
pub struct Board<P: PieceId = Piece> {
    config: BoardConfig,
    grid: GridState<P>,
    colours: PieceColours<P>,
    style: RenderStyle,
}

impl<P: PieceId> Board<P> {
    /// Create an empty 7×6 board where four in a row wins
    pub fn new(colours: PieceColours<P>) -> Self {
        let config = BoardConfig::default();
        Board {
            grid: GridState::new(config.columns, config.rows),
            config,
            colours,
            style: RenderStyle::default(),
        }
    }

    /// Create an empty board with custom dimensions
    pub fn with_config(config: BoardConfig, colours: PieceColours<P>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Board {
            grid: GridState::new(config.columns, config.rows),
            config,
            colours,
            style: RenderStyle::default(),
        })
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Read-only view of the cells
    pub fn grid(&self) -> &GridState<P> {
        &self.grid
    }

    /// Drop a piece in a column
    pub fn place(&mut self, piece: P, column: isize) -> Result<(), PlacementError> {
        self.grid.place(piece, column)?;
        debug!(?piece, column, "placed piece");
        Ok(())
    }

    pub fn is_column_full(&self, column: isize) -> bool {
        self.grid.is_column_full(column)
    }

    /// Winning piece and the kind of line it won on
    pub fn winning_line(&self) -> Option<Win<P>> {
        let found = win::find_win(&self.grid, self.colours.pieces(), self.config.goal);
        if let Some(win) = found {
            debug!(piece = ?win.piece, kind = ?win.kind, "run found");
        }
        found
    }

    pub fn winner(&self) -> Option<P> {
        self.winning_line().map(|win| win.piece)
    }

    /// A game is over once somebody has won
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    pub fn draw_board(&self) -> String {
        render::draw_board(&self.grid, &self.colours, self.style)
    }

    /// Empty the board for a new game
    pub fn reset(&mut self) {
        self.grid.reset();
        debug!("board reset");
    }
}
