//! Core Connect Four engine: column-stack storage, win detection over every
//! line family, and fixed-layout board rendering.

mod board;
mod grid;
mod piece;
pub mod render;
pub mod win;

pub use board::Board;
pub use grid::GridState;
pub use piece::{Piece, PieceColours, PieceId};
pub use render::RenderStyle;
pub use win::{LineKind, Win};
