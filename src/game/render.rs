use crossterm::style::Stylize;
use serde::{Deserialize, Serialize};

use super::grid::GridState;
use super::piece::{PieceColours, PieceId};

/// Body of an empty cell. Occupied cells keep the same width.
pub const EMPTY_CELL: &str = "   ";

const RULE: &str = "───";

/// How an occupied cell body is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Three spaces on the piece's background colour.
    #[default]
    Colour,
    /// The piece glyph centred in three characters, no escape codes.
    Plain,
}

/// Render a grid as an ASCII-art box, highest row first.
///
/// ```text
/// │───│───│───│───│───│───│───|
/// │   │   │   │   │   │   │   │
/// │───│───│───│───│───│───│───│
/// ```
pub fn draw_board<P: PieceId>(
    grid: &GridState<P>,
    colours: &PieceColours<P>,
    style: RenderStyle,
) -> String {
    let columns = grid.columns();
    let mut out = String::new();

    // The header row closes with an ASCII bar, unlike every other line.
    out.push('│');
    for col in 0..columns {
        out.push_str(RULE);
        out.push(if col + 1 == columns { '|' } else { '│' });
    }
    out.push('\n');

    let separator = format!("│{}\n", format!("{RULE}│").repeat(columns));

    for row in (0..grid.rows()).rev() {
        out.push('│');
        for col in 0..columns {
            match grid.cell_at(col as isize, row as isize) {
                Some(piece) => out.push_str(&cell_body(piece, colours, style)),
                None => out.push_str(EMPTY_CELL),
            }
            out.push('│');
        }
        out.push('\n');
        out.push_str(&separator);
    }

    out
}

/// Body of an occupied cell.
pub fn cell_body<P: PieceId>(piece: P, colours: &PieceColours<P>, style: RenderStyle) -> String {
    match style {
        RenderStyle::Colour => EMPTY_CELL.on(colours.colour_of(piece)).to_string(),
        RenderStyle::Plain => format!(" {} ", piece.glyph()),
    }
}
