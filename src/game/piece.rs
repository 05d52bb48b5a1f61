use std::fmt;

use crossterm::style::Color;

use crate::error::ColourMapError;

/// Identity of a player's marker.
///
/// The set of pieces is closed: `ALL` lists every value the type can take, so
/// a colour mapping can be checked for totality when it is built. The board
/// never assumes there are exactly two pieces.
pub trait PieceId: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];

    /// Single character used by the plain renderer.
    fn glyph(self) -> char;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    X,
    O,
}

impl Piece {
    /// Get the other piece
    pub fn other(self) -> Piece {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
        }
    }

    /// Get piece name for display
    pub fn name(self) -> &'static str {
        match self {
            Piece::X => "X",
            Piece::O => "O",
        }
    }
}

impl PieceId for Piece {
    const ALL: &'static [Piece] = &[Piece::X, Piece::O];

    fn glyph(self) -> char {
        match self {
            Piece::X => 'X',
            Piece::O => 'O',
        }
    }
}

/// Ordered, total mapping from every piece to its display colour.
///
/// The order entries were supplied in is the order pieces are checked for a
/// win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceColours<P> {
    entries: Vec<(P, Color)>,
}

impl<P: PieceId> PieceColours<P> {
    pub fn new(entries: impl IntoIterator<Item = (P, Color)>) -> Result<Self, ColourMapError> {
        let entries: Vec<(P, Color)> = entries.into_iter().collect();

        for (i, (piece, _)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(seen, _)| seen == piece) {
                return Err(ColourMapError::DuplicatePiece(format!("{piece:?}")));
            }
        }

        if let Some(missing) = P::ALL
            .iter()
            .find(|piece| !entries.iter().any(|(p, _)| p == *piece))
        {
            return Err(ColourMapError::MissingPiece(format!("{missing:?}")));
        }

        Ok(PieceColours { entries })
    }

    /// Colour of `piece`. Every piece has an entry once construction succeeded.
    pub fn colour_of(&self, piece: P) -> Color {
        self.entries
            .iter()
            .find(|(p, _)| *p == piece)
            .map(|(_, colour)| *colour)
            .unwrap_or(Color::Reset)
    }

    /// Pieces in enumeration order.
    pub fn pieces(&self) -> impl Iterator<Item = P> + '_ {
        self.entries.iter().map(|(piece, _)| *piece)
    }
}

impl PieceColours<Piece> {
    /// Red for X, yellow for O.
    pub fn classic() -> Self {
        Self::classic_with(Color::DarkRed, Color::DarkYellow)
    }

    /// X first, then O.
    pub fn classic_with(x: Color, o: Color) -> Self {
        PieceColours {
            entries: vec![(Piece::X, x), (Piece::O, o)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_piece() {
        assert_eq!(Piece::X.other(), Piece::O);
        assert_eq!(Piece::O.other(), Piece::X);
    }

    #[test]
    fn test_piece_name() {
        assert_eq!(Piece::X.name(), "X");
        assert_eq!(Piece::O.name(), "O");
    }

    fn glyphs<P: PieceId>() -> String {
        P::ALL.iter().map(|&piece| piece.glyph()).collect()
    }

    #[test]
    fn test_all_pieces_through_generic_bound() {
        assert_eq!(Piece::ALL, &[Piece::X, Piece::O]);
        assert_eq!(glyphs::<Piece>(), "XO");
    }

    #[test]
    fn test_colours_keep_caller_order() {
        let colours =
            PieceColours::new([(Piece::O, Color::Blue), (Piece::X, Color::Green)]).unwrap();
        assert_eq!(colours.pieces().collect::<Vec<_>>(), vec![Piece::O, Piece::X]);
        assert_eq!(colours.colour_of(Piece::X), Color::Green);
        assert_eq!(colours.colour_of(Piece::O), Color::Blue);
    }

    #[test]
    fn test_colours_reject_missing_piece() {
        let err = PieceColours::new([(Piece::X, Color::Red)]).unwrap_err();
        assert_eq!(err, ColourMapError::MissingPiece("O".to_string()));
    }

    #[test]
    fn test_colours_reject_duplicate_piece() {
        let err = PieceColours::new([
            (Piece::X, Color::Red),
            (Piece::O, Color::Yellow),
            (Piece::X, Color::Blue),
        ])
        .unwrap_err();
        assert_eq!(err, ColourMapError::DuplicatePiece("X".to_string()));
    }

    #[test]
    fn test_classic_colours_cover_both_pieces() {
        let colours = PieceColours::classic();
        assert_eq!(colours.colour_of(Piece::X), Color::DarkRed);
        assert_eq!(colours.colour_of(Piece::O), Color::DarkYellow);
    }
}
