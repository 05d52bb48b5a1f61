//! Win detection over a grid snapshot.
//!
//! Every line family (rows, columns, both diagonal slopes) is a set of
//! straight walks across the grid. Each walk starts on the grid and steps by a
//! fixed vector until it leaves it; the cells it visits are then run-scanned.

use std::iter;

use super::grid::GridState;
use super::piece::PieceId;

/// The four line families, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Row,
    Column,
    /// Row decreases as column increases (`\`).
    FallingDiagonal,
    /// Row increases as column increases (`/`).
    RisingDiagonal,
}

impl LineKind {
    pub const ALL: [LineKind; 4] = [
        LineKind::Row,
        LineKind::Column,
        LineKind::FallingDiagonal,
        LineKind::RisingDiagonal,
    ];

    /// (column, row) step between consecutive cells of a line.
    pub fn step(self) -> (isize, isize) {
        match self {
            LineKind::Row => (1, 0),
            LineKind::Column => (0, 1),
            LineKind::FallingDiagonal => (1, -1),
            LineKind::RisingDiagonal => (1, 1),
        }
    }
}

/// A winning piece and the family its run was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win<P> {
    pub piece: P,
    pub kind: LineKind,
}

/// A maximal line across the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: (isize, isize),
    pub step: (isize, isize),
}

/// Longest contiguous run of `piece` in `cells`. Anything else, empty cells
/// included, breaks the run.
pub fn run_length<P: PartialEq>(cells: impl IntoIterator<Item = Option<P>>, piece: P) -> usize {
    let mut current = 0;
    let mut longest = 0;

    for cell in cells {
        if cell.as_ref() == Some(&piece) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }

    longest
}

/// Every maximal line of a family on a `columns` × `rows` grid, each starting
/// at its lowest-column endpoint.
pub fn lines(kind: LineKind, columns: usize, rows: usize) -> Vec<Line> {
    let step = kind.step();
    let (cols, rows) = (columns as isize, rows as isize);

    let starts: Vec<(isize, isize)> = match kind {
        LineKind::Row => (0..rows).map(|row| (0, row)).collect(),
        LineKind::Column => (0..cols).map(|col| (col, 0)).collect(),
        // One line per value of column + row.
        LineKind::FallingDiagonal => (0..=cols + rows - 2)
            .map(|sum| {
                let col = (sum - (rows - 1)).max(0);
                (col, sum - col)
            })
            .collect(),
        // One line per value of column - row.
        LineKind::RisingDiagonal => (-(rows - 1)..=cols - 1)
            .map(|diff| {
                let col = diff.max(0);
                (col, col - diff)
            })
            .collect(),
    };

    starts.into_iter().map(|start| Line { start, step }).collect()
}

/// Cells visited by `line`, in walk order.
pub fn walk<'a, P: PieceId>(
    grid: &'a GridState<P>,
    line: Line,
) -> impl Iterator<Item = Option<P>> + 'a {
    let (dc, dr) = line.step;
    iter::successors(Some(line.start), move |&(col, row)| Some((col + dc, row + dr)))
        .take_while(move |&(col, row)| grid.contains(col, row))
        .map(move |(col, row)| grid.cell_at(col, row))
}

/// Check whether `piece` has a run of at least `goal` along any line of a family.
pub fn has_run<P: PieceId>(grid: &GridState<P>, piece: P, kind: LineKind, goal: usize) -> bool {
    lines(kind, grid.columns(), grid.rows())
        .into_iter()
        .any(|line| run_length(walk(grid, line), piece) >= goal)
}

/// First piece, in the given order, with a qualifying run. For each piece the
/// families are checked in [`LineKind::ALL`] order and the scan stops at the
/// first hit, so the result depends on the piece order when more than one
/// piece could qualify.
pub fn find_win<P: PieceId>(
    grid: &GridState<P>,
    pieces: impl IntoIterator<Item = P>,
    goal: usize,
) -> Option<Win<P>> {
    pieces.into_iter().find_map(|piece| {
        LineKind::ALL
            .into_iter()
            .find(|&kind| has_run(grid, piece, kind, goal))
            .map(|kind| Win { piece, kind })
    })
}

pub fn winner<P: PieceId>(
    grid: &GridState<P>,
    pieces: impl IntoIterator<Item = P>,
    goal: usize,
) -> Option<P> {
    find_win(grid, pieces, goal).map(|win| win.piece)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Piece;

    fn grid_from(columns: &[&[Piece]]) -> GridState<Piece> {
        let mut grid = GridState::new(7, 6);
        for (col, stack) in columns.iter().enumerate() {
            for &piece in stack.iter() {
                grid.place(piece, col as isize).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_run_length_resets_on_gap_and_mismatch() {
        use Piece::{O, X};
        let cells = [Some(X), Some(X), None, Some(X), Some(X), Some(X), Some(O), Some(X)];
        assert_eq!(run_length(cells, X), 3);
        assert_eq!(run_length(cells, O), 1);
        assert_eq!(run_length(Vec::<Option<Piece>>::new(), X), 0);
    }

    #[test]
    fn test_line_counts() {
        assert_eq!(lines(LineKind::Row, 7, 6).len(), 6);
        assert_eq!(lines(LineKind::Column, 7, 6).len(), 7);
        assert_eq!(lines(LineKind::FallingDiagonal, 7, 6).len(), 12);
        assert_eq!(lines(LineKind::RisingDiagonal, 7, 6).len(), 12);
    }

    #[test]
    fn test_diagonals_cover_every_cell_once() {
        let grid: GridState<Piece> = GridState::new(7, 6);
        for kind in [LineKind::FallingDiagonal, LineKind::RisingDiagonal] {
            let visited: usize = lines(kind, 7, 6)
                .into_iter()
                .map(|line| walk(&grid, line).count())
                .sum();
            assert_eq!(visited, 42, "{kind:?}");
        }
    }

    #[test]
    fn test_diagonal_start_points() {
        let falling = lines(LineKind::FallingDiagonal, 7, 6);
        assert_eq!(falling[0].start, (0, 0));
        assert_eq!(falling[5].start, (0, 5));
        assert_eq!(falling[6].start, (1, 5));
        assert_eq!(falling[11].start, (6, 5));

        let rising = lines(LineKind::RisingDiagonal, 7, 6);
        assert_eq!(rising[0].start, (0, 5));
        assert_eq!(rising[5].start, (0, 0));
        assert_eq!(rising[6].start, (1, 0));
        assert_eq!(rising[11].start, (6, 0));
    }

    #[test]
    fn test_no_winner_on_empty_grid() {
        let grid: GridState<Piece> = GridState::new(7, 6);
        assert_eq!(winner(&grid, Piece::ALL.iter().copied(), 4), None);
    }

    #[test]
    fn test_row_win_reports_kind() {
        use Piece::X;
        let grid = grid_from(&[&[X], &[X], &[X], &[X]]);
        assert_eq!(
            find_win(&grid, [Piece::X, Piece::O], 4),
            Some(Win {
                piece: X,
                kind: LineKind::Row
            })
        );
    }

    #[test]
    fn test_column_win_above_other_pieces() {
        use Piece::{O, X};
        let grid = grid_from(&[&[O, O, X, X, X, X]]);
        assert_eq!(
            find_win(&grid, [X, O], 4),
            Some(Win {
                piece: X,
                kind: LineKind::Column
            })
        );
    }

    #[test]
    fn test_falling_diagonal_win() {
        use Piece::{O, X};
        // X at (0,3), (1,2), (2,1), (3,0)
        let grid = grid_from(&[&[O, O, O, X], &[O, O, X], &[O, X], &[X]]);
        assert_eq!(
            find_win(&grid, [X, O], 4),
            Some(Win {
                piece: X,
                kind: LineKind::FallingDiagonal
            })
        );
    }

    #[test]
    fn test_rising_diagonal_win() {
        use Piece::{O, X};
        // O at (3,0), (4,1), (5,2), (6,3)
        let grid = grid_from(&[&[], &[], &[], &[O], &[X, O], &[X, X, O], &[X, X, X, O]]);
        assert_eq!(
            find_win(&grid, [X, O], 4),
            Some(Win {
                piece: O,
                kind: LineKind::RisingDiagonal
            })
        );
    }

    #[test]
    fn test_three_is_not_enough() {
        use Piece::{O, X};
        let grid = grid_from(&[&[X, X, X], &[X], &[X], &[O]]);
        assert_eq!(winner(&grid, [X, O], 4), None);
    }

    #[test]
    fn test_piece_order_breaks_ties() {
        use Piece::{O, X};
        let grid = grid_from(&[&[X, X, X, X], &[O, O, O, O]]);
        assert_eq!(winner(&grid, [X, O], 4), Some(X));
        assert_eq!(winner(&grid, [O, X], 4), Some(O));
    }
}
