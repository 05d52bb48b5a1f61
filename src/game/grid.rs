use crate::error::PlacementError;

use super::piece::PieceId;

/// Column-stack storage for the board.
///
/// Cells live in one column-major buffer (`column * rows + row`, row 0 at the
/// bottom) with a separate height per column. A column's occupied cells are
/// always `0..height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState<P> {
    columns: usize,
    rows: usize,
    cells: Vec<Option<P>>,
    heights: Vec<usize>,
}

impl<P: PieceId> GridState<P> {
    /// Create a new empty grid
    pub fn new(columns: usize, rows: usize) -> Self {
        GridState {
            columns,
            rows,
            cells: vec![None; columns * rows],
            heights: vec![0; columns],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Check that a signed coordinate lies on the grid
    pub fn contains(&self, column: isize, row: isize) -> bool {
        column >= 0 && row >= 0 && (column as usize) < self.columns && (row as usize) < self.rows
    }

    /// Get the occupant of a cell, `None` if it is empty or off the grid
    pub fn cell_at(&self, column: isize, row: isize) -> Option<P> {
        if !self.contains(column, row) {
            return None;
        }
        self.cells[self.index(column as usize, row as usize)]
    }

    /// Number of pieces stacked in a column (0 for unknown columns)
    pub fn column_height(&self, column: usize) -> usize {
        self.heights.get(column).copied().unwrap_or(0)
    }

    /// Check if a column is full. Columns off the grid count as full.
    pub fn is_column_full(&self, column: isize) -> bool {
        match self.column_index(column) {
            Some(col) => self.heights[col] >= self.rows,
            None => true,
        }
    }

    /// Drop a piece on top of a column
    pub fn place(&mut self, piece: P, column: isize) -> Result<(), PlacementError> {
        let col = self
            .column_index(column)
            .ok_or(PlacementError::ColumnOutOfRange {
                column,
                columns: self.columns,
            })?;

        let height = self.heights[col];
        if height >= self.rows {
            return Err(PlacementError::ColumnFull { column: col });
        }

        let idx = self.index(col, height);
        self.cells[idx] = Some(piece);
        self.heights[col] = height + 1;
        Ok(())
    }

    /// Empty every column
    pub fn reset(&mut self) {
        self.cells.fill(None);
        self.heights.fill(0);
    }

    fn column_index(&self, column: isize) -> Option<usize> {
        usize::try_from(column).ok().filter(|&col| col < self.columns)
    }

    fn index(&self, column: usize, row: usize) -> usize {
        column * self.rows + row
    }
}
