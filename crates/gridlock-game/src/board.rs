//! Pure board state: a 3×3 grid of marks with win/draw detection.
//! No I/O, no concurrency — everything here is synchronous and owned.

use gridlock_protocol::{BOARD_SIZE, Cell, Grid, Mark};

/// A fixed-size grid of cells. Cells are write-once: a placed mark is
/// never overwritten, and the only mutation path is [`Board::place`].
#[derive(Debug, Clone, Default)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to place `mark` at (`row`, `col`).
    ///
    /// Returns `false` — leaving the board untouched — when the target
    /// is out of range or the cell is already occupied. The caller
    /// treats that as an invalid move, not an error.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return false;
        }
        if !self.cells[row][col].is_empty() {
            return false;
        }
        self.cells[row][col] = mark.into();
        true
    }

    /// Whether the move just placed at (`row`, `col`) completed a line.
    ///
    /// A move can only complete lines that pass through its own cell,
    /// so exactly four are checked: the column, the row, the main
    /// diagonal when `row == col`, and the anti-diagonal when the cell
    /// lies on it. A corner or center move can complete a diagonal, so
    /// none of the four may be skipped.
    pub fn is_win(&self, row: usize, col: usize, mark: Mark) -> bool {
        let m = Cell::from(mark);
        if (0..BOARD_SIZE).all(|r| self.cells[r][col] == m) {
            return true;
        }
        if (0..BOARD_SIZE).all(|c| self.cells[row][c] == m) {
            return true;
        }
        if row == col && (0..BOARD_SIZE).all(|i| self.cells[i][i] == m) {
            return true;
        }
        row + col == BOARD_SIZE - 1
            && (0..BOARD_SIZE).all(|i| self.cells[i][BOARD_SIZE - 1 - i] == m)
    }

    /// `true` once every cell is occupied. Call only after ruling out a
    /// win on the same move.
    pub fn is_draw(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// A copy of the grid, as sent in `gameState` fields.
    pub fn grid(&self) -> Grid {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_on_empty_cell_succeeds() {
        let mut board = Board::new();
        assert!(board.place(1, 2, Mark::X));
        assert_eq!(board.grid()[1][2], Cell::X);
    }

    #[test]
    fn test_place_on_occupied_cell_does_not_mutate() {
        let mut board = Board::new();
        assert!(board.place(0, 0, Mark::X));
        assert!(!board.place(0, 0, Mark::O));
        assert_eq!(board.grid()[0][0], Cell::X);
    }

    #[test]
    fn test_place_out_of_range_is_rejected() {
        let mut board = Board::new();
        assert!(!board.place(3, 0, Mark::X));
        assert!(!board.place(0, 3, Mark::X));
        assert!(!board.place(usize::MAX, usize::MAX, Mark::X));
        assert!(board.grid().iter().flatten().all(Cell::is_empty));
    }

    #[test]
    fn test_win_on_each_row() {
        for row in 0..BOARD_SIZE {
            let mut board = Board::new();
            for col in 0..BOARD_SIZE {
                board.place(row, col, Mark::X);
            }
            assert!(board.is_win(row, 1, Mark::X), "row {row}");
        }
    }

    #[test]
    fn test_win_on_each_column() {
        for col in 0..BOARD_SIZE {
            let mut board = Board::new();
            for row in 0..BOARD_SIZE {
                board.place(row, col, Mark::O);
            }
            assert!(board.is_win(1, col, Mark::O), "col {col}");
        }
    }

    #[test]
    fn test_win_on_main_diagonal() {
        let mut board = Board::new();
        for i in 0..BOARD_SIZE {
            board.place(i, i, Mark::X);
        }
        assert!(board.is_win(2, 2, Mark::X));
        // Center sits on both diagonals; either report works.
        assert!(board.is_win(1, 1, Mark::X));
    }

    #[test]
    fn test_win_on_anti_diagonal() {
        let mut board = Board::new();
        for i in 0..BOARD_SIZE {
            board.place(i, BOARD_SIZE - 1 - i, Mark::O);
        }
        assert!(board.is_win(0, 2, Mark::O));
        assert!(board.is_win(2, 0, Mark::O));
    }

    #[test]
    fn test_no_win_before_line_completes() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X);
        assert!(!board.is_win(0, 0, Mark::X));
        board.place(0, 1, Mark::X);
        assert!(!board.is_win(0, 1, Mark::X));
        board.place(0, 2, Mark::X);
        assert!(board.is_win(0, 2, Mark::X));
    }

    #[test]
    fn test_opponent_mark_does_not_count_toward_line() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X);
        board.place(0, 1, Mark::O);
        board.place(0, 2, Mark::X);
        assert!(!board.is_win(0, 2, Mark::X));
    }

    #[test]
    fn test_draw_only_when_board_full() {
        // X O X / X O X / O X O — no winning line anywhere.
        let fill = [
            (0, 0, Mark::X),
            (0, 1, Mark::O),
            (0, 2, Mark::X),
            (1, 0, Mark::X),
            (1, 1, Mark::O),
            (1, 2, Mark::X),
            (2, 0, Mark::O),
            (2, 1, Mark::X),
            (2, 2, Mark::O),
        ];
        let mut board = Board::new();
        for (i, &(row, col, mark)) in fill.iter().enumerate() {
            assert!(!board.is_draw(), "draw reported after {i} moves");
            assert!(board.place(row, col, mark));
            assert!(!board.is_win(row, col, mark));
        }
        assert!(board.is_draw());
    }
}
