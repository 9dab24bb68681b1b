use std::fmt;

use super::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Stones in an unbroken line needed to win.
pub const WIN_LENGTH: usize = 4;

/// Line directions as (row step, column step): vertical, horizontal, rising
/// diagonal, falling diagonal.
const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    /// The player whose stone occupies this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Player::A),
            Cell::PlayerB => Some(Player::B),
        }
    }
}

/// A 6x7 grid. Row 0 is the bottom row, so stones land at the lowest empty
/// row of their column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position.
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Number of stones stacked in a column.
    pub fn height(&self, col: usize) -> usize {
        (0..ROWS)
            .take_while(|&row| self.cells[row][col] != Cell::Empty)
            .count()
    }

    /// Row a stone dropped into `col` would land on, or `None` when the column
    /// is full or does not exist.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        let row = self.height(col);
        (row < ROWS).then_some(row)
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[ROWS - 1][col] != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::OutOfRange);
        }
        let row = self.landing_row(col).ok_or(MoveError::ColumnFull)?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Every column is a contiguous stack from row 0 upward.
    pub fn is_gravity_consistent(&self) -> bool {
        (0..COLS).all(|col| {
            let height = self.height(col);
            (height..ROWS).all(|row| self.cells[row][col] == Cell::Empty)
        })
    }

    /// Check if the stone at (row, col) is part of a line of four.
    ///
    /// Each axis is scanned end to end across the whole in-bounds line through
    /// the cell, so a run counts wherever it sits on that line.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        AXES.iter()
            .any(|&axis| self.line_has_run(row, col, axis, cell))
    }

    fn line_has_run(&self, row: usize, col: usize, (dr, dc): (isize, isize), cell: Cell) -> bool {
        // Back up to where the line enters the board.
        let (mut r, mut c) = (row as isize, col as isize);
        while Self::in_bounds(r - dr, c - dc) {
            r -= dr;
            c -= dc;
        }

        let mut run = 0;
        while Self::in_bounds(r, c) {
            if self.cells[r as usize][c as usize] == cell {
                run += 1;
                if run == WIN_LENGTH {
                    return true;
                }
            } else {
                run = 0;
            }
            r += dr;
            c += dc;
        }

        false
    }

    fn in_bounds(row: isize, col: isize) -> bool {
        (0..ROWS as isize).contains(&row) && (0..COLS as isize).contains(&col)
    }

    /// Render the board top row first, one line per row.
    pub fn render_with(&self, empty: char, player_a: char, player_b: char) -> String {
        let mut out = String::with_capacity((COLS * 2 + 1) * ROWS);
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                if col > 0 {
                    out.push(' ');
                }
                out.push(match self.cells[row][col] {
                    Cell::Empty => empty,
                    Cell::PlayerA => player_a,
                    Cell::PlayerB => player_b,
                });
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with('.', 'X', 'O'))
    }
}
