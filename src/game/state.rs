use std::fmt;

use tracing::{debug, info};

use super::{Board, Cell, Player, COLS, ROWS};
use crate::error::MoveError;

/// Turn and outcome of a game. Exactly one holds at any time; only the two
/// `Awaiting*` values accept further moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Status {
    AwaitingPlayerA,
    AwaitingPlayerB,
    PlayerAWon,
    PlayerBWon,
    Draw,
}

impl Status {
    fn awaiting(player: Player) -> Self {
        match player {
            Player::A => Status::AwaitingPlayerA,
            Player::B => Status::AwaitingPlayerB,
        }
    }

    fn won_by(player: Player) -> Self {
        match player {
            Player::A => Status::PlayerAWon,
            Player::B => Status::PlayerBWon,
        }
    }

    /// Check if game is over
    pub fn is_terminal(self) -> bool {
        self.to_move().is_none()
    }

    /// Player whose turn it is, or `None` once the game is over.
    pub fn to_move(self) -> Option<Player> {
        match self {
            Status::AwaitingPlayerA => Some(Player::A),
            Status::AwaitingPlayerB => Some(Player::B),
            _ => None,
        }
    }

    /// Get the winning player, if any
    pub fn winner(self) -> Option<Player> {
        match self {
            Status::PlayerAWon => Some(Player::A),
            Status::PlayerBWon => Some(Player::B),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::AwaitingPlayerA => write!(f, "{} is next", Player::A.name()),
            Status::AwaitingPlayerB => write!(f, "{} is next", Player::B.name()),
            Status::PlayerAWon => write!(f, "Game over: {} has won", Player::A.name()),
            Status::PlayerBWon => write!(f, "Game over: {} has won", Player::B.name()),
            Status::Draw => f.write_str("Game ended in a draw"),
        }
    }
}

/// What a move that fills the last empty cell reports when it also completes
/// four in a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FullBoardPrecedence {
    /// The game is reported as a draw regardless of the final line.
    #[default]
    Draw,
    /// The win is reported.
    Win,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    pub full_board: FullBoardPrecedence,
}

/// A single game: board, status and stone count, changed only by accepted moves.
///
/// Checks run in a fixed order and a rejected move leaves the engine untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct GameEngine {
    board: Board,
    status: Status,
    moves: usize,
    last_move: Option<(usize, usize)>,
    rules: Rules,
}

impl GameEngine {
    /// Start a game under the default rules; Player A moves first.
    pub fn new_game() -> Self {
        Self::with_rules(Rules::default())
    }

    /// Start a game under the given rules
    pub fn with_rules(rules: Rules) -> Self {
        GameEngine {
            board: Board::new(),
            status: Status::AwaitingPlayerA,
            moves: 0,
            last_move: None,
            rules,
        }
    }

    /// Discard the current game and start over under the same rules.
    pub fn reset(&mut self) {
        *self = Self::with_rules(self.rules);
    }

    /// Get current status
    pub fn status(&self) -> Status {
        self.status
    }

    /// Get number of stones placed so far
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the rules this game is played under
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Get the cell at (row, col)
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`.
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.board.get(row, col)
    }

    /// Get the cell at (row, col), or `None` when off the board
    pub fn try_cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        (row < ROWS && col < COLS).then(|| self.board.get(row, col))
    }

    /// Get current player, or `None` once the game is over
    pub fn current_player(&self) -> Option<Player> {
        self.status.to_move()
    }

    /// Cell of the most recent accepted move as (row, col).
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Columns that would accept a stone right now.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's stone into `column`.
    pub fn attempt_move(&mut self, column: usize) -> Result<Status, MoveError> {
        self.try_place(column, None, None)
    }

    /// Like [`attempt_move`](Self::attempt_move), but rejects the move with
    /// [`MoveError::NotYourTurn`] when `player` is not the one to move.
    pub fn attempt_move_as(&mut self, column: usize, player: Player) -> Result<Status, MoveError> {
        self.try_place(column, None, Some(player))
    }

    /// Place a stone at a cell picked by the caller, e.g. from a touch
    /// position. Accepted only if `row` is where gravity would land the stone.
    pub fn attempt_drop_at(&mut self, row: usize, column: usize) -> Result<Status, MoveError> {
        if row >= ROWS {
            return self.reject(column, MoveError::OutOfRange);
        }
        self.try_place(column, Some(row), None)
    }

    fn try_place(
        &mut self,
        column: usize,
        row_hint: Option<usize>,
        claimed: Option<Player>,
    ) -> Result<Status, MoveError> {
        if column >= COLS {
            return self.reject(column, MoveError::OutOfRange);
        }
        let Some(player) = self.status.to_move() else {
            return self.reject(column, MoveError::GameOver);
        };
        if claimed.is_some_and(|claimed| claimed != player) {
            return self.reject(column, MoveError::NotYourTurn);
        }
        let Some(row) = self.board.landing_row(column) else {
            return self.reject(column, MoveError::ColumnFull);
        };
        if row_hint.is_some_and(|hint| hint != row) {
            return self.reject(column, MoveError::InvalidDrop);
        }

        let landed = self.board.drop_piece(column, player.to_cell())?;
        debug_assert_eq!(landed, row);
        self.moves += 1;
        self.last_move = Some((row, column));
        debug!(player = player.name(), row, column, moves = self.moves, "stone placed");

        let won = self.board.check_win(row, column);
        let full = self.moves == ROWS * COLS;
        self.status = match (won, full, self.rules.full_board) {
            (_, true, FullBoardPrecedence::Draw) | (false, true, _) => Status::Draw,
            (true, _, _) => Status::won_by(player),
            (false, false, _) => Status::awaiting(player.other()),
        };

        if self.status.is_terminal() {
            info!(status = %self.status, moves = self.moves, "game finished");
        }
        Ok(self.status)
    }

    fn reject(&self, column: usize, err: MoveError) -> Result<Status, MoveError> {
        debug!(column, status = ?self.status, error = %err, "move rejected");
        Err(err)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new_game()
    }
}
