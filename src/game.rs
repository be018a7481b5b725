use crate::{
    board::{to_index, Board},
    common::{Cell, MoveError, Player},
    config::NUM_CELLS,
    input::parse_coordinate,
};

/// Outcome of evaluating the board for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Continue,
    Win(Player),
    Draw,
}

impl GameStatus {
    /// `true` for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Continue)
    }
}

/// `Ok` carries the status after an accepted move, `Err` the rejection reason.
pub type MoveResult = Result<GameStatus, MoveError>;

/// State-machine view of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// In progress, waiting for the row of the next move.
    AwaitingRow,
    /// In progress, a row has been entered and the column is pending.
    AwaitingCol { row: i32 },
    Won(Player),
    Drawn,
}

impl GamePhase {
    /// Collapses the two input sub-states into "a move is awaited".
    pub fn is_in_progress(self) -> bool {
        matches!(self, GamePhase::AwaitingRow | GamePhase::AwaitingCol { .. })
    }
}

/// Result of feeding one piece of text into the two-part input protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The row was stored; the column comes next. Nothing else changed.
    RowRecorded(i32),
    /// Both coordinates were in and the move was accepted.
    Played(GameStatus),
}

/// Core game logic: the board, whose turn it is, and pending move input.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    starting_player: Player,
    current: Player,
    last_mover: Option<Player>,
    pending_row: Option<i32>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Empty board, X to move.
    pub fn new() -> Self {
        Self::with_starting_player(Player::X)
    }

    /// Empty board with `starting` to move first.
    pub fn with_starting_player(starting: Player) -> Self {
        Self {
            board: Board::new(),
            starting_player: starting,
            current: starting,
            last_mover: None,
            pending_row: None,
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Row-major cell contents for rendering.
    pub fn board_snapshot(&self) -> [Cell; NUM_CELLS] {
        self.board.render()
    }

    /// Status of the board for `player` alone.
    fn status_for(&self, player: Player) -> GameStatus {
        if self.board.has_three_in_a_row(player) {
            GameStatus::Win(player)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::Continue
        }
    }

    /// Current status, evaluated for the player who made the most recent move
    /// and then for the opponent.
    pub fn current_status(&self) -> GameStatus {
        let Some(mover) = self.last_mover else {
            return GameStatus::Continue;
        };
        match self.status_for(mover) {
            GameStatus::Win(p) => GameStatus::Win(p),
            _ if self.board.has_three_in_a_row(mover.other()) => {
                GameStatus::Win(mover.other())
            }
            other => other,
        }
    }

    pub fn phase(&self) -> GamePhase {
        match self.current_status() {
            GameStatus::Win(p) => GamePhase::Won(p),
            GameStatus::Draw => GamePhase::Drawn,
            GameStatus::Continue => match self.pending_row {
                Some(row) => GamePhase::AwaitingCol { row },
                None => GamePhase::AwaitingRow,
            },
        }
    }

    /// Check a move for the current player without applying it.
    pub fn is_valid_move(&self, row: i32, col: i32) -> Result<(), MoveError> {
        if self.current_status().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if to_index(row, col).is_none() {
            return Err(MoveError::OutOfBounds);
        }
        if !self.board.is_empty(row, col) {
            return Err(MoveError::CellOccupied);
        }
        Ok(())
    }

    /// Play (`row`, `col`) for the current player.
    ///
    /// A rejected move leaves the engine untouched. An accepted move that does
    /// not end the game passes the turn to the opponent.
    pub fn submit_move(&mut self, row: i32, col: i32) -> MoveResult {
        if let Err(e) = self.is_valid_move(row, col) {
            log::debug!("rejected move ({}, {}) for {}: {}", row, col, self.current, e);
            return Err(e);
        }
        let mover = self.current;
        self.board.place(row, col, mover)?;
        self.last_mover = Some(mover);
        self.pending_row = None;

        let status = self.status_for(mover);
        match status {
            GameStatus::Continue => {
                self.current = mover.other();
                log::debug!("{} played ({}, {}), {} to move", mover, row, col, self.current);
            }
            GameStatus::Win(p) => {
                log::info!("player {} wins after {} moves", p, self.board.move_count())
            }
            GameStatus::Draw => log::info!("game drawn"),
        }
        Ok(status)
    }

    /// Feed one line of player input: the row first, then the column.
    ///
    /// A row on its own is only remembered. Any rejection, including an
    /// unparseable row or column, drops the pending row so the next input is
    /// a row again.
    pub fn submit_input(&mut self, input: &str) -> Result<InputOutcome, MoveError> {
        if self.current_status().is_terminal() {
            self.pending_row = None;
            return Err(MoveError::GameOver);
        }
        let value = match parse_coordinate(input) {
            Ok(v) => v,
            Err(e) => {
                self.pending_row = None;
                return Err(e);
            }
        };
        match self.pending_row.take() {
            None => {
                self.pending_row = Some(value);
                Ok(InputOutcome::RowRecorded(value))
            }
            Some(row) => self.submit_move(row, value).map(InputOutcome::Played),
        }
    }

    /// Start over with the same opening player.
    pub fn reset(&mut self) {
        self.reset_with(self.starting_player);
    }

    /// Start over with `starting` to move first.
    pub fn reset_with(&mut self, starting: Player) {
        self.board.clear();
        self.starting_player = starting;
        self.current = starting;
        self.last_mover = None;
        self.pending_row = None;
        log::info!("new game, {} to move", starting);
    }
}
