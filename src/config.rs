use crate::common::Player;
use rand::Rng;

pub const BOARD_SIZE: usize = 3;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

pub const NUM_LINES: usize = 8;

/// The winning lines as 0-indexed `(row, col)` triples.
pub const LINES: [[(usize, usize); BOARD_SIZE]; NUM_LINES] = [
    // rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Who opens a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum StartingPlayer {
    #[default]
    X,
    O,
    /// Coin flip at the start of every game.
    Random,
}

impl StartingPlayer {
    /// Pick the concrete opening player, flipping a coin for `Random`.
    pub fn resolve<R: Rng>(self, rng: &mut R) -> Player {
        match self {
            StartingPlayer::X => Player::X,
            StartingPlayer::O => Player::O,
            StartingPlayer::Random => {
                if rng.random::<bool>() {
                    Player::X
                } else {
                    Player::O
                }
            }
        }
    }
}

/// Session settings chosen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub starting_player: StartingPlayer,
    /// Fixed RNG seed for reproducible `Random` openings.
    pub seed: Option<u64>,
}
