#![cfg(feature = "std")]

//! Line-driven terminal host: reads player input, drives the engine and
//! writes the board and messages back.

use std::io::{BufRead, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    common::Player,
    config::{GameConfig, StartingPlayer},
    game::{GameEngine, GameStatus, InputOutcome},
    ui,
};

/// Tally of finished games in one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl SessionStats {
    pub fn games_finished(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Win(Player::X) => self.x_wins += 1,
            GameStatus::Win(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::Continue => {}
        }
    }
}

pub struct CliHost {
    engine: GameEngine,
    starting: StartingPlayer,
    rng: SmallRng,
    stats: SessionStats,
}

impl CliHost {
    pub fn new(config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        };
        let first = config.starting_player.resolve(&mut rng);
        Self {
            engine: GameEngine::with_starting_player(first),
            starting: config.starting_player,
            rng,
            stats: SessionStats::default(),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Run a session until `end` is typed after a game or the input is exhausted.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> anyhow::Result<SessionStats> {
        self.start_game(&mut out)?;
        for line in input.lines() {
            let line = line?;
            let line = line.trim();

            if self.engine.current_status().is_terminal() {
                match line {
                    "go" => {
                        let first = self.starting.resolve(&mut self.rng);
                        self.engine.reset_with(first);
                        self.start_game(&mut out)?;
                    }
                    "end" => break,
                    _ => writeln!(out, "{}", ui::POST_GAME)?,
                }
                continue;
            }

            match self.engine.submit_input(line) {
                Ok(InputOutcome::RowRecorded(_)) => write!(out, "{}", ui::COL_PROMPT)?,
                Ok(InputOutcome::Played(status)) => {
                    write!(out, "{}", ui::render_board(&self.engine.board_snapshot()))?;
                    writeln!(
                        out,
                        "{}",
                        ui::status_message(status, self.engine.current_player())
                    )?;
                    if status.is_terminal() {
                        self.stats.record(status);
                        writeln!(out, "{}", ui::POST_GAME)?;
                    } else {
                        write!(out, "{}", ui::ROW_PROMPT)?;
                    }
                }
                Err(e) => {
                    writeln!(out, "{}", ui::rejection_message(e))?;
                    write!(out, "{}", ui::ROW_PROMPT)?;
                }
            }
            out.flush()?;
        }
        out.flush()?;
        Ok(self.stats)
    }

    fn start_game<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        write!(out, "{}", ui::render_board(&self.engine.board_snapshot()))?;
        writeln!(out, "{}", ui::turn_message(self.engine.current_player()))?;
        write!(out, "{}", ui::ROW_PROMPT)?;
        out.flush()?;
        Ok(())
    }
}
