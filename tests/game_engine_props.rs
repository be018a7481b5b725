use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::IndexedRandom, SeedableRng};
use tictactoe::{Cell, GameEngine, GameStatus, MoveError, Player, NUM_CELLS};

/// Empty cells as 1-indexed coordinates.
fn open_cells(engine: &GameEngine) -> Vec<(i32, i32)> {
    engine
        .board_snapshot()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Cell::Empty)
        .map(|(i, _)| ((i / 3) as i32 + 1, (i % 3) as i32 + 1))
        .collect()
}

/// Play up to `max_moves` random legal moves, stopping early if the game ends.
fn random_game(seed: u64, max_moves: usize) -> GameEngine {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    for _ in 0..max_moves {
        if engine.current_status().is_terminal() {
            break;
        }
        let cells = open_cells(&engine);
        let &(r, c) = cells.choose(&mut rng).unwrap();
        engine.submit_move(r, c).unwrap();
    }
    engine
}

fn off_board() -> impl Strategy<Value = i32> {
    prop_oneof![i32::MIN..1, 4..i32::MAX]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn out_of_bounds_never_changes_board(
        seed in any::<u64>(),
        moves in 0..9usize,
        bad in off_board(),
        good in 1..=3i32,
        bad_row in any::<bool>(),
    ) {
        let mut engine = random_game(seed, moves);
        let (r, c) = if bad_row { (bad, good) } else { (good, bad) };
        let before = engine.board_snapshot();
        let player = engine.current_player();
        let expected = if engine.current_status().is_terminal() {
            MoveError::GameOver
        } else {
            MoveError::OutOfBounds
        };
        prop_assert_eq!(engine.submit_move(r, c), Err(expected));
        prop_assert_eq!(engine.board_snapshot(), before);
        prop_assert_eq!(engine.current_player(), player);
    }

    #[test]
    fn occupied_cell_never_changes_board(
        seed in any::<u64>(),
        moves in 1..9usize,
        pick in any::<prop::sample::Index>(),
    ) {
        let mut engine = random_game(seed, moves);
        prop_assume!(!engine.current_status().is_terminal());
        let taken: Vec<usize> = engine
            .board_snapshot()
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell != Cell::Empty)
            .map(|(i, _)| i)
            .collect();
        let i = taken[pick.index(taken.len())];
        let before = engine.board_snapshot();
        prop_assert_eq!(
            engine.submit_move((i / 3) as i32 + 1, (i % 3) as i32 + 1),
            Err(MoveError::CellOccupied)
        );
        prop_assert_eq!(engine.board_snapshot(), before);
    }

    #[test]
    fn turns_alternate_until_the_end(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::new();
        let mut moves = 0;
        loop {
            let mover = engine.current_player();
            let cells = open_cells(&engine);
            let &(r, c) = cells.choose(&mut rng).unwrap();
            let status = engine.submit_move(r, c).unwrap();
            moves += 1;
            prop_assert_eq!(engine.board().cell(r, c), Some(mover.mark()));
            match status {
                GameStatus::Continue => {
                    prop_assert_eq!(engine.current_player(), mover.other());
                }
                GameStatus::Win(p) => {
                    prop_assert_eq!(p, mover);
                    prop_assert!(moves >= 5);
                    break;
                }
                GameStatus::Draw => {
                    prop_assert_eq!(moves, NUM_CELLS);
                    break;
                }
            }
        }
        prop_assert!(moves <= NUM_CELLS);
    }

    #[test]
    fn finished_games_have_one_outcome(seed in any::<u64>()) {
        let mut engine = random_game(seed, NUM_CELLS);
        let status = engine.current_status();
        prop_assert!(status.is_terminal());
        let x_line = engine.board().has_three_in_a_row(Player::X);
        let o_line = engine.board().has_three_in_a_row(Player::O);
        prop_assert!(!(x_line && o_line));
        match status {
            GameStatus::Win(Player::X) => {
                prop_assert!(x_line);
            }
            GameStatus::Win(Player::O) => {
                prop_assert!(o_line);
            }
            GameStatus::Draw => {
                prop_assert!(engine.board().is_full() && !x_line && !o_line);
            }
            GameStatus::Continue => unreachable!(),
        }
        for r in 1..=3 {
            for c in 1..=3 {
                prop_assert_eq!(engine.submit_move(r, c), Err(MoveError::GameOver));
            }
        }
        engine.reset();
        prop_assert_eq!(engine.current_status(), GameStatus::Continue);
        prop_assert_eq!(engine.current_player(), Player::X);
        prop_assert_eq!(engine.board_snapshot(), [Cell::Empty; NUM_CELLS]);
    }

    #[test]
    fn row_only_input_changes_nothing(seed in any::<u64>(), moves in 0..9usize, row in -5..8i32) {
        let mut engine = random_game(seed, moves);
        prop_assume!(!engine.current_status().is_terminal());
        let before = engine.board_snapshot();
        let player = engine.current_player();
        engine.submit_input(&row.to_string()).unwrap();
        prop_assert_eq!(engine.board_snapshot(), before);
        prop_assert_eq!(engine.current_player(), player);
        prop_assert_eq!(engine.current_status(), GameStatus::Continue);
    }

    #[test]
    fn queries_are_stable(seed in any::<u64>(), moves in 0..9usize) {
        let engine = random_game(seed, moves);
        prop_assert_eq!(engine.current_status(), engine.current_status());
        prop_assert_eq!(engine.board_snapshot(), engine.board_snapshot());
        let marked = engine.board_snapshot().iter().filter(|c| **c != Cell::Empty).count();
        prop_assert_eq!(engine.board().move_count(), marked);
    }
}
