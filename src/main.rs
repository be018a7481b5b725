#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    init_logging, parse_move, replay::replay, CliHost, GameConfig, GameEngine, StartingPlayer,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a two-player game in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = StartingPlayer::X)]
        first: StartingPlayer,
        #[arg(long, help = "Fix RNG seed for reproducible random openings (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Apply a list of moves and print the outcome as JSON.
    Replay {
        #[arg(long, value_enum, default_value_t = StartingPlayer::X)]
        first: StartingPlayer,
        #[arg(long, help = "Fix RNG seed for reproducible random openings (e.g., --seed 12345)")]
        seed: Option<u64>,
        /// Moves as `row,col`, e.g. `1,1 2,2 1,2`.
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { first, seed } => {
            let config = GameConfig {
                starting_player: first,
                seed,
            };
            let mut host = CliHost::new(config);
            let stdin = std::io::stdin();
            let stats = host.run(stdin.lock(), std::io::stdout())?;
            log::info!(
                "session over: {} games, X {} / O {} / draws {}",
                stats.games_finished(),
                stats.x_wins,
                stats.o_wins,
                stats.draws
            );
        }
        Commands::Replay { first, seed, moves } => {
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let moves = moves
                .iter()
                .map(|m| parse_move(m).map_err(|e| anyhow::anyhow!("bad move {:?}: {}", m, e)))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let mut engine = GameEngine::with_starting_player(first.resolve(&mut rng));
            let report = replay(&mut engine, &moves);
            println!("{}", serde_json::to_string(&report)?);
        }
    }
    Ok(())
}
