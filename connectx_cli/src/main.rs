mod config;
mod console;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use connectx::{Game, StorageKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Overrides;
use crate::console::Console;

#[derive(Parser)]
struct Args {
    /// Path to a JSON file with the game configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of rows of the board
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns of the board
    #[arg(long)]
    columns: Option<usize>,

    /// How many tokens in a row are needed to win
    #[arg(short, long)]
    win_length: Option<usize>,

    /// Number of players
    #[arg(short, long)]
    players: Option<usize>,

    /// How the board is stored
    #[arg(long, value_enum)]
    storage: Option<Storage>,

    /// Pick the player who starts each round randomly
    #[arg(short, long, default_value_t = false)]
    random_first_player: bool,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, ValueEnum)]
enum Storage {
    /// Store every cell, fast for small boards
    Dense,
    /// Only store placed tokens, for huge boards
    Sparse,
}

impl From<Storage> for StorageKind {
    fn from(storage: Storage) -> Self {
        match storage {
            Storage::Dense => StorageKind::Dense,
            Storage::Sparse => StorageKind::Sparse,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let overrides = Overrides {
        rows: args.rows,
        columns: args.columns,
        win_length: args.win_length,
        players: args.players,
        storage: args.storage.map(StorageKind::from),
    };
    let game_config = config::resolve(args.config.as_deref(), overrides)?;
    info!(?game_config);

    let mut rng = if args.random_first_player {
        // Get a random seed
        let seed = args.seed.unwrap_or_else(rand::random);
        info!(seed);
        Some(StdRng::seed_from_u64(seed))
    } else {
        None
    };

    let mut game = match rng.as_mut() {
        Some(rng) => {
            let first_player_idx = game_config.random_first_player(rng);
            Game::with_first_player(&game_config, first_player_idx)?
        }
        None => Game::new(&game_config)?,
    };

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    Console::new(stdin, stdout).run(&mut game, rng.as_mut())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // Stdout belongs to the game
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
