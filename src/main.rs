//! gomoku-rust: five-in-a-row on a 15x15 board.
//!
//! ## Usage
//!
//! - `gomoku-rust` - Watch a computer-vs-computer demo game
//! - `gomoku-rust play` - Play against the computer in the terminal
//! - `gomoku-rust protocol` - Drive the engine with text commands on stdin
//!
//! Set `RUST_LOG=debug` to see every placement on stderr.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku_rust::autoplay::{play_out, random_game};
use gomoku_rust::constants::{DEFAULT_COMPUTER_NAME, DEFAULT_HUMAN_NAME, DEFAULT_THINK_DELAY_MS, N};
use gomoku_rust::player::{HumanInput, Player, PlayerKind, RandomMover};
use gomoku_rust::protocol::ProtocolEngine;
use gomoku_rust::session::GameSession;
use gomoku_rust::stone::Stone;

/// gomoku-rust: place stones, make five in a row
#[derive(Parser)]
#[command(name = "gomoku-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play {
        /// Who sits at each side of the board
        #[arg(long, value_enum, default_value_t = Mode::HumanVsComputer)]
        mode: Mode,
        /// Name of the first player
        #[arg(long)]
        name1: Option<String>,
        /// Name of the second player
        #[arg(long)]
        name2: Option<String>,
        /// Stone color of the first player (blue, red, green, white)
        #[arg(long, default_value = "blue")]
        stone1: Stone,
        /// Stone color of the second player
        #[arg(long, default_value = "red")]
        stone2: Stone,
        /// Seed for the starting player and computer moves
        #[arg(long)]
        seed: Option<u64>,
        /// Pause before each computer move, in milliseconds
        #[arg(long, default_value_t = DEFAULT_THINK_DELAY_MS)]
        delay_ms: u64,
    },
    /// Speak the text command protocol on stdin/stdout
    Protocol {
        /// Seed for the starting player and generated moves
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print one computer-vs-computer game
    Demo {
        /// Seed for the whole game
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    HumanVsComputer,
    HumanVsHuman,
    ComputerVsComputer,
}

impl Mode {
    fn kinds(self) -> (PlayerKind, PlayerKind) {
        match self {
            Mode::HumanVsComputer => (PlayerKind::Human, PlayerKind::Automated),
            Mode::HumanVsHuman => (PlayerKind::Human, PlayerKind::Human),
            Mode::ComputerVsComputer => (PlayerKind::Automated, PlayerKind::Automated),
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the protocol.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            mode,
            name1,
            name2,
            stone1,
            stone2,
            seed,
            delay_ms,
        }) => {
            let (kind1, kind2) = mode.kinds();
            let p1 = Player::new(name1.unwrap_or_else(|| default_name(kind1, 1, mode)), stone1, kind1)?;
            let p2 = Player::new(name2.unwrap_or_else(|| default_name(kind2, 2, mode)), stone2, kind2)?;
            run_play(p1, p2, seed, Duration::from_millis(delay_ms))
        }
        Some(Commands::Protocol { seed }) => {
            let mut engine = match seed {
                Some(s) => ProtocolEngine::with_seed(s)?,
                None => ProtocolEngine::new()?,
            };
            engine.run(io::stdin().lock(), io::stdout().lock())
        }
        Some(Commands::Demo { seed }) => run_demo(seed),
        None => run_demo(None),
    }
}

/// Default names follow the player kind, numbered when both seats share one.
fn default_name(kind: PlayerKind, seat: usize, mode: Mode) -> String {
    let base = match kind {
        PlayerKind::Human => DEFAULT_HUMAN_NAME,
        PlayerKind::Automated => DEFAULT_COMPUTER_NAME,
    };
    if mode == Mode::HumanVsComputer {
        base.to_string()
    } else {
        format!("{base}{seat}")
    }
}

fn run_play(p1: Player, p2: Player, seed: Option<u64>, delay: Duration) -> Result<()> {
    let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    let mut session = GameSession::with_rng(p1, p2, &mut rng).context("invalid player setup")?;
    info!(?seed, "starting terminal game");

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", session.board())?;

    let mut human = HumanInput::new(io::stdin().lock(), io::stdout());
    let mut mover = RandomMover::with_seed(rng.u64(..));
    let status = play_out(&mut session, &mut human, &mut mover, delay, &mut stdout)?;
    info!(?status, "game finished");
    Ok(())
}

fn run_demo(seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    println!("gomoku-rust: computer vs computer (seed {seed})\n");

    let session = random_game(seed, N)?;
    println!("{}", session.board());
    println!("{}", session.headline());
    println!("Moves played: {}", session.moves_played());
    Ok(())
}
