//! Headless driver (default binary).
//!
//! Bootstraps an engine, then plays on a simulated clock: each tick it may
//! issue one pseudo-random player command and then lets gravity act. The drop
//! interval is recomputed from the pieces-generated count after every spawn.

mod driver;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tetris_rules::core::{Engine, GameConfig};
use tetris_rules::types::{
    DEFAULT_ACCELERATION_RATE, DEFAULT_COLS, DEFAULT_DROPS_PER_SECOND, DEFAULT_ROWS,
    DEFAULT_SCORE_THRESHOLD,
};

use driver::Autoplay;

/// Play a seeded falling-block game without a display and print the result.
#[derive(Debug, Parser)]
#[command(name = "tetris-rules", version)]
struct Args {
    /// Grid rows, including the 4 hidden spawn rows.
    #[arg(long, default_value_t = DEFAULT_ROWS, value_name = "ROWS")]
    rows: u16,

    /// Grid columns.
    #[arg(long, default_value_t = DEFAULT_COLS, value_name = "COLS")]
    cols: u16,

    /// Score needed to win.
    #[arg(long, default_value_t = DEFAULT_SCORE_THRESHOLD, value_name = "N")]
    score_goal: u32,

    /// Base gravity in rows per second.
    #[arg(long, default_value_t = DEFAULT_DROPS_PER_SECOND, value_name = "N")]
    drops_per_second: u32,

    /// Add one drop/sec every N pieces (0 = constant speed).
    #[arg(
        long,
        default_value_t = DEFAULT_ACCELERATION_RATE,
        allow_hyphen_values = true,
        value_name = "N"
    )]
    acceleration_rate: i32,

    /// Seed for piece selection; the autoplayer uses the next seed up.
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Stop after this many gravity ticks even if the game is still running.
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig::default()
            .with_dimensions(self.rows, self.cols)
            .with_score_threshold(self.score_goal)
            .with_drops_per_second(self.drops_per_second)
            .with_acceleration_rate(self.acceleration_rate)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let engine = Engine::with_seed(args.game_config(), args.seed)
        .context("invalid game configuration")?;

    let mut autoplay = Autoplay::new(engine, args.seed.wrapping_add(1));
    let summary = autoplay.run(args.max_ticks);

    info!(
        ticks = summary.ticks,
        simulated_ms = summary.elapsed_ms,
        pieces = summary.pieces_generated,
        "session finished"
    );

    match autoplay.engine().final_message() {
        Some(message) => println!("{}", message),
        None => println!(
            "Stopped after {} ticks. Score was {} / {}.",
            summary.ticks,
            summary.score,
            autoplay.engine().threshold()
        ),
    }

    Ok(())
}
