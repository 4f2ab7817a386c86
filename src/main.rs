use std::error::Error;
use std::time::Duration;

use clap::Parser;

use mini_chess::agent::{Agent, AgentKind};
use mini_chess::board::{Color, Position, DEFAULT_DEPTH};
use mini_chess::runner::{play_game_with, GameRecord, MatchConfig};

/// Play a game of 4x8 mini chess between two agents.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// White player: search, negamax or random
    #[arg(default_value = "search")]
    white: AgentKind,

    /// Black player: search, negamax or random
    #[arg(default_value = "random")]
    black: AgentKind,

    /// Search depth for searching agents
    #[arg(default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Clock per side in seconds
    #[arg(default_value_t = 60)]
    seconds: u64,

    /// Time budget per move in seconds for the search agent
    #[arg(long)]
    move_time: Option<f64>,

    /// Plies before the game is called
    #[arg(long, default_value_t = 150)]
    max_plies: u32,

    /// Seed for random agents
    #[arg(long)]
    seed: Option<u64>,

    /// Only print the summary
    #[arg(long, short)]
    quiet: bool,
}

fn format_clock(time: Duration) -> String {
    let secs = time.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn print_summary(record: &GameRecord) {
    println!("\n{} GAME OVER {}", "=".repeat(15), "=".repeat(15));
    println!("\n{}", record.outcome);
    println!("\nPoints Summary:");
    for (color, name) in [(Color::White, &record.white), (Color::Black, &record.black)] {
        println!("{color} ({name}):");
        for event in record.scoreboard.events(color) {
            println!("  - {event}");
        }
        println!("  Total: {}", record.scoreboard.points(color));
        println!("  Clock: {}", format_clock(record.remaining(color)));
    }
}

fn run(cli: &Cli) -> Result<GameRecord, Box<dyn Error>> {
    if cli.depth == 0 {
        return Err("depth must be at least 1".into());
    }
    let move_time = match cli.move_time {
        Some(secs) if secs.is_finite() && secs > 0.0 => Some(Duration::from_secs_f64(secs)),
        Some(secs) => return Err(format!("invalid move time {secs}").into()),
        None => None,
    };

    let mut white: Box<dyn Agent> = cli.white.build(cli.depth, move_time, cli.seed);
    let mut black: Box<dyn Agent> =
        cli.black
            .build(cli.depth, move_time, cli.seed.map(|s| s.wrapping_add(1)));
    let config = MatchConfig::default()
        .with_clock(Duration::from_secs(cli.seconds))
        .with_max_plies(cli.max_plies);

    println!("{}", "-".repeat(50));
    println!(
        "Starting Blitz Game: {} (Depth {}) vs {} (Depth {})",
        white.name(),
        white.depth(),
        black.name(),
        black.depth()
    );
    println!("{}", "-".repeat(50));

    let start = Position::new();
    if !cli.quiet {
        println!("{start}");
    }

    let quiet = cli.quiet;
    let record = play_game_with(&mut *white, &mut *black, &config, start, |pos, ply| {
        if !quiet {
            println!("\n{}", "-".repeat(20));
            println!("{ply}");
            println!(
                "Time: {:.2}s | Nodes: {}",
                ply.elapsed.as_secs_f64(),
                ply.nodes
            );
            println!("{pos}");
        }
    })?;
    Ok(record)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let record = run(&cli)?;
    print_summary(&record);
    Ok(())
}
