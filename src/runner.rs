//! Match runner: plays one game between two agents with chess clocks.

use std::fmt;
use std::time::{Duration, Instant};

use log::{error, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::board::{Color, GameState, Move, Piece, Position, PositionError};

/// Points for giving check
pub const CHECK_POINTS: u32 = 2;

/// Settings for a single game
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct MatchConfig {
    /// Thinking time per side for the whole game
    pub clock: Duration,
    /// Plies played before the game is called
    pub max_plies: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            clock: Duration::from_secs(60),
            max_plies: 150,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn with_clock(mut self, clock: Duration) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = max_plies;
        self
    }
}

/// How a game ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    /// The loser's clock ran out
    Timeout { winner: Color },
    TurnLimit,
    /// An agent returned no move in an ongoing game
    NoMove { side: Color },
}

impl Outcome {
    #[must_use]
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } | Outcome::Timeout { winner } => Some(winner),
            Outcome::Stalemate | Outcome::TurnLimit | Outcome::NoMove { .. } => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "Checkmate! {winner} wins."),
            Outcome::Stalemate => write!(f, "Stalemate! It's a draw."),
            Outcome::Timeout { winner } => write!(f, "{winner} wins on time!"),
            Outcome::TurnLimit => write!(f, "Game ended due to turn limit."),
            Outcome::NoMove { side } => write!(f, "{side} had no move to play."),
        }
    }
}

/// Points earned per side, with the events that earned them
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    points: [u32; 2],
    events: [Vec<String>; 2],
}

impl Scoreboard {
    pub fn award(&mut self, color: Color, points: u32, event: String) {
        info!("{color}: {event}");
        self.points[color.index()] += points;
        self.events[color.index()].push(event);
    }

    #[must_use]
    pub fn points(&self, color: Color) -> u32 {
        self.points[color.index()]
    }

    #[must_use]
    pub fn events(&self, color: Color) -> &[String] {
        &self.events[color.index()]
    }
}

/// One played ply
#[derive(Clone, Copy, Debug)]
pub struct PlyRecord {
    /// 1-based ply number
    pub turn: u32,
    pub side: Color,
    pub mv: Move,
    pub gives_check: bool,
    pub elapsed: Duration,
    pub nodes: u64,
}

impl fmt::Display for PlyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (color, piece) = self.mv.piece_moved();
        write!(
            f,
            "Turn {}: <{}> moves {} from {} to {}",
            self.turn,
            self.side,
            piece.symbol(color),
            self.mv.from(),
            self.mv.to()
        )?;
        if let Some((c, victim)) = self.mv.piece_captured() {
            write!(f, " capturing {}", victim.symbol(c))?;
        }
        if self.gives_check {
            write!(f, " (Check!)")?;
        }
        Ok(())
    }
}

/// Everything that happened in a game
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub outcome: Outcome,
    pub plies: Vec<PlyRecord>,
    pub scoreboard: Scoreboard,
    pub final_position: Position,
    /// Time left on each clock, indexed by `Color::index`
    pub remaining: [Duration; 2],
}

impl GameRecord {
    #[must_use]
    pub fn remaining(&self, color: Color) -> Duration {
        self.remaining[color.index()]
    }
}

/// Play a full game from the initial position
pub fn play_game(
    white: &mut dyn Agent,
    black: &mut dyn Agent,
    config: &MatchConfig,
) -> Result<GameRecord, PositionError> {
    play_game_with(white, black, config, Position::new(), |_, _| {})
}

/// Play a game from `start`, calling `observer` after every ply.
///
/// Fails when `start`, or the position after any ply, does not hold exactly
/// one king per color.
pub fn play_game_with<F>(
    white: &mut dyn Agent,
    black: &mut dyn Agent,
    config: &MatchConfig,
    start: Position,
    mut observer: F,
) -> Result<GameRecord, PositionError>
where
    F: FnMut(&Position, &PlyRecord),
{
    let mut pos = start;
    check_kings(&pos)?;
    let mut remaining = [config.clock; 2];
    let mut scoreboard = Scoreboard::default();
    let mut plies = Vec::new();
    let mut outcome = None;

    info!(
        "starting game: {} (depth {}) vs {} (depth {})",
        white.name(),
        white.depth(),
        black.name(),
        black.depth()
    );

    for turn in 1..=config.max_plies {
        if pos.game_state().is_terminal() {
            break;
        }

        let side = pos.side_to_move();
        let agent: &mut dyn Agent = match side {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };

        let started = Instant::now();
        let choice = agent.select_move(&mut pos);
        let elapsed = started.elapsed();
        let nodes = agent.nodes_expanded();

        let clock = &mut remaining[side.index()];
        *clock = clock.saturating_sub(elapsed);
        if clock.is_zero() {
            outcome = Some(Outcome::Timeout {
                winner: side.opponent(),
            });
            break;
        }

        let Some(mv) = choice else {
            outcome = Some(Outcome::NoMove { side });
            break;
        };

        pos.make_move(mv);
        check_kings(&pos)?;
        if let Some((_, victim)) = mv.piece_captured() {
            scoreboard.award(
                side,
                victim.value().unsigned_abs(),
                format!("Captured {} (+{})", victim.to_char(), victim.value()),
            );
        }
        let gives_check = pos.is_in_check();
        if gives_check {
            scoreboard.award(side, CHECK_POINTS, format!("Gave Check (+{CHECK_POINTS})"));
        }

        let record = PlyRecord {
            turn,
            side,
            mv,
            gives_check,
            elapsed,
            nodes,
        };
        info!("{record} ({:.2}s, {nodes} nodes)", elapsed.as_secs_f64());
        observer(&pos, &record);
        plies.push(record);
    }

    let outcome = outcome.unwrap_or_else(|| match pos.game_state() {
        GameState::Checkmate => Outcome::Checkmate {
            winner: pos.side_to_move().opponent(),
        },
        GameState::Stalemate => Outcome::Stalemate,
        GameState::Ongoing => Outcome::TurnLimit,
    });

    if let Outcome::Checkmate { winner } = outcome {
        let points = Piece::King.value().unsigned_abs();
        scoreboard.award(winner, points, format!("Win by Checkmate (+{points})"));
    }
    info!("game over: {outcome}");

    Ok(GameRecord {
        white: white.name().to_string(),
        black: black.name().to_string(),
        outcome,
        plies,
        scoreboard,
        final_position: pos,
        remaining,
    })
}

fn check_kings(pos: &Position) -> Result<(), PositionError> {
    pos.validate().map_err(|err| {
        error!("aborting game: {err}");
        err
    })
}
