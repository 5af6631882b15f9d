//! Textual game descriptions.
//!
//! A description is a stream of whitespace-separated integers:
//!
//! ```text
//! flag                      1 = run elimination, anything else = report as is
//! n                         number of players
//! k_1 .. k_n                actions per player
//! payoffs                   (k_1 * .. * k_{n-1}) rows of n * k_n values
//! ```
//!
//! Line breaks carry no meaning; rows may be split or joined freely.

use std::fs;
use std::path::Path;

use crate::iesds::{EliminationConfig, GameMatrix, IesdsError, Payoff};

/// A parsed game description.
#[derive(Debug, Clone, PartialEq)]
pub struct GameInput {
    /// Whether elimination should run (`false` reports the game unchanged).
    pub eliminate: bool,
    /// The game itself.
    pub matrix: GameMatrix,
}

impl GameInput {
    /// `config` with its skip flag taken from this description.
    pub fn apply_to(&self, config: EliminationConfig) -> EliminationConfig {
        config.with_skip(!self.eliminate)
    }
}

/// Read an integer token, naming `what` in the error.
fn parse_int<'a>(
    tokens: &mut impl Iterator<Item = (usize, &'a str)>,
    what: &str,
) -> Result<i64, IesdsError> {
    let (index, token) = tokens
        .next()
        .ok_or_else(|| IesdsError::Parse(format!("unexpected end of input, expected {}", what)))?;
    token.parse().map_err(|_| {
        IesdsError::Parse(format!(
            "token {} ({:?}) is not an integer, expected {}",
            index + 1,
            token,
            what
        ))
    })
}

/// Parse a count and check it lies in `1..=max`.
fn parse_count<'a>(
    tokens: &mut impl Iterator<Item = (usize, &'a str)>,
    what: &str,
    max: usize,
) -> Result<usize, IesdsError> {
    let value = parse_int(tokens, what)?;
    match usize::try_from(value) {
        Ok(count) if (1..=max).contains(&count) => Ok(count),
        _ => Err(IesdsError::MalformedGame(format!(
            "{} must be between 1 and {}, got {}",
            what, max, value
        ))),
    }
}

/// Parse a game description from text.
///
/// # Errors
/// - `Parse` if a token is not an integer or the header is cut short
/// - `MalformedGame` if a count is out of the configured range or the number
///   of payoffs does not match the declared shape
pub fn parse_game(text: &str, config: &EliminationConfig) -> Result<GameInput, IesdsError> {
    let mut tokens = text.split_whitespace().enumerate();

    let flag = parse_int(&mut tokens, "the elimination flag")?;
    let players = parse_count(&mut tokens, "the number of players", config.max_players)?;

    let mut action_counts = Vec::with_capacity(players);
    for player in 1..=players {
        let what = format!("the number of actions of player {}", player);
        action_counts.push(parse_count(&mut tokens, &what, config.max_actions)?);
    }

    let payoffs = tokens
        .map(|(index, token)| {
            token.parse::<Payoff>().map_err(|_| {
                IesdsError::Parse(format!(
                    "token {} ({:?}) is not an integer payoff",
                    index + 1,
                    token
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let matrix = GameMatrix::from_flat(&action_counts, &payoffs)?;
    log::debug!(
        "parsed {}-player game with actions {:?} ({} rows x {} cols)",
        players,
        action_counts,
        matrix.num_rows(),
        matrix.num_cols()
    );

    Ok(GameInput {
        eliminate: flag == 1,
        matrix,
    })
}

/// Parse a game description from a file.
pub fn parse_game_file<P: AsRef<Path>>(
    path: P,
    config: &EliminationConfig,
) -> Result<GameInput, IesdsError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| IesdsError::Io(format!("{}: {}", path.display(), e)))?;
    parse_game(&text, config)
}
