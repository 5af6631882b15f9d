//! Seeded random games for tests and benchmarks.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::iesds::{GameMatrix, IesdsError, Payoff};

/// Generate a game with uniformly drawn integer payoffs.
///
/// The same `action_counts`, `payoffs` and `seed` always produce the same
/// game.
///
/// # Errors
/// `MalformedGame` if `action_counts` is empty or contains a zero, or if the
/// payoff range is empty.
pub fn random_game(
    action_counts: &[usize],
    payoffs: RangeInclusive<Payoff>,
    seed: u64,
) -> Result<GameMatrix, IesdsError> {
    if payoffs.is_empty() {
        return Err(IesdsError::MalformedGame(format!(
            "empty payoff range {:?}",
            payoffs
        )));
    }
    let Some((&last, others)) = action_counts.split_last() else {
        return Err(IesdsError::MalformedGame("a game needs at least one player".into()));
    };

    let rows: usize = others.iter().product();
    let cols = action_counts.len() * last;

    let mut rng = StdRng::seed_from_u64(seed);
    let flat: Vec<Payoff> = (0..rows * cols)
        .map(|_| rng.gen_range(payoffs.clone()))
        .collect();

    GameMatrix::from_flat(action_counts, &flat)
}
