//! Domination by a mixture of two other actions.
//!
//! An action `one` is dominated by a mixture of `two` and `three` when some
//! weight `p` in `[0, 1]` makes
//!
//! ```text
//! p * two[x] + (1 - p) * three[x] > one[x]    for every coordinate x
//! ```
//!
//! Each coordinate restricts `p` to an interval whose finite end is the root
//! of `p * two[x] + (1 - p) * three[x] = one[x]`. The action is dominated when
//! the intersection of those intervals is not empty.

use crate::iesds::dominance::{DominanceCheck, Domination, Dominator, Phase};
use crate::iesds::matrix::{Payoff, PlayerSlice};

/// Finds actions strictly dominated by a mixture of exactly two actions.
///
/// With three actions the candidates are tried in index order against the
/// other two. With more, every ordered triple `(i, j, k)` is visited
/// (repeats included) and, per triple, `i` against `(j, k)`, then `j` against
/// `(i, k)`, then `k` against `(i, j)`; the first hit wins. Repeated indices
/// make some tests redundant, but they decide which action is found first
/// and are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct MixedDominance;

impl MixedDominance {
    /// Create a new checker.
    pub fn new() -> Self {
        Self
    }
}

/// Solve `a*x + b*y = e`, `c*x + d*y = f` for `x` by Cramer's rule.
///
/// A singular system yields an infinite (or NaN) result.
fn solve_for_x(a: f64, b: f64, e: f64, c: f64, d: f64, f: f64) -> f64 {
    (e * d - b * f) / (a * d - b * c)
}

/// Weight on `two` at which the mixture of `two` and `three` pays exactly `one`.
fn boundary_weight(one: f64, two: f64, three: f64) -> f64 {
    // p + q = 1, two*p + three*q = one
    solve_for_x(1.0, 1.0, 1.0, two, three, one)
}

/// Range of weights on `two` for which mixing `two` and `three` beats `one`
/// at every coordinate, as `(min, max)`.
///
/// Returns `None` as soon as a coordinate has `one` at least as large as both
/// `two` and `three`, or when the intervals do not intersect.
pub fn feasible_weights(one: &[Payoff], two: &[Payoff], three: &[Payoff]) -> Option<(f64, f64)> {
    let mut upper: f64 = 1.0;
    let mut lower: f64 = 0.0;

    for ((&o, &a), &b) in one.iter().zip(two).zip(three) {
        if o >= a && o >= b {
            return None;
        }

        let boundary = boundary_weight(o as f64, a as f64, b as f64);
        if a > b {
            // feasible: (boundary, 1]
            lower = lower.max(boundary);
        } else {
            // feasible: [0, boundary)
            upper = upper.min(boundary);
        }
    }

    (upper >= lower).then_some((lower, upper))
}

/// Check whether `one` is strictly dominated by some mixture of `two` and `three`.
pub fn is_strictly_dominated(one: &[Payoff], two: &[Payoff], three: &[Payoff]) -> bool {
    feasible_weights(one, two, three).is_some()
}

impl DominanceCheck for MixedDominance {
    fn phase(&self) -> Phase {
        Phase::Mixed
    }

    fn find_dominated(&self, slice: &PlayerSlice) -> Option<Domination> {
        let actions = slice.actions();
        let test = |target: usize, first: usize, second: usize| {
            feasible_weights(&actions[target], &actions[first], &actions[second]).map(
                |(min_weight, max_weight)| Domination {
                    dominated: target,
                    by: Dominator::Mixed {
                        first,
                        second,
                        min_weight,
                        max_weight,
                    },
                },
            )
        };

        let k = actions.len();
        match k {
            0..=2 => None,
            3 => test(0, 1, 2)
                .or_else(|| test(1, 0, 2))
                .or_else(|| test(2, 0, 1)),
            _ => {
                for i in 0..k {
                    for j in 0..k {
                        for l in 0..k {
                            let found = test(i, j, l)
                                .or_else(|| test(j, i, l))
                                .or_else(|| test(l, i, j));
                            if found.is_some() {
                                return found;
                            }
                        }
                    }
                }
                None
            }
        }
    }
}
