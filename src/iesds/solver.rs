//! Elimination driver.
//!
//! This module runs the iterated elimination as an explicit state machine:
//!
//! ```text
//!            removal                      removal
//!          ┌─────────┐        ┌──────────────────────────┐
//!          ▼         │        ▼                          │
//!      PureScan ─────┘    PureScan ──none──▶ MixedScan ──┘
//!                                               │
//!                                              none
//!                                               ▼
//!                                              Done
//! ```
//!
//! Every scan visits the last player first, then players `0..n-1` in
//! ascending order, and stops at the first dominated action it finds. After
//! a removal the pure scan always runs again before any mixture is tried.

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::iesds::config::{EliminationConfig, EliminationStats};
use crate::iesds::dominance::{DominanceCheck, Domination, Dominator, Phase};
use crate::iesds::error::IesdsError;
use crate::iesds::matrix::GameMatrix;
use crate::iesds::mixed::MixedDominance;
use crate::iesds::pure::PureDominance;

/// State of the elimination driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanState {
    /// Looking for actions dominated by a single action.
    PureScan,
    /// Looking for actions dominated by a mixture of two actions.
    MixedScan,
    /// No player has a dominated action left (or elimination was skipped).
    Done,
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanState::PureScan => write!(f, "pure scan"),
            ScanState::MixedScan => write!(f, "mixed scan"),
            ScanState::Done => write!(f, "done"),
        }
    }
}

/// One removed action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Elimination {
    /// 1-based position of this removal in the run.
    pub step: usize,
    /// Which checker found it.
    pub phase: Phase,
    /// Player who lost the action.
    pub player: usize,
    /// Original label of the removed action.
    pub label: usize,
    /// Original labels of the dominating action(s).
    pub dominators: Vec<usize>,
    /// The checker's finding, in surviving positions at the time of removal.
    pub domination: Domination,
}

impl fmt::Display for Elimination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let by = self
            .dominators
            .iter()
            .map(|label| label.to_string())
            .collect::<Vec<_>>()
            .join("+");
        write!(
            f,
            "step {}: player {} action {} dominated ({}) by {}",
            self.step,
            self.player + 1,
            self.label,
            self.phase,
            by
        )
    }
}

/// Final state of a finished elimination.
#[derive(Debug, Clone)]
pub struct EliminationOutcome {
    /// The reduced game.
    pub matrix: GameMatrix,
    /// Counters for the run.
    pub stats: EliminationStats,
    /// Removed actions in order (empty if history recording is off).
    pub history: Vec<Elimination>,
}

/// Players in the order every scan visits them: the last player, then
/// `0..n-1` ascending.
pub fn scan_order(players: usize) -> impl Iterator<Item = usize> {
    let last = players.saturating_sub(1);
    std::iter::once(last).chain(0..last)
}

/// Drives iterated elimination over a game it exclusively owns.
///
/// # Example
/// ```
/// use iesds_solver::iesds::{EliminationConfig, Eliminator, GameMatrix};
///
/// // Prisoner's Dilemma: action 2 (defect) dominates for both players.
/// let game = GameMatrix::from_flat(&[2, 2], &[3, 3, 0, 5, 5, 0, 1, 1]).unwrap();
/// let mut driver = Eliminator::new(game, EliminationConfig::default());
/// driver.run().unwrap();
///
/// assert_eq!(driver.matrix().all_labels(), &[vec![2], vec![2]]);
/// assert_eq!(driver.matrix().rows(), &[vec![1, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct Eliminator {
    /// The game being reduced.
    matrix: GameMatrix,

    /// Configuration for the driver.
    config: EliminationConfig,

    /// Current state.
    state: ScanState,

    /// Statistics tracking.
    stats: EliminationStats,

    /// Recorded removals.
    history: Vec<Elimination>,

    /// Upper bound on removals: every player keeps at least one action.
    ///
    /// `GameMatrix::remove_action` already refuses to empty a player, so
    /// this only trips if a checker keeps reporting after the table is
    /// exhausted.
    max_removals: usize,
}

impl Eliminator {
    /// Create a driver for `matrix`.
    ///
    /// If `config.skip` is set the driver starts in `Done` and leaves the
    /// game untouched.
    pub fn new(matrix: GameMatrix, config: EliminationConfig) -> Self {
        let state = if config.skip {
            ScanState::Done
        } else {
            ScanState::PureScan
        };
        let total = matrix.total_actions();
        let stats = EliminationStats {
            initial_actions: total,
            final_actions: total,
            ..EliminationStats::new()
        };

        Self {
            max_removals: total - matrix.num_players(),
            matrix,
            config,
            state,
            stats,
            history: Vec::new(),
        }
    }

    /// Perform a single transition and return the new state.
    ///
    /// Calling this in `Done` does nothing.
    pub fn step(&mut self) -> Result<ScanState, IesdsError> {
        self.advance()?;
        Ok(self.state)
    }

    /// Run until no dominated action is left.
    pub fn run(&mut self) -> Result<&EliminationStats, IesdsError> {
        self.run_with_callback(|_| {})
    }

    /// Run until no dominated action is left, calling `callback` after every
    /// removal.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> Result<&EliminationStats, IesdsError>
    where
        F: FnMut(&Elimination),
    {
        let start_time = Instant::now();

        if self.config.skip {
            log::warn!("elimination skipped, game is reported unchanged");
        }

        while self.state != ScanState::Done {
            if let Some(elimination) = self.advance()? {
                callback(&elimination);
            }
        }

        self.stats.elapsed_seconds += start_time.elapsed().as_secs_f64();
        log::info!(
            "{:<24}{} pure, {} mixed ({} -> {} actions)",
            "elimination finished",
            self.stats.pure_removals,
            self.stats.mixed_removals,
            self.stats.initial_actions,
            self.stats.final_actions
        );

        Ok(&self.stats)
    }

    /// Transition once, returning the removal it made, if any.
    fn advance(&mut self) -> Result<Option<Elimination>, IesdsError> {
        let (removed, next) = match self.state {
            ScanState::PureScan => {
                self.stats.pure_scans += 1;
                match self.scan(&PureDominance)? {
                    Some(elimination) => (Some(elimination), self.after_removal()),
                    None if self.config.mixed => (None, ScanState::MixedScan),
                    None => (None, ScanState::Done),
                }
            }
            ScanState::MixedScan => {
                self.stats.mixed_scans += 1;
                match self.scan(&MixedDominance)? {
                    Some(elimination) => (Some(elimination), self.after_removal()),
                    None => (None, ScanState::Done),
                }
            }
            ScanState::Done => (None, ScanState::Done),
        };

        if next != self.state {
            log::debug!("{} -> {}", self.state, next);
        }
        self.state = next;
        Ok(removed)
    }

    /// Where to go after a removal. A game reduced to one outcome is done.
    fn after_removal(&self) -> ScanState {
        if self.matrix.is_singleton() {
            ScanState::Done
        } else {
            ScanState::PureScan
        }
    }

    /// Run `checker` over the players in scan order and remove the first
    /// dominated action found.
    fn scan<C: DominanceCheck>(&mut self, checker: &C) -> Result<Option<Elimination>, IesdsError> {
        for player in scan_order(self.matrix.num_players()) {
            let slice = self.matrix.extract_player_slice(player)?;
            if let Some(domination) = checker.find_dominated(&slice) {
                return self.apply(checker.phase(), player, domination).map(Some);
            }
        }
        Ok(None)
    }

    fn apply(
        &mut self,
        phase: Phase,
        player: usize,
        domination: Domination,
    ) -> Result<Elimination, IesdsError> {
        if self.stats.removals() >= self.max_removals {
            return Err(IesdsError::InvariantViolation(format!(
                "more than {} removals requested",
                self.max_removals
            )));
        }

        let labels = self.matrix.labels(player);
        let label_of = |position: usize| {
            labels.get(position).copied().ok_or_else(|| {
                IesdsError::InvariantViolation(format!(
                    "player {} has no action at position {}",
                    player + 1,
                    position
                ))
            })
        };
        let dominators = match &domination.by {
            Dominator::Pure(by) => vec![label_of(*by)?],
            Dominator::Mixed { first, second, .. } => vec![label_of(*first)?, label_of(*second)?],
        };

        let label = self.matrix.remove_action(player, domination.dominated)?;

        match phase {
            Phase::Pure => self.stats.pure_removals += 1,
            Phase::Mixed => self.stats.mixed_removals += 1,
        }
        self.stats.final_actions = self.matrix.total_actions();

        let elimination = Elimination {
            step: self.stats.removals(),
            phase,
            player,
            label,
            dominators,
            domination,
        };
        log::debug!("{}", elimination);

        if self.config.record_history {
            self.history.push(elimination.clone());
        }
        Ok(elimination)
    }

    /// The game in its current state.
    pub fn matrix(&self) -> &GameMatrix {
        &self.matrix
    }

    /// Current state.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Check if the fixed point has been reached.
    pub fn is_done(&self) -> bool {
        self.state == ScanState::Done
    }

    /// Get current statistics.
    pub fn stats(&self) -> &EliminationStats {
        &self.stats
    }

    /// Removals recorded so far.
    pub fn history(&self) -> &[Elimination] {
        &self.history
    }

    /// Get the configuration.
    pub fn config(&self) -> &EliminationConfig {
        &self.config
    }

    /// Consume the driver and return the reduced game.
    pub fn into_matrix(self) -> GameMatrix {
        self.matrix
    }

    /// Consume the driver and return everything it produced.
    pub fn into_outcome(self) -> EliminationOutcome {
        EliminationOutcome {
            matrix: self.matrix,
            stats: self.stats,
            history: self.history,
        }
    }
}

/// Reduce `matrix` to its fixed point in one call.
pub fn eliminate(
    matrix: GameMatrix,
    config: EliminationConfig,
) -> Result<EliminationOutcome, IesdsError> {
    let mut driver = Eliminator::new(matrix, config);
    driver.run()?;
    Ok(driver.into_outcome())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games;

    #[test]
    fn test_scan_order() {
        assert_eq!(scan_order(1).collect::<Vec<_>>(), vec![0]);
        assert_eq!(scan_order(2).collect::<Vec<_>>(), vec![1, 0]);
        assert_eq!(scan_order(4).collect::<Vec<_>>(), vec![3, 0, 1, 2]);
    }

    #[test]
    fn test_prisoners_dilemma() {
        let outcome = eliminate(games::prisoners_dilemma(), EliminationConfig::default()).unwrap();

        assert_eq!(outcome.matrix.all_labels(), &[vec![2], vec![2]]);
        assert_eq!(outcome.matrix.rows(), &[vec![1, 1]]);
        assert_eq!(outcome.stats.pure_removals, 2);
        assert_eq!(outcome.stats.mixed_removals, 0);
        assert_eq!(outcome.stats.final_actions, 2);

        // The last player is always scanned first.
        let players: Vec<usize> = outcome.history.iter().map(|e| e.player).collect();
        assert_eq!(players, vec![1, 0]);
        assert_eq!(outcome.history[0].label, 1);
        assert_eq!(outcome.history[0].dominators, vec![2]);
    }

    #[test]
    fn test_prisoners_dilemma_state_machine() {
        let mut driver = Eliminator::new(games::prisoners_dilemma(), EliminationConfig::default());
        assert_eq!(driver.state(), ScanState::PureScan);
        assert_eq!(driver.step().unwrap(), ScanState::PureScan);
        // The second removal leaves a single outcome.
        assert_eq!(driver.step().unwrap(), ScanState::Done);
        assert_eq!(driver.step().unwrap(), ScanState::Done);
        assert_eq!(driver.stats().mixed_scans, 0);
    }

    #[test]
    fn test_mixture_only_domination() {
        let mut driver = Eliminator::new(games::mixed_dominance_example(), EliminationConfig::default());

        assert_eq!(driver.step().unwrap(), ScanState::MixedScan);
        assert_eq!(driver.step().unwrap(), ScanState::PureScan);
        assert_eq!(driver.step().unwrap(), ScanState::MixedScan);
        assert_eq!(driver.step().unwrap(), ScanState::Done);

        let game = driver.matrix();
        assert_eq!(game.all_labels(), &[vec![1, 2], vec![1, 2]]);
        assert_eq!(game.rows(), &[vec![4, 1, 0, 0], vec![0, 0, 4, 1]]);

        let history = driver.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].phase, Phase::Mixed);
        assert_eq!((history[0].player, history[0].label), (0, 3));
        assert_eq!(history[0].dominators, vec![1, 2]);
        assert_eq!(driver.stats().pure_scans, 2);
        assert_eq!(driver.stats().mixed_scans, 2);
    }

    #[test]
    fn test_pure_only_keeps_mixture_dominated_action() {
        let game = games::mixed_dominance_example();
        let outcome = eliminate(game.clone(), EliminationConfig::pure_only()).unwrap();
        assert_eq!(outcome.matrix, game);
        assert_eq!(outcome.stats.mixed_scans, 0);
    }

    #[test]
    fn test_skip_leaves_game_unchanged() {
        let game = games::prisoners_dilemma();
        let mut driver = Eliminator::new(game.clone(), EliminationConfig::new().with_skip(true));
        assert!(driver.is_done());

        let stats = driver.run().unwrap().clone();
        assert_eq!(stats.removals(), 0);
        assert_eq!(stats.pure_scans, 0);
        assert_eq!(driver.into_matrix(), game);
    }

    #[test]
    fn test_players_scanned_in_ascending_order_after_last() {
        // Players 0 and 1 both prefer their second action; player 2 has one.
        let game = GameMatrix::from_flat(
            &[2, 2, 1],
            &[0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 0],
        )
        .unwrap();
        let outcome = eliminate(game, EliminationConfig::default()).unwrap();

        let players: Vec<usize> = outcome.history.iter().map(|e| e.player).collect();
        assert_eq!(players, vec![0, 1]);
        assert_eq!(outcome.matrix.all_labels(), &[vec![2], vec![2], vec![1]]);
        assert_eq!(outcome.matrix.rows(), &[vec![1, 1, 0]]);
    }

    #[test]
    fn test_removal_guard_stops_runaway_driver() {
        let mut driver = Eliminator::new(games::prisoners_dilemma(), EliminationConfig::default());
        assert_eq!(driver.max_removals, 2);

        driver.max_removals = 1;
        assert_eq!(driver.step().unwrap(), ScanState::PureScan);
        let err = driver.step().unwrap_err();
        assert!(err.is_invariant_violation());
        // The refused removal leaves the game as it was.
        assert_eq!(driver.matrix().action_counts(), vec![2, 1]);
        assert_eq!(driver.stats().removals(), 1);
    }

    #[test]
    fn test_callback_sees_every_removal() {
        let mut steps = Vec::new();
        let mut driver = Eliminator::new(
            games::prisoners_dilemma(),
            EliminationConfig::new().with_history(false),
        );
        driver.run_with_callback(|e| steps.push(e.step)).unwrap();

        assert_eq!(steps, vec![1, 2]);
        assert!(driver.history().is_empty());
    }

    #[test]
    fn test_random_games_terminate_monotonically() {
        let shapes: [&[usize]; 5] = [&[3], &[4, 3], &[3, 3, 3], &[2, 4, 2, 3], &[5, 2]];

        for seed in 0..40u64 {
            for shape in shapes {
                let game = games::random_game(shape, -3..=3, seed).unwrap();
                let initial_total = game.total_actions();
                let mut driver = Eliminator::new(game, EliminationConfig::default());

                let mut counts = driver.matrix().action_counts();
                let mut steps = 0;
                while !driver.is_done() {
                    driver.step().unwrap();
                    steps += 1;
                    assert!(steps <= 2 * initial_total + 2, "seed {} shape {:?}", seed, shape);

                    // At most one player loses exactly one action per step.
                    let next = driver.matrix().action_counts();
                    let shrunk: Vec<usize> = (0..counts.len())
                        .filter(|&p| next[p] != counts[p])
                        .collect();
                    assert!(shrunk.len() <= 1);
                    if let Some(&p) = shrunk.first() {
                        assert_eq!(next[p] + 1, counts[p]);
                    }
                    assert!(next.iter().all(|&k| k >= 1));
                    counts = next;
                }
                assert!(driver.stats().removals() <= initial_total);

                // Fixed point: nothing left to remove for anyone.
                let game = driver.matrix();
                for player in 0..game.num_players() {
                    let slice = game.extract_player_slice(player).unwrap();
                    assert_eq!(PureDominance.find_dominated(&slice), None);
                    assert_eq!(MixedDominance.find_dominated(&slice), None);
                }
            }
        }
    }
}
