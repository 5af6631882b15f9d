//! Payoff table of a normal-form game and the actions still in play.
//!
//! The table is stored the way the game is written down: one row per joint
//! profile of players `0..n-1` (every player but the last), and inside each
//! row one group of `n` payoffs per action of the last player.
//!
//! ```text
//!            last player: action 0      action 1      ...
//! row 0   [ u0 u1 .. u(n-1) | u0 u1 .. u(n-1) | ... ]
//! row 1   [ ...                                     ]
//! ```
//!
//! Row indices are a mixed-radix number over the non-last players with
//! player 0 as the fastest-varying digit:
//!
//! ```text
//! row = a_0 + a_1 * k_0 + a_2 * k_0 * k_1 + ...
//! ```
//!
//! Removing an action deletes rows (or per-row groups for the last player)
//! and compacts what is left; surviving digits are renumbered implicitly.

use crate::iesds::error::IesdsError;

/// A single payoff value. Payoffs are never recomputed, only dropped.
pub type Payoff = i64;

/// Payoffs of one player, grouped by that player's surviving actions.
///
/// `action(a)[x]` is what the player receives when playing its `a`-th
/// surviving action against the `x`-th joint action of everyone else. All
/// sequences have the same length and are aligned coordinate by coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSlice {
    player: usize,
    payoffs: Vec<Vec<Payoff>>,
}

impl PlayerSlice {
    /// Create a slice from per-action payoff sequences.
    pub fn new(player: usize, payoffs: Vec<Vec<Payoff>>) -> Self {
        Self { player, payoffs }
    }

    /// The player these payoffs belong to.
    pub fn player(&self) -> usize {
        self.player
    }

    /// Number of surviving actions.
    pub fn num_actions(&self) -> usize {
        self.payoffs.len()
    }

    /// Number of opponent joint actions (length of each sequence).
    pub fn width(&self) -> usize {
        self.payoffs.first().map_or(0, Vec::len)
    }

    /// Payoffs of the `action`-th surviving action.
    pub fn action(&self, action: usize) -> &[Payoff] {
        &self.payoffs[action]
    }

    /// All per-action sequences.
    pub fn actions(&self) -> &[Vec<Payoff>] {
        &self.payoffs
    }
}

/// The current payoff table together with each player's surviving labels.
///
/// Labels are the original 1-based action numbers. The number of surviving
/// actions of a player is the length of its label list, so the table shape
/// and the labels can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMatrix {
    /// Number of players.
    players: usize,

    /// Surviving 1-based action labels per player, ascending.
    labels: Vec<Vec<usize>>,

    /// Payoff rows, one per joint profile of the non-last players.
    rows: Vec<Vec<Payoff>>,
}

impl GameMatrix {
    /// Create a game from per-player action counts and payoff rows.
    ///
    /// # Errors
    /// `MalformedGame` if there are no players, a player has no actions, or
    /// the rows do not have the shape the counts imply.
    pub fn new(action_counts: &[usize], rows: Vec<Vec<Payoff>>) -> Result<Self, IesdsError> {
        let (expected_rows, expected_cols) = table_shape(action_counts)?;

        if rows.len() != expected_rows {
            return Err(IesdsError::MalformedGame(format!(
                "expected {} rows, found {}",
                expected_rows,
                rows.len()
            )));
        }
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected_cols)
        {
            return Err(IesdsError::MalformedGame(format!(
                "row {} has {} payoffs, expected {}",
                index + 1,
                row.len(),
                expected_cols
            )));
        }

        Ok(Self {
            players: action_counts.len(),
            labels: action_counts.iter().map(|&k| (1..=k).collect()).collect(),
            rows,
        })
    }

    /// Create a game from action counts and payoffs listed in row-major order.
    pub fn from_flat(action_counts: &[usize], payoffs: &[Payoff]) -> Result<Self, IesdsError> {
        let (rows, cols) = table_shape(action_counts)?;
        if payoffs.len() != rows * cols {
            return Err(IesdsError::MalformedGame(format!(
                "expected {} payoffs ({} rows of {}), found {}",
                rows * cols,
                rows,
                cols,
                payoffs.len()
            )));
        }
        let rows = payoffs.chunks(cols).map(<[Payoff]>::to_vec).collect();
        Self::new(action_counts, rows)
    }

    /// Number of players.
    pub fn num_players(&self) -> usize {
        self.players
    }

    /// Index of the last player (the one spread across columns).
    pub fn last_player(&self) -> usize {
        self.players - 1
    }

    /// Number of surviving actions of `player`.
    pub fn num_actions(&self, player: usize) -> usize {
        self.labels[player].len()
    }

    /// Number of surviving actions of every player.
    pub fn action_counts(&self) -> Vec<usize> {
        self.labels.iter().map(Vec::len).collect()
    }

    /// Total number of surviving actions across all players.
    pub fn total_actions(&self) -> usize {
        self.labels.iter().map(Vec::len).sum()
    }

    /// Surviving labels of `player`.
    pub fn labels(&self, player: usize) -> &[usize] {
        &self.labels[player]
    }

    /// Surviving labels of every player.
    pub fn all_labels(&self) -> &[Vec<usize>] {
        &self.labels
    }

    /// Payoff rows.
    pub fn rows(&self) -> &[Vec<Payoff>] {
        &self.rows
    }

    /// Number of rows (joint profiles of the non-last players).
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (`n` payoffs per surviving action of the last player).
    pub fn num_cols(&self) -> usize {
        self.players * self.num_actions(self.last_player())
    }

    /// Payoff to `player` in `row` when the last player plays its
    /// `last_action`-th surviving action.
    pub fn payoff(&self, row: usize, last_action: usize, player: usize) -> Payoff {
        self.rows[row][last_action * self.players + player]
    }

    /// Distance between consecutive values of `player`'s digit in the row
    /// index. Only meaningful for non-last players.
    fn stride(&self, player: usize) -> usize {
        self.labels[..player].iter().map(Vec::len).product()
    }

    /// The action position `player` takes in `row`.
    fn digit(&self, row: usize, player: usize) -> usize {
        (row / self.stride(player)) % self.num_actions(player)
    }

    /// Row index of a joint profile of the non-last players.
    ///
    /// `profile[i]` is the surviving-action position of player `i`.
    pub fn row_index(&self, profile: &[usize]) -> usize {
        profile
            .iter()
            .zip(&self.labels)
            .rev()
            .fold(0, |index, (&action, labels)| index * labels.len() + action)
    }

    /// Joint profile of the non-last players encoded by `row`.
    pub fn row_profile(&self, row: usize) -> Vec<usize> {
        (0..self.last_player())
            .map(|player| self.digit(row, player))
            .collect()
    }

    /// Gather the payoffs `player` receives, one sequence per surviving action.
    ///
    /// For the last player each sequence has one entry per row. For any other
    /// player the rows where it plays the action are visited in ascending
    /// order, and every last-player group of each such row contributes one
    /// entry.
    ///
    /// # Errors
    /// `InvariantViolation` if `player` is not a player of this game.
    pub fn extract_player_slice(&self, player: usize) -> Result<PlayerSlice, IesdsError> {
        self.check_player(player)?;

        let mut payoffs = vec![Vec::new(); self.num_actions(player)];
        if player == self.last_player() {
            for row in &self.rows {
                for (action, group) in row.chunks(self.players).enumerate() {
                    payoffs[action].push(group[player]);
                }
            }
        } else {
            for (index, row) in self.rows.iter().enumerate() {
                let action = self.digit(index, player);
                payoffs[action].extend(row.chunks(self.players).map(|group| group[player]));
            }
        }

        Ok(PlayerSlice::new(player, payoffs))
    }

    /// Remove the `action`-th surviving action of `player` and return its label.
    ///
    /// For a non-last player every row in which it plays the action is
    /// dropped; for the last player the action's group is dropped from every
    /// row.
    ///
    /// # Errors
    /// `InvariantViolation` if the player or action does not exist, or if the
    /// action is the player's last one. The matrix is unchanged on error.
    pub fn remove_action(&mut self, player: usize, action: usize) -> Result<usize, IesdsError> {
        self.check_player(player)?;

        let remaining = self.num_actions(player);
        if action >= remaining {
            return Err(IesdsError::InvariantViolation(format!(
                "player {} has no action at position {} ({} remaining)",
                player + 1,
                action,
                remaining
            )));
        }
        if remaining == 1 {
            return Err(IesdsError::InvariantViolation(format!(
                "cannot remove the only remaining action of player {}",
                player + 1
            )));
        }

        if player == self.last_player() {
            let width = self.players;
            for row in &mut self.rows {
                row.drain(action * width..(action + 1) * width);
            }
        } else {
            let stride = self.stride(player);
            let mut index = 0;
            self.rows.retain(|_| {
                let keep = (index / stride) % remaining != action;
                index += 1;
                keep
            });
        }

        Ok(self.labels[player].remove(action))
    }

    /// Check whether the game has collapsed to a single outcome.
    ///
    /// True when there is exactly one row and at most `n` columns (one action
    /// of the last player). With a single player there is always one row, so
    /// this reduces to that player having one action left.
    pub fn is_singleton(&self) -> bool {
        self.rows.len() == 1 && self.num_cols() <= self.players
    }

    fn check_player(&self, player: usize) -> Result<(), IesdsError> {
        if player >= self.players {
            return Err(IesdsError::InvariantViolation(format!(
                "player index {} out of range for a {}-player game",
                player, self.players
            )));
        }
        Ok(())
    }
}

/// Row and column counts implied by per-player action counts.
fn table_shape(action_counts: &[usize]) -> Result<(usize, usize), IesdsError> {
    let (&last, others) = action_counts
        .split_last()
        .ok_or_else(|| IesdsError::MalformedGame("a game needs at least one player".into()))?;

    if let Some(player) = action_counts.iter().position(|&k| k == 0) {
        return Err(IesdsError::MalformedGame(format!(
            "player {} has no actions",
            player + 1
        )));
    }

    let rows = others
        .iter()
        .try_fold(1usize, |acc, &k| acc.checked_mul(k))
        .ok_or_else(|| IesdsError::MalformedGame("payoff table is too large".into()))?;
    let cols = action_counts
        .len()
        .checked_mul(last)
        .ok_or_else(|| IesdsError::MalformedGame("payoff table is too large".into()))?;

    Ok((rows, cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Game whose payoffs encode their own position: 100*row + 10*group + player.
    fn encoded_game(counts: &[usize]) -> GameMatrix {
        let n = counts.len();
        let num_rows: usize = counts[..n - 1].iter().product();
        let groups = counts[n - 1];
        let rows = (0..num_rows)
            .map(|r| {
                (0..groups)
                    .flat_map(move |g| (0..n).map(move |p| (100 * r + 10 * g + p) as Payoff))
                    .collect()
            })
            .collect();
        GameMatrix::new(counts, rows).unwrap()
    }

    #[test]
    fn test_shape_and_labels() {
        let game = encoded_game(&[2, 3, 2]);
        assert_eq!(game.num_players(), 3);
        assert_eq!(game.num_rows(), 6);
        assert_eq!(game.num_cols(), 6);
        assert_eq!(game.action_counts(), vec![2, 3, 2]);
        assert_eq!(game.labels(1), &[1, 2, 3]);
        assert_eq!(game.total_actions(), 7);
        assert_eq!(game.payoff(3, 1, 2), 312);
    }

    #[test]
    fn test_malformed_dimensions() {
        let err = GameMatrix::new(&[2, 2], vec![vec![0; 4]]).unwrap_err();
        assert!(err.is_malformed());

        let err = GameMatrix::new(&[2, 2], vec![vec![0; 4], vec![0; 3]]).unwrap_err();
        assert!(err.is_malformed());

        assert!(GameMatrix::new(&[], vec![]).unwrap_err().is_malformed());
        assert!(GameMatrix::new(&[2, 0], vec![vec![], vec![]]).unwrap_err().is_malformed());
        assert!(GameMatrix::from_flat(&[2, 2], &[1, 2, 3]).unwrap_err().is_malformed());
    }

    #[test]
    fn test_from_flat_matches_rows() {
        let flat = GameMatrix::from_flat(&[2, 2], &[3, 3, 0, 5, 5, 0, 1, 1]).unwrap();
        let rows = GameMatrix::new(&[2, 2], vec![vec![3, 3, 0, 5], vec![5, 0, 1, 1]]).unwrap();
        assert_eq!(flat, rows);
    }

    #[test]
    fn test_mixed_radix_player_zero_fastest() {
        let game = encoded_game(&[2, 3, 2]);
        assert_eq!(game.row_profile(0), vec![0, 0]);
        assert_eq!(game.row_profile(1), vec![1, 0]);
        assert_eq!(game.row_profile(2), vec![0, 1]);
        assert_eq!(game.row_profile(5), vec![1, 2]);
        for row in 0..game.num_rows() {
            assert_eq!(game.row_index(&game.row_profile(row)), row);
        }
    }

    #[test]
    fn test_extract_last_player_slice() {
        let game = encoded_game(&[2, 3, 2]);
        let slice = game.extract_player_slice(2).unwrap();
        assert_eq!(slice.player(), 2);
        assert_eq!(slice.num_actions(), 2);
        assert_eq!(slice.action(0), &[2, 102, 202, 302, 402, 502]);
        assert_eq!(slice.action(1), &[12, 112, 212, 312, 412, 512]);
    }

    #[test]
    fn test_extract_row_player_slices() {
        let game = encoded_game(&[2, 3, 2]);

        let slice = game.extract_player_slice(0).unwrap();
        assert_eq!(slice.action(0), &[0, 10, 200, 210, 400, 410]);
        assert_eq!(slice.action(1), &[100, 110, 300, 310, 500, 510]);

        let slice = game.extract_player_slice(1).unwrap();
        assert_eq!(slice.width(), 4);
        assert_eq!(slice.action(0), &[1, 11, 101, 111]);
        assert_eq!(slice.action(1), &[201, 211, 301, 311]);
        assert_eq!(slice.action(2), &[401, 411, 501, 511]);

        assert!(game.extract_player_slice(3).unwrap_err().is_invariant_violation());
    }

    #[test]
    fn test_remove_middle_player_action() {
        let mut game = encoded_game(&[2, 3, 2]);
        assert_eq!(game.remove_action(1, 1).unwrap(), 2);

        assert_eq!(game.labels(1), &[1, 3]);
        assert_eq!(game.num_rows(), 4);
        let firsts: Vec<Payoff> = game.rows().iter().map(|row| row[0]).collect();
        assert_eq!(firsts, vec![0, 100, 400, 500]);

        // Remaining digits are compacted: old row 4 is now row 2 with digit 1.
        assert_eq!(game.row_profile(2), vec![0, 1]);
        assert_eq!(game.labels(1)[game.row_profile(2)[1]], 3);
    }

    #[test]
    fn test_remove_first_player_action() {
        let mut game = encoded_game(&[2, 3, 2]);
        assert_eq!(game.remove_action(0, 0).unwrap(), 1);
        let firsts: Vec<Payoff> = game.rows().iter().map(|row| row[0]).collect();
        assert_eq!(firsts, vec![100, 300, 500]);
        assert_eq!(game.action_counts(), vec![1, 3, 2]);
    }

    #[test]
    fn test_remove_last_player_action() {
        let mut game = encoded_game(&[2, 3, 2]);
        assert_eq!(game.remove_action(2, 0).unwrap(), 1);
        assert_eq!(game.num_cols(), 3);
        assert_eq!(game.num_rows(), 6);
        assert_eq!(game.rows()[1], vec![110, 111, 112]);
        assert_eq!(game.labels(2), &[2]);
    }

    #[test]
    fn test_remove_action_errors_leave_game_untouched() {
        let mut game = encoded_game(&[1, 2]);
        let before = game.clone();

        assert!(game.remove_action(0, 0).unwrap_err().is_invariant_violation());
        assert!(game.remove_action(1, 2).unwrap_err().is_invariant_violation());
        assert!(game.remove_action(2, 0).unwrap_err().is_invariant_violation());
        assert_eq!(game, before);
    }

    #[test]
    fn test_is_singleton() {
        let mut game = encoded_game(&[2, 2]);
        assert!(!game.is_singleton());
        game.remove_action(0, 0).unwrap();
        assert!(!game.is_singleton());
        game.remove_action(1, 1).unwrap();
        assert!(game.is_singleton());
    }

    #[test]
    fn test_single_player_game() {
        let mut game = GameMatrix::from_flat(&[3], &[4, 7, 5]).unwrap();
        assert_eq!(game.num_rows(), 1);
        assert!(!game.is_singleton());

        let slice = game.extract_player_slice(0).unwrap();
        assert_eq!(slice.actions(), &[vec![4], vec![7], vec![5]]);

        game.remove_action(0, 0).unwrap();
        game.remove_action(0, 1).unwrap();
        assert_eq!(game.labels(0), &[2]);
        assert!(game.is_singleton());
    }
}
