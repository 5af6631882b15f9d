//! Small textbook games with known reductions.

use crate::iesds::GameMatrix;

/// Prisoner's Dilemma.
///
/// Action 1 is "cooperate", action 2 is "defect". Defecting strictly
/// dominates for both players, so the game reduces to the single outcome
/// `(1, 1)`.
///
/// ```text
///              C        D
///   C       (3, 3)   (0, 5)
///   D       (5, 0)   (1, 1)
/// ```
pub fn prisoners_dilemma() -> GameMatrix {
    GameMatrix::new(&[2, 2], vec![vec![3, 3, 0, 5], vec![5, 0, 1, 1]])
        .expect("prisoner's dilemma table is well formed")
}

/// Row player's third action is beaten by any mixture of its first two with
/// weight between 1/4 and 3/4, but by neither of them alone.
///
/// ```text
///              L        R
///   T       (4, 1)   (0, 0)
///   M       (0, 0)   (4, 1)
///   B       (1, 0)   (1, 0)
/// ```
///
/// The column player has no dominated action before or after `B` goes.
pub fn mixed_dominance_example() -> GameMatrix {
    GameMatrix::new(
        &[3, 2],
        vec![vec![4, 1, 0, 0], vec![0, 0, 4, 1], vec![1, 0, 1, 0]],
    )
    .expect("mixed dominance table is well formed")
}

/// Matching Pennies: no action is dominated, nothing is removed.
pub fn matching_pennies() -> GameMatrix {
    GameMatrix::new(&[2, 2], vec![vec![1, -1, -1, 1], vec![-1, 1, 1, -1]])
        .expect("matching pennies table is well formed")
}

/// Three-player game that needs several rounds, including a mixture.
///
/// Player 3's second action is dominated outright. Once it is gone player
/// 1's third action loses to a mixture of its first two; that exposes player
/// 2's first action, and finally player 1's first.
pub fn three_player_cascade() -> GameMatrix {
    // rows: (a0, a1) with a0 fastest; groups: player 3's actions.
    let rows = vec![
        vec![4, 0, 2, 0, 0, 0],
        vec![0, 0, 2, 0, 0, 0],
        vec![1, 5, 2, 0, 0, 0],
        vec![0, 1, 2, 0, 0, 0],
        vec![4, 1, 2, 0, 0, 0],
        vec![1, 1, 2, 0, 0, 0],
    ];
    GameMatrix::new(&[3, 2, 2], rows).expect("cascade table is well formed")
}

/// All catalog games with their names.
pub fn catalog() -> Vec<(&'static str, GameMatrix)> {
    vec![
        ("prisoners_dilemma", prisoners_dilemma()),
        ("mixed_dominance_example", mixed_dominance_example()),
        ("matching_pennies", matching_pennies()),
        ("three_player_cascade", three_player_cascade()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iesds::{eliminate, EliminationConfig, Phase};

    #[test]
    fn test_matching_pennies_is_stable() {
        let game = matching_pennies();
        let outcome = eliminate(game.clone(), EliminationConfig::default()).unwrap();
        assert_eq!(outcome.matrix, game);
        assert_eq!(outcome.stats.removals(), 0);
    }

    #[test]
    fn test_three_player_cascade() {
        let outcome = eliminate(three_player_cascade(), EliminationConfig::default()).unwrap();

        let removed: Vec<(usize, usize, Phase)> = outcome
            .history
            .iter()
            .map(|e| (e.player, e.label, e.phase))
            .collect();
        assert_eq!(
            removed,
            vec![
                (2, 2, Phase::Pure),
                (0, 3, Phase::Mixed),
                (1, 1, Phase::Pure),
                (0, 1, Phase::Pure),
            ]
        );
        assert_eq!(outcome.matrix.all_labels(), &[vec![2], vec![2], vec![1]]);
        assert_eq!(outcome.matrix.rows(), &[vec![4, 1, 2]]);
    }

    #[test]
    fn test_catalog_games_are_distinct() {
        let games = catalog();
        assert_eq!(games.len(), 4);
        assert_ne!(games[0].1, games[2].1);
    }
}
