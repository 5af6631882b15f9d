//! Rendering of reduced games.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::iesds::{
    Elimination, EliminationOutcome, EliminationStats, GameMatrix, IesdsError, Payoff,
};

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a game as text: the player count, one line of surviving labels
/// per player, then one line per payoff row.
pub fn render_text(matrix: &GameMatrix) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", matrix.num_players()));
    for labels in matrix.all_labels() {
        out.push_str(&join(labels));
        out.push('\n');
    }
    for row in matrix.rows() {
        out.push_str(&join(row));
        out.push('\n');
    }
    out
}

/// Everything worth keeping from a finished run, ready for JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EliminationReport {
    /// Number of players.
    pub players: usize,
    /// Surviving 1-based labels per player.
    pub surviving: Vec<Vec<usize>>,
    /// Reduced payoff rows.
    pub payoffs: Vec<Vec<Payoff>>,
    /// Run statistics.
    pub stats: EliminationStats,
    /// Removals in order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub history: Vec<Elimination>,
}

impl EliminationReport {
    /// Build a report from a finished run.
    pub fn new(outcome: &EliminationOutcome) -> Self {
        Self {
            players: outcome.matrix.num_players(),
            surviving: outcome.matrix.all_labels().to_vec(),
            payoffs: outcome.matrix.rows().to_vec(),
            stats: outcome.stats.clone(),
            history: outcome.history.clone(),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, IesdsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save as JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), IesdsError> {
        let json = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        let surviving = self
            .surviving
            .iter()
            .map(|labels| format!("[{}]", join(labels)))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "{} players, removed {} ({} pure, {} mixed), surviving {}",
            self.players,
            self.stats.removals(),
            self.stats.pure_removals,
            self.stats.mixed_removals,
            surviving
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::input::parse_game;
    use crate::games;
    use crate::iesds::{eliminate, EliminationConfig, Phase};

    #[test]
    fn test_render_prisoners_dilemma() {
        let outcome = eliminate(games::prisoners_dilemma(), EliminationConfig::default()).unwrap();
        assert_eq!(render_text(&outcome.matrix), "2\n2\n2\n1 1\n");
    }

    #[test]
    fn test_skipped_game_renders_input() {
        let text = "0\n3\n2 1 2\n1 2 3 4 5 6\n-1 -2 -3 -4 -5 -6\n";
        let input = parse_game(text, &EliminationConfig::default()).unwrap();
        let config = input.apply_to(EliminationConfig::default());
        let outcome = eliminate(input.matrix, config).unwrap();

        assert_eq!(
            render_text(&outcome.matrix),
            "3\n1 2\n1\n1 2\n1 2 3 4 5 6\n-1 -2 -3 -4 -5 -6\n"
        );
    }

    #[test]
    fn test_report_json() {
        let outcome =
            eliminate(games::mixed_dominance_example(), EliminationConfig::default()).unwrap();
        let report = EliminationReport::new(&outcome);
        assert_eq!(report.surviving, vec![vec![1, 2], vec![1, 2]]);

        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["players"], 2);
        assert_eq!(value["stats"]["mixed_removals"], 1);
        assert_eq!(value["history"][0]["label"], 3);

        let back: EliminationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.history[0].phase, Phase::Mixed);
        assert_eq!(back.payoffs, outcome.matrix.rows());
    }

    #[test]
    fn test_summary() {
        let outcome = eliminate(games::prisoners_dilemma(), EliminationConfig::default()).unwrap();
        let summary = EliminationReport::new(&outcome).summary();
        assert_eq!(summary, "2 players, removed 2 (2 pure, 0 mixed), surviving [2] [2]");
    }
}
