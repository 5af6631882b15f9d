//! Batch elimination binary.
//!
//! Reduces many independent game files in parallel and writes a JSON summary.
//!
//! Usage:
//!   cargo run --release --bin iesds_batch -- FILE... [--output FILE] [--no-mixed]

use std::env;
use std::fs::File;
use std::io::Write;
use std::process;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use iesds_solver::format::{parse_game_file, EliminationReport};
use iesds_solver::iesds::{eliminate, EliminationConfig, IesdsError};

/// Result for one game file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GameResult {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<EliminationReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BatchSummary {
    games: usize,
    failed: usize,
    total_removals: usize,
    elapsed_secs: f64,
    results: Vec<GameResult>,
}

fn solve_file(path: &str, config: &EliminationConfig) -> Result<EliminationReport, IesdsError> {
    let input = parse_game_file(path, config)?;
    let outcome = eliminate(input.matrix.clone(), input.apply_to(config.clone()))?;
    Ok(EliminationReport::new(&outcome))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut files = Vec::new();
    let mut output_file = "iesds_batch.json".to_string();
    let mut config = EliminationConfig::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output_file = args[i].clone();
                }
            }
            "--no-mixed" => config = config.with_mixed(false),
            "--help" | "-h" => {
                println!("Usage: iesds_batch FILE... [--output FILE] [--no-mixed]");
                return;
            }
            path => files.push(path.to_string()),
        }
        i += 1;
    }

    if files.is_empty() {
        eprintln!("No game files given");
        process::exit(2);
    }

    println!("=== IESDS Batch ===");
    println!("Games: {}\n", files.len());

    let start = Instant::now();
    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let results: Vec<GameResult> = files
        .par_iter()
        .map(|path| {
            let result = match solve_file(path, &config) {
                Ok(report) => GameResult {
                    path: path.clone(),
                    report: Some(report),
                    error: None,
                },
                Err(e) => {
                    log::warn!("{}: {}", path, e);
                    GameResult {
                        path: path.clone(),
                        report: None,
                        error: Some(e.to_string()),
                    }
                }
            };
            progress.inc(1);
            result
        })
        .collect();

    progress.finish_with_message("done");

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    let total_removals = results
        .iter()
        .filter_map(|r| r.report.as_ref())
        .map(|report| report.stats.removals())
        .sum();

    println!("\n=== Summary ===");
    for result in &results {
        match (&result.report, &result.error) {
            (Some(report), _) => println!("{}: {}", result.path, report.summary()),
            (None, Some(error)) => println!("{}: FAILED {}", result.path, error),
            (None, None) => {}
        }
    }
    println!(
        "Solved: {} | Failed: {} | Removals: {}",
        results.len() - failed,
        failed,
        total_removals
    );

    let summary = BatchSummary {
        games: results.len(),
        failed,
        total_removals,
        elapsed_secs: start.elapsed().as_secs_f64(),
        results,
    };

    let written = serde_json::to_string_pretty(&summary)
        .map_err(|e| e.to_string())
        .and_then(|json| {
            File::create(&output_file)
                .and_then(|mut f| f.write_all(json.as_bytes()))
                .map_err(|e| e.to_string())
        });
    match written {
        Ok(_) => println!("Saved JSON: {}", output_file),
        Err(e) => eprintln!("Error saving JSON: {}", e),
    }

    if failed > 0 {
        process::exit(1);
    }
}
