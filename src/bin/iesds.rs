//! Single-game elimination binary.
//!
//! Usage:
//!   cargo run --release --bin iesds -- [FILE] [OPTIONS]
//!
//! Reads a game description from FILE (or stdin), reduces it and prints the
//! surviving labels and payoff table in the input layout.
//!
//! Options:
//!   --config <FILE>      Configuration JSON file (optional)
//!   --json               Print a JSON report instead of the table
//!   --no-mixed           Only remove purely dominated actions
//!   --history            Print every removal to stderr
//!   --output <FILE>      Also save the JSON report to FILE

use std::env;
use std::io::{self, Read};
use std::process;

use iesds_solver::format::{parse_game, parse_game_file, render_text, EliminationReport};
use iesds_solver::iesds::{EliminationConfig, Eliminator, IesdsError};

struct Options {
    input_file: Option<String>,
    config_file: Option<String>,
    output_file: Option<String>,
    json: bool,
    no_mixed: bool,
    history: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = match parse_args() {
        Some(options) => options,
        None => return,
    };

    if let Err(e) = run(&options) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), IesdsError> {
    let mut config = match &options.config_file {
        Some(path) => {
            log::info!("loading configuration from {}", path);
            EliminationConfig::from_json_file(path)?
        }
        None => EliminationConfig::default(),
    };
    if options.no_mixed {
        config = config.with_mixed(false);
    }

    let input = match &options.input_file {
        Some(path) => parse_game_file(path, &config)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            parse_game(&text, &config)?
        }
    };

    let config = input.apply_to(config);
    let mut driver = Eliminator::new(input.matrix, config);
    let show_history = options.history;
    driver.run_with_callback(|elimination| {
        if show_history {
            eprintln!("{}", elimination);
        }
    })?;

    let outcome = driver.into_outcome();
    let report = EliminationReport::new(&outcome);
    log::info!("{}", report.summary());

    if options.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", render_text(&outcome.matrix));
    }

    if let Some(path) = &options.output_file {
        report.save_json(path)?;
        log::info!("saved report to {}", path);
    }

    Ok(())
}

fn parse_args() -> Option<Options> {
    let args: Vec<String> = env::args().collect();

    let mut options = Options {
        input_file: None,
        config_file: None,
        output_file: None,
        json: false,
        no_mixed: false,
        history: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                if i < args.len() {
                    options.config_file = Some(args[i].clone());
                }
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    options.output_file = Some(args[i].clone());
                }
            }
            "--json" | "-j" => options.json = true,
            "--no-mixed" => options.no_mixed = true,
            "--history" => options.history = true,
            "--help" | "-h" => {
                print_help();
                return None;
            }
            arg if !arg.starts_with('-') && options.input_file.is_none() => {
                options.input_file = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                process::exit(2);
            }
        }
        i += 1;
    }

    Some(options)
}

fn print_help() {
    println!("Iterated elimination of strictly dominated strategies");
    println!();
    println!("Usage: iesds [FILE] [OPTIONS]");
    println!();
    println!("Reads the game from FILE, or from stdin when no file is given.");
    println!();
    println!("Options:");
    println!("  -c, --config <FILE>      Configuration JSON file");
    println!("  -j, --json               Print a JSON report instead of the table");
    println!("      --no-mixed           Only remove purely dominated actions");
    println!("      --history            Print every removal to stderr");
    println!("  -o, --output <FILE>      Also save the JSON report to FILE");
    println!("  -h, --help               Show this help");
    println!();
    println!("Input format (whitespace separated integers):");
    println!("  flag n k_1 .. k_n payoffs...");
    println!("  flag 1 runs elimination, any other value prints the game unchanged");
    println!();
    println!("Logging goes to stderr; set RUST_LOG=debug to trace every scan.");
}
