//! Tournament CLI
//!
//! Play matches between checkers players.

use alphabeta_engine::{AgentConfig, AlphaBetaPlayer};
use checkers_core::{Color, Player, Position};
use random_engine::RandomPlayer;
use std::env;
use std::process::ExitCode;
use tournament::{MatchConfig, MatchReport, MatchRunner};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Checkers Match Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <player1> <player2> [--games N] [--config FILE] [--json]");
    println!();
    println!("Players:");
    println!("  alphabeta     - Iterative-deepening alpha-beta on a round clock");
    println!("  random        - Uniformly random legal move");
    println!();
    println!("Logging is controlled by RUST_LOG (default: info).");
    println!();
    println!("Examples:");
    println!("  tournament match alphabeta random --games 20");
    println!("  tournament match alphabeta alphabeta --config match.toml --json");
}

fn create_player(name: &str, color: Color, agent: &AgentConfig) -> Box<dyn Player> {
    match name.to_lowercase().as_str() {
        "alphabeta" | "ab" => match AlphaBetaPlayer::<Position>::new(color, agent.clone()) {
            Ok(player) => Box::new(player),
            Err(e) => {
                // Config is validated before the match starts.
                error!(%e, "invalid agent config, using random player");
                Box::new(RandomPlayer::new())
            }
        },
        "random" | "rand" => Box::new(RandomPlayer::new()),
        _ => {
            eprintln!("Unknown player: {}, using random", name);
            Box::new(RandomPlayer::new())
        }
    }
}

fn run_match(args: &[String]) -> ExitCode {
    if args.len() < 2 {
        eprintln!("Error: match requires two player names");
        print_usage();
        return ExitCode::FAILURE;
    }

    let player1_spec = args[0].clone();
    let player2_spec = args[1].clone();

    // Parse optional arguments
    let mut num_games: Option<u32> = None;
    let mut config_path: Option<String> = None;
    let mut json = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse() {
                        Ok(n) => num_games = Some(n),
                        Err(_) => {
                            eprintln!("Error: invalid game count: {}", args[i + 1]);
                            return ExitCode::FAILURE;
                        }
                    }
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--json" => json = true,
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    let mut config = match &config_path {
        Some(path) => match MatchConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => MatchConfig::default(),
    };
    if let Some(n) = num_games {
        config.num_games = n;
    }
    if let Err(e) = config.agent.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    if !json {
        println!("=== Match: {} vs {} ===", player1_spec, player2_spec);
        println!(
            "Games: {}, Clock: {} turns per {:.2}s",
            config.num_games, config.agent.turns_per_round, config.agent.time_per_round
        );
        println!();
    }

    let agent = config.agent.clone();
    let factory1 = |color: Color| create_player(&player1_spec, color, &agent);
    let factory2 = |color: Color| create_player(&player2_spec, color, &agent);

    let runner = MatchRunner::new(config);
    let (result, player1_stats, player2_stats) = runner.run_match(&factory1, &factory2);

    let report = MatchReport {
        player1: player1_spec.clone(),
        player2: player2_spec.clone(),
        result,
        player1_stats,
        player2_stats,
    };

    if json {
        match report.to_json() {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error: failed to serialize report: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!();
        report.print_report();
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            ExitCode::FAILURE
        }
    }
}
