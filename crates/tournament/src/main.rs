//! Tournament CLI
//!
//! Run matches between engines and check move generation.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use baghchal_core::{perft, Engine, GameState, SearchLimits, SearchResult};
use mcts_engine::MctsEngine;
use random_engine::RandomEngine;
use tournament::{MatchConfig, MatchRunner, TournamentResults};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn print_usage() {
    println!("Bagh Chal Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--iterations I] [--config FILE] [--out FILE]");
    println!("  tournament perft <depth>");
    println!("  tournament help");
    println!();
    println!("Engines:");
    println!("  mcts          - Monte Carlo Tree Search, iterations from the config");
    println!("  mcts:N        - Monte Carlo Tree Search with N iterations per move");
    println!("  random        - Uniformly random legal moves");
    println!();
    println!("Examples:");
    println!("  tournament match mcts random --games 20");
    println!("  tournament match mcts:2000 mcts:200 --out results.json");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn create_engine(spec: &str, config: &MatchConfig) -> Result<Box<dyn Engine>> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "mcts" => {
            let mut mcts = config.mcts.clone();
            if let Some(n) = parts.get(1) {
                mcts.iterations = n
                    .parse()
                    .with_context(|| format!("invalid iteration count in {spec:?}"))?;
            }
            Ok(Box::new(FixedBudget::new(MctsEngine::with_config(mcts))))
        }
        "random" => Ok(Box::new(RandomEngine::new())),
        _ => bail!("unknown engine: {spec}"),
    }
}

/// Keeps the engine's own iteration count instead of the match-wide limit.
struct FixedBudget {
    inner: MctsEngine,
    iterations: u32,
}

impl FixedBudget {
    fn new(inner: MctsEngine) -> Self {
        let iterations = inner.config().iterations;
        Self { inner, iterations }
    }
}

impl Engine for FixedBudget {
    fn search(&mut self, state: &GameState, _limits: SearchLimits) -> SearchResult {
        self.inner
            .search(state, SearchLimits::iterations(self.iterations))
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn new_game(&mut self) {
        self.inner.new_game();
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        if !self.inner.set_option(name, value) {
            return false;
        }
        if name == "Iterations" {
            self.iterations = self.inner.config().iterations;
        }
        true
    }
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{flag} needs a value"))
}

fn run_match(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two engine specifications");
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    let mut num_games: Option<u32> = None;
    let mut iterations: Option<u32> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut out_path: Option<PathBuf> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                num_games = Some(flag_value(args, i, "--games")?.parse()?);
                i += 1;
            }
            "--iterations" | "-i" => {
                iterations = Some(flag_value(args, i, "--iterations")?.parse()?);
                i += 1;
            }
            "--config" | "-c" => {
                config_path = Some(flag_value(args, i, "--config")?.into());
                i += 1;
            }
            "--out" | "-o" => {
                out_path = Some(flag_value(args, i, "--out")?.into());
                i += 1;
            }
            other => bail!("unknown option: {other}"),
        }
        i += 1;
    }

    let mut config = match &config_path {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    if let Some(n) = num_games {
        config.num_games = n;
    }
    if let Some(n) = iterations {
        config.mcts.iterations = n;
    }

    info!(
        engine1 = %engine1_spec,
        engine2 = %engine2_spec,
        games = config.num_games,
        iterations = config.mcts.iterations,
        "Starting match"
    );

    let mut engine1 = create_engine(engine1_spec, &config)?;
    let mut engine2 = create_engine(engine2_spec, &config)?;

    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut())?;

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!(
        "Tigers won {}, goats won {}, {} adjudicated",
        result.tiger_wins, result.goat_wins, result.adjudicated
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut results = TournamentResults::new(
        &format!("{engine1_spec} vs {engine2_spec}"),
        vec![engine1_spec.clone(), engine2_spec.clone()],
        config,
    );
    results.add_match(engine1_spec, engine2_spec, result);
    results.print_report();

    if let Some(path) = out_path {
        results
            .save(&path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        info!(path = %path.display(), "Results saved");
    }

    Ok(())
}

fn run_perft(args: &[String]) -> Result<()> {
    let depth: u8 = args
        .first()
        .context("perft requires a depth")?
        .parse()
        .context("depth must be a number")?;

    let state = GameState::new();
    for d in 1..=depth {
        println!("perft({d}) = {}", perft(&state, d));
    }
    Ok(())
}


fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "perft" => run_perft(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}
