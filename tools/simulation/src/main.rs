//! Command-line front end for the market simulator.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use market_sim::config::{MarketConfig, SetupParams};
use market_sim::engine::{HumanOrders, Session};
use market_sim::export;
use market_sim::metrics::SessionMetrics;
use market_sim::replay::{self, Recorder};
use market_sim::reports::{breakdown, leaderboard};
use market_sim::scenarios::calm::{self, CalmConfig};
use market_sim::scenarios::rumour::{self, RumourConfig};
use market_sim::scenarios::ScenarioResult;
use market_sim::script;

/// Human vs algorithm classroom market simulator.
#[derive(Parser)]
#[command(name = "market-sim")]
#[command(about = "Round-based human vs algorithm market simulator", long_about = None)]
struct Cli {
    /// Market config file (JSON); defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a market and run rounds
    Run {
        #[command(flatten)]
        setup: SetupArgs,

        /// JSON file with human orders, one object per round
        #[arg(long)]
        script: Option<PathBuf>,

        /// All-hold rounds to run when no script is given
        #[arg(short, long, default_value = "5")]
        rounds: u64,

        /// Write the full session export (JSON) here
        #[arg(long)]
        export: Option<PathBuf>,

        /// Write the replayable session log (JSON) here
        #[arg(long)]
        session_log: Option<PathBuf>,
    },

    /// Run a scripted classroom scenario
    Scenario {
        #[command(flatten)]
        setup: SetupArgs,

        #[arg(value_enum)]
        kind: ScenarioKind,
    },

    /// Replay a session log and check it reproduces the recorded final state
    Replay {
        /// Session log written by `run --session-log`
        log: PathBuf,
    },
}

#[derive(clap::Args)]
struct SetupArgs {
    /// Number of human traders
    #[arg(long, default_value = "10")]
    humans: usize,

    /// Number of algorithmic traders
    #[arg(long, default_value = "5")]
    algos: usize,

    /// Seed for strategy assignment
    #[arg(short, long, default_value = "42")]
    seed: u64,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScenarioKind {
    Calm,
    Rumour,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            setup,
            script: script_path,
            rounds,
            export: export_path,
            session_log,
        } => {
            SetupParams::new(setup.humans, setup.algos).validate(&config)?;

            let rounds: Vec<HumanOrders> = match script_path {
                Some(path) => {
                    let json = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading script {}", path.display()))?;
                    script::parse(&json, &config)?
                }
                None => (0..rounds).map(|_| HumanOrders::new()).collect(),
            };

            let mut recorder = Recorder::start(config, setup.humans, setup.algos, setup.seed);
            for (i, orders) in rounds.iter().enumerate() {
                recorder
                    .session()
                    .validate_orders(orders)
                    .with_context(|| format!("script round {}", i + 1))?;
            }

            for orders in rounds {
                recorder.run_round(orders);
            }

            let (session, log) = recorder.into_parts();
            print_session(&session);

            if let Some(path) = export_path {
                export::write_to_file(&export::build_export(&session), &path)
                    .with_context(|| format!("writing export {}", path.display()))?;
                info!(path = %path.display(), "Export written");
            }
            if let Some(path) = session_log {
                std::fs::write(&path, replay::export_log(&log)?)
                    .with_context(|| format!("writing session log {}", path.display()))?;
                info!(path = %path.display(), "Session log written");
            }
        }

        Commands::Scenario { setup, kind } => {
            let params = SetupParams::new(setup.humans, setup.algos);
            let mut session = Session::setup(config, params, setup.seed)?;

            let result = match kind {
                ScenarioKind::Calm => calm::run(&mut session, &CalmConfig::default()),
                ScenarioKind::Rumour => rumour::run(&mut session, &RumourConfig::default()),
            };
            print_scenario(&result);
            print_session(&session);
        }

        Commands::Replay { log } => {
            let json = std::fs::read_to_string(&log)
                .with_context(|| format!("reading session log {}", log.display()))?;
            let session_log = replay::import_log(&json)?;

            let session = replay::replay(&session_log)
                .with_context(|| format!("replaying session log {}", log.display()))?;
            let outcome = match replay::verify_recorded(&session_log)? {
                Some(validation) if validation.matches => "matches recorded final state",
                Some(_) => "DIVERGED from recorded final state",
                None => "no recorded final state to compare against",
            };
            println!("Replayed {} rounds: {}", session_log.rounds.len(), outcome);
            print_session(&session);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<MarketConfig> {
    let config = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            MarketConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => MarketConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn print_session(session: &Session) {
    let status = session.status();
    println!("\nMarket Status");
    println!("  Price:   {}", status.price.round_dp(2));
    println!("  Round:   {}", status.round);
    println!("  Traders: {}", status.trader_count);

    if !session.history().is_empty() {
        println!("\n{:>6} {:>10} {:>8} {:>8}", "ROUND", "PRICE", "BOUGHT", "SOLD");
        println!("{}", "-".repeat(35));
        for record in session.history().records() {
            println!(
                "{:>6} {:>10} {:>8} {:>8}",
                record.round,
                record.price.round_dp(2),
                record.buy_volume,
                record.sell_volume
            );
        }
    }

    let metrics = SessionMetrics::from_history(session.config().initial_price, session.history());
    println!("\n{}", metrics.summary());

    println!("\nLeaderboard");
    print!("{}", leaderboard::build(session.traders()).to_table());

    println!("\nBy trader type");
    for kind in breakdown::analyze(session.traders()).kinds {
        println!(
            "  {:<9} n={:<4} total PnL {:>12}  mean PnL {:>10}  shares {}",
            kind.kind, kind.traders, kind.total_pnl, kind.mean_pnl, kind.total_shares
        );
    }
}

fn print_scenario(result: &ScenarioResult) {
    println!("\nScenario: {}", result.name);
    println!("  {}", result.details);
    println!("  Max drawdown: {}%", (result.max_drawdown * rust_decimal::Decimal::from(100)).round_dp(2));
    println!("  Invariants:   {}", if result.passed { "ok" } else { "VIOLATED" });
}
