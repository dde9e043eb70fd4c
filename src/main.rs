// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Questgraph CLI entrypoint.
//!
//! Every command reads a quest file, runs one query and prints pretty JSON on stdout.
//! Diagnostics go to stderr; set `RUST_LOG` or pass `-v`/`-vv` to see them.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use questgraph::layout::{layout_quests, LayoutConfig, QuestLayout};
use questgraph::model::{PlayerProgress, Quest, QuestSnapshot};
use questgraph::query::{
    classify, cycles, enumerate_chains, filter_chains, longest_chain, longest_chains_by_trader,
    ClassifyOptions, TraderChain, TraderRequirementPolicy,
};
use questgraph::store::{load_progress, load_quests};

#[derive(Debug, Parser)]
#[command(name = "questgraph")]
#[command(about = "Quest prerequisite chains, availability and trader band layout")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Layout config file (TOML); defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Enumerate every root-to-leaf chain
    Chains {
        quests: PathBuf,
        /// Only keep chains starting with these ids, in order
        #[arg(long, num_args = 1..)]
        prefix: Vec<String>,
    },
    /// Longest chain of every trader
    Longest {
        quests: PathBuf,
        /// Only report this trader
        #[arg(long)]
        trader: Option<String>,
    },
    /// Split quests into available, locked and completed
    Classify {
        quests: PathBuf,
        /// JSON array of completed quest ids
        #[arg(long)]
        progress: Option<PathBuf>,
        /// Player level
        #[arg(long, default_value_t = 1)]
        level: u32,
        /// Treat quests with trader requirements as locked
        #[arg(long)]
        lock_trader_requirements: bool,
        /// Only report this trader
        #[arg(long)]
        trader: Option<String>,
        /// Only report quests required for Kappa
        #[arg(long)]
        kappa: bool,
    },
    /// Trader band layout of the quest map
    Layout { quests: PathBuf },
    /// Report prerequisite cycles
    Cycles { quests: PathBuf },
    /// JSON schema of the layout output
    Schema,
    /// Print the default layout config as TOML
    DefaultConfig,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("unknown trader {0:?}")]
    UnknownTrader(String),
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into()),
        1 => "questgraph=debug".into(),
        _ => "questgraph=trace".into(),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<LayoutConfig, Box<dyn Error>> {
    match path {
        Some(path) => Ok(LayoutConfig::load(path)?),
        None => Ok(LayoutConfig::default()),
    }
}

fn print_json(value: &impl Serialize) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn quest_ids(quests: &[&Quest]) -> Vec<String> {
    quests.iter().map(|quest| quest.id().to_string()).collect()
}

fn trader_quests<'a>(
    snapshot: &'a QuestSnapshot,
    trader: &str,
) -> Result<Vec<&'a Quest>, CliError> {
    let quests = snapshot.quests().iter().filter(|q| q.trader() == trader).collect::<Vec<_>>();
    if quests.is_empty() {
        return Err(CliError::UnknownTrader(trader.to_owned()));
    }
    Ok(quests)
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Chains { quests, prefix } => {
            let snapshot = load_quests(quests)?;
            let chains = enumerate_chains(snapshot.quests());
            let chains = if prefix.is_empty() { chains } else { filter_chains(&chains, &prefix) };
            print_json(&chains)
        }
        Command::Longest { quests, trader } => {
            let snapshot = load_quests(quests)?;
            let chains = match trader {
                Some(trader) => {
                    let chain = longest_chain(trader_quests(&snapshot, &trader)?);
                    vec![TraderChain { trader, chain }]
                }
                None => longest_chains_by_trader(snapshot.quests()),
            };
            print_json(&chains)
        }
        Command::Classify { quests, progress, level, lock_trader_requirements, trader, kappa } => {
            let snapshot = load_quests(quests)?;
            let completed = match progress {
                Some(path) => load_progress(path)?,
                None => Vec::new(),
            };
            let progress = PlayerProgress::new(level, completed);
            let options = ClassifyOptions {
                trader_requirements: if lock_trader_requirements {
                    TraderRequirementPolicy::Lock
                } else {
                    TraderRequirementPolicy::Ignore
                },
            };

            let mut result = classify(snapshot.quests(), &progress, options);
            if let Some(trader) = trader.as_deref() {
                trader_quests(&snapshot, trader)?;
                result = result.for_trader(trader);
            }
            if kappa {
                result = result.kappa_only();
            }

            print_json(&json!({
                "counts": result.counts(),
                "available": quest_ids(&result.available),
                "locked": quest_ids(&result.locked),
                "completed": quest_ids(&result.completed),
            }))
        }
        Command::Layout { quests } => {
            let config = load_config(cli.config.as_deref())?;
            let snapshot = load_quests(quests)?;
            print_json(&layout_quests(snapshot.quests(), &config))
        }
        Command::Cycles { quests } => {
            let snapshot = load_quests(quests)?;
            let found = cycles(snapshot.quests());
            if !found.is_empty() {
                tracing::warn!(components = found.len(), "prerequisite cycles found");
            }
            print_json(&found)
        }
        Command::Schema => print_json(&schemars::schema_for!(QuestLayout)),
        Command::DefaultConfig => {
            print!("{}", LayoutConfig::default().to_toml()?);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}
