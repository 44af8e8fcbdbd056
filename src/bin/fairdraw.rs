//! `fairdraw`: recompute and audit giveaway draws from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fairdraw::config::GiveawayConfig;
use fairdraw::hash::sha256;
use fairdraw::{ParticipantPool, Seed, draw, verify_winners};

#[derive(Parser)]
#[command(name = "fairdraw", version, about = "Provably fair giveaway draws from block hashes")]
struct Cli {
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the SHA-256 digest of a string.
    Hash { text: String },

    /// Draw winners and print them, one per line.
    Draw {
        #[command(flatten)]
        input: DrawInput,

        /// Print the full audit transcript as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Recompute a draw and check a published list of winners.
    Verify {
        #[command(flatten)]
        input: DrawInput,

        /// Claimed winners, in draw order.
        #[arg(long = "winner", required = true)]
        claimed: Vec<String>,
    },
}

#[derive(Args)]
struct DrawInput {
    /// Giveaway description (JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Revealed block hash. Overrides the seed in the config.
    #[arg(long)]
    seed: Option<String>,

    /// Number of winners. Overrides the count in the config.
    #[arg(long)]
    winners: Option<usize>,

    /// Participants in registration order, when no config is given.
    participants: Vec<String>,
}

impl DrawInput {
    fn resolve(&self) -> Result<(Seed, ParticipantPool<String>, usize)> {
        match &self.config {
            Some(path) => {
                if !self.participants.is_empty() {
                    bail!("participants come from --config; drop the positional list");
                }

                let mut cfg = GiveawayConfig::from_path(path)?;
                if let Some(winners) = self.winners {
                    cfg.winners = winners;
                }

                let (seed, pool) = cfg.resolve(self.seed.as_deref())?;
                Ok((seed, pool, cfg.winners))
            }
            None => {
                let raw = self.seed.as_deref().context("--seed is required without --config")?;
                let seed = Seed::parse(raw)?;
                let pool = ParticipantPool::from_vec(self.participants.clone())?;

                Ok((seed, pool, self.winners.unwrap_or(1)))
            }
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Command::Hash { text } => {
            println!("{}", sha256(text.as_bytes()));
        }
        Command::Draw { input, json } => {
            let (seed, pool, winners) = input.resolve()?;
            debug!(participants = pool.len(), winners, "resolved draw input");

            let outcome = draw(&seed, &pool, winners)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                for winner in &outcome.winners {
                    println!("{}", winner);
                }
            }
        }
        Command::Verify { input, claimed } => {
            let (seed, pool, _) = input.resolve()?;

            if verify_winners(&seed, &pool, &claimed)? {
                println!("ok: winners match seed {}", seed);
            } else {
                let expected = draw(&seed, &pool, claimed.len())?.winners;
                bail!("winners do not match; expected {}", expected.join(", "));
            }
        }
    }

    Ok(())
}
