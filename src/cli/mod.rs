use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::selectors::{PartyView, QueueSelectors, VoteLabelSelector};
use crate::store::{Store, snapshot};

#[derive(Parser)]
#[command(name = "votequeue")]
#[command(version = "0.1")]
#[command(about = "Derives the playback queue of a voting party from state snapshots")]
pub struct Cli {
    /// Path to the config TOML file, defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the queue derived from a JSON state snapshot
    Show { file: PathBuf },
    /// Feed a JSON Lines file of snapshots through one pipeline
    Replay { snapshots: PathBuf },
    /// Print the vote label of one track
    Label { file: PathBuf, track: String },
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    init_logging(&cfg);
    log::debug!(
        "Using config version {}, max reference depth {}",
        cfg.version,
        cfg.resolver.max_depth
    );

    match &cli.command {
        Commands::Show { file } => {
            let state = snapshot::load_snapshot(file)
                .with_context(|| format!("Failed to load {}", file.display()))?;
            let mut selectors = QueueSelectors::new(cfg.resolver.max_depth);

            print_view(&selectors.derive(&state));
        }

        Commands::Replay { snapshots } => {
            let states = snapshot::load_snapshots(snapshots)
                .with_context(|| format!("Failed to load {}", snapshots.display()))?;
            let mut store = Store::default();
            let mut selectors = QueueSelectors::new(cfg.resolver.max_depth);

            for (tick, state) in states.into_iter().enumerate() {
                let view = selectors.derive(store.apply(state));
                println!(
                    "#{tick}: {} queued, now playing {}",
                    view.queue.len(),
                    view.current_track_identity.as_deref().unwrap_or("nothing")
                );
            }

            let stats = selectors.stats();
            println!(
                "{} updates, {} results reused, {} recomputed",
                store.updates(),
                stats.hits,
                stats.misses
            );
        }

        Commands::Label { file, track } => {
            let state = snapshot::load_snapshot(file)
                .with_context(|| format!("Failed to load {}", file.display()))?;

            println!("{}", VoteLabelSelector::new().label(&state, track));
        }
    }

    Ok(())
}

fn init_logging(cfg: &Config) {
    let env = env_logger::Env::default().default_filter_or(cfg.logging.filter.as_str());
    if let Err(e) = env_logger::Builder::from_env(env).try_init() {
        eprintln!("Warning: failed to initialize logging: {e}");
    }
}

fn print_view(view: &PartyView) {
    match (&view.current_track_identity, &view.playback_uri) {
        (Some(identity), Some(uri)) => {
            println!("Now playing: {identity} ({uri})");
            if let Some(artists) = &view.artist_line {
                println!("  by {artists}");
            }
            if let Some(name) = view.current_metadata.as_ref().and_then(|m| m.name.as_ref()) {
                println!("  title: {name}");
            }
        }
        _ => println!("Nothing is playing"),
    }

    println!("Queue ({}):", view.entries.len());
    for entry in &view.entries {
        println!("  - {} [{}]", entry.key, entry.vote_label);
    }
}
