//! Gantry CLI tool

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gantry_core::RepositorySelector;
use gantry_query::PageWindow;
use gantry_workspace::{SnapshotHost, WorkspaceSnapshot};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gantry")]
#[command(author, version, about = "Gantry partition metadata CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the workspace snapshot YAML
    #[arg(long, env = "GANTRY_WORKSPACE")]
    workspace: PathBuf,

    /// Repository location name
    #[arg(long)]
    location: String,

    /// Repository name
    #[arg(long)]
    repository: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List partition sets for a pipeline
    PartitionSets {
        /// Pipeline name to filter by
        #[arg(long)]
        pipeline: String,
    },

    /// Look up a partition set by name
    PartitionSet {
        /// Partition set name
        name: String,
    },

    /// List partitions of a partition set
    Partitions {
        /// Partition set name
        #[arg(long)]
        set: String,

        /// Resume after this partition name (before it with --reverse)
        #[arg(long)]
        cursor: Option<String>,

        /// Maximum number of partitions to list
        #[arg(long)]
        limit: Option<usize>,

        /// Anchor the window at the end of the sequence
        #[arg(long)]
        reverse: bool,
    },

    /// Print a partition's run configuration as YAML
    PartitionConfig {
        /// Partition set name
        #[arg(long)]
        set: String,

        /// Partition name
        #[arg(long)]
        partition: String,
    },

    /// Print a partition's visible tags
    PartitionTags {
        /// Partition set name
        #[arg(long)]
        set: String,

        /// Partition name
        #[arg(long)]
        partition: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging; RUST_LOG overrides the default level
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    let snapshot = WorkspaceSnapshot::from_yaml_file(&cli.workspace)?;
    let host = SnapshotHost::new(snapshot);
    let selector = RepositorySelector::new(cli.location, cli.repository);

    match cli.command {
        Commands::PartitionSets { pipeline } => {
            commands::sets::list(&host, &selector, &pipeline).await?;
        }
        Commands::PartitionSet { name } => {
            commands::sets::show(&host, &selector, &name).await?;
        }
        Commands::Partitions {
            set,
            cursor,
            limit,
            reverse,
        } => {
            let window = PageWindow::new(cursor, limit, reverse);
            commands::partitions::list(&host, &selector, &set, &window).await?;
        }
        Commands::PartitionConfig { set, partition } => {
            commands::detail::config(&host, &selector, &set, &partition).await?;
        }
        Commands::PartitionTags { set, partition } => {
            commands::detail::tags(&host, &selector, &set, &partition).await?;
        }
    }

    Ok(())
}
