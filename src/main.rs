//! Entity linker CLI entrypoint.
//!
//! ```text
//! linker [--force-refresh] resolve <mention>...
//! linker [--force-refresh] batch <input_dir> <output_dir>
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use linker::batch::run_batch;
use linker::config::Config;
use linker::service::EntityResolutionService;
use linker::transport::HttpTransport;

#[derive(Parser)]
#[command(name = "linker")]
#[command(about = "Link entity mentions to validated Wikidata identifiers")]
struct Cli {
    /// Ignore cached records and resolve afresh (overrides LINKER_FORCE_REFRESH)
    #[arg(long, global = true)]
    force_refresh: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve mentions and print `mention<TAB>identifier` per line
    Resolve {
        /// Raw mention texts
        #[arg(required = true)]
        mentions: Vec<String>,
    },

    /// Annotate every keyword document in a directory
    Batch {
        /// Directory of input `*.json` documents
        input: PathBuf,
        /// Directory the annotated documents are written to
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;
    let force_refresh = cli.force_refresh || config.force_refresh;

    tracing::info!(
        endpoint = %config.sparql_endpoint,
        cache_path = %config.cache_path.display(),
        force_refresh,
        "Entity linker starting"
    );

    let transport = HttpTransport::from_config(&config).context("building HTTP transport")?;
    let service = EntityResolutionService::from_config(Arc::new(transport), &config)?;

    match cli.command {
        Command::Resolve { mentions } => {
            for mention in mentions {
                let outcome = service.resolve_entity(&mention, force_refresh)?;
                tracing::debug!(mention = %mention, source = %outcome.source, "Resolved");
                println!("{}\t{}", mention, outcome.identifier);
            }
        }
        Command::Batch { input, output } => {
            let report = run_batch(&input, &output, &service, force_refresh)?;
            tracing::info!(report = %report, "Batch finished");
        }
    }

    Ok(())
}
