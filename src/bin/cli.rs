//! Curriculum Standards CLI
//!
//! Local entry point for loading, selecting and generating.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use standards::{
    error::Result,
    models::{Config, GradeBand, SearchQuery},
    pipeline,
};

/// standards - Korean elementary curriculum standards selector
#[derive(Parser, Debug)]
#[command(
    name = "standards",
    version,
    about = "Curriculum standards loader and cross-subject selector"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load both curriculum documents and show the corpus
    Load {
        /// Print the whole corpus as JSON
        #[arg(long)]
        json: bool,
    },

    /// Select standards for a lesson idea
    Select(QueryArgs),

    /// Select standards and generate a lesson scenario from them
    Generate(QueryArgs),

    /// Validate configuration and seed data
    Validate,
}

#[derive(Args, Debug)]
struct QueryArgs {
    /// Grade band: 1-2, 3-4 or 5-6 (default from config)
    #[arg(short, long)]
    band: Option<GradeBand>,

    /// Topic keyword (repeatable)
    #[arg(short, long = "keyword")]
    keywords: Vec<String>,

    /// Lesson idea title
    #[arg(long, default_value = "")]
    title: String,

    /// Lesson idea description
    #[arg(long, default_value = "")]
    description: String,
}

impl QueryArgs {
    fn query(&self) -> SearchQuery {
        SearchQuery {
            keywords: self.keywords.clone(),
            idea_title: self.title.clone(),
            idea_description: self.description.clone(),
        }
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    log::debug!("Configuration from {}", cli.config.display());

    match cli.command {
        Command::Load { json } => {
            pipeline::run_load(&config, json).await?;
        }

        Command::Select(args) => {
            pipeline::run_select(&config, args.band, &args.query()).await?;
        }

        Command::Generate(args) => {
            pipeline::run_generate(&config, args.band, &args.query()).await?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = pipeline::run_validate(&config) {
                log::error!("Validation failed: {}", e);
                return Err(e);
            }
            log::info!("All validations passed!");
        }
    }

    Ok(())
}
