mod artifact;
mod collect;
mod pipeline;
mod summary;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "trendscope")]
#[command(about = "Collect and enrich YouTube trending charts across regions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch trending videos per region and write the raw artifact
    Collect {
        #[command(flatten)]
        source: SourceArgs,

        /// Raw artifact path (overrides TRENDSCOPE_RAW_PATH)
        #[arg(long)]
        raw: Option<String>,
    },
    /// Enrich the raw artifact into the processed and summary artifacts
    Transform {
        /// Raw artifact path (overrides TRENDSCOPE_RAW_PATH)
        #[arg(long)]
        raw: Option<String>,

        /// Processed artifact path (overrides TRENDSCOPE_PROCESSED_PATH)
        #[arg(long)]
        out: Option<String>,
    },
    /// Collect then transform in one pass
    Run {
        #[command(flatten)]
        source: SourceArgs,

        /// Raw artifact path (overrides TRENDSCOPE_RAW_PATH)
        #[arg(long)]
        raw: Option<String>,

        /// Processed artifact path (overrides TRENDSCOPE_PROCESSED_PATH)
        #[arg(long)]
        out: Option<String>,

        /// Resolve category names through the provider's category list
        /// before falling back to the built-in table
        #[arg(long)]
        fetch_categories: bool,
    },
}

/// Flags shared by the commands that talk to the provider.
#[derive(Debug, Args)]
struct SourceArgs {
    /// Comma-separated region codes, e.g. `US,GB,JP` (overrides TRENDSCOPE_REGIONS)
    #[arg(long)]
    regions: Option<String>,

    /// Provider API key (overrides YOUTUBE_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = trendscope_core::load_app_config_from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Collect { source, raw } => {
            let overrides = pipeline::Overrides {
                regions: source.regions,
                api_key: source.api_key,
                raw,
                out: None,
            };
            pipeline::apply_overrides(&mut config, overrides)?;
            tracing::info!(env = %config.env, regions = config.regions.len(), "starting collect");
            pipeline::run_collect(&config).await?;
        }
        Commands::Transform { raw, out } => {
            let overrides = pipeline::Overrides {
                raw,
                out,
                ..pipeline::Overrides::default()
            };
            pipeline::apply_overrides(&mut config, overrides)?;
            tracing::info!(env = %config.env, raw = %config.raw_path.display(), "starting transform");
            pipeline::run_transform(&config)?;
        }
        Commands::Run {
            source,
            raw,
            out,
            fetch_categories,
        } => {
            let overrides = pipeline::Overrides {
                regions: source.regions,
                api_key: source.api_key,
                raw,
                out,
            };
            pipeline::apply_overrides(&mut config, overrides)?;
            tracing::info!(env = %config.env, regions = config.regions.len(), "starting run");
            pipeline::run_all(&config, fetch_categories).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
