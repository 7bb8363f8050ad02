use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing::error;

use tool_polisher::config::Config;
use tool_polisher::error::Result;
use tool_polisher::logging;
use tool_polisher::pipeline::liveness::ReqwestProber;
use tool_polisher::pipeline::{schema, Pipeline};
use tool_polisher::source;

#[derive(Parser)]
#[command(name = "tool_polisher")]
#[command(about = "Internal tool catalog cleanup and enrichment pipeline")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: reconcile, validate, enrich, categorize, summarize
    Run {
        /// Source spreadsheet (.xlsx/.xls); discovered in . and data/ when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Override the cleaned catalog output path
        #[arg(long)]
        cleaned: Option<String>,
        /// Override the summary output path
        #[arg(long)]
        summary: Option<String>,
    },
    /// Show how source headers reconcile against the canonical schema
    Headers {
        /// Source spreadsheet (.xlsx/.xls); discovered in . and data/ when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    if let Err(e) = execute(cli).await {
        error!("run failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run { input, cleaned, summary } => {
            let mut config = Config::load()?;
            if let Some(path) = cleaned {
                config.cleaned_output = path;
            }
            if let Some(path) = summary {
                config.summary_output = path;
            }

            let input = match input {
                Some(path) => path,
                None => source::discover_input()?,
            };

            let prober = ReqwestProber::new(Duration::from_secs(config.probe_timeout_seconds))?;
            let pipeline = Pipeline::new(&config, &prober);
            let result = pipeline.run(&input).await?;

            println!("\n📊 Pipeline results:");
            println!("   Rows loaded: {}", result.total_rows);
            println!("   Live tools: {}", result.live_entries);
            println!("   Dropped: {}", result.dropped_entries);
            println!("   Cleaned catalog: {}", result.cleaned_output);
            println!("   Summary: {}", result.summary_output);
            for row in &result.summary {
                println!("   {:<20} {}", row.category, row.tool_count);
            }
        }
        Commands::Headers { input } => {
            let input = match input {
                Some(path) => path,
                None => source::discover_input()?,
            };
            let table = source::read_spreadsheet(&input)?;
            println!("Original columns: {:?}", table.headers);

            let map = schema::reconcile(&table.headers)?;
            println!("All required columns resolved: {:?}", schema::REQUIRED_COLUMNS);
            for (from, to) in &map.applied_aliases {
                println!("   Mapped '{}' -> '{}'", from, to);
            }
        }
    }
    Ok(())
}
