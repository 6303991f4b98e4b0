//! Google Scholar Scraper - Entry Point
//!
//! Command-line demo over the four scraper entry points.

use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scholar_scraper::{
    Config, PaperSearchOptions, Scholar, ScholarError,
    formatters,
    models::OutputFormat,
};

#[derive(Parser, Debug)]
#[command(name = "scholar-scraper")]
#[command(about = "Scrape papers, authors and citations from Google Scholar")]
#[command(version)]
struct Cli {
    /// Per-request timeout in seconds
    #[arg(long, env = "SCHOLAR_REQUEST_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Retries on 429/5xx responses
    #[arg(long, default_value = "3", env = "SCHOLAR_MAX_RETRIES")]
    max_retries: u32,

    /// Output format: markdown or json
    #[arg(long, default_value = "markdown")]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search author profiles by name
    Authors {
        /// Author name
        name: String,
        /// Maximum authors to return
        #[arg(long, default_value = "5")]
        max: usize,
    },
    /// Search papers
    Papers {
        /// Free-text query
        query: String,
        /// Maximum papers to return
        #[arg(long, default_value = "10")]
        max: usize,
        /// Also fetch the papers citing each result
        #[arg(long)]
        citations: bool,
        /// Citing papers per result
        #[arg(long, default_value = "5")]
        citations_per_paper: usize,
    },
    /// List papers citing a Scholar cluster id
    Citations {
        /// Scholar paper id (the `cites=` value)
        paper_id: String,
        /// Maximum papers to return
        #[arg(long, default_value = "10")]
        max: usize,
    },
    /// List publications on an author profile
    Publications {
        /// Scholar author id (the `user=` value)
        author_id: String,
        /// Maximum publications to return
        #[arg(long, default_value = "10")]
        max: usize,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Logs go to stderr so results on stdout stay pipeable.
    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(scholar: &Scholar, command: Command, format: OutputFormat) -> Result<String, ScholarError> {
    let output = match command {
        Command::Authors { name, max } => {
            let page = scholar.search_authors(&name, max).await?;
            match format {
                OutputFormat::Markdown => formatters::format_authors_markdown(page.records()),
                OutputFormat::Json => formatters::authors_json(page.records()).to_string(),
            }
        }
        Command::Papers { query, max, citations, citations_per_paper } => {
            let mut options = PaperSearchOptions::new(max);
            if citations {
                options = options.with_citations(citations_per_paper);
            }
            let page = scholar.search_papers(&query, &options).await?;
            match format {
                OutputFormat::Markdown => formatters::format_papers_markdown(page.records()),
                OutputFormat::Json => formatters::papers_json(page.records()).to_string(),
            }
        }
        Command::Citations { paper_id, max } => {
            let page = scholar.get_citing_papers(&paper_id, max).await?;
            match format {
                OutputFormat::Markdown => formatters::format_papers_markdown(page.records()),
                OutputFormat::Json => formatters::papers_json(page.records()).to_string(),
            }
        }
        Command::Publications { author_id, max } => {
            let page = scholar.get_author_publications(&author_id, max).await?;
            match format {
                OutputFormat::Markdown => formatters::format_publications_markdown(page.records()),
                OutputFormat::Json => formatters::publications_json(page.records()).to_string(),
            }
        }
    };

    Ok(output)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        command = ?cli.command,
        "Starting Google Scholar scraper"
    );

    let config = Config::new(cli.timeout.map(Duration::from_secs), cli.max_retries);
    let scholar = Scholar::new(&config)?;

    match run(&scholar, cli.command, cli.format).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Request failed");
            eprintln!("{}", e.to_user_message());
            std::process::exit(1);
        }
    }
}
