mod classify;
mod config;
mod error;
mod extract;
mod fetch;
mod normalize;
mod page;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use config::{Options, Section};
use error::PipelineError;
use fetch::{HttpImageEncoder, ImageEncoder};
use normalize::PersonalityRecord;
use page::PageDoc;

#[derive(Parser)]
#[command(
    name = "personality_scraper",
    about = "16personalities results page scraper"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a results page and print the extracted profile as JSON
    Run {
        /// Results page URL, e.g. https://www.16personalities.com/profiles/<id>
        #[arg(short, long)]
        url: Option<String>,
        /// Convert trait percentages to fractional scores
        #[arg(long)]
        scores: bool,
        /// Sections to include (default: all)
        #[arg(long, value_enum, value_delimiter = ',')]
        sections: Vec<Section>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Extract a profile from a saved results page
    Extract {
        /// Path to a saved results page
        #[arg(short, long)]
        file: PathBuf,
        /// Convert trait percentages to fractional scores
        #[arg(long)]
        scores: bool,
        /// Sections to include (default: all)
        #[arg(long, value_enum, value_delimiter = ',')]
        sections: Vec<Section>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the temperament group and accent color for a type label
    Classify {
        /// Type label, e.g. "Logician (INTP-A)"
        label: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            url,
            scores,
            sections,
            pretty,
        } => {
            let options = build_options(url, scores, sections);
            let url = options.validated_url()?.to_string();
            let html = fetch::fetch_page(&url).await?;
            let encoder: Arc<dyn ImageEncoder> = Arc::new(HttpImageEncoder::new());
            let record = run_pipeline(&html, &options, encoder).await?;
            print_record(&record, pretty)?;
        }
        Commands::Extract {
            file,
            scores,
            sections,
            pretty,
        } => {
            let html = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let options = build_options(None, scores, sections);
            let encoder: Arc<dyn ImageEncoder> = Arc::new(HttpImageEncoder::new());
            let record = run_pipeline(&html, &options, encoder).await?;
            print_record(&record, pretty)?;
        }
        Commands::Classify { label } => {
            let group = classify::classify(&label);
            println!("{} {}", group.name(), group.accent_color());
        }
    }

    Ok(())
}

fn build_options(url: Option<String>, scores: bool, sections: Vec<Section>) -> Options {
    let mut options = Options {
        url,
        scores,
        ..Options::default()
    };
    // An empty --sections list means "everything", like the default
    if !sections.is_empty() {
        options.sections = sections;
    }
    options
}

/// Extract and normalize one already-loaded results page. Sections the host
/// did not request are dropped before normalization, so no image embedding
/// runs for them.
async fn run_pipeline(
    html: &str,
    options: &Options,
    encoder: Arc<dyn ImageEncoder>,
) -> Result<PersonalityRecord, PipelineError> {
    let mut bundle = {
        let doc = PageDoc::parse(html);
        extract::extract(&doc)
    };
    if !options.wants(Section::Personality) {
        bundle.cards.clear();
    }
    if !options.wants(Section::Traits) {
        bundle.traits.clear();
    }
    normalize::normalize(bundle, options, encoder).await
}

fn print_record(record: &PersonalityRecord, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(record)?
    } else {
        serde_json::to_string(record)?
    };
    println!("{}", json);
    Ok(())
}
