//! scholar-page - Entry point
//!
//! Renders the homepage's HTML fragments: the reconciled publication list
//! from the Semantic Scholar API and the three hand-written content files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scholar_page::config::{Config, SiteConfig};
use scholar_page::content::ContentKind;
use scholar_page::{ScholarClient, pipeline};

#[derive(Parser, Debug)]
#[command(name = "scholar-page")]
#[command(about = "HTML fragment generator for a personal academic homepage")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and reconcile the publication list, emitting its HTML fragment
    Publications {
        /// Semantic Scholar author ID
        #[arg(long, env = "SCHOLAR_AUTHOR_ID")]
        author_id: Option<String>,

        /// Write the fragment here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Render one content file to its HTML fragment
    Content {
        /// Which document the file holds
        #[arg(long, value_enum)]
        kind: ContentKind,

        /// Path to the content file
        file: PathBuf,

        /// Write the fragment here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Render all content files plus the publication list into a directory
    Build {
        /// Directory holding research.md, talks.md, cv.md
        #[arg(long, default_value = "content")]
        content_dir: PathBuf,

        /// Output directory for the fragments
        #[arg(long, default_value = "dist")]
        out_dir: PathBuf,

        /// Semantic Scholar author ID
        #[arg(long, env = "SCHOLAR_AUTHOR_ID")]
        author_id: Option<String>,
    },
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
}

fn site_config(author_id: Option<String>) -> SiteConfig {
    let mut site = SiteConfig::site_default();
    if let Some(id) = author_id {
        site.author_id = id;
    }
    site
}

fn emit(fragment: &str, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => fs::write(path, fragment)
            .with_context(|| format!("writing fragment to {}", path.display()))?,
        None => println!("{fragment}"),
    }
    Ok(())
}

fn render_content_file(kind: ContentKind, file: &Path) -> anyhow::Result<String> {
    let text =
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    Ok(kind.render(&text))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Command::Publications { author_id, out } => {
            let site = site_config(author_id);
            let client = ScholarClient::new(&Config::new())?;
            let fragment = pipeline::build_publications_html(&client, &site).await;
            emit(&fragment, out.as_deref())?;
        }

        Command::Content { kind, file, out } => {
            let fragment = render_content_file(kind, &file)?;
            emit(&fragment, out.as_deref())?;
        }

        Command::Build { content_dir, out_dir, author_id } => {
            fs::create_dir_all(&out_dir)
                .with_context(|| format!("creating {}", out_dir.display()))?;

            for kind in [ContentKind::Research, ContentKind::Talks, ContentKind::Cv] {
                let source = content_dir.join(kind.file_name());
                let fragment = render_content_file(kind, &source)?;
                let target = out_dir.join(Path::new(kind.file_name()).with_extension("html"));
                emit(&fragment, Some(&target))?;
                tracing::info!(file = %target.display(), "wrote content fragment");
            }

            let site = site_config(author_id);
            let client = ScholarClient::new(&Config::new())?;
            let fragment = pipeline::build_publications_html(&client, &site).await;
            let target = out_dir.join("publications.html");
            emit(&fragment, Some(&target))?;
            tracing::info!(file = %target.display(), "wrote publications fragment");
        }
    }

    Ok(())
}
