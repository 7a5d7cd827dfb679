//! scholar-page
//!
//! Generator for a personal academic homepage. Fetches the owner's
//! publication list from the Semantic Scholar Graph API, reconciles
//! preprint/published duplicates, and emits HTML fragments; also renders the
//! site's hand-written content files (research, talks, cv) through a small
//! block grammar.
//!
//! # Example
//!
//! ```no_run
//! use scholar_page::{ScholarClient, config::{Config, SiteConfig}, pipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ScholarClient::new(&Config::new())?;
//!     let site = SiteConfig::site_default();
//!     let fragment = pipeline::build_publications_html(&client, &site).await;
//!     println!("{fragment}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod formatters;
pub mod models;
pub mod pipeline;
pub mod walk;

pub use client::ScholarClient;
pub use config::{Config, SiteConfig};
pub use error::{ClientError, ClientResult};
pub use models::{Paper, Publication};
