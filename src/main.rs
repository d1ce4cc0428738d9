//! # order-views
//!
//! Command-line host for the order pages.
//!
//! - `list` renders the order list once and writes the page.
//! - `detail --url ...` renders one order, reading `order_id` from the given
//!   page URL or query string.
//! - `serve` runs the HTTP front until Ctrl-C.
//!
//! Configuration comes from [`SiteConfig::from_env`], then the flags below.

use clap::{Parser, Subcommand};
use order_views::config::SiteConfig;
use order_views::renderers::RenderOutcome;
use order_views::runtime::{setup_tracing, OrderSite};
use order_views::view::{Document, PageQuery};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "order-views",
    version,
    about = "Render order list and detail pages from the order API"
)]
struct Cli {
    /// Root of the order-management API.
    #[arg(long)]
    api_base_url: Option<String>,

    /// Target of the list page's detail links.
    #[arg(long)]
    detail_page: Option<String>,

    /// Treat the legacy `{ "body": [...] }` list response as an error.
    #[arg(long)]
    reject_envelope: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the order list.
    List {
        /// Write the page here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render one order.
    Detail {
        /// Page URL or query string carrying `order_id`.
        #[arg(long)]
        url: String,
        /// Write the page here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Serve both pages over HTTP.
    Serve {
        /// Listen address, e.g. `127.0.0.1:8080`.
        #[arg(long)]
        bind: Option<String>,
    },
}

impl Cli {
    fn config(&self) -> SiteConfig {
        let mut config = SiteConfig::from_env();
        if let Some(url) = &self.api_base_url {
            config.api_base_url = url.clone();
        }
        if let Some(page) = &self.detail_page {
            config.detail_page = page.clone();
        }
        if self.reject_envelope {
            config.accept_envelope = false;
        }
        if let Command::Serve { bind: Some(bind) } = &self.command {
            config.bind_addr = bind.clone();
        }
        config
    }
}

async fn write_page(doc: &Document, out: Option<&Path>) -> Result<(), String> {
    let html = doc.to_html();
    match out {
        Some(path) => {
            tokio::fs::write(path, html)
                .await
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            info!(path = %path.display(), "Page written");
            Ok(())
        }
        None => {
            print!("{html}");
            Ok(())
        }
    }
}

fn report(page: &str, outcome: &RenderOutcome) {
    match outcome {
        RenderOutcome::Failed(e) => warn!(page, error = %e, "Page rendered without data"),
        _ => info!(page, ?outcome, "Page rendered"),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let cli = Cli::parse();
    let config = cli.config();
    config.validate().map_err(|e| e.to_string())?;

    let site = OrderSite::from_config(&config).map_err(|e| e.to_string())?;

    match cli.command {
        Command::List { out } => {
            let (doc, outcome) = site.list_page().await;
            report("list", &outcome);
            write_page(&doc, out.as_deref()).await
        }
        Command::Detail { url, out } => {
            let (doc, outcome) = site.detail_page(&PageQuery::parse(&url)).await;
            report("detail", &outcome);
            write_page(&doc, out.as_deref()).await
        }
        Command::Serve { .. } => Arc::new(site).serve(&config.bind_addr).await,
    }
}
