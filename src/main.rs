use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use yudane::catalog::Catalog;
use yudane::page;
use yudane::tui::app::ViewerApp;
use yudane::tui::runner::run_tui;

#[derive(Parser)]
#[command(name = "yudane", about = "Judgment-deferral context viewer. No statistics, no LLM.")]
struct Cli {
    /// Context type to show first (defaults to the first catalog entry)
    #[arg(short, long)]
    key: Option<String>,

    /// Print the page as markdown instead of starting the viewer
    #[arg(long, conflicts_with = "json")]
    print: bool,

    /// Print the whole catalog as JSON
    #[arg(long, conflicts_with = "key")]
    json: bool,

    /// Write logs to this file (the viewer owns the terminal)
    #[arg(long)]
    log: Option<PathBuf>,
}

fn init_tracing(log: Option<&PathBuf>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("yudane=warn"));
    match log {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_ref())?;

    let catalog = Catalog::builtin()?;
    info!(entries = catalog.len(), "catalog loaded");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(catalog.entries())?);
        return Ok(());
    }

    if cli.print {
        let page = page::render(catalog, cli.key.as_deref())?;
        println!("{}", page.to_markdown());
        return Ok(());
    }

    let app = match cli.key.as_deref() {
        Some(key) => ViewerApp::with_key(catalog, key)?,
        None => ViewerApp::new(catalog)?,
    };
    run_tui(app).await
}
