use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use url::Url;

mod app;
mod archive;
mod config;
mod embed;
mod utils;
mod view;

use archive::{Category, HttpContentSource};
use config::{Config, LogFormat, RenderFormat};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(short, long)]
    config: Option<String>,

    /// Tab to open: releases, mixes or interviews
    #[arg(short = 't', long)]
    category: Option<Category>,

    /// Output format, overrides the config file
    #[arg(short, long, value_enum)]
    format: Option<RenderFormat>,

    /// Write the rendered view to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Read tab selections from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Content host, overrides the config file
    #[arg(long)]
    base_url: Option<Url>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::find_config_path(args.config.as_deref()) {
        Some(path) => Config::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => Config::default(),
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    match config.get_logging_format() {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init(),
    }

    info!("Starting Grimoire...");

    let base_url = match args.base_url {
        Some(url) => url,
        None => config.base_url()?,
    };
    info!("Reading archive content from: {}", base_url);

    let source = HttpContentSource::new(base_url, config.timeout())?;
    let app = app::App {
        source: Arc::new(source),
        format: args.format.unwrap_or(config.render.format),
        output: args.output,
        discard_stale: config.content.discard_stale_responses,
    };

    let category = args.category.unwrap_or_default();
    if args.interactive {
        app.run_interactive(category).await
    } else {
        app.run_once(category).await
    }
}
