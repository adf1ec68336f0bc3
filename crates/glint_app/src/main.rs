//! Glint demo
//!
//! Opens the checkbox and radio button practice window.

use anyhow::{Context, Result};
use clap::Parser;
use glint_app::{DemoApp, DemoConfig};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "glint-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Checkbox and radio button practice window", long_about = None)]
struct Cli {
    /// Font file to render text with (default: a system sans-serif font)
    #[arg(long, value_name = "PATH")]
    font: Option<PathBuf>,

    /// Window title
    #[arg(long, default_value = "Practice GUI")]
    title: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let mut config = DemoConfig::new().title(cli.title);
    if let Some(font) = cli.font {
        config = config.font_path(font);
    }

    let font = match config.load_font() {
        Ok(font) => font,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e).context("no usable font, pass one with --font <PATH>");
        }
    };

    DemoApp::run(config, font).context("demo stopped with an error")
}
