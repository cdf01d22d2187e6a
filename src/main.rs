#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use heartnote_core::{logging::setup_logging, CardContent, HeartField, DEFAULT_HEART_COUNT};

use crate::context::LaunchSettings;

/// Heartnote - an interactive apology card
#[derive(Parser, Debug)]
#[command(name = "heartnote-desktop")]
#[command(about = "Heartnote - a four-card apology with a letter at the end")]
struct Args {
    /// JSON file overriding the built-in card text and images
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 480.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,

    /// Number of floating hearts in the background
    #[arg(long, default_value_t = DEFAULT_HEART_COUNT)]
    hearts: usize,

    /// Seed for a reproducible heart layout
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let content = match &args.content {
        Some(path) => CardContent::from_path(path)
            .with_context(|| format!("Failed to load card content from {}", path.display()))?,
        None => CardContent::default(),
    };

    let hearts = match args.seed {
        Some(seed) => HeartField::seeded(args.hearts, seed),
        None => HeartField::random(args.hearts),
    };

    tracing::info!(
        hearts = hearts.len(),
        custom_content = args.content.is_some(),
        "Starting heartnote"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(content.finale.letter.title.as_str())
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(LaunchSettings {
            content: Arc::new(content),
            hearts,
        })
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["heartnote-desktop"]);
        assert_eq!(args.hearts, DEFAULT_HEART_COUNT);
        assert_eq!(args.verbose, 0);
        assert!(args.content.is_none());
        assert!(args.seed.is_none());
    }

    #[test]
    fn verbosity_counts() {
        let args = Args::parse_from(["heartnote-desktop", "-vv", "--seed", "9", "--hearts", "3"]);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.hearts, 3);
    }
}
