//! inktone CLI - print theming hints derived from an image.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inktone::{classify_tone, dominant_color, DEFAULT_GLOW};

/// Derive an ambient glow color and a dark/light tone from an image.
#[derive(Parser, Debug)]
#[command(name = "inktone")]
#[command(version, about, long_about = None)]
struct Args {
    /// Image source: a file path or an http(s) URL.
    #[arg(value_name = "SOURCE")]
    source: String,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("inktone={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let img = inktone::image::load_rgba(&args.source)
        .with_context(|| format!("Failed to load {}", args.source))?;

    let glow = dominant_color(&img).unwrap_or_else(|| DEFAULT_GLOW.to_string());
    let tone = classify_tone(&img).unwrap_or_default();

    println!("glow: {glow}");
    println!("tone: {tone}");

    Ok(())
}
