use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tunesconf::TunesConfig;

use tunesmith::{render_composition, Composer, GroqChat};

/// Compose a short piece from a text idea and render it to WAV
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Free-text description of the music to compose
    idea: String,

    /// Style for the final summary (try Sad, Happy, Jazz, Romantic, Extreme)
    #[arg(short, long, default_value = "Happy")]
    style: String,

    /// Output WAV path
    #[arg(short, long, default_value = "composition.wav")]
    output: PathBuf,

    /// Config file path (takes precedence over ./tunesmith.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ignore the generated rhythm and give every note the fixed duration
    #[arg(long)]
    fixed_duration: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        TunesConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.fixed_duration {
        config.audio.honor_rhythm = false;
    }

    // RUST_LOG wins over the configured level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let chat = GroqChat::new(&config.model)?;
    let composer = Composer::new(chat);

    tracing::info!(idea = %cli.idea, style = %cli.style, "starting composition");
    let composition = composer.compose(&cli.idea, &cli.style).await?;

    println!("Melody:  {}", composition.melody);
    println!("Harmony: {}", composition.harmony);
    println!("Rhythm:  {}", composition.rhythm);
    println!();
    println!("{}", composition.summary);

    let rendered = render_composition(&composition, &config.audio)?;
    if !rendered.skipped.is_empty() {
        println!();
        println!("Skipped {} unplayable token(s):", rendered.skipped.len());
        for skip in &rendered.skipped {
            println!("  {:?}: {}", skip.token, skip.reason);
        }
    }

    if rendered.is_silent() {
        println!();
        println!("No playable notes were produced; skipping audio output.");
        return Ok(());
    }

    std::fs::write(&cli.output, &rendered.wav)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    println!();
    println!(
        "Rendered {} notes to {}",
        rendered.note_count,
        cli.output.display()
    );

    Ok(())
}
