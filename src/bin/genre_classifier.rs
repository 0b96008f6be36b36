//! Classify the single music genre most associated with an image.

use anyhow::{Context, Result as AnyResult};
use clap::Parser;
use music_tagger::ai::gateway_from_config;
use music_tagger::app::{to_pretty_json, GenreClassifier};
use music_tagger::models::Config;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "genre-classifier")]
#[command(about = "Classify the music genre most associated with an image")]
struct CliArgs {
    /// Path to image.
    image: PathBuf,

    /// Model identifier; overrides the MODEL environment variable.
    #[arg(long)]
    model: Option<String>,
}

async fn run(args: CliArgs) -> music_tagger::Result<String> {
    let config = Config::from_env()?.with_model_override(args.model);

    let classifier = GenreClassifier::new(gateway_from_config(&config));
    let result = classifier.classify(&args.image).await?;
    to_pretty_json(&result)
}

#[tokio::main]
async fn main() -> AnyResult<()> {
    music_tagger::logging::init();

    let args = CliArgs::parse();

    match run(args).await {
        Ok(json) => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json).context("failed to write result to stdout")?;
            info!("Classification completed successfully");
            Ok(())
        }
        Err(e) => {
            debug!("Classification failed: {:?}", e);
            eprintln!("{}", e);
            std::process::exit(e.exit_code().into());
        }
    }
}
