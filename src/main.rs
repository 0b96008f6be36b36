use anyhow::{Context, Result as AnyResult};
use clap::Parser;
use music_tagger::ai::gateway_from_config;
use music_tagger::app::{to_pretty_json, Tagger};
use music_tagger::models::Config;
use music_tagger::request::AnalysisInput;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "music-tagger")]
#[command(about = "Tag an image and/or text with description, keywords, moods, genre and search queries")]
struct CliArgs {
    /// Path to an image (optional).
    #[arg(long)]
    image: Option<PathBuf>,

    /// Free text or keywords (optional).
    #[arg(long)]
    text: Option<String>,

    /// Model identifier; overrides the MODEL environment variable.
    #[arg(long)]
    model: Option<String>,
}

async fn run(args: CliArgs) -> music_tagger::Result<String> {
    let input = AnalysisInput::new(args.image, args.text)?;
    let config = Config::from_env()?.with_model_override(args.model);

    let tagger = Tagger::new(gateway_from_config(&config));
    let result = tagger.analyze(&input).await?;
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
            info!("Tagging completed successfully");
            Ok(())
        }
        Err(e) => {
            debug!("Tagging failed: {:?}", e);
            eprintln!("{}", e);
            std::process::exit(e.exit_code().into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_accept_image_and_text() {
        let args =
            CliArgs::try_parse_from(["music-tagger", "--image", "a.png", "--text", "chill"]).unwrap();
        assert_eq!(args.image, Some(PathBuf::from("a.png")));
        assert_eq!(args.text.as_deref(), Some("chill"));
        assert!(args.model.is_none());
    }

    #[test]
    fn test_args_allow_neither_flag_at_parse_time() {
        let args = CliArgs::try_parse_from(["music-tagger"]).unwrap();
        assert!(AnalysisInput::new(args.image, args.text).is_err());
    }

    #[tokio::test]
    async fn test_run_reports_usage_before_reading_config() {
        let args = CliArgs::try_parse_from(["music-tagger", "--text", ""]).unwrap();
        let err = run(args).await.unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
