//! Tool pipelines: build the request, call the model, normalize the reply.

use crate::ai::ModelGateway;
use crate::models::{GenreResult, TagResult};
use crate::normalize::{normalize_genre, normalize_tags};
use crate::request::{build_genre_message, build_tagging_message, AnalysisInput};
use crate::{prompts, Result};
use std::path::Path;
use tracing::info;

/// Multi-field tagger: description, keywords, moods, genre, search queries.
pub struct Tagger {
    gateway: Box<dyn ModelGateway>,
}

impl Tagger {
    pub fn new(gateway: Box<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    pub async fn analyze(&self, input: &AnalysisInput) -> Result<TagResult> {
        let message = build_tagging_message(input)?;
        info!(
            "Tagging (image: {}, text: {})",
            input.image_path().is_some(),
            input.text().is_some()
        );

        let raw = self
            .gateway
            .complete_json(prompts::TAGGER_SYSTEM, &message)
            .await?;
        Ok(normalize_tags(raw))
    }
}

/// Genre-only classifier for a single image.
pub struct GenreClassifier {
    gateway: Box<dyn ModelGateway>,
}

impl GenreClassifier {
    pub fn new(gateway: Box<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    pub async fn classify(&self, image_path: &Path) -> Result<GenreResult> {
        let message = build_genre_message(image_path)?;
        info!("Classifying genre for {}", image_path.display());

        let raw = self
            .gateway
            .complete_json(prompts::CLASSIFIER_SYSTEM, &message)
            .await?;
        let result = normalize_genre(&raw);
        info!("Genre: {}", result.genre);
        Ok(result)
    }
}

/// Render a result the way both tools print it: two-space indented JSON with
/// non-ASCII characters kept literal.
pub fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
