//! Multimodal request assembly
//!
//! Turns the user's image path and/or free text into the ordered content
//! parts sent to the model. Images are inlined as base64 data URLs.

use crate::ai::mime;
use crate::{prompts, Error, Result};
use base64::Engine as _;
use std::path::{Path, PathBuf};

/// What the tagger was asked to analyze. At least one field is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisInput {
    image_path: Option<PathBuf>,
    text: Option<String>,
}

impl AnalysisInput {
    /// Empty paths and empty strings count as absent.
    pub fn new(image_path: Option<PathBuf>, text: Option<String>) -> Result<Self> {
        let image_path = image_path.filter(|p| !p.as_os_str().is_empty());
        let text = text.filter(|t| !t.is_empty());

        if image_path.is_none() && text.is_none() {
            return Err(Error::Usage("Provide --image and/or --text".to_string()));
        }

        Ok(Self { image_path, text })
    }

    pub fn image_path(&self) -> Option<&Path> {
        self.image_path.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// One segment of a multimodal user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    Text(String),
    /// `data:<mime>;base64,<payload>`
    ImageDataUrl(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartMessage {
    parts: Vec<ContentPart>,
}

impl MultipartMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.parts.push(ContentPart::Text(text.into()));
    }

    pub fn push_image(&mut self, data_url: String) {
        self.parts.push(ContentPart::ImageDataUrl(data_url));
    }

    pub fn parts(&self) -> &[ContentPart] {
        &self.parts
    }
}

/// Read an image file and encode it as a data URL.
pub fn encode_image_data_url(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| Error::ImageRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mime = mime::image_mime(path, &bytes);

    tracing::debug!(
        "Encoding image {} ({} bytes, {})",
        path.display(),
        bytes.len(),
        mime
    );

    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(format!("data:{};base64,{}", mime, encoded))
}

/// Build the tagger's user message: guidance, then the image, then the text.
pub fn build_tagging_message(input: &AnalysisInput) -> Result<MultipartMessage> {
    let mut hints = Vec::with_capacity(2);
    if input.image_path().is_some() {
        hints.push(prompts::TAGGER_IMAGE_HINT);
    }
    if input.text().is_some() {
        hints.push(prompts::TAGGER_TEXT_HINT);
    }

    let mut message = MultipartMessage::new();
    message.push_text(hints.join(" "));

    if let Some(path) = input.image_path() {
        message.push_image(encode_image_data_url(path)?);
    }
    if let Some(text) = input.text() {
        message.push_text(prompts::render(prompts::TAGGER_TEXT, &[("text", text)]));
    }

    Ok(message)
}

/// Build the classifier's user message for a single image.
pub fn build_genre_message(image_path: &Path) -> Result<MultipartMessage> {
    if image_path.as_os_str().is_empty() {
        return Err(Error::Usage("Provide an image path.".to_string()));
    }

    let mut message = MultipartMessage::new();
    message.push_text(prompts::CLASSIFIER_USER);
    message.push_image(encode_image_data_url(image_path)?);
    Ok(message)
}
