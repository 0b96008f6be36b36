//! Music tagging from images and free text.
//!
//! Builds a multimodal request, asks a chat model for a JSON object, and
//! coerces the reply into a fixed output contract. Two tools share this
//! crate: a multi-field tagger and a genre-only classifier.

pub mod ai;
pub mod app;
pub mod error;
pub mod logging;
pub mod models;
pub mod normalize;
pub mod prompts;
pub mod request;

pub use error::{Error, Result};
