//! Response normalization
//!
//! The model is told what shape to return but nothing guarantees it
//! complies. Each function here is a total coercion from the raw JSON to
//! the tool's output contract: wrong types and missing keys map to defined
//! defaults instead of errors.

use crate::models::{GenreResult, RawModelOutput, TagResult};
use serde_json::Value;
use std::collections::HashSet;

pub const MAX_SEARCH_QUERIES: usize = 6;
pub const UNKNOWN_GENRE: &str = "unknown";

/// Trim, drop blanks, drop exact duplicates (first wins), keep at most
/// [`MAX_SEARCH_QUERIES`].
pub fn dedupe_search_queries<'a, I>(queries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(MAX_SEARCH_QUERIES);

    for query in queries {
        if unique.len() == MAX_SEARCH_QUERIES {
            break;
        }
        let query = query.trim();
        if !query.is_empty() && seen.insert(query) {
            unique.push(query.to_string());
        }
    }

    unique
}

/// Coerce a raw `search_queries` value. Anything but an array yields an
/// empty list; non-string elements are skipped.
pub fn coerce_search_queries(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => dedupe_search_queries(items.iter().filter_map(Value::as_str)),
        _ => Vec::new(),
    }
}

/// Normalize the tagger's output. Only `search_queries` is rewritten; all
/// other keys keep their position and value.
pub fn normalize_tags(mut raw: RawModelOutput) -> TagResult {
    let queries = coerce_search_queries(raw.get("search_queries"));
    if queries.len() < MAX_SEARCH_QUERIES {
        tracing::debug!("Model returned {} usable search queries", queries.len());
    }

    raw.insert(
        "search_queries".to_string(),
        Value::Array(queries.into_iter().map(Value::String).collect()),
    );
    TagResult::from_fields(raw)
}

/// Reduce a compound genre string such as `"rock / pop, fusion"` to its
/// first value.
fn first_genre(value: &str) -> String {
    let head = value.split(',').next().unwrap_or_default();
    let head = head.split('/').next().unwrap_or_default().trim();

    if head.is_empty() {
        UNKNOWN_GENRE.to_string()
    } else {
        head.to_string()
    }
}

/// Collapse a raw `genre` value to exactly one string.
pub fn coerce_genre(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(genre)) => first_genre(genre),
        Some(Value::Array(items)) => match items.first() {
            Some(Value::String(genre)) => genre.trim().to_string(),
            Some(other) => {
                tracing::warn!("Ignoring non-string genre list entry: {}", other);
                UNKNOWN_GENRE.to_string()
            }
            None => UNKNOWN_GENRE.to_string(),
        },
        Some(other) => {
            tracing::warn!("Ignoring genre of unexpected type: {}", other);
            UNKNOWN_GENRE.to_string()
        }
        None => UNKNOWN_GENRE.to_string(),
    }
}

/// Normalize the classifier's output to a single `genre` key.
pub fn normalize_genre(raw: &RawModelOutput) -> GenreResult {
    GenreResult {
        genre: coerce_genre(raw.get("genre")),
    }
}
