//! Mime type inference for inline image parts.

use std::path::Path;

/// Infer an image mime type from a file extension (case-insensitive).
///
/// `png` and `jpg`/`jpeg` map to their registered types; any other extension
/// is used verbatim as the subtype. A dotfile name such as `.png` counts as
/// its own extension. Returns `None` when the path has no extension.
pub fn mime_from_extension(path: &Path) -> Option<String> {
    let ext = match path.extension() {
        Some(ext) => ext.to_string_lossy().to_lowercase(),
        // `Path::extension` ignores the leading dot of names like `.png`.
        None => path
            .file_name()?
            .to_string_lossy()
            .strip_prefix('.')?
            .to_lowercase(),
    };
    if ext.is_empty() {
        return None;
    }

    let subtype = match ext.as_str() {
        "jpg" | "jpeg" => "jpeg",
        other => other,
    };
    Some(format!("image/{}", subtype))
}

/// Resolve the mime type for an image file, sniffing `bytes` when the path
/// carries no extension.
pub fn image_mime(path: &Path, bytes: &[u8]) -> String {
    mime_from_extension(path).unwrap_or_else(|| detect_image_mime(bytes).to_string())
}

pub fn detect_image_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [0x89, 0x50, 0x4E, 0x47, ..] => "image/png",
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => "image/webp",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        _ => {
            tracing::warn!(
                "Unrecognized image format (first 4 bytes: {:02X?}), falling back to image/png",
                &bytes[..bytes.len().min(4)]
            );
            "image/png"
        }
    }
}
