//! Note field constants and validation functions.
//!
//! Validation returns `Result<(), String>` so the API layer can map
//! failures to 400 responses without this crate knowing about HTTP.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a note title in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of note content in characters.
pub const MAX_CONTENT_LENGTH: usize = 50_000;

/// Maximum number of attached image URLs per note.
pub const MAX_IMAGES: usize = 10;

/// Maximum length of the display duration string (e.g. "0:42").
pub const MAX_DURATION_LENGTH: usize = 16;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a note title: must be non-empty after trimming and within the
/// length limit.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title is required".to_string());
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate note content: must be non-empty and within the length limit.
pub fn validate_content(content: &str) -> Result<(), String> {
    if content.is_empty() {
        return Err("Content is required".to_string());
    }
    if content.len() > MAX_CONTENT_LENGTH {
        return Err(format!(
            "Content exceeds maximum length of {MAX_CONTENT_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate the attached image list: bounded count, no empty URLs.
pub fn validate_images(images: &[String]) -> Result<(), String> {
    if images.len() > MAX_IMAGES {
        return Err(format!("A note can hold at most {MAX_IMAGES} images"));
    }
    if images.iter().any(|url| url.trim().is_empty()) {
        return Err("Image URLs cannot be empty".to_string());
    }
    Ok(())
}

/// Validate the display duration string.
pub fn validate_duration(duration: &str) -> Result<(), String> {
    if duration.len() > MAX_DURATION_LENGTH {
        return Err(format!(
            "Duration exceeds maximum length of {MAX_DURATION_LENGTH} characters"
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
