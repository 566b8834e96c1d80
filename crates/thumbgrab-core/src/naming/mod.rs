//! Output filename derivation.
//!
//! The name comes from the *page* URL, not the image URL, and is taken
//! literally: for `https://host/watch?v=abc123` the name is `watch?v=abc123.jpg`.

mod segment;

pub use segment::last_segment;

/// Appends `extension` unless `name` already ends with it.
pub fn ensure_extension(name: &str, extension: &str) -> String {
    if name.ends_with(extension) {
        name.to_string()
    } else {
        format!("{}{}", name, extension)
    }
}

/// Derives the filename for the thumbnail of `source_url`.
///
/// Uses `override_name` when given, otherwise the text after the last `/` of
/// `source_url`. The result always ends with `extension`, appended at most once.
///
/// # Examples
///
/// - `derive_filename("https://example.com/watch?v=abc123", None, ".jpg")` → `"watch?v=abc123.jpg"`
/// - `derive_filename("https://example.com/x", Some("cover.jpg"), ".jpg")` → `"cover.jpg"`
pub fn derive_filename(source_url: &str, override_name: Option<&str>, extension: &str) -> String {
    let base = override_name.unwrap_or_else(|| last_segment(source_url));
    ensure_extension(base, extension)
}
