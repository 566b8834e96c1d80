//! Last path segment of a raw URL string.

/// Returns the text after the last `/` in `url`, or the whole string if it has none.
///
/// This is plain string splitting: the URL is not parsed, so query strings and
/// fragments stay in the result and a trailing `/` yields an empty segment.
pub fn last_segment(url: &str) -> &str {
    match url.rfind('/') {
        Some(idx) => &url[idx + 1..],
        None => url,
    }
}
