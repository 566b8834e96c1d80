//! Preview-image lookup in fetched page markup.
//!
//! Looks for `<meta property="og:image" content="...">` (property is
//! configurable). No fallback property is consulted.

use scraper::{Html, Selector};
use url::Url;

/// Returns the `content` of the first `<meta>` whose `property` equals `property`.
///
/// Returns `None` if no such element exists, if the first match has no
/// `content` attribute, or if the attribute is blank.
pub fn find_preview_image(html: &str, property: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("meta[property]").ok()?;
    let element = document
        .select(&selector)
        .find(|el| el.value().attr("property") == Some(property))?;
    let content = element.value().attr("content")?.trim();
    if content.is_empty() {
        return None;
    }
    Some(content.to_string())
}

/// Resolves an image reference against the page it was found on.
///
/// Absolute references are returned verbatim. References without a scheme
/// (`/img/a.jpg`, `//cdn.host/a.jpg`) are joined onto `page_url`; if that
/// fails the reference is returned unchanged and the fetch reports the error.
pub fn resolve_image_url(page_url: &str, reference: &str) -> String {
    match Url::parse(reference) {
        Ok(_) => reference.to_string(),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(page_url)
            .and_then(|base| base.join(reference))
            .map(|u| u.to_string())
            .unwrap_or_else(|_| reference.to_string()),
        Err(_) => reference.to_string(),
    }
}
