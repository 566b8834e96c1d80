//! Status-line parsing for header callbacks.

/// Status that counts as a successful image response.
pub const SUCCESS_STATUS: u32 = 200;

/// Parses `HTTP/1.1 200 OK` (or `HTTP/2 200`) into its status code.
///
/// Returns `None` for ordinary header lines, so a header callback can feed
/// every line through and keep the last code seen; with redirects followed,
/// that is the code of the final response.
pub(crate) fn parse_status_line(line: &str) -> Option<u32> {
    let line = line.trim();
    let mut parts = line.split_whitespace();
    let version = parts.next()?;
    if !version.starts_with("HTTP/") {
        return None;
    }
    parts.next()?.parse::<u32>().ok()
}
