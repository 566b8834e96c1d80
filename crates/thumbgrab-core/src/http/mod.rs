//! Blocking HTTP GETs over libcurl (via the `curl` crate).
//!
//! Two shapes of request: the page fetch buffers the whole body, the image
//! fetch streams chunks into a caller-supplied sink. Neither sets a timeout
//! or retries; redirects are followed.

mod status;

pub use status::SUCCESS_STATUS;

use crate::error::ThumbnailError;
use status::parse_status_line;
use std::cell::Cell;
use std::io;
use std::str;

const MAX_REDIRECTS: u32 = 10;

/// Transfer knobs taken from config.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpOptions {
    /// libcurl receive buffer size; `None` keeps the library default.
    pub buffer_size: Option<usize>,
}

impl HttpOptions {
    fn apply(&self, easy: &mut curl::easy::Easy) -> Result<(), curl::Error> {
        easy.follow_location(true)?;
        easy.max_redirections(MAX_REDIRECTS)?;
        if let Some(sz) = self.buffer_size {
            easy.buffer_size(sz)?;
        }
        Ok(())
    }
}

/// GETs `url` and returns the body, whatever the status code.
pub fn fetch_page(url: &str, opts: &HttpOptions) -> Result<Vec<u8>, ThumbnailError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    opts.apply(&mut easy)?;
    // Empty string: advertise every encoding libcurl can decode.
    easy.accept_encoding("")?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    tracing::debug!(url, status = code, bytes = body.len(), "fetched page");
    Ok(body)
}

/// GETs `url` and feeds the body of a 200 response to `sink`, chunk by chunk.
///
/// `sink` is never called unless the final response status is 200, so callers
/// can defer side effects (creating directories or files) to the first chunk.
/// A sink error aborts the transfer and is returned as `ThumbnailError::Io`.
pub fn stream_body<F>(url: &str, opts: &HttpOptions, mut sink: F) -> Result<(), ThumbnailError>
where
    F: FnMut(&[u8]) -> io::Result<()>,
{
    let status = Cell::new(0u32);
    let mut sink_error: Option<io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    opts.apply(&mut easy)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.header_function(|line| {
            if let Some(code) = str::from_utf8(line).ok().and_then(parse_status_line) {
                status.set(code);
            }
            true
        })?;
        transfer.write_function(|data| {
            if status.get() != SUCCESS_STATUS {
                // Error or redirect body: drain without touching the sink.
                return Ok(data.len());
            }
            match sink(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    sink_error = Some(e);
                    Ok(0) // abort transfer
                }
            }
        })?;
        transfer.perform()
    };

    if let Some(e) = sink_error {
        return Err(ThumbnailError::Io(e));
    }
    performed?;

    let code = easy.response_code()?;
    if code != SUCCESS_STATUS {
        return Err(ThumbnailError::BadStatus(code));
    }
    Ok(())
}
