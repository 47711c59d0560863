//! Status-code driven response classification.
//!
//! Pure mapping from a raw `(status, headers, body)` triple to the call's
//! terminal outcome. The table is frozen for compatibility, gaps included:
//! 402 and 502 are not matched by any error arm and classify as plain
//! responses.

use bytes::Bytes;
use reqwest::header::HeaderMap;

use crate::error::Error;
use crate::types::Response;

/// Map a raw transport outcome to a [`Response`] or a typed [`Error`].
///
/// First match wins; anything not matched by an error arm (all 2xx and 3xx,
/// plus 402 and 502) is a success.
pub(crate) fn classify(status_code: u16, headers: HeaderMap, body: Bytes) -> Result<Response, Error> {
    match status_code {
        400 => Err(Error::BadRequest),
        401 => Err(Error::Unauthorized),
        403 => Err(Error::Forbidden),
        404 => Err(Error::NotFound),
        405..=499 => Err(Error::BackendError { code: status_code }),
        500 => Err(Error::InternalError),
        501 => Err(Error::NotImplemented),
        503 => Err(Error::ServiceUnavailable),
        504..=599 => Err(Error::BackendError { code: status_code }),
        _ => Ok(Response {
            status_code,
            body: if body.is_empty() { None } else { Some(body) },
            headers,
        }),
    }
}
