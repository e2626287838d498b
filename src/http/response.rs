//! Parsed response view over the caller's buffer.

use super::request::Header;
use crate::network::error::Error;
use heapless::Vec;
use serde::Deserialize;

/// Status left in a [`Response`] when the request never went out: the host
/// was missing, the connection could not be opened, or sending failed.
pub const NOT_ATTEMPTED: i32 = -1;

/// An HTTP response whose text fields borrow the buffer it was received into.
///
/// Nothing is copied out of the buffer: `version`, `reason`, every header and
/// `body` are slices of it, so the buffer cannot be touched while a
/// `Response` is alive. `H` is the maximum number of headers kept; further
/// header lines are ignored.
///
/// Failures never panic and are never returned as `Err`. Inspect
/// [`status`](Response::status) and the presence of fields, and
/// [`error`](Response::error) for the condition that ended the exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response<'buf, const H: usize> {
    /// Protocol version from the status line, e.g. `HTTP/1.1`.
    pub version: Option<&'buf str>,
    /// Numeric status. [`NOT_ATTEMPTED`] if nothing was sent, 0 if no status
    /// line could be read.
    pub status: i32,
    /// Reason phrase from the status line, e.g. `OK`.
    pub reason: Option<&'buf str>,
    /// Parsed headers in arrival order.
    pub headers: Vec<Header<'buf>, H>,
    /// Body sized by `Content-Length`. Absent when no header/body boundary
    /// was found.
    pub body: Option<&'buf [u8]>,
    /// The condition that cut the exchange short, if any.
    pub error: Option<Error>,
}

impl<'buf, const H: usize> Default for Response<'buf, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'buf, const H: usize> Response<'buf, H> {
    /// A cleared response: no headers, status 0, every other field absent.
    pub const fn new() -> Self {
        Self {
            version: None,
            status: 0,
            reason: None,
            headers: Vec::new(),
            body: None,
            error: None,
        }
    }

    pub(crate) fn not_attempted(error: Error) -> Self {
        let mut response = Self::new();
        response.status = NOT_ATTEMPTED;
        response.error = Some(error);
        response
    }

    /// Resets every field to the cleared state.
    pub fn clear(&mut self) {
        self.headers.clear();
        self.version = None;
        self.status = 0;
        self.reason = None;
        self.body = None;
        self.error = None;
    }

    /// Whether the status is in `low..high`.
    fn status_between(&self, low: i32, high: i32) -> bool {
        (low..high).contains(&self.status)
    }

    /// 2xx
    pub fn is_ok(&self) -> bool {
        self.status_between(200, 300)
    }

    /// 3xx
    pub fn is_redirect(&self) -> bool {
        self.status_between(300, 400)
    }

    /// 4xx
    pub fn is_client_error(&self) -> bool {
        self.status_between(400, 500)
    }

    /// 5xx
    pub fn is_server_error(&self) -> bool {
        self.status_between(500, 600)
    }

    /// Value of the first header named `key`, compared case-insensitively.
    pub fn header(&self, key: &str) -> Option<&'buf str> {
        self.headers
            .iter()
            .find(|header| header.key.eq_ignore_ascii_case(key))
            .map(|header| header.value)
    }

    /// The declared `Content-Length`, if the header was parsed.
    pub fn content_length(&self) -> Option<usize> {
        self.header("Content-Length")
            .and_then(|value| usize::try_from(super::parser::leading_int(value)).ok())
    }

    /// The body as UTF-8 text.
    pub fn text(&self) -> Option<&'buf str> {
        self.body.and_then(|body| core::str::from_utf8(body).ok())
    }

    /// Deserializes a JSON body with `serde-json-core`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iothttp::http::{parse, Response};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Reading {
    ///     celsius: i32,
    /// }
    ///
    /// let raw = b"HTTP/1.0 200 OK\r\nContent-Length: 14\r\n\r\n{\"celsius\":21}";
    /// let response: Response<'_, 4> = parse(raw).unwrap();
    /// let reading: Reading = response.json().unwrap();
    /// assert_eq!(reading.celsius, 21);
    /// ```
    pub fn json<T>(&self) -> Result<T, Error>
    where
        T: Deserialize<'buf>,
    {
        let body = self.body.ok_or(Error::InvalidBody)?;
        let (value, _) = serde_json_core::from_slice(body).map_err(|_| Error::InvalidBody)?;
        Ok(value)
    }
}
