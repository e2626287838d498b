//! Outbound request types and the HTTP/1.0 request writer.

use crate::network::Write;
use crate::network::error::Error;
use core::fmt::{self, Write as _};

/// HTTP request methods supported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `PATCH`
    Patch,
}

impl Method {
    /// The method token as it appears on the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Method {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str());
    }
}

/// A header parsed out of a response; both strings point into the
/// response buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Header name, e.g. `Content-Type`.
    pub key: &'a str,
    /// Header value with the single separating space removed.
    pub value: &'a str,
}

impl<'a> Header<'a> {
    /// Creates a header.
    pub const fn new(key: &'a str, value: &'a str) -> Self {
        Self { key, value }
    }
}

/// A header the caller sends with a request.
///
/// An entry whose `value` is `None` is skipped. An empty value is sent as is
/// (`X-Key: \r\n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestHeader<'a> {
    /// Header name. An empty name ends the header list.
    pub key: &'a str,
    /// Header value, or `None` to leave the header out.
    pub value: Option<&'a str>,
}

impl<'a> RequestHeader<'a> {
    /// Creates a header that is sent with `value`.
    pub const fn new(key: &'a str, value: &'a str) -> Self {
        Self {
            key,
            value: Some(value),
        }
    }

    /// Creates a header without a value, which is not sent.
    pub const fn unset(key: &'a str) -> Self {
        Self { key, value: None }
    }
}

impl<'a> From<Header<'a>> for RequestHeader<'a> {
    fn from(header: Header<'a>) -> Self {
        Self::new(header.key, header.value)
    }
}

/// Where to send a request and what to send.
///
/// # Examples
///
/// ```rust
/// use iothttp::http::Request;
///
/// let request = Request {
///     host: Some("example.com"),
///     port: None,
///     path: "/api/status",
///     body: None,
/// };
/// assert_eq!(request.port_or(80), 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Request<'a> {
    /// Host to connect to. A request without a host is never sent.
    pub host: Option<&'a str>,
    /// TCP port; `None` or `Some(0)` use the client's default port.
    pub port: Option<u16>,
    /// Request target, e.g. `/api/status`.
    pub path: &'a str,
    /// Request body, sent verbatim after the header section.
    pub body: Option<&'a str>,
}

impl<'a> Request<'a> {
    /// Creates a body-less request for `path` on `host`.
    pub const fn new(host: &'a str, path: &'a str) -> Self {
        Self {
            host: Some(host),
            port: None,
            path,
            body: None,
        }
    }

    /// The host, if present and non-empty.
    pub fn host(&self) -> Option<&'a str> {
        self.host.filter(|host| !host.is_empty())
    }

    /// The port, falling back to `default` when unset.
    pub fn port_or(&self, default: u16) -> u16 {
        match self.port {
            Some(0) | None => default,
            Some(port) => port,
        }
    }
}

/// `core::fmt::Write` adapter that streams formatted text onto a connection.
struct Wire<'c, C: Write> {
    connection: &'c mut C,
}

impl<C: Write> Wire<'_, C> {
    fn send(&mut self, mut bytes: &[u8]) -> Result<(), Error> {
        while !bytes.is_empty() {
            match self.connection.write(bytes) {
                Ok(0) | Err(_) => return Err(Error::WriteError),
                Ok(n) => bytes = &bytes[n..],
            }
        }
        Ok(())
    }

    fn header(&mut self, key: &str, value: impl fmt::Display) -> Result<(), Error> {
        trace!("sending header: '{=str}'", key);
        write!(self, "{key}: {value}\r\n").map_err(|_| Error::WriteError)
    }
}

impl<C: Write> fmt::Write for Wire<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.send(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

/// Writes a complete HTTP/1.0 request onto an already connected transport.
///
/// The header section is flushed before the body is written. Caller headers
/// without a value are skipped and the list ends at the first header with an
/// empty key, so arrays terminated by an empty entry keep working.
pub(crate) fn send<C: Write>(
    connection: &mut C,
    method: Method,
    request: &Request<'_>,
    host: &str,
    port: u16,
    headers: &[RequestHeader<'_>],
) -> Result<(), Error> {
    let mut wire = Wire { connection };

    debug!("sending: '{} {=str} HTTP/1.0'", method, request.path);
    write!(wire, "{method} {} HTTP/1.0\r\n", request.path).map_err(|_| Error::WriteError)?;

    wire.header("Connection", "close")?;
    wire.header("Host", format_args!("{host}:{port}"))?;

    match request.body {
        Some(body) => wire.header("Content-Length", body.len())?,
        None if method == Method::Post => wire.header("Content-Length", 0)?,
        None => {}
    }

    for header in headers.iter().take_while(|header| !header.key.is_empty()) {
        if let Some(value) = header.value {
            wire.header(header.key, value)?;
        }
    }

    wire.send(b"\r\n")?;
    wire.connection.flush().map_err(|_| Error::WriteError)?;

    if let Some(body) = request.body {
        debug!("sending body: {=usize} bytes", body.len());
        wire.send(body.as_bytes())?;
    }
    Ok(())
}
