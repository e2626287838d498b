use super::collector::collect;
use super::parser::parse_into;
use super::request::{self, Method, Request, RequestHeader};
use super::response::Response;
use crate::network::Connection;
use crate::network::error::Error;
use crate::time::Clock;

/// Default port used when a request does not name one.
pub const DEFAULT_PORT: u16 = 80;
/// Default idle window, in milliseconds, before the receive loop gives up.
pub const DEFAULT_IDLE_TIMEOUT_MS: u32 = 5000;
/// Default pause, in milliseconds, between two drain passes.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 200;

/// Tuning knobs for the exchange.
///
/// # Examples
///
/// ```rust
/// use iothttp::http::Options;
///
/// let options = Options {
///     idle_timeout_ms: 2_000,
///     ..Options::default()
/// };
/// assert_eq!(options.poll_interval_ms, 200);
/// assert_eq!(options.default_port, 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// How long the peer may stay silent before the response is considered
    /// complete and a timeout is recorded.
    pub idle_timeout_ms: u32,
    /// Pause between two passes over the available bytes. Gives servers that
    /// answer in several bursts time to send the rest.
    pub poll_interval_ms: u32,
    /// Port used when [`Request::port`] is unset.
    pub default_port: u16,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            idle_timeout_ms: DEFAULT_IDLE_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            default_port: DEFAULT_PORT,
        }
    }
}

/// An HTTP/1.0 client over a reconnectable transport.
///
/// Each call is exactly one connection attempt and one exchange: connect,
/// send the request, collect the response into the caller's buffer until the
/// peer closes or goes quiet, close, parse. There are no retries.
///
/// The returned [`Response`] borrows `buffer`; all of its text fields are
/// slices of it.
#[derive(Debug)]
pub struct Client<C: Connection, K: Clock> {
    connection: C,
    clock: K,
    options: Options,
}

impl<C: Connection, K: Clock> Client<C, K> {
    /// Creates a client with [`Options::default`].
    pub fn new(connection: C, clock: K) -> Self {
        Self::with_options(connection, clock, Options::default())
    }

    /// Creates a client with custom options.
    pub fn with_options(connection: C, clock: K, options: Options) -> Self {
        Self {
            connection,
            clock,
            options,
        }
    }

    /// The options in use.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The underlying transport.
    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// The underlying transport, mutably.
    pub fn connection_mut(&mut self) -> &mut C {
        &mut self.connection
    }

    /// Gives back the transport and the clock.
    pub fn into_parts(self) -> (C, K) {
        (self.connection, self.clock)
    }

    /// `GET`
    pub fn get<'buf, const H: usize>(
        &mut self,
        request: &Request<'_>,
        buffer: &'buf mut [u8],
    ) -> Response<'buf, H> {
        self.request(Method::Get, request, &[], buffer)
    }

    /// `GET` with extra headers.
    pub fn get_with_headers<'buf, const H: usize>(
        &mut self,
        request: &Request<'_>,
        headers: &[RequestHeader<'_>],
        buffer: &'buf mut [u8],
    ) -> Response<'buf, H> {
        self.request(Method::Get, request, headers, buffer)
    }

    /// `POST`. A request without a body is sent with `Content-Length: 0`.
    pub fn post<'buf, const H: usize>(
        &mut self,
        request: &Request<'_>,
        buffer: &'buf mut [u8],
    ) -> Response<'buf, H> {
        self.request(Method::Post, request, &[], buffer)
    }

    /// `POST` with extra headers.
    pub fn post_with_headers<'buf, const H: usize>(
        &mut self,
        request: &Request<'_>,
        headers: &[RequestHeader<'_>],
        buffer: &'buf mut [u8],
    ) -> Response<'buf, H> {
        self.request(Method::Post, request, headers, buffer)
    }

    /// `PUT`
    pub fn put<'buf, const H: usize>(
        &mut self,
        request: &Request<'_>,
        buffer: &'buf mut [u8],
    ) -> Response<'buf, H> {
        self.request(Method::Put, request, &[], buffer)
    }

    /// `PUT` with extra headers.
    pub fn put_with_headers<'buf, const H: usize>(
        &mut self,
        request: &Request<'_>,
        headers: &[RequestHeader<'_>],
        buffer: &'buf mut [u8],
    ) -> Response<'buf, H> {
        self.request(Method::Put, request, headers, buffer)
    }

    /// `DELETE`
    pub fn delete<'buf, const H: usize>(
        &mut self,
        request: &Request<'_>,
        buffer: &'buf mut [u8],
    ) -> Response<'buf, H> {
        self.request(Method::Delete, request, &[], buffer)
    }

    /// `DELETE` with extra headers.
    pub fn delete_with_headers<'buf, const H: usize>(
        &mut self,
        request: &Request<'_>,
        headers: &[RequestHeader<'_>],
        buffer: &'buf mut [u8],
    ) -> Response<'buf, H> {
        self.request(Method::Delete, request, headers, buffer)
    }

    /// `PATCH`
    pub fn patch<'buf, const H: usize>(
        &mut self,
        request: &Request<'_>,
        buffer: &'buf mut [u8],
    ) -> Response<'buf, H> {
        self.request(Method::Patch, request, &[], buffer)
    }

    /// `PATCH` with extra headers.
    pub fn patch_with_headers<'buf, const H: usize>(
        &mut self,
        request: &Request<'_>,
        headers: &[RequestHeader<'_>],
        buffer: &'buf mut [u8],
    ) -> Response<'buf, H> {
        self.request(Method::Patch, request, headers, buffer)
    }

    /// Performs one exchange with an arbitrary method.
    ///
    /// The status of the returned response is [`NOT_ATTEMPTED`] when the
    /// request has no host (no transport call is made at all), when the
    /// connection cannot be opened, or when sending fails. Otherwise the
    /// buffer is zero-filled, the response collected into it and parsed; a
    /// timeout, read error or overflow is recorded in
    /// [`Response::error`] and whatever arrived is still parsed.
    ///
    /// [`NOT_ATTEMPTED`]: super::NOT_ATTEMPTED
    pub fn request<'buf, const H: usize>(
        &mut self,
        method: Method,
        request: &Request<'_>,
        headers: &[RequestHeader<'_>],
        buffer: &'buf mut [u8],
    ) -> Response<'buf, H> {
        let Some(host) = request.host() else {
            warn!("request has no host, nothing sent");
            return Response::not_attempted(Error::InvalidAddress);
        };
        let port = request.port_or(self.options.default_port);

        if let Err(e) = self.send(method, request, host, port, headers) {
            if self.connection.close().is_err() {
                warn!("failed to close connection");
            }
            return Response::not_attempted(e);
        }

        // Start from a cleared response and buffer so nothing stale survives
        // a short or failed read.
        let mut response = Response::new();
        buffer.fill(0);

        let collected = collect(
            &mut self.connection,
            &mut self.clock,
            &self.options,
            buffer,
        );
        if let Err(e) = parse_into(collected.bytes, &mut response) {
            response.error = Some(e);
        }
        // A transfer failure explains a parse failure, so it wins.
        if let Some(e) = collected.error {
            response.error = Some(e);
        }
        response
    }

    fn send(
        &mut self,
        method: Method,
        request: &Request<'_>,
        host: &str,
        port: u16,
        headers: &[RequestHeader<'_>],
    ) -> Result<(), Error> {
        debug!("connecting to: '{=str}:{=u16}'...", host, port);
        self.connection.connect(host, port).map_err(|_| {
            error!("connection failed!");
            Error::ConnectionRefused
        })?;
        debug!("connected!");

        request::send(&mut self.connection, method, request, host, port, headers)
    }
}
