//! HTTP/1.0 protocol implementation for embedded systems.
//!
//! This module provides a lightweight HTTP client designed for `no_std`
//! environments. It focuses on predictable memory usage: the caller owns the
//! response buffer, the parsed response borrows it, and nothing is ever
//! allocated.
//!
//! # Features
//!
//! - HTTP/1.0 requests with `Connection: close`, one connection per call
//! - GET, POST, PUT, DELETE and PATCH, each with or without extra headers
//! - Receive loop with an idle timeout and a short poll back-off, for
//!   transports that deliver a response in several bursts
//! - Overflow-safe collection into a fixed-size buffer
//! - In-place response parsing: status line, headers and body are slices of
//!   the buffer
//! - Tolerates bare `\n` line endings and truncated responses
//!
//! # Usage
//!
//! ```rust,no_run
//! use iothttp::http::{Client, Request, RequestHeader, Response};
//! # use iothttp::network::{Close, Connect, Connection, Read, Write};
//! # use iothttp::time::Clock;
//! # struct MockConnection;
//! # impl Connection for MockConnection {}
//! # impl Connect for MockConnection {
//! #     type Error = ();
//! #     fn connect(&mut self, _host: &str, _port: u16) -> Result<(), Self::Error> { Ok(()) }
//! #     fn connected(&self) -> bool { false }
//! # }
//! # impl Read for MockConnection {
//! #     type Error = ();
//! #     fn available(&mut self) -> usize { 0 }
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl Write for MockConnection {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Close for MockConnection {
//! #     type Error = ();
//! #     fn close(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct SysTick;
//! # impl Clock for SysTick {
//! #     fn now_millis(&self) -> u64 { 0 }
//! #     fn delay_millis(&mut self, _ms: u32) {}
//! # }
//!
//! let mut client = Client::new(MockConnection, SysTick);
//! let mut buffer = [0u8; 1024];
//!
//! let request = Request::new("api.example.com", "/v1/status");
//! let headers = [RequestHeader::new("Accept", "application/json")];
//! let response: Response<'_, 8> = client.get_with_headers(&request, &headers, &mut buffer);
//!
//! if response.is_ok() {
//!     let _body = response.text();
//! }
//! ```

/// `Authorization` header helpers.
pub mod auth;

mod client;
mod collector;
mod cursor;
mod parser;
mod request;
mod response;

pub use client::{
    Client, DEFAULT_IDLE_TIMEOUT_MS, DEFAULT_POLL_INTERVAL_MS, DEFAULT_PORT, Options,
};
pub use parser::parse;
pub use request::{Header, Method, Request, RequestHeader};
pub use response::{NOT_ATTEMPTED, Response};
