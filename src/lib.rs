//! # iothttp - HTTP/1.0 client for IoT devices
//!
//! A minimal HTTP client for resource-constrained devices. It writes an
//! HTTP/1.0 request onto any byte-stream transport, collects the response into
//! a fixed-size buffer supplied by the caller, and parses that buffer in place.
//! The crate never allocates and supports `no_std` environments.
//!
//! ## Features
//!
//! - **Transport agnostic**: works with anything implementing
//!   [`network::Connection`]; a `TcpStream` implementation ships with `std`
//! - **Bounded memory**: the response lives in the caller's buffer, headers in
//!   a fixed-capacity list
//! - **Zero copy**: version, reason, headers and body borrow the buffer
//! - **Forgiving**: truncated, oversized or LF-only responses degrade
//!   gracefully instead of failing
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! iothttp = "0.1.0"
//! ```
//!
//! ### Basic HTTP Client Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "std")]
//! # fn main() {
//! use iothttp::http::{Client, Request, Response};
//! use iothttp::network::TcpConnection;
//! use iothttp::time::StdClock;
//!
//! let mut client = Client::new(TcpConnection::new(), StdClock::new());
//! let mut buffer = [0u8; 2048];
//!
//! let request = Request::new("httpbin.org", "/get");
//! let response: Response<'_, 16> = client.get(&request, &mut buffer);
//!
//! match response.error {
//!     None if response.is_ok() => { /* use response.body */ }
//!     _ => { /* inspect response.status and response.error */ }
//! }
//! # }
//! # #[cfg(not(feature = "std"))]
//! # fn main() {}
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based IoT devices (Raspberry Pi, etc.)
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: `TcpConnection` and `StdClock` (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

// Must come first so the logging macros are visible to every module.
mod fmt;

/// Transport abstraction the client runs on.
///
/// Contains the connection traits, the common error type and, with the `std`
/// feature, a `TcpStream` based connection.
pub mod network;

/// Clock abstraction used for the receive timeout.
pub mod time;

/// The HTTP/1.0 client, request writer and in-place response parser.
pub mod http;

pub use http::{Client, Header, Method, Options, Request, RequestHeader, Response};
pub use network::error::Error;
