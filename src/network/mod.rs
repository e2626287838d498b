//! A transport abstraction layer for embedded systems
//!
//! The HTTP client never touches a socket directly. It talks to anything that
//! implements the small set of traits in this module, which map one-to-one
//! onto the operations an embedded TCP client offers: connect, write, flush,
//! poll for available bytes, read, query the connected state, and close.
//!
//! A connection object is stateful and lives inside the
//! [`Client`](crate::http::Client). It is connected at the start of every
//! exchange and closed at the end of it, so implementations must accept
//! `connect` after `close`.

#![deny(unsafe_code)]

/// Common error types for network operations
pub mod error;

/// `std::net::TcpStream` backed connection
#[cfg(feature = "std")]
pub mod tcp;

#[cfg(feature = "std")]
pub use tcp::TcpConnection;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{Close, Connect, Connection, Read, Write};
}

/// Opens a connection to a remote host and reports whether it is still up.
pub trait Connect {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Open a connection to `host:port`
    fn connect(&mut self, host: &str, port: u16) -> Result<(), Self::Error>;
    /// Whether the connection is still usable.
    ///
    /// Implementations should keep reporting `true` while unread bytes
    /// remain, even if the peer has already closed its side, so that the
    /// receive loop gets a chance to drain them.
    fn connected(&self) -> bool;
}

/// Reads bytes that have already arrived.
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Number of bytes that can be read without blocking
    fn available(&mut self) -> usize;
    /// Read data from the connection
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Sends bytes to the peer.
pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the connection
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Tears a connection down.
pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the connection. Closing an already closed connection is not an error.
    fn close(&mut self) -> Result<(), Self::Error>;
}

/// A synchronous, reconnectable stream connection
pub trait Connection: Connect + Read + Write + Close {}
