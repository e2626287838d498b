//! Common error types for HTTP exchanges

/// A common error type for network operations.
///
/// This enum defines the conditions an exchange can end in. It is designed to
/// be simple and portable for `no_std` environments, and is `Copy` so it can
/// be stored in a [`Response`](crate::http::Response) next to the borrowed
/// fields.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The request had no host to connect to.
    InvalidAddress,
    /// A connection attempt was refused.
    ConnectionRefused,
    /// An error occurred while sending the request.
    WriteError,
    /// An error occurred during a read operation.
    ReadError,
    /// No byte arrived within the idle window.
    Timeout,
    /// The response did not fit in the caller's buffer.
    BufferOverflow,
    /// The collected bytes are too short to hold a status line.
    MalformedResponse,
    /// The response body could not be deserialized.
    InvalidBody,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::InvalidAddress => defmt::write!(f, "InvalidAddress"),
            Error::ConnectionRefused => defmt::write!(f, "ConnectionRefused"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::BufferOverflow => defmt::write!(f, "BufferOverflow"),
            Error::MalformedResponse => defmt::write!(f, "MalformedResponse"),
            Error::InvalidBody => defmt::write!(f, "InvalidBody"),
        }
    }
}
