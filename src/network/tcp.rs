use super::error::Error;
use super::{Close, Connect, Connection, Read, Write};
use std::io::{ErrorKind, Read as StdRead, Write as StdWrite};
use std::net::{Shutdown, TcpStream};

const PEEK_WINDOW: usize = 512;

/// A [`Connection`] over `std::net::TcpStream`.
///
/// `available` peeks the socket in non-blocking mode. A zero-length peek means
/// the peer closed its side and nothing is left to read, at which point
/// `connected` starts returning `false`.
#[derive(Debug, Default)]
pub struct TcpConnection {
    stream: Option<TcpStream>,
    peer_closed: bool,
}

impl TcpConnection {
    /// Creates an unconnected transport.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Connect for TcpConnection {
    type Error = Error;

    fn connect(&mut self, host: &str, port: u16) -> Result<(), Self::Error> {
        let stream = TcpStream::connect((host, port)).map_err(|_| Error::ConnectionRefused)?;
        stream.set_nodelay(true).map_err(|_| Error::ConnectionRefused)?;
        self.stream = Some(stream);
        self.peer_closed = false;
        Ok(())
    }

    fn connected(&self) -> bool {
        self.stream.is_some() && !self.peer_closed
    }
}

impl Read for TcpConnection {
    type Error = Error;

    fn available(&mut self) -> usize {
        let Some(stream) = self.stream.as_mut() else {
            return 0;
        };
        if stream.set_nonblocking(true).is_err() {
            self.peer_closed = true;
            return 0;
        }
        let mut window = [0u8; PEEK_WINDOW];
        let count = match stream.peek(&mut window) {
            Ok(0) => {
                self.peer_closed = true;
                0
            }
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::WouldBlock => 0,
            Err(_) => {
                self.peer_closed = true;
                0
            }
        };
        if stream.set_nonblocking(false).is_err() {
            self.peer_closed = true;
        }
        count
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let stream = self.stream.as_mut().ok_or(Error::ReadError)?;
        stream.read(buf).map_err(|e| {
            if e.kind() == ErrorKind::WouldBlock {
                Error::Timeout
            } else {
                Error::ReadError
            }
        })
    }
}

impl Write for TcpConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let stream = self.stream.as_mut().ok_or(Error::WriteError)?;
        stream.write(buf).map_err(|_| Error::WriteError)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        let stream = self.stream.as_mut().ok_or(Error::WriteError)?;
        stream.flush().map_err(|_| Error::WriteError)
    }
}

impl Close for TcpConnection {
    type Error = Error;

    fn close(&mut self) -> Result<(), Self::Error> {
        if let Some(stream) = self.stream.take() {
            // The peer may already have torn the socket down.
            let _ = stream.shutdown(Shutdown::Both);
        }
        self.peer_closed = false;
        Ok(())
    }
}

impl Connection for TcpConnection {}
