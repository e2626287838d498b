//! Receive loop that drains the transport into the response buffer.

use super::client::Options;
use super::cursor::Cursor;
use crate::network::error::Error;
use crate::network::{Close, Connect, Read};
use crate::time::Clock;

/// Bytes pulled from the transport per `read` call.
const READ_CHUNK: usize = 64;

/// Outcome of one receive loop.
#[derive(Debug)]
pub(crate) struct Collected<'a> {
    /// The bytes stored in the buffer, without the terminator.
    pub(crate) bytes: &'a [u8],
    /// Why collection stopped early, if it did.
    pub(crate) error: Option<Error>,
}

/// Drains `connection` into `buffer` until the peer disconnects, the idle
/// window passes without a byte, or a read error or overflow occurs.
///
/// The first read may not carry the whole response, so after each pass over
/// the bytes currently available the loop waits `poll_interval_ms` before
/// looking again. The buffer is NUL-terminated after every pass. The
/// connection is closed on every exit path.
pub(crate) fn collect<'a, C, K>(
    connection: &mut C,
    clock: &mut K,
    options: &Options,
    buffer: &'a mut [u8],
) -> Collected<'a>
where
    C: Connect + Read + Close,
    K: Clock,
{
    let mut cursor = Cursor::new(buffer);
    let first_read = clock.now_millis();
    let mut last_read = first_read;
    let mut error = None;

    loop {
        let stored = cursor.len();
        if let Err(e) = drain(connection, &mut cursor) {
            error = Some(e);
        }
        if cursor.len() > stored {
            last_read = clock.now_millis();
        }
        cursor.terminate();

        let idle = clock.now_millis().saturating_sub(last_read);
        if error.is_none() && idle > u64::from(options.idle_timeout_ms) {
            warn!("no data for {=u64}ms, giving up", idle);
            error = Some(Error::Timeout);
        }

        if error.is_some() {
            break;
        }
        clock.delay_millis(options.poll_interval_ms);
        if !connection.connected() {
            break;
        }
    }

    cursor.terminate();
    if connection.close().is_err() {
        warn!("failed to close connection");
    }
    debug!(
        "received {=usize} bytes in {=u64}ms",
        cursor.len(),
        clock.now_millis().saturating_sub(first_read)
    );

    Collected {
        bytes: cursor.into_filled(),
        error,
    }
}

/// Reads everything the transport currently has into the cursor.
fn drain<C>(connection: &mut C, cursor: &mut Cursor<'_>) -> Result<(), Error>
where
    C: Read + Close,
{
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        let pending = connection.available();
        if pending == 0 {
            return Ok(());
        }
        trace!("receiving {=usize} bytes", pending);
        let want = pending.min(chunk.len());
        let read = match connection.read(&mut chunk[..want]) {
            Ok(0) | Err(_) => {
                error!("error: no data available");
                return Err(Error::ReadError);
            }
            Ok(n) => n,
        };
        for &byte in &chunk[..read] {
            if cursor.push(byte).is_err() {
                error!("error: response larger than buffer");
                if connection.close().is_err() {
                    warn!("failed to close connection");
                }
                return Err(Error::BufferOverflow);
            }
        }
    }
}
