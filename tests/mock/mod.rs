//! Scripted transport and manual clock shared by the integration tests.
#![allow(dead_code)]

use iothttp::network::error::Error;
use iothttp::network::{Close, Connect, Connection, Read, Write};
use iothttp::time::Clock;
use std::cell::RefCell;
use std::collections::VecDeque;

/// A connection that replays a scripted response.
///
/// The response is split into bursts. The first burst is available right
/// after connecting; each later one shows up the next time the client asks
/// whether the connection is still up, i.e. after a poll back-off. Once the
/// script is exhausted and drained the peer hangs up, unless `stay_open` is
/// set.
#[derive(Debug, Default)]
pub struct MockConnection {
    bursts: RefCell<VecDeque<Vec<u8>>>,
    rx: RefCell<VecDeque<u8>>,
    pub stay_open: bool,
    pub refuse_connect: bool,
    pub fail_reads: bool,
    pub fail_close: bool,
    /// Bytes accepted before every further write is refused.
    pub write_budget: Option<usize>,

    open: bool,
    pub sent: Vec<u8>,
    pub connected_to: Option<(String, u16)>,
    pub connects: usize,
    pub closes: usize,
    /// Times `available` was asked.
    pub polls: usize,
    pub calls: usize,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response delivered in one burst.
    pub fn respond(data: &[u8]) -> Self {
        Self::with_bursts(&[data])
    }

    pub fn with_bursts(bursts: &[&[u8]]) -> Self {
        let mut connection = Self::new();
        connection.script(bursts);
        connection
    }

    /// Replaces the script for the next exchange.
    pub fn script(&mut self, bursts: &[&[u8]]) {
        *self.bursts.get_mut() = bursts.iter().map(|burst| burst.to_vec()).collect();
        self.rx.get_mut().clear();
    }

    fn release_burst(&self) {
        if let Some(burst) = self.bursts.borrow_mut().pop_front() {
            self.rx.borrow_mut().extend(burst);
        }
    }

    pub fn sent_text(&self) -> &str {
        std::str::from_utf8(&self.sent).unwrap()
    }
}

impl Connect for MockConnection {
    type Error = Error;

    fn connect(&mut self, host: &str, port: u16) -> Result<(), Self::Error> {
        self.calls += 1;
        self.connects += 1;
        self.connected_to = Some((host.to_string(), port));
        if self.refuse_connect {
            return Err(Error::ConnectionRefused);
        }
        self.open = true;
        self.sent.clear();
        self.release_burst();
        Ok(())
    }

    fn connected(&self) -> bool {
        if !self.open {
            return false;
        }
        self.release_burst();
        self.stay_open || !self.rx.borrow().is_empty() || !self.bursts.borrow().is_empty()
    }
}

impl Read for MockConnection {
    type Error = Error;

    fn available(&mut self) -> usize {
        self.calls += 1;
        self.polls += 1;
        if !self.open {
            return 0;
        }
        self.rx.get_mut().len()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.calls += 1;
        if !self.open {
            return Err(Error::ReadError);
        }
        if self.fail_reads {
            return Err(Error::ReadError);
        }
        let rx = self.rx.get_mut();
        let len = buf.len().min(rx.len());
        for (slot, byte) in buf.iter_mut().zip(rx.drain(..len)) {
            *slot = byte;
        }
        Ok(len)
    }
}

impl Write for MockConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.calls += 1;
        if !self.open {
            return Err(Error::WriteError);
        }
        let len = match self.write_budget.as_mut() {
            Some(budget) => {
                let len = buf.len().min(*budget);
                *budget -= len;
                len
            }
            None => buf.len(),
        };
        self.sent.extend_from_slice(&buf[..len]);
        Ok(len)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.calls += 1;
        Ok(())
    }
}

impl Close for MockConnection {
    type Error = Error;

    fn close(&mut self) -> Result<(), Self::Error> {
        self.calls += 1;
        self.closes += 1;
        self.open = false;
        if self.fail_close {
            return Err(Error::ConnectionRefused);
        }
        Ok(())
    }
}

impl Connection for MockConnection {}

/// A clock that only moves when the client sleeps.
#[derive(Debug, Default)]
pub struct ManualClock {
    pub now: u64,
    pub delays: usize,
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now
    }

    fn delay_millis(&mut self, ms: u32) {
        self.delays += 1;
        self.now += u64::from(ms);
    }
}
