//! Bounded write cursor over the caller's response buffer.

/// Appends bytes to a fixed-capacity buffer, keeping the last slot for a NUL
/// terminator.
///
/// A byte is stored only while the write index is strictly below
/// `capacity - 1`. Once the index reaches `capacity - 1` the buffer is
/// terminated there and every further [`push`](Cursor::push) fails. Nothing is
/// ever written past `capacity - 1`.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

/// The buffer reached its last usable slot.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) struct Full;

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes stored so far.
    pub(crate) fn len(&self) -> usize {
        self.pos
    }

    fn limit(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    pub(crate) fn is_full(&self) -> bool {
        self.pos >= self.limit()
    }

    pub(crate) fn push(&mut self, byte: u8) -> Result<(), Full> {
        if self.is_full() {
            self.terminate();
            return Err(Full);
        }
        self.buf[self.pos] = byte;
        self.pos += 1;
        Ok(())
    }

    /// Writes a NUL at the current index. A zero-capacity buffer has no room
    /// even for the terminator and is left untouched.
    pub(crate) fn terminate(&mut self) {
        if let Some(slot) = self.buf.get_mut(self.pos) {
            *slot = 0;
        }
    }

    /// Gives the buffer back as a shared slice of the stored bytes.
    pub(crate) fn into_filled(self) -> &'a [u8] {
        let Self { buf, pos } = self;
        &buf[..pos]
    }
}
