use crate::config::MAX_COMMAND_LEN;
use crate::{Error, Result};

/// Accumulates serial bytes until a line terminator arrives.
pub struct CommandBuffer {
    buffer: heapless::String<MAX_COMMAND_LEN>,
    capacity: usize,
    overflowed: bool,
}

impl CommandBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: heapless::String::new(),
            capacity: capacity.min(MAX_COMMAND_LEN),
            overflowed: false,
        }
    }

    /// Feeds one byte and returns the finished line, if any.
    ///
    /// `\n` and `\r` end a line; empty lines are skipped. Non-ASCII bytes are
    /// dropped. A line that outgrows the capacity is discarded up to its
    /// terminator, and the first overflowing byte reports [`Error::BufferOverflow`].
    pub fn push_byte(&mut self, byte: u8) -> Result<Option<&str>> {
        match byte {
            b'\n' | b'\r' => {
                if self.overflowed {
                    self.overflowed = false;
                    self.buffer.clear();
                    return Ok(None);
                }
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                Ok(Some(self.buffer.as_str()))
            }
            _ if !byte.is_ascii() => Ok(None),
            _ if self.overflowed => Ok(None),
            _ => {
                if self.buffer.len() >= self.capacity || self.buffer.push(byte as char).is_err() {
                    self.overflowed = true;
                    self.buffer.clear();
                    return Err(Error::BufferOverflow);
                }
                Ok(None)
            }
        }
    }

    /// Clears the buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Get buffer usage
    pub fn usage(&self) -> (usize, usize) {
        (self.buffer.len(), self.capacity)
    }
}
