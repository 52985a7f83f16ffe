//! Bounds-checked little-endian reader over an in-memory replay buffer.
//!
//! Every read names the field it is decoding so a short buffer reports
//! exactly which value could not be read and where it started.

use super::error::DecodeError;

/// Cursor over a borrowed byte slice.
///
/// Reads never panic: running past the end of the buffer yields
/// [`DecodeError::Truncated`] carrying the offset of the failing field.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Current read position in bytes from the start of the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Take exactly `len` bytes or fail without moving the cursor.
    fn take(&mut self, len: usize, field: &'static str) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < len {
            return Err(DecodeError::Truncated {
                field,
                offset: self.offset,
                needed: len,
                available: self.remaining(),
                frame: None,
            });
        }
        let bytes = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], DecodeError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.take(N, field)?);
        Ok(buf)
    }

    pub fn read_u8(&mut self, field: &'static str) -> Result<u8, DecodeError> {
        Ok(self.take(1, field)?[0])
    }

    pub fn read_i32(&mut self, field: &'static str) -> Result<i32, DecodeError> {
        Ok(i32::from_le_bytes(self.take_array(field)?))
    }

    pub fn read_f32(&mut self, field: &'static str) -> Result<f32, DecodeError> {
        Ok(f32::from_le_bytes(self.take_array(field)?))
    }

    /// Advance past `len` bytes whose values are not retained.
    pub fn skip(&mut self, len: usize, field: &'static str) -> Result<(), DecodeError> {
        self.take(len, field).map(|_| ())
    }

    /// Read a line terminated by `\n` or `\r`, consuming the terminator.
    ///
    /// A buffer without a terminator yields everything up to its end.
    /// Bytes are mapped one-to-one onto chars.
    pub fn read_line(&mut self) -> String {
        let rest = &self.data[self.offset..];
        let end = rest
            .iter()
            .position(|&b| b == b'\n' || b == b'\r')
            .unwrap_or(rest.len());
        let line = latin1(&rest[..end]);
        // Skip the terminator too, when there is one
        self.offset += (end + 1).min(rest.len());
        line
    }

    /// Read a zero-terminated string of at most `max_len` bytes.
    ///
    /// Stops after the terminator or after `max_len` bytes, whichever comes
    /// first, and trims surrounding whitespace. Hitting the end of the buffer
    /// before either is a truncation.
    pub fn read_cstring(
        &mut self,
        max_len: usize,
        field: &'static str,
    ) -> Result<String, DecodeError> {
        let start = self.offset;
        let rest = &self.data[start..];
        let window = &rest[..max_len.min(rest.len())];

        let (text, consumed) = match window.iter().position(|&b| b == 0) {
            Some(nul) => (&window[..nul], nul + 1),
            None if window.len() == max_len => (window, max_len),
            None => {
                return Err(DecodeError::Truncated {
                    field,
                    offset: start,
                    needed: window.len() + 1,
                    available: window.len(),
                    frame: None,
                })
            }
        };

        self.offset += consumed;
        Ok(latin1(text).trim().to_string())
    }
}

/// Decode single-byte characters.
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
