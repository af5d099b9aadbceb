//! Growable wire buffer with bounds-checked fixed-width access
//!
//! All multi-byte values are big-endian, as the protocol family mandates.
//! An out-of-range offset is a caller bug, not a decode error: the framing
//! stage has already established that enough bytes are present, so every
//! accessor here panics rather than returning a `Result`.

use std::fmt;

use byteorder::{BigEndian, ByteOrder};

/// A caller-owned byte buffer backing one message and all object views
/// into it.
///
/// The buffer tracks the current message length separately from its
/// allocation, so the top-level message length accessor is bookkeeping
/// rather than a byte-offset read.
pub struct WireBuffer {
    bytes: Vec<u8>,
    used: usize,
}

impl WireBuffer {
    /// Allocate a zero-filled buffer of `len` bytes, all counted as part of
    /// the current message.
    pub fn new(len: usize) -> Self {
        Self {
            bytes: vec![0; len],
            used: len,
        }
    }

    /// Build a buffer holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            used: bytes.len(),
        }
    }

    /// Current message length in bytes.
    pub fn message_length(&self) -> usize {
        self.used
    }

    /// Set the current message length, growing the allocation if needed.
    pub fn set_message_length(&mut self, len: usize) {
        if len > self.bytes.len() {
            self.bytes.resize(len, 0);
        }
        self.used = len;
    }

    /// Read-only view of the allocated bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    fn check(&self, offset: usize, width: usize) {
        if offset + width > self.bytes.len() {
            panic!(
                "wire buffer access out of range: offset {offset} width {width} in {} bytes",
                self.bytes.len()
            );
        }
    }

    /// Read a big-endian u16 at an absolute byte offset.
    ///
    /// # Panics
    /// If the offset is out of range for the allocation.
    pub fn get_u16(&self, offset: usize) -> u16 {
        self.check(offset, 2);
        BigEndian::read_u16(&self.bytes[offset..offset + 2])
    }

    /// Write a big-endian u16 at an absolute byte offset.
    ///
    /// # Panics
    /// If the offset is out of range for the allocation.
    pub fn set_u16(&mut self, offset: usize, value: u16) {
        self.check(offset, 2);
        BigEndian::write_u16(&mut self.bytes[offset..offset + 2], value);
    }

    /// Read a big-endian u32 at an absolute byte offset.
    ///
    /// # Panics
    /// If the offset is out of range for the allocation.
    pub fn get_u32(&self, offset: usize) -> u32 {
        self.check(offset, 4);
        BigEndian::read_u32(&self.bytes[offset..offset + 4])
    }

    /// Write a big-endian u32 at an absolute byte offset.
    ///
    /// # Panics
    /// If the offset is out of range for the allocation.
    pub fn set_u32(&mut self, offset: usize, value: u32) {
        self.check(offset, 4);
        BigEndian::write_u32(&mut self.bytes[offset..offset + 4], value);
    }
}

impl fmt::Debug for WireBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Cap the dump; messages can be large and this shows up in panics.
        let shown = self.used.min(64);
        write!(
            f,
            "WireBuffer {{ used: {}, alloc: {}, bytes: {}{} }}",
            self.used,
            self.bytes.len(),
            hex::encode(&self.bytes[..shown]),
            if self.used > shown { ".." } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u16_round_trip_is_big_endian() {
        let mut buf = WireBuffer::new(8);
        buf.set_u16(2, 0x1234);
        assert_eq!(buf.get_u16(2), 0x1234);
        assert_eq!(buf.as_slice()[2], 0x12);
        assert_eq!(buf.as_slice()[3], 0x34);
    }

    #[test]
    fn u32_round_trip_is_big_endian() {
        let mut buf = WireBuffer::new(8);
        buf.set_u32(4, 0xdead_beef);
        assert_eq!(buf.get_u32(4), 0xdead_beef);
        assert_eq!(&buf.as_slice()[4..], &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_read_panics() {
        let buf = WireBuffer::new(4);
        buf.get_u32(2);
    }

    #[test]
    fn message_length_grows_allocation() {
        let mut buf = WireBuffer::new(8);
        buf.set_message_length(32);
        assert_eq!(buf.message_length(), 32);
        buf.set_u32(28, 1);
    }

    #[test]
    fn shrinking_message_length_keeps_allocation() {
        let mut buf = WireBuffer::new(16);
        buf.set_message_length(8);
        assert_eq!(buf.message_length(), 8);
        // Bytes past the message are still addressable storage.
        buf.set_u16(14, 7);
        assert_eq!(buf.get_u16(14), 7);
    }

    #[test]
    fn debug_dump_is_hex() {
        let buf = WireBuffer::from_bytes(&[0xab, 0xcd]);
        let dump = format!("{buf:?}");
        assert!(dump.contains("abcd"), "{dump}");
    }
}
