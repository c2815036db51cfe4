//! Outbound host handshake channel and the device-page backing store.

use crate::layout::{
    DEVICE_PAGE_BYTES, FROMHOST_OFFSET, HANDSHAKE_CELL_BYTES, SENTINEL_OFFSET_BYTES, TOHOST_OFFSET,
};

/// Single-slot, non-buffered, synchronous outbound channel to the host.
///
/// Exactly one producer (the target) and one consumer (the host) exist by
/// construction. There is no queue and no acknowledgment: the host
/// observing each published word before the next [`send`](Self::send) is an
/// assumed invariant of the host environment, not enforced here.
pub trait HostChannel {
    /// Publishes one signature word to the handshake cell.
    fn send(&mut self, word: u32);

    /// Writes the termination sentinel to the cell offset next to the
    /// handshake word, signaling test completion to the host.
    fn complete(&mut self, sentinel: u32);
}

// Device-page offsets are link-time constants well under usize range.
#[allow(clippy::cast_possible_truncation)]
const fn off(offset: u32) -> usize {
    offset as usize
}

/// Memory-backed device page holding the `tohost` and `fromhost` cells.
///
/// This is the host-visible storage a simulator snoops: [`HostChannel`]
/// writes land at the fixed layout offsets, and the host-side helpers model
/// the consuming end of the rendezvous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DevicePage {
    bytes: [u8; off(DEVICE_PAGE_BYTES)],
}

impl DevicePage {
    /// Creates a zeroed device page.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; off(DEVICE_PAGE_BYTES)],
        }
    }

    fn cell(&self, offset: u32) -> u64 {
        let start = off(offset);
        let end = start + off(HANDSHAKE_CELL_BYTES);
        let mut raw = [0_u8; 8];
        raw.copy_from_slice(&self.bytes[start..end]);
        u64::from_le_bytes(raw)
    }

    fn put_u32(&mut self, offset: u32, word: u32) {
        let start = off(offset);
        self.bytes[start..start + 4].copy_from_slice(&word.to_le_bytes());
    }

    /// Current value of the outbound handshake cell.
    #[must_use]
    pub fn tohost(&self) -> u64 {
        self.cell(TOHOST_OFFSET)
    }

    /// Current value of the reserved inbound reply cell.
    #[must_use]
    pub fn fromhost(&self) -> u64 {
        self.cell(FROMHOST_OFFSET)
    }

    /// Host-side consumption: clears the outbound cell after reading it.
    pub fn host_clear_tohost(&mut self) {
        let start = off(TOHOST_OFFSET);
        let end = start + off(HANDSHAKE_CELL_BYTES);
        self.bytes[start..end].fill(0);
    }

    /// Host-side reply: stores a value in the reserved inbound cell.
    pub fn host_write_fromhost(&mut self, value: u64) {
        let start = off(FROMHOST_OFFSET);
        let end = start + off(HANDSHAKE_CELL_BYTES);
        self.bytes[start..end].copy_from_slice(&value.to_le_bytes());
    }
}

impl HostChannel for DevicePage {
    fn send(&mut self, word: u32) {
        self.put_u32(TOHOST_OFFSET, word);
    }

    fn complete(&mut self, sentinel: u32) {
        self.put_u32(TOHOST_OFFSET + SENTINEL_OFFSET_BYTES, sentinel);
    }
}

/// Host-harness channel double that records the full publication sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordingChannel {
    words: Vec<u32>,
    sentinel: Option<u32>,
    writes_after_complete: u32,
}

impl RecordingChannel {
    /// Creates an empty recording channel.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: Vec::new(),
            sentinel: None,
            writes_after_complete: 0,
        }
    }

    /// Words published so far, in publication order.
    #[must_use]
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Termination sentinel, once written.
    #[must_use]
    pub const fn sentinel(&self) -> Option<u32> {
        self.sentinel
    }

    /// Number of channel writes attempted after the sentinel.
    ///
    /// A conforming target parks after completion, so this stays zero.
    #[must_use]
    pub const fn writes_after_complete(&self) -> u32 {
        self.writes_after_complete
    }
}

impl HostChannel for RecordingChannel {
    fn send(&mut self, word: u32) {
        if self.sentinel.is_some() {
            self.writes_after_complete += 1;
        } else {
            self.words.push(word);
        }
    }

    fn complete(&mut self, sentinel: u32) {
        if self.sentinel.is_some() {
            self.writes_after_complete += 1;
        } else {
            self.sentinel = Some(sentinel);
        }
    }
}
