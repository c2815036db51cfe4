//! Signature region markers and word-level image access helpers.
//!
//! The region between the begin and end markers is opaque payload: the test
//! body writes architectural results into it over the run, and this layer
//! never validates its content.

use crate::LayoutFault;

/// Required alignment in bytes for both signature markers.
pub const SIGNATURE_ALIGN_BYTES: u32 = 4;

/// Transfer granularity in bytes of the drain loop.
pub const DRAIN_WORD_BYTES: u32 = 4;

/// Contiguous memory block bracketed by the begin and end markers.
///
/// Both boundaries are resolved at link time in the real image; here they
/// are carried as validated addresses into the flat memory image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureRegion {
    begin: u32,
    end: u32,
}

impl SignatureRegion {
    /// Creates a region from resolved begin/end marker addresses.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutFault`] when either marker is not 4-byte aligned
    /// or the end marker precedes the begin marker. An aligned-but-empty
    /// region (`begin == end`) is valid.
    pub const fn new(begin: u32, end: u32) -> Result<Self, LayoutFault> {
        if begin % SIGNATURE_ALIGN_BYTES != 0 {
            return Err(LayoutFault::UnalignedBeginMarker { addr: begin });
        }
        if end % SIGNATURE_ALIGN_BYTES != 0 {
            return Err(LayoutFault::UnalignedEndMarker { addr: end });
        }
        if end < begin {
            return Err(LayoutFault::EndBeforeBegin { begin, end });
        }
        Ok(Self { begin, end })
    }

    /// Address carried by the begin marker.
    #[must_use]
    pub const fn begin(self) -> u32 {
        self.begin
    }

    /// Address carried by the end marker.
    #[must_use]
    pub const fn end(self) -> u32 {
        self.end
    }

    /// Region length in bytes; always a multiple of 4 by construction.
    #[must_use]
    pub const fn len_bytes(self) -> u32 {
        self.end - self.begin
    }

    /// Number of drain-loop transfers this region produces.
    #[must_use]
    pub const fn word_count(self) -> u32 {
        self.len_bytes() / DRAIN_WORD_BYTES
    }

    /// Returns `true` when the markers coincide and no transfer will occur.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.begin == self.end
    }

    /// Checks that the whole region sits inside `image`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutFault::RegionOutOfBounds`] when the end marker lies
    /// past the end of the image.
    pub fn validate_in(self, image: &[u8]) -> Result<(), LayoutFault> {
        let fits = usize::try_from(self.end).is_ok_and(|end| end <= image.len());
        if fits {
            Ok(())
        } else {
            Err(LayoutFault::RegionOutOfBounds {
                end: self.end,
                image_bytes: image.len(),
            })
        }
    }
}

/// Reads one little-endian 32-bit word from `image` at `addr`.
///
/// Returns `None` when the word is not fully contained in the image.
#[must_use]
pub fn read_u32_le(image: &[u8], addr: u32) -> Option<u32> {
    let start = usize::try_from(addr).ok()?;
    let end = start.checked_add(4)?;
    let bytes = image.get(start..end)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Writes one little-endian 32-bit word into `image` at `addr`.
///
/// Returns `false` when the word does not fully fit in the image, in which
/// case nothing is written.
pub fn write_u32_le(image: &mut [u8], addr: u32, word: u32) -> bool {
    let Ok(start) = usize::try_from(addr) else {
        return false;
    };
    let Some(end) = start.checked_add(4) else {
        return false;
    };
    let Some(bytes) = image.get_mut(start..end) else {
        return false;
    };
    bytes.copy_from_slice(&word.to_le_bytes());
    true
}
