//! Layout-violation taxonomy for signature region verification.

use thiserror::Error;

/// Static layout violations detected before the report sequence transfers
/// anything.
///
/// These are verification-time rejections only; the drain loop itself has
/// no error path once a region passes verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum LayoutFault {
    /// The begin marker is not aligned to the drain word size.
    #[error("signature begin marker {addr:#010x} is not 4-byte aligned")]
    UnalignedBeginMarker {
        /// Address carried by the begin marker.
        addr: u32,
    },
    /// The end marker is not aligned to the drain word size, which also
    /// covers any region whose length is not a multiple of 4.
    #[error("signature end marker {addr:#010x} is not 4-byte aligned")]
    UnalignedEndMarker {
        /// Address carried by the end marker.
        addr: u32,
    },
    /// The end marker resolves below the begin marker.
    #[error("signature end marker {end:#010x} precedes begin marker {begin:#010x}")]
    EndBeforeBegin {
        /// Address carried by the begin marker.
        begin: u32,
        /// Address carried by the end marker.
        end: u32,
    },
    /// The region extends past the end of the memory image.
    #[error("signature region ends at {end:#010x} but the image holds {image_bytes} bytes")]
    RegionOutOfBounds {
        /// Address carried by the end marker.
        end: u32,
        /// Size in bytes of the memory image the region was checked against.
        image_bytes: usize,
    },
}
