//! Fixed device-page layout and register-state descriptor constants.
//!
//! The device page is the host-discoverable block holding the two
//! handshake cells. Its layout is resolved once at link/load time and is
//! never rearranged afterward; only cell values change.

/// Byte offset of the outbound handshake cell (`tohost`) in the device page.
pub const TOHOST_OFFSET: u32 = 0x00;

/// Byte offset of the inbound reply cell (`fromhost`) in the device page.
///
/// Reserved for host-to-target signaling in richer configurations; the
/// target never reads it in this one.
pub const FROMHOST_OFFSET: u32 = 0x08;

/// Size in bytes of each handshake cell.
pub const HANDSHAKE_CELL_BYTES: u32 = 8;

/// Required alignment in bytes for both handshake cells.
pub const HANDSHAKE_ALIGN_BYTES: u32 = 8;

/// Byte offset, relative to the outbound handshake cell, of the
/// termination-sentinel word.
pub const SENTINEL_OFFSET_BYTES: u32 = 4;

/// Total size in bytes of the device page.
pub const DEVICE_PAGE_BYTES: u32 = 16;

/// Size in bytes of the general-register save area advertised to the host.
pub const REGSTATE_GPR_SAVE_BYTES: u32 = 128;

/// Size in bytes of the auxiliary save class advertised to the host.
pub const REGSTATE_AUX_SAVE_BYTES: u32 = 4;

/// Register-state descriptor block published for host-side register
/// reconstruction.
///
/// Both fields are immutable after link time regardless of program state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RegStateDescriptor {
    /// Size in bytes of the general-register save area.
    pub gpr_save_bytes: u32,
    /// Size in bytes of the auxiliary save class.
    pub aux_save_bytes: u32,
}

/// Canonical register-state descriptor values for this device model.
pub const REGSTATE_DESCRIPTOR: RegStateDescriptor = RegStateDescriptor {
    gpr_save_bytes: REGSTATE_GPR_SAVE_BYTES,
    aux_save_bytes: REGSTATE_AUX_SAVE_BYTES,
};

const _: () = assert_device_page_layout();

const fn assert_device_page_layout() {
    assert!(
        TOHOST_OFFSET % HANDSHAKE_ALIGN_BYTES == 0,
        "tohost cell must be 8-byte aligned"
    );
    assert!(
        FROMHOST_OFFSET % HANDSHAKE_ALIGN_BYTES == 0,
        "fromhost cell must be 8-byte aligned"
    );
    assert!(
        TOHOST_OFFSET + HANDSHAKE_CELL_BYTES <= FROMHOST_OFFSET,
        "handshake cells cannot overlap"
    );
    assert!(
        FROMHOST_OFFSET + HANDSHAKE_CELL_BYTES <= DEVICE_PAGE_BYTES,
        "handshake cells must sit inside the device page"
    );
    assert!(
        SENTINEL_OFFSET_BYTES + 4 <= HANDSHAKE_CELL_BYTES,
        "sentinel word must sit inside the outbound handshake cell"
    );
}

#[cfg(test)]
mod tests {
    use super::{
        RegStateDescriptor, DEVICE_PAGE_BYTES, FROMHOST_OFFSET, HANDSHAKE_ALIGN_BYTES,
        HANDSHAKE_CELL_BYTES, REGSTATE_DESCRIPTOR, SENTINEL_OFFSET_BYTES, TOHOST_OFFSET,
    };

    #[test]
    fn handshake_cells_are_aligned_and_disjoint() {
        assert_eq!(TOHOST_OFFSET % HANDSHAKE_ALIGN_BYTES, 0);
        assert_eq!(FROMHOST_OFFSET % HANDSHAKE_ALIGN_BYTES, 0);
        assert!(TOHOST_OFFSET + HANDSHAKE_CELL_BYTES <= FROMHOST_OFFSET);
        assert_eq!(FROMHOST_OFFSET + HANDSHAKE_CELL_BYTES, DEVICE_PAGE_BYTES);
    }

    #[test]
    fn sentinel_word_sits_inside_the_outbound_cell() {
        assert!(SENTINEL_OFFSET_BYTES + 4 <= HANDSHAKE_CELL_BYTES);
        assert_eq!(SENTINEL_OFFSET_BYTES, 4);
    }

    #[test]
    fn regstate_descriptor_matches_published_save_sizes() {
        assert_eq!(
            REGSTATE_DESCRIPTOR,
            RegStateDescriptor {
                gpr_save_bytes: 128,
                aux_save_bytes: 4,
            }
        );
    }
}
