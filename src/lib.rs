//! Device-model glue layer for ISA conformance tests.
//!
//! Fixes the memory-layout contract a conformance test establishes for its
//! host simulator and the report sequence that drains the signature region
//! through the handshake channel, signals completion, and parks the core.

/// Fixed device-page layout and register-state descriptor constants.
pub mod layout;
pub use layout::{
    RegStateDescriptor, DEVICE_PAGE_BYTES, FROMHOST_OFFSET, HANDSHAKE_ALIGN_BYTES,
    HANDSHAKE_CELL_BYTES, REGSTATE_AUX_SAVE_BYTES, REGSTATE_DESCRIPTOR, REGSTATE_GPR_SAVE_BYTES,
    SENTINEL_OFFSET_BYTES, TOHOST_OFFSET,
};

/// Layout-violation taxonomy for signature region verification.
pub mod fault;
pub use fault::LayoutFault;

/// Signature region markers and word-level image access helpers.
pub mod signature;
pub use signature::{
    read_u32_le, write_u32_le, SignatureRegion, DRAIN_WORD_BYTES, SIGNATURE_ALIGN_BYTES,
};

/// Outbound host handshake channel and the device-page backing store.
pub mod channel;
pub use channel::{DevicePage, HostChannel, RecordingChannel};

/// Extension points for richer host environments.
pub mod hooks;
pub use hooks::{HostHooks, InertHooks};

/// Target-side execution state and the halt/report sequence.
pub mod model;
pub use model::{
    boot, run_halt_sequence, HaltReport, ModelConfig, ModelState, RunState, DEFAULT_IMAGE_BYTES,
    TERMINATION_SUCCESS,
};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
