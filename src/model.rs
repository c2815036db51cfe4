//! Target-side execution state and the halt/report sequence.
//!
//! The report sequence is the only executable behavior in this layer: it
//! drains the signature region through the handshake channel one word at a
//! time, emits the termination sentinel, and parks the core.

use crate::signature::DRAIN_WORD_BYTES;
use crate::{read_u32_le, HostChannel, HostHooks, LayoutFault, SignatureRegion};

/// Termination sentinel value reporting "test complete, status success".
pub const TERMINATION_SUCCESS: u32 = 0;

/// Default flat memory image size for a model instance.
pub const DEFAULT_IMAGE_BYTES: usize = 64 * 1024;

/// Immutable configuration for a model instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ModelConfig {
    /// Size in bytes of the flat memory image backing the target program.
    pub image_bytes: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            image_bytes: DEFAULT_IMAGE_BYTES,
        }
    }
}

/// Execution state of the simulated core as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum RunState {
    /// Test body is executing and may still write signature data.
    #[default]
    Running,
    /// Terminal wait state entered after the sentinel write.
    ///
    /// There is no resume and no abort: only the host can end the session,
    /// out-of-band.
    Parked,
}

/// Host-visible state of the target program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelState {
    /// Flat memory image the test body writes signature data into.
    pub memory: Box<[u8]>,
    /// Current execution state.
    pub run_state: RunState,
}

impl Default for ModelState {
    fn default() -> Self {
        Self::with_config(&ModelConfig::default())
    }
}

impl ModelState {
    /// Creates a zeroed model state sized per `config`.
    #[must_use]
    pub fn with_config(config: &ModelConfig) -> Self {
        Self {
            memory: vec![0; config.image_bytes].into_boxed_slice(),
            run_state: RunState::Running,
        }
    }

    /// Returns `true` once the core has entered its terminal wait state.
    #[must_use]
    pub const fn is_parked(&self) -> bool {
        matches!(self.run_state, RunState::Parked)
    }
}

/// Report produced by one invocation of the halt sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct HaltReport {
    /// Number of signature words published to the channel.
    pub words_transferred: u32,
    /// Whether this invocation wrote the termination sentinel.
    pub sentinel_written: bool,
}

/// Program-start entry point.
///
/// No action is required at boot in this configuration; only the (empty by
/// default) boot hook runs.
pub fn boot(state: &mut ModelState, hooks: &mut impl HostHooks) {
    hooks.boot();
    state.run_state = RunState::Running;
}

/// Drains the signature region through `channel`, signals completion, and
/// parks the core.
///
/// Words are published strictly in ascending address order, one at a time,
/// with no batching. An empty region skips the drain entirely and proceeds
/// straight to the sentinel write. Invoking this on an already-parked state
/// is inert: no channel writes occur and the report shows zero transfers.
///
/// # Errors
///
/// Returns a [`LayoutFault`] when the region fails verification against the
/// state's memory image; nothing is published in that case.
pub fn run_halt_sequence(
    state: &mut ModelState,
    region: SignatureRegion,
    channel: &mut impl HostChannel,
) -> Result<HaltReport, LayoutFault> {
    if state.is_parked() {
        return Ok(HaltReport {
            words_transferred: 0,
            sentinel_written: false,
        });
    }

    region.validate_in(&state.memory)?;

    let mut cursor = region.begin();
    let mut remaining = region.len_bytes();
    let mut transferred = 0_u32;
    while remaining != 0 {
        let word = read_u32_le(&state.memory, cursor).ok_or(LayoutFault::RegionOutOfBounds {
            end: region.end(),
            image_bytes: state.memory.len(),
        })?;
        channel.send(word);
        cursor += DRAIN_WORD_BYTES;
        remaining -= DRAIN_WORD_BYTES;
        transferred += 1;
    }

    channel.complete(TERMINATION_SUCCESS);
    state.run_state = RunState::Parked;

    Ok(HaltReport {
        words_transferred: transferred,
        sentinel_written: true,
    })
}

#[cfg(test)]
mod tests {
    use super::{
        boot, run_halt_sequence, HaltReport, ModelConfig, ModelState, RunState,
        DEFAULT_IMAGE_BYTES, TERMINATION_SUCCESS,
    };
    use crate::{
        write_u32_le, HostHooks, InertHooks, LayoutFault, RecordingChannel, SignatureRegion,
    };

    #[test]
    fn default_state_allocates_the_default_image() {
        let state = ModelState::default();
        assert_eq!(state.memory.len(), DEFAULT_IMAGE_BYTES);
        assert_eq!(state.run_state, RunState::Running);
        assert!(!state.is_parked());
    }

    #[test]
    fn config_controls_image_size() {
        let config = ModelConfig { image_bytes: 256 };
        let state = ModelState::with_config(&config);
        assert_eq!(state.memory.len(), 256);
    }

    #[test]
    fn boot_invokes_only_the_boot_hook() {
        #[derive(Default)]
        struct BootProbe {
            boots: u32,
        }
        impl HostHooks for BootProbe {
            fn boot(&mut self) {
                self.boots += 1;
            }
        }

        let mut state = ModelState::default();
        let mut hooks = BootProbe::default();
        boot(&mut state, &mut hooks);
        assert_eq!(hooks.boots, 1);
        assert_eq!(state.run_state, RunState::Running);
    }

    #[test]
    fn empty_region_skips_the_drain_and_still_signals_completion() {
        let mut state = ModelState::default();
        let mut channel = RecordingChannel::new();
        let region = SignatureRegion::new(0x0100, 0x0100).expect("empty region");

        let report = run_halt_sequence(&mut state, region, &mut channel).expect("halt succeeds");

        assert_eq!(
            report,
            HaltReport {
                words_transferred: 0,
                sentinel_written: true,
            }
        );
        assert_eq!(channel.words(), &[] as &[u32]);
        assert_eq!(channel.sentinel(), Some(TERMINATION_SUCCESS));
        assert!(state.is_parked());
    }

    #[test]
    fn drain_publishes_words_in_ascending_address_order() {
        let mut state = ModelState::default();
        assert!(write_u32_le(&mut state.memory, 0x0200, 0xAAAA_AAAA));
        assert!(write_u32_le(&mut state.memory, 0x0204, 0xBBBB_BBBB));
        let region = SignatureRegion::new(0x0200, 0x0208).expect("aligned region");
        let mut channel = RecordingChannel::new();

        let report = run_halt_sequence(&mut state, region, &mut channel).expect("halt succeeds");

        assert_eq!(report.words_transferred, 2);
        assert_eq!(channel.words(), &[0xAAAA_AAAA, 0xBBBB_BBBB]);
        assert_eq!(channel.sentinel(), Some(TERMINATION_SUCCESS));
    }

    #[test]
    fn out_of_bounds_region_is_rejected_before_any_transfer() {
        let mut state = ModelState::with_config(&ModelConfig { image_bytes: 0x100 });
        let region = SignatureRegion::new(0x00F8, 0x0108).expect("aligned region");
        let mut channel = RecordingChannel::new();

        let outcome = run_halt_sequence(&mut state, region, &mut channel);

        assert_eq!(
            outcome,
            Err(LayoutFault::RegionOutOfBounds {
                end: 0x0108,
                image_bytes: 0x100,
            })
        );
        assert_eq!(channel.words(), &[] as &[u32]);
        assert_eq!(channel.sentinel(), None);
        assert!(!state.is_parked());
    }

    #[test]
    fn parked_state_makes_reinvocation_inert() {
        let mut state = ModelState::default();
        let region = SignatureRegion::new(0x0100, 0x0100).expect("empty region");
        let mut channel = RecordingChannel::new();

        run_halt_sequence(&mut state, region, &mut channel).expect("first halt succeeds");
        let report =
            run_halt_sequence(&mut state, region, &mut channel).expect("reinvocation is inert");

        assert_eq!(
            report,
            HaltReport {
                words_transferred: 0,
                sentinel_written: false,
            }
        );
        assert_eq!(channel.writes_after_complete(), 0);
        assert!(state.is_parked());
    }

    #[test]
    fn boot_with_inert_hooks_has_no_observable_effect() {
        let mut state = ModelState::default();
        let before = state.clone();
        boot(&mut state, &mut InertHooks);
        assert_eq!(state, before);
    }
}
