//! Extension points for richer host environments.
//!
//! Every hook defaults to a no-op so the same test source runs unmodified
//! against a host with no I/O or interrupt support. Richer harnesses
//! override individual methods without touching the halt sequence.

/// Named capability hooks exposed to the test body.
///
/// All default implementations perform no observable effect.
pub trait HostHooks {
    /// Program-start customization point.
    fn boot(&mut self) {}

    /// Prepares the host I/O channel, when one exists.
    fn io_init(&mut self) {}

    /// Emits a string through the host I/O channel.
    fn io_write_str(&mut self, _text: &str) {}

    /// Flushes or verifies pending host I/O.
    fn io_check(&mut self) {}

    /// Asserts that a general register holds an expected value.
    fn assert_gpr_eq(&mut self, _reg: u8, _expected: u32) {}

    /// Asserts that a single-precision float register holds an expected value.
    fn assert_fpr_single_eq(&mut self, _reg: u8, _expected: u32) {}

    /// Asserts that a double-precision float register holds an expected value.
    fn assert_fpr_double_eq(&mut self, _reg: u8, _expected: u64) {}

    /// Raises the machine software interrupt line.
    fn set_software_interrupt(&mut self) {}

    /// Clears the machine software interrupt line.
    fn clear_software_interrupt(&mut self) {}

    /// Clears the machine timer interrupt line.
    fn clear_timer_interrupt(&mut self) {}

    /// Clears the machine external interrupt line.
    fn clear_external_interrupt(&mut self) {}
}

/// Hook set for hosts with no I/O, assertion, or interrupt support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InertHooks;

impl HostHooks for InertHooks {}

#[cfg(test)]
mod tests {
    use super::{HostHooks, InertHooks};

    #[derive(Default)]
    struct CountingHooks {
        boots: u32,
        writes: Vec<String>,
        gpr_asserts: Vec<(u8, u32)>,
    }

    impl HostHooks for CountingHooks {
        fn boot(&mut self) {
            self.boots += 1;
        }

        fn io_write_str(&mut self, text: &str) {
            self.writes.push(text.to_owned());
        }

        fn assert_gpr_eq(&mut self, reg: u8, expected: u32) {
            self.gpr_asserts.push((reg, expected));
        }
    }

    fn invoke_every_hook(hooks: &mut impl HostHooks) {
        hooks.boot();
        hooks.io_init();
        hooks.io_write_str("hello");
        hooks.io_check();
        hooks.assert_gpr_eq(10, 0x1234);
        hooks.assert_fpr_single_eq(0, 0x3F80_0000);
        hooks.assert_fpr_double_eq(0, 0x3FF0_0000_0000_0000);
        hooks.set_software_interrupt();
        hooks.clear_software_interrupt();
        hooks.clear_timer_interrupt();
        hooks.clear_external_interrupt();
    }

    #[test]
    fn inert_hooks_accept_every_invocation() {
        let mut hooks = InertHooks;
        invoke_every_hook(&mut hooks);
        assert_eq!(hooks, InertHooks);
    }

    #[test]
    fn overridden_hooks_observe_calls_while_defaults_stay_vacuous() {
        let mut hooks = CountingHooks::default();
        invoke_every_hook(&mut hooks);
        assert_eq!(hooks.boots, 1);
        assert_eq!(hooks.writes, vec!["hello".to_owned()]);
        assert_eq!(hooks.gpr_asserts, vec![(10, 0x1234)]);
    }
}
