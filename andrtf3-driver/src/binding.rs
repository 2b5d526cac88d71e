//! External value binding
//!
//! Optional side channel that mirrors the latest reading into
//! caller-owned memory. The caller hands the driver shared references to
//! two atomic cells it owns; the driver writes through them on every
//! completion but never controls their lifetime. The borrow ensures the
//! slots outlive the binding.

use core::sync::atomic::{AtomicBool, AtomicI16, Ordering};

/// Non-owning mirror of the latest temperature and validity
///
/// On a successful decode both slots are written (value, then `true`).
/// On a failed attempt only the validity slot is written (`false`); the
/// value slot keeps its previous content, matching the reading snapshot's
/// no-clobber rule.
#[derive(Default)]
pub struct TemperatureBinding<'a> {
    value_slot: Option<&'a AtomicI16>,
    valid_slot: Option<&'a AtomicBool>,
}

impl<'a> TemperatureBinding<'a> {
    /// Create an unbound binding
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the bound slots; `(None, None)` unbinds
    pub fn bind(&mut self, value_slot: Option<&'a AtomicI16>, valid_slot: Option<&'a AtomicBool>) {
        self.value_slot = value_slot;
        self.valid_slot = valid_slot;
    }

    /// Whether at least one slot is bound
    pub fn is_bound(&self) -> bool {
        self.value_slot.is_some() || self.valid_slot.is_some()
    }

    /// Whether exactly one of the two slots is bound
    ///
    /// Accepted, but an incoherent observer: value and validity should be
    /// bound or unbound together.
    pub fn is_partial(&self) -> bool {
        self.value_slot.is_some() != self.valid_slot.is_some()
    }

    /// Mirror a successful decode into both slots
    pub fn store_success(&self, celsius_x10: i16) {
        if let Some(slot) = self.value_slot {
            slot.store(celsius_x10, Ordering::Relaxed);
        }
        if let Some(slot) = self.valid_slot {
            slot.store(true, Ordering::Relaxed);
        }
    }

    /// Mirror a failed attempt: validity only, value untouched
    pub fn store_failure(&self) {
        if let Some(slot) = self.valid_slot {
            slot.store(false, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_writes_both_slots() {
        let value = AtomicI16::new(0);
        let valid = AtomicBool::new(false);
        let mut binding = TemperatureBinding::new();
        binding.bind(Some(&value), Some(&valid));

        binding.store_success(261);
        assert_eq!(value.load(Ordering::Relaxed), 261);
        assert!(valid.load(Ordering::Relaxed));
    }

    #[test]
    fn test_failure_leaves_value_untouched() {
        let value = AtomicI16::new(0);
        let valid = AtomicBool::new(false);
        let mut binding = TemperatureBinding::new();
        binding.bind(Some(&value), Some(&valid));

        binding.store_success(300);
        binding.store_failure();
        assert_eq!(value.load(Ordering::Relaxed), 300);
        assert!(!valid.load(Ordering::Relaxed));
    }

    #[test]
    fn test_unbind_stops_writes() {
        let value = AtomicI16::new(0);
        let valid = AtomicBool::new(false);
        let mut binding = TemperatureBinding::new();
        binding.bind(Some(&value), Some(&valid));
        binding.store_success(100);

        binding.bind(None, None);
        assert!(!binding.is_bound());
        binding.store_success(999);
        binding.store_failure();

        // Slots keep the values from before the unbind
        assert_eq!(value.load(Ordering::Relaxed), 100);
        assert!(valid.load(Ordering::Relaxed));
    }

    #[test]
    fn test_partial_binding_detected() {
        let valid = AtomicBool::new(false);
        let mut binding = TemperatureBinding::new();
        binding.bind(None, Some(&valid));
        assert!(binding.is_bound());
        assert!(binding.is_partial());

        binding.store_success(42);
        assert!(valid.load(Ordering::Relaxed));
    }
}
