use crate::readings::{LifetimeStats, Vitals};
use std::sync::Mutex;

/// Most recently reported energy meter values
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct CarriedState {
    pub last_session_energy: f64,
    pub last_dispensed_energy: u64,
}

/// Keeps the energy meters steady while the wallbox is unreachable.
///
/// A failed fetch yields a zero-valued reading. When enabled, the guard
/// replaces a zero session energy or dispensed energy with the last value it
/// saw, then remembers whatever it passed on. A genuine zero from the device
/// cannot be told apart from a failed fetch and is patched the same way.
///
/// Concurrent scrapes are serialized on the carried state, so each request's
/// read-substitute-store happens as one step.
pub struct StaleValueGuard {
    enabled: bool,
    carried: Mutex<CarriedState>,
}

impl StaleValueGuard {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            carried: Mutex::new(CarriedState::default()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Patches zero energy readings in place and updates the carried state
    pub fn apply(&self, vitals: &mut Vitals, stats: &mut LifetimeStats) {
        if !self.enabled {
            return;
        }

        // A poisoned lock still holds two valid scalars
        let mut carried = self
            .carried
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *carried = patch(vitals, stats, *carried);
    }

    pub fn carried(&self) -> CarriedState {
        *self
            .carried
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn patch(vitals: &mut Vitals, stats: &mut LifetimeStats, carried: CarriedState) -> CarriedState {
    if vitals.session_energy == 0.0 {
        vitals.session_energy = carried.last_session_energy;
    }

    if stats.dispensed_energy == 0 {
        stats.dispensed_energy = carried.last_dispensed_energy;
    }

    CarriedState {
        last_session_energy: vitals.session_energy,
        last_dispensed_energy: stats.dispensed_energy,
    }
}
