//! Map pulse flag. Drives the hotspot ping animation; carries no data.

use std::time::Duration;

use crate::ticker::Simulator;

pub struct MapPulseSimulator {
    period: Duration,
    active: bool,
}

impl MapPulseSimulator {
    /// Starts with the pulse on.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            active: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Simulator for MapPulseSimulator {
    type Snapshot = bool;

    fn name(&self) -> &'static str {
        "pulse"
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn tick(&mut self) {
        self.active = !self.active;
    }

    fn snapshot(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_toggles() {
        let mut pulse = MapPulseSimulator::new(Duration::from_secs(2));
        assert!(pulse.is_active());
        pulse.tick();
        assert!(!pulse.snapshot());
        pulse.tick();
        assert!(pulse.snapshot());
    }
}
