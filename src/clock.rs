/// Tracks simulated time since the last interaction table refresh
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationClock {
    phase: f64,
    period: f64,
    elapsed: f64,
    refreshes: u64,
}

impl SimulationClock {
    pub fn new(period: f64) -> Self {
        assert!(period > 0.0, "refresh period must be positive");
        Self {
            phase: 0.0,
            period,
            elapsed: 0.0,
            refreshes: 0,
        }
    }

    /// Adds `dt` to the phase. Returns true when the phase has passed the
    /// refresh period, in which case the phase is reset to zero.
    pub fn advance(&mut self, dt: f64) -> bool {
        self.phase += dt;
        self.elapsed += dt;
        if self.phase > self.period {
            self.reset_phase();
            true
        } else {
            false
        }
    }

    pub(crate) fn reset_phase(&mut self) {
        self.phase = 0.0;
        self.refreshes += 1;
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    /// Total simulated time advanced so far
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of refreshes triggered so far
    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }
}
