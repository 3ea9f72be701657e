use std::time::Duration;

/// Simulated seconds per tick (nominal 60 Hz).
pub const TICK_SECONDS: f64 = 0.016;

/// Simulation time, advancing only while running.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationClock {
    time: f64,
    running: bool,
}

impl SimulationClock {
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Returns `true` if the state changed.
    pub fn set_running(&mut self, running: bool) -> bool {
        let changed = self.running != running;
        self.running = running;
        changed
    }

    /// Advances by `dt` if running and returns the new time. A paused clock
    /// returns `None` and keeps its value.
    pub fn advance(&mut self, dt: f64) -> Option<f64> {
        if !self.running {
            return None;
        }
        self.time += dt.max(0.0);
        Some(self.time)
    }
}

/// Registration of the host's periodic frame callback.
///
/// While active, the host keeps delivering one callback per `interval`.
/// Stopping releases the registration; stopping again does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameLoop {
    interval: Duration,
    active: bool,
}

impl FrameLoop {
    pub fn new(interval: Duration) -> Self {
        FrameLoop {
            interval: interval.max(Duration::from_millis(1)),
            active: true,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Changes the callback period. A stopped loop stays stopped and keeps
    /// its old interval.
    pub fn reconfigure(&mut self, interval: Duration) -> bool {
        if !self.active {
            return false;
        }
        self.interval = interval.max(Duration::from_millis(1));
        true
    }

    /// Returns `true` if this call released the registration.
    pub fn stop(&mut self) -> bool {
        let was_active = self.active;
        self.active = false;
        was_active
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        FrameLoop::new(Duration::from_millis(16))
    }
}
