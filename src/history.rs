//! Rolling buffer of sampled sensor values for the trend chart.

use crate::environment::Metrics;
use crate::parameters::Parameters;
use log::trace;
use rand::Rng;
use std::collections::VecDeque;

/// Maximum number of samples kept.
pub const HISTORY_CAPACITY: usize = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SensorSample {
    pub time: f64,
    pub temperature: f32,
    pub pressure: f32,
    pub light: f32,
    pub current: f32,
}

impl SensorSample {
    /// Snapshot of the current readings. Temperature and current carry
    /// sensor noise on top of the model values.
    pub fn capture<R: Rng + ?Sized>(
        rng: &mut R,
        parameters: &Parameters,
        metrics: &Metrics,
        time: f64,
    ) -> Self {
        SensorSample {
            time,
            temperature: metrics.actual_temperature + rng.gen_range(0.0f32..2.0),
            pressure: metrics.pressure,
            light: metrics.light_level,
            current: parameters.current_speed * 100.0 + rng.gen_range(0.0f32..10.0),
        }
    }
}

/// Whether a sample is taken at `time`. Several consecutive ticks can land
/// in the same window, each producing its own sample.
pub fn is_sample_tick(time: f64) -> bool {
    (time * 10.0).floor().rem_euclid(5.0) == 0.0
}

#[derive(Clone, Debug)]
pub struct SensorHistory {
    samples: VecDeque<SensorSample>,
    capacity: usize,
}

impl Default for SensorHistory {
    fn default() -> Self {
        SensorHistory::with_capacity(HISTORY_CAPACITY)
    }
}

impl SensorHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        SensorHistory {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Appends `sample`, then drops the oldest until within capacity.
    pub fn push(&mut self, sample: SensorSample) {
        trace!("sample at t={:.3}", sample.time);
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, SensorSample> {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<&SensorSample> {
        self.samples.back()
    }

    pub fn to_vec(&self) -> Vec<SensorSample> {
        self.samples.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sample(time: f64) -> SensorSample {
        SensorSample {
            time,
            ..SensorSample::default()
        }
    }

    #[test]
    fn keeps_last_twenty_in_order() {
        let mut history = SensorHistory::default();
        for i in 0..25 {
            history.push(sample(i as f64));
            assert!(history.len() <= HISTORY_CAPACITY);
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        let times: Vec<f64> = history.iter().map(|s| s.time).collect();
        let expected: Vec<f64> = (5..25).map(|i| i as f64).collect();
        assert_eq!(times, expected);
    }

    #[test]
    fn under_capacity_keeps_everything() {
        let mut history = SensorHistory::default();
        for i in 0..7 {
            history.push(sample(i as f64));
        }
        assert_eq!(history.len(), 7);
        assert_eq!(history.latest().map(|s| s.time), Some(6.0));
    }

    #[test]
    fn duplicate_timestamps_are_kept() {
        let mut history = SensorHistory::default();
        history.push(sample(0.5));
        history.push(sample(0.5));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn zero_capacity_stays_empty() {
        let mut history = SensorHistory::with_capacity(0);
        history.push(sample(1.0));
        assert!(history.is_empty());
    }

    #[test]
    fn sample_gate() {
        assert!(is_sample_tick(0.0));
        assert!(is_sample_tick(0.096));
        assert!(!is_sample_tick(0.112));
        assert!(!is_sample_tick(0.45));
        assert!(is_sample_tick(0.5));
        assert!(is_sample_tick(0.59));
        assert!(!is_sample_tick(0.6));
        assert!(is_sample_tick(1.0));
    }

    #[test]
    fn capture_jitter_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let parameters = Parameters::default();
        let metrics = Metrics::compute(&parameters, 2.0);
        for _ in 0..200 {
            let s = SensorSample::capture(&mut rng, &parameters, &metrics, 2.0);
            assert_eq!(s.time, 2.0);
            assert_eq!(s.pressure, metrics.pressure);
            assert_eq!(s.light, metrics.light_level);
            assert!(s.temperature >= metrics.actual_temperature);
            assert!(s.temperature <= metrics.actual_temperature + 2.0);
            assert!(s.current >= 50.0 && s.current <= 60.0);
        }
    }
}
