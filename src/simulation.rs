use crate::clock::{SimulationClock, TICK_SECONDS};
use crate::environment::Metrics;
use crate::history::{is_sample_tick, SensorHistory, SensorSample};
use crate::parameters::{Parameter, Parameters};
use crate::particles::{ParticleField, X_MAX, Y_MAX};
use crate::probe::ProbeView;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// All mutable simulation state, advanced by one update pass per frame.
pub struct Simulation {
    parameters: Parameters,
    clock: SimulationClock,
    particles: ParticleField,
    metrics: Metrics,
    probe: ProbeView,
    history: SensorHistory,
    rng: ChaCha8Rng,
    parameters_edited: bool,
}

impl Simulation {
    pub fn new(parameters: Parameters, mut rng: ChaCha8Rng) -> Self {
        let particles = ParticleField::new(&mut rng, parameters.current_speed);
        let metrics = Metrics::compute(&parameters, 0.0);
        Simulation {
            parameters,
            clock: SimulationClock::default(),
            particles,
            metrics,
            probe: probe_view(0.0, &metrics),
            history: SensorHistory::default(),
            rng,
            parameters_edited: false,
        }
    }

    pub fn with_seed(parameters: Parameters, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Simulation::new(parameters, rng)
    }

    /// One scheduler callback. Advances a single tick while running and
    /// does nothing while paused. Returns whether state advanced.
    pub fn on_frame(&mut self) -> bool {
        self.advance(TICK_SECONDS)
    }

    /// Advances by `dt` if running.
    pub fn advance(&mut self, dt: f64) -> bool {
        match self.clock.advance(dt) {
            Some(time) => {
                self.update(time);
                true
            }
            None => false,
        }
    }

    fn update(&mut self, time: f64) {
        self.particles.advance(self.parameters.current_speed, time);
        self.metrics = Metrics::compute(&self.parameters, time);
        self.probe = probe_view(time, &self.metrics);
        if is_sample_tick(time) {
            let sample =
                SensorSample::capture(&mut self.rng, &self.parameters, &self.metrics, time);
            self.history.push(sample);
        }
    }

    pub fn toggle_running(&mut self) {
        self.clock.toggle();
        info!(
            "simulation {} at t={:.3}",
            if self.clock.is_running() { "running" } else { "paused" },
            self.clock.time()
        );
    }

    pub fn set_running(&mut self, running: bool) {
        if self.clock.set_running(running) {
            info!("simulation running = {}", running);
        }
    }

    /// Control surface entry point. Readouts are refreshed right away, even
    /// while paused.
    pub fn set_parameter(&mut self, parameter: Parameter, value: f32) {
        self.parameters.set(parameter, value);
        self.parameters_edited = true;
        debug!("{:?} = {}", parameter, self.parameters.get(parameter));
        self.metrics = Metrics::compute(&self.parameters, self.clock.time());
        self.probe = probe_view(self.clock.time(), &self.metrics);
    }

    /// Restarts from `parameters` and `seed`, keeping the run state, as long
    /// as time has not moved and no parameter was edited. Otherwise the
    /// current state wins and `false` is returned.
    pub fn configure(&mut self, parameters: Parameters, seed: Option<u64>) -> bool {
        if self.parameters_edited || self.clock.time() > 0.0 {
            return false;
        }
        let running = self.clock.is_running();
        *self = Simulation::with_seed(parameters.clamped(), seed);
        self.clock.set_running(running);
        true
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn probe(&self) -> &ProbeView {
        &self.probe
    }

    pub fn history(&self) -> &SensorHistory {
        &self.history
    }

    /// Everything the renderer reads for one frame.
    pub fn snapshot(&self) -> Snapshot {
        let turbidity = self.parameters.turbidity;
        Snapshot {
            time: self.clock.time(),
            depth: self.parameters.depth,
            particles: self
                .particles
                .iter()
                .map(|p| ParticleView {
                    x: p.x,
                    y: p.y,
                    size: p.size,
                    opacity: p.rendered_opacity(turbidity),
                })
                .collect(),
            probe: self.probe,
            metrics: self.metrics,
            history: self.history.to_vec(),
        }
    }
}

/// The lamp reacts to the light level as displayed, one decimal.
fn probe_view(time: f64, metrics: &Metrics) -> ProbeView {
    ProbeView::at(time, metrics.rounded().light_level)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParticleView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub time: f64,
    pub depth: f32,
    pub particles: Vec<ParticleView>,
    pub probe: ProbeView,
    pub metrics: Metrics,
    pub history: Vec<SensorSample>,
}

impl Snapshot {
    pub fn viewport() -> (f32, f32) {
        (X_MAX, Y_MAX)
    }
}
