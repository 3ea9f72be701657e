use marine_sim::history::HISTORY_CAPACITY;
use marine_sim::particles::{PARTICLE_COUNT, X_MAX, Y_MAX};
use marine_sim::{Config, Metrics, Parameter, Parameters, Simulation, TICK_SECONDS};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded(seed: u64) -> Simulation {
    Simulation::new(Parameters::default(), ChaCha8Rng::seed_from_u64(seed))
}

#[test]
fn same_seed_same_run() {
    let mut a = seeded(5);
    let mut b = seeded(5);
    a.set_running(true);
    b.set_running(true);
    for _ in 0..300 {
        a.on_frame();
        b.on_frame();
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn particles_stay_in_viewport_under_strong_current() {
    let parameters = Parameters {
        current_speed: 2.0,
        ..Parameters::default()
    };
    let mut sim = Simulation::new(parameters, ChaCha8Rng::seed_from_u64(21));
    sim.set_running(true);
    for _ in 0..3000 {
        sim.on_frame();
    }
    let snapshot = sim.snapshot();
    assert_eq!(snapshot.particles.len(), PARTICLE_COUNT);
    for p in snapshot.particles.iter() {
        assert!(p.x >= 0.0 && p.x <= X_MAX);
        assert!(p.y >= 0.0 && p.y <= Y_MAX);
    }
}

#[test]
fn pause_freezes_and_resume_continues() {
    let mut sim = seeded(1);
    sim.toggle_running();
    for _ in 0..100 {
        sim.on_frame();
    }
    let frozen = sim.time();
    let history_len = sim.history().len();

    sim.toggle_running();
    for _ in 0..100 {
        assert!(!sim.on_frame());
    }
    assert_eq!(sim.time(), frozen);
    assert_eq!(sim.history().len(), history_len);

    sim.toggle_running();
    sim.on_frame();
    assert!((sim.time() - (frozen + TICK_SECONDS)).abs() < 1e-12);
}

#[test]
fn twenty_five_eligible_ticks_keep_last_twenty() {
    let mut sim = seeded(8);
    sim.set_running(true);
    let mut sampled = Vec::new();
    while sampled.len() < 25 {
        let before = sim.history().latest().copied();
        sim.on_frame();
        let after = sim.history().latest().copied();
        if after != before {
            sampled.push(sim.time());
        }
    }
    let kept: Vec<f64> = sim.history().iter().map(|s| s.time).collect();
    assert_eq!(kept.len(), HISTORY_CAPACITY);
    assert_eq!(kept, sampled[5..].to_vec());
}

#[test]
fn history_samples_full_precision_metrics() {
    let mut sim = seeded(3);
    sim.set_running(true);
    sim.on_frame();
    let sample = *sim.history().latest().unwrap();
    let metrics = Metrics::compute(sim.parameters(), sim.time());
    assert_eq!(sample.pressure, metrics.pressure);
    assert_eq!(sample.light, metrics.light_level);
}

#[test]
fn deep_turbid_water_turns_off_the_lamp() {
    let mut sim = seeded(2);
    sim.set_parameter(Parameter::Depth, 200.0);
    sim.set_parameter(Parameter::Turbidity, 1.0);
    let metrics = *sim.metrics();
    assert!(metrics.light_level >= 0.0);
    assert_eq!(metrics.rounded().light_level, 0.0);
    assert_eq!(sim.probe().light_cone, None);

    sim.set_parameter(Parameter::Depth, 5.0);
    sim.set_parameter(Parameter::Turbidity, 0.0);
    assert!(sim.probe().light_cone.is_some());
}

#[test]
fn config_drives_the_simulation() {
    let config = Config::from_json(r#"{ "parameters": { "depth": 100 }, "seed": 77 }"#).unwrap();
    let a = Simulation::with_seed(config.parameters, config.seed);
    let b = Simulation::with_seed(config.parameters, config.seed);
    assert_eq!(a.snapshot(), b.snapshot());
    assert!((a.metrics().pressure - 11.0).abs() < 1e-4);
}
