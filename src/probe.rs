/// Light level (%) above which the probe's lamp cone is drawn.
pub const LIGHT_CONE_THRESHOLD: f32 = 10.0;

pub const SONAR_RING_COUNT: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SonarRing {
    pub radius: f32,
    /// Negative half of the cycle draws nothing.
    pub alpha: f32,
}

/// Position of the probe at `time`, a closed path around the viewport center.
pub fn position(time: f64) -> (f32, f32) {
    (
        400.0 + (0.5 * time).sin() as f32 * 100.0,
        300.0 + (0.3 * time).cos() as f32 * 50.0,
    )
}

pub fn light_cone_active(light_level: f32) -> bool {
    light_level > LIGHT_CONE_THRESHOLD
}

/// Top alpha of the lamp cone gradient, `None` when the cone is off.
pub fn light_cone_alpha(light_level: f32) -> Option<f32> {
    if light_cone_active(light_level) {
        Some(light_level / 300.0)
    } else {
        None
    }
}

pub fn sonar_rings(time: f64) -> [SonarRing; SONAR_RING_COUNT] {
    let phase = (20.0 * time).rem_euclid(15.0) as f32;
    let alpha = 0.3 * (3.0 * time).sin() as f32;
    let mut rings = [SonarRing::default(); SONAR_RING_COUNT];
    for (i, ring) in rings.iter_mut().enumerate() {
        ring.radius = 15.0 * (i + 1) as f32 + phase;
        ring.alpha = alpha;
    }
    rings
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProbeView {
    pub x: f32,
    pub y: f32,
    pub light_cone: Option<f32>,
    pub rings: [SonarRing; SONAR_RING_COUNT],
}

impl ProbeView {
    pub fn at(time: f64, light_level: f32) -> Self {
        let (x, y) = position(time);
        ProbeView {
            x,
            y,
            light_cone: light_cone_alpha(light_level),
            rings: sonar_rings(time),
        }
    }
}
