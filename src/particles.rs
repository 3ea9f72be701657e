use rand::Rng;

pub const X_MAX: f32 = 800.0;
pub const Y_MAX: f32 = 600.0;
pub const PARTICLE_COUNT: usize = 150;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, current_speed: f32) -> Self {
        Particle {
            x: rng.gen::<f32>() * X_MAX,
            y: rng.gen::<f32>() * Y_MAX,
            vx: (rng.gen::<f32>() - 0.5) * current_speed,
            vy: (rng.gen::<f32>() - 0.5) * current_speed * 0.3,
            size: rng.gen::<f32>() * 2.0 + 1.0,
            opacity: rng.gen::<f32>() * 0.5 + 0.3,
        }
    }

    /// Opacity after turbidity has been applied; 0 in fully turbid water.
    pub fn rendered_opacity(&self, turbidity: f32) -> f32 {
        (self.opacity * (1.0 - turbidity)).max(0.0)
    }

    fn advance(&mut self, current_speed: f32, time: f32) {
        self.x += self.vx * current_speed * 2.0;
        self.y += self.vy * current_speed * 2.0;
        // swirl: each axis is perturbed by the other's position
        self.x += (time * 2.0 + self.y * 0.01).sin() * 0.5;
        self.y += (time * 2.0 + self.x * 0.01).cos() * 0.3;

        self.x = wrap(self.x, X_MAX);
        self.y = wrap(self.y, Y_MAX);
    }
}

/// Fixed population of drifting points visualizing the current.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Creates the whole population. Particles are never replaced afterwards,
    /// only moved and wrapped.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, current_speed: f32) -> Self {
        let mut particles = Vec::with_capacity(PARTICLE_COUNT);
        for _ in 0..PARTICLE_COUNT {
            particles.push(Particle::random(rng, current_speed));
        }
        ParticleField { particles }
    }

    pub fn advance(&mut self, current_speed: f32, time: f64) {
        let time = time as f32;
        for particle in self.particles.iter_mut() {
            particle.advance(current_speed, time);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Toroidal wrap: leaving one edge lands exactly on the opposite one.
fn wrap(v: f32, max: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else if v < 0.0 {
        max
    } else if v > max {
        0.0
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn in_bounds(particle: &Particle) -> bool {
        (0.0..=X_MAX).contains(&particle.x) && (0.0..=Y_MAX).contains(&particle.y)
    }

    #[test]
    fn initial_population() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let field = ParticleField::new(&mut rng, 0.5);
        assert_eq!(field.len(), PARTICLE_COUNT);
        for particle in field.iter() {
            assert!(in_bounds(particle));
            assert!(particle.size >= 1.0 && particle.size < 3.0);
            assert!(particle.opacity >= 0.3 && particle.opacity < 0.8);
            assert!(particle.vx.abs() <= 0.25);
            assert!(particle.vy.abs() <= 0.075);
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = ParticleField::new(&mut ChaCha8Rng::seed_from_u64(3), 1.0);
        let b = ParticleField::new(&mut ChaCha8Rng::seed_from_u64(3), 1.0);
        assert!(a.iter().eq(b.iter()));
    }

    #[test]
    fn stays_in_bounds_after_many_steps() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut field = ParticleField::new(&mut rng, 2.0);
        let mut time = 0.0;
        for _ in 0..5000 {
            time += 0.016;
            field.advance(2.0, time);
            assert_eq!(field.len(), PARTICLE_COUNT);
        }
        assert!(field.iter().all(in_bounds));
    }

    #[test]
    fn advancing_keeps_every_particle_identity() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut field = ParticleField::new(&mut rng, 1.0);
        let before: Vec<(f32, f32, f32, f32)> = field
            .iter()
            .map(|p| (p.vx, p.vy, p.size, p.opacity))
            .collect();
        for step in 1..=400 {
            field.advance(1.0, step as f64 * 0.016);
        }
        assert_eq!(field.len(), PARTICLE_COUNT);
        for (particle, original) in field.iter().zip(before.iter()) {
            assert_eq!(
                (particle.vx, particle.vy, particle.size, particle.opacity),
                *original
            );
        }
    }

    #[test]
    fn single_step_matches_motion_model() {
        let mut particle = Particle {
            x: 100.0,
            y: 200.0,
            vx: 0.2,
            vy: -0.1,
            size: 1.0,
            opacity: 0.5,
        };
        particle.advance(1.0, 0.5);
        let drifted_y = 200.0f32 - 0.2;
        let x = 100.4 + (1.0 + drifted_y * 0.01).sin() * 0.5;
        let y = drifted_y + (1.0 + x * 0.01).cos() * 0.3;
        assert!((particle.x - x).abs() < 1e-4);
        assert!((particle.y - y).abs() < 1e-4);
    }

    #[test]
    fn wraps_to_opposite_edge() {
        assert_eq!(wrap(-0.5, X_MAX), X_MAX);
        assert_eq!(wrap(800.5, X_MAX), 0.0);
        assert_eq!(wrap(X_MAX, X_MAX), X_MAX);
        assert_eq!(wrap(42.0, X_MAX), 42.0);
    }

    #[test]
    fn turbidity_hides_particles() {
        let particle = Particle {
            opacity: 0.6,
            ..Particle::default()
        };
        assert!((particle.rendered_opacity(0.0) - 0.6).abs() < 1e-6);
        assert!((particle.rendered_opacity(0.5) - 0.3).abs() < 1e-6);
        assert_eq!(particle.rendered_opacity(1.0), 0.0);
    }
}
