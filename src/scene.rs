use std::time::{Duration, Instant};

use iced::canvas::{self, Cache, Cursor, Frame, Geometry, Path, Stroke};
use iced::{Color, HorizontalAlignment, Point, Rectangle, Size, VerticalAlignment};

use marine_sim::Snapshot;

const SEAFLOOR_Y: f32 = 550.0;
const GRID_SPACING: f32 = 120.0;
const DASH: f32 = 5.0;
const BACKGROUND_BANDS: usize = 32;
const LIGHT_CONE_BANDS: usize = 12;

/// Canvas program drawing the environment view from the latest snapshot.
#[derive(Default)]
pub struct Scene {
    snapshot: Snapshot,
    last_tick_duration: Duration,
    cache: Cache,
}

impl Scene {
    pub fn update(&mut self, snapshot: Snapshot, last_tick_duration: Duration) {
        self.snapshot = snapshot;
        self.last_tick_duration = last_tick_duration;
        self.cache.clear();
    }
}

/// Maps viewport coordinates onto the canvas bounds.
struct Projection {
    sx: f32,
    sy: f32,
}

impl Projection {
    fn new(bounds: Size) -> Self {
        let (width, height) = Snapshot::viewport();
        Projection {
            sx: bounds.width / width,
            sy: bounds.height / height,
        }
    }

    fn point(&self, x: f32, y: f32) -> Point {
        Point::new(x * self.sx, y * self.sy)
    }

    fn size(&self, width: f32, height: f32) -> Size {
        Size::new(width * self.sx, height * self.sy)
    }

    fn length(&self, length: f32) -> f32 {
        length * self.sx.min(self.sy)
    }
}

fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    Color::new(r / 255.0, g / 255.0, b / 255.0, a.max(0.0).min(1.0))
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

impl Scene {
    fn draw_water(&self, frame: &mut Frame, projection: &Projection) {
        let (width, height) = Snapshot::viewport();
        let depth_factor = (self.snapshot.depth / 100.0).min(1.0);
        let top = (100.0 - depth_factor * 80.0, 180.0 - depth_factor * 100.0);
        let bottom = (50.0 - depth_factor * 40.0, 100.0 - depth_factor * 80.0);
        let band = height / BACKGROUND_BANDS as f32;
        for i in 0..BACKGROUND_BANDS {
            let t = i as f32 / (BACKGROUND_BANDS - 1) as f32;
            let rect = Path::rectangle(
                projection.point(0.0, i as f32 * band),
                projection.size(width, band + 1.0),
            );
            frame.fill(
                &rect,
                rgba(0.0, lerp(top.0, bottom.0, t), lerp(top.1, bottom.1, t), 0.95),
            );
        }
    }

    fn draw_particles(&self, frame: &mut Frame, projection: &Projection) {
        for particle in self.snapshot.particles.iter() {
            if particle.opacity <= 0.0 {
                continue;
            }
            let circle = Path::circle(
                projection.point(particle.x, particle.y),
                projection.length(particle.size),
            );
            frame.fill(&circle, rgba(255.0, 255.0, 255.0, particle.opacity));
        }
    }

    fn draw_probe(&self, frame: &mut Frame, projection: &Projection) {
        let probe = &self.snapshot.probe;
        let (x, y) = (probe.x, probe.y);

        let body = Path::rectangle(projection.point(x - 20.0, y - 10.0), projection.size(40.0, 20.0));
        frame.fill(&body, rgba(255.0, 200.0, 0.0, 0.9));
        let hull = Path::rectangle(projection.point(x - 15.0, y - 5.0), projection.size(30.0, 10.0));
        frame.fill(&hull, rgba(200.0, 150.0, 0.0, 0.9));

        let thruster = Stroke {
            color: rgba(150.0, 150.0, 150.0, 0.7),
            width: 2.0,
            ..Stroke::default()
        };
        for offset in [-25.0, 25.0].iter() {
            let circle = Path::circle(projection.point(x + offset, y), projection.length(5.0));
            frame.stroke(&circle, thruster);
        }

        for ring in probe.rings.iter() {
            if ring.alpha <= 0.0 {
                continue;
            }
            let circle = Path::circle(projection.point(x, y + 10.0), projection.length(ring.radius));
            frame.stroke(
                &circle,
                Stroke {
                    color: rgba(0.0, 255.0, 0.0, ring.alpha),
                    width: 2.0,
                    ..Stroke::default()
                },
            );
        }

        if let Some(alpha) = probe.light_cone {
            let band = 100.0 / LIGHT_CONE_BANDS as f32;
            for i in 0..LIGHT_CONE_BANDS {
                let t = i as f32 / LIGHT_CONE_BANDS as f32;
                let rect = Path::rectangle(
                    projection.point(x - 30.0, y + i as f32 * band),
                    projection.size(60.0, band),
                );
                frame.fill(&rect, rgba(255.0, 255.0, 200.0, alpha * (1.0 - t)));
            }
        }
    }

    fn draw_depth_grid(&self, frame: &mut Frame, projection: &Projection) {
        let (width, _) = Snapshot::viewport();
        let stroke = Stroke {
            color: rgba(255.0, 100.0, 100.0, 0.2),
            width: 1.0,
            ..Stroke::default()
        };
        for i in 0..5 {
            let y = i as f32 * GRID_SPACING;
            let mut x = 0.0;
            while x < width {
                let dash = Path::line(projection.point(x, y), projection.point((x + DASH).min(width), y));
                frame.stroke(&dash, stroke);
                x += DASH * 2.0;
            }
        }
    }

    fn draw_seafloor(&self, frame: &mut Frame, projection: &Projection) {
        let (width, height) = Snapshot::viewport();
        let time = self.snapshot.time as f32;
        let seafloor = Path::new(|builder| {
            builder.move_to(projection.point(0.0, SEAFLOOR_Y));
            let mut x = 0.0;
            while x <= width {
                builder.line_to(projection.point(x, SEAFLOOR_Y + (x * 0.05 + time).sin() * 5.0));
                x += 20.0;
            }
            builder.line_to(projection.point(width, height));
            builder.line_to(projection.point(0.0, height));
            builder.close();
        });
        frame.fill(&seafloor, rgba(139.0, 90.0, 43.0, 0.6));
    }
}

impl<Message> canvas::Program<Message> for Scene {
    fn draw(&self, bounds: Rectangle, _cursor: Cursor) -> Vec<Geometry> {
        let start = Instant::now();

        let scene_geometry = self.cache.draw(bounds.size(), |frame| {
            let projection = Projection::new(frame.size());
            self.draw_water(frame, &projection);
            self.draw_particles(frame, &projection);
            self.draw_probe(frame, &projection);
            self.draw_depth_grid(frame, &projection);
            self.draw_seafloor(frame, &projection);
        });

        let duration = start.elapsed();

        let overlay = {
            let mut frame = Frame::new(bounds.size());

            frame.fill_text(canvas::Text {
                content: format!(
                    "time = {:.2}s\nlast_tick_duration = {:?}\nDraw duration: {:?}\nParticle count: {}",
                    self.snapshot.time,
                    self.last_tick_duration,
                    duration,
                    self.snapshot.particles.len(),
                ),
                color: Color::WHITE,
                size: 14.0,
                position: Point::new(frame.width(), frame.height()),
                horizontal_alignment: HorizontalAlignment::Right,
                vertical_alignment: VerticalAlignment::Bottom,
                ..Default::default()
            });

            frame.into_geometry()
        };

        vec![scene_geometry, overlay]
    }
}
