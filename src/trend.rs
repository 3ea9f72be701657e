use iced::canvas::{self, Cache, Cursor, Frame, Geometry, Path, Stroke};
use iced::{Color, HorizontalAlignment, Point, Rectangle, Size, VerticalAlignment};

use marine_sim::SensorSample;

const MARGIN_LEFT: f32 = 40.0;
const MARGIN_RIGHT: f32 = 12.0;
const MARGIN_TOP: f32 = 24.0;
const MARGIN_BOTTOM: f32 = 24.0;
const Y_TICKS: usize = 4;

struct Series {
    name: &'static str,
    color: Color,
    value: fn(&SensorSample) -> f32,
}

const SERIES: [Series; 4] = [
    Series {
        name: "Temperature",
        color: Color::from_rgb(0.94, 0.27, 0.27),
        value: |s| s.temperature,
    },
    Series {
        name: "Pressure",
        color: Color::from_rgb(0.23, 0.51, 0.96),
        value: |s| s.pressure,
    },
    Series {
        name: "Light",
        color: Color::from_rgb(0.92, 0.70, 0.03),
        value: |s| s.light,
    },
    Series {
        name: "Current",
        color: Color::from_rgb(0.02, 0.71, 0.83),
        value: |s| s.current,
    },
];

/// Line chart of the sensor history, one point per sample keyed on time.
#[derive(Default)]
pub struct Trend {
    samples: Vec<SensorSample>,
    cache: Cache,
}

impl Trend {
    pub fn update(&mut self, samples: Vec<SensorSample>) {
        if samples != self.samples {
            self.samples = samples;
            self.cache.clear();
        }
    }

    /// Value range covering every series, padded to whole tens.
    fn value_range(&self) -> (f32, f32) {
        let mut min = 0.0f32;
        let mut max = 10.0f32;
        for sample in self.samples.iter() {
            for series in SERIES.iter() {
                let value = (series.value)(sample);
                min = min.min(value);
                max = max.max(value);
            }
        }
        ((min / 10.0).floor() * 10.0, (max / 10.0).ceil() * 10.0)
    }

    fn draw_chart(&self, frame: &mut Frame) {
        let size = frame.size();
        let plot = Rectangle {
            x: MARGIN_LEFT,
            y: MARGIN_TOP,
            width: (size.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (size.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        };
        let (min, max) = self.value_range();
        let span = (max - min).max(1.0);
        let grid = Stroke {
            color: Color::from_rgb(0.20, 0.25, 0.33),
            width: 1.0,
            ..Stroke::default()
        };
        let label = canvas::Text {
            color: Color::from_rgb(0.58, 0.64, 0.72),
            size: 12.0,
            ..Default::default()
        };

        for i in 0..=Y_TICKS {
            let t = i as f32 / Y_TICKS as f32;
            let y = plot.y + plot.height * (1.0 - t);
            frame.stroke(
                &Path::line(Point::new(plot.x, y), Point::new(plot.x + plot.width, y)),
                grid,
            );
            frame.fill_text(canvas::Text {
                content: format!("{:.0}", min + span * t),
                position: Point::new(plot.x - 6.0, y),
                horizontal_alignment: HorizontalAlignment::Right,
                vertical_alignment: VerticalAlignment::Center,
                ..label.clone()
            });
        }

        let count = self.samples.len();
        let x_at = |i: usize| {
            if count <= 1 {
                plot.x
            } else {
                plot.x + plot.width * i as f32 / (count - 1) as f32
            }
        };
        let y_at = |value: f32| plot.y + plot.height * (1.0 - (value - min) / span);

        for (i, sample) in self.samples.iter().enumerate() {
            if i % 4 == 0 || i + 1 == count {
                frame.fill_text(canvas::Text {
                    content: format!("{:.1}", sample.time),
                    position: Point::new(x_at(i), plot.y + plot.height + 4.0),
                    horizontal_alignment: HorizontalAlignment::Center,
                    vertical_alignment: VerticalAlignment::Top,
                    ..label.clone()
                });
            }
        }

        if count >= 2 {
            for series in SERIES.iter() {
                let line = Path::new(|builder| {
                    for (i, sample) in self.samples.iter().enumerate() {
                        let point = Point::new(x_at(i), y_at((series.value)(sample)));
                        if i == 0 {
                            builder.move_to(point);
                        } else {
                            builder.line_to(point);
                        }
                    }
                });
                frame.stroke(
                    &line,
                    Stroke {
                        color: series.color,
                        width: 2.0,
                        ..Stroke::default()
                    },
                );
            }
        }

        let mut x = plot.x;
        for series in SERIES.iter() {
            let swatch = Path::rectangle(Point::new(x, 6.0), Size::new(10.0, 10.0));
            frame.fill(&swatch, series.color);
            frame.fill_text(canvas::Text {
                content: series.name.to_string(),
                position: Point::new(x + 14.0, 11.0),
                vertical_alignment: VerticalAlignment::Center,
                ..label.clone()
            });
            x += 110.0;
        }
    }
}

impl<Message> canvas::Program<Message> for Trend {
    fn draw(&self, bounds: Rectangle, _cursor: Cursor) -> Vec<Geometry> {
        let chart = self.cache.draw(bounds.size(), |frame| self.draw_chart(frame));
        vec![chart]
    }
}
