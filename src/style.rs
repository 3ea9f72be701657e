use iced::{button, container, slider, Background, Color, Vector};

const SURFACE: Color = Color::from_rgb(
    0x1E as f32 / 255.0,
    0x29 as f32 / 255.0,
    0x3B as f32 / 255.0,
);

const BACKGROUND: Color = Color::from_rgb(
    0x0F as f32 / 255.0,
    0x17 as f32 / 255.0,
    0x2A as f32 / 255.0,
);

const ACCENT: Color = Color::from_rgb(
    0x38 as f32 / 255.0,
    0xBD as f32 / 255.0,
    0xF8 as f32 / 255.0,
);

const MUTED: Color = Color::from_rgb(
    0x47 as f32 / 255.0,
    0x55 as f32 / 255.0,
    0x69 as f32 / 255.0,
);

pub struct Container;

impl container::StyleSheet for Container {
    fn style(&self) -> container::Style {
        container::Style {
            text_color: Some(Color::WHITE),
            background: Some(Background::Color(BACKGROUND)),
            ..container::Style::default()
        }
    }
}

/// Panels holding the readouts and controls.
pub struct Panel;

impl container::StyleSheet for Panel {
    fn style(&self) -> container::Style {
        container::Style {
            text_color: Some(Color::WHITE),
            background: Some(Background::Color(SURFACE)),
            border_radius: 6.0,
            ..container::Style::default()
        }
    }
}

/// Start/pause button; green while paused, red while running.
pub struct Play {
    pub running: bool,
}

impl button::StyleSheet for Play {
    fn active(&self) -> button::Style {
        let color = if self.running {
            Color::from_rgb(0.86, 0.15, 0.15)
        } else {
            Color::from_rgb(0.09, 0.64, 0.29)
        };
        button::Style {
            background: Some(Background::Color(color)),
            border_radius: 6.0,
            text_color: Color::WHITE,
            ..button::Style::default()
        }
    }

    fn hovered(&self) -> button::Style {
        let active = self.active();
        button::Style {
            shadow_offset: Vector::new(0.0, 1.0),
            ..active
        }
    }
}

pub struct Button;

impl button::StyleSheet for Button {
    fn active(&self) -> button::Style {
        button::Style {
            background: Some(Background::Color(MUTED)),
            border_radius: 6.0,
            text_color: Color::WHITE,
            ..button::Style::default()
        }
    }

    fn hovered(&self) -> button::Style {
        button::Style {
            background: Some(Background::Color(ACCENT)),
            ..self.active()
        }
    }
}

pub struct Slider;

impl slider::StyleSheet for Slider {
    fn active(&self) -> slider::Style {
        slider::Style {
            rail_colors: (ACCENT, MUTED),
            handle: slider::Handle {
                shape: slider::HandleShape::Circle { radius: 7.0 },
                color: ACCENT,
                border_width: 0.0,
                border_color: Color::TRANSPARENT,
            },
        }
    }

    fn hovered(&self) -> slider::Style {
        let active = self.active();
        slider::Style {
            handle: slider::Handle {
                color: Color::WHITE,
                ..active.handle
            },
            ..active
        }
    }

    fn dragging(&self) -> slider::Style {
        let active = self.active();
        slider::Style {
            handle: slider::Handle {
                shape: slider::HandleShape::Circle { radius: 8.0 },
                ..active.handle
            },
            ..active
        }
    }
}
