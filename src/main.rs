mod scene;
mod style;
mod trend;

use std::time::{Duration, Instant};

use iced::button::{self, Button};
use iced::canvas::Canvas;
use iced::slider::{self, Slider};
use iced::time;
use iced::{
    Align, Application, Clipboard, Column, Command, Container, Element, Length, Row, Settings,
    Subscription,
};
use log::info;

use marine_sim::{Config, FrameLoop, Metrics, Parameter, Parameters, Simulation};

use crate::scene::Scene;
use crate::trend::Trend;

#[derive(Clone, Debug)]
enum Message {
    Frame,
    TogglePlay,
    Exit,
    ParameterChanged(Parameter, f32),
    ConfigLoaded(Config),
}

#[derive(Default)]
struct Controls {
    play_button: button::State,
    exit_button: button::State,
    sliders: [slider::State; 5],
}

struct Marine {
    simulation: Simulation,
    frame_loop: FrameLoop,
    scene: Scene,
    trend: Trend,
    controls: Controls,
    last_tick_duration: Duration,
}

impl Marine {
    fn refresh(&mut self) {
        let snapshot = self.simulation.snapshot();
        self.trend.update(snapshot.history.clone());
        self.scene.update(snapshot, self.last_tick_duration);
    }
}

impl Application for Marine {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Flags = ();

    fn new(_flags: Self::Flags) -> (Self, Command<Message>) {
        let mut marine = Marine {
            simulation: Simulation::with_seed(Parameters::default(), None),
            frame_loop: FrameLoop::default(),
            scene: Scene::default(),
            trend: Trend::default(),
            controls: Controls::default(),
            last_tick_duration: Duration::default(),
        };
        marine.refresh();
        (
            marine,
            Command::perform(
                Config::load_or_default(Config::path_from_env()),
                Message::ConfigLoaded,
            ),
        )
    }

    fn title(&self) -> String {
        String::from("Marine Environment Testing Simulator")
    }

    fn subscription(&self) -> Subscription<Message> {
        // Paused frames still arrive; only a stopped loop drops the timer.
        if self.frame_loop.is_active() {
            time::every(self.frame_loop.interval()).map(|_| Message::Frame)
        } else {
            Subscription::none()
        }
    }

    fn should_exit(&self) -> bool {
        !self.frame_loop.is_active()
    }

    fn update(&mut self, message: Self::Message, _clipboard: &mut Clipboard) -> Command<Message> {
        match message {
            Message::Frame => {
                let start = Instant::now();
                if self.simulation.on_frame() {
                    self.last_tick_duration = start.elapsed();
                    self.refresh();
                }
            }
            Message::TogglePlay => {
                self.simulation.toggle_running();
            }
            Message::Exit => {
                if self.frame_loop.stop() {
                    info!("frame loop stopped at t={:.3}", self.simulation.time());
                }
            }
            Message::ParameterChanged(parameter, value) => {
                self.simulation.set_parameter(parameter, value);
                self.refresh();
            }
            Message::ConfigLoaded(config) => {
                if self.simulation.configure(config.parameters, config.seed) {
                    info!(
                        "starting with {:?}, seed {:?}",
                        config.parameters, config.seed
                    );
                } else {
                    info!("config arrived after the run started, keeping current state");
                }
                if self.frame_loop.reconfigure(config.frame_interval()) {
                    info!("frame interval {:?}", self.frame_loop.interval());
                }
                self.refresh();
            }
        }
        Command::none()
    }

    fn view(&mut self) -> Element<Message> {
        let running = self.simulation.is_running();
        let parameters = *self.simulation.parameters();
        let metrics = *self.simulation.metrics();

        let playback_controls = Row::new()
            .spacing(10)
            .push(
                Button::new(
                    &mut self.controls.play_button,
                    iced::widget::Text::new(if running {
                        "Pause Simulation"
                    } else {
                        "Start Simulation"
                    }),
                )
                .on_press(Message::TogglePlay)
                .padding(8)
                .style(style::Play { running }),
            )
            .push(
                Button::new(
                    &mut self.controls.exit_button,
                    iced::widget::Text::new("Exit"),
                )
                .on_press(Message::Exit)
                .padding(8)
                .style(style::Button),
            );

        let mut environment_controls = Column::new()
            .spacing(12)
            .push(iced::widget::Text::new("Environmental Controls").size(20));
        for (parameter, state) in Parameter::ALL
            .iter()
            .copied()
            .zip(self.controls.sliders.iter_mut())
        {
            let value = parameters.get(parameter);
            environment_controls = environment_controls.push(
                Column::new()
                    .spacing(4)
                    .push(
                        iced::widget::Text::new(format!(
                            "{}: {} {}",
                            parameter.label(),
                            format_parameter(parameter, value),
                            parameter.unit()
                        ))
                        .size(16),
                    )
                    .push(
                        Slider::new(state, parameter.range(), value, move |value| {
                            Message::ParameterChanged(parameter, value)
                        })
                        .step(parameter.step())
                        .width(Length::Units(240))
                        .style(style::Slider),
                    ),
            );
        }

        let side_panel = Column::new()
            .spacing(16)
            .width(Length::Units(280))
            .push(
                Container::new(environment_controls)
                    .padding(12)
                    .width(Length::Fill)
                    .style(style::Panel),
            )
            .push(
                Container::new(readouts(&metrics))
                    .padding(12)
                    .width(Length::Fill)
                    .style(style::Panel),
            );

        let environment_view = Column::new()
            .spacing(10)
            .width(Length::Fill)
            .push(playback_controls)
            .push(
                Canvas::new(&mut self.scene)
                    .width(Length::Fill)
                    .height(Length::Fill),
            );

        let trend_view = Container::new(
            Column::new()
                .spacing(8)
                .push(iced::widget::Text::new("Historical Data Trends").size(20))
                .push(
                    Canvas::new(&mut self.trend)
                        .width(Length::Fill)
                        .height(Length::Units(250)),
                ),
        )
        .padding(12)
        .width(Length::Fill)
        .style(style::Panel);

        let content = Column::new()
            .spacing(16)
            .padding(16)
            .align_items(Align::Start)
            .push(
                Row::new()
                    .spacing(16)
                    .height(Length::Fill)
                    .push(environment_view)
                    .push(side_panel),
            )
            .push(trend_view);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::Container)
            .into()
    }
}

fn format_parameter(parameter: Parameter, value: f32) -> String {
    if parameter.step() < 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.0}", value)
    }
}

fn readouts<'a>(metrics: &Metrics) -> Element<'a, Message> {
    let rows = [
        ("Pressure", format!("{:.2} bar", metrics.pressure)),
        ("Light Level", format!("{:.1}%", metrics.light_level)),
        ("Sonar Distance", format!("{:.1}m", metrics.sonar_distance)),
        ("Flow Rate", format!("{:.1} L/s", metrics.flow_rate)),
        ("Actual Temp", format!("{:.1}°C", metrics.actual_temperature)),
    ];
    let mut column = Column::new()
        .spacing(8)
        .push(iced::widget::Text::new("Live Sensor Data").size(20));
    for (name, value) in rows.iter() {
        column = column.push(
            Row::new()
                .push(
                    iced::widget::Text::new(*name)
                        .size(16)
                        .width(Length::Fill),
                )
                .push(iced::widget::Text::new(value.clone()).size(16)),
        );
    }
    column.into()
}

fn main() -> iced::Result {
    env_logger::init();
    info!("starting marine environment simulator");

    Marine::run(Settings {
        antialiasing: true,
        ..Settings::default()
    })
}
