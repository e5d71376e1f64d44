//! Spinner theme registry
//!
//! Every named theme maps to a fixed, non-empty sequence of frames. The
//! registry is a static lookup and never changes at runtime.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::{Result, SpinixError};

/// Named spinner animation styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpinnerTheme {
    #[default]
    ClassicDots,
    Line,
    PulsatingDot,
    GrowingBlock,
    RotatingArrow,
    ArcLoader,
    Clock,
    CircleDots,
    BouncingBall,
    FadingSquares,
    DotsFading,
    Earth,
    Snake,
    Triangle,
    Spiral,
    Wave,
    Weather,
    RunningPerson,
    RunningCat,
    RunningDog,
    Cycling,
    CarLoading,
    Rocket,
    Orbit,
    Train,
    Airplane,
    Fireworks,
    PizzaDelivery,
    Heartbeat,
}

impl SpinnerTheme {
    /// All registered themes, in registry order
    pub fn all() -> &'static [SpinnerTheme] {
        Self::value_variants()
    }

    /// Registry name, as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            SpinnerTheme::ClassicDots => "classic-dots",
            SpinnerTheme::Line => "line",
            SpinnerTheme::PulsatingDot => "pulsating-dot",
            SpinnerTheme::GrowingBlock => "growing-block",
            SpinnerTheme::RotatingArrow => "rotating-arrow",
            SpinnerTheme::ArcLoader => "arc-loader",
            SpinnerTheme::Clock => "clock",
            SpinnerTheme::CircleDots => "circle-dots",
            SpinnerTheme::BouncingBall => "bouncing-ball",
            SpinnerTheme::FadingSquares => "fading-squares",
            SpinnerTheme::DotsFading => "dots-fading",
            SpinnerTheme::Earth => "earth",
            SpinnerTheme::Snake => "snake",
            SpinnerTheme::Triangle => "triangle",
            SpinnerTheme::Spiral => "spiral",
            SpinnerTheme::Wave => "wave",
            SpinnerTheme::Weather => "weather",
            SpinnerTheme::RunningPerson => "running-person",
            SpinnerTheme::RunningCat => "running-cat",
            SpinnerTheme::RunningDog => "running-dog",
            SpinnerTheme::Cycling => "cycling",
            SpinnerTheme::CarLoading => "car-loading",
            SpinnerTheme::Rocket => "rocket",
            SpinnerTheme::Orbit => "orbit",
            SpinnerTheme::Train => "train",
            SpinnerTheme::Airplane => "airplane",
            SpinnerTheme::Fireworks => "fireworks",
            SpinnerTheme::PizzaDelivery => "pizza-delivery",
            SpinnerTheme::Heartbeat => "heartbeat",
        }
    }

    /// Frames of this theme
    pub fn frames(&self) -> &'static [&'static str] {
        match self {
            SpinnerTheme::ClassicDots => &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            SpinnerTheme::Line => &["-", "\\", "|", "/"],
            SpinnerTheme::PulsatingDot => &["⠁", "⠂", "⠄", "⠂"],
            SpinnerTheme::GrowingBlock => &[
                "▁", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃",
            ],
            SpinnerTheme::RotatingArrow => &["→", "↘", "↓", "↙", "←", "↖", "↑", "↗"],
            SpinnerTheme::ArcLoader => &["◜", "◠", "◝", "◞", "◡", "◟"],
            SpinnerTheme::Clock => &[
                "🕛", "🕐", "🕑", "🕒", "🕓", "🕔", "🕕", "🕖", "🕗", "🕘", "🕙", "🕚",
            ],
            SpinnerTheme::CircleDots => &["◐", "◓", "◑", "◒"],
            SpinnerTheme::BouncingBall => &["⠁", "⠂", "⠄", "⠂"],
            SpinnerTheme::FadingSquares => &["▖", "▘", "▝", "▗"],
            SpinnerTheme::DotsFading => &["⠁", "⠂", "⠄", "⠂", "⠁", "⠂", "⠄", "⠂"],
            SpinnerTheme::Earth => &["🌍", "🌎", "🌏"],
            SpinnerTheme::Snake => &["⠈", "⠐", "⠠", "⢀", "⡀", "⠄", "⠂", "⠁"],
            SpinnerTheme::Triangle => &["◢", "◣", "◤", "◥"],
            SpinnerTheme::Spiral => &["▖", "▘", "▝", "▗", "▘", "▝", "▖", "▗"],
            SpinnerTheme::Wave => &[
                "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃", "▂", "▁",
            ],
            SpinnerTheme::Weather => &["🌤️", "⛅", "🌥️", "☁️", "🌧️", "⛈️", "🌩️", "🌨️"],
            SpinnerTheme::RunningPerson => &[
                "🏃💨",
                "🏃💨💨",
                "🏃💨💨💨",
                "🏃‍♂️💨",
                "🏃‍♂️💨💨",
                "🏃‍♀️💨",
                "🏃‍♀️💨💨",
            ],
            SpinnerTheme::RunningCat => &["🐱💨", "🐈💨", "🐱💨💨", "🐈💨💨"],
            SpinnerTheme::RunningDog => &["🐕💨", "🐶💨", "🐕‍🦺💨", "🐕💨💨"],
            SpinnerTheme::Cycling => &["🚴", "🚴‍♂️", "🚴‍♀️", "🚵", "🚵‍♂️", "🚵‍♀️"],
            SpinnerTheme::CarLoading => &["🚗💨", "🚙💨", "🚓💨", "🚕💨", "🚐💨", "🚔💨"],
            SpinnerTheme::Rocket => &["🚀", "🚀💨", "🚀💨💨", "🚀💨💨💨", "🚀🌌", "🚀🌠"],
            SpinnerTheme::Orbit => &["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"],
            SpinnerTheme::Train => &["🚆", "🚄", "🚅", "🚇", "🚊", "🚉"],
            SpinnerTheme::Airplane => &["✈️ ", "🛫", "🛬", "✈️💨", "✈️💨💨"],
            SpinnerTheme::Fireworks => &["🎆", "🎇", "🎆🎇", "🎇🎆"],
            SpinnerTheme::PizzaDelivery => &["🍕💨", "🍔💨", "🌭💨", "🍟💨"],
            SpinnerTheme::Heartbeat => &["💓", "💗", "💖", "💘", "💞", "💝", "💖"],
        }
    }
}

impl fmt::Display for SpinnerTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SpinnerTheme {
    type Err = SpinixError;

    /// Accepts registry names case-insensitively, with `_` or `-` separators
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .find(|theme| theme.name() == wanted)
            .copied()
            .ok_or_else(|| SpinixError::UnknownTheme(s.to_string()))
    }
}

/// An ordered, non-empty sequence of spinner frames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    frames: Vec<String>,
}

impl Theme {
    /// Build a custom theme, rejecting an empty frame list
    pub fn new<I, S>(frames: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let frames: Vec<String> = frames.into_iter().map(Into::into).collect();
        if frames.is_empty() {
            return Err(SpinixError::EmptyTheme);
        }
        Ok(Self { frames })
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Number of frames, never zero
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame at `index`, wrapping around the sequence
    pub fn frame(&self, index: usize) -> &str {
        &self.frames[index % self.frames.len()]
    }
}

impl From<SpinnerTheme> for Theme {
    fn from(theme: SpinnerTheme) -> Self {
        Self {
            frames: theme.frames().iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        SpinnerTheme::default().into()
    }
}
