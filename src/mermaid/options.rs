use crate::error::OptionError;
use std::fmt;
use std::str::FromStr;

/// The flow direction of the rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    TopToBottom,
    BottomToTop,
    LeftToRight,
    RightToLeft,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::TopToBottom => "TB",
            Direction::BottomToTop => "BT",
            Direction::LeftToRight => "LR",
            Direction::RightToLeft => "RL",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            // Mermaid accepts TD as a synonym for TB.
            "TB" | "TD" => Ok(Direction::TopToBottom),
            "BT" => Ok(Direction::BottomToTop),
            "LR" => Ok(Direction::LeftToRight),
            "RL" => Ok(Direction::RightToLeft),
            _ => Err(OptionError::UnknownDirection(s.to_string())),
        }
    }
}

/// One of Mermaid's built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Default,
    Forest,
    Dark,
    Neutral,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Forest => "forest",
            Theme::Dark => "dark",
            Theme::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Theme::Default),
            "forest" => Ok(Theme::Forest),
            "dark" => Ok(Theme::Dark),
            "neutral" => Ok(Theme::Neutral),
            _ => Err(OptionError::UnknownTheme(s.to_string())),
        }
    }
}

/// Settings for `MermaidGenerator`.
///
/// With no theme set, the output carries no init directive and the renderer's own
/// theme applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub direction: Direction,
    pub theme: Option<Theme>,
}

impl GeneratorOptions {
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }
}
