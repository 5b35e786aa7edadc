use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum GameError {
    InvalidDimensions { width: f64, height: f64 },
    InvalidProbability { name: &'static str, value: f64 },
    InvalidConfig { name: &'static str, reason: &'static str },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions: {width}x{height} (both must be finite and > 0)")
            }
            Self::InvalidProbability { name, value } => {
                write!(f, "invalid probability for {name}: {value} (allowed 0.0..=1.0)")
            }
            Self::InvalidConfig { name, reason } => write!(f, "invalid config value {name}: {reason}"),
        }
    }
}

impl std::error::Error for GameError {}
