use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One instantaneous gauge value together with its operating band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeReading {
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl GaugeReading {
    pub const fn new(value: f64, min: f64, max: f64) -> Self {
        Self { value, min, max }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingKind {
    Fuel,
    Oil,
    Sand,
    Temperature,
}

impl ReadingKind {
    /// Display order shared by every locomotive class.
    pub const ALL: [ReadingKind; 4] = [
        ReadingKind::Fuel,
        ReadingKind::Oil,
        ReadingKind::Sand,
        ReadingKind::Temperature,
    ];

    pub const fn glyph(self) -> char {
        match self {
            Self::Fuel => 'F',
            Self::Oil => 'O',
            Self::Sand => 'S',
            Self::Temperature => 'T',
        }
    }
}

/// Locomotive classes a remote can pair with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocoClass {
    Diesel,
    Shunter,
}

impl LocoClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diesel => "diesel",
            Self::Shunter => "shunter",
        }
    }
}

impl fmt::Display for LocoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locomotive class: {0:?}")]
pub struct ParseLocoClassError(pub String);

impl FromStr for LocoClass {
    type Err = ParseLocoClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "diesel" => Ok(Self::Diesel),
            "shunter" => Ok(Self::Shunter),
            _ => Err(ParseLocoClassError(s.to_string())),
        }
    }
}
