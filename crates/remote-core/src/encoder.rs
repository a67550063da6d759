use crate::reading::GaugeReading;

/// Shown when the selection index does not address a reading.
pub const INVALID_INDEX: &str = "X:X";

/// Shown when the remote is not paired with anything.
pub const NOT_PAIRED: &str = "N:A";

/// Engine temperature below this (°C) shows as cold.
pub const COLD_BELOW_C: f64 = 40.0;

/// Engine temperature above this (°C) shows as overheated.
pub const HOT_ABOVE_C: f64 = 99.0;

const _: () = assert!(COLD_BELOW_C < HOT_ABOVE_C);

const UNDER_RANGE: &str = "u";
const OVER_RANGE: &str = "o";
const COLD: &str = "c";
const HOT: &str = "H";

/// Band positions are shown in tenths.
const BAND_SCALE: f64 = 10.0;
const TOP_DIGIT: f64 = 9.0;

/// How a reading is turned into its one or two character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Position of the value inside `[min, max]` as a tenths digit.
    Band,
    /// Absolute engine temperature in tens of degrees, ignoring the band.
    AbsoluteTemperature,
}

impl Encoding {
    pub fn code(self, reading: &GaugeReading) -> String {
        match self {
            Self::Band => band_code(reading),
            Self::AbsoluteTemperature => temperature_code(reading.value),
        }
    }
}

/// Encodes a reading with the generic band rule, e.g. `"F:4."`.
pub fn encode(glyph: char, reading: &GaugeReading) -> String {
    encode_with(glyph, Encoding::Band, reading)
}

pub fn encode_with(glyph: char, encoding: Encoding, reading: &GaugeReading) -> String {
    let code = encoding.code(reading);
    let mut out = String::with_capacity(2 + code.len());
    out.push(glyph);
    out.push(':');
    out.push_str(&code);
    out
}

/// Renders the whole part of `v`, followed by `.` when the remainder is at
/// least one half. Negative inputs truncate toward zero.
pub fn format_value(v: f64) -> String {
    let mut floored = v.floor();
    if v < 0.0 && floored != v {
        floored += 1.0;
    }

    let mut out = (floored as i64).to_string();
    if v - floored >= 0.5 {
        out.push('.');
    }
    out
}

fn band_code(reading: &GaugeReading) -> String {
    if reading.value < reading.min {
        return UNDER_RANGE.to_string();
    }
    if reading.value > reading.max {
        return OVER_RANGE.to_string();
    }

    let span = reading.max - reading.min;
    if span == 0.0 {
        return format_value(0.0);
    }

    let scaled = ((reading.value - reading.min) / span * BAND_SCALE).clamp(0.0, BAND_SCALE);
    if scaled >= BAND_SCALE {
        // A full band has no eleventh digit.
        return format_value(TOP_DIGIT);
    }
    format_value(scaled)
}

fn temperature_code(temp_c: f64) -> String {
    if temp_c < COLD_BELOW_C {
        return COLD.to_string();
    }
    if temp_c > HOT_ABOVE_C {
        return HOT.to_string();
    }
    format_value(temp_c / 10.0)
}
