use crate::encoder::{INVALID_INDEX, NOT_PAIRED};
use crate::hal::LocoTelemetry;
use crate::registry::ReadingSet;

/// Moves `current` by `delta` and wraps into `[0, count)`.
///
/// With nothing to select (`count == 0`) the cursor parks at 0. Any sign and
/// magnitude of `delta` is accepted.
pub fn advance(current: i32, delta: i32, count: usize) -> i32 {
    if count == 0 {
        return 0;
    }
    let count = i64::try_from(count).unwrap_or(i64::MAX);
    let next = (i64::from(current) + i64::from(delta)).rem_euclid(count);
    // `next < count`, and a meaningful count of readings always fits in i32.
    i32::try_from(next).unwrap_or(0)
}

/// Text for the remote's display at `index`.
///
/// `"N:A"` when nothing is paired, `"X:X"` when the index is outside the
/// paired locomotive's readings.
pub fn display(
    index: i32,
    count: usize,
    readings: &ReadingSet,
    telemetry: Option<&dyn LocoTelemetry>,
) -> String {
    let telemetry = match telemetry {
        Some(telemetry) if count > 0 => telemetry,
        _ => return NOT_PAIRED.to_string(),
    };

    let in_range = usize::try_from(index).map_or(false, |i| i < count);
    match readings.get(index) {
        Some(slot) if in_range => slot.encode(telemetry),
        _ => INVALID_INDEX.to_string(),
    }
}

/// Cursor into the paired locomotive's readings, owned by the remote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub index: i32,
}

impl SelectionState {
    pub fn advance(&mut self, delta: i32, count: usize) -> i32 {
        self.index = advance(self.index, delta, count);
        self.index
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::{GaugeReading, LocoClass};

    struct Gauges;

    impl LocoTelemetry for Gauges {
        fn fuel(&self) -> GaugeReading {
            GaugeReading::new(500.0, 0.0, 1000.0)
        }
        fn oil(&self) -> GaugeReading {
            GaugeReading::new(0.0, 0.0, 50.0)
        }
        fn sand(&self) -> GaugeReading {
            GaugeReading::new(200.0, 0.0, 200.0)
        }
        fn engine_temp(&self) -> GaugeReading {
            GaugeReading::new(100.0, 30.0, 130.0)
        }
    }

    #[test]
    fn advance_wraps_both_ways() {
        assert_eq!(advance(0, -1, 4), 3);
        assert_eq!(advance(3, 1, 4), 0);
        assert_eq!(advance(1, 1, 4), 2);
    }

    #[test]
    fn advance_with_nothing_paired_parks_at_zero() {
        assert_eq!(advance(0, 1, 0), 0);
        assert_eq!(advance(7, -3, 0), 0);
        assert_eq!(advance(i32::MIN, i32::MIN, 0), 0);
    }

    #[test]
    fn advance_handles_large_steps() {
        assert_eq!(advance(0, -9, 4), 3);
        assert_eq!(advance(2, 13, 4), 3);
        assert_eq!(advance(i32::MAX, i32::MAX, 4), 2);
        assert_eq!(advance(i32::MIN, -1, 4), 3);
    }

    #[test]
    fn advance_repairs_stale_index() {
        assert_eq!(advance(10, 0, 4), 2);
        assert_eq!(advance(-5, 0, 4), 3);
    }

    #[test]
    fn display_nothing_paired() {
        assert_eq!(display(0, 0, &ReadingSet::EMPTY, None), "N:A");
        let readings = ReadingSet::for_class(LocoClass::Diesel);
        assert_eq!(display(0, 4, &readings, None), "N:A");
        assert_eq!(display(0, 0, &readings, Some(&Gauges)), "N:A");
    }

    #[test]
    fn display_invalid_index() {
        let readings = ReadingSet::for_class(LocoClass::Diesel);
        assert_eq!(display(99, 4, &readings, Some(&Gauges)), "X:X");
        assert_eq!(display(-1, 4, &readings, Some(&Gauges)), "X:X");
        assert_eq!(display(2, 2, &readings, Some(&Gauges)), "X:X");
    }

    #[test]
    fn display_encodes_selected_reading() {
        let readings = ReadingSet::for_class(LocoClass::Diesel);
        let shown: Vec<_> = (0..4)
            .map(|i| display(i, readings.len(), &readings, Some(&Gauges)))
            .collect();
        assert_eq!(shown, ["F:5", "O:0", "S:9", "T:7"]);

        let shunter = ReadingSet::for_class(LocoClass::Shunter);
        assert_eq!(display(3, shunter.len(), &shunter, Some(&Gauges)), "T:H");
    }

    #[test]
    fn display_is_idempotent() {
        let readings = ReadingSet::for_class(LocoClass::Shunter);
        let first = display(1, 4, &readings, Some(&Gauges));
        let second = display(1, 4, &readings, Some(&Gauges));
        assert_eq!(first, second);
    }

    #[test]
    fn selection_state_cycles_and_resets() {
        let mut state = SelectionState::default();
        assert_eq!(state.advance(-1, 4), 3);
        assert_eq!(state.advance(1, 4), 0);
        state.advance(2, 4);
        state.reset();
        assert_eq!(state.index, 0);
        assert_eq!(state.advance(1, 0), 0);
    }
}
