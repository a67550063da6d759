//! Per-class reading tables.
//!
//! Each locomotive class exposes the same four gauges in the same order, but
//! the encoding is chosen per `(class, kind)`: the shunter's engine
//! temperature is shown in absolute tens of degrees while every other gauge
//! is shown as a position inside its band.

use crate::encoder::{encode_with, Encoding};
use crate::hal::LocoTelemetry;
use crate::reading::{GaugeReading, LocoClass, ReadingKind};

/// Pulls one gauge out of a live locomotive.
pub type Accessor = fn(&dyn LocoTelemetry) -> GaugeReading;

#[derive(Clone, Copy)]
pub struct ReadingSlot {
    pub kind: ReadingKind,
    pub encoding: Encoding,
    pub read: Accessor,
}

impl ReadingSlot {
    const fn new(kind: ReadingKind, encoding: Encoding, read: Accessor) -> Self {
        Self {
            kind,
            encoding,
            read,
        }
    }

    pub fn glyph(&self) -> char {
        self.kind.glyph()
    }

    pub fn encode(&self, telemetry: &dyn LocoTelemetry) -> String {
        encode_with(self.glyph(), self.encoding, &(self.read)(telemetry))
    }
}

impl std::fmt::Debug for ReadingSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadingSlot")
            .field("kind", &self.kind)
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

fn fuel(t: &dyn LocoTelemetry) -> GaugeReading {
    t.fuel()
}

fn oil(t: &dyn LocoTelemetry) -> GaugeReading {
    t.oil()
}

fn sand(t: &dyn LocoTelemetry) -> GaugeReading {
    t.sand()
}

fn engine_temp(t: &dyn LocoTelemetry) -> GaugeReading {
    t.engine_temp()
}

static DIESEL_READINGS: [ReadingSlot; 4] = [
    ReadingSlot::new(ReadingKind::Fuel, Encoding::Band, fuel),
    ReadingSlot::new(ReadingKind::Oil, Encoding::Band, oil),
    ReadingSlot::new(ReadingKind::Sand, Encoding::Band, sand),
    ReadingSlot::new(ReadingKind::Temperature, Encoding::Band, engine_temp),
];

static SHUNTER_READINGS: [ReadingSlot; 4] = [
    ReadingSlot::new(ReadingKind::Fuel, Encoding::Band, fuel),
    ReadingSlot::new(ReadingKind::Oil, Encoding::Band, oil),
    ReadingSlot::new(ReadingKind::Sand, Encoding::Band, sand),
    ReadingSlot::new(
        ReadingKind::Temperature,
        Encoding::AbsoluteTemperature,
        engine_temp,
    ),
];

/// Ordered, immutable list of readings available for one locomotive class.
#[derive(Debug, Clone, Copy)]
pub struct ReadingSet {
    slots: &'static [ReadingSlot],
}

impl ReadingSet {
    pub const EMPTY: ReadingSet = ReadingSet { slots: &[] };

    pub fn for_class(class: LocoClass) -> Self {
        let slots: &'static [ReadingSlot] = match class {
            LocoClass::Diesel => &DIESEL_READINGS,
            LocoClass::Shunter => &SHUNTER_READINGS,
        };
        Self { slots }
    }

    /// Readings for whatever is paired; nothing paired yields [`ReadingSet::EMPTY`].
    pub fn for_pairing(class: Option<LocoClass>) -> Self {
        class.map_or(Self::EMPTY, Self::for_class)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: i32) -> Option<&'static ReadingSlot> {
        let slots = self.slots;
        usize::try_from(index).ok().and_then(|i| slots.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ReadingSlot> {
        let slots = self.slots;
        slots.iter()
    }
}
