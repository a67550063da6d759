pub mod encoder;
mod encoder_proptest;
pub mod hal;
#[cfg(feature = "simulation")]
pub mod hal_sim;
pub mod reading;
pub mod registry;
pub mod remote;
pub mod selector;

pub use encoder::{encode, encode_with, format_value, Encoding, INVALID_INDEX, NOT_PAIRED};
pub use hal::{DisplayError, LocoId, LocoTelemetry, Paired, RemoteDisplay};
#[cfg(feature = "simulation")]
pub use hal_sim::{LocoProfile, SimulatedLoco};
pub use reading::{GaugeReading, LocoClass, ParseLocoClassError, ReadingKind};
pub use registry::{ReadingSet, ReadingSlot};
pub use remote::{DisplayFrame, RemoteController, RemoteStats};
pub use selector::{advance, display, SelectionState};
