use crate::reading::{GaugeReading, LocoClass};
use thiserror::Error;

/// Live gauge access for one locomotive, implemented by the host simulation.
pub trait LocoTelemetry {
    fn fuel(&self) -> GaugeReading;
    fn oil(&self) -> GaugeReading;
    fn sand(&self) -> GaugeReading;
    fn engine_temp(&self) -> GaugeReading;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("Display device is disconnected")]
    Disconnected,

    #[error("Display rejected {0:?}")]
    Rejected(String),
}

/// The remote's coupler display: a one-character sign slot and a short text slot.
pub trait RemoteDisplay {
    fn show_sign(&mut self, sign: &str) -> Result<(), DisplayError>;
    fn show_text(&mut self, text: &str) -> Result<(), DisplayError>;
}

/// Host identifier of a locomotive.
pub type LocoId = u32;

/// Answer to the pairing query: which locomotive the remote controls right now.
#[derive(Clone, Copy)]
pub struct Paired<'a> {
    pub id: LocoId,
    pub class: LocoClass,
    pub telemetry: &'a dyn LocoTelemetry,
}

impl<'a> Paired<'a> {
    pub fn new(id: LocoId, class: LocoClass, telemetry: &'a dyn LocoTelemetry) -> Self {
        Self {
            id,
            class,
            telemetry,
        }
    }
}

impl std::fmt::Debug for Paired<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paired")
            .field("id", &self.id)
            .field("class", &self.class)
            .finish_non_exhaustive()
    }
}
