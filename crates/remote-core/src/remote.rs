use crate::hal::{DisplayError, LocoId, Paired, RemoteDisplay};
use crate::reading::LocoClass;
use crate::registry::ReadingSet;
use crate::selector::{display, SelectionState};
use log::debug;
use serde::{Deserialize, Serialize};

pub const SIGN_PAIRED: &str = "+";
pub const SIGN_UNPAIRED: &str = "-";

/// What the remote last put on its display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFrame {
    pub paired: bool,
    pub sign: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PairingKey {
    id: LocoId,
    class: LocoClass,
    count: usize,
}

#[derive(Clone, Default, Debug)]
pub struct RemoteStats {
    pub cycles: u64,
    pub refreshes: u64,
    pub selection_resets: u64,
    pub display_errors: u64,
}

/// Remote control whose coupler display is repurposed to show gauges.
pub struct RemoteController<D: RemoteDisplay> {
    display: D,
    selection: SelectionState,
    last_pairing: Option<PairingKey>,
    stats: RemoteStats,
}

impl<D: RemoteDisplay> RemoteController<D> {
    pub fn new(display: D) -> Self {
        Self {
            display,
            selection: SelectionState::default(),
            last_pairing: None,
            stats: RemoteStats::default(),
        }
    }

    pub fn selected(&self) -> i32 {
        self.selection.index
    }

    pub fn stats(&self) -> &RemoteStats {
        &self.stats
    }

    pub fn display_device(&self) -> &D {
        &self.display
    }

    /// Steps the selection by `delta` and redraws immediately.
    pub fn cycle(
        &mut self,
        delta: i32,
        pairing: Option<Paired<'_>>,
    ) -> Result<DisplayFrame, DisplayError> {
        let readings = self.sync_pairing(pairing.as_ref());
        let index = self.selection.advance(delta, readings.len());
        self.stats.cycles += 1;
        debug!("cycled selection by {delta} to {index}");
        self.redraw(pairing, &readings)
    }

    pub fn refresh(&mut self, pairing: Option<Paired<'_>>) -> Result<DisplayFrame, DisplayError> {
        let readings = self.sync_pairing(pairing.as_ref());
        self.redraw(pairing, &readings)
    }

    /// Coupler buttons no longer couple anything while the display shows gauges.
    pub fn on_couple_pressed(&self) {
        debug!("couple button ignored");
    }

    pub fn on_uncouple_pressed(&self) {
        debug!("uncouple button ignored");
    }

    fn sync_pairing(&mut self, pairing: Option<&Paired<'_>>) -> ReadingSet {
        let readings = ReadingSet::for_pairing(pairing.map(|p| p.class));
        let key = pairing.map(|p| PairingKey {
            id: p.id,
            class: p.class,
            count: readings.len(),
        });

        if key != self.last_pairing {
            match key {
                Some(k) => debug!("paired with {} #{} ({} readings)", k.class, k.id, k.count),
                None => debug!("remote unpaired"),
            }
            if self.selection.index != 0 {
                self.stats.selection_resets += 1;
            }
            self.selection.reset();
            self.last_pairing = key;
        }
        readings
    }

    fn redraw(
        &mut self,
        pairing: Option<Paired<'_>>,
        readings: &ReadingSet,
    ) -> Result<DisplayFrame, DisplayError> {
        let telemetry = pairing.map(|p| p.telemetry);
        let text = display(self.selection.index, readings.len(), readings, telemetry);
        let paired = pairing.is_some();
        let sign = if paired { SIGN_PAIRED } else { SIGN_UNPAIRED };

        self.stats.refreshes += 1;
        let written = self
            .display
            .show_sign(sign)
            .and_then(|()| self.display.show_text(&text));
        if let Err(err) = written {
            self.stats.display_errors += 1;
            return Err(err);
        }

        Ok(DisplayFrame {
            paired,
            sign: sign.to_string(),
            text,
        })
    }
}
