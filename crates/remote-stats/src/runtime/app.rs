use crate::infra::frame_log::{FrameEntry, FrameEvent, FrameLogger};
use crate::runtime::config::{ConfigError, RuntimeConfig};
use crate::runtime::console::ConsoleDisplay;
use crate::runtime::logging::init_tracing;
use remote_core::{
    DisplayError, DisplayFrame, LocoId, LocoTelemetry, Paired, RemoteController, RemoteStats,
    SimulatedLoco,
};
use std::io::Write;
use thiserror::Error;
use tracing::{info, warn};

/// Host id given to the simulated locomotive.
const SIM_LOCO_ID: LocoId = 1;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Frame log error: {0}")]
    FrameLog(#[from] std::io::Error),

    #[error("Display error: {0}")]
    Display(#[from] DisplayError),
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub ticks: u64,
    pub stats: RemoteStats,
    pub last_frame: Option<DisplayFrame>,
}

pub fn run_from_args() -> Result<(), AppError> {
    let config = RuntimeConfig::from_env()?;
    if config.show_help {
        RuntimeConfig::print_help();
        return Ok(());
    }
    run(config).map(|_| ())
}

pub fn run(config: RuntimeConfig) -> Result<RunSummary, AppError> {
    init_tracing(config.json_logs);

    info!(
        loco = config.loco.map_or("none", |c| c.as_str()),
        ticks = config.ticks,
        dt_s = config.dt_s,
        throttle = config.throttle,
        cycle_every = config.cycle_every,
        "Starting remote session"
    );

    let stdout = std::io::stdout();
    let summary = run_session(&config, stdout.lock())?;

    info!(
        ticks = summary.ticks,
        cycles = summary.stats.cycles,
        refreshes = summary.stats.refreshes,
        selection_resets = summary.stats.selection_resets,
        last_text = summary.last_frame.as_ref().map_or("", |f| f.text.as_str()),
        "Run complete"
    );
    Ok(summary)
}

/// Drives one simulated locomotive and a remote, writing frames to `out`.
pub fn run_session<W: Write>(config: &RuntimeConfig, out: W) -> Result<RunSummary, AppError> {
    let mut loco = config.loco.map(SimulatedLoco::new);
    if let Some(loco) = loco.as_mut() {
        loco.set_throttle(config.throttle);
        loco.set_sanding(config.sanding);
    }

    let mut frame_log = match config.frame_log.as_deref() {
        Some(path) => {
            info!(path = %path.display(), "Frame logging enabled");
            Some(FrameLogger::new(path)?)
        }
        None => None,
    };

    let mut remote = RemoteController::new(ConsoleDisplay::new(out));
    let mut last_frame = None;

    for tick in 0..config.ticks {
        if let Some(loco) = loco.as_mut() {
            loco.step(config.dt_s);
        }

        let still_paired = config.unpair_at.map_or(true, |at| tick < at);
        let pairing = loco
            .as_ref()
            .filter(|_| still_paired)
            .map(|l| Paired::new(SIM_LOCO_ID, l.class(), l as &dyn LocoTelemetry));

        let cycle_now = config.cycle_every > 0 && tick > 0 && tick % config.cycle_every == 0;
        let (event, frame) = if cycle_now {
            (FrameEvent::Cycle, remote.cycle(config.cycle_delta, pairing)?)
        } else {
            (FrameEvent::Refresh, remote.refresh(pairing)?)
        };

        if let Some(loco) = loco.as_ref().filter(|l| !l.is_running()) {
            warn!(tick, fuel = loco.fuel().value, oil = loco.oil().value, "Engine stopped");
        }
        info!(tick, event = ?event, sign = %frame.sign, text = %frame.text, "Display updated");

        if let Some(logger) = frame_log.as_mut() {
            logger.log(&FrameEntry {
                tick,
                elapsed_s: (tick + 1) as f64 * config.dt_s,
                event,
                selected: remote.selected(),
                frame: frame.clone(),
            })?;
        }
        last_frame = Some(frame);
    }

    Ok(RunSummary {
        ticks: config.ticks,
        stats: remote.stats().clone(),
        last_frame,
    })
}
