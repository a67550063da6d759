use remote_core::LocoClass;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Invalid value {value:?} for {flag}: {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Unknown option {0}")]
    UnknownOption(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub show_help: bool,
    /// Class of the paired locomotive; `None` runs an unpaired remote.
    pub loco: Option<LocoClass>,
    pub ticks: u64,
    pub dt_s: f64,
    pub throttle: f64,
    pub sanding: bool,
    /// Cycle the selection every N ticks; 0 only refreshes.
    pub cycle_every: u64,
    pub cycle_delta: i32,
    /// Tick from which the remote is no longer paired.
    pub unpair_at: Option<u64>,
    pub frame_log: Option<PathBuf>,
    pub json_logs: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            show_help: false,
            loco: Some(LocoClass::Diesel),
            ticks: 20,
            dt_s: 30.0,
            throttle: 0.8,
            sanding: false,
            cycle_every: 5,
            cycle_delta: 1,
            unpair_at: None,
            frame_log: None,
            json_logs: false,
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let args: Vec<String> = std::env::args().collect();
        Self::from_args(&args)
    }

    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let mut cfg = RuntimeConfig::default();
        let mut i = 1;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--loco" => {
                    let value = value_of(args, i)?;
                    cfg.loco = match value {
                        "none" => None,
                        other => Some(other.parse().map_err(|e| invalid(flag, other, e))?),
                    };
                    i += 1;
                }
                "--ticks" => {
                    cfg.ticks = parse_value(args, i)?;
                    i += 1;
                }
                "--dt" => {
                    let dt: f64 = parse_value(args, i)?;
                    if !(dt.is_finite() && dt > 0.0) {
                        return Err(invalid(flag, &args[i + 1], "must be a positive number"));
                    }
                    cfg.dt_s = dt;
                    i += 1;
                }
                "--throttle" => {
                    let throttle: f64 = parse_value(args, i)?;
                    if !(0.0..=1.0).contains(&throttle) {
                        return Err(invalid(flag, &args[i + 1], "must be within 0..=1"));
                    }
                    cfg.throttle = throttle;
                    i += 1;
                }
                "--sanding" => {
                    cfg.sanding = true;
                }
                "--cycle-every" => {
                    cfg.cycle_every = parse_value(args, i)?;
                    i += 1;
                }
                "--cycle-delta" => {
                    cfg.cycle_delta = parse_value(args, i)?;
                    i += 1;
                }
                "--unpair-at" => {
                    cfg.unpair_at = Some(parse_value(args, i)?);
                    i += 1;
                }
                "--frame-log" => {
                    cfg.frame_log = Some(PathBuf::from(value_of(args, i)?));
                    i += 1;
                }
                "--json-logs" => {
                    cfg.json_logs = true;
                }
                "--help" | "-h" => {
                    cfg.show_help = true;
                    break;
                }
                other => return Err(ConfigError::UnknownOption(other.to_string())),
            }
            i += 1;
        }
        Ok(cfg)
    }

    pub fn print_help() {
        println!(
            r#"remote-stats - Locomotive gauges on a remote's coupler display

USAGE:
    remote-stats [OPTIONS]

OPTIONS:
    --loco <CLASS>          Paired locomotive: diesel, shunter or none [default: diesel]
    --ticks <N>             Number of simulation ticks to run [default: 20]
    --dt <SECS>             Simulated seconds per tick [default: 30]
    --throttle <0..1>       Throttle held for the whole run [default: 0.8]
    --sanding               Keep the sander on
    --cycle-every <N>       Cycle the displayed gauge every N ticks, 0 to never cycle [default: 5]
    --cycle-delta <STEP>    Selection step per cycle, may be negative [default: 1]
    --unpair-at <TICK>      Unpair the remote from this tick on
    --frame-log <PATH>      Append every display frame to a JSONL file
    --json-logs             Output logs in JSON format
    -h, --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log filter (e.g., RUST_LOG=debug,remote_core=trace)

EXAMPLES:
    # Watch a shunter warm up, cycling every tick
    remote-stats --loco shunter --cycle-every 1

    # Record frames while the remote walks backwards through the gauges
    remote-stats --cycle-delta -1 --frame-log frames.jsonl
"#
        );
    }
}

fn value_of(args: &[String], i: usize) -> Result<&str, ConfigError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| ConfigError::MissingValue(args[i].clone()))
}

fn parse_value<T>(args: &[String], i: usize) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = value_of(args, i)?;
    value.parse().map_err(|e| invalid(&args[i], value, e))
}

fn invalid(flag: &str, value: &str, reason: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
