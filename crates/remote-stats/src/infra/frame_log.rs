//! JSONL recording of everything the remote displayed.
//!
//! One [`FrameEntry`] per line, appended so earlier sessions are kept.

use remote_core::DisplayFrame;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Why the frame was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameEvent {
    /// Periodic redraw
    Refresh,
    /// Operator stepped the selection
    Cycle,
}

/// A single frame log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameEntry {
    pub tick: u64,
    /// Simulated seconds since the session started
    pub elapsed_s: f64,
    pub event: FrameEvent,
    pub selected: i32,
    pub frame: DisplayFrame,
}

pub struct FrameLogger {
    writer: BufWriter<File>,
}

impl FrameLogger {
    /// Open `path` in append mode, creating parent directories as needed.
    pub fn new(path: &Path) -> std::io::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: BufWriter::with_capacity(8192, file),
        })
    }

    pub fn log(&mut self, entry: &FrameEntry) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.writer, entry)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}
