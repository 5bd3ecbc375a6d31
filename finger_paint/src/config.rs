//! Command line and the session configuration it produces.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use hand_gesture::{CaptureSize, Thresholds};
use stroke_log::TrackingLossPolicy;

use crate::export::DEFAULT_EXPORT_PATH;

#[derive(Parser, Debug)]
#[command(name = "finger_paint", about = "Paint on a canvas with hand gestures")]
pub struct Cli {
    /// Replay a JSON-lines landmark recording instead of simulating hands
    /// ("-" reads stdin)
    #[arg(long, value_name = "PATH")]
    pub replay: Option<PathBuf>,

    /// Capture width in pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Capture height in pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Frames per second for the window and for replay pacing
    #[arg(long, default_value_t = 30)]
    pub fps: u32,

    /// Where the export gesture writes the PNG snapshot
    #[arg(long, value_name = "PATH", default_value = DEFAULT_EXPORT_PATH)]
    pub export: PathBuf,

    /// End the current stroke when every hand leaves the view
    #[arg(long)]
    pub break_on_loss: bool,

    /// Mirror replayed landmarks left to right
    #[arg(long)]
    pub mirror: bool,

    /// Record simulated frames as JSON lines
    #[arg(long, value_name = "PATH", conflicts_with = "replay")]
    pub record: Option<PathBuf>,
}

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

/// Where landmark frames come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Mouse and keyboard stand in for the hands.
    Simulation { record: Option<PathBuf> },
    /// Frames read back from a recording.
    Replay { path: PathBuf, mirror: bool },
}

/// Configuration for the full application.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub size:        CaptureSize,
    pub fps:         u32,
    pub export_path: PathBuf,
    pub thresholds:  Thresholds,
    pub loss_policy: TrackingLossPolicy,
    pub input:       InputMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            size:        CaptureSize::default(),
            fps:         30,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            thresholds:  Thresholds::default(),
            loss_policy: TrackingLossPolicy::default(),
            input:       InputMode::Simulation { record: None },
        }
    }
}

impl AppConfig {
    /// Time between frames at the configured rate.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        let input = match cli.replay {
            Some(path) => InputMode::Replay { path, mirror: cli.mirror },
            None       => InputMode::Simulation { record: cli.record },
        };
        AppConfig {
            size:        CaptureSize::new(cli.width.max(1), cli.height.max(1)),
            fps:         cli.fps.max(1),
            export_path: cli.export,
            thresholds:  Thresholds::default(),
            loss_policy: if cli.break_on_loss { TrackingLossPolicy::Break } else { TrackingLossPolicy::Reconnect },
            input,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
