//! Top-level application loop.
//!
//! `AppState` owns the [`DrawingState`], the backdrop standing in for the
//! camera frame and the canvas.  Each landmark frame runs, in order:
//!
//! 1. classify every hand,
//! 2. mutate the stroke logs,
//! 3. sample the active color from the backdrop,
//! 4. lay new stroke segments onto the ink layer,
//! 5. render, saving a snapshot first when both hands asked for one.
//!
//! Frames are never batched: each one is rendered before the next is read.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, TryRecvError};

use anyhow::Context;
use hand_gesture::{CaptureSize, HandLandmarks};
use stroke_log::{selection_rect, track_hands, DrawingState, FrameOutcome, TrackedHand};
use tracing::{debug, info, warn};

use crate::backdrop::Backdrop;
use crate::canvas::Canvas;
use crate::config::{AppConfig, InputMode};
use crate::export::export_png;
use crate::source::{
    spawn_landmark_source, LandmarkFrame, ReplayLandmarkSource, SessionRecorder, SimLandmarkSource,
};
use crate::visualizer::Visualizer;

// ════════════════════════════════════════════════════════════════════════════
// AppState
// ════════════════════════════════════════════════════════════════════════════

pub struct AppState {
    // ── drawing ──────────────────────────────────────────────────────────
    drawing:  DrawingState,
    size:     CaptureSize,
    /// Hands of the latest frame, for the skeleton overlay.
    hands:    Vec<TrackedHand>,

    // ── raster ───────────────────────────────────────────────────────────
    backdrop: Backdrop,
    canvas:   Canvas,

    // ── export ───────────────────────────────────────────────────────────
    export_path: PathBuf,
    /// The current frame was written out.
    saved:       bool,
    exports:     usize,

    pub status: String,
}

impl AppState {
    pub fn new(cfg: &AppConfig) -> Self {
        let (w, h) = (cfg.size.width as usize, cfg.size.height as usize);
        AppState {
            drawing:  DrawingState::new(cfg.thresholds, cfg.loss_policy),
            size:     cfg.size,
            hands:    Vec::new(),
            backdrop: Backdrop::palette(w, h),
            canvas:   Canvas::new(w, h),
            export_path: cfg.export_path.clone(),
            saved:       false,
            exports:     0,
            status:   "no hands".to_string(),
        }
    }

    /// Swap in a different backdrop; mostly for tests.
    pub fn with_backdrop(mut self, backdrop: Backdrop) -> Self {
        self.backdrop = backdrop;
        self
    }

    // ── process one landmark frame ───────────────────────────────────────

    /// Apply one frame.  An export is written here, from this frame's
    /// state, so a later frame can't change what gets saved.
    pub fn handle_frame(&mut self, frame: &[HandLandmarks]) -> FrameOutcome {
        self.saved = false;
        let tracked = track_hands(frame, self.size, self.drawing.thresholds());
        let out = self.drawing.update(&tracked);

        if out.cleared {
            self.canvas.wipe_ink();
        }
        self.drawing.sample_color(&self.backdrop);

        let segments = self.drawing.replay_strokes();
        self.canvas.ink_segments(&segments);

        self.hands = tracked;
        self.status = status_line(&out);
        debug!(status = %self.status, "frame");

        if out.export {
            self.compose();
            self.saved = self.export();
        }
        out
    }

    // ── per-frame render ─────────────────────────────────────────────────

    /// Compose the canvas for display.
    pub fn render(&mut self) {
        self.compose();
        if self.saved {
            self.canvas.draw_saved_notice();
        }
    }

    /// Everything an export captures: backdrop, ink, skeletons, swatch,
    /// selection marker and status bar.
    fn compose(&mut self) {
        self.canvas.compose(&self.backdrop);
        for hand in &self.hands {
            self.canvas.draw_hand(&hand.pixels);
        }
        self.canvas.draw_swatch(self.drawing.active_color());
        if let Some(tip) = self.drawing.sample_point() {
            self.canvas.draw_selection(selection_rect(tip));
        }
        self.canvas.draw_status(&self.status);
    }

    fn export(&mut self) -> bool {
        match export_png(&self.export_path, &self.canvas) {
            Ok(()) => {
                self.exports += 1;
                info!(path = %self.export_path.display(), "image saved");
                true
            }
            Err(e) => {
                warn!(path = %self.export_path.display(), "export failed: {e}");
                self.status = "export failed".to_string();
                false
            }
        }
    }

    // ── accessors for the render loop ────────────────────────────────────

    pub fn canvas(&self)      -> &Canvas       { &self.canvas }
    pub fn drawing(&self)     -> &DrawingState { &self.drawing }
    pub fn export_path(&self) -> &Path         { &self.export_path }
    /// Snapshots written so far.
    pub fn exports(&self)     -> usize         { self.exports }
}

fn status_line(out: &FrameOutcome) -> String {
    match (out.primary, out.secondary) {
        (Some(p), Some(s)) => format!("draw {p}  pick {s}"),
        (Some(p), None)    => format!("draw {p}"),
        _ if out.hands == 0 => "no hands".to_string(),
        _                  => format!("{} hands", out.hands),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// run() — the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Run the full application until the window closes or `q` is pressed.
pub fn run(cfg: AppConfig) -> anyhow::Result<()> {
    // ── landmark source ──────────────────────────────────────────────────
    let (sim_tx, frames) = match &cfg.input {
        InputMode::Simulation { record } => {
            let recorder = match record {
                Some(path) => Some(SessionRecorder::create(path.clone())
                    .with_context(|| format!("creating recording {}", path.display()))?),
                None => None,
            };
            let (tx, rx) = mpsc::channel();
            let frames = spawn_landmark_source(SimLandmarkSource { rx, size: cfg.size, recorder });
            (Some(tx), frames)
        }
        InputMode::Replay { path, mirror } => {
            let source = ReplayLandmarkSource::open(path, cfg.frame_interval(), *mirror)
                .with_context(|| format!("opening recording {}", path.display()))?;
            info!(path = %path.display(), "replaying recording");
            (None, spawn_landmark_source(source))
        }
    };

    // ── window ───────────────────────────────────────────────────────────
    let mut vis = Visualizer::new(cfg.size, cfg.fps, sim_tx)?;
    let mut app = AppState::new(&cfg);
    let mut source_done = false;
    app.render();

    // ── main loop ────────────────────────────────────────────────────────
    while vis.is_open() {
        if !vis.poll_input() { break; }

        loop {
            match frames.try_recv() {
                Ok(frame) => {
                    app.handle_frame(&frame);
                    app.render();
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !source_done {
                        info!("landmark source finished; press q to quit");
                        source_done = true;
                    }
                    break;
                }
            }
        }

        vis.present(app.canvas());
    }

    info!(exports = app.exports(), "session ended");
    Ok(())
}

/// Feed a batch of frames through a headless app, rendering after each.
pub fn run_headless(app: &mut AppState, frames: impl IntoIterator<Item = LandmarkFrame>) -> usize {
    let mut count = 0;
    for frame in frames {
        app.handle_frame(&frame);
        app.render();
        count += 1;
    }
    count
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
