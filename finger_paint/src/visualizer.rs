//! The canvas window, using `minifb`.
//!
//! The window shows whatever [`Canvas`] it is handed and, in simulation
//! mode, turns mouse and keyboard state into a [`SimControls`] snapshot
//! once per frame.

use std::sync::mpsc::Sender;

use anyhow::Context;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use hand_gesture::{CaptureSize, Gesture};
use tracing::{debug, warn};

use crate::canvas::Canvas;
use crate::source::{SimControls, SimInput};

/// Pixels the secondary hand moves per frame while an arrow key is held.
const NUDGE: i32 = 8;

// ════════════════════════════════════════════════════════════════════════════
// Visualizer
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window:    Window,
    size:      CaptureSize,
    /// `None` when frames come from a recording.
    sim_tx:    Option<Sender<SimInput>>,
    controls:  SimControls,
    /// Secondary fingertip, kept while the hand is hidden.
    secondary: (i32, i32),
    show_secondary: bool,
}

impl Visualizer {
    pub fn new(size: CaptureSize, fps: u32, sim_tx: Option<Sender<SimInput>>) -> anyhow::Result<Self> {
        let mut window = Window::new(
            "Finger Paint  (q to quit)",
            size.width as usize,
            size.height as usize,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        ).context("opening canvas window")?;

        window.set_target_fps(fps.max(1) as usize);

        Ok(Visualizer {
            window,
            size,
            sim_tx,
            controls:  SimControls::default(),
            secondary: (size.width as i32 / 4, size.height as i32 / 2),
            show_secondary: false,
        })
    }

    pub fn is_open(&self) -> bool { self.window.is_open() }

    /// Poll input and, when simulating, forward this frame's hands.
    /// Returns false when the user asked to quit.
    pub fn poll_input(&mut self) -> bool {
        if !self.window.is_open() { return false; }

        if self.window.is_key_down(Key::Q) || self.window.is_key_down(Key::Escape) {
            if let Some(tx) = &self.sim_tx {
                let _ = tx.send(SimInput::Quit);
            }
            return false;
        }

        let Some(tx) = &self.sim_tx else { return true };

        // ── toggles ───────────────────────────────────────────────────────
        let pressed = |k: Key| self.window.is_key_pressed(k, KeyRepeat::No);
        if pressed(Key::H) {
            self.controls.tracking = !self.controls.tracking;
            debug!(tracking = self.controls.tracking, "tracking toggled");
        }
        if pressed(Key::Tab) {
            self.show_secondary = !self.show_secondary;
        }

        // ── held keys ─────────────────────────────────────────────────────
        let down = |k: Key| self.window.is_key_down(k);
        let export = down(Key::E);

        let (dx, dy) = (
            down(Key::Right) as i32 - down(Key::Left) as i32,
            down(Key::Down)  as i32 - down(Key::Up)   as i32,
        );
        self.secondary = (
            (self.secondary.0 + dx * NUDGE).clamp(0, self.size.width as i32 - 1),
            (self.secondary.1 + dy * NUDGE).clamp(0, self.size.height as i32 - 1),
        );

        self.controls.primary = if down(Key::C) {
            Gesture::Closed
        } else if export || down(Key::V) {
            Gesture::TwoFinger
        } else if self.window.get_mouse_down(MouseButton::Left) {
            Gesture::OneFinger
        } else {
            Gesture::Open
        };

        let secondary_gesture = if export || down(Key::X) { Gesture::TwoFinger } else { Gesture::Open };
        self.controls.secondary = (self.show_secondary || export)
            .then_some((self.secondary, secondary_gesture));

        if let Some((mx, my)) = self.window.get_mouse_pos(MouseMode::Clamp) {
            self.controls.pointer = (mx as i32, my as i32);
        }

        tx.send(SimInput::Controls(self.controls)).is_ok()
    }

    /// Put a finished frame on screen.
    pub fn present(&mut self, canvas: &Canvas) {
        if let Err(e) = self.window.update_with_buffer(canvas.pixels(), canvas.width(), canvas.height()) {
            warn!("window update failed: {e}");
        }
    }
}
