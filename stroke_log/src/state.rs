//! Per-frame drawing state machine.
//!
//! `DrawingState` owns everything that persists between frames: the primary
//! stroke log, the secondary hand's sample log and the active color.  Each
//! frame runs, in this order:
//!
//! 1. [`DrawingState::update`] with the frame's classified hands,
//! 2. [`DrawingState::sample_color`] against the frame as captured,
//! 3. rendering, which reads the logs.
//!
//! A color picked in step 2 therefore only affects points appended on later
//! frames.
//!
//! ## Hand roles
//!
//! | Hands | Primary (draws) | Secondary (picks color) |
//! |---|---|---|
//! | 0 | — | — |
//! | 1 | `hands[0]` | — |
//! | 2 | `hands[1]` | `hands[0]` |
//!
//! Roles follow list position only.  Handedness is never consulted and there
//! is no identity tracking across frames.

use hand_gesture::{classify, CaptureSize, Gesture, HandLandmarks, PixelHand, PixelPoint, Thresholds};
use tracing::{debug, info, trace};

use crate::log::{Segment, StrokeLog};
use crate::sample::Rgb;
use crate::sampling::{sample_color, PixelSource};

// ════════════════════════════════════════════════════════════════════════════
// TrackedHand
// ════════════════════════════════════════════════════════════════════════════

/// One hand for the current frame, projected and classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackedHand {
    pub pixels:  PixelHand,
    pub gesture: Gesture,
}

impl TrackedHand {
    pub fn new(pixels: PixelHand, thresholds: &Thresholds) -> Self {
        TrackedHand { pixels, gesture: classify(&pixels, thresholds) }
    }

    pub fn index_tip(&self) -> PixelPoint {
        self.pixels.index_tip()
    }
}

/// Project and classify every hand of a frame, keeping list order.
pub fn track_hands(
    hands: &[HandLandmarks],
    size: CaptureSize,
    thresholds: &Thresholds,
) -> Vec<TrackedHand> {
    hands.iter()
        .map(|h| TrackedHand::new(h.to_pixels(size), thresholds))
        .collect()
}

// ════════════════════════════════════════════════════════════════════════════
// TrackingLossPolicy
// ════════════════════════════════════════════════════════════════════════════

/// What happens to an open stroke when every hand drops out of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrackingLossPolicy {
    /// Leave the log alone: the next point joins the last one drawn, however
    /// far the hand moved while it was out of view.
    #[default]
    Reconnect,
    /// End the stroke with a `Break` as soon as the hand count hits zero.
    Break,
}

// ════════════════════════════════════════════════════════════════════════════
// FrameOutcome
// ════════════════════════════════════════════════════════════════════════════

/// What one call to [`DrawingState::update`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Hands seen this frame.
    pub hands:     usize,
    pub primary:   Option<Gesture>,
    pub secondary: Option<Gesture>,
    /// Both hands showed two fingers: snapshot the canvas now.
    pub export:    bool,
    /// The stroke log was emptied; anything already drawn from it is stale.
    pub cleared:   bool,
}

// ════════════════════════════════════════════════════════════════════════════
// DrawingState
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug)]
pub struct DrawingState {
    strokes:      StrokeLog,
    secondary:    StrokeLog,
    active_color: Rgb,
    thresholds:   Thresholds,
    loss_policy:  TrackingLossPolicy,
    /// Hand count of the previous frame, for loss detection.
    last_hands:   usize,
}

impl Default for DrawingState {
    fn default() -> Self {
        DrawingState::new(Thresholds::default(), TrackingLossPolicy::default())
    }
}

impl DrawingState {
    pub fn new(thresholds: Thresholds, loss_policy: TrackingLossPolicy) -> Self {
        DrawingState {
            strokes:      StrokeLog::new(),
            secondary:    StrokeLog::new(),
            active_color: Rgb::BLACK,
            thresholds,
            loss_policy,
            last_hands:   0,
        }
    }

    /// Start from a color other than black.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.active_color = color;
        self
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn strokes(&self)      -> &StrokeLog          { &self.strokes }
    pub fn secondary(&self)    -> &StrokeLog          { &self.secondary }
    pub fn active_color(&self) -> Rgb                 { self.active_color }
    pub fn thresholds(&self)   -> &Thresholds         { &self.thresholds }

    /// Position the next color sample is taken from.
    pub fn sample_point(&self) -> Option<PixelPoint> {
        self.secondary.last_position()
    }

    // ── per-frame update ──────────────────────────────────────────────────

    /// Project, classify and apply one frame of raw landmarks.
    pub fn step(&mut self, hands: &[HandLandmarks], size: CaptureSize) -> FrameOutcome {
        let tracked = track_hands(hands, size, &self.thresholds);
        self.update(&tracked)
    }

    /// Apply one frame of classified hands to the logs.
    pub fn update(&mut self, hands: &[TrackedHand]) -> FrameOutcome {
        let mut out = FrameOutcome { hands: hands.len(), ..FrameOutcome::default() };

        match hands {
            [] => self.on_no_hands(),

            [primary] => {
                out.primary = Some(primary.gesture);
                out.cleared = self.apply_primary(primary);
            }

            [secondary, primary] => {
                out.primary   = Some(primary.gesture);
                out.secondary = Some(secondary.gesture);

                self.pen_step(primary);

                // Only the latest sample is ever read, so the log holds one.
                if secondary.gesture != Gesture::TwoFinger {
                    self.secondary.clear();
                    self.secondary.push_point(self.active_color, secondary.index_tip());
                }

                if secondary.gesture == Gesture::TwoFinger && primary.gesture == Gesture::TwoFinger {
                    info!("export requested");
                    out.export = true;
                }

                out.cleared = self.clear_on_fist(primary);
            }

            // The estimator tracks at most two hands; anything else is noise.
            _ => debug!(hands = hands.len(), "ignoring frame with too many hands"),
        }

        trace!(
            hands = out.hands,
            primary = ?out.primary,
            secondary = ?out.secondary,
            strokes = self.strokes.len(),
            "frame applied"
        );

        self.last_hands = hands.len();
        out
    }

    /// Sample the active color from the frame as captured, before any
    /// drawing is composited onto it.  Runs every frame while the secondary
    /// log has an entry; an empty sample window keeps the current color.
    pub fn sample_color<S: PixelSource + ?Sized>(&mut self, frame: &S) -> Option<Rgb> {
        let tip = self.sample_point()?;
        let color = sample_color(frame, tip)?;
        if color != self.active_color {
            debug!(r = color.r, g = color.g, b = color.b, "active color changed");
        }
        self.active_color = color;
        Some(color)
    }

    /// Stroke segments not yet handed to the renderer.
    pub fn replay_strokes(&mut self) -> Vec<Segment> {
        self.strokes.replay()
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn apply_primary(&mut self, hand: &TrackedHand) -> bool {
        self.pen_step(hand);
        self.clear_on_fist(hand)
    }

    /// Pen down on one finger, pen up on anything else.
    fn pen_step(&mut self, hand: &TrackedHand) {
        if hand.gesture.is_drawing() {
            self.strokes.push_point(self.active_color, hand.index_tip());
        } else {
            self.strokes.push_break();
        }
    }

    /// Runs after the pen step, so a fist always leaves the log empty.
    fn clear_on_fist(&mut self, hand: &TrackedHand) -> bool {
        if hand.gesture != Gesture::Closed {
            return false;
        }
        if !self.strokes.is_empty() {
            info!(samples = self.strokes.len(), "drawing cleared");
        }
        self.strokes.clear();
        true
    }

    fn on_no_hands(&mut self) {
        if self.last_hands == 0 {
            return;
        }
        debug!("tracking lost");
        if self.loss_policy == TrackingLossPolicy::Break && !self.strokes.ends_in_break() {
            self.strokes.push_break();
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
