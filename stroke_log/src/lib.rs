//! # stroke_log
//!
//! Turns per-frame hand gestures into a persistent finger-painted drawing.
//!
//! | Module | Role |
//! |---|---|
//! | [`sample`] | `Rgb` colors and `PenSample` (a point or a pen-up break) |
//! | [`log`] | `StrokeLog`: appendable, clearable samples with a replay cursor |
//! | [`sampling`] | reading the active color off the captured frame |
//! | [`state`] | `DrawingState`: the per-frame update driven by gesture labels |
//!
//! ## Gesture → Action mapping
//!
//! | Gesture | Hand | Action |
//! |---|---|---|
//! | one-finger | primary | append a point at the index tip |
//! | anything else | primary | append a break (pen up) |
//! | closed | primary | clear the drawing |
//! | not two-finger | secondary | record the index tip for color sampling |
//! | two-finger + two-finger | both | export the canvas |

pub mod log;
pub mod sample;
pub mod sampling;
pub mod state;

pub use log::{Segment, StrokeLog};
pub use sample::{PenSample, Rgb};
pub use sampling::{sample_color, selection_rect, PixelSource, SampleRegion, SelectionRect};
pub use state::{track_hands, DrawingState, FrameOutcome, TrackedHand, TrackingLossPolicy};
