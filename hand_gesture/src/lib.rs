//! # hand_gesture
//!
//! Per-frame hand pose reading for gesture-driven drawing.
//!
//! * [`landmark`] — the 21-point hand model and its projection to capture pixels
//! * [`classify`] — threshold classifier turning one hand into a [`Gesture`]
//! * [`wire`] — JSON-lines frames exchanged with the out-of-process estimator
//!
//! ## Quick start
//!
//! ```rust
//! use hand_gesture::{classify, wire, CaptureSize, Gesture, Thresholds};
//!
//! let frame = r#"{"hands":[]}"#;
//! let size  = CaptureSize::new(1280, 720);
//! let labels: Vec<Gesture> = wire::read_frame_lenient(frame)
//!     .iter()
//!     .map(|h| classify(&h.to_pixels(size), &Thresholds::default()))
//!     .collect();
//! assert!(labels.is_empty());
//! ```

pub mod classify;
pub mod error;
pub mod landmark;
pub mod wire;

pub use classify::{
    classify, classify_offsets, FingerOffsets, Gesture, Thresholds,
    CLOSE_THRESHOLD, OPEN_THRESHOLD,
};
pub use error::LandmarkError;
pub use landmark::{
    CaptureSize, Finger, HandLandmarks, Landmark, PixelHand, PixelPoint,
    HAND_CONNECTIONS, LANDMARK_COUNT,
};
