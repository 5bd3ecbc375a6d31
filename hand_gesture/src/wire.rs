//! JSON-lines landmark frames.
//!
//! The estimator runs out of process and reports one JSON object per
//! captured frame:
//!
//! ```text
//! {"hands":[{"handedness":"Left","score":0.93,"landmarks":[{"x":0.41,"y":0.72,"z":-0.02}, …21]}]}
//! ```
//!
//! An optional `"error"` string marks a frame the estimator gave up on.
//! Hand order is passed through untouched: position in the list decides the
//! hand's role downstream.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{LandmarkError, Result};
use crate::landmark::{HandLandmarks, Landmark, LANDMARK_COUNT};

/// Most hands a frame may carry.
pub const MAX_HANDS: usize = 2;

#[derive(Serialize, Deserialize, Debug)]
struct HandJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    handedness: Option<String>,
    #[serde(default = "full_score")]
    score:      f32,
    landmarks:  Vec<Landmark>,
}

fn full_score() -> f32 { 1.0 }

#[derive(Serialize, Deserialize, Debug)]
struct FrameJson {
    #[serde(default)]
    hands: Vec<HandJson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Parse one frame, rejecting anything that isn't 0–2 complete hands.
pub fn parse_frame(line: &str) -> Result<Vec<HandLandmarks>> {
    let frame: FrameJson = serde_json::from_str(line)?;

    if let Some(e) = frame.error {
        return Err(LandmarkError::Estimator(e));
    }
    if frame.hands.len() > MAX_HANDS {
        return Err(LandmarkError::TooManyHands(frame.hands.len()));
    }

    frame.hands
        .into_iter()
        .enumerate()
        .map(|(hand, h)| {
            let found = h.landmarks.len();
            let landmarks: [Landmark; LANDMARK_COUNT] = h.landmarks.try_into()
                .map_err(|_| LandmarkError::WrongCount {
                    hand,
                    expected: LANDMARK_COUNT,
                    found,
                })?;
            if let Some(index) = landmarks.iter().position(|lm| !lm.is_finite()) {
                return Err(LandmarkError::NonFinite { hand, index });
            }
            Ok(HandLandmarks { landmarks, handedness: h.handedness, score: h.score })
        })
        .collect()
}

/// Parse one frame; a frame that fails to parse counts as zero hands.
pub fn read_frame_lenient(line: &str) -> Vec<HandLandmarks> {
    match parse_frame(line) {
        Ok(hands) => hands,
        Err(e) => {
            warn!("dropping landmark frame: {e}");
            Vec::new()
        }
    }
}

/// Serialise one frame as a single JSON line (no trailing newline).
pub fn encode_frame(hands: &[HandLandmarks]) -> String {
    let frame = FrameJson {
        hands: hands.iter()
            .map(|h| HandJson {
                handedness: h.handedness.clone(),
                score:      h.score,
                landmarks:  h.landmarks.to_vec(),
            })
            .collect(),
        error: None,
    };
    // Only f32s and strings; serialisation can't fail short of NaN, which
    // serde_json writes as null.
    serde_json::to_string(&frame).unwrap_or_else(|_| r#"{"hands":[]}"#.to_string())
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
