//! Gesture classification by fingertip height above the wrist.
//!
//! For each finger the classifier looks at one number, the *offset*
//! `wrist.y − tip.y` in capture pixels (positive when the tip is above the
//! wrist).  Checks run in a fixed order and the first match wins:
//!
//! | Order | Gesture | Condition |
//! |---|---|---|
//! | 1 | `closed` | index, middle, ring, pinky `< close`; thumb `< close + 20` |
//! | 2 | `open` | index, middle, ring, pinky `> open`; thumb `> open − 40` |
//! | 3 | `one-finger` | pinky, ring, thumb, middle `< close` |
//! | 3 | `two-finger` | pinky, ring, thumb `< close`; middle `>= close` |
//! | 4 | `none` | anything else |
//!
//! With the defaults (`close = 85`, `open = 80`) an offset between 80 and 85
//! satisfies neither strict comparison on its own, which keeps a hand
//! hovering on the boundary from flickering between open and closed.

use std::fmt;

use crate::landmark::{Finger, PixelHand};

// ════════════════════════════════════════════════════════════════════════════
// Thresholds
// ════════════════════════════════════════════════════════════════════════════

/// Fingertip offset (px) below which a finger counts as folded.
pub const CLOSE_THRESHOLD: i32 = 85;
/// Fingertip offset (px) above which a finger counts as extended.
pub const OPEN_THRESHOLD:  i32 = 80;
/// Extra room the thumb gets when testing for a fist.
pub const THUMB_CLOSE_SLACK: i32 = 20;
/// Room the thumb gets when testing for an open palm.
pub const THUMB_OPEN_SLACK:  i32 = 40;

/// The two classifier thresholds, in capture pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    pub close: i32,
    pub open:  i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds { close: CLOSE_THRESHOLD, open: OPEN_THRESHOLD }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Gesture
// ════════════════════════════════════════════════════════════════════════════

/// Discrete pose of one hand for the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Fist.  Clears the drawing when shown by the primary hand.
    Closed,
    /// All fingers up.  Pen up.
    Open,
    /// Index finger only.  Pen down.
    OneFinger,
    /// Index and middle.  Freezes color sampling; with both hands, exports.
    TwoFinger,
    /// No confident reading this frame.
    Ambiguous,
}

impl Gesture {
    pub fn as_str(self) -> &'static str {
        match self {
            Gesture::Closed    => "closed",
            Gesture::Open      => "open",
            Gesture::OneFinger => "one-finger",
            Gesture::TwoFinger => "two-finger",
            Gesture::Ambiguous => "none",
        }
    }

    /// True for the only pose that lays down ink.
    pub fn is_drawing(self) -> bool {
        self == Gesture::OneFinger
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// FingerOffsets
// ════════════════════════════════════════════════════════════════════════════

/// `wrist.y − tip.y` for each finger, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerOffsets {
    pub thumb:  i32,
    pub index:  i32,
    pub middle: i32,
    pub ring:   i32,
    pub pinky:  i32,
}

impl FingerOffsets {
    pub fn from_hand(hand: &PixelHand) -> Self {
        let wrist = hand.wrist().y;
        let off = |f: Finger| wrist.saturating_sub(hand.fingertip(f).y);
        FingerOffsets {
            thumb:  off(Finger::Thumb),
            index:  off(Finger::Index),
            middle: off(Finger::Middle),
            ring:   off(Finger::Ring),
            pinky:  off(Finger::Pinky),
        }
    }

    /// The four non-thumb offsets.
    fn fingers(&self) -> [i32; 4] {
        [self.index, self.middle, self.ring, self.pinky]
    }
}

// ════════════════════════════════════════════════════════════════════════════
// classify
// ════════════════════════════════════════════════════════════════════════════

/// Classify one projected hand.
pub fn classify(hand: &PixelHand, thresholds: &Thresholds) -> Gesture {
    classify_offsets(&FingerOffsets::from_hand(hand), thresholds)
}

/// Classify from precomputed offsets.  The order of the checks is part of
/// the contract; see the module docs.
pub fn classify_offsets(o: &FingerOffsets, t: &Thresholds) -> Gesture {
    let folded = |v: i32| v < t.close;

    if o.fingers().iter().all(|&v| folded(v)) && o.thumb < t.close + THUMB_CLOSE_SLACK {
        return Gesture::Closed;
    }

    if o.fingers().iter().all(|&v| v > t.open) && o.thumb > t.open - THUMB_OPEN_SLACK {
        return Gesture::Open;
    }

    if folded(o.pinky) && folded(o.ring) && folded(o.thumb) {
        return if folded(o.middle) { Gesture::OneFinger } else { Gesture::TwoFinger };
    }

    Gesture::Ambiguous
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
