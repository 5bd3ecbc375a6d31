//! Property tests for the fingertip-offset classifier.

use hand_gesture::landmark::{PixelHand, PixelPoint, LANDMARK_COUNT, WRIST};
use hand_gesture::{classify, classify_offsets, Finger, FingerOffsets, Gesture, Thresholds};
use proptest::prelude::*;

const CLOSE: i32 = 85;
const OPEN:  i32 = 80;

/// Build a hand whose wrist sits at `wrist_y` and whose tips sit `offset`
/// pixels above it.
fn hand_with_offsets(wrist_y: i32, o: &FingerOffsets) -> PixelHand {
    let mut points = [PixelPoint::new(640, wrist_y, 0); LANDMARK_COUNT];
    points[WRIST] = PixelPoint::new(640, wrist_y, 0);
    let pairs = [
        (Finger::Thumb, o.thumb),
        (Finger::Index, o.index),
        (Finger::Middle, o.middle),
        (Finger::Ring, o.ring),
        (Finger::Pinky, o.pinky),
    ];
    for (f, off) in pairs {
        points[f.tip()] = PixelPoint::new(600 + 20 * f.tip() as i32, wrist_y - off, 0);
    }
    PixelHand { points }
}

fn extended() -> impl Strategy<Value = i32> { (OPEN + 1)..400 }
fn folded() -> impl Strategy<Value = i32> { -200..CLOSE }

proptest! {
    #[test]
    fn all_extended_is_open(
        index in extended(), middle in extended(), ring in extended(), pinky in extended(),
        thumb in (OPEN - 39)..400,
    ) {
        let o = FingerOffsets { thumb, index, middle, ring, pinky };
        // Closed needs every finger under 85; at least one finger is above
        // 85 unless they all sit in 81..85, where closed wins by order.
        let expected = if [index, middle, ring, pinky].iter().all(|&v| v < CLOSE)
            && thumb < CLOSE + 20
        {
            Gesture::Closed
        } else {
            Gesture::Open
        };
        prop_assert_eq!(classify_offsets(&o, &Thresholds::default()), expected);
    }

    #[test]
    fn all_folded_is_closed(
        index in folded(), middle in folded(), ring in folded(), pinky in folded(),
        thumb in -200..(CLOSE + 20),
    ) {
        let o = FingerOffsets { thumb, index, middle, ring, pinky };
        prop_assert_eq!(classify_offsets(&o, &Thresholds::default()), Gesture::Closed);
    }

    #[test]
    fn closed_wins_over_open_shape(v in (OPEN + 1)..CLOSE, thumb in (OPEN - 39)..(CLOSE + 20)) {
        let o = FingerOffsets { thumb, index: v, middle: v, ring: v, pinky: v };
        prop_assert_eq!(classify_offsets(&o, &Thresholds::default()), Gesture::Closed);
    }

    // Index clear of the closed band, ring and pinky clear of the open band.
    #[test]
    fn pointing_is_one_or_two_finger(
        index in CLOSE..400, middle in -200..400,
        ring in -200..=OPEN, pinky in -200..=OPEN, thumb in folded(),
    ) {
        let o = FingerOffsets { thumb, index, middle, ring, pinky };
        let expected = if middle < CLOSE { Gesture::OneFinger } else { Gesture::TwoFinger };
        prop_assert_eq!(classify_offsets(&o, &Thresholds::default()), expected);
    }

    #[test]
    fn classification_ignores_wrist_height(
        wrist_y in 200..700,
        thumb in -200..400, index in -200..400, middle in -200..400,
        ring in -200..400, pinky in -200..400,
    ) {
        let o = FingerOffsets { thumb, index, middle, ring, pinky };
        let hand = hand_with_offsets(wrist_y, &o);
        prop_assert_eq!(FingerOffsets::from_hand(&hand), o);
        prop_assert_eq!(
            classify(&hand, &Thresholds::default()),
            classify_offsets(&o, &Thresholds::default()),
        );
    }
}
