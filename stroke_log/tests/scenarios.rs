//! End-to-end frame sequences through `DrawingState`.

use hand_gesture::{Gesture, PixelHand, PixelPoint, LANDMARK_COUNT};
use stroke_log::{DrawingState, PenSample, Rgb, Segment, TrackedHand};

fn hand(gesture: Gesture, x: i32, y: i32) -> TrackedHand {
    TrackedHand {
        pixels: PixelHand { points: [PixelPoint::new(x, y, 0); LANDMARK_COUNT] },
        gesture,
    }
}

fn kinds(state: &DrawingState) -> String {
    state.strokes().samples().iter()
        .map(|s| if s.is_break() { 'B' } else { 'P' })
        .collect()
}

#[test]
fn lifting_the_finger_splits_the_stroke() {
    let mut s = DrawingState::default();
    s.update(&[hand(Gesture::OneFinger, 10, 10)]);
    s.update(&[hand(Gesture::OneFinger, 20, 10)]);
    s.update(&[hand(Gesture::Open, 30, 10)]);
    s.update(&[hand(Gesture::OneFinger, 40, 10)]);

    assert_eq!(kinds(&s), "PPBP");
    let segs: Vec<Segment> = s.strokes().segments().collect();
    assert_eq!(
        segs,
        vec![Segment {
            from:  PixelPoint::new(10, 10, 0),
            to:    PixelPoint::new(20, 10, 0),
            color: Rgb::BLACK,
        }],
    );
}

#[test]
fn fist_after_drawing_empties_the_log() {
    let mut s = DrawingState::default();
    s.update(&[hand(Gesture::OneFinger, 10, 10)]);
    s.update(&[hand(Gesture::OneFinger, 20, 10)]);
    let out = s.update(&[hand(Gesture::Closed, 20, 10)]);
    assert!(out.cleared);
    assert!(s.strokes().is_empty());
    assert_eq!(s.strokes().cursor(), 0);
}

#[test]
fn clearing_twice_matches_clearing_once() {
    let mut s = DrawingState::default();
    s.update(&[hand(Gesture::OneFinger, 10, 10)]);
    s.update(&[hand(Gesture::Closed, 10, 10)]);
    let once = s.strokes().clone();
    s.update(&[hand(Gesture::Closed, 10, 10)]);
    assert_eq!(s.strokes(), &once);
}

#[test]
fn second_hand_in_list_draws() {
    let mut s = DrawingState::default();
    // Position 0 points, position 1 is open: nothing is drawn.
    s.update(&[hand(Gesture::OneFinger, 10, 10), hand(Gesture::Open, 500, 500)]);
    assert_eq!(kinds(&s), "B");
    assert_eq!(s.secondary().last_position(), Some(PixelPoint::new(10, 10, 0)));

    // Swap poses: position 1 now draws at its own index tip.
    s.update(&[hand(Gesture::Open, 10, 10), hand(Gesture::OneFinger, 500, 500)]);
    assert_eq!(s.strokes().last_position(), Some(PixelPoint::new(500, 500, 0)));
}

#[test]
fn closed_secondary_does_not_clear() {
    let mut s = DrawingState::default();
    s.update(&[hand(Gesture::Open, 10, 10), hand(Gesture::OneFinger, 100, 100)]);
    let out = s.update(&[hand(Gesture::Closed, 10, 10), hand(Gesture::OneFinger, 110, 100)]);
    assert!(!out.cleared);
    assert_eq!(s.strokes().segments().count(), 1);
}

#[test]
fn closed_primary_clears_with_two_hands() {
    let mut s = DrawingState::default();
    s.update(&[hand(Gesture::Open, 10, 10), hand(Gesture::OneFinger, 100, 100)]);
    let out = s.update(&[hand(Gesture::Open, 10, 10), hand(Gesture::Closed, 100, 100)]);
    assert!(out.cleared);
    assert!(s.strokes().is_empty());
    // The secondary log is not part of the drawing.
    assert!(!s.secondary().is_empty());
    assert_eq!(s.sample_point(), Some(PixelPoint::new(10, 10, 0)));
}

#[test]
fn export_fires_once_when_both_hands_show_two() {
    let mut s = DrawingState::default();
    let frames = [
        [hand(Gesture::TwoFinger, 10, 10), hand(Gesture::OneFinger, 100, 100)],
        [hand(Gesture::TwoFinger, 10, 10), hand(Gesture::Open, 100, 100)],
        [hand(Gesture::TwoFinger, 10, 10), hand(Gesture::TwoFinger, 100, 100)],
    ];
    let exports: Vec<bool> = frames.iter().map(|f| s.update(f).export).collect();
    assert_eq!(exports, vec![false, false, true]);
    // Two fingers on the secondary never record a sample point.
    assert!(s.secondary().is_empty());
}

#[test]
fn replay_cursor_never_replays_cleared_ink() {
    let mut s = DrawingState::default();
    for x in 0..4 {
        s.update(&[hand(Gesture::OneFinger, x * 10, 0)]);
    }
    let mut log = s.strokes().clone();
    assert_eq!(log.replay().len(), 3);

    s.update(&[hand(Gesture::Closed, 0, 0)]);
    s.update(&[hand(Gesture::OneFinger, 300, 300)]);
    s.update(&[hand(Gesture::OneFinger, 310, 300)]);
    let mut log = s.strokes().clone();
    // Leading break from the fist frame is gone; only the new stroke remains.
    assert_eq!(log.samples()[0], PenSample::point(Rgb::BLACK, PixelPoint::new(300, 300, 0)));
    assert_eq!(log.replay().len(), 1);
}
