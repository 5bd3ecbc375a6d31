//! Property tests for stroke-log replay.

use hand_gesture::PixelPoint;
use proptest::prelude::*;
use stroke_log::{PenSample, Rgb, Segment, StrokeLog};

#[derive(Debug, Clone)]
enum Op {
    Point(i32, i32, u8),
    Break,
    Clear,
    Replay,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0i32..1280, 0i32..720, any::<u8>()).prop_map(|(x, y, c)| Op::Point(x, y, c)),
        2 => Just(Op::Break),
        1 => Just(Op::Clear),
        3 => Just(Op::Replay),
    ]
}

proptest! {
    /// Everything replayed since the last clear, plus one final replay,
    /// is exactly the full segment list.
    #[test]
    fn incremental_replay_matches_full_walk(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut log = StrokeLog::new();
        let mut replayed: Vec<Segment> = Vec::new();

        for op in &ops {
            match *op {
                Op::Point(x, y, c) => log.push_point(Rgb::new(c, c, c), PixelPoint::new(x, y, 0)),
                Op::Break => log.push_break(),
                Op::Clear => { log.clear(); replayed.clear(); }
                Op::Replay => replayed.extend(log.replay()),
            }
            prop_assert!(log.cursor() <= log.len());
        }
        replayed.extend(log.replay());

        let full: Vec<Segment> = log.segments().collect();
        prop_assert_eq!(replayed, full);
    }

    /// A segment exists for every adjacent pair of points and nothing else.
    #[test]
    fn segments_count_adjacent_points(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut log = StrokeLog::new();
        for op in &ops {
            match *op {
                Op::Point(x, y, c) => log.push_point(Rgb::new(c, 0, 0), PixelPoint::new(x, y, 0)),
                Op::Break => log.push_break(),
                Op::Clear => log.clear(),
                Op::Replay => {}
            }
        }
        let expected = log.samples().windows(2)
            .filter(|w| !w[0].is_break() && !w[1].is_break())
            .count();
        prop_assert_eq!(log.segments().count(), expected);

        for seg in log.segments() {
            let from_sample = log.samples().iter()
                .any(|s| *s == PenSample::point(seg.color, seg.from));
            prop_assert!(from_sample);
        }
    }
}
