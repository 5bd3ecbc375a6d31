//! The stroke log: an append-only sequence of pen samples with a replay
//! cursor.
//!
//! Adjacent `Point`s are joined by a segment; a `Break` (or either end of the
//! log) keeps its neighbours apart.  The renderer can either walk the whole
//! log with [`StrokeLog::segments`] or pick up where it left off with
//! [`StrokeLog::replay`].

use hand_gesture::PixelPoint;

use crate::sample::{PenSample, Rgb};

/// A connecting line between two consecutive points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from:  PixelPoint,
    pub to:    PixelPoint,
    /// Color of the earlier point.
    pub color: Rgb,
}

/// Ordered pen samples for one hand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StrokeLog {
    samples: Vec<PenSample>,
    /// Index of the first sample not yet fully replayed.
    cursor:  usize,
}

impl StrokeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: PenSample) {
        self.samples.push(sample);
    }

    pub fn push_point(&mut self, color: Rgb, position: PixelPoint) {
        self.push(PenSample::point(color, position));
    }

    pub fn push_break(&mut self) {
        self.push(PenSample::Break);
    }

    /// Drop every sample and rewind the replay cursor.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.cursor = 0;
    }

    pub fn samples(&self) -> &[PenSample] { &self.samples }
    pub fn len(&self)      -> usize       { self.samples.len() }
    pub fn is_empty(&self) -> bool        { self.samples.is_empty() }
    pub fn cursor(&self)   -> usize       { self.cursor }
    pub fn last(&self)     -> Option<&PenSample> { self.samples.last() }

    /// Most recent `Point`'s position, if the log ends in one.
    pub fn last_position(&self) -> Option<PixelPoint> {
        self.last().and_then(PenSample::position)
    }

    /// True when the log is empty or already ends in a break.
    pub fn ends_in_break(&self) -> bool {
        self.last().map_or(true, PenSample::is_break)
    }

    /// Every segment in the log, oldest first.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        segments_of(&self.samples)
    }

    /// Segments added since the previous call, oldest first.
    ///
    /// The cursor stops on the last sample rather than past it, so a point
    /// appended later still connects to it.
    pub fn replay(&mut self) -> Vec<Segment> {
        let start = self.cursor.min(self.samples.len());
        let fresh: Vec<Segment> = segments_of(&self.samples[start..]).collect();
        self.cursor = self.samples.len().saturating_sub(1);
        fresh
    }
}

fn segments_of(samples: &[PenSample]) -> impl Iterator<Item = Segment> + '_ {
    samples.windows(2).filter_map(|pair| match (pair[0], pair[1]) {
        (PenSample::Point { color, position: from }, PenSample::Point { position: to, .. }) => {
            Some(Segment { from, to, color })
        }
        _ => None,
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
