//! Color sampling from the captured frame.
//!
//! The secondary hand picks a color by pointing at it.  The window read is a
//! short strip just above and around the fingertip; the color taken is the
//! strip's top-left pixel.  Both edges are clamped away from the frame's top
//! and left border, and the far edges are clipped to the frame, so a
//! fingertip anywhere, even off-frame, never reads out of bounds.

use hand_gesture::PixelPoint;

use crate::sample::Rgb;

/// Rows above the fingertip included in the sample window.
pub const SAMPLE_ROWS_ABOVE: i32 = 15;
/// Columns either side of the fingertip.
pub const SAMPLE_HALF_WIDTH: i32 = 5;
/// Smallest row a window may start on.
pub const MIN_SAMPLE_ROW: i32 = 15;
/// Smallest column a window may start on.
pub const MIN_SAMPLE_COL: i32 = 1;

/// Read access to a frame's pixels.
pub trait PixelSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// `x < width()`, `y < height()`.
    fn pixel(&self, x: usize, y: usize) -> Rgb;
}

/// Half-open pixel window `[x0, x1) × [y0, y1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleRegion {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl SampleRegion {
    /// The window anchored at `tip`, or `None` when nothing of it lies inside
    /// a `width × height` frame.
    pub fn around(tip: PixelPoint, width: usize, height: usize) -> Option<Self> {
        let clip = |v: i32, max: usize| v.clamp(0, max as i32) as usize;

        let y0 = clip(tip.y.saturating_sub(SAMPLE_ROWS_ABOVE).max(MIN_SAMPLE_ROW), height);
        let y1 = clip(tip.y, height);
        let x0 = clip(tip.x.saturating_sub(SAMPLE_HALF_WIDTH).max(MIN_SAMPLE_COL), width);
        let x1 = clip(tip.x.saturating_add(SAMPLE_HALF_WIDTH), width);

        (y0 < y1 && x0 < x1).then_some(SampleRegion { x0, y0, x1, y1 })
    }

    pub fn width(&self)  -> usize { self.x1 - self.x0 }
    pub fn height(&self) -> usize { self.y1 - self.y0 }
}

/// The color under the secondary fingertip, or `None` if the window is empty.
pub fn sample_color<S: PixelSource + ?Sized>(frame: &S, tip: PixelPoint) -> Option<Rgb> {
    SampleRegion::around(tip, frame.width(), frame.height())
        .map(|r| frame.pixel(r.x0, r.y0))
}

/// Corners of the on-screen marker drawn around the sample point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRect {
    pub left:   i32,
    pub top:    i32,
    pub right:  i32,
    pub bottom: i32,
}

pub fn selection_rect(tip: PixelPoint) -> SelectionRect {
    SelectionRect {
        left:   tip.x.saturating_sub(10).max(1),
        top:    tip.y.saturating_sub(10).max(10),
        right:  tip.x.saturating_add(5),
        bottom: tip.y,
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Each pixel encodes its own coordinates.
    struct Coords { w: usize, h: usize }

    impl PixelSource for Coords {
        fn width(&self)  -> usize { self.w }
        fn height(&self) -> usize { self.h }
        fn pixel(&self, x: usize, y: usize) -> Rgb {
            assert!(x < self.w && y < self.h, "read outside frame: ({x}, {y})");
            Rgb::new(x as u8, y as u8, 7)
        }
    }

    fn p(x: i32, y: i32) -> PixelPoint { PixelPoint::new(x, y, 0) }

    #[test]
    fn window_sits_above_fingertip() {
        let r = SampleRegion::around(p(100, 100), 200, 200).unwrap();
        assert_eq!(r, SampleRegion { x0: 95, y0: 85, x1: 105, y1: 100 });
        assert_eq!((r.width(), r.height()), (10, 15));
    }

    #[test]
    fn samples_top_left_of_window() {
        let frame = Coords { w: 200, h: 200 };
        assert_eq!(sample_color(&frame, p(100, 100)), Some(Rgb::new(95, 85, 7)));
    }

    #[test]
    fn negative_corner_is_clamped() {
        let frame = Coords { w: 200, h: 200 };
        // x − 5 < 1 and y − 15 < 15 both clamp.
        assert_eq!(sample_color(&frame, p(2, 20)), Some(Rgb::new(1, 15, 7)));
    }

    #[test]
    fn fingertip_too_close_to_top_gives_nothing() {
        let frame = Coords { w: 200, h: 200 };
        assert_eq!(sample_color(&frame, p(100, 15)), None);
        assert_eq!(sample_color(&frame, p(100, -40)), None);
    }

    #[test]
    fn off_frame_fingertips_never_read_out_of_bounds() {
        let frame = Coords { w: 50, h: 40 };
        for &(x, y) in &[(-100, 30), (49, 39), (60, 30), (30, 90), (i32::MAX, i32::MAX), (i32::MIN, 20)] {
            let _ = sample_color(&frame, p(x, y));
        }
        // Right edge clips the window instead of dropping it.
        assert_eq!(sample_color(&frame, p(52, 30)), Some(Rgb::new(47, 15, 7)));
    }

    #[test]
    fn selection_rect_is_clamped() {
        assert_eq!(
            selection_rect(p(3, 4)),
            SelectionRect { left: 1, top: 10, right: 8, bottom: 4 },
        );
        assert_eq!(
            selection_rect(p(300, 200)),
            SelectionRect { left: 290, top: 190, right: 305, bottom: 200 },
        );
    }
}
