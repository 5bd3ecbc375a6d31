//! Software raster the drawing is composed on.
//!
//! Two layers: `ink` holds stroke segments and persists across frames (it is
//! only ever appended to, or wiped on a clear), and `frame` is rebuilt every
//! frame as backdrop + ink + overlays.  Nothing here touches a window, so the
//! whole canvas can be exercised headless.

use hand_gesture::{PixelHand, PixelPoint};
use stroke_log::{Rgb, Segment, SelectionRect};

use crate::backdrop::Backdrop;

// ════════════════════════════════════════════════════════════════════════════
// Style
// ════════════════════════════════════════════════════════════════════════════

pub const STROKE_THICKNESS: i32 = 5;
pub const SWATCH_RADIUS:    i32 = 20;
pub const SWATCH_INSET:     i32 = 50;
const SWATCH_RING:          i32 = 5;
const SELECTION_COLOR:      u32 = 0xFFFF0000;
const SELECTION_THICKNESS:  i32 = 2;
const BONE_COLOR:           u32 = 0xFFFFFFFF;
const JOINT_COLOR:          u32 = 0xFFFF3030;
const SAVED_COLOR:          u32 = 0xFFFFFFFF;
const STATUS_COLOR:         u32 = 0xFFEEEEEE;
const STATUS_BG:            u32 = 0xFF0F3460;

/// Fully transparent: the ink layer's "nothing here".
const CLEAR: u32 = 0x00000000;
/// Lines with an endpoint further out than this are dropped, not walked.
const MAX_COORD: u32 = 1 << 15;

// ════════════════════════════════════════════════════════════════════════════
// Layer — one ARGB pixel buffer with drawing primitives
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug)]
pub struct Layer {
    width:  usize,
    height: usize,
    buf:    Vec<u32>,
}

impl Layer {
    pub fn new(width: usize, height: usize, fill: u32) -> Self {
        Layer { width, height, buf: vec![fill; width * height] }
    }

    pub fn pixels(&self) -> &[u32] { &self.buf }
    pub fn width(&self)  -> usize  { self.width }
    pub fn height(&self) -> usize  { self.height }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.buf[y * self.width + x])
    }

    pub fn fill(&mut self, color: u32) {
        self.buf.fill(color);
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.buf[y as usize * self.width + x as usize] = color;
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        for row in y.max(0)..(y + h).min(self.height as i32) {
            for col in x.max(0)..(x + w).min(self.width as i32) {
                self.buf[row as usize * self.width + col as usize] = color;
            }
        }
    }

    /// Filled disc of radius `r` centred on (cx, cy).
    fn fill_disc(&mut self, cx: i32, cy: i32, r: i32, color: u32) {
        self.ring(cx, cy, -1, r, color);
    }

    /// Pixels whose distance from the centre lies in `(inner, outer]`.
    fn ring(&mut self, cx: i32, cy: i32, inner: i32, outer: i32, color: u32) {
        if cx.unsigned_abs() > MAX_COORD || cy.unsigned_abs() > MAX_COORD {
            return;
        }
        let (i2, o2) = (inner * inner.abs(), outer * outer);
        for dy in -outer..=outer {
            for dx in -outer..=outer {
                let d2 = dx * dx + dy * dy;
                if d2 > i2 && d2 <= o2 {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Bresenham line stamped with a disc, giving `thickness`-wide strokes.
    fn line(&mut self, a: PixelPoint, b: PixelPoint, thickness: i32, color: u32) {
        if [a.x, a.y, b.x, b.y].iter().any(|v| v.unsigned_abs() > MAX_COORD) {
            return;
        }
        let r = (thickness / 2).max(0);
        let (mut x, mut y) = (a.x, a.y);
        let dx =  (b.x - a.x).abs();
        let dy = -(b.y - a.y).abs();
        let sx = if a.x < b.x { 1 } else { -1 };
        let sy = if a.y < b.y { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            if r == 0 {
                self.set_pixel(x, y, color);
            } else {
                self.fill_disc(x, y, r, color);
            }
            if x == b.x && y == b.y { break; }
            let e2 = 2 * err;
            if e2 >= dy { err += dy; x += sx; }
            if e2 <= dx { err += dx; y += sy; }
        }
    }

    fn stroke_rect(&mut self, r: SelectionRect, thickness: i32, color: u32) {
        if [r.left, r.top, r.right, r.bottom].iter().any(|v| v.unsigned_abs() > MAX_COORD) {
            return;
        }
        let (w, h) = (r.right - r.left, r.bottom - r.top);
        self.fill_rect(r.left, r.top, w + 1, thickness, color);
        self.fill_rect(r.left, r.bottom - thickness + 1, w + 1, thickness, color);
        self.fill_rect(r.left, r.top, thickness, h + 1, color);
        self.fill_rect(r.right - thickness + 1, r.top, thickness, h + 1, color);
    }

    /// 3×5 bitmap text, each font pixel drawn as a `scale`×`scale` block.
    fn label(&mut self, text: &str, x: i32, y: i32, scale: i32, color: u32) {
        let mut cx = x;
        for ch in text.chars() {
            let glyph = char_glyph(ch);
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..3 {
                    if bits & (1 << (2 - col)) != 0 {
                        self.fill_rect(cx + col * scale, y + row as i32 * scale, scale, scale, color);
                    }
                }
            }
            cx += 4 * scale;
            if cx >= self.width as i32 { break; }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Canvas
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug)]
pub struct Canvas {
    frame: Layer,
    ink:   Layer,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            frame: Layer::new(width, height, 0xFF000000),
            ink:   Layer::new(width, height, CLEAR),
        }
    }

    pub fn width(&self)  -> usize  { self.frame.width }
    pub fn height(&self) -> usize  { self.frame.height }
    /// The composed frame, ready for display or export.
    pub fn pixels(&self) -> &[u32] { self.frame.pixels() }
    pub fn frame(&self)  -> &Layer { &self.frame }
    pub fn ink(&self)    -> &Layer { &self.ink }

    // ── ink layer ─────────────────────────────────────────────────────────

    /// Lay newly replayed segments onto the persistent ink.
    pub fn ink_segments(&mut self, segments: &[Segment]) {
        for s in segments {
            self.ink.line(s.from, s.to, STROKE_THICKNESS, s.color.to_argb());
        }
    }

    /// Forget all ink, after the stroke log was cleared.
    pub fn wipe_ink(&mut self) {
        self.ink.fill(CLEAR);
    }

    // ── per-frame composition ─────────────────────────────────────────────

    /// Start a new frame: backdrop with the ink on top.
    pub fn compose(&mut self, backdrop: &Backdrop) {
        let bg = backdrop.pixels();
        for (i, px) in self.frame.buf.iter_mut().enumerate() {
            let ink = self.ink.buf[i];
            *px = if ink >> 24 != 0 { ink } else { bg.get(i).copied().unwrap_or(0xFF000000) };
        }
    }

    /// Skeleton overlay for one tracked hand.
    pub fn draw_hand(&mut self, hand: &PixelHand) {
        for (a, b) in hand.bones() {
            self.frame.line(a, b, 2, BONE_COLOR);
        }
        for p in hand.points.iter() {
            self.frame.fill_disc(p.x, p.y, 3, JOINT_COLOR);
        }
    }

    /// Active-color swatch in the bottom-right corner.
    pub fn draw_swatch(&mut self, color: Rgb) {
        let cx = self.width() as i32 - SWATCH_INSET;
        let cy = self.height() as i32 - SWATCH_INSET;
        self.frame.fill_disc(cx, cy, SWATCH_RADIUS, color.to_argb());
        let half = SWATCH_RING / 2;
        self.frame.ring(cx, cy, SWATCH_RADIUS - half - 1, SWATCH_RADIUS + half, 0xFF000000);
    }

    /// Marker around the point colors are being sampled from.
    pub fn draw_selection(&mut self, rect: SelectionRect) {
        self.frame.stroke_rect(rect, SELECTION_THICKNESS, SELECTION_COLOR);
    }

    pub fn draw_saved_notice(&mut self) {
        self.frame.label("IMAGE SAVED!", 20, 20, 3, SAVED_COLOR);
    }

    /// One-line status bar along the bottom-left.
    pub fn draw_status(&mut self, text: &str) {
        let y = self.height() as i32 - 22;
        let w = (text.chars().count() as i32 * 8 + 16).min(self.width() as i32 - 2 * SWATCH_INSET - SWATCH_RADIUS);
        self.frame.fill_rect(0, y, w, 22, STATUS_BG);
        self.frame.label(text, 8, y + 6, 2, STATUS_COLOR);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3×5 bitmap font
// ────────────────────────────────────────────────────────────────────────────

fn char_glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'a' | 'A' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'b' | 'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'c' | 'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'd' | 'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'e' | 'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'f' | 'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'g' | 'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'h' | 'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'i' | 'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'j' | 'J' => [0b001, 0b001, 0b001, 0b101, 0b111],
        'k' | 'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'l' | 'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'm' | 'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'n' | 'N' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'o' | 'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'p' | 'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'q' | 'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'r' | 'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        's' | 'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        't' | 'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'u' | 'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'v' | 'V' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'w' | 'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'x' | 'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'y' | 'Y' => [0b101, 0b101, 0b111, 0b010, 0b010],
        'z' | 'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _   => [0b000, 0b000, 0b010, 0b000, 0b000], // fallback dot
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use hand_gesture::LANDMARK_COUNT;

    fn p(x: i32, y: i32) -> PixelPoint { PixelPoint::new(x, y, 0) }

    fn seg(a: PixelPoint, b: PixelPoint, color: Rgb) -> Segment {
        Segment { from: a, to: b, color }
    }

    #[test]
    fn segment_is_inked_end_to_end() {
        let mut c = Canvas::new(100, 100);
        c.ink_segments(&[seg(p(10, 50), p(90, 50), Rgb::RED)]);
        for x in [10, 50, 90] {
            assert_eq!(c.ink().get(x, 50), Some(Rgb::RED.to_argb()));
        }
        // Five pixels thick: ±2 rows.
        assert_eq!(c.ink().get(50, 52), Some(Rgb::RED.to_argb()));
        assert_eq!(c.ink().get(50, 54), Some(CLEAR));
    }

    #[test]
    fn ink_shows_over_backdrop_until_wiped() {
        let bg = Backdrop::solid(40, 40, Rgb::WHITE);
        let mut c = Canvas::new(40, 40);
        c.ink_segments(&[seg(p(5, 5), p(30, 30), Rgb::RED)]);
        c.compose(&bg);
        assert_eq!(c.frame().get(20, 20), Some(Rgb::RED.to_argb()));
        assert_eq!(c.frame().get(35, 2), Some(Rgb::WHITE.to_argb()));

        c.wipe_ink();
        c.compose(&bg);
        assert_eq!(c.frame().get(20, 20), Some(Rgb::WHITE.to_argb()));
    }

    #[test]
    fn off_canvas_segments_are_clipped() {
        let mut c = Canvas::new(20, 20);
        c.ink_segments(&[seg(p(-50, -50), p(70, 70), Rgb::RED)]);
        assert_eq!(c.ink().get(10, 10), Some(Rgb::RED.to_argb()));
    }

    #[test]
    fn runaway_coordinates_are_skipped() {
        let mut c = Canvas::new(20, 20);
        c.ink_segments(&[seg(p(0, 0), p(i32::MAX, 5), Rgb::RED)]);
        assert!(c.ink().pixels().iter().all(|&px| px == CLEAR));
    }

    #[test]
    fn swatch_shows_active_color_with_black_ring() {
        let mut c = Canvas::new(200, 200);
        c.compose(&Backdrop::solid(200, 200, Rgb::WHITE));
        let blue = Rgb::new(0, 0, 255);
        c.draw_swatch(blue);
        assert_eq!(c.frame().get(150, 150), Some(blue.to_argb()));
        assert_eq!(c.frame().get(150 + SWATCH_RADIUS as usize, 150), Some(0xFF000000));
        assert_eq!(c.frame().get(150 + 25, 150), Some(Rgb::WHITE.to_argb()));
    }

    #[test]
    fn selection_marker_outlines_rect() {
        let mut c = Canvas::new(100, 100);
        c.compose(&Backdrop::solid(100, 100, Rgb::BLACK));
        c.draw_selection(SelectionRect { left: 20, top: 20, right: 40, bottom: 30 });
        assert_eq!(c.frame().get(20, 25), Some(SELECTION_COLOR));
        assert_eq!(c.frame().get(40, 25), Some(SELECTION_COLOR));
        assert_eq!(c.frame().get(30, 25), Some(0xFF000000));
    }

    #[test]
    fn overlays_near_edges_do_not_panic() {
        let mut c = Canvas::new(30, 30);
        let hand = PixelHand { points: [p(-5, 29); LANDMARK_COUNT] };
        c.draw_hand(&hand);
        c.draw_saved_notice();
        c.draw_status("hands 2  primary one-finger");
        c.draw_swatch(Rgb::RED);
    }
}
