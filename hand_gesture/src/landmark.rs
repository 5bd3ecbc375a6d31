//! Hand landmark data model.
//!
//! A tracked hand arrives from the pose estimator as 21 normalised 3D points.
//! Everything downstream works in capture pixels, so the first thing a frame
//! does is project each hand through [`HandLandmarks::to_pixels`].

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════
// Anatomical numbering
// ════════════════════════════════════════════════════════════════════════════

/// Number of landmarks per tracked hand.
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST:      usize = 0;
pub const THUMB_CMC:  usize = 1;
pub const THUMB_MCP:  usize = 2;
pub const THUMB_IP:   usize = 3;
pub const THUMB_TIP:  usize = 4;
pub const INDEX_MCP:  usize = 5;
pub const INDEX_PIP:  usize = 6;
pub const INDEX_DIP:  usize = 7;
pub const INDEX_TIP:  usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP:   usize = 13;
pub const RING_PIP:   usize = 14;
pub const RING_DIP:   usize = 15;
pub const RING_TIP:   usize = 16;
pub const PINKY_MCP:  usize = 17;
pub const PINKY_PIP:  usize = 18;
pub const PINKY_DIP:  usize = 19;
pub const PINKY_TIP:  usize = 20;

/// Bones of the hand skeleton as landmark index pairs.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (MIDDLE_MCP, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (RING_MCP, PINKY_MCP), (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP),
    (PINKY_DIP, PINKY_TIP),
];

/// The five digits, in thumb-to-pinky order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb, Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky,
    ];

    /// Landmark index of this finger's tip.
    pub fn tip(self) -> usize {
        match self {
            Finger::Thumb  => THUMB_TIP,
            Finger::Index  => INDEX_TIP,
            Finger::Middle => MIDDLE_TIP,
            Finger::Ring   => RING_TIP,
            Finger::Pinky  => PINKY_TIP,
        }
    }

    /// Landmark index of the knuckle the finger grows from.
    pub fn base(self) -> usize {
        match self {
            Finger::Thumb  => THUMB_CMC,
            Finger::Index  => INDEX_MCP,
            Finger::Middle => MIDDLE_MCP,
            Finger::Ring   => RING_MCP,
            Finger::Pinky  => PINKY_MCP,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Normalised landmarks
// ════════════════════════════════════════════════════════════════════════════

/// One landmark: `x`/`y` normalised to the frame, `z` relative depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Landmark { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// All 21 landmarks of one tracked hand.
#[derive(Clone, Debug, PartialEq)]
pub struct HandLandmarks {
    pub landmarks:  [Landmark; LANDMARK_COUNT],
    /// "Left" / "Right" as reported by the estimator.  Informational only:
    /// roles are assigned by list position, never by handedness.
    pub handedness: Option<String>,
    pub score:      f32,
}

impl HandLandmarks {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        HandLandmarks { landmarks, handedness: None, score: 1.0 }
    }

    /// Project every landmark into capture pixels.
    pub fn to_pixels(&self, size: CaptureSize) -> PixelHand {
        let mut points = [PixelPoint::default(); LANDMARK_COUNT];
        for (p, lm) in points.iter_mut().zip(self.landmarks.iter()) {
            *p = PixelPoint::project(lm, size);
        }
        PixelHand { points }
    }

    /// Inverse of [`to_pixels`](Self::to_pixels), up to truncation.
    pub fn from_pixels(hand: &PixelHand, size: CaptureSize) -> Self {
        let w = size.width.max(1) as f32;
        let h = size.height.max(1) as f32;
        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        // Aim for the middle of the pixel, away from zero, so truncation
        // lands back on it from either side.
        let centre = |v: i32| v as f32 + if v < 0 { -0.5 } else { 0.5 };
        for (lm, p) in landmarks.iter_mut().zip(hand.points.iter()) {
            *lm = Landmark::new(centre(p.x) / w, centre(p.y) / h, centre(p.z) / h);
        }
        HandLandmarks::new(landmarks)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Capture pixels
// ════════════════════════════════════════════════════════════════════════════

/// Capture resolution, read once at startup and fixed for the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureSize {
    pub width:  u32,
    pub height: u32,
}

impl CaptureSize {
    pub fn new(width: u32, height: u32) -> Self {
        CaptureSize { width, height }
    }
}

impl Default for CaptureSize {
    fn default() -> Self {
        CaptureSize { width: 1280, height: 720 }
    }
}

/// A landmark in capture pixels.  `z` keeps the depth, scaled by frame height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl PixelPoint {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        PixelPoint { x, y, z }
    }

    /// Scale and truncate toward zero.  Float-to-int casts saturate, so a
    /// wild coordinate can't wrap.
    pub fn project(lm: &Landmark, size: CaptureSize) -> Self {
        let w = size.width as f32;
        let h = size.height as f32;
        PixelPoint {
            x: (w * lm.x) as i32,
            y: (h * lm.y) as i32,
            z: (h * lm.z) as i32,
        }
    }
}

/// One hand projected to capture pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelHand {
    pub points: [PixelPoint; LANDMARK_COUNT],
}

impl PixelHand {
    pub fn wrist(&self) -> PixelPoint {
        self.points[WRIST]
    }

    pub fn fingertip(&self, finger: Finger) -> PixelPoint {
        self.points[finger.tip()]
    }

    pub fn index_tip(&self) -> PixelPoint {
        self.fingertip(Finger::Index)
    }

    /// Skeleton bones as point pairs, for overlay drawing.
    pub fn bones(&self) -> impl Iterator<Item = (PixelPoint, PixelPoint)> + '_ {
        HAND_CONNECTIONS.iter().map(move |&(a, b)| (self.points[a], self.points[b]))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_truncates_toward_zero() {
        let size = CaptureSize::new(640, 480);
        let p = PixelPoint::project(&Landmark::new(0.5, 0.25, -0.01), size);
        assert_eq!(p, PixelPoint::new(320, 120, -4));

        let p = PixelPoint::project(&Landmark::new(0.9999, 0.0001, 0.0), size);
        assert_eq!((p.x, p.y), (639, 0));
    }

    #[test]
    fn depth_is_scaled_by_height() {
        let size = CaptureSize::new(1000, 100);
        let p = PixelPoint::project(&Landmark::new(0.0, 0.0, 0.5), size);
        assert_eq!(p.z, 50);
    }

    #[test]
    fn from_pixels_round_trips_through_projection() {
        let size = CaptureSize::new(1280, 720);
        let mut points = [PixelPoint::default(); LANDMARK_COUNT];
        for (i, p) in points.iter_mut().enumerate() {
            *p = PixelPoint::new(7 * i as i32 - 40, 600 - 11 * i as i32, 3 - i as i32);
        }
        let hand = PixelHand { points };
        let back = HandLandmarks::from_pixels(&hand, size).to_pixels(size);
        assert_eq!(back, hand);
    }

    #[test]
    fn connections_reference_valid_landmarks() {
        for &(a, b) in HAND_CONNECTIONS.iter() {
            assert!(a < LANDMARK_COUNT && b < LANDMARK_COUNT);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn finger_tips_match_numbering() {
        let tips: Vec<usize> = Finger::ALL.iter().map(|f| f.tip()).collect();
        assert_eq!(tips, vec![4, 8, 12, 16, 20]);
    }
}
