//! Pen samples and colors.

use hand_gesture::PixelPoint;

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0,   g: 0,   b: 0   };
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
    pub const RED:   Rgb = Rgb { r: 255, g: 0,   b: 0   };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Pack as opaque `0xAARRGGBB`.
    pub fn to_argb(self) -> u32 {
        0xFF00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Unpack `0x??RRGGBB`, ignoring alpha.
    pub fn from_argb(argb: u32) -> Self {
        Rgb {
            r: (argb >> 16) as u8,
            g: (argb >>  8) as u8,
            b:  argb        as u8,
        }
    }
}

/// One entry of a stroke log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PenSample {
    /// Ink at `position`, in the color that was active when it was laid down.
    Point { color: Rgb, position: PixelPoint },
    /// Pen lifted: never connect across this entry.
    Break,
}

impl PenSample {
    pub fn point(color: Rgb, position: PixelPoint) -> Self {
        PenSample::Point { color, position }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, PenSample::Break)
    }

    pub fn position(&self) -> Option<PixelPoint> {
        match *self {
            PenSample::Point { position, .. } => Some(position),
            PenSample::Break => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_packing() {
        let c = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(c.to_argb(), 0xFF123456);
        assert_eq!(Rgb::from_argb(0x00123456), c);
        assert_eq!(Rgb::from_argb(Rgb::WHITE.to_argb()), Rgb::WHITE);
    }

    #[test]
    fn break_has_no_position() {
        assert_eq!(PenSample::Break.position(), None);
        let p = PixelPoint::new(3, 4, 0);
        assert_eq!(PenSample::point(Rgb::BLACK, p).position(), Some(p));
    }
}
