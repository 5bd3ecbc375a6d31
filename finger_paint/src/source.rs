//! Where landmark frames come from: the keyboard/mouse simulator or a
//! recorded session.
//!
//! The public interface is a [`LandmarkFrame`] delivered over a `mpsc`
//! channel, one per captured frame.  The app loop doesn't know whether a
//! frame was synthesised from the mouse or read back from a recording.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use hand_gesture::landmark::THUMB_CMC;
use hand_gesture::wire::{encode_frame, read_frame_lenient};
use hand_gesture::{CaptureSize, Finger, Gesture, HandLandmarks, PixelHand, PixelPoint, LANDMARK_COUNT};
use tracing::{debug, info, warn};

/// Every hand the estimator reported for one frame, in estimator order.
pub type LandmarkFrame = Vec<HandLandmarks>;

// ════════════════════════════════════════════════════════════════════════════
// LandmarkSource trait
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can deliver landmark frames over a channel.
pub trait LandmarkSource: Send + 'static {
    fn run(self: Box<Self>, tx: Sender<LandmarkFrame>);
}

/// Spawn a landmark source on its own thread and return the receiving end.
pub fn spawn_landmark_source<S: LandmarkSource>(source: S) -> Receiver<LandmarkFrame> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || Box::new(source).run(tx));
    rx
}

// ════════════════════════════════════════════════════════════════════════════
// Hand synthesis
// ════════════════════════════════════════════════════════════════════════════

/// Fingertip height above the wrist for a straight finger, in pixels.
const EXTENDED: i32 = 170;
/// Fingertip height above the wrist for a curled finger.
const FOLDED:   i32 = 40;
/// Thumb tip height when the palm is open.
const THUMB_UP: i32 = 90;
/// Knuckle row height above the wrist.
const KNUCKLES: i32 = 70;

/// Horizontal tip offset from the wrist, thumb to pinky.
const SPREAD: [i32; 5] = [-55, -20, 5, 28, 48];

/// Tip heights `[thumb, index, middle, ring, pinky]` that classify as `g`.
fn tip_heights(g: Gesture) -> [i32; 5] {
    match g {
        Gesture::Closed    => [FOLDED, FOLDED, FOLDED, FOLDED, FOLDED],
        Gesture::Open      => [THUMB_UP, EXTENDED, EXTENDED, EXTENDED, EXTENDED],
        Gesture::OneFinger => [FOLDED, EXTENDED, FOLDED, FOLDED, FOLDED],
        Gesture::TwoFinger => [FOLDED, EXTENDED, EXTENDED, FOLDED, FOLDED],
        // Index and thumb both up: neither pointing nor a palm.
        Gesture::Ambiguous => [EXTENDED, EXTENDED, FOLDED, FOLDED, FOLDED],
    }
}

/// A hand whose index fingertip sits at `tip` (capture pixels) and whose
/// geometry classifies as `gesture` under the default thresholds.
pub fn synthesize_hand(tip: (i32, i32), gesture: Gesture, size: CaptureSize) -> HandLandmarks {
    let heights = tip_heights(gesture);
    let wrist = PixelPoint::new(tip.0 - SPREAD[1], tip.1 + heights[1], 0);

    let mut points = [wrist; LANDMARK_COUNT];
    for (i, finger) in Finger::ALL.iter().enumerate() {
        let base_index = finger.base();
        let base = if base_index == THUMB_CMC {
            PixelPoint::new(wrist.x - 20, wrist.y - 20, 0)
        } else {
            PixelPoint::new(wrist.x + SPREAD[i] * 4 / 5, wrist.y - KNUCKLES, 0)
        };
        let end = PixelPoint::new(wrist.x + SPREAD[i], wrist.y - heights[i], 0);

        // base, two interpolated joints, tip: four consecutive indices.
        for step in 0..4 {
            points[base_index + step] = PixelPoint::new(
                base.x + (end.x - base.x) * step as i32 / 3,
                base.y + (end.y - base.y) * step as i32 / 3,
                0,
            );
        }
    }

    HandLandmarks::from_pixels(&PixelHand { points }, size)
}

// ════════════════════════════════════════════════════════════════════════════
// SimLandmarkSource — keyboard/mouse simulation (always available)
// ════════════════════════════════════════════════════════════════════════════

/// Snapshot of the simulated hands, taken by the window once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimControls {
    /// Primary index fingertip, capture pixels.
    pub pointer:   (i32, i32),
    pub primary:   Gesture,
    /// Secondary fingertip and pose, when the second hand is shown.
    pub secondary: Option<((i32, i32), Gesture)>,
    /// False simulates the estimator losing both hands.
    pub tracking:  bool,
}

impl Default for SimControls {
    fn default() -> Self {
        SimControls {
            pointer:   (0, 0),
            primary:   Gesture::Open,
            secondary: None,
            tracking:  true,
        }
    }
}

impl SimControls {
    /// The frame the estimator would report for these hands.  Two hands are
    /// listed secondary first, so the primary lands at index 1.
    pub fn frame(&self, size: CaptureSize) -> LandmarkFrame {
        if !self.tracking {
            return Vec::new();
        }
        let primary = synthesize_hand(self.pointer, self.primary, size);
        match self.secondary {
            Some((tip, gesture)) => vec![synthesize_hand(tip, gesture, size), primary],
            None => vec![primary],
        }
    }
}

/// Raw input from the simulation window.
#[derive(Clone, Copy, Debug)]
pub enum SimInput {
    Controls(SimControls),
    Quit,
}

/// Landmark source driven by [`SimInput`] from the canvas window.
pub struct SimLandmarkSource {
    pub rx:       Receiver<SimInput>,
    pub size:     CaptureSize,
    pub recorder: Option<SessionRecorder>,
}

impl LandmarkSource for SimLandmarkSource {
    fn run(mut self: Box<Self>, tx: Sender<LandmarkFrame>) {
        info!("simulated hands ready");
        while let Ok(input) = self.rx.recv() {
            let controls = match input {
                SimInput::Controls(c) => c,
                SimInput::Quit        => break,
            };
            let frame = controls.frame(self.size);
            if let Some(rec) = self.recorder.as_mut() {
                rec.record(&frame);
            }
            if tx.send(frame).is_err() { break; }
        }
        debug!("simulation source stopped");
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ReplayLandmarkSource — JSON-lines recording
// ════════════════════════════════════════════════════════════════════════════

/// Plays a recorded session back at a fixed frame interval.
pub struct ReplayLandmarkSource {
    reader:   Box<dyn BufRead + Send>,
    interval: Duration,
    mirror:   bool,
}

impl ReplayLandmarkSource {
    pub fn new(reader: Box<dyn BufRead + Send>, interval: Duration, mirror: bool) -> Self {
        ReplayLandmarkSource { reader, interval, mirror }
    }

    /// Open a recording; `-` reads standard input.
    pub fn open(path: &Path, interval: Duration, mirror: bool) -> io::Result<Self> {
        let reader: Box<dyn BufRead + Send> = if path == Path::new("-") {
            Box::new(BufReader::new(io::stdin()))
        } else {
            Box::new(BufReader::new(File::open(path)?))
        };
        Ok(Self::new(reader, interval, mirror))
    }
}

impl LandmarkSource for ReplayLandmarkSource {
    fn run(self: Box<Self>, tx: Sender<LandmarkFrame>) {
        let ReplayLandmarkSource { reader, interval, mirror } = *self;
        let mut count = 0usize;
        for frame in read_frames(reader, mirror) {
            if tx.send(frame).is_err() { return; }
            count += 1;
            thread::sleep(interval);
        }
        info!(frames = count, "replay finished");
    }
}

/// Frames of a JSON-lines recording.  Blank lines are skipped, a malformed
/// line is a frame with no hands, and a read error ends the recording.
pub fn read_frames<R: BufRead>(reader: R, mirror: bool) -> impl Iterator<Item = LandmarkFrame> {
    reader.lines()
        .map_while(|line| match line {
            Ok(l) => Some(l),
            Err(e) => {
                warn!("recording unreadable: {e}");
                None
            }
        })
        .filter(|l| !l.trim().is_empty())
        .map(move |l| {
            let mut frame = read_frame_lenient(&l);
            if mirror {
                frame.iter_mut().for_each(mirror_hand);
            }
            frame
        })
}

/// Flip a hand left to right, as if the camera image had been mirrored.
pub fn mirror_hand(hand: &mut HandLandmarks) {
    for lm in hand.landmarks.iter_mut() {
        lm.x = 1.0 - lm.x;
    }
    let flipped = match hand.handedness.as_deref() {
        Some("Left")  => "Right",
        Some("Right") => "Left",
        _             => return,
    };
    hand.handedness = Some(flipped.to_string());
}

// ════════════════════════════════════════════════════════════════════════════
// SessionRecorder
// ════════════════════════════════════════════════════════════════════════════

/// Writes every frame it is given as one JSON line.  A write failure is
/// logged once and recording stops; the session carries on.
pub struct SessionRecorder {
    path:   PathBuf,
    out:    Option<BufWriter<File>>,
    frames: usize,
}

impl SessionRecorder {
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let file = File::create(&path)?;
        info!(path = %path.display(), "recording session");
        Ok(SessionRecorder { path, out: Some(BufWriter::new(file)), frames: 0 })
    }

    pub fn record(&mut self, frame: &[HandLandmarks]) {
        let Some(out) = self.out.as_mut() else { return };
        let written = writeln!(out, "{}", encode_frame(frame)).and_then(|_| out.flush());
        match written {
            Ok(()) => self.frames += 1,
            Err(e) => {
                warn!(path = %self.path.display(), "recording stopped: {e}");
                self.out = None;
            }
        }
    }

    pub fn frames(&self) -> usize { self.frames }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
