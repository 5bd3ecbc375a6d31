//! # finger_paint
//!
//! Paint on a canvas with your hands.  Hand landmarks arrive one frame at a
//! time, each hand is classified into a gesture, and the gestures drive a
//! [`stroke_log::DrawingState`] that the canvas is rendered from.
//!
//! ## Gesture → Action mapping
//!
//! | Gesture | Hand | Action |
//! |---|---|---|
//! | One finger (index) | Primary | Draw at the fingertip |
//! | Anything else | Primary | Pen up |
//! | Fist | Primary | Clear the drawing |
//! | Not two fingers | Secondary | Pick the color under the fingertip |
//! | Two fingers | Secondary | Freeze the picked color |
//! | Two fingers | Both | Save the canvas as `output.png` |
//!
//! With two hands in view, the second hand the estimator lists is primary.
//!
//! ## Input modes
//!
//! * (default) — **Simulation**: mouse and keyboard stand in for the hands.
//! * `--replay <path>` — frames from a JSON-lines landmark recording.
//!
//! ### Simulation controls
//!
//! | Input | Effect |
//! |---|---|
//! | Mouse | Primary index fingertip |
//! | Left button held | Primary one finger (draw) |
//! | `C` held | Primary fist (clear) |
//! | `V` held | Primary two fingers |
//! | `H` | Toggle hand tracking |
//! | `Tab` | Show / hide the secondary hand |
//! | Arrow keys | Move the secondary fingertip |
//! | `X` held | Secondary two fingers (freeze color) |
//! | `E` held | Both hands two fingers (save) |
//! | `Q` / `Escape` | Quit |

pub mod app;
pub mod backdrop;
pub mod canvas;
pub mod config;
pub mod export;
pub mod source;
pub mod visualizer;
