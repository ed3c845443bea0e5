#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia set and orbit renderer
//!
//! A Julia set is drawn by fixing a complex constant `c` and asking,
//! for every point z on the complex plane, whether repeatedly applying
//! z <- z^2 + c sends it off to infinity.  How quickly it goes is the
//! number used to shade the pixel; points that never go are black.
//!
//! On top of that picture we draw the *orbit* of a single seed point:
//! the successive values the same recurrence produces from the seed,
//! joined by straight lines in the order they were visited.  Seeds
//! inside the black heart wander around it forever; seeds outside fly
//! off the canvas after a few steps.
//!
//! Every render is a pure function of one `RenderParameters` value.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
#[cfg(test)]
extern crate rand;

pub mod canvas;
pub mod errors;
pub mod field;
pub mod latest;
pub mod orbit;
pub mod params;
pub mod planes;
pub mod presets;

pub use canvas::{render_frame, render_frame_threaded, Frame};
pub use errors::{ParameterError, PresetError};
pub use field::{compute_escape_field, compute_escape_field_threaded, EscapeField};
pub use latest::{LatestFrame, Ticket};
pub use orbit::{trace_orbit, OrbitPath, OrbitStep};
pub use params::{RenderParameters, Seed, SeedMode};
pub use planes::{polar_to_rect, CanvasPoint, Pixel, PlaneMapper};
