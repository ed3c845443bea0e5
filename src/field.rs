// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape field.
//!
//! Every pixel on the canvas is mapped to a point on the complex
//! plane, and that point is used as the *starting* value of the
//! recurrence z <- z^2 + c, with c fixed for the whole image.  We
//! count how many iterations it takes for the point to leave the
//! circle of radius two around the origin; past that circle the orbit
//! is guaranteed to run off to infinity.  Points that never leave
//! within the iteration bound are (probably) in the filled Julia set.

use crossbeam;
use itertools::iproduct;
use num::{clamp, Complex};
use std::panic;

use params::RenderParameters;
use planes::{Pixel, PlaneMapper};

/// Squared radius past which a point is known to escape.
pub const ESCAPE_NORM_SQR: f64 = 4.0;

/// Escape counts for every pixel of a canvas, in row-major order.  A
/// count equal to `iterations` means the point never escaped.
#[derive(Clone, Debug, PartialEq)]
pub struct EscapeField {
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
    /// The iteration bound the field was computed with.
    pub iterations: usize,
    /// One escape count per pixel, `y * width + x`.
    pub counts: Vec<usize>,
}

impl EscapeField {
    /// The escape count of the pixel at x, y, if it is on the canvas.
    pub fn get(&self, pixel: &Pixel) -> Option<usize> {
        if pixel.0 >= self.width || pixel.1 >= self.height {
            return None;
        }
        self.counts.get(pixel.1 * self.width + pixel.0).cloned()
    }

    /// True when the field holds no counts at all, as when it was
    /// computed with an iteration bound of zero.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Render the field as opaque grayscale RGBA, four bytes per pixel.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.counts.len() * 4);
        for count in &self.counts {
            let v = intensity(*count, self.iterations);
            rgba.extend_from_slice(&[v, v, v, 255]);
        }
        rgba
    }
}

/// The gray level for an escape count: white for points that leave at
/// once, black for points that never leave.
pub fn intensity(count: usize, iterations: usize) -> u8 {
    if iterations == 0 {
        return 255;
    }
    let shade = (255 * clamp(count, 0, iterations)) / iterations;
    (255 - shade) as u8
}

/// The classic iterator function.  Starting from `z`, returns the
/// number of iterations done before z^2 + c left the escape circle, or
/// `limit` if it never did.
#[inline]
pub fn escape_count(start: Complex<f64>, c: Complex<f64>, limit: usize) -> usize {
    let (mut a, mut b) = (start.re, start.im);
    let mut i = 0;
    while i < limit && a * a + b * b < ESCAPE_NORM_SQR {
        let re = a * a - b * b + c.re;
        b = 2.0 * a * b + c.im;
        a = re;
        i += 1;
    }
    i
}

/// Fill `band` with escape counts for the rows starting at `top`.  The
/// band must hold whole rows.
fn fill_rows(plane: &PlaneMapper, c: Complex<f64>, limit: usize, top: usize, band: &mut [usize]) {
    let width = plane.integral_plane.0;
    let rows = band.len() / width;
    for (slot, (row, column)) in band.iter_mut().zip(iproduct!(top..top + rows, 0..width)) {
        *slot = escape_count(plane.pixel_to_point(&Pixel(column, row)), c, limit);
    }
}

fn empty_field(params: &RenderParameters) -> EscapeField {
    EscapeField {
        width: params.width,
        height: params.height,
        iterations: params.iterations,
        counts: vec![],
    }
}

/// The main function for single-threaded renders.
pub fn compute_escape_field(params: &RenderParameters) -> EscapeField {
    let plane = params.mapper();
    if params.iterations == 0 || plane.is_empty() {
        return empty_field(params);
    }
    debug!(
        "escape field {}x{}, c = {}, zoom {}, {} iterations",
        params.width, params.height, params.c, plane.zoom, params.iterations
    );
    let mut counts = vec![0 as usize; plane.len()];
    fill_rows(&plane, params.c, params.iterations, 0, &mut counts);
    EscapeField {
        width: params.width,
        height: params.height,
        iterations: params.iterations,
        counts,
    }
}

/// A multi-threaded version of `compute_escape_field`.  The canvas is
/// cut into horizontal bands of whole rows, one per thread, and each
/// thread writes straight into its own band of the output.  The result
/// is identical to the single-threaded one.
pub fn compute_escape_field_threaded(params: &RenderParameters, threads: usize) -> EscapeField {
    let plane = params.mapper();
    if params.iterations == 0 || plane.is_empty() {
        return empty_field(params);
    }
    let threads = clamp(threads, 1, params.height);
    if threads == 1 {
        return compute_escape_field(params);
    }

    let rows_per_band = (params.height + threads - 1) / threads;
    debug!(
        "escape field {}x{} at zoom {} on {} threads, {} rows each",
        params.width, params.height, plane.zoom, threads, rows_per_band
    );

    let mut counts = vec![0 as usize; plane.len()];
    let (c, limit) = (params.c, params.iterations);
    let result = crossbeam::scope(|spawner| {
        let plane = &plane;
        for (index, band) in counts.chunks_mut(rows_per_band * params.width).enumerate() {
            spawner.spawn(move |_| {
                trace!("band {} starts at row {}", index, index * rows_per_band);
                fill_rows(plane, c, limit, index * rows_per_band, band);
            });
        }
    });
    if let Err(cause) = result {
        panic::resume_unwind(cause);
    }

    EscapeField {
        width: params.width,
        height: params.height,
        iterations: params.iterations,
        counts,
    }
}
