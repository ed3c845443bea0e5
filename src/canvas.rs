//! The render surface: one RGBA frame holding the escape field with
//! the orbit stroked over it.

use field::{compute_escape_field, compute_escape_field_threaded, EscapeField};
use orbit::trace_orbit;
use params::RenderParameters;
use planes::CanvasPoint;

/// Color of the orbit stroke.
pub const ORBIT_COLOR: [u8; 4] = [255, 0, 0, 255];

/// An owned RGBA image, four bytes per pixel, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// The pixel data.
    pub pixels: Vec<u8>,
}

impl Frame {
    /// A frame cleared to transparent black.
    pub fn cleared(width: usize, height: usize) -> Frame {
        Frame {
            width,
            height,
            pixels: vec![0 as u8; width * height * 4],
        }
    }

    /// The RGBA value at x, y.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let p = (y * self.width + x) * 4;
        Some([self.pixels[p], self.pixels[p + 1], self.pixels[p + 2], self.pixels[p + 3]])
    }

    fn put(&mut self, x: i64, y: i64, color: [u8; 4]) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let p = (y as usize * self.width + x as usize) * 4;
        self.pixels[p..p + 4].copy_from_slice(&color);
    }

    /// Replace the whole frame with the field's grayscale image.  A
    /// field of the wrong size, or an empty one, leaves the frame alone.
    pub fn paint_field(&mut self, field: &EscapeField) {
        if field.is_empty() || field.width != self.width || field.height != self.height {
            return;
        }
        self.pixels = field.to_rgba();
    }

    /// Join consecutive positions with one-pixel straight lines.  A
    /// single position draws nothing.
    pub fn stroke_polyline(&mut self, positions: &[CanvasPoint], color: [u8; 4]) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        for segment in positions.windows(2) {
            if let Some((from, to)) = clip(segment[0], segment[1], self.width, self.height) {
                self.line(from, to, color);
            }
        }
    }

    // Bresenham, on the already-clipped segment.
    fn line(&mut self, from: CanvasPoint, to: CanvasPoint, color: [u8; 4]) {
        let (mut x0, mut y0) = (from.0.floor() as i64, from.1.floor() as i64);
        let (x1, y1) = (to.0.floor() as i64, to.1.floor() as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

/// Liang-Barsky: cut the segment down to the part inside the canvas
/// rectangle [0, width) x [0, height), or None if no part is.
fn clip(from: CanvasPoint, to: CanvasPoint, width: usize, height: usize) -> Option<(CanvasPoint, CanvasPoint)> {
    if !(from.0.is_finite() && from.1.is_finite() && to.0.is_finite() && to.1.is_finite()) {
        return None;
    }
    // Just shy of the far edges, so flooring stays on the canvas.
    let (xmax, ymax) = (width as f64 - 1e-9, height as f64 - 1e-9);
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    let edges = [
        (-dx, from.0),
        (dx, xmax - from.0),
        (-dy, from.1),
        (dy, ymax - from.1),
    ];
    for &(p, q) in &edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((
        CanvasPoint(from.0 + t0 * dx, from.1 + t0 * dy),
        CanvasPoint(from.0 + t1 * dx, from.1 + t1 * dy),
    ))
}

fn compose(params: &RenderParameters, field: Option<EscapeField>) -> Frame {
    let mut frame = Frame::cleared(params.width, params.height);
    if let Some(field) = field {
        frame.paint_field(&field);
    }
    if params.show_orbit {
        let path = trace_orbit(params);
        frame.stroke_polyline(&path.positions(), ORBIT_COLOR);
    }
    frame
}

/// Clear, paint the field if it is shown, then stroke the orbit if it
/// is shown.
pub fn render_frame(params: &RenderParameters) -> Frame {
    let field = if params.show_field { Some(compute_escape_field(params)) } else { None };
    compose(params, field)
}

/// As `render_frame`, computing the field on `threads` threads.
pub fn render_frame_threaded(params: &RenderParameters, threads: usize) -> Frame {
    let field = if params.show_field {
        Some(compute_escape_field_threaded(params, threads))
    } else {
        None
    };
    compose(params, field)
}
