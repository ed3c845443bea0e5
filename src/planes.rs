//! Contains the PlaneMapper struct, which describes a relationship
//! between a canvas on the integral plane with an origin at 0,0, and a
//! window onto the complex plane centered on the origin and scaled by
//! a zoom factor.  Also converts polar seed points to rectangular
//! ones.
use num::Complex;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the x, y of a whole pixel on the canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Describes an x, y position on the canvas that need not land on a
/// whole pixel, or on the canvas at all.  Orbits wander.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasPoint(pub f64, pub f64);

/// Maps points between the integral canvas and the complex plane.  The
/// center of the canvas is the origin of the complex plane, and at a
/// zoom of 1.0 the canvas spans [-2, 2] along both axes.
#[derive(Debug, Clone)]
pub struct PlaneMapper {
    /// The right-lower corner of the integral cartesian plane.
    /// The left-upper is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    /// The zoom factor this mapper was built with.
    pub zoom: f64,
    // Pixel coordinates of the complex origin.
    center: (f64, f64),
    // Pixels per unit of the complex plane, horizontally and vertically.
    grid_factors: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  The zoom must be positive; that is the caller's
    /// business, and `RenderParameters::new` sees to it.
    pub fn new(width: usize, height: usize, zoom: f64) -> PlaneMapper {
        let (w, h) = (width as f64, height as f64);
        PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            zoom,
            center: (w / 2.0, h / 2.0),
            grid_factors: (0.5 * zoom * w, 0.5 * zoom * h),
        }
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given a pixel on the integral cartesian plane, return the
    /// complex number at the equivalent location on the complex plane.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        self.canvas_to_point(&CanvasPoint(pixel.0 as f64, pixel.1 as f64))
    }

    /// As `pixel_to_point`, for positions between or beyond pixels.
    pub fn canvas_to_point(&self, position: &CanvasPoint) -> Complex<f64> {
        Complex::new(
            (position.0 - self.center.0) / self.grid_factors.0,
            (position.1 - self.center.1) / self.grid_factors.1,
        )
    }

    /// Given a complex number, return the canvas position it lands on.
    /// The exact inverse of `canvas_to_point`; nothing is rounded and
    /// nothing is clipped.
    pub fn point_to_pixel(&self, point: &Complex<f64>) -> CanvasPoint {
        CanvasPoint(
            self.center.0 + point.re * self.grid_factors.0,
            self.center.1 + point.im * self.grid_factors.1,
        )
    }
}

/// Convert a seed given as a radius and an angle in degrees into a
/// rectangular complex number.
pub fn polar_to_rect(radius: f64, degrees: f64) -> Complex<f64> {
    let theta = degrees.to_radians();
    Complex::new(radius * theta.cos(), radius * theta.sin())
}
