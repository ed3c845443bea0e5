//! The parameter snapshot shared by the field computer and the orbit
//! tracer.  Each render pass takes one of these by reference and
//! never changes it.

use errors::ParameterError;
use num::Complex;
use planes::{polar_to_rect, PlaneMapper};

/// Which of a seed's two representations is authoritative.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SeedMode {
    /// The seed is given as real and imaginary parts.
    Rectangular,
    /// The seed is given as a radius and an angle in degrees.
    Polar,
}

/// The initial point of the orbit, in whichever form it was given.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Seed {
    /// A seed given directly as a complex number.
    Rectangular(Complex<f64>),
    /// A seed given as a distance from the origin and an angle.
    Polar {
        /// Distance from the origin.
        radius: f64,
        /// Angle from the positive real axis, in degrees.
        degrees: f64,
    },
}

impl Seed {
    /// Pick one of two representations according to `mode`.  The
    /// other is ignored entirely.
    pub fn select(mode: SeedMode, rect: Complex<f64>, radius: f64, degrees: f64) -> Seed {
        match mode {
            SeedMode::Rectangular => Seed::Rectangular(rect),
            SeedMode::Polar => Seed::Polar { radius, degrees },
        }
    }

    /// The seed as a rectangular complex number.
    pub fn resolve(&self) -> Complex<f64> {
        match *self {
            Seed::Rectangular(z) => z,
            Seed::Polar { radius, degrees } => polar_to_rect(radius, degrees),
        }
    }
}

/// Everything one render pass needs.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderParameters {
    /// The constant of the recurrence z <- z^2 + c.
    pub c: Complex<f64>,
    /// The resolved, rectangular starting point of the orbit.
    pub seed: Complex<f64>,
    /// Upper bound on iterations per pixel and per orbit.
    pub iterations: usize,
    /// Scale factor; larger values magnify the center of the plane.
    pub zoom: f64,
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
    /// Whether the escape field is drawn.
    pub show_field: bool,
    /// Whether the orbit is drawn.
    pub show_orbit: bool,
}

impl RenderParameters {
    /// Validates and assembles a parameter set with both layers shown.
    pub fn new(
        c: Complex<f64>,
        seed: Seed,
        iterations: usize,
        zoom: f64,
        width: usize,
        height: usize,
    ) -> Result<Self, ParameterError> {
        if iterations == 0 {
            return Err(ParameterError::NoIterations);
        }
        if !(zoom > 0.0 && zoom.is_finite()) {
            return Err(ParameterError::BadZoom(zoom));
        }
        if width == 0 || height == 0 {
            return Err(ParameterError::EmptyCanvas(width, height));
        }
        Ok(RenderParameters {
            c,
            seed: seed.resolve(),
            iterations,
            zoom,
            width,
            height,
            show_field: true,
            show_orbit: true,
        })
    }

    /// Turn the escape field layer on or off.
    pub fn with_field(mut self, show: bool) -> Self {
        self.show_field = show;
        self
    }

    /// Turn the orbit layer on or off.
    pub fn with_orbit(mut self, show: bool) -> Self {
        self.show_orbit = show;
        self
    }

    /// The coordinate mapper for this canvas and zoom.
    pub fn mapper(&self) -> PlaneMapper {
        PlaneMapper::new(self.width, self.height, self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_iterations() {
        let p = RenderParameters::new(Complex::new(0.0, 0.0), Seed::Rectangular(Complex::new(0.0, 0.0)), 0, 1.0, 10, 10);
        assert_eq!(p, Err(ParameterError::NoIterations));
    }

    #[test]
    fn rejects_bad_zoom() {
        let seed = Seed::Rectangular(Complex::new(0.0, 0.0));
        for zoom in &[0.0, -1.5, ::std::f64::INFINITY] {
            let p = RenderParameters::new(Complex::new(0.0, 0.0), seed, 10, *zoom, 10, 10);
            assert_eq!(p, Err(ParameterError::BadZoom(*zoom)));
        }
        let p = RenderParameters::new(Complex::new(0.0, 0.0), seed, 10, ::std::f64::NAN, 10, 10);
        assert!(p.is_err());
    }

    #[test]
    fn rejects_empty_canvas() {
        let seed = Seed::Rectangular(Complex::new(0.0, 0.0));
        let p = RenderParameters::new(Complex::new(0.0, 0.0), seed, 10, 1.0, 0, 10);
        assert_eq!(p, Err(ParameterError::EmptyCanvas(0, 10)));
    }

    #[test]
    fn polar_seed_is_resolved_once() {
        let seed = Seed::Polar { radius: 2.0, degrees: 90.0 };
        let p = RenderParameters::new(Complex::new(0.0, 0.0), seed, 10, 1.0, 10, 10).unwrap();
        assert!(p.seed.re.abs() < 1e-12);
        assert!((p.seed.im - 2.0).abs() < 1e-12);
        assert!(p.show_field && p.show_orbit);
    }

    #[test]
    fn mode_decides_which_representation_counts() {
        let rect = Complex::new(0.25, -0.5);
        assert_eq!(Seed::select(SeedMode::Rectangular, rect, 3.0, 10.0), Seed::Rectangular(rect));
        assert_eq!(
            Seed::select(SeedMode::Polar, rect, 3.0, 10.0),
            Seed::Polar { radius: 3.0, degrees: 10.0 }
        );
    }

    #[test]
    fn toggles() {
        let seed = Seed::Rectangular(Complex::new(0.0, 0.0));
        let p = RenderParameters::new(Complex::new(0.0, 0.0), seed, 10, 1.0, 10, 10)
            .unwrap()
            .with_field(false)
            .with_orbit(false);
        assert!(!p.show_field && !p.show_orbit);
    }
}
