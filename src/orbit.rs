//! The orbit of a single seed point under z <- z^2 + c, in the order
//! the recurrence visits it.

use num::Complex;

use params::RenderParameters;
use planes::CanvasPoint;

/// Squared magnitude past which the orbit is no longer followed.  Much
/// larger than the escape circle, so a diverging orbit still shows a
/// few steps of its flight before it is cut off.
pub const DIVERGENCE_NORM_SQR: f64 = 1e6;

/// One visited point of the orbit and where it lands on the canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrbitStep {
    /// The value of z at this step.
    pub point: Complex<f64>,
    /// `point` mapped onto the canvas.
    pub position: CanvasPoint,
}

/// The visited points, first to last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrbitPath {
    /// Steps in iteration order.
    pub steps: Vec<OrbitStep>,
}

impl OrbitPath {
    /// Number of steps on the path.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True for the path of a zero iteration bound.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The canvas positions, ready to be joined with straight lines.
    pub fn positions(&self) -> Vec<CanvasPoint> {
        self.steps.iter().map(|step| step.position).collect()
    }
}

/// Follow the seed for at most `iterations` steps, stopping once the
/// orbit passes `DIVERGENCE_NORM_SQR`.  The point that crossed the
/// bound is not recorded.
pub fn trace_orbit(params: &RenderParameters) -> OrbitPath {
    let plane = params.mapper();
    let mut steps = Vec::with_capacity(params.iterations.min(4096));
    let mut z = params.seed;
    for _ in 0..params.iterations {
        steps.push(OrbitStep {
            point: z,
            position: plane.point_to_pixel(&z),
        });
        z = Complex::new(z.re * z.re - z.im * z.im + params.c.re, 2.0 * z.re * z.im + params.c.im);
        if z.norm_sqr() > DIVERGENCE_NORM_SQR {
            break;
        }
    }
    debug!("orbit of {} has {} steps", params.seed, steps.len());
    OrbitPath { steps }
}
