//! Named parameter bundles that make good pictures.  The renderer
//! itself knows nothing about these; they are resolved into plain
//! `RenderParameters` before a render starts.

use errors::{ParameterError, PresetError};
use num::Complex;
use params::{RenderParameters, Seed, SeedMode};

/// A complete set of picture parameters except the canvas size and the
/// layer toggles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Preset {
    /// The name the preset is looked up by.
    pub name: &'static str,
    /// The constant of the recurrence.
    pub c: Complex<f64>,
    /// Which of the two seed representations is used.
    pub mode: SeedMode,
    /// Seed in rectangular form.
    pub rect: Complex<f64>,
    /// Seed radius, for polar mode.
    pub radius: f64,
    /// Seed angle in degrees, for polar mode.
    pub degrees: f64,
    /// Iteration bound.
    pub iterations: usize,
    /// Zoom factor.
    pub zoom: f64,
}

static PRESETS: [Preset; 6] = [
    Preset {
        name: "Dendrite Spiral",
        c: Complex { re: -0.8, im: 0.156 },
        mode: SeedMode::Rectangular,
        rect: Complex { re: 0.0, im: 0.0 },
        radius: 0.0,
        degrees: 0.0,
        iterations: 1200,
        zoom: 2.5,
    },
    Preset {
        name: "Petal Loops",
        c: Complex { re: -0.4, im: 0.6 },
        mode: SeedMode::Rectangular,
        rect: Complex { re: -0.2, im: 0.3 },
        radius: 0.0,
        degrees: 0.0,
        iterations: 1000,
        zoom: 3.0,
    },
    Preset {
        name: "Filament Weave",
        c: Complex { re: -0.123, im: 0.745 },
        mode: SeedMode::Rectangular,
        rect: Complex { re: 0.1, im: 0.1 },
        radius: 0.0,
        degrees: 0.0,
        iterations: 1000,
        zoom: 2.5,
    },
    Preset {
        name: "Butterfly Swirl",
        c: Complex { re: 0.285, im: 0.0 },
        mode: SeedMode::Rectangular,
        rect: Complex { re: -0.5, im: 0.5 },
        radius: 0.0,
        degrees: 0.0,
        iterations: 800,
        zoom: 2.0,
    },
    Preset {
        name: "Dragon Tendrils",
        c: Complex { re: -0.70176, im: -0.3842 },
        mode: SeedMode::Rectangular,
        rect: Complex { re: 0.3, im: 0.3 },
        radius: 0.0,
        degrees: 0.0,
        iterations: 1200,
        zoom: 3.0,
    },
    Preset {
        name: "Polar Spiral",
        c: Complex { re: 0.285, im: 0.01 },
        mode: SeedMode::Polar,
        rect: Complex { re: 0.0, im: 0.0 },
        radius: 0.8,
        degrees: 45.0,
        iterations: 1000,
        zoom: 2.5,
    },
];

/// Every known preset, in display order.
pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Look a preset up by its exact name.
pub fn find(name: &str) -> Result<&'static Preset, PresetError> {
    PRESETS
        .iter()
        .find(|preset| preset.name == name)
        .ok_or_else(|| PresetError::Unknown(name.to_string()))
}

impl Preset {
    /// The seed this preset's mode selects.
    pub fn seed(&self) -> Seed {
        Seed::select(self.mode, self.rect, self.radius, self.degrees)
    }

    /// Parameters for this preset on a canvas of the given size, with
    /// both layers shown.
    pub fn parameters(&self, width: usize, height: usize) -> Result<RenderParameters, ParameterError> {
        RenderParameters::new(self.c, self.seed(), self.iterations, self.zoom, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_by_exact_name() {
        let preset = find("Petal Loops").unwrap();
        assert_eq!(preset.c, Complex::new(-0.4, 0.6));
        assert_eq!(preset.iterations, 1000);
        assert_eq!(find("petal loops"), Err(PresetError::Unknown("petal loops".to_string())));
        assert!(find("").is_err());
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in presets().iter().enumerate() {
            for b in &presets()[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
        assert_eq!(presets().len(), 6);
    }

    #[test]
    fn polar_preset_resolves_through_polar_form() {
        let p = find("Polar Spiral").unwrap().parameters(600, 600).unwrap();
        let leg = 0.8 * ::std::f64::consts::FRAC_1_SQRT_2;
        assert!((p.seed.re - leg).abs() < 1e-12);
        assert!((p.seed.im - leg).abs() < 1e-12);
    }

    #[test]
    fn every_preset_is_renderable() {
        for preset in presets() {
            let p = preset.parameters(600, 600).unwrap();
            assert!(p.show_field && p.show_orbit);
            assert_eq!(p.zoom, preset.zoom);
            assert_eq!(p.seed, preset.seed().resolve());
        }
    }
}
