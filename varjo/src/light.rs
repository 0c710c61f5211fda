use crate::math::{Point3, Spectrum};

/// A point light with constant/linear/quadratic distance falloff.
#[derive(Clone, Debug)]
pub struct Light {
    pub colour: Spectrum<f64>,
    pub position: Point3<f64>,
    pub falloff: [f64; 3],
}

impl Light {
    pub fn new(colour: Spectrum<f64>, position: Point3<f64>, falloff: [f64; 3]) -> Self {
        Self {
            colour,
            position,
            falloff,
        }
    }

    /// The light's colour as seen from `dist` away.
    pub fn attenuated(&self, dist: f64) -> Spectrum<f64> {
        let div = self.falloff[0] + self.falloff[1] * dist + self.falloff[2] * dist * dist;
        self.colour / div
    }
}

/// The full lighting setup for a render.
#[derive(Clone, Debug)]
pub struct Lighting {
    pub ambient: Spectrum<f64>,
    pub lights: Vec<Light>,
}
