use crate::math::Spectrum;

/// A Phong surface description. Shared between geometry nodes through `Arc`,
/// never mutated during a render.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Diffuse reflectance
    pub diffuse: Spectrum<f64>,
    /// Specular reflectance
    pub specular: Spectrum<f64>,
    /// Phong exponent
    pub shininess: f64,
}

impl Material {
    pub fn new(diffuse: Spectrum<f64>, specular: Spectrum<f64>, shininess: f64) -> Self {
        Self {
            diffuse,
            specular,
            shininess,
        }
    }

    /// The material substituted on picked geometry when highlighting is
    /// requested for a render.
    pub fn highlight() -> Self {
        Self {
            diffuse: Spectrum::new(1.0, 0.6, 0.1),
            specular: Spectrum::new(0.5, 0.5, 0.5),
            shininess: 25.0,
        }
    }
}
