use serde::{Deserialize, Serialize};

use crate::{
    film::FilmSettings,
    math::{transforms::look_at, Point2, Point3, Ray, Transform, Vec3},
};

/// User-facing camera placement and projection inputs.
#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
pub struct CameraParameters {
    /// Eye position in world space
    pub position: Point3<f64>,
    /// View direction, need not be normalized
    pub view: Vec3<f64>,
    /// Up hint, need not be normalized or orthogonal to `view`
    pub up: Vec3<f64>,
    /// Full vertical field of view in degrees
    pub fov_degrees: f64,
}

impl Default for CameraParameters {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 0.0),
            view: Vec3::new(0.0, 0.0, 1.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_degrees: 50.0,
        }
    }
}

/// A pinhole projection fixed to a film resolution, generating world-space
/// primary rays.
pub struct Camera {
    camera_to_world: Transform<f64>,
    position: Point3<f64>,
    tan_half_fov: f64,
    aspect: f64,
    width: f64,
    height: f64,
}

impl Camera {
    pub fn new(parameters: &CameraParameters, film_settings: &FilmSettings) -> Self {
        let camera_to_world = look_at(
            parameters.position,
            parameters.position + parameters.view,
            parameters.up,
        )
        .inverted();

        Self {
            camera_to_world,
            position: parameters.position,
            tan_half_fov: (parameters.fov_degrees.to_radians() / 2.0).tan(),
            aspect: (film_settings.res.x as f64) / (film_settings.res.y as f64),
            width: film_settings.res.x as f64,
            height: film_settings.res.y as f64,
        }
    }

    /// The primary ray through the center of pixel `p`. The direction is
    /// normalized.
    pub fn ray(&self, p: Point2<u32>) -> Ray<f64> {
        // Pixel center in NDC, then out to the unit-distance image plane
        let px = (2.0 * ((p.x as f64) + 0.5) / self.width - 1.0) * self.tan_half_fov * self.aspect;
        let py = (1.0 - 2.0 * ((p.y as f64) + 0.5) / self.height) * self.tan_half_fov;

        let d = &self.camera_to_world * Vec3::new(px, py, 1.0);
        Ray::new(self.position, d.normalized())
    }
}
