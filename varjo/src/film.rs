use serde::{Deserialize, Serialize};

use crate::math::{Point2, Spectrum, Vec2};

/// Resolution of the output image.
#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
pub struct FilmSettings {
    pub res: Vec2<u32>,
}

impl Default for FilmSettings {
    fn default() -> Self {
        Self {
            res: Vec2::new(512, 512),
        }
    }
}

/// The rendered image, pixels in row-major order with `(0, 0)` at the top
/// left.
#[derive(Clone, Debug)]
pub struct Film {
    res: Vec2<u32>,
    pixels: Vec<Spectrum<f64>>,
}

impl Film {
    /// Creates a new black `Film` at the given resolution.
    pub fn new(res: Vec2<u32>) -> Self {
        Self {
            res,
            pixels: vec![Spectrum::zeros(); (res.x as usize) * (res.y as usize)],
        }
    }

    pub fn res(&self) -> Vec2<u32> {
        self.res
    }

    pub fn pixels(&self) -> &[Spectrum<f64>] {
        &self.pixels
    }

    pub fn pixel(&self, p: Point2<u32>) -> Spectrum<f64> {
        debug_assert!(p.x < self.res.x && p.y < self.res.y);
        self.pixels[(p.y as usize) * (self.res.x as usize) + (p.x as usize)]
    }

    pub fn set_pixel(&mut self, p: Point2<u32>, value: Spectrum<f64>) {
        debug_assert!(p.x < self.res.x && p.y < self.res.y);
        self.pixels[(p.y as usize) * (self.res.x as usize) + (p.x as usize)] = value;
    }

    /// Replaces one full row of pixels. `row` must match the film width.
    pub fn set_row(&mut self, y: u32, row: &[Spectrum<f64>]) {
        debug_assert!(y < self.res.y);
        debug_assert!(row.len() == self.res.x as usize);
        let start = (y as usize) * (self.res.x as usize);
        self.pixels[start..start + row.len()].copy_from_slice(row);
    }
}
