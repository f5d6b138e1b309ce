//! .
//!
//! The origin of coordinate system is in top-left corner, `y` pointing down. Circles live in
//! [`CanvasSpace`], which shares its scale with the source image: one unit is one pixel.

use euclid::{Point2D, Box2D, Vector2D as V2};

/// Canvas coordinate basis, before the zoom transform
#[derive(Debug, Copy, Clone)]
pub struct CanvasSpace;
/// Integer pixel coordinate basis, of either the source image or the framebuffer
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type P2 = Point2D<f32, CanvasSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// A single disc of the packing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
  pub center: P2,
  pub radius: f32,
  /// Generation index, `0` at the root
  pub depth: u32,
}

impl Circle {
  /// Largest circle centered on a canvas of `width x height`.
  pub fn root(width: f32, height: f32) -> Self {
    Circle {
      center: P2::new(width / 2.0, height / 2.0),
      radius: width.min(height) / 2.0,
      depth: 0
    }
  }

  /// Child of radius `radius / ratio`, touching the rim of `self` from inside, in the direction `theta`.
  pub fn child(&self, theta: f32, ratio: f32) -> Self {
    let radius = self.radius / ratio;
    let offset = self.radius - radius;
    Circle {
      // polar to cartesian
      center: self.center + V2::new(theta.cos(), theta.sin()) * offset,
      radius,
      depth: self.depth + 1
    }
  }
}

impl BoundingBox<f32, CanvasSpace> for Circle {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    Box2D::new(
      self.center - V2::splat(self.radius),
      self.center + V2::splat(self.radius)
    )
  }
}
