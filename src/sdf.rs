use {
  euclid::Point2D,
  crate::geometry::{CanvasSpace, Circle}
};

/// Signed distance function
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, CanvasSpace>) -> T;
}

impl SDF<f32> for Circle {
  fn sdf(&self, pixel: Point2D<f32, CanvasSpace>) -> f32 {
    (pixel - self.center).length() - self.radius
  }
}
