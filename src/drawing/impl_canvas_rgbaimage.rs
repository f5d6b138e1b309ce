use {
  super::{clip, sdf_overlay_aa, RasterCanvas},
  crate::{
    canvas::{Canvas, Color},
    geometry::{BoundingBox, CanvasSpace, Circle, P2},
    sdf::SDF
  },
  euclid::{Size2D, Transform2D}
};

impl Canvas for RasterCanvas {
  fn size(&self) -> Size2D<f32, CanvasSpace> {
    self.resolution().to_f32().cast_unit()
  }

  fn background(&mut self, color: Color) {
    let mut color = color.to_rgba();
    color.0[3] = 255;
    self.image.pixels_mut().for_each(|pixel| *pixel = color);
  }

  fn set_zoom(&mut self, center: P2, factor: f32) {
    self.transform = Transform2D::translation(-center.x, -center.y)
      .then_scale(factor, factor)
      .then_translate(center.to_vector());
    self.scale = factor;
  }

  fn fill_circle(&mut self, center: P2, radius: f32, color: Color) {
    let circle = Circle {
      center: self.transform.transform_point(center),
      radius: radius * self.scale,
      depth: 0
    };
    let bounding_box = match clip(circle.bounding_box(), self.resolution()) {
      Some(x) => x,
      None => return // no intersection with the framebuffer at all
    };
    let fill = color.to_rgba();

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .for_each(|(y, x)| {
        let pixel_center = P2::new(x as f32 + 0.5, y as f32 + 0.5);
        let pixel = self.image.get_pixel_mut(x, y);
        *pixel = sdf_overlay_aa(circle.sdf(pixel_center), *pixel, fill);
      });
  }

  fn stop(&mut self) {
    self.stopped = true;
  }
}
