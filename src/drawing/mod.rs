//! [`Canvas`](crate::canvas::Canvas) backed by an in-memory RGBA framebuffer.

use {
  crate::geometry::{CanvasSpace, PixelSpace},
  euclid::{Box2D, Size2D, Transform2D},
  image::{Pixel, Rgba, RgbaImage}
};

mod impl_canvas_rgbaimage;

pub struct RasterCanvas {
  image: RgbaImage,
  transform: Transform2D<f32, CanvasSpace, CanvasSpace>,
  /// Uniform scale factor of `transform`
  scale: f32,
  stopped: bool,
}

impl RasterCanvas {
  /// Transparent black framebuffer, identity transform.
  pub fn new(width: u32, height: u32) -> Self {
    RasterCanvas {
      image: RgbaImage::new(width, height),
      transform: Transform2D::identity(),
      scale: 1.0,
      stopped: false
    }
  }

  pub fn resolution(&self) -> Size2D<u32, PixelSpace> {
    self.image.dimensions().into()
  }

  pub fn image(&self) -> &RgbaImage {
    &self.image
  }

  pub fn into_image(self) -> RgbaImage {
    self.image
  }

  /// Whether the animator asked to stop.
  pub fn is_stopped(&self) -> bool {
    self.stopped
  }
}

// pixels of the framebuffer covered by `bounding_box`, if any
fn clip(
  bounding_box: Box2D<f32, CanvasSpace>,
  resolution: Size2D<u32, PixelSpace>
) -> Option<Box2D<u32, PixelSpace>> {
  bounding_box
    .cast_unit()
    .round_out()
    .intersection(&Box2D::from_size(resolution.to_f32()))
    .map(|x| x.to_u32())
}

/// Blend `fill` over `base`, weighting its alpha by the pixel coverage of the shape.
/// `sdf` is the signed distance from the pixel center, in pixels.
fn sdf_overlay_aa(sdf: f32, mut base: Rgba<u8>, mut fill: Rgba<u8>) -> Rgba<u8> {
  let coverage = (0.5 - sdf) // antialias
    .clamp(0.0, 1.0);
  fill.0[3] = ((fill.0[3] as f32) * coverage).round() as u8;
  base.blend(&fill);
  base
}
