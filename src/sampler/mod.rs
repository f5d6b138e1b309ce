//! Average brightness of disc-shaped regions of the source image.

use {
  crate::geometry::{P2, PixelSpace},
  euclid::{Point2D, Size2D},
  image::{DynamicImage, GenericImageView, ImageBuffer, Pixel},
  std::ops::Deref
};

#[cfg(test)] mod tests;

/// Per-pixel brightness lookup. Callers keep coordinates within [`Brightness::dimensions`].
pub trait Brightness {
  fn dimensions(&self) -> Size2D<u32, PixelSpace>;
  /// Brightness on a `0..=255` scale.
  fn brightness(&self, pixel: Point2D<u32, PixelSpace>) -> u8;
}

/// Samples the first channel: red for RGB(A) buffers, luma for grey ones.
impl <P, C> Brightness for ImageBuffer<P, C>
  where P: Pixel<Subpixel = u8>,
        C: Deref<Target = [u8]>
{
  fn dimensions(&self) -> Size2D<u32, PixelSpace> {
    ImageBuffer::dimensions(self).into()
  }

  fn brightness(&self, pixel: Point2D<u32, PixelSpace>) -> u8 {
    self.get_pixel(pixel.x, pixel.y).channels()[0]
  }
}

impl Brightness for DynamicImage {
  fn dimensions(&self) -> Size2D<u32, PixelSpace> {
    GenericImageView::dimensions(self).into()
  }

  fn brightness(&self, pixel: Point2D<u32, PixelSpace>) -> u8 {
    self.get_pixel(pixel.x, pixel.y).0[0]
  }
}

/// Mean normalized brightness, in `[0, 1]`, of the pixels inside the disc.
///
/// Only the square of half-side `floor(radius)` around the floored center is visited; a pixel
/// counts when it lies within the image and `dx² + dy² <= radius²`. The comparison uses the
/// fractional radius, not `floor(radius)²`, so pixels on the corners of the square are kept
/// whenever the radius reaches them.
/// A disc with no pixel inside the image yields `0`.
pub fn average_intensity<B: Brightness + ?Sized>(image: &B, center: P2, radius: f32) -> f32 {
  let size = image.dimensions();
  let r = radius.floor() as i64;
  let (cx, cy) = (center.x.floor() as i64, center.y.floor() as i64);
  let r_squared = radius as f64 * radius as f64;

  let (sum, count) = itertools::iproduct!(-r..=r, -r..=r)
    .filter(|&(dy, dx)| {
      let (x, y) = (cx + dx, cy + dy);
      (0..size.width as i64).contains(&x)
        && (0..size.height as i64).contains(&y)
        && ((dx * dx + dy * dy) as f64) <= r_squared
    })
    .fold((0.0f64, 0u64), |(sum, count), (dy, dx)| {
      let pixel = Point2D::new((cx + dx) as u32, (cy + dy) as u32);
      (sum + image.brightness(pixel) as f64 / 255.0, count + 1)
    });

  if count > 0 { (sum / count as f64) as f32 } else { 0.0 }
}
