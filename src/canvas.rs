//! Drawing surface driven by the animator.

use {
  crate::geometry::{CanvasSpace, P2},
  euclid::Size2D,
  image::Rgba
};

/// Hue/saturation/brightness color with alpha.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsba {
  /// Degrees, wrapped into `[0, 360)`
  pub hue: f32,
  /// 0-100
  pub saturation: f32,
  /// 0-100
  pub brightness: f32,
  /// 0-1
  pub alpha: f32,
}

impl Hsba {
  pub fn to_rgba(self) -> Rgba<u8> {
    let h = self.hue.rem_euclid(360.0);
    let s = (self.saturation / 100.0).clamp(0.0, 1.0);
    let v = (self.brightness / 100.0).clamp(0.0, 1.0);

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h {
      h if h < 60.0 => (c, x, 0.0),
      h if h < 120.0 => (x, c, 0.0),
      h if h < 180.0 => (0.0, c, x),
      h if h < 240.0 => (0.0, x, c),
      h if h < 300.0 => (x, 0.0, c),
      _ => (c, 0.0, x),
    };
    let channel = |value: f32| ((value + m) * 255.0).round() as u8;
    Rgba([
      channel(r),
      channel(g),
      channel(b),
      (self.alpha.clamp(0.0, 1.0) * 255.0).round() as u8
    ])
  }
}

/// Every draw call carries its own color model.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Color {
  Rgba(Rgba<u8>),
  Hsba(Hsba),
}

impl Color {
  pub fn to_rgba(self) -> Rgba<u8> {
    match self {
      Color::Rgba(rgba) => rgba,
      Color::Hsba(hsba) => hsba.to_rgba(),
    }
  }
}

impl From<Rgba<u8>> for Color {
  fn from(rgba: Rgba<u8>) -> Self { Color::Rgba(rgba) } }

impl From<Hsba> for Color {
  fn from(hsba: Hsba) -> Self { Color::Hsba(hsba) } }

pub trait Canvas {
  fn size(&self) -> Size2D<f32, CanvasSpace>;
  /// Clear with an opaque color.
  fn background(&mut self, color: Color);
  /// Replace the current transform with a uniform scale by `factor` about `center`.
  fn set_zoom(&mut self, center: P2, factor: f32);
  /// Fill a disc, under the current transform.
  fn fill_circle(&mut self, center: P2, radius: f32, color: Color);
  /// Stop requesting further frames.
  fn stop(&mut self);
}
