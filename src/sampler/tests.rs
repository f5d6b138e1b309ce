use {
  super::*,
  image::{GrayImage, Luma, Rgba, RgbaImage}
};

fn assert_close(a: f32, b: f32) {
  assert!((a - b).abs() < 1e-6, "{} != {}", a, b);
}

#[test] fn uniform_image() {
  let image = GrayImage::from_pixel(32, 32, Luma([255]));
  assert_close(average_intensity(&image, P2::new(16.0, 16.0), 10.0), 1.0);

  let image = GrayImage::from_pixel(32, 32, Luma([51]));
  assert_close(average_intensity(&image, P2::new(16.0, 16.0), 10.0), 0.2);
}

#[test] fn outside_is_zero() {
  let image = GrayImage::from_pixel(32, 32, Luma([255]));
  assert_eq!(average_intensity(&image, P2::new(-100.0, -100.0), 10.0), 0.0);
  assert_eq!(average_intensity(&image, P2::new(50.0, 16.0), 5.0), 0.0);
}

#[test] fn disc_membership() {
  // bright corners of the 3x3 neighbourhood, outside the unit disc
  let mut image = GrayImage::new(5, 5);
  for (x, y) in [(1, 1), (3, 1), (1, 3), (3, 3)] {
    image.put_pixel(x, y, Luma([255]));
  }
  assert_eq!(average_intensity(&image, P2::new(2.0, 2.0), 1.0), 0.0);
  // sqrt(2) reaches the corners: 4 of 9 pixels are lit
  assert_close(average_intensity(&image, P2::new(2.0, 2.0), 1.5), 4.0 / 9.0);
  // fifth generation of a 100px canvas: floor(r)² alone would drop the lit corners
  assert_close(average_intensity(&image, P2::new(2.0, 2.0), 1.5625), 4.0 / 9.0);
}

#[test] fn center_is_floored() {
  let mut image = GrayImage::new(5, 5);
  image.put_pixel(2, 2, Luma([255]));
  // floor(2.9, 2.1) = (2, 2), the disc of radius 0.5 holds a single pixel
  assert_close(average_intensity(&image, P2::new(2.9, 2.1), 0.5), 1.0);
  assert_eq!(average_intensity(&image, P2::new(3.0, 2.0), 0.5), 0.0);
}

#[test] fn clipped_by_image_bounds() {
  let image = GrayImage::from_pixel(8, 8, Luma([128]));
  // only (0, 0), (1, 0) and (0, 1) lie inside the image
  assert_close(average_intensity(&image, P2::new(0.0, 0.0), 1.0), 128.0 / 255.0);

  let mut image = GrayImage::from_pixel(8, 8, Luma([0]));
  image.put_pixel(0, 0, Luma([255]));
  assert_close(average_intensity(&image, P2::new(0.0, 0.0), 1.0), 1.0 / 3.0);
}

#[test] fn first_channel() {
  let image = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
  assert_close(average_intensity(&image, P2::new(2.0, 2.0), 1.0), 1.0);
  let image = RgbaImage::from_pixel(4, 4, Rgba([0, 255, 255, 255]));
  assert_eq!(average_intensity(&image, P2::new(2.0, 2.0), 1.0), 0.0);

  let dynamic = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([102, 0, 0, 255])));
  assert_close(average_intensity(&dynamic, P2::new(2.0, 2.0), 1.0), 0.4);
}
