use {
  super::*,
  crate::{config::BranchRounding, geometry::P2},
  image::{GrayImage, Luma},
  proptest::prelude::*
};

fn gradient(width: u32, height: u32) -> GrayImage {
  GrayImage::from_fn(width, height, |x, y| Luma([((x * 7 + y * 3) % 256) as u8]))
}

fn canvas(image: &GrayImage) -> Size2D<f32, CanvasSpace> {
  Size2D::new(image.width() as f32, image.height() as f32)
}

#[test] fn deterministic() {
  let image = gradient(160, 120);
  let config = Config::default();
  let a = generate(canvas(&image), &image, &config);
  let b = generate(canvas(&image), &image, &config);
  assert!(a.len() > 1);
  assert_eq!(a, b);
}

#[test] fn root_covers_canvas() {
  let image = gradient(160, 120);
  let packing = generate(canvas(&image), &image, &Config::default());
  assert_eq!(packing[0], Circle { center: P2::new(80.0, 60.0), radius: 60.0, depth: 0 });
}

#[test] fn geometric_decay() {
  let image = gradient(128, 128);
  let config = Config { ratio: 3.0, ..Default::default() };
  let packing = generate(canvas(&image), &image, &config);

  for (i, parent) in packing.iter().enumerate() {
    let offset = parent.radius - parent.radius / config.ratio;
    for child in packing.children(i) {
      assert_eq!(child.depth, parent.depth + 1);
      assert!((child.radius - parent.radius / config.ratio).abs() < 1e-5);
      let distance = (child.center - parent.center).length();
      assert!((distance - offset).abs() < 1e-3, "{} != {}", distance, offset);
    }
  }
}

#[test] fn depth_bound() {
  let image = GrayImage::new(512, 512);
  let config = Config { max_depth: 4, min_radius: 0.0, ..Default::default() };
  let packing = generate(canvas(&image), &image, &config);
  assert!(packing.iter().all(|circle| circle.depth <= config.max_depth));
  assert!(packing.iter().any(|circle| circle.depth == config.max_depth));
}

#[test] fn leaves_follow_stop_condition() {
  let image = gradient(200, 200);
  let config = Config::default();
  let packing = generate(canvas(&image), &image, &config);

  for (i, circle) in packing.iter().enumerate() {
    let n = packing.branch_count(i);
    if circle.radius > config.min_radius && circle.depth < config.max_depth {
      assert!((config.min_branching..=config.max_branching).contains(&n), "{}", n);
    } else {
      assert_eq!(n, 0);
    }
  }
}

#[test] fn breadth_first_order() {
  let image = gradient(100, 100);
  let packing = generate(canvas(&image), &image, &Config::default());
  assert!(packing.windows(2).all(|w| w[0].depth <= w[1].depth));
}

#[test] fn child_angles() {
  let image = GrayImage::new(100, 100);
  let config = Config { max_depth: 2, ..Default::default() };
  let packing = generate(canvas(&image), &image, &config);

  // first child of the root sits at angle 0, to the right of the center
  let first = packing.children(0)[0];
  assert!((first.center - P2::new(75.0, 50.0)).length() < 1e-4);

  // second generation is rotated by `angle_step`
  let parent = packing.children(0)[0];
  let child = packing.children(1)[0];
  let angle = (child.center - parent.center).angle_from_x_axis().radians;
  assert!((angle - config.angle_step).abs() < 1e-4, "{}", angle);
}

#[test] fn inverse_brightness() {
  let config = Config::default();
  assert!(branching_factor(0.1, &config) >= branching_factor(0.9, &config));
  assert_eq!(branching_factor(0.0, &config), config.max_branching);
  assert_eq!(branching_factor(1.0, &config), config.min_branching);
  assert_eq!(branching_factor(0.5, &config), 6);
  let floor = Config { rounding: BranchRounding::Floor, ..config };
  assert_eq!(branching_factor(0.5, &floor), 5);

  let [dark, bright] = [25u8, 230].map(|value| {
    let image = GrayImage::from_pixel(64, 64, Luma([value]));
    let config = Config { max_depth: 1, ..Default::default() };
    generate(canvas(&image), &image, &config).branch_count(0)
  });
  assert!(dark > bright, "{} <= {}", dark, bright);
}

#[test] fn black_square() {
  let image = GrayImage::from_pixel(100, 100, Luma([0]));

  let config = Config { max_depth: 1, ..Default::default() };
  let packing = generate(canvas(&image), &image, &config);
  assert_eq!(packing.len(), 8 + 1);

  // radii 50, 25, 12.5, 6.25, 3.125, 1.5625 subdivide, 0.78125 stops
  let packing = generate(canvas(&image), &image, &Config::default());
  let stats = packing.stats();
  assert_eq!(stats.per_depth, vec![1, 8, 64, 512, 4096, 32768, 262144]);
  assert_eq!(stats.total, (8usize.pow(7) - 1) / 7);
  assert_eq!(stats.leaves, 262144);
  assert!((0..packing.len()).all(|i| matches!(packing.branch_count(i), 0 | 8)));
}

#[test] fn outside_image_branches_most() {
  // sampler falls back to 0 when the canvas exceeds the image
  let image = GrayImage::from_pixel(4, 4, Luma([255]));
  let config = Config { max_depth: 1, ..Default::default() };
  let packing = generate(Size2D::new(400.0, 400.0), &image, &config);
  assert_eq!(packing.branch_count(0), config.max_branching);
}

proptest! {
  #[test] fn branching_within_bounds(
    intensity in 0.0f32..=1.0,
    min in 1usize..16,
    extra in 0usize..16
  ) {
    let config = Config { min_branching: min, max_branching: min + extra, ..Default::default() };
    let n = branching_factor(intensity, &config);
    prop_assert!(n >= config.min_branching && n <= config.max_branching);
  }

  #[test] fn branching_is_monotone(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
    let config = Config::default();
    let (dark, bright) = if a <= b { (a, b) } else { (b, a) };
    prop_assert!(branching_factor(dark, &config) >= branching_factor(bright, &config));
  }
}
