//! Breadth-first subdivision of the canvas into nested circles.
//!
//! Starting from the largest circle centered on the canvas, every circle that is both larger
//! than [`Config::min_radius`] and shallower than [`Config::max_depth`] is replaced by `N`
//! children of radius `radius / ratio`, placed evenly on its rim. `N` is chosen from the
//! average brightness under the circle, darker regions receiving more children.
//!
//! ```
//! # use circle_mandala::{config::Config, generator::generate};
//! # use image::{GrayImage, Luma};
//! # use euclid::Size2D;
//! let image = GrayImage::from_pixel(100, 100, Luma([0]));
//! let config = Config { max_depth: 1, ..Default::default() };
//! let packing = generate(Size2D::new(100.0, 100.0), &image, &config);
//! // a black image always takes the maximal branching factor
//! assert_eq!(packing.len(), 1 + 8);
//! assert_eq!(packing.children(0).len(), 8);
//! ```

use {
  crate::{
    config::Config,
    geometry::{CanvasSpace, Circle},
    sampler::{self, Brightness},
    util::map_range
  },
  euclid::Size2D,
  std::{
    collections::VecDeque,
    f32::consts::TAU,
    fmt::{Debug, Formatter},
    ops::Deref
  }
};

#[cfg(test)] mod tests;

/// The generated circles, in breadth-first discovery order.
///
/// Immutable once built; share it by reference with the animator.
#[derive(Clone, PartialEq)]
pub struct Packing {
  circles: Box<[Circle]>,
  /// `children(i) == circles[offsets[i]..offsets[i + 1]]`
  offsets: Box<[usize]>,
}

impl Packing {
  pub fn circles(&self) -> &[Circle] {
    &self.circles
  }

  /// Children of the circle at `index`, empty for leaves.
  pub fn children(&self, index: usize) -> &[Circle] {
    &self.circles[self.offsets[index]..self.offsets[index + 1]]
  }

  pub fn branch_count(&self, index: usize) -> usize {
    self.offsets[index + 1] - self.offsets[index]
  }

  pub fn stats(&self) -> PackingStats {
    let max_depth = self.circles.iter()
      .map(|circle| circle.depth)
      .max()
      .unwrap_or(0);
    let mut per_depth = vec![0usize; max_depth as usize + 1];
    self.circles.iter()
      .for_each(|circle| per_depth[circle.depth as usize] += 1);
    let leaves = (0..self.circles.len())
      .filter(|&i| self.branch_count(i) == 0)
      .count();
    PackingStats {
      total: self.circles.len(),
      leaves,
      per_depth,
      size: std::mem::size_of::<Self>()
        + std::mem::size_of_val(&*self.circles)
        + std::mem::size_of_val(&*self.offsets)
    }
  }
}

impl Deref for Packing {
  type Target = [Circle];

  fn deref(&self) -> &Self::Target {
    &self.circles
  }
}

impl Debug for Packing {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Packing")
      .field("circles", &self.circles.len())
      .finish()
  }
}

pub struct PackingStats {
  pub total: usize,
  pub leaves: usize,
  /// Circle count at each depth, starting from the root
  pub per_depth: Vec<usize>,
  /// Bytes held by the packing
  pub size: usize,
}

impl Debug for PackingStats {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    use humansize::{FileSize, file_size_opts as options};

    f.debug_struct("PackingStats")
      .field("total", &self.total)
      .field("leaves", &self.leaves)
      .field("per_depth", &self.per_depth)
      .field("size", &self.size.file_size(options::BINARY).unwrap_or_else(|e| e))
      .finish()
  }
}

/// Child count of a circle over a region of the given intensity.
///
/// Maps intensity `0` to `max_branching` and `1` to `min_branching`, rounds according to
/// [`Config::rounding`], and keeps the result within the branching range.
pub fn branching_factor(intensity: f32, config: &Config) -> usize {
  let n = map_range(
    intensity, 0.0, 1.0,
    config.max_branching as f32, config.min_branching as f32
  );
  let n = config.rounding.apply(n).max(0.0) as usize;
  n.max(config.min_branching).min(config.max_branching)
}

fn subdivides(circle: &Circle, config: &Config) -> bool {
  circle.radius > config.min_radius && circle.depth < config.max_depth
}

/// Build the packing of a `size` canvas over `image`.
///
/// Deterministic: identical inputs produce an identical sequence.
pub fn generate<B: Brightness + ?Sized>(
  size: Size2D<f32, CanvasSpace>,
  image: &B,
  config: &Config
) -> Packing {
  let mut circles = vec![];
  let mut offsets = vec![];
  let mut queue = VecDeque::from([Circle::root(size.width, size.height)]);
  // index the next enqueued circle will take in `circles`
  let mut next = 1;

  crate::profile!("generate", while let Some(circle) = queue.pop_front() {
    offsets.push(next);
    circles.push(circle);
    if !subdivides(&circle, config) {
      continue;
    }

    let intensity = sampler::average_intensity(image, circle.center, circle.radius);
    let n = branching_factor(intensity, config);
    let phase = circle.depth as f32 * config.angle_step;
    queue.extend((0..n).map(|i| {
      let theta = TAU * i as f32 / n as f32 + phase;
      circle.child(theta, config.ratio)
    }));
    next += n;
  });
  offsets.push(next);

  log::info!("total circles: {}", circles.len());
  Packing {
    circles: circles.into_boxed_slice(),
    offsets: offsets.into_boxed_slice()
  }
}
