//! Process-wide constants of the packing and of its animation.

use {
  anyhow::{ensure, Result},
  image::Rgba
};

/// How the linearly mapped branching factor is turned into a child count.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BranchRounding {
  /// Round half away from zero
  #[default]
  Nearest,
  /// Round toward negative infinity, biasing towards fewer children
  Floor,
}

impl BranchRounding {
  pub fn apply(self, value: f32) -> f32 {
    match self {
      BranchRounding::Nearest => value.round(),
      BranchRounding::Floor => value.floor(),
    }
  }
}

/// Immutable configuration, threaded explicitly into the generator and the animator.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
  // === Subdivision ===
  /// Child radius is `parent.radius / ratio`
  pub ratio: f32,
  /// Circles with `radius <= min_radius` are leaves
  pub min_radius: f32,
  /// Circles with `depth >= max_depth` are leaves
  pub max_depth: u32,
  /// Child count of the brightest regions
  pub min_branching: usize,
  /// Child count of the darkest regions
  pub max_branching: usize,
  pub rounding: BranchRounding,
  /// Angular offset of each generation, radians per depth level
  pub angle_step: f32,

  // === Animation ===
  /// Seconds a circle takes to grow from nothing to its full radius
  pub growth_duration: f32,
  /// Seconds to hold after every depth finished growing
  pub idle_time: f32,
  /// Zoom factor reached at the end of the lifetime, starting from 1
  pub max_zoom: f32,
  /// Nominal frames per second of the frame clock
  pub frame_rate: f32,

  // === Palette ===
  /// HSB saturation, 0-100
  pub saturation: f32,
  /// HSB brightness, 0-100
  pub brightness: f32,
  /// Fill alpha, 0-1
  pub alpha: f32,
  pub background: Rgba<u8>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      ratio: 2.0,
      min_radius: 1.0,
      max_depth: 10,
      min_branching: 3,
      max_branching: 8,
      rounding: BranchRounding::Nearest,
      angle_step: 0.1,

      growth_duration: 0.5,
      idle_time: 5.0,
      max_zoom: 1.5,
      frame_rate: 60.0,

      saturation: 80.0,
      brightness: 100.0,
      alpha: 0.05,
      background: Rgba([255, 255, 255, 255]),
    }}}

impl Config {
  /// The instant by which every possible depth has finished growing.
  pub fn total_growth_time(&self) -> f32 {
    (self.max_depth + 1) as f32 * self.growth_duration
  }

  /// Total duration of the animation.
  pub fn lifetime(&self) -> f32 {
    self.total_growth_time() + self.idle_time
  }

  pub fn birth_time(&self, depth: u32) -> f32 {
    depth as f32 * self.growth_duration
  }

  pub fn validate(self) -> Result<Self> {
    ensure!(self.growth_duration.is_finite() && self.growth_duration > 0.0,
      "growth duration must be positive, got {}", self.growth_duration);
    ensure!(self.idle_time.is_finite() && self.idle_time >= 0.0,
      "idle time must be non-negative, got {}", self.idle_time);
    ensure!(self.ratio > 1.0,
      "subdivision ratio must exceed 1, got {}", self.ratio);
    ensure!(self.min_radius >= 0.0,
      "minimum radius must be non-negative, got {}", self.min_radius);
    ensure!(self.min_branching > 0,
      "minimum branching factor must be at least 1");
    ensure!(self.min_branching <= self.max_branching,
      "branching range is empty: {}..={}", self.min_branching, self.max_branching);
    ensure!(self.frame_rate > 0.0,
      "frame rate must be positive, got {}", self.frame_rate);
    ensure!((0.0..=1.0).contains(&self.alpha),
      "alpha must lie in [0, 1], got {}", self.alpha);
    Ok(self)
  }
}
