//! Time-driven growth of a [`Packing`], one depth level after another.
//!
//! A circle of depth `d` is born at `d * growth_duration` and grows linearly to its full radius
//! over the next `growth_duration` seconds. Meanwhile the whole canvas zooms from `1` to
//! [`Config::max_zoom`] about its center. Everything is a pure function of the elapsed time,
//! so any instant can be rendered on its own.

use {
  crate::{
    canvas::{Canvas, Color, Hsba},
    config::Config,
    generator::Packing,
    geometry::Circle,
    util::map_range
  }
};


/// Per-circle state at a given instant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Growth {
  Unborn,
  /// Fraction of the full radius, in `[0, 1)`
  Growing(f32),
  FullyGrown,
}

impl Growth {
  pub fn progress(self) -> f32 {
    match self {
      Growth::Unborn => 0.0,
      Growth::Growing(progress) => progress,
      Growth::FullyGrown => 1.0,
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameStatus {
  Continue,
  /// The lifetime is over; the host must stop requesting frames. Reported once.
  Finished,
  /// A frame requested after [`FrameStatus::Finished`]; nothing was drawn.
  Stopped,
}

/// Frame counter of the host loop, converted to elapsed seconds at a nominal frame rate.
#[derive(Debug, Copy, Clone)]
pub struct FrameClock {
  pub frame_count: u64,
  pub frame_rate: f32,
}

impl FrameClock {
  pub fn new(frame_rate: f32) -> Self {
    FrameClock { frame_count: 0, frame_rate }
  }

  /// Advance to the next frame, returning its elapsed time. The first frame is frame `1`.
  pub fn tick(&mut self) -> f32 {
    self.frame_count += 1;
    self.elapsed()
  }

  pub fn elapsed(&self) -> f32 {
    self.frame_count as f32 / self.frame_rate
  }
}

pub struct Animator<'a> {
  packing: &'a Packing,
  config: Config,
  finished: bool,
}

impl<'a> Animator<'a> {
  pub fn new(packing: &'a Packing, config: Config) -> Self {
    Animator { packing, config, finished: false }
  }

  pub fn is_finished(&self) -> bool {
    self.finished
  }

  /// Camera zoom, `1` at `t = 0` and `max_zoom` at the end of the lifetime.
  pub fn zoom(&self, elapsed: f32) -> f32 {
    map_range(elapsed, 0.0, self.config.lifetime(), 1.0, self.config.max_zoom)
  }

  pub fn growth(&self, depth: u32, elapsed: f32) -> Growth {
    let birth = self.config.birth_time(depth);
    if elapsed < birth {
      return Growth::Unborn;
    }
    let progress = ((elapsed - birth) / self.config.growth_duration).clamp(0.0, 1.0);
    if progress >= 1.0 { Growth::FullyGrown } else { Growth::Growing(progress) }
  }

  /// Radius drawn at `elapsed`, `None` while there is nothing to draw.
  pub fn current_radius(&self, circle: &Circle, elapsed: f32) -> Option<f32> {
    let radius = circle.radius * self.growth(circle.depth, elapsed).progress();
    (radius > 0.0).then(|| radius)
  }

  /// Hue walks the color wheel from the root to `max_depth`.
  pub fn color(&self, depth: u32) -> Hsba {
    let hue = if self.config.max_depth == 0 {
      0.0
    } else {
      map_range(depth as f32, 0.0, self.config.max_depth as f32, 0.0, 360.0)
    };
    Hsba {
      hue,
      saturation: self.config.saturation,
      brightness: self.config.brightness,
      alpha: self.config.alpha
    }
  }

  /// Render the state at `elapsed` seconds.
  ///
  /// The first frame past the lifetime is still drawn, then the canvas is told to stop and
  /// [`FrameStatus::Finished`] is returned. Later calls leave the canvas untouched.
  pub fn frame(&mut self, canvas: &mut impl Canvas, elapsed: f32) -> FrameStatus {
    if self.finished {
      return FrameStatus::Stopped;
    }

    canvas.background(Color::Rgba(self.config.background));
    let size = canvas.size();
    canvas.set_zoom((size / 2.0).to_vector().to_point(), self.zoom(elapsed));

    let mut drawn = 0usize;
    for circle in self.packing.iter() {
      if let Some(radius) = self.current_radius(circle, elapsed) {
        canvas.fill_circle(circle.center, radius, Color::Hsba(self.color(circle.depth)));
        drawn += 1;
      }
    }
    log::trace!("t = {:.3}s, {} circles drawn", elapsed, drawn);

    if elapsed > self.config.lifetime() {
      self.finished = true;
      canvas.stop();
      FrameStatus::Finished
    } else {
      FrameStatus::Continue
    }
  }
}
