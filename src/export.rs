//! Host render loop writing the animation as a numbered PNG sequence.

use {
  crate::{
    animation::{Animator, FrameClock, FrameStatus},
    config::Config,
    drawing::RasterCanvas,
    generator::Packing,
    geometry::PixelSpace
  },
  anyhow::{Context, Result},
  euclid::Size2D,
  image::RgbaImage,
  std::path::{Path, PathBuf}
};

pub fn frame_path(dir: &Path, frame: u64) -> PathBuf {
  dir.join(format!("frame_{:05}.png", frame))
}

/// Frames of the animation, rendered one at a time as they are pulled.
///
/// Yields `(frame number, framebuffer)`, ending after the first frame past the lifetime.
pub struct Frames<'a> {
  animator: Animator<'a>,
  canvas: RasterCanvas,
  clock: FrameClock,
}

impl<'a> Frames<'a> {
  pub fn new(packing: &'a Packing, config: Config, resolution: Size2D<u32, PixelSpace>) -> Self {
    Frames {
      animator: Animator::new(packing, config),
      canvas: RasterCanvas::new(resolution.width, resolution.height),
      clock: FrameClock::new(config.frame_rate)
    }
  }
}

impl Iterator for Frames<'_> {
  type Item = (u64, RgbaImage);

  fn next(&mut self) -> Option<Self::Item> {
    if self.canvas.is_stopped() {
      return None;
    }
    let elapsed = self.clock.tick();
    match self.animator.frame(&mut self.canvas, elapsed) {
      FrameStatus::Stopped => None,
      _ => Some((self.clock.frame_count, self.canvas.image().clone()))
    }
  }
}

/// Pass every frame to `write`, rendering the next frame while the previous one is written.
///
/// At most one rendered frame waits for its write. The first failed write stops rendering
/// and is returned. Returns the number of frames written.
pub fn pipeline<I, W>(mut frames: I, write: W) -> Result<u64>
  where I: Iterator<Item = (u64, RgbaImage)> + Send,
        W: Fn(u64, &RgbaImage) -> Result<()> + Sync
{
  let mut written = 0;
  let mut pending = frames.next();
  while let Some((frame, image)) = pending {
    let (next, result) = rayon::join(
      || frames.next(),
      || write(frame, &image)
    );
    result?;
    written += 1;
    pending = next;
  }
  Ok(written)
}

/// Render every frame of the animation into `dir`, until the animator reports it has finished.
///
/// Rendering is sequential, one frame at a time; PNG encoding of a finished frame overlaps
/// with rendering the next one on the rayon pool. Returns the number of frames written.
pub fn export_frames(
  packing: &Packing,
  config: &Config,
  resolution: Size2D<u32, PixelSpace>,
  dir: &Path
) -> Result<u64> {
  let frames = Frames::new(packing, *config, resolution);

  crate::profile!("export", let written = pipeline(frames, |frame, image| {
    let path = frame_path(dir, frame);
    image.save(&path).with_context(|| format!("unable to write {:?}", path))
  })?);

  log::info!("wrote {} frames to {:?}", written, dir);
  Ok(written)
}
