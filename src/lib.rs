//! This is a library for decomposing an image into a recursive packing of circles, and
//! animating the packing's growth into a mandala.
//!
//! It is split into two stages: [`generator`] builds the packing once, breadth-first, and
//! [`animation`] renders it at any instant onto a [`Canvas`](canvas::Canvas).
//!
//! The packing starts from the largest circle centered on the canvas. Each circle bigger than
//! a minimal radius, and shallower than a maximal depth, is split into `N` children placed
//! on its rim, `N` being chosen from the average brightness under it ([`sampler`]):
//! dark regions branch more, bright regions less.
//!
//! The animation grows one depth level every [`Config::growth_duration`](config::Config)
//! seconds, colors every level along the hue wheel, and slowly zooms in.
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   circle_mandala::{
//! #     config::Config,
//! #     error::Result,
//! #     export,
//! #     generator,
//! #   },
//! #   euclid::Size2D
//! # };
//! # fn main() -> Result<()> {
//! let config = Config::default().validate()?;
//! let image = image::open("reference_image.png")?.to_rgba8();
//! let size = Size2D::from(image.dimensions());
//!
//! // Subdivide once, before the first frame.
//! let packing = generator::generate(size.to_f32().cast_unit(), &image, &config);
//! println!("{:?}", packing.stats());
//!
//! // Run the frame loop until the animation reports it has finished.
//! std::fs::create_dir_all("frames")?;
//! export::export_frames(&packing, &config, size, "frames".as_ref())?;
//! #   Ok(())
//! # }
//! ```
//!
//! Rendering a single instant needs nothing but the elapsed time:
//! ```
//! # use {
//! #   circle_mandala::{
//! #     animation::Animator, config::Config, drawing::RasterCanvas, generator,
//! #   },
//! #   euclid::Size2D,
//! #   image::{GrayImage, Luma, Rgba}
//! # };
//! let image = GrayImage::from_pixel(64, 64, Luma([128]));
//! let config = Config::default();
//! let packing = generator::generate(Size2D::new(64.0, 64.0), &image, &config);
//!
//! let mut canvas = RasterCanvas::new(64, 64);
//! Animator::new(&packing, config).frame(&mut canvas, 2.0);
//! let center = *canvas.image().get_pixel(32, 32);
//! assert_ne!(center, Rgba([255, 255, 255, 255]));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod util;
pub mod geometry;
pub mod sdf;
pub mod config;
pub mod sampler;
pub mod generator;
pub mod canvas;
pub mod animation;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod drawing;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod export;
