use {
  circle_mandala::{
    config::Config,
    error::{self, Result},
    export,
    generator,
    profile
  },
  anyhow::Context,
  euclid::Size2D,
  std::path::Path
};

fn run() -> Result<()> {
  let image_path = std::env::args().nth(1)
    .unwrap_or_else(|| "reference_image.png".to_string());
  let out_dir = std::env::args().nth(2)
    .unwrap_or_else(|| "frames".to_string());

  let config = Config::default().validate()?;
  let image = image::open(&image_path)
    .with_context(|| format!("unable to open {}", image_path))?
    .to_rgba8();
  let size = Size2D::from(image.dimensions());

  profile!("packing", let packing = generator::generate(size.to_f32().cast_unit(), &image, &config));
  log::debug!("{:?}", packing.stats());

  let out_dir = Path::new(&out_dir);
  std::fs::create_dir_all(out_dir)
    .with_context(|| format!("unable to create {:?}", out_dir))?;
  export::export_frames(&packing, &config, size, out_dir)?;
  Ok(())
}

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  if let Err(e) = run() {
    error::display(&e);
    std::process::exit(1);
  }
}
