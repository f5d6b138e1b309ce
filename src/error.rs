//! .
//!
//! Fallible operations return [`anyhow::Result`]; this module re-exports it and renders
//! error chains for the binary.
pub use anyhow::{Error, Result};

/// Render the cause chain, one line per cause, and write it to stderr.
pub fn display(error: &Error) -> String {
  let mut msg = "Error:".to_string();
  error
    .chain()
    .enumerate()
    .for_each(|(index, error)| msg.push_str(&format!("\n└> {} - {}", index, error)));

  eprintln!("{}", msg);
  msg
}

#[cfg(test)]
#[test] fn chain() {
  use anyhow::Context;

  let error = Err::<(), _>(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"))
    .context("unable to open image.png")
    .unwrap_err();
  assert_eq!(
    display(&error),
    "Error:\n└> 0 - unable to open image.png\n└> 1 - no such file"
  );
}
