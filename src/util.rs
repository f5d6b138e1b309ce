use num_traits::Float;

/// Time a statement, reporting through the `log` facade at debug level.
#[macro_export]
macro_rules! profile(
  ($title: literal, $stmt: stmt) => {
    let t0 = std::time::Instant::now();
    $stmt;
    log::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
  }
);

/// Re-map `value` linearly from `[from_lo, from_hi]` to `[to_lo, to_hi]`.
/// The result is not clamped; values outside the source interval extrapolate.
pub fn map_range<T: Float>(value: T, from_lo: T, from_hi: T, to_lo: T, to_hi: T) -> T {
  to_lo + (value - from_lo) / (from_hi - from_lo) * (to_hi - to_lo)
}

#[cfg(test)]
#[test] fn map_range_extrapolates() {
  assert_eq!(map_range(0.0, 0.0, 1.0, 8.0, 3.0), 8.0);
  assert_eq!(map_range(1.0, 0.0, 1.0, 8.0, 3.0), 3.0);
  assert_eq!(map_range(0.5f32, 0.0, 1.0, 1.0, 1.5), 1.25);
  assert_eq!(map_range(2.0f64, 0.0, 1.0, 1.0, 1.5), 2.0);
}
