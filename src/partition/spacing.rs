//! Equally spaced nodes.

/// `n` equally spaced values covering `[a, b]`.
///
/// The first value is exactly `a` and the last exactly `b`, so adjacent
/// uniform partitions share their end nodes bit for bit.
pub(crate) fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![a],
        _ => {
            let step = (b - a) / (n - 1) as f64;
            let mut xs: Vec<f64> = (0..n).map(|i| a + step * i as f64).collect();
            xs[n - 1] = b;
            xs
        }
    }
}
