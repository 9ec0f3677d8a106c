//! Sampled curves for demos and benchmarks.
//!
//! Every generator returns points in the XY plane (z = 0), evenly spaced
//! along x.

use plotline_core::math::Vector3;

/// `count` evenly spaced values from `start` to `end`, both inclusive.
///
/// `count == 1` yields `[start]`; `count == 0` yields nothing.
pub fn linspace(start: f32, end: f32, count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f32;
            (0..count)
                .map(|i| if i == count - 1 { end } else { start + step * i as f32 })
                .collect()
        }
    }
}

/// Sample `y = f(x)` at `count` evenly spaced x values in `start..=end`.
pub fn sample_curve(start: f32, end: f32, count: usize, f: impl Fn(f32) -> f32) -> Vec<Vector3> {
    linspace(start, end, count)
        .into_iter()
        .map(|x| Vector3::xy(x, f(x)))
        .collect()
}

/// `y = x²` on `[-1, 1]`.
pub fn parabola(count: usize) -> Vec<Vector3> {
    sample_curve(-1.0, 1.0, count, |x| x * x)
}

/// `y = eˣ / e` on `[-1, 1]`, so the largest sample is exactly 1.
pub fn normalized_exp(count: usize) -> Vec<Vector3> {
    let mut points = sample_curve(-1.0, 1.0, count, f32::exp);
    let peak = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
    if peak > 0.0 {
        for point in &mut points {
            point.y /= peak;
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(-1.0, 1.0, 5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_parabola() {
        let points = parabola(3);
        assert_eq!(
            points,
            vec![
                Vector3::xy(-1.0, 1.0),
                Vector3::xy(0.0, 0.0),
                Vector3::xy(1.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_normalized_exp_peaks_at_one() {
        let points = normalized_exp(100);
        assert_eq!(points.len(), 100);
        assert_eq!(points.last().map(|p| p.y), Some(1.0));
        assert!(points.iter().all(|p| p.y > 0.0 && p.y <= 1.0));
    }
}
