//! Pearson product-moment correlation.

/// Sums of squares at or below this are treated as zero variance.
const ZERO_VARIANCE: f64 = 1e-12;

/// Pearson correlation coefficient of two equally long samples.
///
/// Returns `None` when the coefficient is undefined: mismatched lengths,
/// fewer than two points, or a constant sample on either side.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx <= ZERO_VARIANCE || syy <= ZERO_VARIANCE {
        return None;
    }

    let r = sxy / (sxx * syy).sqrt();
    if r.is_finite() {
        Some(r.clamp(-1.0, 1.0))
    } else {
        None
    }
}
