//! Descriptive statistics over `f64` slices. Every function that needs at
//! least one value returns `None` on an empty slice.

#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[must_use]
pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

#[must_use]
pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Sample standard deviation (Bessel's correction). Zero for fewer than two values.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn sample_stdev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let Some(avg) = mean(values) else {
        return 0.0;
    };
    let sum_sq: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}
