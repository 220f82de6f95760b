use crate::domain::entities::chart::ChartModel;
use crate::domain::value_objects::chart_dimensions::ChartDimensions;

use super::stats;

/// Scales `values` onto `0..height` and decimates them to roughly `width`
/// columns.
///
/// Levels are floored, so only the maximum reaches the top row. A flat
/// sequence puts every column on the top row. When there are more values than
/// columns, every `len / width`-th level is kept starting from the first; no
/// averaging is done, so narrow peaks between kept points are dropped and the
/// column count can exceed `width` when `len` is not a multiple of it.
#[must_use]
pub fn build_chart(values: &[f64], dims: ChartDimensions) -> Option<ChartModel> {
    let min_value = stats::min(values)?;
    let max_value = stats::max(values)?;
    let top = dims.height() - 1;
    let range = max_value - min_value;

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let levels: Vec<usize> = values
        .iter()
        .map(|v| {
            if range > 0.0 {
                let scaled = ((v - min_value) / range * top as f64).floor() as usize;
                scaled.min(top)
            } else {
                top
            }
        })
        .collect();

    let levels = if levels.len() > dims.width() {
        let step = levels.len() / dims.width();
        levels.into_iter().step_by(step).collect()
    } else {
        levels
    };

    Some(ChartModel {
        levels,
        height: dims.height(),
        width: dims.width(),
        min_value,
        max_value,
        sample_count: values.len(),
    })
}
