use crate::domain::entities::chart::ChartModel;

const FULL_BLOCK: char = '█';
const HALF_BLOCK: char = '▄';
/// Width of the `"{:6.1} MB "` scale label in front of each row.
const LABEL_WIDTH: usize = 10;

/// Renders a chart as text lines: `height` rows top to bottom, then the
/// x-axis and its sample-count marker.
#[must_use]
pub fn render_chart(model: &ChartModel) -> Vec<String> {
    let top = model.height.saturating_sub(1).max(1);
    let span = model.value_span();
    let mut lines = Vec::with_capacity(model.height + 2);

    for row in (0..model.height).rev() {
        let bars: String = model
            .levels
            .iter()
            .map(|&level| {
                if level >= row {
                    FULL_BLOCK
                } else if row > 0 && level == row - 1 {
                    HALF_BLOCK
                } else {
                    ' '
                }
            })
            .collect();
        #[allow(clippy::cast_precision_loss)]
        let scale = model.min_value + (row as f64 / top as f64) * span;
        lines.push(format!("{scale:6.1} MB │{bars}│"));
    }

    let columns = model.columns();
    lines.push(format!(
        "{}└{}┘",
        " ".repeat(LABEL_WIDTH),
        "─".repeat(columns)
    ));
    lines.push(format!(
        "{}0{}{} samples",
        " ".repeat(LABEL_WIDTH + 1),
        " ".repeat(columns.saturating_sub(10)),
        model.sample_count
    ));
    lines
}

pub fn print_chart(model: &ChartModel) {
    for line in render_chart(model) {
        println!("{line}");
    }
}
