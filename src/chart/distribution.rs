//! Stacked bar chart of events per depth bucket

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisType, Color, ItemStyle, LineStyle, SplitLine, TextStyle},
    renderer::ImageFormat,
    series::Bar,
};

use super::colors::{COLOR_BACKGROUND, COLOR_GRID, COLOR_TEXT};
use super::{CHART_HEIGHT, CHART_WIDTH, DistributionChartData, build_depth_label};

/// Render the events-per-bucket chart to a PNG file
pub fn render_distribution_chart(
    data: &DistributionChartData,
    output_path: &str,
) -> Result<(), String> {
    if data.buckets.is_empty() {
        return Err("No data to render".to_string());
    }

    let depth_labels: Vec<String> = data
        .buckets
        .iter()
        .map(|(label, _, _)| build_depth_label(label))
        .collect();
    let total: usize = data.buckets.iter().map(|(_, _, n)| n).sum();

    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text(format!("Earthquake Depth Distribution ({} events)", total))
                .subtext(&data.source)
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .legend(
            Legend::new()
                .data(depth_labels.clone())
                .bottom("3%")
                .item_gap(40)
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("3%")
                .bottom("10%")
                .top("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(depth_labels.clone())
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(24)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("events")
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(24))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(24))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        );

    // One series per bucket, stacked so each colored bar sits in its own column
    for (bucket_idx, (_, color, count)) in data.buckets.iter().enumerate() {
        let bar_data: Vec<f64> = (0..data.buckets.len())
            .map(|i| if i == bucket_idx { *count as f64 } else { 0.0 })
            .collect();

        chart = chart.series(
            Bar::new()
                .name(&depth_labels[bucket_idx])
                .data(bar_data)
                .stack("total")
                .item_style(ItemStyle::new().color(*color).opacity(0.9)),
        );
    }

    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}
