use egui_plot::{Bar, BarChart, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::processing::histogram::Histogram;
use crate::state::theme::Theme;
use crate::state::view_model::{ChartData, ViewModel};

pub const PLACEHOLDER_TEXT: &str = "No data available";

/// Sequence plot and distribution plot side by side.
pub fn show_chart_panel(ui: &mut egui::Ui, vm: &ViewModel, theme: &Theme) {
    let height = ui.available_height().max(200.0) - 24.0;
    ui.columns(2, |cols| {
        cols[0].vertical(|ui| {
            ui.label(egui::RichText::new("Number Sequence").strong());
            show_sequence_plot(ui, &vm.sequence, theme, height);
        });
        cols[1].vertical(|ui| {
            ui.label(egui::RichText::new("Distribution").strong());
            show_distribution_plot(ui, &vm.distribution, theme, height);
        });
    });
}

/// Identity and axis titles of one chart.
struct ChartAxes {
    id: &'static str,
    x_label: &'static str,
    y_label: &'static str,
}

const SEQUENCE_AXES: ChartAxes = ChartAxes {
    id: "sequence_plot",
    x_label: "Index",
    y_label: "Value",
};

const DISTRIBUTION_AXES: ChartAxes = ChartAxes {
    id: "distribution_plot",
    x_label: "Value",
    y_label: "Frequency",
};

impl ChartAxes {
    fn plot(&self, height: f32) -> Plot {
        Plot::new(self.id)
            .x_axis_label(self.x_label)
            .y_axis_label(self.y_label)
            .height(height)
            .allow_scroll(false)
    }
}

fn show_sequence_plot(
    ui: &mut egui::Ui,
    data: &ChartData<Vec<[f64; 2]>>,
    theme: &Theme,
    height: f32,
) {
    match data {
        ChartData::Plot(points) => {
            let color = theme.sequence_color();
            SEQUENCE_AXES.plot(height).show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::new(points.clone()))
                        .color(color)
                        .width(2.0)
                        .name("Value"),
                );
                plot_ui.points(
                    Points::new(PlotPoints::new(points.clone()))
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .radius(3.5),
                );
            });
        }
        ChartData::Placeholder => show_placeholder(ui, &SEQUENCE_AXES, theme, height),
    }
}

fn show_distribution_plot(
    ui: &mut egui::Ui,
    data: &ChartData<Histogram>,
    theme: &Theme,
    height: f32,
) {
    match data {
        ChartData::Plot(hist) => {
            let width = hist.bin_width();
            let bars: Vec<Bar> = hist
                .bars()
                .map(|(center, count)| Bar::new(center, count as f64).width(width))
                .collect();
            let chart = BarChart::new(bars)
                .color(theme.histogram_color())
                .name("Frequency");
            DISTRIBUTION_AXES
                .plot(height)
                .show(ui, |plot_ui| plot_ui.bar_chart(chart));
        }
        ChartData::Placeholder => show_placeholder(ui, &DISTRIBUTION_AXES, theme, height),
    }
}

/// Empty unit axes with the placeholder message painted over the middle.
fn show_placeholder(ui: &mut egui::Ui, axes: &ChartAxes, theme: &Theme, height: f32) {
    let resp = axes
        .plot(height)
        .include_x(0.0)
        .include_x(1.0)
        .include_y(0.0)
        .include_y(1.0)
        .allow_drag(false)
        .allow_zoom(false)
        .show(ui, |_| {});
    ui.painter().text(
        resp.response.rect.center(),
        egui::Align2::CENTER_CENTER,
        PLACEHOLDER_TEXT,
        egui::FontId::proportional(16.0),
        theme.placeholder_color(),
    );
}
