use crate::state::view_model::ViewModel;

/// Current numbers list followed by the statistic labels.
pub fn show_summary_panel(ui: &mut egui::Ui, vm: &ViewModel) {
    ui.horizontal_top(|ui| {
        ui.label("Current Numbers:");
        egui::ScrollArea::vertical()
            .id_salt("numbers_scroll")
            .max_height(90.0)
            .show(ui, |ui| {
                // A `&str` buffer keeps the text selectable but read-only.
                let mut text = vm.numbers_text.as_str();
                ui.add(
                    egui::TextEdit::multiline(&mut text)
                        .desired_rows(5)
                        .desired_width(f32::INFINITY),
                );
            });
    });

    ui.add_space(8.0);

    let labels = &vm.labels;
    egui::Grid::new("stats_grid")
        .num_columns(4)
        .spacing(egui::vec2(20.0, 6.0))
        .min_col_width(90.0)
        .show(ui, |ui| {
            ui.label("Minimum:");
            ui.strong(&labels.minimum);
            ui.label("Average:");
            ui.strong(&labels.average);
            ui.end_row();

            ui.label("Maximum:");
            ui.strong(&labels.maximum);
            ui.label("Count:");
            ui.strong(&labels.count);
            ui.end_row();

            ui.label("Sum:");
            ui.strong(&labels.sum);
            ui.end_row();
        });
}
