use crate::state::notice::Notice;

/// Show the notice as a centered window.
///
/// Returns `true` once the user acknowledges it with OK, Enter or the close button.
pub fn show_notice_dialog(ctx: &egui::Context, notice: &Notice) -> bool {
    let mut open = true;
    let mut acknowledged = false;

    egui::Window::new(notice.title)
        .id(egui::Id::new("notice_dialog"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(&notice.message);
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                if ui
                    .add(egui::Button::new("OK").min_size(egui::vec2(80.0, 28.0)))
                    .clicked()
                {
                    acknowledged = true;
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
        acknowledged = true;
    }

    acknowledged || !open
}
