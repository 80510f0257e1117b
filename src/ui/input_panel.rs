use crate::state::theme::Theme;

/// Actions the input row can request from the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    /// Add button or Enter in the entry field.
    Submit,
    LoadFile,
    Clear,
}

fn action_btn(ui: &mut egui::Ui, label: &str, fill: egui::Color32) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(label).color(egui::Color32::WHITE).strong())
            .fill(fill)
            .min_size(egui::vec2(90.0, 28.0)),
    )
}

/// Render the entry field and the three action buttons.
pub fn show_input_panel(ui: &mut egui::Ui, entry: &mut String, theme: &Theme) -> InputAction {
    let mut action = InputAction::None;

    ui.horizontal(|ui| {
        ui.label("Enter a number:");
        let resp = ui.add(
            egui::TextEdit::singleline(entry)
                .desired_width(150.0)
                .hint_text("e.g. 42 or 3.14"),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            action = InputAction::Submit;
            resp.request_focus();
        }

        if action_btn(ui, "Add", theme.add_button_fill())
            .on_hover_text("Add the number (Enter)")
            .clicked()
        {
            action = InputAction::Submit;
        }
        if action_btn(ui, "Load File", theme.load_button_fill())
            .on_hover_text("Load whitespace-separated numbers from a text file")
            .clicked()
        {
            action = InputAction::LoadFile;
        }
        if action_btn(ui, "Clear", theme.clear_button_fill())
            .on_hover_text("Remove all numbers")
            .clicked()
        {
            action = InputAction::Clear;
        }
    });

    action
}
