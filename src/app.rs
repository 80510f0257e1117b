use eframe::egui;

use crate::state::app_state::{AppState, APP_TITLE, VERSION};
use crate::ui::chart_panel;
use crate::ui::input_panel::{self, InputAction};
use crate::ui::notice_dialog;
use crate::ui::summary_panel;

/// The main window.
pub struct NumberAnalysisApp {
    pub state: AppState,
}

impl NumberAnalysisApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::new();

        let ctx = &cc.egui_ctx;
        let mut style = (*ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(15.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::proportional(14.5),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::proportional(22.0),
        );
        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.visuals.window_corner_radius = egui::CornerRadius::same(8);
        ctx.set_style(style);
        ctx.set_visuals(state.theme.visuals());

        Self { state }
    }

    /// Open the native picker and load the chosen file, if any.
    fn open_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Select a file with numbers")
            .add_filter("Text files", &["txt"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            self.state.controller.load_file(&path);
        }
    }

    fn apply(&mut self, action: InputAction) {
        match action {
            InputAction::Submit => self.state.submit_entry(),
            InputAction::LoadFile => self.open_file_dialog(),
            InputAction::Clear => self.state.controller.clear(),
            InputAction::None => {}
        }
    }
}

impl eframe::App for NumberAnalysisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut vis = self.state.theme.visuals();
        vis.window_corner_radius = egui::CornerRadius::same(8);
        ctx.set_visuals(vis);

        // A notice raised during this frame is first drawn on the next one, so
        // the Enter press that caused it cannot also dismiss it.
        let notice_open = self.state.controller.current_notice().is_some();

        // ------------------------------------------------------------------
        // 1. Dropped files load like picked ones, in drop order
        // ------------------------------------------------------------------
        let dropped_paths: Vec<std::path::PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        for path in dropped_paths {
            self.state.controller.load_file(&path);
        }

        // ------------------------------------------------------------------
        // 2. Header
        // ------------------------------------------------------------------
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(APP_TITLE);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(self.state.theme.toggle_label()).clicked() {
                            self.state.theme = self.state.theme.toggle();
                        }
                        ui.separator();
                        ui.small(format!("v{VERSION}"));
                    });
                });
            });

        // ------------------------------------------------------------------
        // 3. Input row, numbers and statistics, charts
        // ------------------------------------------------------------------
        let mut action = InputAction::None;
        let theme = self.state.theme;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!notice_open, |ui| {
                action = input_panel::show_input_panel(ui, &mut self.state.entry, &theme);
            });
            ui.add_space(8.0);
            summary_panel::show_summary_panel(ui, self.state.controller.view_model());
            ui.separator();
            chart_panel::show_chart_panel(ui, self.state.controller.view_model(), &theme);
        });

        self.apply(action);
        if !notice_open && self.state.controller.current_notice().is_some() {
            ctx.request_repaint();
        }

        // ------------------------------------------------------------------
        // 4. Notices, one at a time
        // ------------------------------------------------------------------
        if notice_open {
            let dismissed = match self.state.controller.current_notice() {
                Some(notice) => notice_dialog::show_notice_dialog(ctx, notice),
                None => false,
            };
            if dismissed {
                self.state.controller.dismiss_notice();
            }
        }
    }
}
