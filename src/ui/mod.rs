pub mod chart_panel;
pub mod input_panel;
pub mod notice_dialog;
pub mod summary_panel;
