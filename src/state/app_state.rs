use crate::state::controller::PresentationController;
use crate::state::theme::Theme;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_TITLE: &str = "Number Analysis App";
pub const WINDOW_SIZE: [f32; 2] = [1000.0, 700.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [800.0, 600.0];
/// Optional window icon, looked up relative to the working directory.
pub const ICON_PATH: &str = "inf.png";

/// Everything the window holds for one session. Nothing is persisted.
#[derive(Debug, Default)]
pub struct AppState {
    pub controller: PresentationController,
    /// Current contents of the number entry field.
    pub entry: String,
    pub theme: Theme,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the entry field; it is cleared only when the number was accepted.
    pub fn submit_entry(&mut self) {
        if self.controller.submit(&self.entry) {
            self.entry.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_entry_is_cleared() {
        let mut state = AppState::new();
        state.entry = "12".to_string();
        state.submit_entry();
        assert!(state.entry.is_empty());
        assert_eq!(state.controller.view_model().labels.count, "1");
    }

    #[test]
    fn test_rejected_entry_is_kept() {
        let mut state = AppState::new();
        state.entry = "twelve".to_string();
        state.submit_entry();
        assert_eq!(state.entry, "twelve");
        let notice = state.controller.current_notice().unwrap();
        assert!(notice.message.contains("'twelve'"));
    }
}
