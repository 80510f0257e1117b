use egui::{Color32, Visuals};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => Visuals::dark(),
            Theme::Light => {
                let mut v = Visuals::light();
                v.panel_fill = Color32::from_rgb(0xf0, 0xf0, 0xf0);
                v
            }
        }
    }

    /// Line and marker colour of the sequence plot.
    pub fn sequence_color(&self) -> Color32 {
        Color32::from_rgb(0x21, 0x96, 0xF3)
    }

    /// Bar colour of the distribution plot (70% opacity).
    pub fn histogram_color(&self) -> Color32 {
        Color32::from_rgba_unmultiplied(0x4C, 0xAF, 0x50, 178)
    }

    pub fn placeholder_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_gray(170),
            Theme::Light => Color32::from_gray(90),
        }
    }

    pub fn add_button_fill(&self) -> Color32 {
        Color32::from_rgb(0x4C, 0xAF, 0x50)
    }

    pub fn load_button_fill(&self) -> Color32 {
        Color32::from_rgb(0x21, 0x96, 0xF3)
    }

    pub fn clear_button_fill(&self) -> Color32 {
        Color32::from_rgb(0xf4, 0x43, 0x36)
    }

    /// Label for the button that switches away from this theme.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Dark => "Light Mode",
            Theme::Light => "Dark Mode",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}
