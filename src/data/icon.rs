use std::path::Path;

/// Decode the window icon at `path`.
///
/// The icon is optional: any failure is logged at debug level and the window
/// simply opens without one.
pub fn load_icon(path: &Path) -> Option<egui::IconData> {
    match image::open(path) {
        Ok(img) => {
            let rgba = img.into_rgba8();
            let (width, height) = rgba.dimensions();
            Some(egui::IconData {
                rgba: rgba.into_raw(),
                width,
                height,
            })
        }
        Err(e) => {
            tracing::debug!("No window icon from {:?}: {e}", path);
            None
        }
    }
}
