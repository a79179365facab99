use egui::Color32;

/// Green for healthy/success status
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);
/// Red for error status
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);
/// Amber for pending/unknown status
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);
