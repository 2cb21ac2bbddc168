use crate::math::Color;
use crate::settings::{ColorControl, PanelSettings, SettingChange, WIREFRAME_LABEL};

/// Draw the "Controls" window and return the edits made this frame
///
/// The panel only reads `settings`; the caller dispatches the returned
/// changes to its [`SettingsListener`](crate::settings::SettingsListener).
pub fn show_settings(ctx: &egui::Context, settings: &PanelSettings) -> Vec<SettingChange> {
    let mut changes = Vec::new();

    egui::Window::new("Controls")
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            egui::Grid::new("settings_grid")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for control in ColorControl::ALL {
                        ui.label(control.label());
                        if let Some(hex) = color_picker(ui, settings.color(control)) {
                            changes.push(SettingChange::Color(control, hex));
                        }
                        ui.end_row();
                    }

                    ui.label(WIREFRAME_LABEL);
                    let mut wireframe = settings.wireframe;
                    if ui.checkbox(&mut wireframe, "").changed() {
                        changes.push(SettingChange::Wireframe(wireframe));
                    }
                    ui.end_row();
                });
        });

    changes
}

/// sRGB color button; returns the new `#rrggbb` value when edited
fn color_picker(ui: &mut egui::Ui, hex: &str) -> Option<String> {
    let color = Color::parse_hex(hex).unwrap_or_else(|e| {
        log::debug!("Showing white for unreadable panel color: {}", e);
        Color::default()
    });
    let mut rgb = color.to_srgb_u8();
    let response = ui.color_edit_button_srgb(&mut rgb);
    response
        .changed()
        .then(|| Color::from_srgb_u8(rgb).to_hex_string())
}

/// Frame-rate readout in the top-left corner
pub fn show_fps(ctx: &egui::Context, fps: f32) {
    egui::Window::new("FPS")
        .title_bar(false)
        .resizable(false)
        .fixed_pos(egui::pos2(10.0, 10.0))
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("{:.0}", fps))
                    .size(32.0)
                    .color(egui::Color32::from_rgb(74, 158, 255)),
            );
            ui.label(
                egui::RichText::new("FPS")
                    .size(12.0)
                    .color(egui::Color32::GRAY),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(settings: &PanelSettings) -> Vec<SettingChange> {
        let ctx = egui::Context::default();
        let mut changes = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            changes = show_settings(ctx, settings);
        });
        changes
    }

    #[test]
    fn test_untouched_panel_reports_nothing() {
        assert!(run_frame(&PanelSettings::default()).is_empty());
    }

    #[test]
    fn test_untouched_panel_with_short_hex() {
        let mut settings = PanelSettings::default();
        settings.cube_color = "#fff".to_string();
        assert!(run_frame(&settings).is_empty());
    }

    #[test]
    fn test_unreadable_hex_is_shown_without_an_edit() {
        let mut settings = PanelSettings::default();
        settings.sphere_color = "oops".to_string();
        assert!(Color::parse_hex(&settings.sphere_color).is_err());
        assert!(run_frame(&settings).is_empty());
    }

    #[test]
    fn test_fps_overlay_renders_shapes() {
        let ctx = egui::Context::default();
        // New windows are measured invisibly on their first frame
        let _ = ctx.run(egui::RawInput::default(), |ctx| show_fps(ctx, 60.0));
        let output = ctx.run(egui::RawInput::default(), |ctx| show_fps(ctx, 60.0));
        assert!(!output.shapes.is_empty());
    }
}
