// Graphics panel - tile set and background viewers

mod background;
mod tile_set;

use super::InspectorUi;
use crate::inspector::panel::{GraphicsView, PanelAction};
use crate::inspector::port::GraphicsBuffer;

/// Show the tile set and background side by side
pub(super) fn show(
    ui_state: &mut InspectorUi,
    ui: &mut egui::Ui,
    graphics: &GraphicsView,
    actions: &mut Vec<PanelAction>,
) {
    ui.heading("Graphics");
    ui.separator();

    // Display options
    ui.horizontal(|ui| {
        let mut outline = graphics.options.outline_tiles;
        if ui.checkbox(&mut outline, "Outline tiles").changed() {
            actions.push(PanelAction::SetOutlineTiles(outline));
        }

        let mut viewport = graphics.options.show_viewport;
        if ui.checkbox(&mut viewport, "Show viewport").changed() {
            actions.push(PanelAction::SetShowViewport(viewport));
        }
    });

    ui.add_space(4.0);

    ui.horizontal_top(|ui| {
        ui.vertical(|ui| tile_set::show(ui_state, ui, &graphics.tile_set));
        ui.add_space(10.0);
        ui.vertical(|ui| background::show(ui_state, ui, graphics, actions));
    });
}

/// Upload a buffer into a texture slot, reusing the texture when there is one
///
/// # Returns
///
/// The texture, or `None` when the buffer does not hold width x height RGBA
/// pixels
fn upload<'a>(
    slot: &'a mut Option<egui::TextureHandle>,
    ctx: &egui::Context,
    name: &str,
    buffer: &GraphicsBuffer,
) -> Option<&'a egui::TextureHandle> {
    if !buffer.is_well_formed() {
        return None;
    }

    let image =
        egui::ColorImage::from_rgba_unmultiplied([buffer.width, buffer.height], &buffer.pixels);

    if let Some(texture) = slot.as_mut() {
        texture.set(image, egui::TextureOptions::NEAREST);
    } else {
        *slot = Some(ctx.load_texture(name, image, egui::TextureOptions::NEAREST));
    }

    slot.as_ref()
}

/// On-screen size of a buffer at the given zoom
fn display_size(buffer: &GraphicsBuffer, scale: f32) -> egui::Vec2 {
    egui::vec2(buffer.width as f32, buffer.height as f32) * scale
}

/// Note shown instead of a buffer that cannot be drawn
fn show_malformed(ui: &mut egui::Ui, buffer: &GraphicsBuffer) {
    ui.colored_label(
        egui::Color32::RED,
        format!(
            "{}x{} buffer with {} bytes",
            buffer.width,
            buffer.height,
            buffer.pixels.len()
        ),
    );
}
