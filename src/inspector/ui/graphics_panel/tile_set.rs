// Tile set viewer

use super::{display_size, show_malformed, upload};
use crate::inspector::port::GraphicsBuffer;
use crate::inspector::ui::InspectorUi;

/// Show the tile set image
pub(super) fn show(ui_state: &mut InspectorUi, ui: &mut egui::Ui, buffer: &GraphicsBuffer) {
    ui.label("Tile Set");

    let size = display_size(buffer, ui_state.scale);
    match upload(
        &mut ui_state.tile_set_texture,
        ui.ctx(),
        "inspector_tile_set",
        buffer,
    ) {
        Some(texture) => {
            ui.add(egui::Image::new((texture.id(), size)));
        }
        None => show_malformed(ui, buffer),
    }
}
