// Background viewer

use super::{display_size, show_malformed, upload};
use crate::inspector::panel::{GraphicsView, PanelAction};
use crate::inspector::ui::InspectorUi;

/// Show the background image and the tile under the pointer
///
/// Hovering reports the background pixel; the tile for it is looked up in
/// the next composition.
pub(super) fn show(
    ui_state: &mut InspectorUi,
    ui: &mut egui::Ui,
    graphics: &GraphicsView,
    actions: &mut Vec<PanelAction>,
) {
    let buffer = &graphics.background;
    ui.label("Background");

    let scale = ui_state.scale;
    let size = display_size(buffer, scale);
    let Some(texture) = upload(
        &mut ui_state.background_texture,
        ui.ctx(),
        "inspector_background",
        buffer,
    ) else {
        show_malformed(ui, buffer);
        return;
    };

    let response = ui.add(egui::Image::new((texture.id(), size)).sense(egui::Sense::hover()));

    if let Some(pos) = response.hover_pos() {
        let local = (pos - response.rect.min) / scale;
        let x = (local.x.max(0.0) as u32).min(buffer.width.saturating_sub(1) as u32);
        let y = (local.y.max(0.0) as u32).min(buffer.height.saturating_sub(1) as u32);

        if graphics.options.probe != Some((x, y)) {
            actions.push(PanelAction::BackgroundHovered { x, y });
        }
    } else if graphics.options.probe.is_some() {
        actions.push(PanelAction::BackgroundLeft);
    }

    match &graphics.hovered_tile {
        Some(tile) => {
            ui.label(format!(
                "Tile ({}, {}) #{}",
                tile.indices.x,
                tile.indices.y,
                tile.indices.map_index()
            ));
            ui.monospace(tile.format_bytes());
        }
        None => {
            ui.label("Hover the background to inspect a tile");
        }
    }
}
