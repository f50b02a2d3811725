// Memory view panel

use crate::inspector::memory::{MemoryRow, MemoryWindow};
use crate::inspector::panel::PanelAction;

/// Address colour of the row holding the PC
const PC_COLOR: egui::Color32 = egui::Color32::YELLOW;

/// Address colour of the row holding the SP
const SP_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 160, 60);

/// Colour of ordinary bytes
const BYTE_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 200, 200);

/// Show the memory view
///
/// Scrolling reports the new anchor row; the window is clamped to the end of
/// memory when it is read, not here.
pub(super) fn show(ui: &mut egui::Ui, window: &MemoryWindow, actions: &mut Vec<PanelAction>) {
    ui.heading("Memory");
    ui.separator();

    // Navigation
    ui.horizontal(|ui| {
        if ui.small_button("⏫").on_hover_text("Page up").clicked() {
            actions.push(PanelAction::MemoryViewScrolled(window.page_up()));
        }
        if ui.small_button("▲").on_hover_text("Row up").clicked() {
            actions.push(PanelAction::MemoryViewScrolled(window.scrolled_by(-1)));
        }
        if ui.small_button("▼").on_hover_text("Row down").clicked() {
            actions.push(PanelAction::MemoryViewScrolled(window.scrolled_by(1)));
        }
        if ui.small_button("⏬").on_hover_text("Page down").clicked() {
            actions.push(PanelAction::MemoryViewScrolled(window.page_down()));
        }

        let mut row = window.first_row;
        if ui
            .add(
                egui::DragValue::new(&mut row)
                    .range(0..=window.max_first_row)
                    .prefix("row "),
            )
            .changed()
        {
            actions.push(PanelAction::MemoryViewScrolled(row));
        }
    });

    ui.add_space(4.0);

    let rows = ui.vertical(|ui| {
        ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
        for row in &window.rows {
            show_row(ui, window, row, actions);
        }
    });

    // Mouse wheel moves one row per notch
    if rows.response.contains_pointer() {
        let delta = ui.input(|i| i.raw_scroll_delta.y);
        if delta > 0.0 {
            actions.push(PanelAction::MemoryViewScrolled(window.scrolled_by(-1)));
        } else if delta < 0.0 {
            actions.push(PanelAction::MemoryViewScrolled(window.scrolled_by(1)));
        }
    }
}

/// Show one row: address, region, bytes, ASCII
fn show_row(
    ui: &mut egui::Ui,
    window: &MemoryWindow,
    row: &MemoryRow,
    actions: &mut Vec<PanelAction>,
) {
    ui.horizontal(|ui| {
        let address_color = if row.contains(window.pc) {
            PC_COLOR
        } else if row.contains(window.sp) {
            SP_COLOR
        } else {
            egui::Color32::GRAY
        };
        ui.colored_label(address_color, format!("${:04X}:", row.address));
        ui.colored_label(
            egui::Color32::DARK_GRAY,
            format!("[{:4}]", row.region.label()),
        );

        for (i, byte) in row.bytes.iter().enumerate() {
            let address = (row.address + i) as u16;
            let color = if address == window.pc {
                PC_COLOR
            } else if address == window.sp {
                SP_COLOR
            } else {
                BYTE_COLOR
            };

            let label = egui::Label::new(egui::RichText::new(format!("{:02X}", byte)).color(color))
                .sense(egui::Sense::click());
            if ui
                .add(label)
                .on_hover_text(format!("${:04X}", address))
                .clicked()
            {
                actions.push(PanelAction::ByteClicked(address));
            }
        }

        ui.label("|");
        ui.colored_label(egui::Color32::GRAY, row.format_ascii());
    });
}
