// CPU register panel

use crate::inspector::panel::PanelAction;
use crate::inspector::registers::{Flag, RegisterView};

/// Colour of set flags
const FLAG_SET: egui::Color32 = egui::Color32::from_rgb(0, 200, 0);

/// Colour of clear flags
const FLAG_CLEAR: egui::Color32 = egui::Color32::from_rgb(150, 150, 150);

/// Show the register view
///
/// PC and SP are links: clicking one anchors the memory view at it.
pub(super) fn show(ui: &mut egui::Ui, registers: &RegisterView, actions: &mut Vec<PanelAction>) {
    ui.heading("CPU");
    ui.separator();

    egui::Grid::new("inspector_registers_grid")
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            ui.label("PC:");
            if ui
                .link(egui::RichText::new(format!("${:04X}", registers.pc())).monospace())
                .on_hover_text("Show in memory view")
                .clicked()
            {
                actions.push(PanelAction::ProgramCounterClicked);
            }
            ui.end_row();

            ui.label("SP:");
            if ui
                .link(egui::RichText::new(format!("${:04X}", registers.sp())).monospace())
                .on_hover_text("Show in memory view")
                .clicked()
            {
                actions.push(PanelAction::StackPointerClicked);
            }
            ui.end_row();

            for (name, value) in registers.pairs() {
                ui.label(format!("{}:", name));
                ui.monospace(format!("${:04X}", value));
                ui.end_row();
            }
        });

    ui.add_space(6.0);

    ui.horizontal(|ui| {
        ui.label("Flags:");
        for flag in Flag::ALL {
            let color = if registers.flag(flag) {
                FLAG_SET
            } else {
                FLAG_CLEAR
            };
            ui.colored_label(color, flag.letter().to_string())
                .on_hover_text(flag.name());
        }
    });
}
