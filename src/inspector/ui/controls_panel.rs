// Step controls

use crate::inspector::panel::{Controls, PanelAction};

/// Show the step buttons
pub(super) fn show(ui: &mut egui::Ui, controls: &Controls, actions: &mut Vec<PanelAction>) {
    ui.horizontal(|ui| {
        for button in &controls.buttons {
            if ui.button(button.label).clicked() {
                actions.push(button.action());
            }
        }
    });
}
