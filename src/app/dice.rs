//! Dice screen rendering

use crate::theme;
use crate::types::DiceValue;
use crate::ui::components;
use eframe::egui;
use tracing::debug;

impl super::App {
    pub(crate) fn render_dice(&mut self, ui: &mut egui::Ui) {
        let area = ui.max_rect();

        let button_size = egui::vec2(120.0, theme::BUTTON_HEIGHT_LARGE);
        let total = theme::DIE_FACE_SIZE + theme::SPACING_XL + button_size.y;
        let top = area.center().y - total / 2.0;

        components::die_face(
            ui,
            egui::pos2(area.center().x, top + theme::DIE_FACE_SIZE / 2.0),
            self.dice,
        );

        let button_rect = egui::Rect::from_center_size(
            egui::pos2(
                area.center().x,
                top + theme::DIE_FACE_SIZE + theme::SPACING_XL + button_size.y / 2.0,
            ),
            button_size,
        );
        if ui.put(button_rect, theme::button_accent("Roll")).clicked() {
            self.dice = DiceValue::roll(&mut self.rng);
            debug!(value = self.dice.get(), "die rolled");
        }
    }
}
