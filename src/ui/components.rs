//! Reusable UI components
//!
//! Standalone widgets shared by the card and dice screens. All of these
//! paint into a caller-supplied rect so the screens control layout.

use crate::theme;
use crate::types::{DiceValue, Platform};
use eframe::egui;

/// Side length of a contact toggle: glyph plus padding on each side
pub fn toggle_side() -> f32 {
    theme::TOGGLE_GLYPH_SIZE + 2.0 * theme::TOGGLE_PADDING
}

/// Custom-painted contact toggle. The active toggle swaps the
/// container/content color pair so the glyph sits on the accent fill.
pub fn contact_toggle(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    platform: Platform,
    active: bool,
) -> egui::Response {
    let response = ui.interact(rect, ui.id().with(platform.label()), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let (container, content) = theme::toggle_colors(active);
        let (fill, draw_rect) = theme::button_visual(&response, container, rect);
        let painter = ui.painter();
        painter.rect_filled(draw_rect, theme::RADIUS_CARD, fill);
        painter.text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            platform.icon(),
            egui::FontId::proportional(theme::TOGGLE_GLYPH_SIZE),
            content,
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Rounded inverse-surface panel showing the selected platform's glyph
pub fn code_panel(ui: &mut egui::Ui, rect: egui::Rect, platform: Platform) {
    let painter = ui.painter();
    painter.rect_filled(rect, theme::RADIUS_CARD, theme::CODE_SURFACE);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        platform.icon(),
        egui::FontId::proportional(rect.height() * 0.55),
        theme::CODE_ON_SURFACE,
    );
}

/// Die-face glyph for the current roll, centered on `center`
pub fn die_face(ui: &mut egui::Ui, center: egui::Pos2, value: DiceValue) {
    ui.painter().text(
        center,
        egui::Align2::CENTER_CENTER,
        value.face_glyph(),
        egui::FontId::proportional(theme::DIE_FACE_SIZE),
        theme::TEXT_PRIMARY,
    );
}
