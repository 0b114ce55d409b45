//! Card screen rendering
//!
//! Three vertical regions: blank top spacer, centered middle stage
//! (avatar or the selected platform's code panel), bottom contact
//! toggle row. Selection state lives in `CardState`.

use crate::constants::PROFILE;
use crate::theme;
use crate::types::{Platform, Stage};
use crate::ui::components;
use eframe::egui;
use tracing::debug;

impl super::App {
    pub(crate) fn render_card(&mut self, ui: &mut egui::Ui) {
        let full = ui.max_rect();

        // Toggle row sits inset from the bottom edge; the stage centers
        // in whatever is left above it.
        let toggle_side = components::toggle_side();
        let row_bottom = full.bottom() - theme::TOGGLE_ROW_INSET;
        let row_center_y = row_bottom - toggle_side / 2.0;
        let stage_area = egui::Rect::from_min_max(
            full.min,
            egui::pos2(full.max.x, row_bottom - toggle_side),
        );

        match self.card.stage() {
            Stage::Avatar => self.render_avatar_stage(ui, stage_area),
            Stage::Code(platform) => render_code_stage(ui, stage_area, platform),
        }

        // Contact toggles spaced evenly across the width
        let count = Platform::ALL.len() as f32;
        for (i, platform) in Platform::ALL.into_iter().enumerate() {
            let cx = full.left() + full.width() * (i as f32 + 1.0) / (count + 1.0);
            let rect = egui::Rect::from_center_size(
                egui::pos2(cx, row_center_y),
                egui::vec2(toggle_side, toggle_side),
            );
            let active = self.card.is_active(platform);
            if components::contact_toggle(ui, rect, platform, active).clicked() {
                self.card.toggle(platform);
                debug!(
                    platform = platform.label(),
                    selection = ?self.card.selection,
                    "contact toggle clicked"
                );
            }
        }
    }

    fn render_avatar_stage(&mut self, ui: &mut egui::Ui, area: egui::Rect) {
        let avatar_w = area.width() * theme::AVATAR_WIDTH_FRAC;
        let total = avatar_w + theme::SPACING_XL + identity_height();
        let top = area.center().y - total / 2.0;

        let avatar_rect = egui::Rect::from_min_size(
            egui::pos2(area.center().x - avatar_w / 2.0, top),
            egui::vec2(avatar_w, avatar_w),
        );

        let texture = self.avatar_texture(ui.ctx());
        egui::Image::new(egui::load::SizedTexture::new(texture.id(), avatar_rect.size()))
            .corner_radius(theme::RADIUS_CARD)
            .paint_at(ui, avatar_rect);
        ui.painter().rect_stroke(
            avatar_rect,
            theme::RADIUS_CARD,
            egui::Stroke::new(theme::AVATAR_BORDER, theme::ACCENT),
            egui::StrokeKind::Inside,
        );

        render_identity(ui, area.center().x, avatar_rect.bottom() + theme::SPACING_XL);
    }
}

fn render_code_stage(ui: &mut egui::Ui, area: egui::Rect, platform: Platform) {
    let side = area.width() * theme::CODE_PANEL_WIDTH_FRAC;
    let caption_h = theme::FONT_CAPTION * 1.25;
    let total = side + theme::SPACING_MD + caption_h + theme::SPACING_XL + identity_height();
    let top = area.center().y - total / 2.0;

    let panel_rect = egui::Rect::from_min_size(
        egui::pos2(area.center().x - side / 2.0, top),
        egui::vec2(side, side),
    );
    components::code_panel(ui, panel_rect, platform);

    // Contact entry for the selected platform
    ui.painter().text(
        egui::pos2(area.center().x, panel_rect.bottom() + theme::SPACING_MD),
        egui::Align2::CENTER_TOP,
        platform.contact(),
        egui::FontId::proportional(theme::FONT_CAPTION),
        theme::TEXT_MUTED,
    );

    render_identity(
        ui,
        area.center().x,
        panel_rect.bottom() + theme::SPACING_MD + caption_h + theme::SPACING_XL,
    );
}

/// Name and title stay visible in every selection state
fn render_identity(ui: &mut egui::Ui, center_x: f32, top: f32) {
    let painter = ui.painter();
    painter.text(
        egui::pos2(center_x, top),
        egui::Align2::CENTER_TOP,
        PROFILE.name,
        egui::FontId::proportional(theme::FONT_DISPLAY),
        theme::TEXT_PRIMARY,
    );
    painter.text(
        egui::pos2(center_x, top + theme::FONT_DISPLAY * 1.25 + theme::SPACING_SM),
        egui::Align2::CENTER_TOP,
        PROFILE.title,
        egui::FontId::proportional(theme::FONT_TITLE),
        theme::ACCENT,
    );
}

fn identity_height() -> f32 {
    theme::FONT_DISPLAY * 1.25 + theme::SPACING_SM + theme::FONT_TITLE * 1.25
}
