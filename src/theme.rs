//! Centralized theme constants for MyCard
//! All colors, sizes, and styling should reference these constants

use crate::types::Screen;
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800

// =============================================================================
// COLORS - Accent (Teal)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400 - avatar border

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800

// =============================================================================
// COLORS - Contact toggles
// =============================================================================
// Inactive toggles draw CONTENT on CONTAINER; the active toggle swaps the pair.
pub const TOGGLE_CONTAINER: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const TOGGLE_CONTENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400

// =============================================================================
// COLORS - Code panel (inverse surface)
// =============================================================================
pub const CODE_SURFACE: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const CODE_ON_SURFACE: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900

// =============================================================================
// COLORS - Screen switcher
// =============================================================================
pub const TOGGLE_SELECTED: Color32 = Color32::from_rgb(0x11, 0x5e, 0x59); // teal-800
pub const TOGGLE_UNSELECTED: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const TOGGLE_GLOW: Color32 = Color32::from_rgb(0x0f, 0x76, 0x6e); // teal glow

// =============================================================================
// COLORS - Buttons
// =============================================================================
// Accent (teal) button
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400
pub const BTN_ACCENT_HOVER: Color32 = Color32::from_rgb(0x14, 0xb8, 0xa6); // teal-500
pub const BTN_ACCENT_ACTIVE: Color32 = Color32::from_rgb(0x0d, 0x94, 0x88); // teal-600
pub const BTN_ACCENT_TEXT: Color32 = Color32::from_rgb(0x04, 0x2f, 0x2e); // teal-950

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_DISPLAY: f32 = 34.0;
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_CAPTION: f32 = 12.0;

// =============================================================================
// DIMENSIONS - Card screen
// =============================================================================
pub const AVATAR_WIDTH_FRAC: f32 = 0.70;
pub const AVATAR_BORDER: f32 = 4.0;
pub const CODE_PANEL_WIDTH_FRAC: f32 = 0.75;
pub const TOGGLE_GLYPH_SIZE: f32 = 24.0;
pub const TOGGLE_PADDING: f32 = 16.0;
pub const TOGGLE_ROW_INSET: f32 = 48.0;

// =============================================================================
// DIMENSIONS - Dice screen
// =============================================================================
pub const DIE_FACE_SIZE: f32 = 160.0;
pub const BUTTON_HEIGHT_LARGE: f32 = 36.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_CARD: f32 = 16.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: Color32::from_rgb(0x1a, 0x1a, 0x1e),
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x3a, 0x3a, 0x3f),
            stroke: egui::Stroke::NONE,
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: Color32::TRANSPARENT,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: Color32::from_rgb(0x0f, 0x1a, 0x19),
                weak_bg_fill: Color32::from_rgb(0x30, 0x30, 0x35),
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: Color32::from_rgb(0x2e, 0x2e, 0x33),
                weak_bg_fill: Color32::from_rgb(0x2e, 0x2e, 0x33),
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -2.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(1.0, Color32::from_rgb(0x2a, 0x2a, 0x2e)),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Accent teal button (for primary actions like Roll)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(BTN_ACCENT_TEXT))
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Lightens on hover, slightly lightens + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

/// (container, content) color pair for a contact toggle. The active toggle
/// swaps the pair so the glyph sits on the accent fill.
pub fn toggle_colors(active: bool) -> (Color32, Color32) {
    if active {
        (TOGGLE_CONTENT, TOGGLE_CONTAINER)
    } else {
        (TOGGLE_CONTAINER, TOGGLE_CONTENT)
    }
}

// =============================================================================
// HELPER - Screen switcher (segmented, pill-style)
// =============================================================================

/// Renders the Card | Dice segmented switcher. Returns true if the screen
/// changed. Layered fill: container (2px) -> glow (1px) -> active fill.
pub fn screen_switcher(ui: &mut egui::Ui, screen: &mut Screen) -> bool {
    let mut changed = false;
    let height = 29.0;
    let font_size = 11.0;
    let rounding = 4.0;

    let left_width = 57.0;
    let right_width = 57.0;
    let total_width = left_width + right_width;

    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(total_width, height), egui::Sense::click());
    let painter = ui.painter();

    let left_active = *screen == Screen::Card;

    // Layer 1: Container background
    painter.rect_filled(rect, rounding + 2.0, TOGGLE_UNSELECTED);

    let left_rect =
        egui::Rect::from_min_max(rect.min, egui::pos2(rect.min.x + left_width, rect.max.y));
    let right_rect =
        egui::Rect::from_min_max(egui::pos2(rect.min.x + left_width, rect.min.y), rect.max);
    let active_rect = if left_active { left_rect } else { right_rect };

    // Layer 2: Glow - 2px on outer edges, 1px on the inner edge between segments
    let glow_rect = if left_active {
        egui::Rect::from_min_max(
            egui::pos2(active_rect.min.x + 2.0, active_rect.min.y + 2.0),
            egui::pos2(active_rect.max.x - 1.0, active_rect.max.y - 2.0),
        )
    } else {
        egui::Rect::from_min_max(
            egui::pos2(active_rect.min.x + 1.0, active_rect.min.y + 2.0),
            egui::pos2(active_rect.max.x - 2.0, active_rect.max.y - 2.0),
        )
    };
    painter.rect_filled(glow_rect, rounding, TOGGLE_GLOW);

    // Layer 3: Active fill (inset 1px from glow - shows 1px of glow)
    painter.rect_filled(glow_rect.shrink(1.0), rounding - 1.0, TOGGLE_SELECTED);

    let (left_color, right_color) = if left_active {
        (TEXT_PRIMARY, TEXT_MUTED)
    } else {
        (TEXT_MUTED, TEXT_PRIMARY)
    };

    painter.text(
        left_rect.center(),
        egui::Align2::CENTER_CENTER,
        "Card",
        egui::FontId::proportional(font_size),
        left_color,
    );
    painter.text(
        right_rect.center(),
        egui::Align2::CENTER_CENTER,
        "Dice",
        egui::FontId::proportional(font_size),
        right_color,
    );

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let clicked = if pos.x < rect.min.x + left_width {
                Screen::Card
            } else {
                Screen::Dice
            };
            if clicked != *screen {
                *screen = clicked;
                changed = true;
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_toggle_swaps_color_pair() {
        let (container, content) = toggle_colors(false);
        assert_eq!((content, container), toggle_colors(true));
        // Deterministic: same input, same output
        assert_eq!(toggle_colors(false), toggle_colors(false));
    }
}
