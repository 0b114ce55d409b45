//! App module - contains the main application state and logic

mod card;
mod dice;

use crate::theme;
use crate::types::{CardState, DiceValue, Screen};
use crate::utils;
use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) screen: Screen,
    pub(crate) card: CardState,
    pub(crate) dice: DiceValue,
    pub(crate) rng: StdRng,
    pub(crate) avatar_texture: Option<egui::TextureHandle>,
}

// ============================================================================
// APP INITIALIZATION
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font (platform logos, die faces)
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        Self {
            screen: Screen::default(),
            card: CardState::default(),
            dice: DiceValue::default(),
            rng: StdRng::from_entropy(),
            avatar_texture: None,
        }
    }

    /// Avatar texture, rasterized from the embedded SVG on first use
    pub(crate) fn avatar_texture(&mut self, ctx: &egui::Context) -> egui::TextureHandle {
        self.avatar_texture
            .get_or_insert_with(|| {
                let (pixels, w, h) = utils::rasterize_avatar(512);
                ctx.load_texture(
                    "avatar",
                    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                    egui::TextureOptions::LINEAR,
                )
            })
            .clone()
    }
}
