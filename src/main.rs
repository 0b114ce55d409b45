#![windows_subsystem = "windows"]
//! MyCard - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::{APP_NAME, APP_VERSION};
use eframe::egui;
use tracing::info;
use types::Screen;

/// Initialize stderr logging. Nothing is persisted, so no file appender.
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mycard=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();
}

fn main() -> eframe::Result<()> {
    init_logging();

    info!(version = APP_VERSION, "MyCard starting");

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([420.0, 680.0])
        .with_min_inner_size([360.0, 560.0])
        .with_title(APP_NAME);

    // Window/taskbar icon from the embedded avatar artwork
    {
        let (rgba, w, h) = utils::rasterize_avatar(64);
        let icon = egui::IconData { rgba, width: w, height: h };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top bar: app name on the left, screen switcher on the right
        egui::TopBottomPanel::top("top_bar")
            .exact_height(44.0)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(APP_NAME.to_uppercase())
                                .size(theme::FONT_CAPTION)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        theme::screen_switcher(ui, &mut self.screen);
                    });
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_BASE))
            .show(ctx, |ui| match self.screen {
                Screen::Card => self.render_card(ui),
                Screen::Dice => self.render_dice(ui),
            });
    }
}
