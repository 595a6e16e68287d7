/**
 * egui Native Desktop App - Main Entry Point
 *
 * Loads configuration, opens the stored session and runs the storefront
 * window. Logging goes to stderr, filtered by `RUST_LOG`.
 */
use eframe::egui;
use emarket::egui_app::{theme, views, AppState, Config};

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "emarket=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = Config::load()?;
    tracing::info!(
        api = %config.app().base_url(),
        source = ?config.data_source(),
        "Starting eMarket"
    );
    let state = AppState::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 860.0])
            .with_min_inner_size([360.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "eMarket",
        options,
        Box::new(|cc| {
            theme::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(StorefrontApp { state }))
        }),
    )?;
    Ok(())
}

/// Main application state
struct StorefrontApp {
    state: AppState,
}

impl eframe::App for StorefrontApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        views::render_top_bar(ctx, &mut self.state);
        views::render_tab_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::render_notices(ctx, &mut self.state);

        if self.state.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        } else if self.state.notices.has_toasts() {
            // expire toasts without waiting for input
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }
    }
}
