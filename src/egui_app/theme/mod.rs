//! Theme Module
//!
//! Color scheme and frame builders for the storefront.
//!
//! # Usage
//!
//! ```rust,no_run
//! use emarket::egui_app::theme::{colors, styles};
//!
//! # fn show(ctx: &eframe::egui::Context, ui: &mut eframe::egui::Ui) {
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::PRICE, "75,000 RWF");
//! });
//! # }
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
