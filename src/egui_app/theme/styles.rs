//! Theme Styling Functions
//!
//! Helpers applying the storefront colors consistently across screens.

use eframe::egui::{self, CornerRadius, RichText, Stroke};

use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = colors::PAGE_BG;
    style.visuals.window_fill = colors::SURFACE;
    style.visuals.window_stroke = Stroke::new(1.0, colors::BORDER);

    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_DARK);
    style.visuals.widgets.hovered.bg_fill = colors::CHIP_SELECTED;
    style.visuals.widgets.active.bg_fill = colors::PRIMARY_HOVER;

    style.visuals.selection.bg_fill = colors::PRIMARY;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    ctx.set_style(style);
}

/// Frame for cards (products, role cards, profile sections)
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SURFACE)
        .stroke(Stroke::new(1.0, colors::BORDER))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(12))
}

/// Frame for the centered auth forms
pub fn form_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SURFACE)
        .corner_radius(CornerRadius::same(16))
        .inner_margin(egui::Margin::symmetric(24, 20))
}

/// Frame for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SURFACE)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Frame for the bottom tab bar
pub fn tab_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TAB_BAR_BG)
        .stroke(Stroke::new(1.0, colors::BORDER))
        .inner_margin(egui::Margin::symmetric(12, 6))
}

/// Frame for a toast
pub fn toast_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOAST_BG)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(14, 8))
}

/// Filled primary button
pub fn primary_button(label: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(label).color(colors::TEXT_LIGHT).strong())
        .fill(colors::PRIMARY)
        .corner_radius(CornerRadius::same(8))
        .min_size(egui::vec2(120.0, 36.0))
}

/// Category chip
pub fn chip(label: &str, selected: bool) -> egui::Button<'static> {
    let (fill, text) = if selected {
        (colors::PRIMARY, colors::TEXT_LIGHT)
    } else {
        (colors::SURFACE, colors::TEXT_DARK)
    };
    egui::Button::new(RichText::new(label).color(text))
        .fill(fill)
        .stroke(Stroke::new(1.0, colors::BORDER))
        .corner_radius(CornerRadius::same(16))
}

/// Inline field error
pub fn field_error(ui: &mut egui::Ui, error: Option<&str>) {
    if let Some(message) = error {
        ui.label(RichText::new(message).color(colors::ERROR).small());
    }
}

/// Screen heading
pub fn heading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).size(24.0).strong().color(colors::TEXT_DARK));
}
