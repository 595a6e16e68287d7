use eframe::egui;

use crate::egui_app::screens::Screen;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Screen::Home(home) = state.screen() else {
        return;
    };
    let home = *home;
    let mut effects = Vec::new();

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        styles::heading(ui, "Welcome to eMarket");
        ui.colored_label(colors::TEXT_MUTED, "How would you like to continue?");
        ui.add_space(16.0);

        for card in home.cards() {
            styles::card_frame().show(ui, |ui| {
                ui.set_width(320.0);
                ui.label(egui::RichText::new(card.icon).size(36.0));
                ui.label(egui::RichText::new(card.title).size(20.0).strong());
                ui.colored_label(colors::TEXT_MUTED, card.subtitle);
                if ui
                    .add(styles::primary_button(&format!("Continue as {}", card.title)))
                    .clicked()
                {
                    effects.extend(home.choose(card.mode));
                }
            });
            ui.add_space(12.0);
        }
    });

    state.apply(effects);
}
