use eframe::egui;

use crate::egui_app::navigation::CatalogMode;
use crate::egui_app::screens::Screen;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::catalog::Product;

const CARD_WIDTH: f32 = 180.0;

fn product_card(ui: &mut egui::Ui, product: &Product) -> bool {
    let mut open = false;
    styles::card_frame().show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.colored_label(colors::TEXT_MUTED, product.category.icon());
        ui.label(egui::RichText::new(product.name.as_str()).strong());
        ui.colored_label(colors::PRICE, product.price.as_str());
        if let Some(original) = &product.original_price {
            ui.label(
                egui::RichText::new(original.as_str())
                    .strikethrough()
                    .color(colors::PRICE_ORIGINAL),
            );
        }
        ui.horizontal(|ui| {
            ui.colored_label(colors::RATING, format!("★ {:.1}", product.rating));
            ui.colored_label(colors::TEXT_MUTED, format!("{} sold", product.sales));
        });
        ui.hyperlink_to("Photo", &product.img);
        if ui.button("View").clicked() {
            open = true;
        }
    });
    open
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Screen::Catalog(screen) = state.screen_mut() else {
        return;
    };
    let mut effects = Vec::new();
    let mut selected = None;
    let mut load_more = false;

    ui.horizontal(|ui| {
        styles::heading(ui, screen.mode().title());
        if screen.mode() == CatalogMode::Seller {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(styles::primary_button("+ Add Product")).clicked() {
                    effects.extend(screen.add_product());
                }
            });
        }
    });

    egui::ScrollArea::horizontal()
        .id_salt("category_chips")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for category in screen.categories() {
                    let is_selected = screen.selected_category() == category;
                    if ui.add(styles::chip(category, is_selected)).clicked() {
                        selected = Some(category);
                    }
                }
            });
        });

    ui.colored_label(
        colors::TEXT_MUTED,
        format!("{} products", screen.filtered_count()),
    );
    ui.add_space(8.0);

    ui.horizontal_wrapped(|ui| {
        for product in screen.visible() {
            if product_card(ui, product) {
                effects.extend(screen.open_product(product.id));
            }
        }
    });

    if screen.has_more() {
        ui.vertical_centered(|ui| {
            if ui.button("Load more").clicked() {
                load_more = true;
            }
        });
    }

    if let Some(category) = selected {
        screen.select_category(category);
    }
    if load_more {
        screen.load_more();
    }
    state.apply(effects);
}
