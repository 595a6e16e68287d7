use eframe::egui;

use crate::egui_app::screens::Screen;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

enum Action {
    SelectImage(usize),
    Increment,
    Decrement,
    AddToCart,
    BuyNow,
    ContactSeller,
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Screen::ProductDetail(screen) = state.screen_mut() else {
        return;
    };
    let mut actions = Vec::new();
    let details = screen.details();
    let product = &details.product;

    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        if let Some(url) = screen.current_image() {
            ui.hyperlink_to(format!("🖼 Photo {}", screen.image_index() + 1), url);
        }
        ui.horizontal(|ui| {
            for index in 0..details.images.len() {
                let label = format!("{}", index + 1);
                if ui.selectable_label(screen.image_index() == index, label).clicked() {
                    actions.push(Action::SelectImage(index));
                }
            }
        });
    });
    ui.add_space(12.0);

    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        styles::heading(ui, &product.name);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(product.price.as_str()).size(20.0).color(colors::PRICE));
            if let Some(original) = &product.original_price {
                ui.label(egui::RichText::new(original.as_str()).strikethrough().color(colors::PRICE_ORIGINAL));
            }
            if let Some(percent) = details.discount_percent {
                ui.colored_label(colors::ERROR, format!("-{percent}%"));
            }
        });
        ui.horizontal(|ui| {
            ui.colored_label(colors::RATING, format!("★ {:.1}", product.rating));
            ui.colored_label(colors::TEXT_MUTED, format!("{} sold", product.sales));
            if details.in_stock {
                ui.colored_label(colors::SUCCESS, "In stock");
            } else {
                ui.colored_label(colors::ERROR, "Out of stock");
            }
        });
        ui.separator();
        ui.label(egui::RichText::new("Description").strong());
        ui.label(details.description);
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Specifications").strong());
        egui::Grid::new("specifications").striped(true).show(ui, |ui| {
            for (name, value) in details.specifications {
                ui.colored_label(colors::TEXT_MUTED, *name);
                ui.label(*value);
                ui.end_row();
            }
        });
    });
    ui.add_space(12.0);

    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(details.seller.name.as_str()).strong());
                ui.colored_label(
                    colors::TEXT_MUTED,
                    format!("★ {:.1} · {}", details.seller.rating, details.seller.location),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Contact Seller").clicked() {
                    actions.push(Action::ContactSeller);
                }
            });
        });
    });
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        ui.label("Quantity");
        if ui.add_enabled(screen.quantity() > 1, egui::Button::new("−")).clicked() {
            actions.push(Action::Decrement);
        }
        ui.label(egui::RichText::new(screen.quantity().to_string()).strong());
        if ui.button("+").clicked() {
            actions.push(Action::Increment);
        }
    });
    ui.horizontal(|ui| {
        if ui.add_enabled(details.in_stock, egui::Button::new("Add to Cart")).clicked() {
            actions.push(Action::AddToCart);
        }
        if ui.add_enabled(details.in_stock, styles::primary_button("Buy Now")).clicked() {
            actions.push(Action::BuyNow);
        }
    });

    let mut effects = Vec::new();
    for action in actions {
        match action {
            Action::SelectImage(index) => screen.select_image(index),
            Action::Increment => screen.increment(),
            Action::Decrement => screen.decrement(),
            Action::AddToCart => effects.extend(screen.add_to_cart()),
            Action::BuyNow => effects.extend(screen.buy_now()),
            Action::ContactSeller => effects.extend(screen.contact_seller()),
        }
    }
    state.apply(effects);
}
