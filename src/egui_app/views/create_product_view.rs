use eframe::egui;

use crate::egui_app::screens::Screen;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::validation::Field;

const INPUT_WIDTH: f32 = 360.0;

fn text_field(ui: &mut egui::Ui, field: Field, value: &mut String, multiline: bool) -> bool {
    ui.label(field.label());
    let edit = if multiline {
        egui::TextEdit::multiline(value).desired_rows(4)
    } else {
        egui::TextEdit::singleline(value)
    };
    ui.add(edit.desired_width(INPUT_WIDTH)).changed()
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Screen::CreateProduct(screen) = state.screen_mut() else {
        return;
    };
    let mut effects = Vec::new();

    styles::card_frame().show(ui, |ui| {
        ui.set_width(INPUT_WIDTH);
        styles::heading(ui, "New product");
        ui.add_space(8.0);

        let draft = &mut screen.draft;
        let mut touched = Vec::new();
        if text_field(ui, Field::ProductName, &mut draft.product_name, false) {
            touched.push(Field::ProductName);
        }
        if text_field(ui, Field::Price, &mut draft.price, false) {
            touched.push(Field::Price);
        }
        if text_field(ui, Field::Unit, &mut draft.unit, false) {
            touched.push(Field::Unit);
        }
        if text_field(ui, Field::Quantity, &mut draft.quantity, false) {
            touched.push(Field::Quantity);
        }
        if text_field(ui, Field::Description, &mut draft.description, true) {
            touched.push(Field::Description);
        }

        ui.label(Field::Image.label());
        let mut image = draft.image.clone().unwrap_or_default();
        let changed = ui
            .add(
                egui::TextEdit::singleline(&mut image)
                    .hint_text("Path or URL of the product photo")
                    .desired_width(INPUT_WIDTH),
            )
            .changed();
        if changed {
            screen.set_image(image);
        }
        for field in touched {
            screen.touch(field);
        }

        if !screen.errors().is_empty() {
            ui.add_space(4.0);
            for (_, message) in screen.errors().iter() {
                ui.colored_label(colors::ERROR, message);
            }
        }

        ui.add_space(12.0);
        if ui.add(styles::primary_button("Create Product")).clicked() {
            effects = screen.submit();
        }
    });

    state.apply(effects);
}
