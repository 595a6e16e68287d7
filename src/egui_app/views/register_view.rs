use eframe::egui;

use crate::egui_app::effects::Effect;
use crate::egui_app::navigation::Route;
use crate::egui_app::screens::{Phase, Screen, Step};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::validation::Field;

const INPUT_WIDTH: f32 = 300.0;

fn field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str, password: bool) -> bool {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .password(password)
            .desired_width(INPUT_WIDTH),
    )
    .changed()
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Screen::Register(screen) = state.screen_mut() else {
        return;
    };
    let mut step = Step::Stay;
    let mut effects = Vec::new();
    let submitting = screen.phase() == Phase::Submitting;

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        styles::form_frame().show(ui, |ui| {
            ui.set_width(INPUT_WIDTH);
            styles::heading(ui, "Create Account");
            ui.add_space(12.0);

            if field(ui, "Full name", &mut screen.name, "Jane Doe", false) {
                screen.touch(Field::Name);
            }
            styles::field_error(ui, screen.errors().get(Field::Name));

            if field(ui, "Email", &mut screen.email, "you@example.com", false) {
                screen.touch(Field::Email);
            }
            styles::field_error(ui, screen.errors().get(Field::Email));

            if field(ui, "Phone (optional)", &mut screen.phone, "+250 7xx xxx xxx", false) {
                screen.touch(Field::Phone);
            }
            styles::field_error(ui, screen.errors().get(Field::Phone));

            let hide = !screen.show_password;
            if field(ui, "Password", &mut screen.password, "", hide) {
                screen.touch(Field::Password);
            }
            styles::field_error(ui, screen.errors().get(Field::Password));
            ui.checkbox(&mut screen.show_password, "Show password");

            ui.add_space(12.0);
            let label = if submitting { "Creating account..." } else { "Register" };
            if ui.add_enabled(!submitting, styles::primary_button(label)).clicked() {
                step = screen.submit();
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_MUTED, "Already have an account?");
                if ui.link("Login").clicked() {
                    effects.push(Effect::Replace(Route::Login));
                }
            });
        });
    });

    state.run(step);
    state.apply(effects);
}
