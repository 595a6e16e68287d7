use eframe::egui;

use crate::egui_app::effects::Effect;
use crate::egui_app::navigation::Route;
use crate::egui_app::screens::{Phase, Screen, Step};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::validation::Field;

const INPUT_WIDTH: f32 = 300.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Screen::Login(screen) = state.screen_mut() else {
        return;
    };
    let mut step = Step::Stay;
    let mut effects = Vec::new();
    let submitting = screen.phase() == Phase::Submitting;

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        styles::form_frame().show(ui, |ui| {
            ui.set_width(INPUT_WIDTH);
            styles::heading(ui, "Welcome Back");
            ui.colored_label(colors::TEXT_MUTED, "Sign in to continue shopping");
            ui.add_space(12.0);

            ui.label("Email");
            let email = ui.add(
                egui::TextEdit::singleline(&mut screen.email)
                    .hint_text("you@example.com")
                    .desired_width(INPUT_WIDTH),
            );
            if email.changed() {
                screen.touch(Field::Email);
            }
            styles::field_error(ui, screen.errors().get(Field::Email));

            ui.label("Password");
            let password = ui.add(
                egui::TextEdit::singleline(&mut screen.password)
                    .password(!screen.show_password)
                    .desired_width(INPUT_WIDTH),
            );
            if password.changed() {
                screen.touch(Field::Password);
            }
            styles::field_error(ui, screen.errors().get(Field::Password));
            ui.checkbox(&mut screen.show_password, "Show password");

            let enter = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.add_space(12.0);
            let label = if submitting { "Signing in..." } else { "Login" };
            if ui.add_enabled(!submitting, styles::primary_button(label)).clicked() || enter {
                step = screen.submit();
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_MUTED, "Don't have an account?");
                if ui.link("Register").clicked() {
                    effects.push(Effect::Navigate(Route::Register));
                }
            });
        });
    });

    state.run(step);
    state.apply(effects);
}
