use eframe::egui;

use crate::egui_app::screens::profile::{Loading, ProfileView};
use crate::egui_app::screens::{Screen, Step};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::types::Profile;

enum Action {
    Refresh,
    Logout,
    GoToLogin,
}

fn detail_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.colored_label(colors::TEXT_MUTED, label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(value);
        });
    });
}

fn render_profile(ui: &mut egui::Ui, profile: &Profile, refreshing: bool, action: &mut Option<Action>) {
    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("👤").size(48.0));
            styles::heading(ui, &profile.username);
            ui.colored_label(colors::TEXT_MUTED, profile.email.as_str());
            if profile.email_verified {
                ui.colored_label(colors::SUCCESS, "✔ Verified");
            }
        });
    });
    ui.add_space(12.0);

    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        detail_row(ui, "Role", profile.role.as_deref().unwrap_or("user"));
        ui.separator();
        detail_row(ui, "Phone", profile.phone.as_deref().unwrap_or("Not provided"));
        ui.separator();
        detail_row(ui, "Member since", &profile.joined_label());
    });
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        let label = if refreshing { "Refreshing..." } else { "🔄 Refresh" };
        if ui.add_enabled(!refreshing, egui::Button::new(label)).clicked() {
            *action = Some(Action::Refresh);
        }
        if ui
            .add(egui::Button::new(egui::RichText::new("Logout").color(colors::ERROR)))
            .clicked()
        {
            *action = Some(Action::Logout);
        }
    });
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let token = state.session().get_token().map(str::to_owned);
    let Screen::Profile(screen) = state.screen_mut() else {
        return;
    };
    let mut action = None;
    let refreshing = screen.loading() == Loading::Refresh;

    match screen.view() {
        ProfileView::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.spinner();
                ui.colored_label(colors::TEXT_MUTED, "Loading profile...");
            });
        }
        ProfileView::Error(message) => {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.label(egui::RichText::new("⚠").size(48.0).color(colors::ERROR));
                styles::heading(ui, "Oops! Something went wrong");
                ui.colored_label(colors::TEXT_MUTED, message);
                ui.add_space(12.0);
                let label = if refreshing { "Refreshing..." } else { "Try Again" };
                if ui.add_enabled(!refreshing, styles::primary_button(label)).clicked() {
                    action = Some(Action::Refresh);
                }
                if ui.button("Go to Login").clicked() {
                    action = Some(Action::GoToLogin);
                }
            });
        }
        ProfileView::Loaded(profile) => render_profile(ui, profile, refreshing, &mut action),
    }

    let step = match action {
        None => Step::Stay,
        Some(Action::Refresh) => screen.refresh(token.as_deref()),
        Some(Action::Logout) => screen.request_logout(),
        Some(Action::GoToLogin) => Step::Apply(screen.go_to_login()),
    };
    state.run(step);
}
