use eframe::egui;

use crate::egui_app::screens::{Phase, Screen, Step};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::otp::OTP_LENGTH;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let user_id = state.session().user_id().map(str::to_owned);
    let Screen::VerifyOtp(screen) = state.screen_mut() else {
        return;
    };
    let mut step = Step::Stay;
    let submitting = screen.phase() == Phase::Submitting;

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        styles::form_frame().show(ui, |ui| {
            styles::heading(ui, "Enter verification code");
            ui.colored_label(
                colors::TEXT_MUTED,
                format!("We sent a {OTP_LENGTH}-digit code to your email"),
            );
            ui.add_space(12.0);

            let mut moved = false;
            let cells = ui
                .horizontal(|ui| {
                    (0..OTP_LENGTH)
                        .map(|i| {
                            let mut text = screen.entry.cell(i).map(String::from).unwrap_or_default();
                            let response = ui.add(
                                egui::TextEdit::singleline(&mut text)
                                    .desired_width(28.0)
                                    .font(egui::TextStyle::Heading)
                                    .horizontal_align(egui::Align::Center),
                            );
                            if response.changed() && screen.entry.retype(i, &text) {
                                moved = true;
                            }
                            if response.gained_focus() {
                                screen.entry.set_focus(i);
                            }
                            response
                        })
                        .collect::<Vec<_>>()
                })
                .inner;
            if moved {
                if let Some(next) = cells.get(screen.entry.focus()) {
                    next.request_focus();
                }
            }

            ui.add_space(12.0);
            let label = if submitting { "Verifying..." } else { "Verify" };
            if ui.add_enabled(!submitting, styles::primary_button(label)).clicked() {
                step = screen.submit(user_id.as_deref());
            }
        });
    });

    state.run(step);
}
