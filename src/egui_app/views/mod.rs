use std::time::Instant;

use eframe::egui;

use crate::egui_app::navigation::Route;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod catalog_view;
pub mod create_product_view;
pub mod home_view;
pub mod login_view;
pub mod otp_view;
pub mod product_view;
pub mod profile_view;
pub mod register_view;

fn route_title(route: Route) -> &'static str {
    match route {
        Route::Login => "Sign In",
        Route::Register => "Create Account",
        Route::VerifyOtp => "Verify Account",
        Route::Home => "eMarket",
        Route::Profile => "Profile",
        Route::Catalog(mode) => mode.title(),
        Route::CreateProduct => "Add Product",
        Route::ProductDetail(_) => "Product Details",
    }
}

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if state.navigator().can_go_back() && ui.button("⬅ Back").clicked() {
                    state.go_back();
                }
                ui.label(
                    egui::RichText::new(route_title(state.route()))
                        .size(18.0)
                        .strong()
                        .color(colors::TEXT_DARK),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if state.is_busy() {
                        ui.spinner();
                    }
                });
            });
        });
}

/// Home / Profile tabs on signed-in routes
pub fn render_tab_bar(ctx: &egui::Context, state: &mut AppState) {
    let route = state.route();
    if route.is_public() {
        return;
    }
    let blocked = state.notices.is_blocking();
    egui::TopBottomPanel::bottom("tab_bar")
        .frame(styles::tab_bar_frame())
        .show(ctx, |ui| {
            if blocked {
                ui.disable();
            }
            ui.columns(2, |columns| {
                for (column, (tab, label)) in columns
                    .iter_mut()
                    .zip([(Route::Home, "🏠 Home"), (Route::Profile, "👤 Profile")])
                {
                    column.vertical_centered(|ui| {
                        if ui.selectable_label(route == tab, label).clicked() {
                            state.switch_tab(tab);
                        }
                    });
                }
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::PAGE_BG)
        .inner_margin(egui::Margin::same(16));

    let blocked = state.notices.is_blocking();

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        // An open alert or confirmation owns the input
        if blocked {
            ui.disable();
        }
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match state.route() {
                Route::Login => login_view::render(ui, state),
                Route::Register => register_view::render(ui, state),
                Route::VerifyOtp => otp_view::render(ui, state),
                Route::Home => home_view::render(ui, state),
                Route::Profile => profile_view::render(ui, state),
                Route::Catalog(_) => catalog_view::render(ui, state),
                Route::CreateProduct => create_product_view::render(ui, state),
                Route::ProductDetail(_) => product_view::render(ui, state),
            });
    });
}

/// Alerts, the confirmation dialog and toasts
pub fn render_notices(ctx: &egui::Context, state: &mut AppState) {
    if let Some(alert) = state.notices.alert().cloned() {
        let mut dismissed = false;
        egui::Modal::new(egui::Id::new("alert")).show(ctx, |ui| {
            ui.set_width(320.0);
            styles::heading(ui, &alert.title);
            ui.label(alert.message.as_str());
            ui.add_space(8.0);
            if ui.add(styles::primary_button("OK")).clicked() {
                dismissed = true;
            }
        });
        if dismissed {
            state.notices.dismiss_alert();
        }
    } else if let Some(confirmation) = state.notices.confirmation().cloned() {
        let mut answer = None;
        egui::Modal::new(egui::Id::new("confirmation")).show(ctx, |ui| {
            ui.set_width(320.0);
            styles::heading(ui, &confirmation.title);
            ui.label(confirmation.message.as_str());
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    answer = Some(false);
                }
                if ui.add(styles::primary_button(&confirmation.confirm_label)).clicked() {
                    answer = Some(true);
                }
            });
        });
        if let Some(confirmed) = answer {
            state.answer_confirmation(confirmed);
        }
    }

    let toasts: Vec<String> = state
        .notices
        .toasts_at(Instant::now())
        .into_iter()
        .map(str::to_owned)
        .collect();
    if toasts.is_empty() {
        return;
    }
    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 56.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            for message in &toasts {
                styles::toast_frame().show(ui, |ui| {
                    ui.colored_label(colors::TEXT_LIGHT, message.as_str());
                });
            }
        });
}
