use eframe::egui;

use crate::egui_app::state::{AppState, AppView};
use crate::egui_app::theme::colors;

pub mod auth_view;
pub mod home_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("🌐 Sociable").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    let name = state
                        .session
                        .current()
                        .map(|session| session.user.full_name());
                    if let Some(name) = name {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        ui.colored_label(colors::TEXT_LIGHT, name);
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_view {
            AppView::Auth => auth_view::render(ui, state),
            AppView::Home => home_view::render(ui, state),
        });
}
