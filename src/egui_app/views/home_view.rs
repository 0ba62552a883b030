use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::shared::FriendRecord;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let frame = egui::Frame::default().fill(colors::BG_DARK);

    frame.show(ui, |ui| {
        let Some(session) = state.session.current() else {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.colored_label(colors::TEXT_SECONDARY, "Not signed in");
            });
            return;
        };
        let user = &session.user;

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);

            avatar(ui, &user.first_name, &user.last_name, 64.0);
            ui.add_space(8.0);
            ui.colored_label(
                colors::TEXT_LIGHT,
                egui::RichText::new(user.full_name()).size(26.0).strong(),
            );
            if !user.occupation.is_empty() {
                ui.colored_label(colors::TEXT_SECONDARY, &user.occupation);
            }
            if !user.location.is_empty() {
                ui.colored_label(colors::TEXT_SECONDARY, format!("📍 {}", user.location));
            }
            ui.add_space(24.0);

            ui.colored_label(
                colors::TEXT_LIGHT,
                egui::RichText::new("Friends").size(18.0).strong(),
            );
            ui.add_space(8.0);

            if user.friends.is_empty() {
                ui.colored_label(colors::TEXT_SECONDARY, "No friends yet");
            }
            for friend in &user.friends {
                friend_row(ui, friend);
            }
        });
    });
}

fn friend_row(ui: &mut egui::Ui, friend: &FriendRecord) {
    egui::Frame::default()
        .fill(colors::CARD_BG)
        .corner_radius(6)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_width(360.0);
            ui.horizontal(|ui| {
                let (first, last) = friend.name.split_once(' ').unwrap_or((friend.name.as_str(), ""));
                avatar(ui, first, last, 36.0);
                ui.vertical(|ui| {
                    ui.colored_label(
                        colors::TEXT_LIGHT,
                        egui::RichText::new(&friend.name).strong(),
                    );
                    if !friend.subtitle.is_empty() {
                        ui.colored_label(colors::TEXT_SECONDARY, &friend.subtitle);
                    }
                });
            });
        });
    ui.add_space(6.0);
}

/// Round initials badge standing in for the profile picture.
fn avatar(ui: &mut egui::Ui, first: &str, last: &str, diameter: f32) {
    let initials: String = first
        .chars()
        .take(1)
        .chain(last.chars().take(1))
        .collect::<String>()
        .to_uppercase();

    let (rect, _) = ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), diameter / 2.0, colors::AVATAR_BG);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(diameter * 0.4),
        colors::TEXT_LIGHT,
    );
}
