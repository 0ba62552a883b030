use eframe::egui;

use crate::egui_app::auth::schema::fields;
use crate::egui_app::auth::{FormFields, FormMode, PictureFile};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

const LABEL_WIDTH: f32 = 90.0;
const INPUT_WIDTH: f32 = 280.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    handle_dropped_picture(ui, state);

    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let is_register = state.form.mode() == FormMode::Register;

            let total_height = if is_register { 520.0 } else { 300.0 };
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("🌐 Sociable")
                    .size(32.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new(if is_register {
                    "Create your account"
                } else {
                    "Welcome back"
                })
                .size(22.0)
                .color(colors::TEXT_LIGHT),
            );
            ui.add_space(18.0);

            // Inline errors are copied out first so the field match below
            // can borrow the field values mutably.
            let first_name_error = state.form.error_for(fields::FIRST_NAME);
            let last_name_error = state.form.error_for(fields::LAST_NAME);
            let email_error = state.form.error_for(fields::EMAIL);
            let password_error = state.form.error_for(fields::PASSWORD);
            let location_error = state.form.error_for(fields::LOCATION);
            let occupation_error = state.form.error_for(fields::OCCUPATION);

            let mut edited: Vec<&'static str> = Vec::new();
            match &mut state.form.fields {
                FormFields::Login { email, password } => {
                    if text_field(ui, "Email", email_error, email, false) {
                        edited.push(fields::EMAIL);
                    }
                    if text_field(ui, "Password", password_error, password, true) {
                        edited.push(fields::PASSWORD);
                    }
                }
                FormFields::Register {
                    first_name,
                    last_name,
                    email,
                    password,
                    location,
                    occupation,
                    picture,
                } => {
                    if text_field(ui, "First Name", first_name_error, first_name, false) {
                        edited.push(fields::FIRST_NAME);
                    }
                    if text_field(ui, "Last Name", last_name_error, last_name, false) {
                        edited.push(fields::LAST_NAME);
                    }
                    if text_field(ui, "Location", location_error, location, false) {
                        edited.push(fields::LOCATION);
                    }
                    if text_field(ui, "Occupation", occupation_error, occupation, false) {
                        edited.push(fields::OCCUPATION);
                    }
                    if text_field(ui, "Email", email_error, email, false) {
                        edited.push(fields::EMAIL);
                    }
                    if text_field(ui, "Password", password_error, password, true) {
                        edited.push(fields::PASSWORD);
                    }
                    picture_dropzone(ui, picture.as_ref());
                }
            }
            if !edited.is_empty() {
                for field in edited {
                    state.form.touch(field);
                }
                state.form.revalidate();
            }

            if let Some(message) = state.form.banner().map(str::to_string) {
                ui.add_space(6.0);
                ui.colored_label(colors::ERROR, message);
            }

            ui.add_space(16.0);

            let in_flight = state.form.is_in_flight();
            let submit_label = if is_register { "REGISTER" } else { "LOGIN" };
            let submit_button = egui::Button::new(
                egui::RichText::new(submit_label).color(colors::TEXT_LIGHT),
            )
            .fill(colors::BUTTON_PRIMARY)
            .min_size(egui::vec2(INPUT_WIDTH, 36.0));

            if ui.add_enabled(!in_flight, submit_button).clicked() {
                state.submit();
            }

            if in_flight {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 110.0).max(0.0) / 2.0);
                    ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }

            ui.add_space(14.0);

            let toggle_text = if is_register {
                "Already have an account? Login here."
            } else {
                "Don't have an account? Sign Up here."
            };
            if ui
                .link(egui::RichText::new(toggle_text).color(colors::ACCENT))
                .clicked()
            {
                state.switch_mode();
            }
        });
    });
}

/// One labeled input row with its inline error. Returns true when the field
/// changed or lost focus, so the caller can mark it touched and revalidate.
fn text_field(
    ui: &mut egui::Ui,
    label: &str,
    error: Option<&'static str>,
    value: &mut String,
    password: bool,
) -> bool {
    let mut interacted = false;
    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() - INPUT_WIDTH - LABEL_WIDTH - 20.0).max(0.0) / 2.0);
        ui.add_sized(
            [LABEL_WIDTH, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
        );
        let edit = egui::TextEdit::singleline(value)
            .password(password)
            .text_color(colors::TEXT_LIGHT);
        let response = ui.add_sized([INPUT_WIDTH, 28.0], edit);
        interacted = response.changed() || response.lost_focus();
    });
    if let Some(message) = error {
        ui.colored_label(colors::ERROR, message);
    }
    ui.add_space(6.0);
    interacted
}

/// Drop target for the optional profile picture.
fn picture_dropzone(ui: &mut egui::Ui, picture: Option<&PictureFile>) {
    ui.add_space(4.0);
    egui::Frame::default()
        .stroke(egui::Stroke::new(1.0, colors::SEPARATOR))
        .corner_radius(4)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(INPUT_WIDTH + LABEL_WIDTH);
            match picture {
                Some(file) => {
                    ui.colored_label(colors::TEXT_LIGHT, format!("🖼 {}", file.name));
                    ui.colored_label(colors::TEXT_SECONDARY, "Drop another file to replace");
                }
                None => {
                    ui.colored_label(colors::TEXT_SECONDARY, "Add picture here (drop a file)");
                }
            }
        });
    ui.add_space(6.0);
}

/// Turn a file dropped onto the window into the form's picture. Only the
/// register mode has a picture field; drops elsewhere are ignored.
fn handle_dropped_picture(ui: &egui::Ui, state: &mut AppState) {
    if state.form.mode() != FormMode::Register {
        return;
    }
    let dropped = ui.ctx().input(|i| i.raw.dropped_files.clone());
    let Some(file) = dropped.into_iter().next() else {
        return;
    };
    if let Some(picture) = load_dropped_file(file) {
        state.form.set_picture(picture);
        state.form.revalidate();
    }
}

fn load_dropped_file(file: egui::DroppedFile) -> Option<PictureFile> {
    if let Some(bytes) = file.bytes {
        let name = if file.name.is_empty() {
            "picture".to_string()
        } else {
            file.name.clone()
        };
        return Some(PictureFile {
            name,
            bytes: bytes.to_vec(),
        });
    }

    let path = file.path?;
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::warn!(%error, path = %path.display(), "could not read dropped file");
            return None;
        }
    };
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "picture".to_string());
    Some(PictureFile { name, bytes })
}
