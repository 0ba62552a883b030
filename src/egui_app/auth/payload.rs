//! Outbound request construction.
//!
//! Login submits its fields as JSON. Register submits a multipart form:
//! every text field under its wire name, a `picturePath` part holding the
//! selected file's name (empty string when none), and the raw file bytes
//! as a `picture` part only when a file was chosen.

use reqwest::multipart;

use crate::shared::LoginRequest;

use super::schema::fields;
use super::{FormFields, FormMode, PictureFile};

/// A prepared submission, tagged with the sequence number of the attempt
/// that produced it so a late response can be recognized as stale.
#[derive(Debug, Clone)]
pub struct AuthRequest {
    seq: u64,
    body: RequestBody,
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    Login(LoginRequest),
    Register(RegisterPayload),
}

/// Multipart payload for `/auth/register`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterPayload {
    /// Text parts in wire order, `picturePath` included.
    pub fields: Vec<(&'static str, String)>,
    /// Raw file attached as a separate part when present.
    pub picture: Option<PictureFile>,
}

impl RegisterPayload {
    pub fn picture_path(&self) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == fields::PICTURE_PATH)
            .map(|(_, value)| value.as_str())
    }

    pub fn into_multipart(self) -> multipart::Form {
        let mut form = multipart::Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        if let Some(picture) = self.picture {
            let part = multipart::Part::bytes(picture.bytes).file_name(picture.name);
            form = form.part(fields::PICTURE, part);
        }
        form
    }
}

impl AuthRequest {
    /// Build the outbound payload for the current field values.
    pub fn build(seq: u64, form_fields: &FormFields) -> Self {
        let body = match form_fields {
            FormFields::Login { email, password } => RequestBody::Login(LoginRequest {
                email: email.clone(),
                password: password.clone(),
            }),
            FormFields::Register {
                first_name,
                last_name,
                email,
                password,
                location,
                occupation,
                picture,
            } => {
                let picture_path = picture
                    .as_ref()
                    .map(|file| file.name.clone())
                    .unwrap_or_default();
                RequestBody::Register(RegisterPayload {
                    fields: vec![
                        (fields::FIRST_NAME, first_name.clone()),
                        (fields::LAST_NAME, last_name.clone()),
                        (fields::EMAIL, email.clone()),
                        (fields::PASSWORD, password.clone()),
                        (fields::LOCATION, location.clone()),
                        (fields::OCCUPATION, occupation.clone()),
                        (fields::PICTURE_PATH, picture_path),
                    ],
                    picture: picture.clone(),
                })
            }
        };
        Self { seq, body }
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn mode(&self) -> FormMode {
        match self.body {
            RequestBody::Login(_) => FormMode::Login,
            RequestBody::Register(_) => FormMode::Register,
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self.body {
            RequestBody::Login(_) => "/auth/login",
            RequestBody::Register(_) => "/auth/register",
        }
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    pub fn into_body(self) -> RequestBody {
        self.body
    }
}
