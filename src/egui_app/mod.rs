//! egui Native Desktop App Module
//!
//! This module provides the native desktop application using egui/eframe
//! that connects to the HTTP backend for authentication.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Configuration management (server URL, token storage)
//! - **`auth`** - Authentication form state machine and HTTP client
//! - **`session`** - Session store consuming the issued credential
//! - **`state`** - Central application state shared across views
//! - **`views`** - Auth form and home page rendering
//! - **`theme`** - Color constants
//! - **`main`** - Main application entry point (binary)

pub mod auth;
pub mod config;
pub mod session;
pub mod state;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use auth::{AuthEvent, AuthForm, FormFields, FormMode, PictureFile, SubmissionState};
pub use config::Config;
pub use session::{Session, SessionStore};
pub use state::{AppState, AppView};
