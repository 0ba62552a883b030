//! Sociable - Main Library
//!
//! Sociable is a native desktop client for a social-networking service,
//! built with egui/eframe on top of an HTTP authentication backend.
//!
//! # Overview
//!
//! This library provides the client-side functionality for Sociable:
//! - A login/register form with schema-driven validation
//! - Submission sequencing with a double-submit guard
//! - Session establishment against the remote auth service
//! - A home page showing the signed-in user and their friends
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared with the backend wire contract
//!   - User record, auth request/response structures
//!   - Configuration and error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Authentication form state machine and validation schema
//!   - HTTP client for the auth endpoints
//!   - Views, theme, and application state

pub mod egui_app;
pub mod shared;
