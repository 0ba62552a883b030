//! Theme Module
//!
//! Color constants for the Sociable UI.

pub mod colors;

pub use colors::*;
