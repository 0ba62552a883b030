//! Color Constants for the Sociable Theme
//!
//! A cool blue/slate scheme: dark panels, light text, a single accent for
//! primary actions.

use eframe::egui::Color32;

/// Dark background for main areas
pub const BG_DARK: Color32 = Color32::from_rgb(0x16, 0x1B, 0x26);

/// Card/panel background - slightly lifted from the main background
pub const CARD_BG: Color32 = Color32::from_rgb(0x1F, 0x26, 0x33);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x10, 0x14, 0x1C);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE8, 0xEC, 0xF4);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8A, 0x94, 0xA6);

/// Accent color for highlights and links
pub const ACCENT: Color32 = Color32::from_rgb(0x4C, 0x8D, 0xFF);

/// Button primary background
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x2E, 0x5C, 0xB8);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0x2C, 0x35, 0x45);

/// Avatar circle fill
pub const AVATAR_BG: Color32 = Color32::from_rgb(0x3A, 0x4A, 0x66);
