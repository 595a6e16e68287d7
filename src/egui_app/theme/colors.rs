//! Color constants for the storefront.

use eframe::egui::Color32;

/// Page background
pub const PAGE_BG: Color32 = Color32::from_rgb(0xF3, 0xF4, 0xF6);

/// Cards, forms and dialogs
pub const SURFACE: Color32 = Color32::WHITE;

/// Card and input border
pub const BORDER: Color32 = Color32::from_rgb(0xD1, 0xD5, 0xDB);

/// Primary action color - Indigo
pub const PRIMARY: Color32 = Color32::from_rgb(0x4F, 0x46, 0xE5);

/// Primary hover
pub const PRIMARY_HOVER: Color32 = Color32::from_rgb(0x43, 0x38, 0xCA);

/// Selected chip background
pub const CHIP_SELECTED: Color32 = Color32::from_rgb(0xE0, 0xE7, 0xFF);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);

/// Secondary text
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);

/// Text on primary backgrounds
pub const TEXT_LIGHT: Color32 = Color32::WHITE;

/// Price text
pub const PRICE: Color32 = Color32::from_rgb(0x05, 0x96, 0x69);

/// Struck-through original price
pub const PRICE_ORIGINAL: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);

/// Rating stars
pub const RATING: Color32 = Color32::from_rgb(0xF5, 0x9E, 0x0B);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x10, 0xB9, 0x81);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);

/// Toast background
pub const TOAST_BG: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);

/// Tab bar background
pub const TAB_BAR_BG: Color32 = Color32::WHITE;
