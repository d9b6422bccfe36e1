//! Color theme constants.

use ratatui::style::Color;

use crate::traits::Severity;

// ============================================================================
// Base palette
// ============================================================================

pub const COLOR_BORDER: Color = Color::DarkGray;

/// Titles and the panel name
pub const COLOR_HEADER: Color = Color::White;

/// Focused control
pub const COLOR_FOCUS: Color = Color::Rgb(0, 122, 204);

pub const COLOR_DIM: Color = Color::DarkGray;

/// Text typed into inputs
pub const COLOR_INPUT: Color = Color::White;

/// Operator names and links
pub const COLOR_ACCENT: Color = Color::Cyan;

/// Remove buttons
pub const COLOR_DANGER: Color = Color::Red;

// ============================================================================
// Notifications
// ============================================================================

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_INFO: Color = Color::Rgb(0, 122, 204);

/// Background for the notification box
pub const COLOR_TOAST_BG: Color = Color::Rgb(10, 15, 35);

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => COLOR_INFO,
        Severity::Success => COLOR_SUCCESS,
        Severity::Warning => COLOR_WARNING,
        Severity::Error => COLOR_ERROR,
    }
}
