//! Gallery theme and color utilities.

use ratatui::style::Color;
use showcase_core::ListIndicator;

#[derive(Debug, Clone)]
pub struct GalleryTheme {
    pub bg: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl GalleryTheme {
    pub fn gallery() -> Self {
        Self {
            bg: Color::Rgb(12, 12, 14),
            bg_highlight: Color::Rgb(40, 40, 46),
            primary: Color::Rgb(255, 183, 77),
            primary_dim: Color::Rgb(140, 100, 42),
            secondary: Color::Rgb(129, 212, 250),
            success: Color::Rgb(129, 199, 132),
            warning: Color::Rgb(255, 213, 79),
            error: Color::Rgb(229, 115, 115),
            info: Color::Rgb(129, 212, 250),
            text: Color::Rgb(240, 240, 240),
            text_dim: Color::Rgb(150, 150, 150),
            text_muted: Color::Rgb(80, 80, 80),
            border: Color::Rgb(80, 80, 80),
            border_focus: Color::Rgb(255, 183, 77),
        }
    }
}

pub fn indicator_color(indicator: ListIndicator, theme: &GalleryTheme) -> Color {
    match indicator {
        ListIndicator::Loading => theme.info,
        ListIndicator::EndOfResults => theme.text_dim,
        ListIndicator::Empty => theme.warning,
        ListIndicator::None => theme.text_muted,
    }
}

/// Color for a catalog item's `type` label.
pub fn kind_color(kind: &str, theme: &GalleryTheme) -> Color {
    match kind.trim().to_ascii_uppercase().as_str() {
        "WEBSITE" | "LANDING_PAGE" => theme.primary,
        "REEL" | "CORPORATE_VIDEO" => theme.secondary,
        "BROCHURE" | "LOGO" => theme.success,
        _ => theme.text_dim,
    }
}
