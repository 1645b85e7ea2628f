//! # Theme Configuration
//!
//! Centralized color configuration for the banking mock-up. All visual
//! styling should use these constants so the palette stays consistent.
//!
//! The palette is a warm, high-contrast one: cream surroundings, deep green
//! primary actions, navy account cards. Deliberately calm compared to the
//! rest of the desktop.

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background and container colors
    pub layout: LayoutColors,
    /// Text colors
    pub typography: TypographyColors,
    /// Buttons, badges, highlighted elements
    pub interactive: InteractiveColors,
    /// Contact avatar tints
    pub avatar: AvatarColors,
}

/// Background and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Desktop area surrounding the phone frame
    pub desktop_background: Color32,
    /// Screen background inside the phone frame
    pub phone_background: Color32,
    /// Phone frame border
    pub phone_border: Color32,
    /// Card and list-row background
    pub card_background: Color32,
    pub card_border: Color32,
    /// Hairline separators (review rows, nav top border)
    pub divider: Color32,
    /// Muted fill for secondary surfaces (keypad keys, outgoing icons)
    pub muted_background: Color32,
}

/// Text colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    /// Text on top of the navy/green filled cards
    pub on_dark: Color32,
}

/// Buttons, badges, highlighted elements
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Deep green used for primary actions and incoming amounts
    pub primary: Color32,
    /// Light green tint behind primary glyphs and the active nav tab
    pub primary_tint: Color32,
    /// Navy used for the balance card and the first account card
    pub secondary: Color32,
    /// Green fill of the second account card
    pub card_fill_alt: Color32,
}

/// Contact avatar tints, one per `shared::ContactColor`
#[derive(Debug, Clone)]
pub struct AvatarColors {
    pub green: Color32,
    pub navy: Color32,
    pub amber: Color32,
    pub neutral: Color32,
}

/// The current active theme
pub const CURRENT_THEME: Theme = Theme {
    layout: LayoutColors {
        desktop_background: Color32::from_rgb(235, 228, 213),
        phone_background: Color32::from_rgb(250, 248, 243),
        phone_border: Color32::from_rgb(200, 193, 180),
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(226, 220, 208),
        divider: Color32::from_rgb(232, 227, 217),
        muted_background: Color32::from_rgb(238, 234, 226),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(40, 40, 36),
        secondary: Color32::from_rgb(122, 117, 106),
        on_dark: Color32::from_rgb(250, 248, 243),
    },
    interactive: InteractiveColors {
        primary: Color32::from_rgb(27, 94, 74),
        primary_tint: Color32::from_rgb(223, 238, 231),
        secondary: Color32::from_rgb(28, 45, 74),
        card_fill_alt: Color32::from_rgb(36, 110, 88),
    },
    avatar: AvatarColors {
        green: Color32::from_rgb(198, 226, 213),
        navy: Color32::from_rgb(205, 214, 231),
        amber: Color32::from_rgb(244, 223, 183),
        neutral: Color32::from_rgb(230, 226, 218),
    },
};

impl Theme {
    /// Avatar tint for a contact's color tag
    pub fn avatar_fill(&self, color: shared::ContactColor) -> Color32 {
        match color {
            shared::ContactColor::Green => self.avatar.green,
            shared::ContactColor::Navy => self.avatar.navy,
            shared::ContactColor::Amber => self.avatar.amber,
            shared::ContactColor::Neutral => self.avatar.neutral,
        }
    }
}

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const DESKTOP_BACKGROUND: Color32 = CURRENT_THEME.layout.desktop_background;
    pub const PHONE_BACKGROUND: Color32 = CURRENT_THEME.layout.phone_background;
    pub const PHONE_BORDER: Color32 = CURRENT_THEME.layout.phone_border;
    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;
    pub const DIVIDER: Color32 = CURRENT_THEME.layout.divider;
    pub const MUTED_BACKGROUND: Color32 = CURRENT_THEME.layout.muted_background;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_ON_DARK: Color32 = CURRENT_THEME.typography.on_dark;

    pub const PRIMARY: Color32 = CURRENT_THEME.interactive.primary;
    pub const PRIMARY_TINT: Color32 = CURRENT_THEME.interactive.primary_tint;
    pub const SECONDARY: Color32 = CURRENT_THEME.interactive.secondary;
    pub const CARD_FILL_ALT: Color32 = CURRENT_THEME.interactive.card_fill_alt;
}
