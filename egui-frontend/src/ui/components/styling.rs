//! # Styling Module
//!
//! Global egui style setup plus the shared card-drawing helper.
//!
//! ## Key Functions:
//! - `setup_banking_style()` - Configure global egui styling
//! - `draw_card_background()` - Card surface with border and soft shadow
//!
//! The app is aimed at an older user, so everything leans large: big text
//! styles, generous button padding, high-contrast text.

use eframe::egui;

use crate::ui::components::theme::colors;

/// Setup large-text, rounded styling for the entire application
pub fn setup_banking_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.window_fill = colors::DESKTOP_BACKGROUND;
        style.visuals.panel_fill = colors::DESKTOP_BACKGROUND;
        style.visuals.button_frame = true;
        style.visuals.override_text_color = None;

        // Larger text for readability
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            egui::FontId::new(12.0, egui::FontFamily::Proportional),
        );

        // Rounded corners and generous padding
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(10.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(10.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(10.0);

        style
    });
}

/// Draw a card surface with border and a soft shadow, returning nothing; the
/// caller lays out content on top with `child_ui`.
pub fn draw_card_background(ui: &mut egui::Ui, rect: egui::Rect, fill: egui::Color32) {
    let painter = ui.painter();

    let shadow_rect = egui::Rect::from_min_size(rect.min + egui::vec2(1.5, 1.5), rect.size());
    painter.rect_filled(
        shadow_rect,
        egui::Rounding::same(14.0),
        egui::Color32::from_rgba_premultiplied(0, 0, 0, 14),
    );

    painter.rect_filled(rect, egui::Rounding::same(14.0), fill);
    painter.rect_stroke(
        rect,
        egui::Rounding::same(14.0),
        egui::Stroke::new(1.0, colors::CARD_BORDER),
    );
}
