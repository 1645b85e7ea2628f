//! # Support Screen
//!
//! Static list of help options. The rows carry a press affordance but no
//! wired action; there is no phone, chat or FAQ backend behind this mock-up.

use eframe::egui;
use shared::SupportOption;

use crate::ui::app_state::BankingApp;
use crate::ui::components::styling::draw_card_background;
use crate::ui::components::theme::colors;

impl BankingApp {
    /// Render the support screen.
    pub fn render_support(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .id_source("support_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(20.0, 8.0))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new("How Can We Help?")
                                .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(colors::TEXT_PRIMARY),
                        );
                        ui.label(
                            egui::RichText::new(
                                "We're always here for you. Choose an option below.",
                            )
                            .color(colors::TEXT_SECONDARY),
                        );

                        ui.add_space(12.0);
                        for option in shared::support_options() {
                            draw_support_option(ui, &option);
                            ui.add_space(10.0);
                        }
                    });
            });
    }
}

/// One help-option card: icon tile, title, description, call-to-action label.
fn draw_support_option(ui: &mut egui::Ui, option: &SupportOption) {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 104.0),
        egui::Sense::click(),
    );
    draw_card_background(ui, rect, colors::CARD_BACKGROUND);
    if response.hovered() {
        ui.painter().rect_stroke(
            rect,
            egui::Rounding::same(14.0),
            egui::Stroke::new(1.5, colors::PRIMARY),
        );
    }

    let painter = ui.painter();

    // Icon tile
    let tile_rect = egui::Rect::from_min_size(
        rect.min + egui::vec2(16.0, 16.0),
        egui::vec2(44.0, 44.0),
    );
    painter.rect_filled(tile_rect, egui::Rounding::same(10.0), colors::PRIMARY_TINT);
    painter.text(
        tile_rect.center(),
        egui::Align2::CENTER_CENTER,
        &option.icon,
        egui::FontId::proportional(18.0),
        colors::PRIMARY,
    );

    let text_left = tile_rect.max.x + 14.0;
    painter.text(
        egui::pos2(text_left, rect.min.y + 26.0),
        egui::Align2::LEFT_CENTER,
        &option.title,
        egui::FontId::proportional(16.0),
        colors::TEXT_PRIMARY,
    );
    painter.text(
        egui::pos2(text_left, rect.min.y + 50.0),
        egui::Align2::LEFT_CENTER,
        &option.description,
        egui::FontId::proportional(13.0),
        colors::TEXT_SECONDARY,
    );
    painter.text(
        egui::pos2(text_left, rect.min.y + 76.0),
        egui::Align2::LEFT_CENTER,
        &option.action_label,
        egui::FontId::proportional(14.0),
        colors::PRIMARY,
    );
}
