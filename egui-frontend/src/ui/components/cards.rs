//! # Cards Screen
//!
//! Static list of account/card summaries. Each card shows its masked number,
//! type, balance and an ACTIVE/FROZEN badge. Cards are not navigable; the
//! per-card transaction screen belongs to a collaborator outside this
//! mock-up.

use eframe::egui;
use shared::AccountCard;

use crate::ui::app_state::BankingApp;
use crate::ui::components::theme::colors;

impl BankingApp {
    /// Render the cards screen.
    pub fn render_cards(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .id_source("cards_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(20.0, 8.0))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new("Your Cards")
                                .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(colors::TEXT_PRIMARY),
                        );
                        ui.label(
                            egui::RichText::new("Manage your accounts and cards.")
                                .color(colors::TEXT_SECONDARY),
                        );

                        ui.add_space(12.0);
                        for (i, card) in shared::sample_account_cards().iter().enumerate() {
                            let fill = if i == 0 {
                                colors::SECONDARY
                            } else {
                                colors::CARD_FILL_ALT
                            };
                            draw_account_card(ui, card, fill);
                            ui.add_space(14.0);
                        }
                    });
            });
    }
}

/// One full-width filled account card.
fn draw_account_card(ui: &mut egui::Ui, card: &AccountCard, fill: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 170.0),
        egui::Sense::hover(),
    );
    ui.painter()
        .rect_filled(rect, egui::Rounding::same(16.0), fill);

    let painter = ui.painter();
    let left = rect.min.x + 20.0;
    let right = rect.max.x - 20.0;

    painter.text(
        egui::pos2(left, rect.min.y + 26.0),
        egui::Align2::LEFT_CENTER,
        "💳",
        egui::FontId::proportional(24.0),
        colors::TEXT_ON_DARK,
    );
    painter.text(
        egui::pos2(right, rect.min.y + 26.0),
        egui::Align2::RIGHT_CENTER,
        if card.active { "ACTIVE" } else { "FROZEN" },
        egui::FontId::proportional(11.0),
        colors::TEXT_ON_DARK.gamma_multiply(0.7),
    );

    painter.text(
        egui::pos2(left, rect.center().y + 4.0),
        egui::Align2::LEFT_CENTER,
        &card.masked_number,
        egui::FontId::monospace(22.0),
        colors::TEXT_ON_DARK,
    );

    painter.text(
        egui::pos2(left, rect.max.y - 44.0),
        egui::Align2::LEFT_CENTER,
        &card.card_type,
        egui::FontId::proportional(12.0),
        colors::TEXT_ON_DARK.gamma_multiply(0.7),
    );
    painter.text(
        egui::pos2(left, rect.max.y - 22.0),
        egui::Align2::LEFT_CENTER,
        &card.balance,
        egui::FontId::proportional(20.0),
        colors::TEXT_ON_DARK,
    );
    painter.text(
        egui::pos2(right, rect.max.y - 24.0),
        egui::Align2::RIGHT_CENTER,
        "🔒",
        egui::FontId::proportional(15.0),
        colors::TEXT_ON_DARK.gamma_multiply(0.5),
    );
}
