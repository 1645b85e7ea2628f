//! # Dashboard Screen
//!
//! Home screen: time-of-day greeting, balance card, three shortcut actions
//! and the fixed recent-activity list. Everything rendered here is
//! compile-time sample data; the only computation is picking the greeting
//! band from the current hour.

use chrono::Timelike;
use eframe::egui;
use shared::{format_signed_amount, Transaction, TransactionDirection};

use crate::ui::app_state::BankingApp;
use crate::ui::components::styling::draw_card_background;
use crate::ui::components::theme::colors;
use crate::ui::routing::Route;

impl BankingApp {
    /// Render the dashboard screen.
    pub fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .id_source("dashboard_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(20.0, 8.0))
                    .show(ui, |ui| {
                        let hour = chrono::Local::now().hour();
                        ui.label(
                            egui::RichText::new(format!("{},", shared::greeting_for_hour(hour)))
                                .color(colors::TEXT_SECONDARY),
                        );
                        ui.label(
                            egui::RichText::new(shared::ACCOUNT_HOLDER)
                                .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(colors::TEXT_PRIMARY),
                        );

                        ui.add_space(12.0);
                        draw_balance_card(ui);

                        ui.add_space(16.0);
                        self.draw_shortcut_buttons(ui);

                        ui.add_space(16.0);
                        ui.label(
                            egui::RichText::new("Recent Activity")
                                .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(colors::TEXT_PRIMARY),
                        );
                        ui.add_space(4.0);
                        for transaction in shared::recent_transactions() {
                            draw_transaction_row(ui, &transaction);
                            ui.add_space(6.0);
                        }
                    });
            });
    }

    /// The three shortcut tiles. "View History" is a placeholder with no
    /// wired action.
    fn draw_shortcut_buttons(&mut self, ui: &mut egui::Ui) {
        let shortcuts: [(&str, &str, Option<Route>); 3] = [
            ("📤", "Send Money", Some(Route::SendMoney)),
            ("🕐", "View History", None),
            ("❓", "Help", Some(Route::Support)),
        ];

        let mut pressed: Option<Route> = None;
        ui.columns(3, |columns| {
            for (i, (glyph, label, target)) in shortcuts.iter().enumerate() {
                columns[i].vertical_centered_justified(|ui| {
                    let button = egui::Button::new(
                        egui::RichText::new(format!("{}\n{}", glyph, label))
                            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_PRIMARY),
                    )
                    .min_size(egui::vec2(0.0, 88.0))
                    .rounding(egui::Rounding::same(14.0))
                    .fill(colors::CARD_BACKGROUND)
                    .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER));

                    if ui.add(button).clicked() {
                        pressed = *target;
                    }
                });
            }
        });

        if let Some(route) = pressed {
            self.navigate(route);
        }
    }
}

/// Navy balance card with the static account figure.
fn draw_balance_card(ui: &mut egui::Ui) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 124.0),
        egui::Sense::hover(),
    );
    ui.painter()
        .rect_filled(rect, egui::Rounding::same(16.0), colors::SECONDARY);

    let painter = ui.painter();
    let left = rect.min.x + 20.0;
    painter.text(
        egui::pos2(left, rect.min.y + 22.0),
        egui::Align2::LEFT_CENTER,
        "Your Balance",
        egui::FontId::proportional(13.0),
        colors::TEXT_ON_DARK.gamma_multiply(0.7),
    );
    painter.text(
        egui::pos2(left, rect.min.y + 58.0),
        egui::Align2::LEFT_CENTER,
        shared::PRIMARY_BALANCE_DISPLAY,
        egui::FontId::proportional(34.0),
        colors::TEXT_ON_DARK,
    );
    painter.text(
        egui::pos2(left, rect.max.y - 22.0),
        egui::Align2::LEFT_CENTER,
        shared::PRIMARY_ACCOUNT_CAPTION,
        egui::FontId::proportional(13.0),
        colors::TEXT_ON_DARK.gamma_multiply(0.6),
    );
}

/// One recent-activity row: direction icon, counterparty, date, signed amount.
fn draw_transaction_row(ui: &mut egui::Ui, transaction: &Transaction) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 64.0),
        egui::Sense::hover(),
    );
    draw_card_background(ui, rect, colors::CARD_BACKGROUND);

    let incoming = transaction.direction == TransactionDirection::Incoming;
    let painter = ui.painter();

    // Direction icon in a tinted circle
    let icon_center = egui::pos2(rect.min.x + 32.0, rect.center().y);
    painter.circle_filled(
        icon_center,
        18.0,
        if incoming {
            colors::PRIMARY_TINT
        } else {
            colors::MUTED_BACKGROUND
        },
    );
    painter.text(
        icon_center,
        egui::Align2::CENTER_CENTER,
        if incoming { "↙" } else { "↗" },
        egui::FontId::proportional(16.0),
        if incoming {
            colors::PRIMARY
        } else {
            colors::TEXT_SECONDARY
        },
    );

    // Counterparty and date
    let text_left = rect.min.x + 60.0;
    painter.text(
        egui::pos2(text_left, rect.center().y - 10.0),
        egui::Align2::LEFT_CENTER,
        &transaction.counterparty,
        egui::FontId::proportional(15.0),
        colors::TEXT_PRIMARY,
    );
    painter.text(
        egui::pos2(text_left, rect.center().y + 11.0),
        egui::Align2::LEFT_CENTER,
        &transaction.date_label,
        egui::FontId::proportional(12.0),
        colors::TEXT_SECONDARY,
    );

    // Signed amount, green for incoming
    painter.text(
        egui::pos2(rect.max.x - 16.0, rect.center().y),
        egui::Align2::RIGHT_CENTER,
        format_signed_amount(transaction.amount, transaction.direction),
        egui::FontId::proportional(16.0),
        if incoming {
            colors::PRIMARY
        } else {
            colors::TEXT_PRIMARY
        },
    );
}
