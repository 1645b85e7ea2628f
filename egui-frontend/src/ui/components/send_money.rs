//! # Send Money Screen
//!
//! Renders the four-step transfer wizard. All sequencing lives in
//! `SendMoneyState`; this module only draws the current step and forwards
//! button presses to it. The screen has no bottom navigation; its back
//! button either steps the wizard back or exits to the dashboard.

use eframe::egui;
use shared::Contact;

use crate::ui::app_state::BankingApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::routing::Route;
use crate::ui::state::{BackAction, KeypadKey, WizardStep};

const KEYPAD_ROWS: [[&str; 3]; 4] = [
    ["1", "2", "3"],
    ["4", "5", "6"],
    ["7", "8", "9"],
    [".", "0", "⌫"],
];

impl BankingApp {
    /// Render the send-money wizard screen.
    pub fn render_send_money(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(20.0, 4.0))
            .show(ui, |ui| {
                self.draw_wizard_header(ui);
                ui.add_space(8.0);
                draw_progress_bar(ui, self.send_money.step);
                ui.add_space(14.0);

                egui::ScrollArea::vertical()
                    .id_source("send_scroll")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| match self.send_money.step {
                        WizardStep::SelectContact => self.draw_select_contact_step(ui),
                        WizardStep::EnterAmount => self.draw_enter_amount_step(ui),
                        WizardStep::Review => self.draw_review_step(ui),
                        WizardStep::Success => self.draw_success_step(ui),
                    });
            });
    }

    /// Back button and title. Back at step 1 leaves the flow entirely.
    fn draw_wizard_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let back_button = egui::Button::new(
                egui::RichText::new("←")
                    .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_PRIMARY),
            )
            .min_size(egui::vec2(40.0, 40.0))
            .rounding(egui::Rounding::same(20.0))
            .fill(colors::MUTED_BACKGROUND)
            .stroke(egui::Stroke::NONE);

            if ui.add(back_button).clicked() {
                if self.send_money.go_back() == BackAction::ExitFlow {
                    self.navigate(Route::Dashboard);
                }
            }

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Send Money")
                    .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
        });
    }

    fn draw_select_contact_step(&mut self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("Who are you sending money to?")
                .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        ui.label(
            egui::RichText::new("Choose someone from your contacts.")
                .color(colors::TEXT_SECONDARY),
        );
        ui.add_space(10.0);

        for contact in shared::sample_contacts() {
            if draw_contact_row(ui, &contact).clicked() {
                self.send_money.select_contact(contact);
            }
            ui.add_space(8.0);
        }
    }

    fn draw_enter_amount_step(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("How much?")
                    .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new(format!("Sending to {}", self.send_money.contact_name()))
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(14.0);
            ui.label(
                egui::RichText::new(self.send_money.display_amount())
                    .font(egui::FontId::new(40.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
        });

        ui.add_space(16.0);
        self.draw_keypad(ui);
        ui.add_space(16.0);

        let continue_button = egui::Button::new(
            egui::RichText::new("Continue")
                .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                .color(colors::TEXT_ON_DARK),
        )
        .min_size(egui::vec2(ui.available_width(), 52.0))
        .rounding(egui::Rounding::same(14.0))
        .fill(colors::PRIMARY);

        if ui
            .add_enabled(self.send_money.can_continue(), continue_button)
            .clicked()
        {
            self.send_money.confirm_amount();
        }
    }

    /// Digits, one decimal point, one delete key. All entry guards live in
    /// the wizard state, not here.
    fn draw_keypad(&mut self, ui: &mut egui::Ui) {
        let key_size = egui::vec2(76.0, 56.0);
        let grid_width = 3.0 * key_size.x + 2.0 * ui.spacing().item_spacing.x;

        for row in KEYPAD_ROWS {
            ui.horizontal(|ui| {
                ui.add_space(((ui.available_width() - grid_width) / 2.0).max(0.0));
                for key in row {
                    let button = egui::Button::new(
                        egui::RichText::new(key)
                            .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_PRIMARY),
                    )
                    .min_size(key_size)
                    .rounding(egui::Rounding::same(12.0))
                    .fill(colors::CARD_BACKGROUND)
                    .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER));

                    if ui.add(button).clicked() {
                        match key {
                            "⌫" => self.send_money.delete_digit(),
                            "." => self.send_money.press_key(KeypadKey::Decimal),
                            digit => {
                                if let Ok(d) = digit.parse::<u8>() {
                                    self.send_money.press_key(KeypadKey::Digit(d));
                                }
                            }
                        }
                    }
                }
            });
        }
    }

    fn draw_review_step(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Review your transfer")
                    .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new("Please check everything is correct.")
                    .color(colors::TEXT_SECONDARY),
            );
        });
        ui.add_space(14.0);

        egui::Frame::none()
            .fill(colors::CARD_BACKGROUND)
            .stroke(egui::Stroke::new(1.5, colors::CARD_BORDER))
            .rounding(egui::Rounding::same(16.0))
            .inner_margin(egui::Margin::same(18.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                draw_review_row(
                    ui,
                    "Sending to",
                    egui::RichText::new(self.send_money.contact_name())
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                draw_review_divider(ui);
                draw_review_row(
                    ui,
                    "Amount",
                    egui::RichText::new(self.send_money.formatted_amount())
                        .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::PRIMARY),
                );
                draw_review_divider(ui);
                draw_review_row(
                    ui,
                    "From",
                    egui::RichText::new(shared::SOURCE_ACCOUNT_LABEL)
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
            });

        ui.add_space(16.0);
        let send_button = egui::Button::new(
            egui::RichText::new(format!("Send {}", self.send_money.formatted_amount()))
                .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                .color(colors::TEXT_ON_DARK),
        )
        .min_size(egui::vec2(ui.available_width(), 52.0))
        .rounding(egui::Rounding::same(14.0))
        .fill(colors::PRIMARY);

        if ui.add(send_button).clicked() {
            self.send_money.confirm_send();
        }
    }

    fn draw_success_step(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);

            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(80.0, 80.0), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), 40.0, colors::PRIMARY);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "✓",
                egui::FontId::proportional(34.0),
                colors::TEXT_ON_DARK,
            );

            ui.add_space(12.0);
            ui.label(
                egui::RichText::new("Money Sent!")
                    .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new(self.send_money.success_message())
                    .color(colors::TEXT_SECONDARY),
            );
            ui.label(
                egui::RichText::new("It should arrive within a few minutes.")
                    .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_SECONDARY),
            );
        });

        ui.add_space(24.0);
        let home_button = egui::Button::new(
            egui::RichText::new("Back to Home")
                .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                .color(colors::TEXT_ON_DARK),
        )
        .min_size(egui::vec2(ui.available_width(), 52.0))
        .rounding(egui::Rounding::same(14.0))
        .fill(colors::SECONDARY);

        if ui.add(home_button).clicked() {
            self.navigate(Route::Dashboard);
        }
    }
}

/// Four progress segments; filled up to and including the current step.
fn draw_progress_bar(ui: &mut egui::Ui, step: WizardStep) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 6.0),
        egui::Sense::hover(),
    );
    let gap = 8.0;
    let segment_width = (rect.width() - 3.0 * gap) / WizardStep::COUNT as f32;

    for i in 0..WizardStep::COUNT {
        let x = rect.min.x + i as f32 * (segment_width + gap);
        let segment = egui::Rect::from_min_size(
            egui::pos2(x, rect.min.y),
            egui::vec2(segment_width, rect.height()),
        );
        let filled = i < step.number();
        ui.painter().rect_filled(
            segment,
            egui::Rounding::same(3.0),
            if filled { colors::PRIMARY } else { colors::DIVIDER },
        );
    }
}

/// Contact list entry: avatar with initials, name, relation label.
fn draw_contact_row(ui: &mut egui::Ui, contact: &Contact) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 72.0),
        egui::Sense::click(),
    );

    let painter = ui.painter();
    let stroke_color = if response.hovered() {
        colors::PRIMARY
    } else {
        colors::CARD_BORDER
    };
    painter.rect_filled(rect, egui::Rounding::same(14.0), colors::CARD_BACKGROUND);
    painter.rect_stroke(
        rect,
        egui::Rounding::same(14.0),
        egui::Stroke::new(2.0, stroke_color),
    );

    let avatar_center = egui::pos2(rect.min.x + 38.0, rect.center().y);
    painter.circle_filled(avatar_center, 22.0, CURRENT_THEME.avatar_fill(contact.color));
    painter.text(
        avatar_center,
        egui::Align2::CENTER_CENTER,
        &contact.initials,
        egui::FontId::proportional(14.0),
        colors::TEXT_PRIMARY,
    );

    let text_left = rect.min.x + 72.0;
    painter.text(
        egui::pos2(text_left, rect.center().y - 11.0),
        egui::Align2::LEFT_CENTER,
        &contact.name,
        egui::FontId::proportional(16.0),
        colors::TEXT_PRIMARY,
    );
    painter.text(
        egui::pos2(text_left, rect.center().y + 12.0),
        egui::Align2::LEFT_CENTER,
        &contact.relation,
        egui::FontId::proportional(13.0),
        colors::TEXT_SECONDARY,
    );

    response
}

fn draw_review_row(ui: &mut egui::Ui, label: &str, value: egui::RichText) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(label)
                .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                .color(colors::TEXT_SECONDARY),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(value);
        });
    });
}

fn draw_review_divider(ui: &mut egui::Ui) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 1.0),
        egui::Sense::hover(),
    );
    ui.painter().hline(
        rect.min.x..=rect.max.x,
        rect.center().y,
        egui::Stroke::new(1.0, colors::DIVIDER),
    );
}
