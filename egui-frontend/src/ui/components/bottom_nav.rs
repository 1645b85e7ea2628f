//! # Bottom Navigation Module
//!
//! The shared three-tab bar at the bottom of the dashboard, cards and
//! support screens. Which tab is highlighted is derived from the current
//! route via `NavTab::for_route`; the bar itself holds no state.

use eframe::egui;

use crate::ui::app_state::BankingApp;
use crate::ui::components::theme::colors;
use crate::ui::routing::NavTab;

impl BankingApp {
    /// Render the bottom navigation bar into its reserved strip.
    pub fn render_bottom_nav(&mut self, ui: &mut egui::Ui) {
        // Top border line separating the bar from the screen content
        let top = ui.max_rect().min;
        ui.painter().hline(
            top.x + 12.0..=ui.max_rect().max.x - 12.0,
            top.y,
            egui::Stroke::new(1.0, colors::DIVIDER),
        );
        ui.add_space(6.0);

        let active = NavTab::for_route(self.current_route);
        let mut pressed: Option<NavTab> = None;

        ui.columns(3, |columns| {
            for (i, tab) in NavTab::ALL.iter().enumerate() {
                columns[i].vertical_centered(|ui| {
                    let is_active = *tab == active;
                    let text_color = if is_active {
                        colors::PRIMARY
                    } else {
                        colors::TEXT_SECONDARY
                    };
                    let button = egui::Button::new(
                        egui::RichText::new(format!("{}\n{}", tab.glyph(), tab.label()))
                            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                            .color(text_color),
                    )
                    .min_size(egui::vec2(92.0, 48.0))
                    .rounding(egui::Rounding::same(12.0))
                    .fill(if is_active {
                        colors::PRIMARY_TINT
                    } else {
                        egui::Color32::TRANSPARENT
                    })
                    .stroke(egui::Stroke::NONE);

                    if ui.add(button).clicked() {
                        pressed = Some(*tab);
                    }
                });
            }
        });

        if let Some(tab) = pressed {
            self.navigate(tab.target_route());
        }
    }
}
