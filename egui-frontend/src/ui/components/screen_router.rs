//! # Screen Router Module
//!
//! Routes the phone frame's content area to the screen for the current
//! route. Dashboard, cards and support share the layout with the bottom
//! navigation strip; the send-money wizard takes the full height and brings
//! its own back affordance instead.

use eframe::egui;

use crate::ui::app_state::BankingApp;
use crate::ui::routing::Route;

const BOTTOM_NAV_HEIGHT: f32 = 72.0;

impl BankingApp {
    /// Render the current screen into the phone frame's content rect.
    pub fn render_current_screen(&mut self, ui: &mut egui::Ui) {
        match self.current_route {
            Route::SendMoney => self.render_send_money(ui),
            Route::Dashboard | Route::Cards | Route::Support => {
                let content_rect = ui.max_rect();
                let screen_rect = egui::Rect::from_min_max(
                    content_rect.min,
                    egui::pos2(content_rect.max.x, content_rect.max.y - BOTTOM_NAV_HEIGHT),
                );
                let nav_rect = egui::Rect::from_min_max(
                    egui::pos2(content_rect.min.x, screen_rect.max.y),
                    content_rect.max,
                );

                let mut screen_ui =
                    ui.child_ui(screen_rect, egui::Layout::top_down(egui::Align::Min), None);
                match self.current_route {
                    Route::Dashboard => self.render_dashboard(&mut screen_ui),
                    Route::Cards => self.render_cards(&mut screen_ui),
                    Route::Support => self.render_support(&mut screen_ui),
                    Route::SendMoney => unreachable!(),
                }

                let mut nav_ui =
                    ui.child_ui(nav_rect, egui::Layout::top_down(egui::Align::Min), None);
                self.render_bottom_nav(&mut nav_ui);
            }
        }
    }
}
