use eframe::egui;

use crate::ui::app_state::BankingApp;
use crate::ui::components::phone_frame::draw_phone_frame;
use crate::ui::components::setup_banking_style;
use crate::ui::components::theme::colors;

impl eframe::App for BankingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_banking_style(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(colors::DESKTOP_BACKGROUND))
            .show(ctx, |ui| {
                let content_rect = draw_phone_frame(ui);
                let mut content_ui =
                    ui.child_ui(content_rect, egui::Layout::top_down(egui::Align::Min), None);
                self.render_current_screen(&mut content_ui);
            });
    }
}
