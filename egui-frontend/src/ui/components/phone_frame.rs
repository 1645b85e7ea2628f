//! # Phone Frame Module
//!
//! Draws the decorative phone viewport the whole app renders inside: rounded
//! body, border, and a fake status bar with a fixed clock. Purely cosmetic,
//! no state. `draw_phone_frame` paints everything and hands back the rect
//! the current screen should be laid out in.

use eframe::egui;

use crate::ui::components::theme::colors;

pub const PHONE_WIDTH: f32 = 400.0;
pub const PHONE_HEIGHT: f32 = 780.0;
const BODY_ROUNDING: f32 = 36.0;
const BORDER_WIDTH: f32 = 4.0;
const STATUS_BAR_HEIGHT: f32 = 30.0;

/// Clock readout is a static string; there is no timer anywhere in the app.
const STATUS_CLOCK: &str = "9:41";

/// Paint the phone frame centered in `ui` and return the content rect below
/// the status bar.
pub fn draw_phone_frame(ui: &mut egui::Ui) -> egui::Rect {
    let available = ui.max_rect();
    let frame_rect = egui::Rect::from_center_size(
        available.center(),
        egui::vec2(PHONE_WIDTH, PHONE_HEIGHT),
    );

    let painter = ui.painter();

    // Drop shadow under the device
    painter.rect_filled(
        frame_rect.translate(egui::vec2(0.0, 6.0)),
        egui::Rounding::same(BODY_ROUNDING + BORDER_WIDTH),
        egui::Color32::from_rgba_premultiplied(0, 0, 0, 22),
    );

    // Border ring, then screen surface
    painter.rect_filled(
        frame_rect.expand(BORDER_WIDTH),
        egui::Rounding::same(BODY_ROUNDING + BORDER_WIDTH),
        colors::PHONE_BORDER,
    );
    painter.rect_filled(
        frame_rect,
        egui::Rounding::same(BODY_ROUNDING),
        colors::PHONE_BACKGROUND,
    );

    // Status bar: clock on the left, three signal/battery blocks on the right
    let status_rect = egui::Rect::from_min_size(
        frame_rect.min + egui::vec2(24.0, 10.0),
        egui::vec2(frame_rect.width() - 48.0, STATUS_BAR_HEIGHT),
    );
    painter.text(
        status_rect.left_center(),
        egui::Align2::LEFT_CENTER,
        STATUS_CLOCK,
        egui::FontId::proportional(14.0),
        colors::TEXT_PRIMARY,
    );

    let block_height = 12.0;
    let mut right_edge = status_rect.right();
    for (width, color) in [
        (24.0, colors::PRIMARY),
        (16.0, colors::TEXT_SECONDARY),
        (16.0, colors::TEXT_SECONDARY),
    ] {
        let block_rect = egui::Rect::from_min_size(
            egui::pos2(right_edge - width, status_rect.center().y - block_height / 2.0),
            egui::vec2(width, block_height),
        );
        painter.rect_filled(block_rect, egui::Rounding::same(3.0), color);
        right_edge -= width + 6.0;
    }

    egui::Rect::from_min_max(
        egui::pos2(frame_rect.min.x, status_rect.max.y + 2.0),
        frame_rect.max - egui::vec2(0.0, 8.0),
    )
}
