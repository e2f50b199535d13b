use egui::{Align2, Color32, FontId, Response, Rounding, Sense, Ui, Vec2};

pub const BRAND_COLOR: Color32 = Color32::from_rgb(37, 99, 235);

pub fn brand_mark(ui: &mut Ui, size: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();

        painter.rect_filled(rect, Rounding::same(size * 0.2), BRAND_COLOR);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "</>",
            FontId::monospace(size * 0.4),
            Color32::WHITE,
        );
    }

    response
}
