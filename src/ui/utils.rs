use egui::{widget_text::WidgetTextGalley, TextStyle, Ui, WidgetText};

pub fn layout_wrapped_text(
    ui: &Ui,
    text: impl Into<WidgetText>,
    wrap_width: f32,
    style: TextStyle,
) -> WidgetTextGalley {
    let text: WidgetText = text.into();

    text.into_galley(ui, Some(true), wrap_width, style)
}
