use super::utils::layout_wrapped_text;
use crate::{catalog::Tool, preferences::Theme};
use egui::{
    pos2, vec2, Color32, CursorIcon, Rect, Response, RichText, Rounding, Sense, Stroke,
    TextStyle, Ui, Widget, WidgetText,
};

const ICON_SIZE: f32 = 40.0;
const PADDING: f32 = 16.0;
const ROUNDING: f32 = 8.0;

#[derive(Debug, PartialEq)]
pub struct CardStyle {
    pub fill: Color32,
    pub stroke: Stroke,
    pub shadow: Option<Color32>,
}

pub fn card_style(theme: Theme, hovered: bool) -> CardStyle {
    match (theme, hovered) {
        (Theme::Light, false) => CardStyle {
            fill: Color32::from_rgba_unmultiplied(255, 255, 255, 242),
            stroke: Stroke::new(1.0, Color32::from_black_alpha(31)),
            shadow: None,
        },
        (Theme::Light, true) => CardStyle {
            fill: Color32::WHITE,
            stroke: Stroke::new(1.0, Color32::from_black_alpha(38)),
            shadow: Some(Color32::from_black_alpha(26)),
        },
        (Theme::Dark, false) => CardStyle {
            fill: Color32::from_white_alpha(13),
            stroke: Stroke::new(1.0, Color32::from_white_alpha(26)),
            shadow: None,
        },
        (Theme::Dark, true) => CardStyle {
            fill: Color32::from_white_alpha(26),
            stroke: Stroke::new(1.0, Color32::from_white_alpha(26)),
            shadow: Some(Color32::from_black_alpha(60)),
        },
    }
}

pub struct ToolCard<'a> {
    tool: &'a Tool,
    theme: Theme,
    open_label: WidgetText,
}

impl<'a> ToolCard<'a> {
    pub fn new(tool: &'a Tool, theme: Theme, open_label: impl Into<WidgetText>) -> Self {
        Self {
            tool,
            theme,
            open_label: open_label.into(),
        }
    }
}

impl<'a> Widget for ToolCard<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let width = ui.available_width();
        let text_width = (width - ICON_SIZE - PADDING * 3.0).max(ICON_SIZE);
        let spacing = ui.spacing().item_spacing.y;

        let text_color = ui.visuals().text_color();
        let link_color = if self.theme.is_dark() {
            Color32::from_rgb(96, 165, 250)
        } else {
            Color32::from_rgb(37, 99, 235)
        };

        let icon = layout_wrapped_text(
            ui,
            RichText::new(self.tool.icon).size(ICON_SIZE * 0.8),
            ICON_SIZE,
            TextStyle::Body,
        );
        let title = layout_wrapped_text(
            ui,
            RichText::new(self.tool.title).size(18.0).strong(),
            text_width,
            TextStyle::Heading,
        );
        let description = layout_wrapped_text(
            ui,
            RichText::new(self.tool.description).color(text_color.gamma_multiply(0.8)),
            text_width,
            TextStyle::Body,
        );
        let open = layout_wrapped_text(
            ui,
            self.open_label.color(link_color),
            text_width,
            TextStyle::Button,
        );

        let text_height =
            title.size().y + description.size().y + open.size().y + spacing * 2.0;
        let height = text_height.max(ICON_SIZE) + PADDING * 2.0;

        let response = ui.allocate_response(vec2(width, height), Sense::click());
        let hovered = ui.rect_contains_pointer(response.rect);

        if ui.is_rect_visible(response.rect) {
            let style = card_style(self.theme, hovered);

            // Lift the card slightly while hovered.
            let rect = if hovered {
                response.rect.translate(vec2(0.0, -2.0))
            } else {
                response.rect
            };

            let painter = ui.painter();
            let rounding = Rounding::same(ROUNDING);

            if let Some(shadow) = style.shadow {
                painter.rect_filled(rect.translate(vec2(0.0, 4.0)).expand(1.0), rounding, shadow);
            }
            painter.rect(rect, rounding, style.fill, style.stroke);

            let content = rect.shrink(PADDING);
            let icon_rect = Rect::from_min_size(content.min, vec2(ICON_SIZE, ICON_SIZE));
            icon.paint_with_fallback_color(painter, icon_rect.min, text_color);

            let mut cursor = pos2(icon_rect.max.x + PADDING, content.min.y);
            let title_height = title.size().y;
            title.paint_with_fallback_color(painter, cursor, text_color);

            cursor.y += title_height + spacing;
            let description_height = description.size().y;
            description.paint_with_fallback_color(painter, cursor, text_color);

            cursor.y += description_height + spacing;
            open.paint_with_fallback_color(painter, cursor, link_color);
        }

        response.on_hover_cursor(CursorIcon::PointingHand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_cards_are_nearly_opaque() {
        let style = card_style(Theme::Light, false);

        assert_eq!(style.fill.a(), 242);
        assert!(style.shadow.is_none());
    }

    #[test]
    fn hover_brightens_and_adds_shadow() {
        for theme in [Theme::Dark, Theme::Light] {
            let idle = card_style(theme, false);
            let hovered = card_style(theme, true);

            assert!(hovered.fill.a() > idle.fill.a());
            assert!(hovered.shadow.is_some());
        }
    }

    #[test]
    fn dark_cards_are_translucent() {
        assert!(card_style(Theme::Dark, false).fill.a() < 32);
    }
}
