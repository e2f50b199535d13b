mod brand;
mod card;
mod utils;

use crate::{
    catalog::{copyright_years, Social, AUTHOR, SOCIAL_LINKS, TOOLS},
    event::{EventProxy, UserEvent},
    i18n::LANGUAGE_LOADER,
    preferences::Theme,
    shortcut::Shortcut,
};
use brand::brand_mark;
pub use brand::BRAND_COLOR;
use card::ToolCard;
use egui::{
    Align, Button, CentralPanel, Context, Layout, Link, OpenUrl, RichText, Rounding, ScrollArea,
    TopBottomPanel,
};
use i18n_embed_fl::fl;

const CARD_SPACING: f32 = 16.0;
const SOCIAL_GLYPH_SIZE: f32 = 16.0;
const TWO_COLUMN_WIDTH: f32 = 720.0;

pub struct UiState {
    pub theme: Theme,
    pub year: i32,
}

pub struct Ui {
    shortcut: Shortcut,
}

impl Ui {
    pub fn new() -> Self {
        Self {
            shortcut: Shortcut::new(),
        }
    }

    pub fn ui(&self, ctx: &Context, event_proxy: &impl EventProxy<UserEvent>, state: &UiState) {
        self.handle_shortcuts(ctx, event_proxy);

        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                brand_mark(ui, 32.0);
                ui.label(RichText::new(fl!(LANGUAGE_LOADER, "app-title")).size(22.0).strong());

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    theme_toggle(ui, event_proxy, state.theme);
                });
            });
            ui.add_space(4.0);
        });

        TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("</>").monospace());
                ui.label(fl!(LANGUAGE_LOADER, "footer-developed-by"));
                ui.label(RichText::new(AUTHOR).strong());
                ui.label(format!("· {}", copyright_years(state.year)));

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    for link in SOCIAL_LINKS.iter().rev() {
                        if ui
                            .add(Link::new(RichText::new(link.glyph).size(SOCIAL_GLYPH_SIZE)))
                            .on_hover_text(social_tooltip(link.kind))
                            .clicked()
                        {
                            log::info!("Opening {}", link.url);
                            ui.ctx()
                                .output_mut(|o| o.open_url = Some(OpenUrl::new_tab(link.url)));
                        }
                    }
                });
            });
            ui.add_space(4.0);
        });

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(CARD_SPACING);

                let columns = column_count(ui.available_width());
                let open_label = fl!(LANGUAGE_LOADER, "card-open");

                ui.columns(columns, |columns_ui| {
                    for (index, tool) in TOOLS.iter().enumerate() {
                        let ui = &mut columns_ui[index % columns];

                        if ui
                            .add(ToolCard::new(tool, state.theme, open_label.as_str()))
                            .clicked()
                        {
                            log::info!("Opening {}", tool.url);
                            ui.ctx()
                                .output_mut(|o| o.open_url = Some(OpenUrl::same_tab(tool.url)));
                        }

                        ui.add_space(CARD_SPACING);
                    }
                });
            });
        });
    }

    fn handle_shortcuts(&self, ctx: &Context, event_proxy: &impl EventProxy<UserEvent>) {
        if ctx.input_mut(|i| i.consume_shortcut(&self.shortcut.theme_toggle)) {
            event_proxy.send_event(UserEvent::ToggleTheme);
        }

        if ctx.input_mut(|i| i.consume_shortcut(&self.shortcut.app_quit)) {
            event_proxy.send_event(UserEvent::Quit);
        }
    }
}

fn theme_toggle(ui: &mut egui::Ui, event_proxy: &impl EventProxy<UserEvent>, theme: Theme) {
    let glyph = if theme.is_dark() { "🌙" } else { "☀" };

    let response = ui
        .add(Button::new(RichText::new(glyph).size(18.0)).rounding(Rounding::same(16.0)))
        .on_hover_text(fl!(LANGUAGE_LOADER, "theme-toggle"));

    if response.clicked() {
        event_proxy.send_event(UserEvent::ToggleTheme);
    }

    response.context_menu(|ui| {
        for (value, label) in [
            (Theme::Dark, fl!(LANGUAGE_LOADER, "theme-dark")),
            (Theme::Light, fl!(LANGUAGE_LOADER, "theme-light")),
        ] {
            if ui.radio(theme == value, label).clicked() {
                event_proxy.send_event(UserEvent::SetTheme(value));
                ui.close_menu();
            }
        }
    });
}

fn social_tooltip(kind: Social) -> String {
    match kind {
        Social::ReportIssue => fl!(LANGUAGE_LOADER, "footer-report-issue"),
        Social::LinkedIn => fl!(LANGUAGE_LOADER, "footer-linkedin"),
        Social::GitHub => fl!(LANGUAGE_LOADER, "footer-github"),
    }
}

fn column_count(available_width: f32) -> usize {
    if available_width >= TWO_COLUMN_WIDTH {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventQueue;
    use egui::{Color32, Event, FontId, Key, Modifiers, RawInput};

    fn state(theme: Theme) -> UiState {
        UiState { theme, year: 2026 }
    }

    fn key_press(key: Key) -> RawInput {
        RawInput {
            modifiers: Modifiers::CTRL,
            events: vec![Event::Key {
                key,
                pressed: true,
                repeat: false,
                modifiers: Modifiers::CTRL,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn narrow_panels_use_one_column() {
        assert_eq!(column_count(480.0), 1);
        assert_eq!(column_count(719.9), 1);
        assert_eq!(column_count(720.0), 2);
        assert_eq!(column_count(1280.0), 2);
    }

    #[test]
    fn renders_headless_in_both_themes() {
        let ui = Ui::new();
        let queue = EventQueue::default();

        for theme in [Theme::Dark, Theme::Light] {
            let ctx = Context::default();
            let output = ctx.run(RawInput::default(), |ctx| ui.ui(ctx, &queue, &state(theme)));

            assert!(!output.shapes.is_empty());
        }

        assert!(queue.drain().is_empty());
    }

    #[test]
    fn ctrl_t_requests_toggle() {
        let ui = Ui::new();
        let queue = EventQueue::default();
        let ctx = Context::default();

        let _output = ctx.run(key_press(Key::T), |ctx| ui.ui(ctx, &queue, &state(Theme::Dark)));

        assert_eq!(queue.drain(), vec![UserEvent::ToggleTheme]);
    }

    #[test]
    fn ctrl_q_requests_quit() {
        let ui = Ui::new();
        let queue = EventQueue::default();
        let ctx = Context::default();

        let _output = ctx.run(key_press(Key::Q), |ctx| ui.ui(ctx, &queue, &state(Theme::Light)));

        assert_eq!(queue.drain(), vec![UserEvent::Quit]);
    }

    #[test]
    fn social_glyphs_have_visible_width() {
        let ctx = Context::default();
        let mut widths = vec![];

        let _output = ctx.run(RawInput::default(), |ctx| {
            for link in &SOCIAL_LINKS {
                let galley = ctx.fonts(|f| {
                    f.layout_no_wrap(
                        link.glyph.to_owned(),
                        FontId::proportional(SOCIAL_GLYPH_SIZE),
                        Color32::WHITE,
                    )
                });
                widths.push((link.kind, galley.size().x));
            }
        });

        assert_eq!(widths.len(), SOCIAL_LINKS.len());
        for (kind, width) in widths {
            assert!(width > 0.0, "{:?} has zero width", kind);
        }
    }
}
