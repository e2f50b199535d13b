use crate::{
    config::Config,
    egui_winit_wgpu_context::EguiWinitWgpuContext,
    event::{AppResponse, EventProxyWinit, UserEvent},
    fonts::load_system_font,
    presentation::PresentationRoot,
    storage::{FileStore, KeyValueStore},
    theme::{ThemeController, THEME_KEY},
    ui::{Ui, UiState},
};
use anyhow::Result;
use chrono::Datelike;
use egui::{Context, FontDefinitions};
use std::time::Duration;
use winit::{event::WindowEvent, event_loop::EventLoop, window::Window};

pub struct Core {
    context: EguiWinitWgpuContext,
    event_proxy: EventProxyWinit<UserEvent>,
    theme: ThemeController<FileStore, Context>,
    ui: Ui,
    year: i32,
}

impl Core {
    pub fn new(event_loop: &EventLoop<UserEvent>, window: &Window, config: &Config) -> Result<Self> {
        let context = EguiWinitWgpuContext::new(window, event_loop)?;

        let mut fonts = FontDefinitions::default();
        load_system_font(&mut fonts);
        context.context().set_fonts(fonts);

        let store = FileStore::new(&config.storage_path);
        let mut theme = ThemeController::new(store, context.context().clone());
        let initial = theme.initialize();
        theme.apply();

        log::info!(
            "Starting with {} theme from {:?}",
            initial,
            theme.store().path()
        );

        let event_proxy = EventProxyWinit::from_proxy(event_loop.create_proxy());

        Ok(Self {
            context,
            event_proxy,
            theme,
            ui: Ui::new(),
            year: chrono::Local::now().year(),
        })
    }

    pub fn handle_user_event(&mut self, event: UserEvent) -> AppResponse {
        dispatch_user_event(&mut self.theme, event)
    }

    /// Tears the theme controller down, reporting what was left on disk.
    pub fn shutdown(self) {
        let (store, root) = self.theme.into_parts();

        match store.get(THEME_KEY) {
            Ok(stored) => log::info!(
                "Exiting with stored theme {:?} (dark visuals: {})",
                stored,
                root.has_dark_marker()
            ),
            Err(err) => log::warn!("Failed to read stored theme on exit: {:#}", err),
        }
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.context.handle_window_event(event)
    }

    /// Draws a frame, returning how long until the next one is due.
    pub fn redraw(&mut self, window: &Window) -> Duration {
        let state = UiState {
            theme: self.theme.current(),
            year: self.year,
        };

        let ui = &self.ui;
        let event_proxy = &self.event_proxy;

        self.context
            .render(window, |ctx| ui.ui(ctx, event_proxy, &state))
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.on_resized(width, height);
    }

    pub fn rescale(&mut self, scale_factor: f32) {
        self.context.on_scaled(scale_factor);
    }
}

/// Applies a user event to the theme controller.
pub fn dispatch_user_event<S, P>(
    theme: &mut ThemeController<S, P>,
    event: UserEvent,
) -> AppResponse
where
    S: KeyValueStore,
    P: PresentationRoot,
{
    let mut response = AppResponse::default();

    match event {
        UserEvent::Quit => {
            response.exit = true;
        }
        UserEvent::SetTheme(value) => {
            theme.set_theme(value);
            response.request_redraw = true;
        }
        UserEvent::ToggleTheme => {
            theme.toggle();
            response.request_redraw = true;
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{preferences::Theme, storage::MemoryStore};

    fn controller() -> ThemeController<MemoryStore, Context> {
        let mut theme = ThemeController::new(MemoryStore::new(), Context::default());
        theme.initialize();
        theme.apply();
        theme
    }

    fn stored(theme: &ThemeController<MemoryStore, Context>) -> Option<String> {
        theme.store().get(THEME_KEY).unwrap()
    }

    #[test]
    fn toggle_event_persists_and_flips_visuals() {
        let mut theme = controller();
        assert!(theme.root().style().visuals.dark_mode);

        let response = dispatch_user_event(&mut theme, UserEvent::ToggleTheme);

        assert!(response.request_redraw);
        assert!(!response.exit);
        assert_eq!(theme.current(), Theme::Light);
        assert_eq!(stored(&theme).as_deref(), Some("light"));
        assert!(!theme.root().style().visuals.dark_mode);

        dispatch_user_event(&mut theme, UserEvent::ToggleTheme);

        assert_eq!(stored(&theme).as_deref(), Some("dark"));
        assert!(theme.root().style().visuals.dark_mode);
    }

    #[test]
    fn set_theme_event_applies_requested_theme() {
        let mut theme = controller();

        let response = dispatch_user_event(&mut theme, UserEvent::SetTheme(Theme::Light));

        assert!(response.request_redraw);
        assert_eq!(stored(&theme).as_deref(), Some("light"));
        assert!(!theme.root().style().visuals.dark_mode);

        dispatch_user_event(&mut theme, UserEvent::SetTheme(Theme::Dark));

        assert_eq!(stored(&theme).as_deref(), Some("dark"));
        assert!(theme.root().style().visuals.dark_mode);
    }

    #[test]
    fn quit_event_exits_without_touching_theme() {
        let mut theme = controller();

        let response = dispatch_user_event(&mut theme, UserEvent::Quit);

        assert!(response.exit);
        assert!(!response.request_redraw);
        assert_eq!(theme.current(), Theme::Dark);
        assert_eq!(stored(&theme), None);
    }
}
