use crate::{preferences::Theme, presentation::PresentationRoot, storage::KeyValueStore};

pub const THEME_KEY: &str = "devToolsTheme";

/// Owns the current theme, persisting and applying every change.
///
/// Lifecycle: `new`, then `initialize` once, then any number of `toggle` /
/// `set_theme` calls, then `into_parts`.
pub struct ThemeController<S, P> {
    current: Theme,
    root: P,
    store: S,
}

impl<S, P> ThemeController<S, P>
where
    S: KeyValueStore,
    P: PresentationRoot,
{
    pub fn new(store: S, root: P) -> Self {
        Self {
            current: Theme::default(),
            root,
            store,
        }
    }

    /// Loads the persisted preference. Absent, unreadable or unknown values
    /// leave the current theme untouched.
    pub fn initialize(&mut self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => match raw.parse::<Theme>() {
                Ok(theme) => self.current = theme,
                Err(err) => log::warn!("Ignoring stored theme: {}", err),
            },
            Ok(None) => log::debug!("No stored theme, using {}", self.current),
            Err(err) => log::warn!("Failed to read stored theme: {:#}", err),
        }

        self.current
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.set_theme(self.current.toggled());

        self.current
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.current = theme;

        if let Err(err) = self.store.set(THEME_KEY, theme.as_str()) {
            log::warn!("Failed to persist theme: {:#}", err);
        }

        self.apply();

        log::info!("Theme changed to {}", theme);
    }

    /// Applies the marker without touching storage.
    pub fn apply(&self) {
        self.root.set_dark_marker(self.current.is_dark());
    }

    #[cfg(test)]
    pub fn root(&self) -> &P {
        &self.root
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (S, P) {
        (self.store, self.root)
    }
}
