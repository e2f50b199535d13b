use egui::{Key, KeyboardShortcut, Modifiers};

pub struct Shortcut {
    pub app_quit: KeyboardShortcut,
    pub theme_toggle: KeyboardShortcut,
}

impl Shortcut {
    pub fn new() -> Self {
        Self {
            app_quit: KeyboardShortcut::new(Modifiers::CTRL, Key::Q),
            theme_toggle: KeyboardShortcut::new(Modifiers::CTRL, Key::T),
        }
    }
}
