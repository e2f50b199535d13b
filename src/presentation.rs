use egui::{Context, Visuals};

/// The root node whose single dark marker styles everything below it.
pub trait PresentationRoot {
    fn set_dark_marker(&self, enabled: bool);

    fn has_dark_marker(&self) -> bool;
}

impl PresentationRoot for Context {
    fn set_dark_marker(&self, enabled: bool) {
        self.set_visuals(if enabled {
            Visuals::dark()
        } else {
            Visuals::light()
        });
    }

    fn has_dark_marker(&self) -> bool {
        self.style().visuals.dark_mode
    }
}
