use anyhow::Result;
use egui::{FontData, FontDefinitions, FontFamily};
use font_kit::{
    family_name::FamilyName, handle::Handle, properties::Properties, source::SystemSource,
};
use std::fs::read;

const SYSTEM_FONT: &str = "System";

/// Appends `font_data` after the bundled fonts so it only covers missing glyphs.
pub fn load_fallback_font(fonts: &mut FontDefinitions, font_name: &str, font_data: FontData) {
    fonts.font_data.insert(font_name.to_owned(), font_data);

    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        if let Some(vec) = fonts.families.get_mut(&family) {
            vec.push(font_name.to_owned());
        }
    }
}

pub fn load_system_font(fonts: &mut FontDefinitions) {
    match system_font() {
        Ok(font) => load_fallback_font(fonts, SYSTEM_FONT, font),
        Err(err) => log::warn!("Failed to load system fonts: {}", err),
    }
}

fn system_font() -> Result<FontData> {
    let handle =
        SystemSource::new().select_best_match(&[FamilyName::SansSerif], &Properties::new())?;

    let buf: Vec<u8> = match handle {
        Handle::Memory { bytes, .. } => bytes.to_vec(),
        Handle::Path { path, .. } => read(path)?,
    };

    Ok(FontData::from_owned(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_font_goes_last_in_both_families() {
        let mut fonts = FontDefinitions::default();

        load_fallback_font(&mut fonts, "Extra", FontData::from_static(&[]));

        assert!(fonts.font_data.contains_key("Extra"));
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            assert_eq!(fonts.families[&family].last().map(String::as_str), Some("Extra"));
        }
    }
}
