use anyhow::Result;
#[cfg(test)]
use i18n_embed::unic_langid::LanguageIdentifier;
use i18n_embed::{
    fluent::{fluent_language_loader, FluentLanguageLoader},
    DesktopLanguageRequester, LanguageLoader,
};
use lazy_static::lazy_static;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

lazy_static! {
    pub static ref LANGUAGE_LOADER: FluentLanguageLoader = {
        let loader: FluentLanguageLoader = fluent_language_loader!();

        loader.load_fallback_language(&Localizations).unwrap();

        loader
    };
}

#[cfg(test)]
pub fn select_locales(request_languages: &[&str]) -> Result<()> {
    let requested_languages: Vec<LanguageIdentifier> = request_languages
        .iter()
        .filter_map(|raw| raw.parse().ok())
        .collect();

    i18n_embed::select(&*LANGUAGE_LOADER, &Localizations, &requested_languages)?;

    Ok(())
}

pub fn select_system_locales() -> Result<()> {
    let requested_languages = DesktopLanguageRequester::requested_languages();

    i18n_embed::select(&*LANGUAGE_LOADER, &Localizations, &requested_languages)?;

    Ok(())
}
