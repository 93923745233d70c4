use platina_core::keys::Section;
use platina_core::services::Service;
use platina_core::state::{FontStep, StateChange};
use platina_web::i18n;
use std::collections::BTreeMap;

fn every_message_key() -> Vec<&'static str> {
    let mut keys = vec![
        "app.loaded",
        "app.setup-error",
        "services.navigating",
    ];
    for change in [
        StateChange::HighContrast(true),
        StateChange::HighContrast(false),
        StateChange::FontStep(FontStep::Normal),
        StateChange::FontStep(FontStep::Large),
        StateChange::FontStep(FontStep::ExtraLarge),
        StateChange::FontStep(FontStep::Maximum),
        StateChange::ReadingMode(true),
        StateChange::ReadingMode(false),
        StateChange::Reset,
    ] {
        keys.push(change.message_key());
    }
    for section in [Section::Home, Section::About, Section::Mentorship] {
        keys.push(section.message_key());
    }
    for service in Service::ALL {
        keys.push(service.name_key());
    }
    keys
}

#[test]
fn bundle_switches_between_locales() {
    i18n::set_lang("pt");
    assert_eq!(i18n::current_lang(), "pt");
    assert!(!i18n::is_rtl());

    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");
    assert_eq!(i18n::t("a11y.reset"), "All accessibility settings were reset");
}

#[test]
fn missing_keys_fall_back_to_the_key_itself() {
    assert_eq!(i18n::t("missing.key"), "missing.key");
}

#[test]
fn navigation_message_interpolates_the_service_name() {
    i18n::set_lang("pt");
    let mut vars = BTreeMap::new();
    vars.insert("name", "Mentoria Individual");
    let message = i18n::tr("services.navigating", Some(&vars));
    assert_eq!(message, "Navegando para Mentoria Individual");
}

#[test]
fn locales_metadata_is_accessible() {
    let metas = i18n::locales();
    assert!(metas.iter().any(|m| m.code == "pt"));
    assert!(metas.iter().any(|m| m.code == "en"));
    assert!(metas.iter().all(|m| !m.rtl));
}

#[test]
fn every_announcement_key_resolves_in_every_locale() {
    for meta in i18n::locales() {
        i18n::set_lang(meta.code);
        for key in every_message_key() {
            let resolved = i18n::t(key);
            assert_ne!(
                resolved, key,
                "key {key} is missing from locale {}",
                meta.code
            );
        }
    }
}
