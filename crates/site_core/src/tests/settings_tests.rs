use super::*;

use std::{collections::HashMap, fs};

fn env_from(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn defaults_leave_optional_links_unset() {
    let settings = SiteSettings::default();
    assert!(settings.portfolio_pdf_url.is_none());
    assert!(settings.booking_url.is_none());
    assert_eq!(settings.contact_email, "youremail@example.com");
    settings.validate().expect("defaults are valid");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = load_settings_from(&dir.path().join("absent.toml"));
    assert_eq!(settings.owner_name, SiteSettings::default().owner_name);
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("site.toml");
    fs::write(
        &path,
        "contact_email = \"hello@example.org\"\nbooking_url = \"https://cal.example.org/intro\"\n",
    )
    .expect("write settings");

    let settings = load_settings_from(&path);
    assert_eq!(settings.contact_email, "hello@example.org");
    assert_eq!(
        settings.booking_url.as_deref(),
        Some("https://cal.example.org/intro")
    );
}

#[test]
fn malformed_file_is_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("site.toml");
    fs::write(&path, "this is = = not toml").expect("write settings");

    let settings = load_settings_from(&path);
    assert_eq!(settings.contact_email, SiteSettings::default().contact_email);
}

#[test]
fn app_alias_wins_over_site_prefix() {
    let env = env_from(&[
        ("SITE_CONTACT_EMAIL", "site@example.org"),
        ("APP__CONTACT_EMAIL", "app@example.org"),
        ("SITE_PACKAGES_URL", "https://example.org/packages.pdf"),
    ]);
    let mut settings = SiteSettings::default();
    apply_env_overrides(&mut settings, |name| env.get(name).cloned());

    assert_eq!(settings.contact_email, "app@example.org");
    assert_eq!(
        settings.packages_url.as_deref(),
        Some("https://example.org/packages.pdf")
    );
}

#[test]
fn blank_override_clears_configured_link() {
    let env = env_from(&[("SITE_BOOKING_URL", "  ")]);
    let mut settings = SiteSettings {
        booking_url: Some("https://cal.example.org".into()),
        ..SiteSettings::default()
    };
    apply_env_overrides(&mut settings, |name| env.get(name).cloned());
    assert!(settings.booking_url.is_none());
}

#[test]
fn validate_rejects_unparseable_link() {
    let settings = SiteSettings {
        privacy_url: Some("not a url".into()),
        ..SiteSettings::default()
    };
    match settings.validate() {
        Err(SettingsError::InvalidUrl { key, .. }) => assert_eq!(key, "privacy_url"),
        other => panic!("expected invalid url error, got {other:?}"),
    }
}

#[test]
fn validate_rejects_blank_contact_email() {
    let settings = SiteSettings {
        contact_email: " ".into(),
        ..SiteSettings::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::Empty {
            key: "contact_email"
        })
    );
}
