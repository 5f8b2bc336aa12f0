use redump_lib::disc_type::ThresholdProfile;
use redump_lib::settings::save_settings_to;
use redump_lib::{FormatterSettings, SettingsError, load_settings_from};

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_settings_from(&dir.path().join("settings.toml")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[formatter]\nenable_redump_compatibility = false\nbluray_thresholds = \"alternate\"\n",
    )
    .unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert!(!settings.enable_redump_compatibility);
    assert_eq!(settings.bluray_thresholds, ThresholdProfile::Alternate);
    assert!(settings.normalize_disc_type);
}

#[test]
fn invalid_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[formatter\n").unwrap();

    let err = load_settings_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));
    assert!(!err.is_not_found());
}

#[test]
fn save_creates_directories_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");
    let settings = FormatterSettings {
        enable_redump_compatibility: false,
        bluray_thresholds: ThresholdProfile::Alternate,
        normalize_disc_type: true,
        process_special_fields: false,
    };

    save_settings_to(&path, &settings).unwrap();
    assert_eq!(load_settings_from(&path).unwrap(), settings);
    assert!(!path.with_extension("toml.tmp").exists());
}

#[test]
fn save_keeps_other_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[library]\ncurrent_root = \"/games\"\n").unwrap();

    save_settings_to(&path, &FormatterSettings::default()).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let doc: toml::Value = contents.parse().unwrap();
    assert_eq!(
        doc.get("library")
            .and_then(|l| l.get("current_root"))
            .and_then(|r| r.as_str()),
        Some("/games")
    );
    assert_eq!(
        doc.get("formatter")
            .and_then(|f| f.get("bluray_thresholds"))
            .and_then(|b| b.as_str()),
        Some("primary")
    );
}
