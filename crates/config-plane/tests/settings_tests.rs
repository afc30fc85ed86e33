use config_plane::{SettingsError, SettingsLoader};

#[test]
fn settings_loader_accepts_valid_keys() {
    let input = r#"
[storage]
dsn = "sqlite://local"
sqlite_path = "stampede.sqlite"
"#;
    let settings = SettingsLoader::from_str(input).expect("settings");
    assert_eq!(settings.get_string("storage.dsn"), "sqlite://local");
    assert_eq!(settings.get_string("storage.sqlite_path"), "stampede.sqlite");
}

#[test]
fn settings_loader_falls_back_to_table_defaults() {
    let settings = SettingsLoader::from_str("").expect("settings");
    assert_eq!(settings.get_string("storage.dsn"), "");
    assert_eq!(settings.get_string("storage.sqlite_path"), "stampede.sqlite");
    assert!(settings.get("storage.dsn").is_none());
}

#[test]
fn settings_loader_rejects_unknown_key() {
    let input = r#"
unknown = { value = "x" }
"#;
    let err = SettingsLoader::from_str(input).expect_err("error");
    match err {
        SettingsError::UnknownKey(key) => assert_eq!(key, "unknown.value"),
        _ => panic!("expected unknown key error"),
    }
}

#[test]
fn settings_loader_rejects_type_mismatch() {
    let input = r#"
storage = { sqlite_path = 3 }
"#;
    let err = SettingsLoader::from_str(input).expect_err("error");
    match err {
        SettingsError::TypeMismatch(key, _) => assert_eq!(key, "storage.sqlite_path"),
        _ => panic!("expected type mismatch"),
    }
}
