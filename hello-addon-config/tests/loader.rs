use std::fs;

use hello_addon_config::{
    ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions, models::sources::EnvConfig,
};
use tempfile::tempdir;

fn loader_for(path: std::path::PathBuf) -> ConfigLoader {
    ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: Some(path),
        ..ConfigLoaderOptions::default()
    })
    .with_env(EnvConfig::default())
}

#[test]
fn toml_file_values_are_applied() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("hello-addon.toml");
    fs::write(
        &path,
        r#"
[server]
host = "127.0.0.1"
port = 7123

[catalog]
path = "/srv/addon/catalog.json"
poster_url_template = "https://posters.example.test/%s.jpg"

[logging]
filter = "debug"
"#,
    )
    .expect("write config");

    let ConfigLoad { config, warnings } = loader_for(path.clone()).load().expect("load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 7123);
    assert_eq!(
        config.catalog.path.as_deref(),
        Some(std::path::Path::new("/srv/addon/catalog.json"))
    );
    assert_eq!(
        config.catalog.poster_url_template.url_for("tt1"),
        "https://posters.example.test/tt1.jpg"
    );
    assert_eq!(config.logging.filter, "debug");
    assert_eq!(config.metadata.config_path.as_deref(), Some(path.as_path()));
    assert!(!config.metadata.env_file_loaded);
    assert!(warnings.is_empty());
}

#[test]
fn env_snapshot_beats_the_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("hello-addon.toml");
    fs::write(&path, "[server]\nport = 7123\n").expect("write config");

    let ConfigLoad { config, .. } = ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: Some(path),
        ..ConfigLoaderOptions::default()
    })
    .with_env(EnvConfig {
        server_port: Some("7999".into()),
        catalog_path: Some("/tmp/other.json".into()),
        ..EnvConfig::default()
    })
    .load()
    .expect("load config");

    assert_eq!(config.server.port, 7999);
    assert_eq!(
        config.catalog.path.as_deref(),
        Some(std::path::Path::new("/tmp/other.json"))
    );
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let err = loader_for(dir.path().join("absent.toml"))
        .load()
        .expect_err("missing file must fail");
    assert!(matches!(err, ConfigLoadError::Read { .. }));
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("hello-addon.toml");
    fs::write(&path, "[server]\nbind = \"0.0.0.0:7000\"\n").expect("write config");

    let err = loader_for(path).load().expect_err("unknown key must fail");
    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}
