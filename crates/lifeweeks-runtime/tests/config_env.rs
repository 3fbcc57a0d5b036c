//! Environment layering; these mutate process env so they run serially

use std::io::Write;

use lifeweeks_core::Language;
use lifeweeks_runtime::{
    AppConfig, LogFormat, Overrides, ENV_BIND, ENV_LANGUAGE, ENV_LIFE_EXPECTANCY, ENV_LOG_FORMAT,
};
use serial_test::serial;

fn clear_env() {
    for key in [ENV_LIFE_EXPECTANCY, ENV_LANGUAGE, ENV_BIND, ENV_LOG_FORMAT] {
        std::env::remove_var(key);
    }
}

fn config_file(contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("lifeweeks-config-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
#[serial]
fn test_load_defaults() {
    clear_env();
    let config = AppConfig::load(None, &Overrides::default()).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
#[serial]
fn test_layers_in_order() {
    clear_env();
    let path = config_file(r#"{ "life_expectancy_years": 90, "language": "es-ES" }"#);

    let config = AppConfig::load(Some(&path), &Overrides::default()).unwrap();
    assert_eq!(config.life_expectancy_years, 90);
    assert_eq!(config.language, Language::EsEs);

    std::env::set_var(ENV_LIFE_EXPECTANCY, "85");
    std::env::set_var(ENV_LOG_FORMAT, "json");
    std::env::set_var(ENV_BIND, "0.0.0.0:9100");
    let config = AppConfig::load(Some(&path), &Overrides::default()).unwrap();
    assert_eq!(config.life_expectancy_years, 85);
    assert_eq!(config.log.format, LogFormat::Json);
    assert_eq!(config.server.bind.port(), 9100);
    assert_eq!(config.language, Language::EsEs);

    let overrides = Overrides {
        life_expectancy_years: Some(75),
        ..Default::default()
    };
    let config = AppConfig::load(Some(&path), &overrides).unwrap();
    assert_eq!(config.life_expectancy_years, 75);
    assert_eq!(config.language, Language::EsEs);

    clear_env();
    let _ = std::fs::remove_file(path);
}

#[test]
#[serial]
fn test_load_rejects_out_of_range() {
    clear_env();
    std::env::set_var(ENV_LIFE_EXPECTANCY, "200");
    assert!(AppConfig::load(None, &Overrides::default()).is_err());
    clear_env();
}

#[test]
#[serial]
fn test_missing_file() {
    clear_env();
    let path = std::path::Path::new("/nonexistent/lifeweeks.json");
    let err = AppConfig::load(Some(path), &Overrides::default()).unwrap_err();
    assert!(err.to_string().contains("not found"), "{err}");
}
