use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use termcv::cli::{load_resume, Cli};
use termcv::config::AppConfig;
use termcv::error::ResumeError;

const ENV_VARS: [&str; 5] = [
    "TERMCV_CONFIG",
    "TERMCV_RESUME",
    "TERMCV_PALETTE",
    "TERMCV_LOG_LEVEL",
    "TERMCV_LOG_FILE",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("termcv.config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_config_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r##"
[resume]
path = "/srv/cv.json"

[theme]
palette = "simple"
primary = "#ff0000"

[layout]
skill_columns = 3

[logging]
level = "debug"
file = "/tmp/termcv.log"
"##,
    );

    let config = AppConfig::load_from_file(&path).unwrap();
    assert_eq!(config.resume.path, Some(PathBuf::from("/srv/cv.json")));
    assert_eq!(config.theme.palette, "simple");
    assert_eq!(config.theme.primary.as_deref(), Some("#ff0000"));
    assert_eq!(config.layout.skill_columns, 3);
    assert_eq!(config.layout.mouse_wheel_delta, 3);
    assert_eq!(config.logging.level, "debug");
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = AppConfig::load_from_file(&dir.path().join("nope.toml"));
    assert!(result.is_err());
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[layout\nskill_columns = ");
    let err = AppConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_invalid_color_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[theme]\nsecondary = \"#12345\"\n");
    let config = AppConfig::load_from_file(&path).unwrap();
    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    env::set_var("TERMCV_RESUME", "/home/ada/cv.json");
    env::set_var("TERMCV_PALETTE", "simple");
    env::set_var("TERMCV_LOG_LEVEL", "DEBUG");

    let mut config = AppConfig::default();
    config.apply_env_overrides();
    clear_env();

    assert_eq!(config.resume.path, Some(PathBuf::from("/home/ada/cv.json")));
    assert_eq!(config.theme.palette, "simple");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, None);
}

#[test]
#[serial]
fn test_cli_flags_beat_env_and_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[theme]\npalette = \"default\"\n");
    env::set_var("TERMCV_PALETTE", "default");

    let cli = Cli {
        config: Some(path),
        palette: Some("simple".into()),
        ..Cli::default()
    };
    let config = cli.load_config();
    clear_env();

    assert_eq!(config.unwrap().theme.palette, "simple");
}

#[test]
#[serial]
fn test_cli_rejects_unknown_palette() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");
    let cli = Cli {
        config: Some(path),
        palette: Some("neon".into()),
        ..Cli::default()
    };
    assert!(cli.load_config().is_err());
}

#[test]
fn test_load_resume_from_configured_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cv.json");
    fs::write(&path, r#"{"basics": {"name": "Grace"}}"#).unwrap();

    let mut config = AppConfig::default();
    config.resume.path = Some(path);
    let resume = load_resume(&config).unwrap();
    assert_eq!(resume.identity.name, "Grace");
    assert!(resume.sections.is_empty());
}

#[test]
fn test_load_resume_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.resume.path = Some(dir.path().join("missing.json"));

    let err = load_resume(&config).unwrap_err();
    let cause = err.downcast_ref::<ResumeError>();
    assert!(matches!(cause, Some(ResumeError::Read { .. })));
}

#[test]
fn test_load_resume_defaults_to_sample() {
    let resume = load_resume(&AppConfig::default()).unwrap();
    assert_eq!(resume.identity.name, "Jordan Avery");
}
