//! Tests for settings functionality.

use crate::settings::Settings;
use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    // SAFETY: callers are #[serial], so no other test reads the environment concurrently.
    unsafe {
        std::env::remove_var("MODEL_NAME");
        std::env::remove_var("TEMPERATURE");
        std::env::remove_var("LOG_LEVEL");
    }
}

#[test]
fn test_default_settings() {
    let settings = Settings::default();

    assert_eq!(settings.model_name, "gpt-4");
    assert_eq!(settings.temperature, 0.7);
    assert_eq!(settings.max_tokens, 1024);
    assert_eq!(settings.log_level, "info");
    assert_eq!(settings.max_example_patterns, 5);
    assert!(settings.default_template.is_none());
    assert!(settings.prompt_templates.is_empty());
}

#[test]
fn test_parse_minimal_yaml() {
    let settings = Settings::from_yaml("").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
model_name: gpt-4o-mini
temperature: 0.2
"#;
    let settings = Settings::from_yaml(yaml).unwrap();

    assert_eq!(settings.model_name, "gpt-4o-mini");
    assert_eq!(settings.temperature, 0.2);
    assert_eq!(settings.max_tokens, 1024);
}

#[test]
fn test_parse_templates() {
    let yaml = r#"
default_template: brief
prompt_templates:
  brief: "You are {agent_name}. {context}"
"#;
    let settings = Settings::from_yaml(yaml).unwrap();
    assert_eq!(settings.default_template.as_deref(), Some("brief"));
    assert_eq!(settings.template("brief").unwrap(), "You are {agent_name}. {context}");
}

#[test]
fn test_unknown_template_lists_configured() {
    let yaml = "prompt_templates:\n  a: \"x\"\n  b: \"y\"\n";
    let settings = Settings::from_yaml(yaml).unwrap();
    let err = settings.template("c").unwrap_err();
    assert!(err.to_string().contains("unknown prompt template 'c' (configured: a, b)"));

    let err = Settings::default().template("c").unwrap_err();
    assert!(err.to_string().contains("(configured: none)"));
}

#[test]
fn test_unknown_fields_ignored() {
    let settings = Settings::from_yaml("future_option: true\nmax_tokens: 10\n").unwrap();
    assert_eq!(settings.max_tokens, 10);
}

#[test]
fn test_validation_rejects_bad_values() {
    assert!(Settings::from_yaml("temperature: 3.5\n").is_err());
    assert!(Settings::from_yaml("temperature: -0.1\n").is_err());
    assert!(Settings::from_yaml("max_tokens: 0\n").is_err());
    assert!(Settings::from_yaml("max_example_patterns: 0\n").is_err());
    assert!(Settings::from_yaml("prompt_templates:\n  empty: \"  \"\n").is_err());

    let err = Settings::from_yaml("default_template: missing\n").unwrap_err();
    assert!(err.to_string().contains("default_template 'missing'"));
}

#[test]
fn test_yaml_roundtrip_keeps_templates() {
    let mut settings = Settings::default();
    settings
        .prompt_templates
        .insert("short".to_string(), "{agent_name}".to_string());
    let yaml = settings.to_yaml().unwrap();
    assert_eq!(Settings::from_yaml(&yaml).unwrap(), settings);
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("promptgen.yaml");
    std::fs::write(&path, "model_name: local-model\n").unwrap();

    assert_eq!(Settings::load(&path).unwrap().model_name, "local-model");
    assert!(Settings::load(dir.path().join("missing.yaml")).is_err());
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    unsafe {
        std::env::set_var("MODEL_NAME", "env-model");
        std::env::set_var("TEMPERATURE", "1.25");
        std::env::set_var("LOG_LEVEL", "DEBUG");
    }

    let mut settings = Settings::default();
    settings.apply_env_overrides().unwrap();
    clear_env();

    assert_eq!(settings.model_name, "env-model");
    assert_eq!(settings.temperature, 1.25);
    assert_eq!(settings.log_level, "debug");
}

#[test]
#[serial]
fn test_env_temperature_must_parse_and_validate() {
    clear_env();
    unsafe { std::env::set_var("TEMPERATURE", "warm") };
    let result = Settings::default().apply_env_overrides();
    clear_env();
    assert!(result.unwrap_err().to_string().contains("TEMPERATURE must be a number"));

    unsafe { std::env::set_var("TEMPERATURE", "9") };
    let result = Settings::default().apply_env_overrides();
    clear_env();
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_no_env_leaves_settings_unchanged() {
    clear_env();
    let mut settings = Settings::default();
    settings.apply_env_overrides().unwrap();
    assert_eq!(settings, Settings::default());
}
