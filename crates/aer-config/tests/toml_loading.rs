//! Integration tests for TOML and environment configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and working-directory manipulation.

use std::path::Path;

use aer_config::AerConfig;
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[review]
initially_selected = true
show_suggestions = false

[org_tree]
head_keywords = ["director", "principal"]
heads_only = true
expand_all = false
allow_forest = true

[logging]
level = "info"
file = "events.jsonl"
"#,
        )?;

        let config: AerConfig = Figment::from(Serialized::defaults(AerConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.review.initially_selected);
        assert!(!config.review.show_suggestions);
        assert_eq!(config.org_tree.head_keywords, vec!["director", "principal"]);
        assert!(config.org_tree.heads_only);
        assert!(!config.org_tree.expand_all);
        assert!(config.org_tree.allow_forest);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.has_file());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[org_tree]\nheads_only = true\n")?;

        let config: AerConfig = Figment::from(Serialized::defaults(AerConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.org_tree.heads_only);
        assert!(config.org_tree.expand_all);
        assert_eq!(config.org_tree.head_keywords.len(), 12);
        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[logging]\nlevel = \"info\"\n")?;
        jail.set_env("AER_LOGGING__LEVEL", "debug");
        jail.set_env("AER_ORG_TREE__ALLOW_FOREST", "true");

        let config: AerConfig = Figment::from(Serialized::defaults(AerConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("AER_").split("__"))
            .extract()?;

        assert_eq!(config.logging.level, "debug");
        assert!(config.org_tree.allow_forest);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_from_working_directory() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(".aer").map_err(|e| e.to_string())?;
        jail.create_file(".aer/config.toml", "[review]\ninitially_selected = true\n")?;

        let config = AerConfig::load(None).map_err(|e| e.to_string())?;
        assert!(config.review.initially_selected);
        Ok(())
    });
}

#[test]
fn explicit_config_beats_project_config() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(".aer").map_err(|e| e.to_string())?;
        jail.create_file(".aer/config.toml", "[logging]\nlevel = \"info\"\n")?;
        jail.create_file("custom.toml", "[logging]\nlevel = \"trace\"\n")?;

        let config = AerConfig::load(Some(Path::new("custom.toml"))).map_err(|e| e.to_string())?;
        assert_eq!(config.logging.level, "trace");
        Ok(())
    });
}

#[test]
fn missing_explicit_config_is_an_error() {
    Jail::expect_with(|_jail| {
        let err = AerConfig::load(Some(Path::new("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("--config"));
        Ok(())
    });
}

#[test]
fn blank_keyword_fails_validation_on_load() {
    Jail::expect_with(|jail| {
        jail.set_env("AER_ORG_TREE__HEAD_KEYWORDS", "[\"lead\", \" \"]");
        let err = AerConfig::load(None).unwrap_err();
        assert!(err.to_string().contains("head_keywords"));
        Ok(())
    });
}
