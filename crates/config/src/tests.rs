use crate::AppConfig;

const DEFAULT_TOML: &str = r#"
app_name = "menu-service"
app_env = "development"

[server]
host = "0.0.0.0"
port = 8080
"#;

#[test]
fn test_load_defaults() {
    figment::Jail::expect_with(|jail| {
        jail.create_dir("config")?;
        jail.create_file("config/default.toml", DEFAULT_TOML)?;

        let config = AppConfig::load("config").expect("load config");
        assert_eq!(config.app_name, "menu-service");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.is_development());
        assert!(!config.is_production());
        Ok(())
    });
}

#[test]
fn test_env_overrides_port() {
    figment::Jail::expect_with(|jail| {
        jail.create_dir("config")?;
        jail.create_file("config/default.toml", DEFAULT_TOML)?;
        jail.set_env("OMS_SERVER_PORT", "9090");

        let config = AppConfig::load("config").expect("load config");
        assert_eq!(config.server.port, 9090);
        Ok(())
    });
}

#[test]
fn test_env_specific_file_wins_over_default() {
    figment::Jail::expect_with(|jail| {
        jail.create_dir("config")?;
        jail.create_file("config/default.toml", DEFAULT_TOML)?;
        jail.create_file(
            "config/production.toml",
            r#"
app_env = "production"

[server]
port = 80
"#,
        )?;
        jail.set_env("APP_ENV", "production");

        let config = AppConfig::load("config").expect("load config");
        assert_eq!(config.server.port, 80);
        assert!(config.is_production());
        Ok(())
    });
}

#[test]
fn test_server_addr_formatting() {
    figment::Jail::expect_with(|jail| {
        jail.create_dir("config")?;
        jail.create_file("config/default.toml", DEFAULT_TOML)?;

        let config = AppConfig::load("config").expect("load config");
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        Ok(())
    });
}
