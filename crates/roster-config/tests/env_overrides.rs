use figment::Jail;
use pretty_assertions::assert_eq;
use roster_config::RosterConfig;

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("ROSTER_SERVER__PORT", "4000");
        jail.set_env("ROSTER_DATABASE__PATH", ":memory:");
        jail.set_env("ROSTER_GENERAL__ENVIRONMENT", "production");

        let config = RosterConfig::load().expect("config loads");
        assert_eq!(config.server.port, 4000);
        assert!(config.database.is_in_memory());
        assert_eq!(config.general.environment, "production");
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("roster.toml", "[server]\nport = 9000\nhost = \"127.0.0.1\"\n")?;
        jail.set_env("ROSTER_SERVER__PORT", "9500");

        let config = RosterConfig::load().expect("config loads");
        assert_eq!(config.server.port, 9500);
        assert_eq!(config.server.host, "127.0.0.1");
        Ok(())
    });
}

#[test]
fn unparseable_env_value_is_an_error() {
    Jail::expect_with(|jail| {
        jail.set_env("ROSTER_SERVER__PORT", "not-a-port");
        assert!(RosterConfig::load().is_err());
        Ok(())
    });
}
