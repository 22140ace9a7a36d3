use figment::Jail;
use pretty_assertions::assert_eq;
use sight_config::SightingsConfig;

#[test]
fn env_fills_every_section() {
    Jail::expect_with(|jail| {
        jail.set_env("SIGHTINGS_PRIMARY__PATH", "jail.db");
        jail.set_env("SIGHTINGS_SPATIAL__PATH", "jail.duckdb");
        jail.set_env("SIGHTINGS_SPATIAL__TIMEOUT_MS", "1200");
        jail.set_env("SIGHTINGS_SERVER__STATIC_DIR", "public");

        let config = SightingsConfig::load(None).expect("config loads");
        assert_eq!(config.primary.path, "jail.db");
        assert_eq!(config.spatial.path, "jail.duckdb");
        assert_eq!(config.spatial.timeout_ms, 1200);
        assert_eq!(config.server.static_dir, "public");
        Ok(())
    });
}

#[test]
fn env_beats_explicit_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "extra.toml",
            r#"
[primary]
path = "from-file.db"
"#,
        )?;
        jail.set_env("SIGHTINGS_PRIMARY__PATH", "from-env.db");

        let config = SightingsConfig::load(Some(std::path::Path::new("extra.toml")))
            .expect("config loads");
        assert_eq!(config.primary.path, "from-env.db");
        Ok(())
    });
}
