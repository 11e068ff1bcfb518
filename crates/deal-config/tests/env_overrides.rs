use deal_config::DealConfig;
use figment::Jail;

#[test]
fn env_sets_seed_path() {
    Jail::expect_with(|jail| {
        jail.set_env("DEALFLOW_PIPELINE__SEED_PATH", "fixtures/seed.json");

        let config = DealConfig::load_from(jail.directory()).expect("config loads");
        assert_eq!(
            config.pipeline.seed_path(),
            Some(std::path::PathBuf::from("fixtures/seed.json"))
        );
        Ok(())
    });
}

#[test]
fn env_beats_project_config() {
    Jail::expect_with(|jail| {
        jail.create_dir(".dealflow")?;
        jail.create_file(
            ".dealflow/config.toml",
            r#"
[general]
default_limit = 5
"#,
        )?;
        jail.set_env("DEALFLOW_GENERAL__DEFAULT_LIMIT", "9");

        let config = DealConfig::load_from(jail.directory()).expect("config loads");
        assert_eq!(config.general.default_limit, 9);
        Ok(())
    });
}

#[test]
fn unprefixed_env_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("GENERAL__DEFAULT_ACTOR", "intruder");

        let config = DealConfig::load_from(jail.directory()).expect("config loads");
        assert_eq!(config.general.default_actor, "analyst");
        Ok(())
    });
}
