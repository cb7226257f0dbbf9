//! Layered configuration loading: `config/ddlforge.toml` then `DDLFORGE__*`.
//!
//! Everything runs in a single test because it changes the working directory
//! and environment of the whole test process.

use std::fs;

use ddlforge::SchemaConfig;

const TAG_KEY: &str = "DDLFORGE__SCHEMA__TAG_KEY";
const STRICT_OPTIONS: &str = "DDLFORGE__SCHEMA__STRICT_OPTIONS";

#[test]
fn test_load_layers_file_and_env() {
    let _ = env_logger::builder().is_test(true).try_init();
    let original_dir = std::env::current_dir().unwrap();
    let dir = tempfile::tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    // Neither file nor env: defaults.
    assert_eq!(SchemaConfig::load().unwrap(), SchemaConfig::default());

    // Env only.
    std::env::set_var(TAG_KEY, "db");
    std::env::set_var(STRICT_OPTIONS, "true");
    let cfg = SchemaConfig::load().unwrap();
    assert_eq!(
        cfg,
        SchemaConfig {
            tag_key: "db".to_string(),
            skip_marker: "-".to_string(),
            strict_options: true,
        }
    );

    // File plus env: env wins on the keys it sets.
    fs::create_dir(dir.path().join("config")).unwrap();
    fs::write(
        dir.path().join("config/ddlforge.toml"),
        "[schema]\ntag_key = \"orm\"\nskip_marker = \"skip\"\n",
    )
    .unwrap();
    std::env::remove_var(STRICT_OPTIONS);
    let cfg = SchemaConfig::load().unwrap();
    assert_eq!(cfg.tag_key, "db");
    assert_eq!(cfg.skip_marker, "skip");
    assert!(!cfg.strict_options);

    // File only.
    std::env::remove_var(TAG_KEY);
    let cfg = SchemaConfig::load().unwrap();
    assert_eq!(cfg.tag_key, "orm");
    assert_eq!(cfg.skip_marker, "skip");

    std::env::set_current_dir(original_dir).unwrap();
}
