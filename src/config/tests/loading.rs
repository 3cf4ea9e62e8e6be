//! Tests for loading configuration from the environment and CLI flags.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use rstest::rstest;

use crate::PagerConfig;

fn load_with(env: [(&str, Option<&str>); 2], cli_args: &[&str]) -> PagerConfig {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().to_string();

    let [(first_key, first_value), (second_key, second_value)] = env;
    let _guard = env_lock::lock_env([
        (first_key, first_value),
        (second_key, second_value),
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
    ]);

    let mut args = vec![OsString::from("paging-window")];
    args.extend(cli_args.iter().map(OsString::from));

    PagerConfig::load_from_iter(args).expect("config should load")
}

#[rstest]
fn loads_values_from_environment() {
    let config = load_with(
        [
            ("PAGING_WINDOW_DATA_FILE", Some("env.json")),
            ("PAGING_WINDOW_LIMIT", Some("4")),
        ],
        &[],
    );

    assert_eq!(config.data_file.as_deref(), Some("env.json"));
    assert_eq!(config.limit, Some(4));
}

#[rstest]
fn cli_flags_override_environment() {
    let config = load_with(
        [
            ("PAGING_WINDOW_DATA_FILE", Some("env.json")),
            ("PAGING_WINDOW_LIMIT", None),
        ],
        &["--data-file", "cli.json", "-p", "2", "--sort=-price"],
    );

    assert_eq!(config.data_file.as_deref(), Some("cli.json"));
    assert_eq!(config.page, Some(2));
    assert_eq!(config.sort.as_deref(), Some("-price"));
}
