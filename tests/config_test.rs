// tests/config_test.rs
use semverkit::config::{load_config, Config, SortOrder, LOCAL_CONFIG_FILE};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

struct CurrentDirGuard(std::path::PathBuf);

impl Drop for CurrentDirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}

#[test]
#[serial]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[parse]
tolerant = true

[output]
order = "descending"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert!(config.parse.tolerant);
    assert_eq!(config.output.order, SortOrder::Descending);
    assert!(!config.output.dedup);
}

#[test]
#[serial]
fn test_load_fixture() {
    let config = load_config(Some("tests/fixtures/config_descending.toml"))
        .expect("Failed to load test config");
    assert!(config.parse.tolerant);
    assert_eq!(config.output.order, SortOrder::Descending);
    assert!(config.output.dedup);
    assert!(config.output.skip_invalid);
}

#[test]
#[serial]
fn test_missing_file_is_error() {
    let result = load_config(Some("tests/fixtures/does_not_exist.toml"));
    assert!(matches!(result, Err(semverkit::Error::Io(_))));
}

#[test]
#[serial]
fn test_malformed_file_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[output]\norder = 3\n").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(matches!(result, Err(semverkit::Error::Config(_))));
}

#[test]
#[serial]
fn test_local_config_file_is_found() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        "[output]\nskip_invalid = true\n",
    )
    .unwrap();

    let _guard = CurrentDirGuard(std::env::current_dir().unwrap());
    std::env::set_current_dir(dir.path()).unwrap();

    let config = load_config(None).unwrap();
    assert!(config.output.skip_invalid);
    assert_eq!(config.output.order, SortOrder::Ascending);
}

#[test]
fn test_default_values() {
    let config = Config::default();
    assert!(!config.parse.tolerant);
    assert_eq!(config.output.order, SortOrder::Ascending);
    assert!(!config.output.dedup);
    assert!(!config.output.skip_invalid);
}
