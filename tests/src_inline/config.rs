use super::*;
use tempfile::tempdir;

#[test]
fn defaults_without_file() {
    let settings = Settings::load(None).expect("settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.input.delimiter, ',');
    assert_eq!(settings.output.filtered_suffix, "seq");
}

#[test]
fn reads_toml_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tabseq.toml");
    std::fs::write(&path, "[input]\ndelimiter = \";\"\n").expect("write");
    let settings = Settings::load(Some(path.as_path())).expect("settings");
    assert_eq!(settings.input.delimiter, ';');
    assert_eq!(settings.output.filtered_suffix, "seq");
    assert_eq!(settings.read_options(None).expect("opts").delimiter, b';');
}

#[test]
fn flag_overrides_file_delimiter() {
    let settings = Settings::default();
    let opts = settings.read_options(Some('\t')).expect("opts");
    assert_eq!(opts.delimiter, b'\t');
}

#[test]
fn rejects_non_ascii_delimiter() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tabseq.toml");
    std::fs::write(&path, "[input]\ndelimiter = \"¦\"\n").expect("write");
    assert!(matches!(
        Settings::load(Some(path.as_path())),
        Err(ConfigError::Input(_))
    ));
}

#[test]
fn malformed_toml_is_reported() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tabseq.toml");
    std::fs::write(&path, "[output\n").expect("write");
    assert!(matches!(
        Settings::load(Some(path.as_path())),
        Err(ConfigError::Toml(_))
    ));
}
