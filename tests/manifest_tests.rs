use std::fs;
use tempfile::TempDir;

use droidconv::load_manifest;

fn write_manifest(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("droidconv.toml");
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_load_manifest_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(
        &dir,
        r#"
        [android]
        jdk-version = 21
        compile-sdk = 35

        [dependencies]
        implementation = ["androidx.core:core-ktx:1.12.0"]
        "#,
    );

    let manifest = load_manifest(&path).unwrap();

    assert_eq!(manifest.android.jdk_version, Some(21));
    assert_eq!(manifest.android.compile_sdk, Some(35));
    assert_eq!(
        manifest.dependencies.get("implementation").unwrap(),
        &vec!["androidx.core:core-ktx:1.12.0".to_string()]
    );
}

#[test]
fn test_missing_manifest_reports_the_path() {
    let err = load_manifest("does-not-exist.toml").unwrap_err();

    assert!(err.to_string().contains("could not find"));
    assert!(err.to_string().contains("does-not-exist.toml"));
}

#[test]
fn test_unparseable_manifest_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "[android\njdk-version = 21");

    let err = load_manifest(&path).unwrap_err();

    assert!(err.to_string().contains("failed to parse"));
}

#[test]
fn test_malformed_coordinate_is_rejected_at_load_time() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(
        &dir,
        r#"
        [dependencies]
        ksp = ["just-an-artifact"]
        "#,
    );

    let err = load_manifest(&path).unwrap_err();

    assert!(err.to_string().contains("just-an-artifact"));
}

#[test]
fn test_empty_manifest_is_valid() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "");

    let manifest = load_manifest(&path).unwrap();

    assert_eq!(manifest.android.jdk_version, None);
    assert!(manifest.dependencies.is_empty());
}
