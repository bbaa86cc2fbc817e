//! Integration tests for Settings loading from a local config directory.
//!
//! These run without a global config (temp directories only) and do not set
//! TREESTORE_* variables, so they exercise defaults plus the local file.

use std::fs;

use tempfile::TempDir;

use treestore::application::ApplicationError;
use treestore::config::{local_config_path, Settings};
use treestore::domain::Category;

#[test]
fn given_no_local_config_when_load_then_defaults() {
    let dir = TempDir::new().unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.path_separator, " / ");
    assert_eq!(settings.category_label(Category::Group), "Group");
    assert_eq!(settings.category_label(Category::Item), "Item");
}

#[test]
fn given_local_config_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        r#"
path_separator = " > "

[labels]
group = "Folder"
item = "File"
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.path_separator, " > ");
    assert_eq!(settings.category_label(Category::Group), "Folder");
    assert_eq!(settings.category_label(Category::Item), "File");
}

#[test]
fn given_relative_items_file_when_load_then_resolved_against_config_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        "items_file = \"data/items.toml\"\n",
    )
    .unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(
        settings.items_file,
        Some(dir.path().join("data/items.toml"))
    );
}

#[test]
fn given_invalid_local_config_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "path_separator = [1, 2\n").unwrap();

    let err = Settings::load(Some(dir.path())).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains(".treestore.toml"));
}

#[test]
fn given_settings_when_rendering_toml_then_contains_labels() {
    let rendered = Settings::default().to_toml().unwrap();
    assert!(rendered.contains("path_separator"));
    assert!(rendered.contains("[labels]"));
    assert!(!rendered.contains("items_file"));
}
