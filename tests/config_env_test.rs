//! Environment layer of Settings loading.
//!
//! Kept in its own test binary: it sets process-wide TREESTORE_* variables,
//! which would leak into the parallel tests of config_test.rs.

use std::env;
use std::fs;

use tempfile::TempDir;

use treestore::config::{local_config_path, Settings};
use treestore::domain::Category;

#[test]
fn given_env_vars_when_load_then_they_override_local_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        r#"
path_separator = " | "

[labels]
group = "Folder"
item = "File"
"#,
    )
    .unwrap();

    env::set_var("TREESTORE_PATH_SEPARATOR", " > ");
    env::set_var("TREESTORE_LABELS__GROUP", "Branch");
    let settings = Settings::load(Some(dir.path()));
    env::remove_var("TREESTORE_PATH_SEPARATOR");
    env::remove_var("TREESTORE_LABELS__GROUP");

    let settings = settings.expect("load settings");
    assert_eq!(settings.path_separator, " > ");
    assert_eq!(settings.category_label(Category::Group), "Branch");
    assert_eq!(settings.category_label(Category::Item), "File");
}
