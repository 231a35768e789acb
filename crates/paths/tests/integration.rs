//! Integration tests for path resolution

use jmxbeat_errors::PathError;
use jmxbeat_paths::{PathCategory, PathConfig, PathResolver};
use proptest::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn home_config(home: &Path) -> PathConfig {
    PathConfig {
        home: Some(home.to_path_buf()),
        ..PathConfig::default()
    }
}

#[test]
fn test_init_creates_data_dir() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("beat");

    let paths = PathResolver::from_config(&home_config(&home), &PathConfig::default()).unwrap();

    assert!(paths.is_initialized());
    assert_eq!(paths.data(), home.join("data"));
    assert!(paths.data().is_dir());
    // Only the data directory is created
    assert!(!paths.logs().exists());
}

#[cfg(unix)]
#[test]
fn test_data_dir_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let paths =
        PathResolver::from_config(&home_config(temp.path()), &PathConfig::default()).unwrap();

    let mode = std::fs::metadata(paths.data()).unwrap().permissions().mode();
    assert_eq!(mode & 0o700, 0o700);
    // umask may only narrow the requested bits
    assert_eq!(mode & 0o777 & !jmxbeat_paths::DATA_DIR_MODE, 0);
}

#[test]
fn test_existing_data_dir_is_accepted() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("data").join("registry")).unwrap();

    let paths =
        PathResolver::from_config(&home_config(temp.path()), &PathConfig::default()).unwrap();

    assert!(paths.data().join("registry").is_dir());
}

#[test]
fn test_data_path_is_a_file() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("data");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let mut paths = PathResolver::new();
    let err = paths
        .init(&home_config(temp.path()), &PathConfig::default())
        .unwrap_err();

    match err {
        PathError::DataDirCreateFailed { path, cause } => {
            assert_eq!(PathBuf::from(path), blocker);
            assert!(!cause.is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_override_data_dir_is_created() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let data = temp.path().join("var").join("lib").join("beat");
    let overrides = PathConfig {
        data: Some(data.clone()),
        ..PathConfig::default()
    };

    let paths = PathResolver::from_config(&home_config(&home), &overrides).unwrap();

    assert_eq!(paths.data(), data);
    assert!(data.is_dir());
    assert!(!home.join("data").exists());
    assert_eq!(paths.config(), home);
    assert_eq!(paths.logs(), home.join("logs"));
}

#[test]
fn test_second_init_recomputes() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    let mut paths = PathResolver::new();
    let base = PathConfig {
        home: Some(first.path().to_path_buf()),
        config: Some(first.path().join("etc")),
        logs: Some(first.path().join("log")),
        data: None,
    };
    paths.init(&base, &PathConfig::default()).unwrap();
    assert_eq!(paths.config(), first.path().join("etc"));

    paths
        .init(&home_config(second.path()), &PathConfig::default())
        .unwrap();

    assert_eq!(paths.home(), second.path());
    assert_eq!(paths.config(), second.path());
    assert_eq!(paths.data(), second.path().join("data"));
    assert_eq!(paths.logs(), second.path().join("logs"));
}

#[test]
fn test_independent_instances() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();

    let none = PathConfig::default();
    let paths_a = PathResolver::from_config(&home_config(a.path()), &none).unwrap();
    let paths_b = PathResolver::from_config(&home_config(b.path()), &none).unwrap();

    assert_ne!(paths_a, paths_b);
    assert!(paths_a.resolve(PathCategory::Data, "x").starts_with(a.path()));
    assert!(paths_b.resolve(PathCategory::Data, "x").starts_with(b.path()));
}

#[test]
fn test_shared_readers() {
    let temp = TempDir::new().unwrap();
    let paths = std::sync::Arc::new(
        PathResolver::from_config(&home_config(temp.path()), &PathConfig::default()).unwrap(),
    );

    let handles: Vec<_> = PathCategory::ALL
        .into_iter()
        .map(|category| {
            let paths = std::sync::Arc::clone(&paths);
            std::thread::spawn(move || paths.resolve(category, "file"))
        })
        .collect();

    for (category, handle) in PathCategory::ALL.into_iter().zip(handles) {
        assert_eq!(handle.join().unwrap(), paths.dir(category).join("file"));
    }
}

#[test]
fn test_serialize_paths() {
    let temp = TempDir::new().unwrap();
    let paths =
        PathResolver::from_config(&home_config(temp.path()), &PathConfig::default()).unwrap();

    let json = serde_json::to_value(&paths).unwrap();
    assert_eq!(json["home"], temp.path().display().to_string());
    assert_eq!(json["data"], temp.path().join("data").display().to_string());
}

fn fixed_resolver() -> PathResolver {
    let base = PathConfig {
        home: Some("/opt/app".into()),
        config: Some("/etc/app".into()),
        data: Some("/var/lib/app".into()),
        logs: Some("/var/log/app".into()),
    };
    PathResolver::resolved(&base, &PathConfig::default()).unwrap()
}

fn any_category() -> impl Strategy<Value = PathCategory> {
    prop::sample::select(PathCategory::ALL.to_vec())
}

proptest! {
    #[test]
    fn absolute_paths_are_unchanged(
        category in any_category(),
        segments in prop::collection::vec("[a-zA-Z0-9_.-]{1,12}", 0..5),
    ) {
        let path = PathBuf::from(format!("/{}", segments.join("/")));
        let paths = fixed_resolver();
        prop_assert_eq!(paths.resolve(category, &path), path);
    }

    #[test]
    fn relative_paths_land_in_category(
        category in any_category(),
        segments in prop::collection::vec("[a-zA-Z0-9_-]{1,12}", 1..5),
    ) {
        let relative = segments.join("/");
        let paths = fixed_resolver();
        let resolved = paths.resolve(category, &relative);
        prop_assert!(resolved.starts_with(paths.dir(category)));
        prop_assert_eq!(resolved, paths.dir(category).join(relative));
    }
}
