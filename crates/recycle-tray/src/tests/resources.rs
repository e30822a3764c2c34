use crate::{AppError, resources::verified_resolver};

use recycle_tray_core::{BinIcon, COMMON_ICONS_DIR, CommonIcon, ICON_SETS_DIR, TrayError};

use std::{fs, path::Path};

#[allow(clippy::unwrap_used)]
fn write_icon_tree(root: &Path, themes: &[&str]) {
    for theme in themes {
        let dir = root.join(ICON_SETS_DIR).join(theme);
        fs::create_dir_all(&dir).unwrap();
        for icon in BinIcon::REQUIRED {
            fs::write(dir.join(icon.file_name()), b"ico").unwrap();
        }
    }

    let common = root.join(COMMON_ICONS_DIR);
    fs::create_dir_all(&common).unwrap();
    for icon in CommonIcon::REQUIRED {
        fs::write(common.join(icon.file_name()), b"ico").unwrap();
    }
}

/// WHAT: A complete development tree yields a resolver rooted there
/// WHY: `cargo run` must find the crate's own resources
#[test]
#[allow(clippy::unwrap_used)]
fn given_complete_dev_tree_when_verifying_then_resolver_uses_it() {
    // Given: No packaged icons next to the exe, a complete dev tree
    let exe_dir = tempfile::tempdir().unwrap();
    let dev_root = tempfile::tempdir().unwrap();
    write_icon_tree(dev_root.path(), &["default"]);

    // When: Verifying
    let resolver = verified_resolver(Some(exe_dir.path()), dev_root.path()).unwrap();

    // Then: The dev root is the base
    assert_eq!(resolver.base(), dev_root.path());
}

/// WHAT: A missing icon surfaces as a wrapped core error
/// WHY: Startup must stop with the missing file named in the log
#[test]
#[allow(clippy::unwrap_used, clippy::panic)]
fn given_missing_theme_icon_when_verifying_then_core_missing_icon_error() {
    // Given: A tree whose "dark" theme lacks its full icon
    let root = tempfile::tempdir().unwrap();
    write_icon_tree(root.path(), &["dark", "default"]);
    let missing = root
        .path()
        .join(ICON_SETS_DIR)
        .join("dark")
        .join(BinIcon::Full.file_name());
    fs::remove_file(&missing).unwrap();

    // When: Verifying
    let result = verified_resolver(None, root.path());

    // Then: AppError::Core carrying MissingIcon for that file
    match result {
        Err(AppError::Core {
            source: TrayError::MissingIcon { path, .. },
            ..
        }) => assert_eq!(path, missing),
        other => panic!("expected missing icon error, got {:?}", other),
    }
}
