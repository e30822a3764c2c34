use crate::{Autostart, tests::fakes::FakeShortcutWriter};

use std::path::Path;

use tempfile::TempDir;

#[allow(clippy::unwrap_used)]
fn autostart(fails: bool) -> (TempDir, Autostart) {
    let dir = tempfile::tempdir().unwrap();
    let exe = dir.path().join("bin").join("recycle-tray.exe");
    let autostart = Autostart::new(
        dir.path(),
        exe,
        Box::new(FakeShortcutWriter { fails }),
    );
    (dir, autostart)
}

/// WHAT: The shortcut is named after the executable stem
/// WHY: Autostart state is keyed on that exact file
#[test]
fn given_exe_path_when_building_shortcut_path_then_stem_lnk_in_startup_dir() {
    // Given: An autostart for recycle-tray.exe
    let (dir, autostart) = autostart(false);

    // When/Then: The shortcut is <startup>/recycle-tray.lnk
    assert_eq!(autostart.shortcut_path(), dir.path().join("recycle-tray.lnk"));
}

/// WHAT: Enabling creates the shortcut and reports enabled
/// WHY: The menu check mark follows is_enabled
#[test]
fn given_disabled_when_enabling_then_enabled() {
    // Given: No shortcut yet
    let (_dir, autostart) = autostart(false);
    assert!(!autostart.is_enabled());

    // When: Enabling
    let ok = autostart.enable();

    // Then: Success and the shortcut exists
    assert!(ok);
    assert!(autostart.is_enabled());
}

/// WHAT: Disabling removes the shortcut
/// WHY: Toggling off must stop launch at login
#[test]
fn given_enabled_when_disabling_then_disabled() {
    // Given: An existing shortcut
    let (_dir, autostart) = autostart(false);
    assert!(autostart.enable());

    // When: Disabling
    let ok = autostart.disable();

    // Then: Success and no shortcut
    assert!(ok);
    assert!(!autostart.is_enabled());
}

/// WHAT: Disabling when already disabled reports false
/// WHY: Removing a shortcut that does not exist counts as a failed toggle
#[test]
fn given_already_disabled_when_disabling_then_false() {
    // Given: No shortcut
    let (_dir, autostart) = autostart(false);

    // When/Then: Disable reports failure and state stays disabled
    assert!(!autostart.disable());
    assert!(!autostart.is_enabled());
}

/// WHAT: A failing shortcut writer makes enable return false
/// WHY: Permission problems must never escape as errors
#[test]
fn given_writer_failure_when_enabling_then_false() {
    // Given: A writer that always fails
    let (_dir, autostart) = autostart(true);

    // When/Then: Enable reports failure and nothing was created
    assert!(!autostart.enable());
    assert!(!autostart.is_enabled());
}

/// WHAT: The Startup folder sits under the roaming Start Menu
/// WHY: Windows only launches shortcuts from that exact folder
#[test]
#[allow(clippy::unwrap_used)]
fn given_user_dirs_when_locating_startup_folder_then_start_menu_startup() {
    // Given/When: The startup folder for this user
    let folder = Autostart::startup_folder().unwrap();

    // Then: It ends in the well-known relative path
    assert!(folder.ends_with(
        Path::new("Microsoft")
            .join("Windows")
            .join("Start Menu")
            .join("Programs")
            .join("Startup")
    ));
}
