use crate::{DesktopIconVisibility, FLAG_HIDDEN, FLAG_VISIBLE, tests::fakes::FakeFlag};

use std::sync::atomic::Ordering;

/// WHAT: An unset flag means the icon is visible
/// WHY: Windows shows the recycle bin until told otherwise
#[test]
fn given_absent_value_when_reading_then_visible() {
    // Given: A flag store with no value
    let visibility = DesktopIconVisibility::new(Box::new(FakeFlag::default()));

    // When/Then: Reported visible
    assert!(visibility.is_visible());
}

/// WHAT: Setting visible then reading returns visible
/// WHY: The menu check mark must match the registry
#[test]
#[allow(clippy::unwrap_used)]
fn given_hidden_when_setting_visible_then_visible() {
    // Given: A hidden icon
    let flag = FakeFlag::default();
    *flag.value.lock().unwrap() = Some(FLAG_HIDDEN);
    let visibility = DesktopIconVisibility::new(Box::new(flag.clone()));
    assert!(!visibility.is_visible());

    // When: Showing it
    let ok = visibility.set_visible(true);

    // Then: Flag is 0 and reads back visible
    assert!(ok);
    assert_eq!(*flag.value.lock().unwrap(), Some(FLAG_VISIBLE));
    assert!(visibility.is_visible());
}

/// WHAT: Setting hidden writes 1 and notifies the shell
/// WHY: The desktop must redraw immediately
#[test]
#[allow(clippy::unwrap_used)]
fn given_visible_when_setting_hidden_then_hidden_and_shell_notified() {
    // Given: Default (visible) state
    let flag = FakeFlag::default();
    let visibility = DesktopIconVisibility::new(Box::new(flag.clone()));

    // When: Hiding
    assert!(visibility.set_visible(false));

    // Then: Flag is 1, reads hidden, shell told once
    assert_eq!(*flag.value.lock().unwrap(), Some(FLAG_HIDDEN));
    assert!(!visibility.is_visible());
    assert_eq!(flag.shell_notified.load(Ordering::SeqCst), 1);
}

/// WHAT: A read failure counts as visible
/// WHY: Registry trouble must not hide state or crash the menu
#[test]
fn given_read_failure_when_reading_then_visible() {
    // Given: A flag store that cannot be read
    let flag = FakeFlag {
        fail_read: true,
        ..FakeFlag::default()
    };
    let visibility = DesktopIconVisibility::new(Box::new(flag));

    // When/Then: Visible
    assert!(visibility.is_visible());
}

/// WHAT: A write failure is swallowed and the shell is not notified
/// WHY: Errors are logged, never propagated
#[test]
fn given_write_failure_when_setting_then_false_without_notify() {
    // Given: A flag store that rejects writes
    let flag = FakeFlag {
        fail_write: true,
        ..FakeFlag::default()
    };
    let visibility = DesktopIconVisibility::new(Box::new(flag.clone()));

    // When: Hiding
    let ok = visibility.set_visible(false);

    // Then: Reported failure, no redraw
    assert!(!ok);
    assert_eq!(flag.shell_notified.load(Ordering::SeqCst), 0);
}
