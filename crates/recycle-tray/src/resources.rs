//! Icon resources checked once at startup.

use crate::AppResult;

use recycle_tray_core::IconResolver;

use std::path::Path;

use tracing::info;

/// Resolver for the packaged or development icon tree.
///
/// Fails when any theme or the common pool lacks a required icon.
pub(crate) fn verified_resolver(exe_dir: Option<&Path>, dev_root: &Path) -> AppResult<IconResolver> {
    let resolver = IconResolver::new(IconResolver::resource_base(exe_dir, dev_root));
    resolver.verify_all_icons()?;

    info!(base = ?resolver.base(), "Icon resources verified");

    Ok(resolver)
}
