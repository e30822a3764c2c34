//! Human-readable byte sizes for the tray tooltip.

const STEP: f64 = 1024.0;

/// Render a byte count with base-1024 units.
///
/// Precision differs per unit: whole bytes, one decimal for KB, none for
/// MB and GB, two for TB. TB is the last unit, larger values keep growing
/// in TB.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / STEP;
    if size < STEP {
        return format!("{:.1} KB", size);
    }

    size /= STEP;
    if size < STEP {
        return format!("{:.0} MB", size);
    }

    size /= STEP;
    if size < STEP {
        return format!("{:.0} GB", size);
    }

    size /= STEP;
    format!("{:.2} TB", size)
}
