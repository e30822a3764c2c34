/// Snapshot of the recycle bin reported by the shell.
///
/// Recomputed on every poll and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BinStatus {
    /// Number of items across all drives.
    pub item_count: u64,
    /// Combined size of those items in bytes.
    pub total_bytes: u64,
}

impl BinStatus {
    /// Whether the bin holds nothing.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}
