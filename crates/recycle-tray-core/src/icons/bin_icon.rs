/// Tray icons every theme must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinIcon {
    /// Bin holds no items.
    Empty,
    /// Bin holds at least one item.
    Full,
}

impl BinIcon {
    /// All icons a theme directory is required to contain.
    pub const REQUIRED: [BinIcon; 2] = [BinIcon::Empty, BinIcon::Full];

    /// File name inside the theme directory.
    pub fn file_name(self) -> &'static str {
        match self {
            BinIcon::Empty => "recycle-empty.ico",
            BinIcon::Full => "recycle-full.ico",
        }
    }
}
