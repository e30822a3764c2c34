/// `S_OK`.
pub const EMPTY_OK: i32 = 0;

/// `E_UNEXPECTED` (`0x8000FFFF`), returned by the shell when the bin is
/// already empty.
pub const EMPTY_NOTHING_TO_DELETE: i32 = 0x8000_FFFF_u32 as i32;

/// Raw result of an empty request, exactly as the shell returned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyResult {
    /// HRESULT from the shell.
    pub code: i32,
}

impl EmptyResult {
    /// Wrap a raw shell result code.
    pub fn new(code: i32) -> Self {
        Self { code }
    }

    /// `true` only for `S_OK` and the "nothing to delete" code.
    ///
    /// Every other code is a failure and is shown to the user verbatim.
    pub fn is_success(&self) -> bool {
        matches!(self.code, EMPTY_OK | EMPTY_NOTHING_TO_DELETE)
    }
}
