// Memory offset calculation
//
// The memory view is windowed in rows of `ROW_WIDTH` bytes. Every address the
// panel tracks (PC, SP, a scroll target) is turned into the index of the row
// that contains it.

/// Number of bytes shown per memory view row
pub const ROW_WIDTH: usize = 8;

/// Map a byte address to the memory view row that contains it
///
/// Integer division truncates, so any address inside a row maps to the
/// start of that row.
///
/// # Example
///
/// ```
/// use dmg_inspector::inspector::calculate_offset;
///
/// assert_eq!(calculate_offset(0x0064), 12);
/// assert_eq!(calculate_offset(0xFFFF), 0x1FFF);
/// ```
pub const fn calculate_offset(address: u16) -> usize {
    address as usize / ROW_WIDTH
}

/// First byte address of a memory view row
pub const fn row_address(row: usize) -> usize {
    row * ROW_WIDTH
}
