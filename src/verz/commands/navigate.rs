//! Cursor arithmetic. Pure functions so every edge can be tested without a
//! corpus in hand: the cursor never leaves `[0, total - 1]` and out-of-range
//! jump requests leave it for the caller to ignore.

/// Advance to the next page, staying put on the last one.
pub fn next(cursor: usize, total: usize) -> usize {
    if cursor + 1 < total {
        cursor + 1
    } else {
        cursor
    }
}

/// Step back to the previous page, staying put on the first one.
pub fn previous(cursor: usize) -> usize {
    cursor.saturating_sub(1)
}

/// Resolve a 1-based chapter number to a cursor value.
/// Returns `None` when the number is outside `1..=total`.
pub fn jump(chapter_number: usize, total: usize) -> Option<usize> {
    if chapter_number >= 1 && chapter_number <= total {
        Some(chapter_number - 1)
    } else {
        None
    }
}
