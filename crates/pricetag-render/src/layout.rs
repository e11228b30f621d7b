//! Page/row layout: strictly sequential partitioning of filled fragments.

/// Tags per printed page (a 2×2 grid).
pub const PRINT_PAGE_SIZE: usize = 4;
/// Tags per horizontal pair inside a printed page.
pub const PRINT_ROW_SIZE: usize = 2;

/// Partition `fragments` into groups of at most `group_size`, preserving
/// order; the final group may be smaller. No reordering, no balancing;
/// boundaries fall every `group_size` items.
pub fn layout<T>(fragments: &[T], group_size: usize) -> Vec<&[T]> {
    assert!(group_size > 0, "group size must be positive");
    fragments.chunks(group_size).collect()
}
