use super::grid::GridPoint;

/// Check whether two cell-aligned entities occupy the same cell
///
/// Every entity is exactly one cell in size, so the box-overlap test reduces
/// to coordinate equality at this discretization.
pub fn overlaps(a: GridPoint, b: GridPoint) -> bool {
    a == b
}

/// Check whether the head overlaps any segment with index >= 2
///
/// Index 0 is the head itself and index 1 (the neck) trails one cell behind
/// after every walk, so both are excluded from the scan. A consequence is
/// that a snake shorter than three segments can never bite itself.
pub fn head_hits_body(segments: &[GridPoint]) -> bool {
    match segments.first() {
        Some(&head) => segments.iter().skip(2).any(|&seg| overlaps(head, seg)),
        None => false,
    }
}
