// ============================================================================
// Cyclic Indexing
// Treats a fixed-size sequence as a ring
// ============================================================================
//
// Normalization is ((index mod size) + size) mod size, i.e. the Euclidean
// remainder. The simpler `size + index` for negatives is only right while
// |index| <= size; -7 on a ring of 5 must land on 3, not -2.

use crate::numeric::{NumericError, NumericResult};

/// Map any `index` onto `[0, size)` by wrapping around.
///
/// In-bounds indices map to themselves, `size` maps to `0`, `-1` maps to
/// `size - 1`, and so on for any magnitude.
///
/// # Errors
/// `DivisionByZero` when `size == 0`.
///
/// # Example
/// ```
/// use numkit::indexing::cyclic_index;
///
/// assert_eq!(cyclic_index(-1, 5), Ok(4));
/// assert_eq!(cyclic_index(-7, 5), Ok(3));
/// assert_eq!(cyclic_index(5, 5), Ok(0));
/// ```
pub fn cyclic_index(index: isize, size: usize) -> NumericResult<usize> {
    if size == 0 {
        tracing::debug!(index, "cyclic index on a ring of size zero");
        return Err(NumericError::DivisionByZero);
    }
    // i128 holds every isize and usize, so the remainder never overflows
    let wrapped = (index as i128).rem_euclid(size as i128);
    Ok(wrapped as usize)
}

/// Element at `index` after cyclic normalization.
///
/// # Errors
/// `EmptyCollection` when `items` is empty.
pub fn element_at_cyclic_index<T>(items: &[T], index: isize) -> NumericResult<&T> {
    if items.is_empty() {
        tracing::debug!(index, "cyclic lookup on an empty collection");
        return Err(NumericError::EmptyCollection);
    }
    let position = cyclic_index(index, items.len())?;
    items.get(position).ok_or(NumericError::EmptyCollection)
}

/// Bounds-checked lookup that does NOT wrap: `None` outside `[0, len)`.
#[inline]
pub fn safe_index<T>(items: &[T], index: isize) -> Option<&T> {
    usize::try_from(index).ok().and_then(|position| items.get(position))
}
