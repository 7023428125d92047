/// Reduces `index` into `0..len`, so the edge after the last edge of a
/// closed path is its first edge.
///
/// `len` must be non-zero.
#[must_use]
pub fn wrap(index: usize, len: usize) -> usize {
    index % len
}

/// Returns the index preceding `index` in a ring of `len` elements.
///
/// `len` must be non-zero.
#[must_use]
pub fn prev(index: usize, len: usize) -> usize {
    if index % len == 0 {
        len - 1
    } else {
        index % len - 1
    }
}

/// Iterates `count` consecutive ring indices starting at `start`,
/// wrapping past the end of the ring.
///
/// `len` must be non-zero.
pub fn cyclic_range(start: usize, count: usize, len: usize) -> impl Iterator<Item = usize> {
    (start..start + count).map(move |i| i % len)
}
