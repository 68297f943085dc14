//! Nearest-neighbour lookups in a key's ascending position list.

/// Greatest position strictly less than `query`
pub fn find_prev_in_key(positions: &[usize], query: usize) -> Option<usize> {
    let idx = positions.partition_point(|&pos| pos < query);
    idx.checked_sub(1).map(|i| positions[i])
}

/// Smallest position strictly greater than `query`
pub fn find_next_in_key(positions: &[usize], query: usize) -> Option<usize> {
    let idx = positions.partition_point(|&pos| pos <= query);
    positions.get(idx).copied()
}

/// Greatest position less than or equal to `query`
pub fn find_at_or_before(positions: &[usize], query: usize) -> Option<usize> {
    match positions.binary_search(&query) {
        Ok(_) => Some(query),
        Err(_) => find_prev_in_key(positions, query),
    }
}
