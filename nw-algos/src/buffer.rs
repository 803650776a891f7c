//! Fallible allocation of the call-scoped tables and frontiers.

use nw_types::{NwError, Result};

/// An empty vector with room for `cap` elements, or `NwError::Allocation`.
pub(crate) fn try_with_capacity<T>(cap: usize) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(cap)
        .map_err(|source| NwError::Allocation {
            cells: cap,
            source: Some(source),
        })?;
    Ok(v)
}

/// `len` copies of `value`, or `NwError::Allocation`.
pub(crate) fn try_vec<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut v = try_with_capacity(len)?;
    v.resize(len, value);
    Ok(v)
}

/// Number of cells in a `rows` x `cols` table.
pub(crate) fn grid_cells(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or(NwError::Allocation {
        cells: usize::MAX,
        source: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_buffers() {
        assert_eq!(try_vec(3, -1i64).unwrap(), vec![-1, -1, -1]);
        assert!(try_with_capacity::<u8>(0).unwrap().is_empty());
        assert_eq!(grid_cells(5, 7).unwrap(), 35);
    }

    #[test]
    fn impossible_buffers() {
        assert!(matches!(
            try_vec(usize::MAX, 0i64),
            Err(NwError::Allocation {
                cells: usize::MAX,
                source: Some(_)
            })
        ));
        assert!(matches!(
            try_with_capacity::<(usize, usize)>(usize::MAX / 2),
            Err(NwError::Allocation { .. })
        ));
        assert!(matches!(
            grid_cells(usize::MAX, 2),
            Err(NwError::Allocation { source: None, .. })
        ));
    }
}
