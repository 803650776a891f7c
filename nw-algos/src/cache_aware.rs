//! Blocked evaluation tuned to a known cache size.
//!
//! The interior `M x N` grid is tiled with `K x K` blocks, `K = Z / LINE_SIZE`.
//! Block-rows are processed from the bottom, and the blocks of a block-row from
//! the right. Each block only touches `K` cells of each frontier:
//! - `horizontal` (`N + 1` cells): `φ(i_hi + 1, ·)` before a block-row and
//!   `φ(i_lo, ·)` after it. The last cell is the boundary column `N`.
//! - `vertical` (`K` cells): the right interface of the current block, which the
//!   block replaces by its left interface for the next block to the left.
//!
//! Per block, `horizontal[j_lo]` is saved as the corner of the next block
//! before the block overwrites it.
use crate::blocked::{block, boundary_column};
use crate::buffer::try_vec;
use crate::pair::Pair;
use crate::recurrence::{bottom_row, check_bounds};
use itertools::izip;
use log::debug;
use nw_types::*;

/// Size of a cache line, in the unit of `Z`.
pub const LINE_SIZE: usize = 64;

/// The block side `K` for cache size `z`.
pub fn block_side(z: usize) -> Result<usize> {
    if z < LINE_SIZE {
        return Err(NwError::InvalidInput(format!(
            "cache size {z} is smaller than a cache line of {LINE_SIZE}"
        )));
    }
    Ok(z / LINE_SIZE)
}

pub fn distance(cm: &CostModel, pair: &Pair, z: usize) -> Result<Cost> {
    let k = block_side(z)?;
    let (x, y) = (&pair.x[..], &pair.y[..]);
    let n = y.len();
    debug!("cache-aware: M={} N={n} Z={z} K={k}", x.len());
    check_bounds(cm, x.len(), n)?;

    let mut horizontal = bottom_row(cm, y)?;
    let mut vertical = try_vec(k.min(x.len()), 0)?;
    let (interior, boundary) = horizontal.split_at_mut(n);
    let boundary = &mut boundary[0];

    for rows in x.rchunks(k) {
        let vertical = &mut vertical[..rows.len()];
        let mut corner = *boundary;
        boundary_column(cm, rows, boundary, vertical);
        for (cols, h) in izip!(y.rchunks(k), interior.rchunks_mut(k)) {
            let next_corner = h[0];
            block(cm, rows, cols, h, vertical, corner);
            corner = next_corner;
        }
    }
    Ok(horizontal[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rolling;

    #[test]
    fn block_sides() {
        assert!(block_side(0).is_err());
        assert!(block_side(LINE_SIZE - 1).is_err());
        assert_eq!(block_side(LINE_SIZE).unwrap(), 1);
        assert_eq!(block_side(2 * LINE_SIZE - 1).unwrap(), 1);
        assert_eq!(block_side(32 * 1024).unwrap(), 512);
    }

    #[test]
    fn independent_of_cache_size() {
        let table = BaseTable::dna();
        let a = b"TTGGGTCAATCAGCNAGTTTTTAACG-TACGGATTACA";
        let b = b"TTTGAGTGGGTCATCACCGATT\nTATGCAC";
        let pair = Pair::new(a, b, &table, &mut Vec::<u8>::new()).unwrap();
        for cm in [CostModel::unit(), CostModel::new(2, 1, 3).unwrap()] {
            let expected = rolling::distance(&cm, &pair).unwrap();
            for k in 1..=45 {
                let z = k * LINE_SIZE + k % 7;
                assert_eq!(distance(&cm, &pair, z).unwrap(), expected, "{cm:?} z={z}");
            }
        }
    }

    #[test]
    fn empty_inputs() {
        let table = BaseTable::dna();
        let cm = CostModel::unit();
        let pair = Pair::new(b"", b"", &table, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(distance(&cm, &pair, LINE_SIZE).unwrap(), 0);
        let pair = Pair::new(b"ACG", b"", &table, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(distance(&cm, &pair, 2 * LINE_SIZE).unwrap(), 3);
    }
}
