//! Recursive evaluation that needs no cache size.
//!
//! The interior rectangle is solved from its interfaces (see `blocked`) by
//! halving its longer side until both sides are at most `BASE_SIDE`:
//! - a row split solves the bottom half first; its top row becomes the bottom
//!   interface of the top half,
//! - a column split solves the right half first; its left column becomes the
//!   right interface of the left half.
//!
//! The first half overwrites the interface cell that is the corner of the
//! second half, so that cell is saved before recursing.
use crate::blocked::{block, boundary_column};
use crate::buffer::try_vec;
use crate::pair::Pair;
use crate::recurrence::{bottom_row, check_bounds};
use log::debug;
use nw_types::*;

/// Rectangles with both sides at most this long are computed directly.
pub const BASE_SIDE: usize = 200;

pub fn distance(cm: &CostModel, pair: &Pair) -> Result<Cost> {
    distance_with_base(cm, pair, BASE_SIDE)
}

pub(crate) fn distance_with_base(cm: &CostModel, pair: &Pair, base: usize) -> Result<Cost> {
    let (x, y) = (&pair.x[..], &pair.y[..]);
    let n = y.len();
    debug!("cache-oblivious: M={} N={n} base={base}", x.len());
    check_bounds(cm, x.len(), n)?;

    let mut horizontal = bottom_row(cm, y)?;
    let mut vertical = try_vec(x.len(), 0)?;
    let (interior, boundary) = horizontal.split_at_mut(n);
    boundary_column(cm, x, &mut boundary[0], &mut vertical);
    solve(cm, x, y, interior, &mut vertical, 0, base.max(1));
    Ok(horizontal[0])
}

fn solve(
    cm: &CostModel,
    x: &[Symbol],
    y: &[Symbol],
    h: &mut [Cost],
    v: &mut [Cost],
    corner: Cost,
    base: usize,
) {
    if x.is_empty() || y.is_empty() {
        return;
    }
    if x.len() <= base && y.len() <= base {
        block(cm, x, y, h, v, corner);
        return;
    }
    if x.len() >= y.len() {
        let mid = x.len() / 2;
        let (x_top, x_bot) = x.split_at(mid);
        let (v_top, v_bot) = v.split_at_mut(mid);
        let top_corner = v_bot[0];
        solve(cm, x_bot, y, h, v_bot, corner, base);
        solve(cm, x_top, y, h, v_top, top_corner, base);
    } else {
        let mid = y.len() / 2;
        let (y_left, y_right) = y.split_at(mid);
        let (h_left, h_right) = h.split_at_mut(mid);
        let left_corner = h_right[0];
        solve(cm, x, y_right, h_right, v, corner, base);
        solve(cm, x, y_left, h_left, v, left_corner, base);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topdown;

    /// Small base sizes force deep, unbalanced splits.
    #[test]
    fn any_base_size() {
        let table = BaseTable::dna();
        let cases: [(&[u8], &[u8]); 5] = [
            (b"ACGTTGCAAGT-CCA", b"ACGTGCAGTCNA"),
            (b"GATTACA", b"GATTACA"),
            (b"AAAAAAAAAAAAAAAAAAAAAA", b"T"),
            (b"CT-GA\nCTGA", b"AGTC"),
            (b"ACGT", b""),
        ];
        for cm in [CostModel::unit(), CostModel::new(3, 0, 2).unwrap()] {
            for (a, b) in cases {
                let pair = Pair::new(a, b, &table, &mut Vec::<u8>::new()).unwrap();
                let expected = topdown::distance(&cm, &pair).unwrap();
                for base in 0..=9 {
                    assert_eq!(
                        distance_with_base(&cm, &pair, base).unwrap(),
                        expected,
                        "{cm:?} base={base} a={} b={}",
                        seq_to_string(a),
                        seq_to_string(b)
                    );
                }
                assert_eq!(distance(&cm, &pair).unwrap(), expected);
            }
        }
    }

    #[test]
    fn larger_than_base() {
        let table = BaseTable::dna();
        let a: Vec<u8> = (0..700).map(|i| b"ACGT"[(i * i + 3 * i) % 4]).collect();
        let b: Vec<u8> = (0..450).map(|i| b"ACGTN-"[(7 * i + i / 5) % 6]).collect();
        let pair = Pair::new(&a, &b, &table, &mut Vec::<u8>::new()).unwrap();
        let cm = CostModel::linear(1, 2);
        assert_eq!(
            distance(&cm, &pair).unwrap(),
            crate::rolling::distance(&cm, &pair).unwrap()
        );
    }
}
