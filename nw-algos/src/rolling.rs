//! Bottom-up evaluation with a single row of `N + 1` cells.
use crate::pair::Pair;
use crate::recurrence::{bottom_row, check_bounds, step};
use log::debug;
use nw_types::*;

/// Rows are computed from `M` down to `0`, each from right to left, in place.
///
/// While row `i` is computed, `row[..=j]` still holds `φ(i+1, ·)` and
/// `row[j+1..]` already holds `φ(i, ·)`. The diagonal `φ(i+1, j+1)` has been
/// overwritten at that point, so it is kept in `diag`: it is read from `row[j]`
/// before `row[j]` is overwritten, and becomes the diagonal of column `j - 1`.
pub fn distance(cm: &CostModel, pair: &Pair) -> Result<Cost> {
    let (x, y) = (&pair.x[..], &pair.y[..]);
    let n = y.len();
    debug!("rolling: M={} N={n}", x.len());
    check_bounds(cm, x.len(), n)?;

    let mut row = bottom_row(cm, y)?;
    for &cx in x.iter().rev() {
        let mut diag = row[n];
        row[n] += cm.indel(cx);
        for j in (0..n).rev() {
            let down = row[j];
            row[j] = step(cm, cx, y[j], diag, down, row[j + 1]);
            diag = down;
        }
    }
    Ok(row[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topdown;

    fn both(cm: &CostModel, a: Seq, b: Seq) -> (Cost, Cost) {
        let pair = Pair::new(a, b, &BaseTable::dna(), &mut Vec::<u8>::new()).unwrap();
        (
            topdown::distance(cm, &pair).unwrap(),
            distance(cm, &pair).unwrap(),
        )
    }

    /// Inputs where a stale diagonal changes the answer.
    #[test]
    fn diagonal_carry() {
        let cases: [(&[u8], &[u8]); 10] = [
            (b"AC", b"CA"),
            (b"ACGT", b"CGTA"),
            (b"AAAAC", b"CAAAA"),
            (b"GATTACA", b"TACAGAT"),
            (b"A-C-G", b"CG"),
            (b"--A--", b"A"),
            (b"AC\nGT", b"A-C-G-T"),
            (b"NNACGT", b"ACGTNN"),
            (b"T", b"-T-"),
            (b"ACGTTGCA", b"-"),
        ];
        for cm in [
            CostModel::unit(),
            CostModel::linear(1, 2),
            CostModel::linear(3, 1),
            CostModel::new(2, 0, 3).unwrap(),
        ] {
            for (a, b) in cases {
                let (expected, got) = both(&cm, a, b);
                assert_eq!(
                    expected,
                    got,
                    "{cm:?} a={} b={}",
                    seq_to_string(a),
                    seq_to_string(b)
                );
            }
        }
    }

    #[test]
    fn single_row() {
        let cm = CostModel::unit();
        assert_eq!(both(&cm, b"ACGT", b"").1, 4);
        assert_eq!(both(&cm, b"A", b"A").1, 0);
        assert_eq!(both(&cm, b"", b"").1, 0);
    }
}
