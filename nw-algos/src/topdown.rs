//! Top-down evaluation of `φ(0, 0)` with a dense memoization table.
//!
//! States are expanded depth first from `(0, 0)`, and every state is evaluated
//! once all the successors it depends on are memoized. The pending states are
//! kept on an explicit stack instead of the call stack: each pushed state has a
//! strictly larger `i + j` than the one below it, so at most `M + N + 1` states
//! are pending at any time.
use crate::buffer::{grid_cells, try_vec, try_with_capacity};
use crate::pair::Pair;
use crate::recurrence::{check_bounds, step};
use log::debug;
use nw_types::*;

/// Marks memo cells that have not been computed yet. Distances are never negative.
const NOT_YET_COMPUTED: Cost = -1;

struct Memo<'a> {
    cm: &'a CostModel,
    x: &'a [Symbol],
    y: &'a [Symbol],
    /// `φ(i, j)` is stored at `i * (N + 1) + j`.
    table: Vec<Cost>,
}

impl Memo<'_> {
    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        i * (self.y.len() + 1) + j
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> Option<Cost> {
        let c = self.table[self.idx(i, j)];
        (c != NOT_YET_COMPUTED).then_some(c)
    }

    fn set(&mut self, i: usize, j: usize, c: Cost) {
        let idx = self.idx(i, j);
        debug_assert_eq!(self.table[idx], NOT_YET_COMPUTED, "({i}, {j}) computed twice");
        debug_assert!(c >= 0);
        self.table[idx] = c;
    }

    /// `φ(i, j)` when every successor it depends on is memoized, or else the
    /// first missing successor.
    fn eval(&self, i: usize, j: usize) -> std::result::Result<Cost, (usize, usize)> {
        let (m, n) = (self.x.len(), self.y.len());
        let known = |i: usize, j: usize| self.get(i, j).ok_or((i, j));
        if i == m {
            if j == n {
                return Ok(0);
            }
            return Ok(self.cm.indel(self.y[j]) + known(i, j + 1)?);
        }
        if j == n {
            return Ok(self.cm.indel(self.x[i]) + known(i + 1, j)?);
        }
        let (x, y) = (self.x[i], self.y[j]);
        // Skipped symbols only depend on a single successor.
        if !x.is_base() {
            return known(i + 1, j);
        }
        if !y.is_base() {
            return known(i, j + 1);
        }
        let diag = known(i + 1, j + 1)?;
        let down = known(i + 1, j)?;
        let right = known(i, j + 1)?;
        Ok(step(self.cm, x, y, diag, down, right))
    }
}

pub fn distance(cm: &CostModel, pair: &Pair) -> Result<Cost> {
    let (m, n) = (pair.m(), pair.n());
    debug!("top-down: M={m} N={n}");
    check_bounds(cm, m, n)?;
    let cells = grid_cells(m + 1, n + 1)?;
    let mut memo = Memo {
        cm,
        x: &pair.x,
        y: &pair.y,
        table: try_vec(cells, NOT_YET_COMPUTED)?,
    };

    let mut pending = try_with_capacity(m + n + 1)?;
    pending.push((0, 0));
    while let Some(&(i, j)) = pending.last() {
        match memo.eval(i, j) {
            Ok(c) => {
                memo.set(i, j, c);
                pending.pop();
            }
            Err(next) => pending.push(next),
        }
    }
    Ok(memo.table[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(cm: &CostModel, a: Seq, b: Seq) -> Cost {
        let pair = Pair::new(a, b, &BaseTable::dna(), &mut Vec::<u8>::new()).unwrap();
        distance(cm, &pair).unwrap()
    }

    #[test]
    fn small() {
        let cm = CostModel::unit();
        assert_eq!(dist(&cm, b"", b""), 0);
        assert_eq!(dist(&cm, b"A", b""), 1);
        assert_eq!(dist(&cm, b"A", b"C"), 1);
        assert_eq!(dist(&cm, b"ACGT", b"ACGT"), 0);
        assert_eq!(dist(&cm, b"ACGT", b"AGT"), 1);
        assert_eq!(dist(&cm, b"AGGCTA", b"GGCTAA"), 2);
    }

    #[test]
    fn indels_cheaper_than_substitution() {
        let cm = CostModel::linear(5, 1);
        assert_eq!(dist(&cm, b"AAAA", b"TTTT"), 8);
        assert_eq!(dist(&cm, b"ACGT", b"TACG"), 2);
    }

    #[test]
    fn only_non_bases() {
        let cm = CostModel::unit();
        assert_eq!(dist(&cm, b"---", b"**"), 0);
        assert_eq!(dist(&cm, b"-A-", b"*"), 1);
    }

    #[test]
    fn long_sequences_do_not_overflow_the_stack() {
        let cm = CostModel::unit();
        let a = vec![b'A'; 20_000];
        let b = vec![b'C'; 100];
        assert_eq!(dist(&cm, &a, &b), 20_000);
    }
}
