//! The recurrence shared by all evaluators.
//!
//! For the canonical pair `(X, Y)` with `|X| = M >= |Y| = N`, `φ(i, j)` is the
//! minimal cost of transforming the suffix `X[i..]` into `Y[j..]`:
//!
//! ```text
//! φ(M, N) = 0
//! φ(i, N) = indel(X[i]) + φ(i+1, N)
//! φ(M, j) = indel(Y[j]) + φ(M, j+1)
//! φ(i, j) = φ(i+1, j)                          if X[i] is not a base
//!         = φ(i, j+1)                          if Y[j] is not a base
//!         = min(sub(X[i], Y[j]) + φ(i+1, j+1),
//!               ins + φ(i+1, j),
//!               ins + φ(i, j+1))              otherwise
//! ```
use crate::buffer::try_vec;
use nw_types::*;
use std::cmp::min;

/// `φ(i, j)` for an interior state `i < M, j < N`, given
/// `diag = φ(i+1, j+1)`, `down = φ(i+1, j)` and `right = φ(i, j+1)`.
#[inline]
pub fn step(cm: &CostModel, x: Symbol, y: Symbol, diag: Cost, down: Cost, right: Cost) -> Cost {
    if !x.is_base() {
        down
    } else if !y.is_base() {
        right
    } else {
        min(cm.substitution(x, y) + diag, cm.ins + min(down, right))
    }
}

/// Fails when the costs are so large that `φ` may not fit in a `Cost`.
///
/// Every `φ(i, j)`, and every sum formed while computing one, is at most
/// `max(sub, sub_unknown, ins) * (M + N)`.
pub fn check_bounds(cm: &CostModel, m: usize, n: usize) -> Result<()> {
    let max_cost = cm.sub.max(cm.sub_unknown).max(cm.ins);
    let total = m
        .checked_add(n)
        .and_then(|len| Cost::try_from(len).ok())
        .and_then(|len| len.checked_mul(max_cost));
    if total.is_none() {
        return Err(NwError::InvalidInput(format!(
            "costs up to {max_cost} over {m} + {n} symbols overflow the distance"
        )));
    }
    Ok(())
}

/// The last row `φ(M, j)` for `j` in `0..=N`.
pub(crate) fn bottom_row(cm: &CostModel, y: &[Symbol]) -> Result<Vec<Cost>> {
    let n = y.len();
    let mut row = try_vec(n + 1, 0)?;
    for j in (0..n).rev() {
        row[j] = row[j + 1] + cm.indel(y[j]);
    }
    Ok(row)
}
