//! Computing rectangles of the DP grid from their interfaces.
//!
//! A rectangle covers the rows of `x` and the columns of `y`, say rows
//! `i_lo..=i_hi` and columns `j_lo..=j_hi`. It depends on the outside only
//! through three interfaces:
//! - the horizontal frontier `h[j] = φ(i_hi + 1, j)` below it,
//! - the vertical frontier `v[i] = φ(i, j_hi + 1)` to its right,
//! - the corner `φ(i_hi + 1, j_hi + 1)`.
//!
//! Computing the rectangle replaces `h` by its top row `φ(i_lo, ·)` and `v` by
//! its leftmost column `φ(·, j_lo)`, which are exactly the interfaces of the
//! rectangles above it and to its left.
use crate::recurrence::step;
use itertools::izip;
use nw_types::*;

/// Computes the rectangle `x` by `y` in place. See the module docs.
///
/// The corner of the rectangle to the left is `h[0]` *before* this call;
/// callers must read it first.
pub(crate) fn block(
    cm: &CostModel,
    x: &[Symbol],
    y: &[Symbol],
    h: &mut [Cost],
    v: &mut [Cost],
    corner: Cost,
) {
    debug_assert_eq!(x.len(), v.len());
    debug_assert_eq!(y.len(), h.len());

    // `v` value of the row below, before it was overwritten: the diagonal of
    // the rightmost cell of the current row.
    let mut v_diag = corner;
    for (&cx, v) in izip!(x, v.iter_mut()).rev() {
        let mut diag = v_diag;
        let mut right = *v;
        for (&cy, h) in izip!(y, h.iter_mut()).rev() {
            let down = *h;
            right = step(cm, cx, cy, diag, down, right);
            *h = right;
            diag = down;
        }
        v_diag = *v;
        *v = right;
    }
}

/// Walks up the boundary column `N` along the rows `x`.
///
/// `boundary` goes from `φ(i_hi + 1, N)` to `φ(i_lo, N)`, and `v[i]` receives `φ(i, N)`.
pub(crate) fn boundary_column(cm: &CostModel, x: &[Symbol], boundary: &mut Cost, v: &mut [Cost]) {
    debug_assert_eq!(x.len(), v.len());
    for (&cx, v) in izip!(x, v.iter_mut()).rev() {
        *boundary += cm.indel(cx);
        *v = *boundary;
    }
}
