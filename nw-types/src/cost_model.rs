//! This module contains the `CostModel`: substitution, unknown-base substitution and indel costs.

use crate::{bases::Symbol, Cost, NwError, Result};
use serde::{Deserialize, Serialize};

/// The three costs of the linear edit model.
///
/// Insertions and deletions share a single cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModel {
    /// The cost of aligning two different known bases.
    pub sub: Cost,
    /// The cost of aligning an unknown base of the longer sequence against any base.
    pub sub_unknown: Cost,
    /// The cost of inserting or deleting a base.
    pub ins: Cost,
}

impl Default for CostModel {
    fn default() -> Self {
        Self::unit()
    }
}

impl CostModel {
    pub fn new(sub: Cost, sub_unknown: Cost, ins: Cost) -> Result<Self> {
        let cm = Self {
            sub,
            sub_unknown,
            ins,
        };
        cm.validate()?;
        Ok(cm)
    }

    /// sub = sub_unknown = ins = 1.
    pub fn unit() -> Self {
        Self {
            sub: 1,
            sub_unknown: 1,
            ins: 1,
        }
    }

    /// Same substitution cost for known and unknown bases.
    pub fn linear(sub: Cost, ins: Cost) -> Self {
        Self {
            sub,
            sub_unknown: sub,
            ins,
        }
    }

    /// Costs must be non-negative, so that `-1` never collides with a distance.
    pub fn validate(&self) -> Result<()> {
        for (name, cost) in [
            ("sub", self.sub),
            ("sub_unknown", self.sub_unknown),
            ("ins", self.ins),
        ] {
            if cost < 0 {
                return Err(NwError::InvalidInput(format!(
                    "{name} cost must be non-negative, got {cost}"
                )));
            }
        }
        Ok(())
    }

    /// Cost of consuming `c` against the end of the other sequence.
    /// Non-bases are skipped for free.
    #[inline]
    pub fn indel(&self, c: Symbol) -> Cost {
        if c.is_base() {
            self.ins
        } else {
            0
        }
    }

    /// Substitution cost of `x` (from the longer sequence) against `y`.
    /// Both must be bases.
    #[inline]
    pub fn substitution(&self, x: Symbol, y: Symbol) -> Cost {
        debug_assert!(x.is_base() && y.is_base());
        if x.is_unknown() {
            self.sub_unknown
        } else if x.is_same_base(y) {
            0
        } else {
            self.sub
        }
    }
}
