//! Needleman-Wunsch distance, evaluated four ways.
//!
//! All evaluators compute the same recurrence (see [`recurrence`]) on the same
//! canonical [`pair::Pair`], and only differ in the order in which states are
//! visited and in the memory they keep:
//!
//! | evaluator           | extra space  | order |
//! |---------------------|--------------|-------|
//! | [`topdown`]         | `(M+1)(N+1)` | memoized descent from `(0, 0)` |
//! | [`rolling`]         | `N+1`        | one row, bottom-up |
//! | [`cache_aware`]     | `N+1 + K`    | `K x K` blocks, `K = Z / LINE_SIZE` |
//! | [`cache_oblivious`] | `N+1 + M`    | recursive halving |
use log::debug;
use nw_types::*;
use serde::{Deserialize, Serialize};

mod blocked;
mod buffer;

pub mod cache_aware;
pub mod cache_oblivious;
pub mod cli;
pub mod pair;
pub mod recurrence;
pub mod rolling;
pub mod topdown;


pub use cache_aware::LINE_SIZE;

/// The evaluation strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Algorithm {
    TopDown,
    #[default]
    Rolling,
    /// Blocks sized for a cache of `z` bytes.
    CacheAware {
        z: usize,
    },
    CacheOblivious,
}

impl Algorithm {
    /// All four evaluators, the cache-aware one assuming a cache of `z` bytes.
    pub fn all(z: usize) -> [Algorithm; 4] {
        [
            Algorithm::TopDown,
            Algorithm::Rolling,
            Algorithm::CacheAware { z },
            Algorithm::CacheOblivious,
        ]
    }
}

/// Needleman-Wunsch aligner.
///
/// Every call classifies both sequences with `table` and reports each non-base
/// byte to `reporter` once.
#[derive(Debug)]
pub struct NW<'t, R: BaseReporter = LogReporter> {
    /// The cost model to use.
    pub cm: CostModel,

    /// Which bytes are (unknown) bases.
    pub table: &'t BaseTable,

    /// The evaluator used by [`Aligner::distance`].
    pub algorithm: Algorithm,

    /// Receives skipped non-base bytes.
    pub reporter: R,
}

impl<'t> NW<'t> {
    pub fn new(cm: CostModel, table: &'t BaseTable, algorithm: Algorithm) -> Self {
        NW {
            cm,
            table,
            algorithm,
            reporter: LogReporter,
        }
    }
}

impl<'t, R: BaseReporter> NW<'t, R> {
    pub fn with_reporter<R2: BaseReporter>(self, reporter: R2) -> NW<'t, R2> {
        NW {
            cm: self.cm,
            table: self.table,
            algorithm: self.algorithm,
            reporter,
        }
    }

    fn pair(&mut self, a: Seq, b: Seq) -> Result<pair::Pair> {
        self.cm.validate()?;
        pair::Pair::new(a, b, self.table, &mut self.reporter)
    }

    pub fn distance_topdown(&mut self, a: Seq, len_a: usize, b: Seq, len_b: usize) -> Result<Cost> {
        self.distance_with(Algorithm::TopDown, prefix(a, len_a)?, prefix(b, len_b)?)
    }

    pub fn distance_rolling(&mut self, a: Seq, len_a: usize, b: Seq, len_b: usize) -> Result<Cost> {
        self.distance_with(Algorithm::Rolling, prefix(a, len_a)?, prefix(b, len_b)?)
    }

    /// `z` is the assumed cache size, at least [`LINE_SIZE`].
    pub fn distance_cacheaware(
        &mut self,
        a: Seq,
        len_a: usize,
        b: Seq,
        len_b: usize,
        z: usize,
    ) -> Result<Cost> {
        self.distance_with(
            Algorithm::CacheAware { z },
            prefix(a, len_a)?,
            prefix(b, len_b)?,
        )
    }

    pub fn distance_cacheoblivious(
        &mut self,
        a: Seq,
        len_a: usize,
        b: Seq,
        len_b: usize,
    ) -> Result<Cost> {
        self.distance_with(Algorithm::CacheOblivious, prefix(a, len_a)?, prefix(b, len_b)?)
    }

    /// The distance between `a` and `b` using the given evaluator.
    pub fn distance_with(&mut self, algorithm: Algorithm, a: Seq, b: Seq) -> Result<Cost> {
        // Reject a bad cache size before reporting anything.
        if let Algorithm::CacheAware { z } = algorithm {
            cache_aware::block_side(z)?;
        }
        let pair = self.pair(a, b)?;
        let cost = match algorithm {
            Algorithm::TopDown => topdown::distance(&self.cm, &pair),
            Algorithm::Rolling => rolling::distance(&self.cm, &pair),
            Algorithm::CacheAware { z } => cache_aware::distance(&self.cm, &pair, z),
            Algorithm::CacheOblivious => cache_oblivious::distance(&self.cm, &pair),
        }?;
        debug!("{algorithm:?}: distance {cost}");
        Ok(cost)
    }
}

impl<R: BaseReporter + std::fmt::Debug> Aligner for NW<'_, R> {
    fn distance(&mut self, a: Seq, b: Seq) -> Result<Cost> {
        self.distance_with(self.algorithm, a, b)
    }
}
