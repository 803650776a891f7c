use crate::Algorithm;
use clap::Parser;
use nw_types::{Cost, CostModel, Result};
use serde::{Deserialize, Serialize};

#[derive(clap::ValueEnum, Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlgorithmType {
    /// Memoized recursion over the full table.
    TopDown,
    /// One row, bottom-up.
    #[default]
    Rolling,
    /// Blocks sized by --cache-size.
    CacheAware,
    /// Recursive halving.
    CacheOblivious,
}

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(next_help_heading = "Algorithm")]
pub struct AlgorithmArgs {
    /// The evaluator to use.
    #[clap(long, value_enum, default_value_t, display_order = 10)]
    pub algorithm: AlgorithmType,

    /// Assumed cache size in bytes for the cache-aware evaluator.
    ///
    /// Blocks have side cache-size / 64.
    #[clap(long, default_value_t = 32 * 1024, hide_short_help = true)]
    pub cache_size: usize,
}

impl AlgorithmArgs {
    pub fn algorithm(&self) -> Algorithm {
        match self.algorithm {
            AlgorithmType::TopDown => Algorithm::TopDown,
            AlgorithmType::Rolling => Algorithm::Rolling,
            AlgorithmType::CacheAware => Algorithm::CacheAware { z: self.cache_size },
            AlgorithmType::CacheOblivious => Algorithm::CacheOblivious,
        }
    }
}

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(next_help_heading = "Costs")]
pub struct CostArgs {
    /// Cost of aligning two different bases.
    #[clap(long, default_value_t = 1)]
    pub sub: Cost,

    /// Cost of aligning an unknown base (N, R, Y, ...) of the longer sequence.
    #[clap(long, default_value_t = 1)]
    pub sub_unknown: Cost,

    /// Cost of an insertion or deletion.
    #[clap(long, default_value_t = 1)]
    pub ins: Cost,
}

impl CostArgs {
    pub fn cost_model(&self) -> Result<CostModel> {
        CostModel::new(self.sub, self.sub_unknown, self.ins)
    }
}
