//! Types shared by the Needleman-Wunsch evaluators, the test harness and the binary.

pub mod bases;
pub mod cost_model;
pub mod error;

// Re-export types for convenience of `use nw_types::*;`.
pub use bases::*;
pub use cost_model::*;
pub use error::*;

/// The cost of a (partial) alignment.
///
/// Signed so that `-1` can mark memo cells that are not computed yet.
pub type Cost = i64;

/// An owned sequence.
pub type Sequence = Vec<u8>;
/// A sequence slice.
pub type Seq<'a> = &'a [u8];

pub fn seq_to_string(seq: Seq) -> String {
    String::from_utf8_lossy(seq).into_owned()
}

/// Returns the first `len` bytes of `seq`.
///
/// Fails when the declared length does not fit in the storage.
pub fn prefix(seq: Seq, len: usize) -> Result<Seq> {
    seq.get(..len).ok_or_else(|| {
        NwError::InvalidInput(format!(
            "declared length {len} exceeds sequence storage of {} bytes",
            seq.len()
        ))
    })
}

/// An aligner is a type that computes the global alignment distance between two sequences.
///
/// Only the distance is computed; no alignment path is returned.
pub trait Aligner: std::fmt::Debug {
    fn distance(&mut self, a: Seq, b: Seq) -> Result<Cost>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_within_storage() {
        assert_eq!(prefix(b"ACGT", 2).unwrap(), b"AC");
        assert_eq!(prefix(b"ACGT", 4).unwrap(), b"ACGT");
        assert_eq!(prefix(b"", 0).unwrap(), b"");
    }

    #[test]
    fn prefix_past_storage() {
        assert!(matches!(prefix(b"ACGT", 5), Err(NwError::InvalidInput(_))));
    }
}
