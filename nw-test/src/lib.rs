use itertools::Itertools;
use rand::{rngs::StdRng, seq::IteratorRandom, thread_rng, Rng, SeedableRng};

use nw_types::*;
use pa_generate::ErrorModel;

/// Bytes that are sprinkled into sequences by [`with_noise`]:
/// non-bases, unknown bases, and lowercase bases.
pub const NOISE: &[u8] = b"--\n*.NNRYacgt";

fn test_sequences() -> Vec<(Seq<'static>, Seq<'static>)> {
    vec![
        (b"", b""),
        (b"A", b""),
        (b"-", b""),
        (b"ACGT", b"ACG"),
        (b"AAAA", b"TTTT"),
        (b"AC-GT", b"ACGT"),
        (b"NNNN", b"ACGT"),
        (b"ACGT", b"NNNN"),
        (b"GATTACA", b"TACAGAT"),
        (b"CGCGCGCG", b"GCGCGCGC"),
        (b"ACGTACGTACGTACGT", b"TGCATGCATGCA"),
        (b"TTGGGTCAATCAGCCAGTTTTTA", b"TTTGAGTGGGTCATCACCGATTTTAT"),
        (b">seq1\nACGTTGCA\n", b">seq2\nACGTGCA\n"),
        (b"a-c-g-t", b"ACGT"),
        (b"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", b"A"),
    ]
}

const FIXED: bool = false;

/// Lengths that are hard on the evaluators: all tiny lengths, then lengths
/// around the block sides used by the tests (cache sizes of 1, 3 and 4 lines
/// give `K` = 1, 3 and 4) and around the cache-oblivious base side 200 and its double.
fn lengths() -> Vec<usize> {
    let mut ns: Vec<usize> = (0..16).collect();
    for edge in [24, 48, 64, 96, 128, 200, 256, 400] {
        ns.extend([edge - 1, edge, edge + 1]);
    }
    ns.push(450);
    ns
}

pub fn gen_seqs() -> impl Iterator<Item = ((Sequence, Sequence), (usize, f32, ErrorModel, u64))> {
    let rng = &mut thread_rng();
    let mut ns = lengths();
    // High error rates give pairs of very different lengths.
    let mut es = vec![0.0f32, 0.01, 0.05, 0.10, 0.20, 0.50, 0.70, 1.0];

    // A random third of the lengths and half of the error rates on each run.
    if !FIXED {
        let nl = ns.len();
        ns = ns.into_iter().choose_multiple(rng, nl / 3);
        let el = es.len();
        es = es.into_iter().choose_multiple(rng, el / 2);
    }

    let models = [
        ErrorModel::Uniform,
        ErrorModel::NoisyInsert,
        ErrorModel::NoisyDelete,
        ErrorModel::SymmetricRepeat,
    ];
    let seed = if FIXED {
        31415
    } else {
        rng.gen_range(0..u64::MAX)
    };
    ns.into_iter()
        .cartesian_product(es)
        .cartesian_product(models)
        .map(move |((n, e), error_model)| {
            let (a, b) = pa_generate::generate_model(n, e, error_model, seed);
            ((a, b), (n, e, error_model, seed))
        })
}

/// Inserts roughly `rate * |seq|` bytes of [`NOISE`] at random positions.
pub fn with_noise(seq: Seq, rate: f32, rng: &mut impl Rng) -> Sequence {
    let mut out = Vec::with_capacity(seq.len() * 2);
    for &c in seq {
        while rng.gen_bool(rate as f64 / (1. + rate as f64)) {
            out.push(NOISE[rng.gen_range(0..NOISE.len())]);
        }
        out.push(c);
    }
    out
}

pub fn test_aligner_on_input(a: Seq, b: Seq, aligner: &mut impl Aligner, params: &str) {
    // Set to true for local debugging.
    const D: bool = false;

    if D {
        eprintln!("{params}\na {}\nb {}", seq_to_string(a), seq_to_string(b));
    }
    let cost = triple_accel::levenshtein_exp(a, b) as Cost;
    let aligner_cost = aligner.distance(a, b).unwrap();
    assert_eq!(
        cost,
        aligner_cost,
        "\n{params}\nlet a = \"{}\".as_bytes();\nlet b = \"{}\".as_bytes();\nAligner\n{aligner:?}",
        seq_to_string(a),
        seq_to_string(b),
    );
}

/// Compares `aligner` against `reference` on `(a, b)` and on `(b, a)`.
pub fn test_against_on_input(
    a: Seq,
    b: Seq,
    reference: &mut impl Aligner,
    aligner: &mut impl Aligner,
    params: &str,
) {
    let cost = reference.distance(a, b).unwrap();
    let aligner_cost = aligner.distance(a, b).unwrap();
    assert_eq!(
        cost,
        aligner_cost,
        "\n{params}\nlet a = {:?}.as_bytes();\nlet b = {:?}.as_bytes();\nReference\n{reference:?}\nAligner\n{aligner:?}",
        seq_to_string(a),
        seq_to_string(b),
    );
    let swapped_cost = aligner.distance(b, a).unwrap();
    assert_eq!(
        cost,
        swapped_cost,
        "\n{params}\nnot symmetric\nlet a = {:?}.as_bytes();\nlet b = {:?}.as_bytes();\nAligner\n{aligner:?}",
        seq_to_string(a),
        seq_to_string(b),
    );
}

/// Test the given aligner on a large set of random sequences:
/// - lengths 0 to 450, around block edges
/// - error rate 0 to 1.0
/// - error models: uniform, noisy insert, noisy delete, symmetric repeat (using `pa_generate`)
///
/// The aligner must use unit costs: its distance must match `triple_accel::levenshtein_exp`.
pub fn test_aligner(aligner: impl Aligner) {
    test_aligner_up_to(aligner, usize::MAX);
}

/// As test_aligner, but only test sequences with n <= max_n.
pub fn test_aligner_up_to(mut aligner: impl Aligner, max_n: usize) {
    for ((a, b), (n, e, error_model, seed)) in gen_seqs() {
        if n > max_n {
            continue;
        }
        test_aligner_on_input(
            &a,
            &b,
            &mut aligner,
            &format!("seed {seed:>10} n {n:>5} e {e:>.2} error_model {error_model:?}"),
        );
    }
}

/// Test `aligner` against `reference` on the hardcoded sequences, and on
/// random sequences with and without [`NOISE`].
///
/// Both must return the same distance, and `aligner` must be symmetric.
pub fn test_against(mut reference: impl Aligner, mut aligner: impl Aligner) {
    for (a, b) in test_sequences() {
        test_against_on_input(
            a,
            b,
            &mut reference,
            &mut aligner,
            "hardcoded test_sequences",
        );
    }
    for ((a, b), (n, e, error_model, seed)) in gen_seqs() {
        let params = format!("seed {seed:>10} n {n:>5} e {e:>.2} error_model {error_model:?}");
        test_against_on_input(&a, &b, &mut reference, &mut aligner, &params);

        let rng = &mut StdRng::seed_from_u64(seed);
        let a = with_noise(&a, 0.1, rng);
        let b = with_noise(&b, 0.1, rng);
        test_against_on_input(
            &a,
            &b,
            &mut reference,
            &mut aligner,
            &format!("{params} with noise"),
        );
    }
}
