//! Classification of sequence bytes into bases, unknown bases and other symbols.

use log::warn;

/// The class of a single sequence byte.
///
/// Bases carry a canonical (uppercase) code so that `a` and `A` compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// One of the canonical nucleotides.
    Base(u8),
    /// An ambiguity code standing for several possible bases.
    Unknown(u8),
    /// Anything else: gaps, line terminators, ... Skipped at no cost.
    NonBase(u8),
}

impl Symbol {
    /// Unknown bases are bases too.
    #[inline]
    pub fn is_base(self) -> bool {
        !matches!(self, Symbol::NonBase(_))
    }

    #[inline]
    pub fn is_unknown(self) -> bool {
        matches!(self, Symbol::Unknown(_))
    }

    /// Only meaningful when both symbols are bases.
    #[inline]
    pub fn is_same_base(self, other: Symbol) -> bool {
        match (self, other) {
            (Symbol::Base(a), Symbol::Base(b)) => a == b,
            (Symbol::Unknown(a), Symbol::Unknown(b)) => a == b,
            _ => false,
        }
    }
}

/// Lookup table from bytes to their `Symbol`.
///
/// Build it once and pass it by reference to every evaluator call.
#[derive(Clone)]
pub struct BaseTable {
    symbols: [Symbol; 256],
}

impl std::fmt::Debug for BaseTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bases: String = (0..=255u8)
            .filter(|&c| matches!(self.symbols[c as usize], Symbol::Base(b) if b == c))
            .map(char::from)
            .collect();
        let unknown: String = (0..=255u8)
            .filter(|&c| matches!(self.symbols[c as usize], Symbol::Unknown(b) if b == c))
            .map(char::from)
            .collect();
        f.debug_struct("BaseTable")
            .field("bases", &bases)
            .field("unknown", &unknown)
            .finish()
    }
}

impl Default for BaseTable {
    fn default() -> Self {
        Self::dna()
    }
}

impl BaseTable {
    pub const DNA_BASES: &'static [u8] = b"ACGT";
    /// IUPAC ambiguity codes.
    pub const IUPAC_UNKNOWN: &'static [u8] = b"NRYSWKMBDHV";

    /// A, C, G, T and the IUPAC ambiguity codes, in either case.
    pub fn dna() -> Self {
        Self::new(Self::DNA_BASES, Self::IUPAC_UNKNOWN)
    }

    /// Builds a case-insensitive table. A byte listed in both `bases` and
    /// `unknown` is unknown.
    pub fn new(bases: &[u8], unknown: &[u8]) -> Self {
        let mut symbols = [Symbol::NonBase(0); 256];
        for (c, s) in symbols.iter_mut().enumerate() {
            *s = Symbol::NonBase(c as u8);
        }
        for &c in bases {
            let code = c.to_ascii_uppercase();
            symbols[code as usize] = Symbol::Base(code);
            symbols[code.to_ascii_lowercase() as usize] = Symbol::Base(code);
        }
        for &c in unknown {
            let code = c.to_ascii_uppercase();
            symbols[code as usize] = Symbol::Unknown(code);
            symbols[code.to_ascii_lowercase() as usize] = Symbol::Unknown(code);
        }
        Self { symbols }
    }

    #[inline]
    pub fn classify(&self, c: u8) -> Symbol {
        self.symbols[c as usize]
    }

    #[inline]
    pub fn is_base(&self, c: u8) -> bool {
        self.classify(c).is_base()
    }

    #[inline]
    pub fn is_unknown_base(&self, c: u8) -> bool {
        self.classify(c).is_unknown()
    }

    #[inline]
    pub fn is_same_base(&self, a: u8, b: u8) -> bool {
        self.classify(a).is_same_base(self.classify(b))
    }
}

/// Receives every byte that is skipped because it is not a base.
pub trait BaseReporter {
    fn report_invalid_base(&mut self, c: u8);
}

/// Emits a warning per invalid base.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl BaseReporter for LogReporter {
    fn report_invalid_base(&mut self, c: u8) {
        warn!("Skipping non-base character {:?}", char::from(c));
    }
}

/// Collects the reported bytes.
impl BaseReporter for Vec<u8> {
    fn report_invalid_base(&mut self, c: u8) {
        self.push(c);
    }
}

impl<R: BaseReporter + ?Sized> BaseReporter for &mut R {
    fn report_invalid_base(&mut self, c: u8) {
        (**self).report_invalid_base(c);
    }
}
