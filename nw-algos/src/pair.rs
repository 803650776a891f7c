use crate::buffer::try_with_capacity;
use nw_types::*;

/// Two classified sequences, ordered so that `x` is at least as long as `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub x: Vec<Symbol>,
    pub y: Vec<Symbol>,
}

impl Pair {
    /// Classifies `a` and `b`, reporting every non-base byte once, and orders them.
    ///
    /// Sequences of equal length are ordered bytewise, so that the pair does not
    /// depend on the argument order.
    pub fn new(
        a: Seq,
        b: Seq,
        table: &BaseTable,
        reporter: &mut impl BaseReporter,
    ) -> Result<Self> {
        let sa = classify(a, table, reporter)?;
        let sb = classify(b, table, reporter)?;
        Ok(if (a.len(), a) >= (b.len(), b) {
            Pair { x: sa, y: sb }
        } else {
            Pair { x: sb, y: sa }
        })
    }

    pub fn m(&self) -> usize {
        self.x.len()
    }

    pub fn n(&self) -> usize {
        self.y.len()
    }
}

fn classify(seq: Seq, table: &BaseTable, reporter: &mut impl BaseReporter) -> Result<Vec<Symbol>> {
    let mut symbols = try_with_capacity(seq.len())?;
    symbols.extend(seq.iter().map(|&c| {
        let s = table.classify(c);
        if !s.is_base() {
            reporter.report_invalid_base(c);
        }
        s
    }));
    Ok(symbols)
}
