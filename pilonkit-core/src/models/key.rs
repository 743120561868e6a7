use std::fmt::{self, Display};

///
/// A (sequence, position) pair used to join records across tables.
///
/// The coordinate convention is that of the table the key was built from;
/// callers convert before looking a key up in a table with another convention.
/// Ordering is by sequence name, then position.
///
#[derive(Eq, PartialEq, Hash, Ord, PartialOrd, Debug, Clone)]
pub struct GenomicKey {
    pub seq: String,
    pub pos: u64,
}

impl GenomicKey {
    pub fn new(seq: impl Into<String>, pos: u64) -> Self {
        GenomicKey {
            seq: seq.into(),
            pos,
        }
    }

    /// The key one base downstream on the same sequence.
    pub fn next(&self) -> Self {
        GenomicKey {
            seq: self.seq.clone(),
            pos: self.pos + 1,
        }
    }
}

impl Display for GenomicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.seq, self.pos)
    }
}
