pub mod candidate;
pub mod change;
pub mod coverage;
pub mod homopolymer;
pub mod key;

// re-export for cleaner imports
pub use self::candidate::CandidateRecord;
pub use self::change::{ChangeRecord, IndelChange, IndelKind};
pub use self::coverage::{CoverageRecord, Platform};
pub use self::homopolymer::{Base, HomopolymerRecord};
pub use self::key::GenomicKey;
