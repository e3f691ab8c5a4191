pub use engine::{FlagEngine, References, Thresholds};
pub use record::FlagRecord;
pub use verdict::{Flag, StrandSide, Verdict};

pub mod callers;
pub mod depth;
pub mod homopolymer;
pub mod keypos;
pub mod maf;
pub mod novelty;
pub mod ntc;
pub mod strand;

mod engine;
mod record;
mod verdict;
