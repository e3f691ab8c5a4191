use std::collections::HashMap;

use bio_types::genome::Position;
use itertools::Itertools;

use crate::core::dna::AlleleCounts;
use crate::core::io::hts::PileupSource;

// Pileups of the no-template control, prefetched for every candidate position
// before the per-record loop. Absent is an explicit sentinel for runs that
// were sequenced without a negative control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NtcPileups {
    Absent,
    Loaded(HashMap<Position, AlleleCounts>),
}

impl Default for NtcPileups {
    fn default() -> Self {
        NtcPileups::Absent
    }
}

impl NtcPileups {
    pub fn collect(source: &mut impl PileupSource, positions: impl IntoIterator<Item = Position>) -> Self {
        let pileups = positions.into_iter().unique().map(|pos| (pos, source.pileup(pos))).collect();
        NtcPileups::Loaded(pileups)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, NtcPileups::Absent)
    }
}
