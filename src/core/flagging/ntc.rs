use bio_types::genome::Position;
use derive_getters::Getters;
use derive_more::Constructor;

use crate::core::dna::Allele;
use crate::core::refdata::NtcPileups;

use super::Flag;

// Contamination check against the no-template control. The sample must
// out-cover the control by depth_factor before its signal is trusted. The
// comparison denominator is the control count of the matched alternate allele
// itself, not an arbitrary entry of the pileup.
#[derive(Constructor, Getters, Debug, PartialEq, Copy, Clone)]
pub struct NtcContamination {
    depth_factor: u32,
}

impl NtcContamination {
    pub fn flag(&self, pos: Position, alt: Allele, depth: u32, ntc: &NtcPileups) -> Option<Flag> {
        let pileups = match ntc {
            // A data-quality caveat, not a contamination finding
            NtcPileups::Absent => return Some(Flag::NtcMissing),
            NtcPileups::Loaded(pileups) => pileups,
        };

        let control = pileups.get(&pos).map_or(0, |counts| counts[alt]);
        if control > 0 && depth <= self.depth_factor * control {
            Some(Flag::AlleleInNtc)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::core::dna::AlleleCounts;

    use super::*;

    fn loaded(pos: Position, counts: AlleleCounts) -> NtcPileups {
        NtcPileups::Loaded(HashMap::from([(pos, counts)]))
    }

    #[test]
    fn no_control_sequenced() {
        let rule = NtcContamination::new(5);
        assert_eq!(rule.flag(100, Allele::A, 10_000, &NtcPileups::Absent), Some(Flag::NtcMissing));
        assert_eq!(rule.flag(1, Allele::O, 0, &NtcPileups::Absent), Some(Flag::NtcMissing));
    }

    #[test]
    fn allele_in_control() {
        let rule = NtcContamination::new(5);
        let ntc = loaded(100, AlleleCounts::new(0, 0, 4, 0, 0, 0));

        for (depth, expected) in [
            (0, Some(Flag::AlleleInNtc)),
            (19, Some(Flag::AlleleInNtc)),
            (20, Some(Flag::AlleleInNtc)),
            (21, None),
            (500, None),
        ] {
            assert_eq!(rule.flag(100, Allele::G, depth, &ntc), expected, "depth {}", depth);
        }
    }

    #[test]
    fn allele_not_in_control() {
        let rule = NtcContamination::new(5);
        let ntc = loaded(100, AlleleCounts::new(12, 0, 0, 0, 0, 0));

        // Control covers the position but never saw this alternate
        assert_eq!(rule.flag(100, Allele::T, 1, &ntc), None);
        // Control has no reads at this position at all
        assert_eq!(rule.flag(200, Allele::A, 1, &ntc), None);
    }
}
