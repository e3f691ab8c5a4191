use std::fmt::{Display, Formatter};

use derive_getters::Getters;
use derive_more::Constructor;

use crate::core::dna::Allele;
use crate::core::variant::StrandCounts;

use super::{Flag, StrandSide};

// Alternate support per strand, always reported alongside the verdict
#[derive(Constructor, Getters, Debug, PartialEq, Eq, Copy, Clone)]
pub struct StrandSummary {
    fwd_alt: u32,
    fwd_total: u32,
    rev_alt: u32,
    rev_total: u32,
}

impl Display for StrandSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "FWD:{}/{},REV:{}/{}", self.fwd_alt, self.fwd_total, self.rev_alt, self.rev_total)
    }
}

// A variant called unequally on the two strands is a likely artifact. A
// strand with zero reads has its alternate fraction defined as 0.0. When both
// fractions sit below the threshold the position is treated as unbiased: the
// strands are equally weak, not asymmetric.
#[derive(Constructor, Getters, Debug, PartialEq, Copy, Clone)]
pub struct StrandBias {
    threshold_pct: f32,
}

impl StrandBias {
    pub fn flag(&self, strands: &StrandCounts, alt: Allele) -> (StrandSummary, Option<Flag>) {
        let summary = StrandSummary::new(
            strands.forward[alt],
            strands.forward.total(),
            strands.reverse[alt],
            strands.reverse.total(),
        );

        let fraction = |alt: u32, total: u32| if total > 0 { alt as f32 / total as f32 } else { 0.0 };
        let fwd = fraction(summary.fwd_alt, summary.fwd_total);
        let rev = fraction(summary.rev_alt, summary.rev_total);

        let threshold = self.threshold_pct / 100.0;
        let flag = match (fwd < threshold, rev < threshold) {
            (true, true) | (false, false) => None,
            (true, false) => Some(Flag::StrandBias(StrandSide::Forward)),
            (false, true) => Some(Flag::StrandBias(StrandSide::Reverse)),
        };
        (summary, flag)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::dna::AlleleCounts;

    use super::*;

    fn strands(forward: [u32; 6], reverse: [u32; 6]) -> StrandCounts {
        StrandCounts { forward: forward.into(), reverse: reverse.into() }
    }

    #[test]
    fn summary_rendering() {
        assert_eq!(StrandSummary::new(10, 12, 0, 7).to_string(), "FWD:10/12,REV:0/7");
    }

    #[test]
    fn empty_strand_is_defined() {
        let rule = StrandBias::new(5.0);
        // Reverse strand has zero reads, its fraction is 0.0, not an error
        let counts = strands([10, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0, 0]);
        let (summary, flag) = rule.flag(&counts, Allele::A);

        assert_eq!(summary.to_string(), "FWD:10/10,REV:0/0");
        assert_eq!(flag, Some(Flag::StrandBias(StrandSide::Reverse)));
    }

    #[test]
    fn outcomes() {
        let rule = StrandBias::new(5.0);
        for (forward, reverse, expected) in [
            // Well-supported on both strands
            ([50u32, 0, 0, 50, 0, 0], [30u32, 0, 0, 30, 0, 0], None),
            // Sparse on both strands equally
            ([1, 0, 0, 99, 0, 0], [0, 0, 0, 50, 0, 0], None),
            // Forward support only marginal
            ([1, 0, 0, 99, 0, 0], [20, 0, 0, 20, 0, 0], Some(Flag::StrandBias(StrandSide::Forward))),
            // Reverse support only marginal
            ([20, 0, 0, 20, 0, 0], [1, 0, 0, 99, 0, 0], Some(Flag::StrandBias(StrandSide::Reverse))),
        ] {
            let (_, flag) = rule.flag(&strands(forward, reverse), Allele::A);
            assert_eq!(flag, expected, "{:?} {:?}", forward, reverse);
        }
    }

    #[test]
    fn allele_indexing() {
        let rule = StrandBias::new(10.0);
        let counts = strands([5, 10, 15, 20, 0, 1], [2, 4, 6, 8, 1, 0]);

        let (summary, _) = rule.flag(&counts, Allele::G);
        assert_eq!(summary.to_string(), "FWD:15/51,REV:6/21");

        let (summary, _) = rule.flag(&counts, Allele::O);
        assert_eq!(summary.to_string(), "FWD:1/51,REV:0/21");
    }
}
