use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::core::variant::SupportVector;

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum StrandSide {
    Forward,
    Reverse,
}

impl StrandSide {
    pub fn af_symbol(&self) -> char {
        match self {
            StrandSide::Forward => '+',
            StrandSide::Reverse => '-',
        }
    }
}

// Every flag a rule can attach to a variant call. Display renders the exact
// report vocabulary the downstream review tooling keys on.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Flag {
    DepthNearThreshold,
    WithinHostVariant { maf: f32 },
    MixedPosition,
    NtcMissing,
    AlleleInNtc,
    NotInGlobalCorpus,
    CallerMismatch(SupportVector),
    StrandBias(StrandSide),
    AmbigAtKeySite,
}

impl Display for Flag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Flag::DepthNearThreshold => write!(f, "depth near threshold"),
            Flag::WithinHostVariant { maf } => write!(f, "0.15<maf<{:.2}", maf),
            Flag::MixedPosition => write!(f, "mixed position"),
            Flag::NtcMissing => write!(f, "NTC=None"),
            Flag::AlleleInNtc => write!(f, "allele in NTC"),
            Flag::NotInGlobalCorpus => write!(f, "not in nextstrain"),
            Flag::CallerMismatch(support) => {
                write!(f, "mismatch({})", support.detected().map(|x| x.code()).join("+"))
            }
            Flag::StrandBias(side) => write!(f, "strand bias: low {}AF", side.af_symbol()),
            Flag::AmbigAtKeySite => write!(f, "ambig in key position"),
        }
    }
}

// Three-valued outcome per flag category, so the report distinguishes "rule
// ran and found nothing" (Clear) from "rule did not run" (Skipped).
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Verdict {
    Skipped,
    Clear,
    Flagged(Flag),
}

impl Verdict {
    pub fn is_flagged(&self) -> bool {
        matches!(self, Verdict::Flagged(_))
    }

    pub fn flag(&self) -> Option<&Flag> {
        match self {
            Verdict::Flagged(flag) => Some(flag),
            _ => None,
        }
    }
}

impl From<Option<Flag>> for Verdict {
    fn from(flag: Option<Flag>) -> Self {
        match flag {
            Some(flag) => Verdict::Flagged(flag),
            None => Verdict::Clear,
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Skipped => write!(f, "NA"),
            Verdict::Clear => write!(f, "."),
            Verdict::Flagged(flag) => write!(f, "{}", flag),
        }
    }
}
