use std::fmt::{Display, Formatter};
use std::str::FromStr;

use bio_types::genome::Position;

use crate::core::dna::{Allele, AlleleCounts};
use crate::core::error::EvalError;

// The bit order of every support vector is fixed by the upstream caller merge:
// ivar first, freebayes second, samtools third.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Caller {
    Ivar,
    Freebayes,
    Samtools,
}

impl Caller {
    pub const ORDER: [Caller; 3] = [Caller::Ivar, Caller::Freebayes, Caller::Samtools];

    pub fn code(&self) -> char {
        match self {
            Caller::Ivar => 'i',
            Caller::Freebayes => 'f',
            Caller::Samtools => 's',
        }
    }
}

// Which callers detected the variant. Parsing rejects vectors where no caller
// fired ("000") and anything that is not exactly three '0'/'1' symbols.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct SupportVector {
    detected: [bool; 3],
}

impl SupportVector {
    pub fn detected(&self) -> impl Iterator<Item = Caller> + '_ {
        Caller::ORDER.into_iter().zip(self.detected).filter_map(|(caller, hit)| hit.then(|| caller))
    }

    pub fn is_unanimous(&self) -> bool {
        self.detected.iter().all(|x| *x)
    }
}

impl FromStr for SupportVector {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EvalError::InvalidSupportVector(s.to_owned());

        let mut detected = [false; 3];
        let mut symbols = s.chars();
        for slot in detected.iter_mut() {
            *slot = match symbols.next() {
                Some('1') => true,
                Some('0') => false,
                _ => return Err(invalid()),
            };
        }
        if symbols.next().is_some() || detected == [false; 3] {
            return Err(invalid());
        }
        Ok(Self { detected })
    }
}

impl Display for SupportVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for hit in self.detected {
            write!(f, "{}", hit as u8)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StrandCounts {
    pub forward: AlleleCounts,
    pub reverse: AlleleCounts,
}

// One candidate variant at one genomic position in one sample. Positions are
// 1-based genome coordinates.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct VariantCall {
    pub pos: Position,
    pub refa: Allele,
    pub alta: Allele,
    pub depth: u32,
    pub alt_freq: f32,
    pub support: SupportVector,
    pub strands: StrandCounts,
}
