use std::ops::{Index, IndexMut};
use std::str::FromStr;

use derive_more::{Add, AddAssign};

use crate::core::dna::Allele;
use crate::core::error::EvalError;

// Per-allele read counts at a single position, in the A, C, G, T, N, O order.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Add, AddAssign, Default)]
#[allow(non_snake_case)]
pub struct AlleleCounts {
    pub A: u32,
    pub C: u32,
    pub G: u32,
    pub T: u32,
    pub N: u32,
    pub O: u32,
}

impl AlleleCounts {
    #[allow(non_snake_case)]
    pub fn new(A: u32, C: u32, G: u32, T: u32, N: u32, O: u32) -> Self {
        Self { A, C, G, T, N, O }
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::default()
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.A + self.C + self.G + self.T + self.N + self.O
    }
}

impl Index<Allele> for AlleleCounts {
    type Output = u32;

    fn index(&self, index: Allele) -> &Self::Output {
        match index {
            Allele::A => &self.A,
            Allele::C => &self.C,
            Allele::G => &self.G,
            Allele::T => &self.T,
            Allele::N => &self.N,
            Allele::O => &self.O,
        }
    }
}

impl IndexMut<Allele> for AlleleCounts {
    fn index_mut(&mut self, index: Allele) -> &mut Self::Output {
        match index {
            Allele::A => &mut self.A,
            Allele::C => &mut self.C,
            Allele::G => &mut self.G,
            Allele::T => &mut self.T,
            Allele::N => &mut self.N,
            Allele::O => &mut self.O,
        }
    }
}

impl From<[u32; 6]> for AlleleCounts {
    fn from(counts: [u32; 6]) -> Self {
        Self { A: counts[0], C: counts[1], G: counts[2], T: counts[3], N: counts[4], O: counts[5] }
    }
}

// Upstream encodes strand counts as a comma-joined vector, e.g. "10,0,3,0,0,1"
impl FromStr for AlleleCounts {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || EvalError::MalformedStrandCounts(s.to_owned());

        let mut counts = [0u32; 6];
        let mut fields = s.split(',');
        for slot in counts.iter_mut() {
            *slot = fields.next().ok_or_else(malformed)?.trim().parse().map_err(|_| malformed())?;
        }
        if fields.next().is_some() {
            return Err(malformed());
        }
        Ok(counts.into())
    }
}
