use bio_types::genome::Position;
use derive_getters::Getters;
use derive_more::Constructor;

use crate::core::error::EvalError;

use super::Flag;

// Cumulative minor-allele-frequency bands inside [0.15, 0.85]: frequencies in
// [0.15, maf) or (1-maf, 0.85] look like within-host variation, frequencies in
// [maf, 1-maf] look like a worrisome mixed position. The three bands partition
// [0.15, 0.85] exactly; everything outside is a confident homozygous call.
#[derive(Constructor, Getters, Debug, PartialEq, Copy, Clone)]
pub struct MinorAlleleFreq {
    flag_pct: f32,
}

impl MinorAlleleFreq {
    pub fn flag(&self, pos: Position, freq: f32) -> Result<(Option<Flag>, Option<Flag>), EvalError> {
        if !(0.0..=1.0).contains(&freq) {
            return Err(EvalError::FrequencyOutOfRange { pos, freq });
        }
        if !(0.15..=0.85).contains(&freq) {
            return Ok((None, None));
        }

        let maf = self.flag_pct / 100.0;
        if (0.15 <= freq && freq < maf) || ((1.0 - maf) < freq && freq <= 0.85) {
            Ok((Some(Flag::WithinHostVariant { maf }), None))
        } else {
            Ok((None, Some(Flag::MixedPosition)))
        }
    }
}
