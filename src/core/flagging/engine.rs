use derive_getters::Getters;
use derive_more::Constructor;

use crate::core::error::EvalError;
use crate::core::refdata::{GlobalVariants, MaskedAlignment, NtcPileups, PositionSet};
use crate::core::variant::VariantCall;

use super::callers::agreement;
use super::depth::DepthProximity;
use super::homopolymer::context;
use super::keypos::ambiguous;
use super::maf::MinorAlleleFreq;
use super::novelty::GlobalNovelty;
use super::ntc::NtcContamination;
use super::strand::StrandBias;
use super::{FlagRecord, Verdict};

#[derive(Constructor, Getters, Debug, PartialEq, Copy, Clone)]
pub struct Thresholds {
    min_depth: u32,
    coverage_flag_pct: f32,
    maf_flag_pct: f32,
    snp_depth_factor: u32,
    min_global_events: u32,
    strand_threshold_pct: f32,
}

// Reference datasets for one run. Each is independently optional; a rule
// whose dataset is missing is skipped, not failed. The negative control is
// the exception: its absence is an explicit sentinel the rule reports on.
#[derive(Clone, Debug, Default)]
pub struct References {
    pub global: Option<GlobalVariants>,
    pub keysites: Option<PositionSet>,
    pub homopolymers: Option<PositionSet>,
    pub alignment: Option<MaskedAlignment>,
    pub ntc: NtcPileups,
}

// Stateless per-record reduction over the full rule set. Rules are
// independent axes of evidence: no rule reads another rule's result, and the
// engine never mutates after construction, so records can be evaluated in
// parallel.
pub struct FlagEngine {
    depth: DepthProximity,
    maf: MinorAlleleFreq,
    ntc: NtcContamination,
    novelty: GlobalNovelty,
    strand: StrandBias,
    refs: References,
}

impl FlagEngine {
    pub fn new(thresholds: Thresholds, refs: References) -> Self {
        Self {
            depth: DepthProximity::new(*thresholds.min_depth(), *thresholds.coverage_flag_pct()),
            maf: MinorAlleleFreq::new(*thresholds.maf_flag_pct()),
            ntc: NtcContamination::new(*thresholds.snp_depth_factor()),
            novelty: GlobalNovelty::new(*thresholds.min_global_events()),
            strand: StrandBias::new(*thresholds.strand_threshold_pct()),
            refs,
        }
    }

    pub fn evaluate(&self, call: &VariantCall) -> Result<FlagRecord, EvalError> {
        let depth_flag = self.depth.flag(call.depth).into();

        // The alternate frequency is undefined without coverage
        let (isnv_flag, mixed_flag) = if call.depth == 0 {
            (Verdict::Skipped, Verdict::Skipped)
        } else {
            let (isnv, mixed) = self.maf.flag(call.pos, call.alt_freq)?;
            (isnv.into(), mixed.into())
        };

        let ntc_flag = self.ntc.flag(call.pos, call.alta, call.depth, &self.refs.ntc).into();

        let new_flag = match &self.refs.global {
            Some(corpus) => self.novelty.flag(call.pos, corpus).into(),
            None => Verdict::Skipped,
        };

        let caller_flag = agreement(&call.support).into();

        let (strand_counts, strand_flag) = self.strand.flag(&call.strands, call.alta);

        let key_flag = match (&self.refs.keysites, &self.refs.alignment) {
            (Some(keysites), Some(alignment)) => ambiguous(call.pos, keysites, alignment)?.into(),
            _ => Verdict::Skipped,
        };

        let homopolymer = self.refs.homopolymers.as_ref().map(|x| context(call.pos, x));

        Ok(FlagRecord {
            pos: call.pos,
            refa: call.refa,
            alta: call.alta,
            depth: call.depth,
            alt_freq: call.alt_freq,
            depth_flag,
            isnv_flag,
            mixed_flag,
            ntc_flag,
            new_flag,
            caller_flag,
            strand_counts,
            strand_flag: strand_flag.into(),
            key_flag,
            homopolymer,
        })
    }
}
