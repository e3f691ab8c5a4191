use bio_types::genome::Position;

use crate::core::dna::Allele;
use crate::core::io::table::Table;

use super::strand::StrandSummary;
use super::Verdict;

// One annotation row per variant call. Flag categories are independent axes
// of evidence; a single variant may accumulate several of them.
#[derive(Clone, Debug, PartialEq)]
pub struct FlagRecord {
    pub pos: Position,
    pub refa: Allele,
    pub alta: Allele,
    pub depth: u32,
    pub alt_freq: f32,
    pub depth_flag: Verdict,
    pub isnv_flag: Verdict,
    pub mixed_flag: Verdict,
    pub ntc_flag: Verdict,
    pub new_flag: Verdict,
    pub caller_flag: Verdict,
    pub strand_counts: StrandSummary,
    pub strand_flag: Verdict,
    pub key_flag: Verdict,
    pub homopolymer: Option<bool>,
}

impl Table for FlagRecord {
    const LENGTH: usize = 15;

    fn row(&self) -> Vec<String> {
        vec![
            self.pos.to_string(),
            self.refa.to_string(),
            self.alta.to_string(),
            self.depth.to_string(),
            format!("{:.4}", self.alt_freq),
            self.depth_flag.to_string(),
            self.isnv_flag.to_string(),
            self.mixed_flag.to_string(),
            self.ntc_flag.to_string(),
            self.new_flag.to_string(),
            self.caller_flag.to_string(),
            self.strand_counts.to_string(),
            self.strand_flag.to_string(),
            self.key_flag.to_string(),
            self.homopolymer.map_or("NA".to_string(), |x| x.to_string()),
        ]
    }

    fn header() -> Vec<String> {
        [
            "position",
            "ref",
            "alt",
            "depth",
            "alt_freq",
            "depth_flag",
            "isnv_flag",
            "mixed_flag",
            "ntc_flag",
            "new_flag",
            "caller_flag",
            "strand_counts",
            "strand_flag",
            "key_flag",
            "homopolymer",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
}
