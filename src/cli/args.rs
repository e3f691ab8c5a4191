use clap::Arg;

use super::validate;

pub mod core {
    use super::*;

    pub const INPUT: &str = "input";
    pub const SAVETO: &str = "saveto";
    pub const THREADS: &str = "threads";

    pub const SECTION_NAME: &str = "Core";

    pub fn args<'a>() -> Vec<Arg<'a>> {
        let args = vec![
            Arg::new(INPUT)
                .short('i')
                .long(INPUT)
                .required(true)
                .takes_value(true)
                .validator(validate::path)
                .long_help(
                    "Path to the merged variant calls table (tsv). Expected columns: position, ref, alt, \
                     depth, alt_freq, supp_vec (3-bit caller support vector), fwd_counts and rev_counts \
                     (comma-joined per-allele read counts in the A,C,G,T,N,O order).",
                ),
            Arg::new(SAVETO)
                .short('o')
                .long(SAVETO)
                .takes_value(true)
                .validator(validate::writable)
                .default_value("/dev/stdout")
                .long_help("Path to the output tsv file. By default, the results are printed to stdout."),
            Arg::new(THREADS)
                .short('t')
                .long(THREADS)
                .takes_value(true)
                .validator(validate::numeric(1, usize::MAX))
                .default_value("1")
                .long_help("Maximum number of threads to spawn at once."),
        ];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub mod thresholds {
    use super::*;

    pub const MIN_DEPTH: &str = "min-depth";
    pub const COVERAGE_FLAG_PCT: &str = "coverage-flag-pct";
    pub const MAF_FLAG_PCT: &str = "maf-flag-pct";
    pub const SNP_DEPTH_FACTOR: &str = "snp-depth-factor";
    pub const MIN_GLOBAL_EVENTS: &str = "min-global-events";
    pub const STRAND_THRESHOLD_PCT: &str = "strand-threshold-pct";

    pub const SECTION_NAME: &str = "Thresholds";

    pub fn args<'a>() -> Vec<Arg<'a>> {
        let args = vec![
            Arg::new(MIN_DEPTH)
                .long(MIN_DEPTH)
                .takes_value(true)
                .validator(validate::numeric(1u32, u32::MAX))
                .default_value("20")
                .long_help("Minimum acceptable read depth used by the upstream caller merge."),
            Arg::new(COVERAGE_FLAG_PCT)
                .long(COVERAGE_FLAG_PCT)
                .takes_value(true)
                .validator(validate::numeric(0f32, 100f32))
                .default_value("10")
                .long_help(
                    "Flag positions with depth below min-depth * (1 + pct/100), i.e. positions that \
                     cleared the depth cutoff with little margin.",
                ),
            Arg::new(MAF_FLAG_PCT)
                .long(MAF_FLAG_PCT)
                .takes_value(true)
                .validator(validate::numeric(0f32, 100f32))
                .default_value("25")
                .long_help(
                    "Cumulative minor allele frequency cutoff (in percent) separating candidate \
                     within-host variants from worrisome mixed positions.",
                ),
            Arg::new(SNP_DEPTH_FACTOR)
                .long(SNP_DEPTH_FACTOR)
                .takes_value(true)
                .validator(validate::numeric(1u32, u32::MAX))
                .default_value("5")
                .long_help(
                    "Require sample depth to exceed snp-depth-factor * negative control support for the \
                     same allele before ruling out contamination.",
                ),
            Arg::new(MIN_GLOBAL_EVENTS)
                .long(MIN_GLOBAL_EVENTS)
                .takes_value(true)
                .validator(validate::numeric(1u32, u32::MAX))
                .default_value("3")
                .long_help(
                    "Minimum number of observations in the global corpus for a position to count as \
                     known variation; rarer positions are flagged as novel.",
                ),
            Arg::new(STRAND_THRESHOLD_PCT)
                .long(STRAND_THRESHOLD_PCT)
                .takes_value(true)
                .validator(validate::numeric(0f32, 100f32))
                .default_value("5")
                .long_help(
                    "Minimum alternate allele frequency (in percent) expected on each strand; a single \
                     strand below it indicates strand bias.",
                ),
        ];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub mod refdata {
    use super::*;

    pub const GLOBAL_VARIANTS: &str = "global-variants";
    pub const KEY_POSITIONS: &str = "key-positions";
    pub const HOMOPOLYMERS: &str = "homopolymers";
    pub const NTC_BAM: &str = "ntc-bam";
    pub const MASKED_ALIGNMENT: &str = "masked-alignment";

    pub const SECTION_NAME: &str = "Reference data";

    pub fn args<'a>() -> Vec<Arg<'a>> {
        let args = vec![
            Arg::new(GLOBAL_VARIANTS)
                .long(GLOBAL_VARIANTS)
                .takes_value(true)
                .validator(validate::path)
                .long_help(
                    "Headered tsv with \"base\" (position) and \"events\" columns summarizing observed \
                     variation across the public corpus. Omit to skip the novelty check.",
                ),
            Arg::new(KEY_POSITIONS)
                .long(KEY_POSITIONS)
                .takes_value(true)
                .validator(validate::path)
                .requires(MASKED_ALIGNMENT)
                .long_help(
                    "Single-column list of biologically or clinically significant positions. Requires \
                     --masked-alignment; omit to skip the key-position ambiguity check.",
                ),
            Arg::new(HOMOPOLYMERS)
                .long(HOMOPOLYMERS)
                .takes_value(true)
                .validator(validate::path)
                .long_help(
                    "Single-column list of positions inside known homopolymer runs. Omit to skip the \
                     homopolymer context annotation.",
                ),
            Arg::new(NTC_BAM)
                .long(NTC_BAM)
                .takes_value(true)
                .validator(validate::path)
                .long_help(
                    "Indexed BAM of the no-template control sequenced on this run. When omitted every \
                     call is annotated with NTC=None instead of the contamination check.",
                ),
            Arg::new(MASKED_ALIGNMENT)
                .long(MASKED_ALIGNMENT)
                .takes_value(true)
                .validator(validate::path)
                .requires(KEY_POSITIONS)
                .long_help(
                    "Two-record fasta holding the reference genome and the sample's masked consensus, \
                     aligned column-for-column.",
                ),
        ];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub fn all<'a>() -> Vec<Arg<'a>> {
    core::args().into_iter().chain(thresholds::args()).chain(refdata::args()).collect()
}
