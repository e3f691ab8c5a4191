use std::fs::File;
use std::io::BufWriter;

use clap::ArgMatches;
use indicatif::ProgressBar;
use itertools::Itertools;

use crate::core::error::EvalError;
use crate::core::flagging::Thresholds;
use crate::core::io::hts::BamPileup;
use crate::core::io::variants;
use crate::core::refdata::{alignment, global, positions, GlobalVariants, MaskedAlignment, PositionSet};
use crate::core::variant::VariantCall;

use super::args;

pub fn threads(pbar: ProgressBar, matches: &ArgMatches) -> usize {
    pbar.set_message("Parsing number of threads allowed to launch...");
    let result = matches.value_of(args::core::THREADS).and_then(|x| x.parse().ok()).unwrap();
    pbar.finish_with_message(format!("Using thread pool with at most {} threads", result));
    result
}

pub fn saveto(pbar: ProgressBar, matches: &ArgMatches) -> BufWriter<File> {
    pbar.set_message("Parsing output path...");
    let result = matches.value_of(args::core::SAVETO).unwrap();
    let file = BufWriter::new(File::create(result).expect("Failed to create the output file"));
    pbar.finish_with_message(format!("Result will be saved to {}", result));
    file
}

pub fn variants(pbar: ProgressBar, matches: &ArgMatches) -> Vec<Result<VariantCall, EvalError>> {
    pbar.set_message("Reading the variant calls table...");
    let path = matches.value_of(args::core::INPUT).unwrap();
    let calls = variants::read(path);
    let malformed = calls.iter().filter(|x| x.is_err()).count();
    if malformed == 0 {
        pbar.finish_with_message(format!("Variant calls: {} from {}", calls.len(), path));
    } else {
        pbar.finish_with_message(format!(
            "Variant calls: {} from {} ({} malformed records)",
            calls.len(),
            path,
            malformed
        ));
    }
    calls
}

pub fn thresholds(pbar: ProgressBar, matches: &ArgMatches) -> Thresholds {
    pbar.set_message("Parsing flagging thresholds...");
    let get = |key: &str| matches.value_of(key).unwrap();
    let result = Thresholds::new(
        get(args::thresholds::MIN_DEPTH).parse().unwrap(),
        get(args::thresholds::COVERAGE_FLAG_PCT).parse().unwrap(),
        get(args::thresholds::MAF_FLAG_PCT).parse().unwrap(),
        get(args::thresholds::SNP_DEPTH_FACTOR).parse().unwrap(),
        get(args::thresholds::MIN_GLOBAL_EVENTS).parse().unwrap(),
        get(args::thresholds::STRAND_THRESHOLD_PCT).parse().unwrap(),
    );
    pbar.finish_with_message(format!(
        "Thresholds: depth >= {} (+{}% margin), maf cutoff {}%, NTC depth factor {}, \
         global events >= {}, per-strand AF >= {}%",
        result.min_depth(),
        result.coverage_flag_pct(),
        result.maf_flag_pct(),
        result.snp_depth_factor(),
        result.min_global_events(),
        result.strand_threshold_pct()
    ));
    result
}

pub fn global_variants(pbar: ProgressBar, matches: &ArgMatches) -> Option<GlobalVariants> {
    pbar.set_message("Reading the global variants table...");
    match matches.value_of(args::refdata::GLOBAL_VARIANTS) {
        Some(path) => {
            let table = global::parse(path);
            pbar.finish_with_message(format!("Global variants: {} positions from {}", table.len(), path));
            Some(table)
        }
        None => {
            pbar.finish_with_message("Global variants table not provided, novelty check disabled");
            None
        }
    }
}

pub fn key_positions(pbar: ProgressBar, matches: &ArgMatches) -> Option<PositionSet> {
    pbar.set_message("Reading the key positions list...");
    match matches.value_of(args::refdata::KEY_POSITIONS) {
        Some(path) => {
            let keysites = positions::parse(path);
            pbar.finish_with_message(format!("Key positions: {} from {}", keysites.len(), path));
            Some(keysites)
        }
        None => {
            pbar.finish_with_message("Key positions not provided, ambiguity check disabled");
            None
        }
    }
}

pub fn homopolymers(pbar: ProgressBar, matches: &ArgMatches) -> Option<PositionSet> {
    pbar.set_message("Reading the homopolymer positions list...");
    match matches.value_of(args::refdata::HOMOPOLYMERS) {
        Some(path) => {
            let homopolymers = positions::parse(path);
            pbar.finish_with_message(format!("Homopolymer positions: {} from {}", homopolymers.len(), path));
            Some(homopolymers)
        }
        None => {
            pbar.finish_with_message("Homopolymer positions not provided, context annotation disabled");
            None
        }
    }
}

pub fn masked_alignment(pbar: ProgressBar, matches: &ArgMatches) -> Option<MaskedAlignment> {
    pbar.set_message("Reading the masked alignment...");
    match matches.value_of(args::refdata::MASKED_ALIGNMENT) {
        Some(path) => {
            let align = alignment::parse(path);
            pbar.finish_with_message(format!("Masked alignment: {} columns from {}", align.columns(), path));
            Some(align)
        }
        None => {
            pbar.finish_with_message("Masked alignment not provided, ambiguity check disabled");
            None
        }
    }
}

pub fn ntc(pbar: ProgressBar, matches: &ArgMatches) -> Option<BamPileup> {
    pbar.set_message("Opening the negative control...");
    match matches.value_of(args::refdata::NTC_BAM) {
        Some(path) => {
            let bam = BamPileup::new(path);
            pbar.finish_with_message(format!("Negative control: {}", path));
            Some(bam)
        }
        None => {
            pbar.finish_with_message("No negative control was sequenced on this run (NTC=None)");
            None
        }
    }
}

pub fn fatal(pbar: ProgressBar, calls: &[Result<VariantCall, EvalError>]) {
    pbar.set_message("Validating caller support vectors...");
    let fatal = calls.iter().filter_map(|x| x.as_ref().err()).filter(|x| x.is_fatal()).collect_vec();
    if let Some(err) = fatal.first() {
        panic!("{}", err);
    }
    pbar.finish_with_message("Caller support vectors are well-formed");
}
