use clap::ArgMatches;
use indicatif::ProgressBar;
use itertools::Itertools;
use rayon::prelude::*;

use crate::core::error::EvalError;
use crate::core::flagging::{FlagEngine, FlagRecord, References};
use crate::core::refdata::NtcPileups;
use crate::core::variant::VariantCall;

use super::{parse, resformat};

fn ntc_pileups(
    pbar: ProgressBar,
    matches: &ArgMatches,
    calls: &[Result<VariantCall, EvalError>],
) -> NtcPileups {
    match parse::ntc(pbar, matches) {
        Some(mut bam) => {
            // Pileups are prefetched for every candidate position, keeping
            // the per-record loop free of IO
            let positions = calls.iter().filter_map(|x| x.as_ref().ok()).map(|x| x.pos);
            NtcPileups::collect(&mut bam, positions)
        }
        None => NtcPileups::Absent,
    }
}

pub fn run(matches: &ArgMatches, factory: impl Fn() -> ProgressBar) {
    let calls = parse::variants(factory(), matches);
    // An invalid support vector signals an upstream pipeline defect; stop
    // before any reference data is touched
    parse::fatal(factory(), &calls);

    let thresholds = parse::thresholds(factory(), matches);
    let refs = References {
        global: parse::global_variants(factory(), matches),
        keysites: parse::key_positions(factory(), matches),
        homopolymers: parse::homopolymers(factory(), matches),
        alignment: parse::masked_alignment(factory(), matches),
        ntc: ntc_pileups(factory(), matches, &calls),
    };
    let mut saveto = parse::saveto(factory(), matches);

    let engine = FlagEngine::new(thresholds, refs);

    let pbar = factory();
    pbar.set_message("Flagging variant calls...");

    let (calls, malformed): (Vec<VariantCall>, Vec<EvalError>) = calls.into_iter().partition_result();
    let evaluated: Vec<Result<FlagRecord, EvalError>> =
        calls.par_iter().map(|call| engine.evaluate(call)).collect();
    let (records, failed): (Vec<FlagRecord>, Vec<EvalError>) = evaluated.into_iter().partition_result();

    for err in malformed.iter().chain(&failed) {
        eprintln!("Skipping record: {}", err);
    }
    pbar.finish_with_message(format!(
        "Flagged {} variant calls ({} records skipped)",
        records.len(),
        malformed.len() + failed.len()
    ));

    resformat::flags(&mut saveto, records);
}
