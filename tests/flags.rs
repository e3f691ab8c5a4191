use std::fs;
use std::path::Path;

use clap::App;
use indicatif::{MultiProgress, ProgressBar};
use tempfile::TempDir;

use varflag::cli;

const HEADER: &str = "position\tref\talt\tdepth\talt_freq\tsupp_vec\tfwd_counts\trev_counts\n";

fn run(args: &[&str]) {
    let masterbar = MultiProgress::new();
    let factory = || masterbar.add(ProgressBar::hidden());

    let app = App::new("test").args(cli::args::all());
    let matches = app.get_matches_from(args);

    cli::run(&matches, factory);
    masterbar.join_and_clear().expect("Failed to join pbars. Leak?");
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write a test input file");
    path.to_str().unwrap().to_owned()
}

#[test]
fn full_reference_pack() {
    let dir = TempDir::new().expect("Failed to create a temporary directory");

    let variants = write(
        dir.path(),
        "variants.tsv",
        &format!(
            "{}10\tA\tG\t100\t0.95\t111\t0,0,50,0,0,0\t0,0,50,0,0,0\n\
             21\tC\tT\t21\t0.2\t110\t0,0,0,10,0,0\t0,40,0,1,0,0\n\
             35\tG\tT\t60\t0.5\t011\t0,0,5,25,0,0\t0,0,6,24,0,0\n\
             40\tA\tG\t50\t1.5\t111\t0,0,25,0,0,0\t0,0,25,0,0,0\n",
            HEADER
        ),
    );
    let global = write(dir.path(), "global.tsv", "base\tevents\n10\t5\n21\t2\n");
    let keys = write(dir.path(), "keys.txt", "10\n35\n");
    let homopolymers = write(dir.path(), "homopolymers.txt", "21\n");
    let masked = write(
        dir.path(),
        "masked.fasta",
        &format!(">reference\n{}\n>sample_masked\n{}N{}\n", "A".repeat(50), "A".repeat(9), "A".repeat(40)),
    );
    let saveto = dir.path().join("flags.tsv");

    #[rustfmt::skip]
    let args = [
        "test", "-i", &variants, "-o", saveto.to_str().unwrap(),
        "--global-variants", &global, "--key-positions", &keys,
        "--homopolymers", &homopolymers, "--masked-alignment", &masked,
    ];
    run(&args);

    let result = fs::read_to_string(&saveto).expect("Failed to read the output file");
    let expected = "position\tref\talt\tdepth\talt_freq\tdepth_flag\tisnv_flag\tmixed_flag\tntc_flag\t\
                    new_flag\tcaller_flag\tstrand_counts\tstrand_flag\tkey_flag\thomopolymer\n\
                    10\tA\tG\t100\t0.9500\t.\t.\t.\tNTC=None\t.\t.\tFWD:50/50,REV:50/50\t.\t\
                    ambig in key position\tfalse\n\
                    21\tC\tT\t21\t0.2000\tdepth near threshold\t0.15<maf<0.25\t.\tNTC=None\t\
                    not in nextstrain\tmismatch(i+f)\tFWD:10/10,REV:1/41\tstrand bias: low -AF\t.\ttrue\n\
                    35\tG\tT\t60\t0.5000\t.\t.\tmixed position\tNTC=None\tnot in nextstrain\t\
                    mismatch(f+s)\tFWD:25/30,REV:24/30\t.\t.\tfalse\n";
    // The record at position 40 carries an impossible frequency and is skipped
    assert_eq!(result, expected);
}

#[test]
fn no_optional_references() {
    let dir = TempDir::new().expect("Failed to create a temporary directory");

    let variants = write(
        dir.path(),
        "variants.tsv",
        &format!("{}241\tC\tT\t318\t0.99\t111\t0,158,0,2,0,0\t0,157,0,1,0,0\n", HEADER),
    );
    let saveto = dir.path().join("flags.tsv");

    run(&["test", "-i", &variants, "-o", saveto.to_str().unwrap()]);

    let result = fs::read_to_string(&saveto).expect("Failed to read the output file");
    let expected = "position\tref\talt\tdepth\talt_freq\tdepth_flag\tisnv_flag\tmixed_flag\tntc_flag\t\
                    new_flag\tcaller_flag\tstrand_counts\tstrand_flag\tkey_flag\thomopolymer\n\
                    241\tC\tT\t318\t0.9900\t.\t.\t.\tNTC=None\tNA\t.\tFWD:2/160,REV:1/158\t.\tNA\tNA\n";
    assert_eq!(result, expected);
}

#[test]
#[should_panic(expected = "not a valid support vector")]
fn invalid_support_vector_is_fatal() {
    let dir = TempDir::new().expect("Failed to create a temporary directory");

    let variants = write(
        dir.path(),
        "variants.tsv",
        &format!(
            "{}241\tC\tT\t318\t0.99\t111\t0,158,0,2,0,0\t0,157,0,1,0,0\n\
             3037\tC\tT\t100\t0.98\t000\t0,50,0,0,0,0\t0,50,0,0,0,0\n",
            HEADER
        ),
    );
    let saveto = dir.path().join("flags.tsv");

    run(&["test", "-i", &variants, "-o", saveto.to_str().unwrap()]);
}
