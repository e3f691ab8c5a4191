use clap::{crate_name, crate_version, App, AppSettings};
use indicatif::{MultiProgress, ProgressBar, ProgressFinish, ProgressStyle};
use rayon::ThreadPoolBuilder;

use varflag::cli;

fn main() {
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .max_term_width(120)
        .setting(AppSettings::DeriveDisplayOrder)
        .args(cli::args::all())
        .get_matches();

    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {spinner} {msg}")
        .tick_strings(&["▹▹▹▹▹", "▸▹▹▹▹", "▹▸▹▹▹", "▹▹▸▹▹", "▹▹▹▸▹", "▹▹▹▹▸", "▪▪▪▪▪"])
        .on_finish(ProgressFinish::AndLeave);
    let mbar = MultiProgress::new();
    let factory = || mbar.add(ProgressBar::new_spinner().with_style(style.clone()));

    let threads = cli::parse::threads(factory(), &matches);
    ThreadPoolBuilder::new().num_threads(threads).build_global().expect("Failed to initialize global thread pool");

    rayon::scope(|s| {
        s.spawn(|_| cli::run(&matches, &factory));
        if threads > 1 {
            mbar.join().expect("Failed to render progress bars");
        }
    });
    if threads == 1 {
        mbar.join().expect("Failed to render progress bars");
    }
}
