pub use alignment::MaskedAlignment;
pub use control::NtcPileups;
pub use global::GlobalVariants;
pub use positions::PositionSet;

pub mod alignment;
pub mod control;
pub mod global;
pub mod positions;

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::bufread::GzDecoder;

// Transparently gunzip reference files based on the ".gz" suffix.
pub(crate) fn reader(path: &Path) -> Box<dyn BufRead> {
    let file = File::open(path)
        .unwrap_or_else(|_| panic!("Failed to open file {}, no read permission?", path.display()));
    let file = BufReader::new(file);

    if path.extension() == Some(OsStr::new("gz")) {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(file)
    }
}
