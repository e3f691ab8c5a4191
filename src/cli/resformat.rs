use std::io::Write;

use crate::core::flagging::FlagRecord;
use crate::core::io::table;

const OUTPUT_IO_ERROR: &str = "Failed to write variant flags to the output TSV file.";

pub fn flags(saveto: &mut impl Write, records: Vec<FlagRecord>) {
    table::write(saveto, records, OUTPUT_IO_ERROR);
}
