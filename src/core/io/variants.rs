use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::EvalError;
use crate::core::variant::{StrandCounts, VariantCall};

// One row of the upstream caller-merge table. Alleles, the support vector and
// the strand count vectors are kept raw here and validated per record, so a
// malformed row surfaces a descriptive error instead of a panic.
#[derive(Deserialize, Debug)]
struct RawCall {
    position: u64,
    #[serde(rename = "ref")]
    refa: String,
    alt: String,
    depth: u32,
    alt_freq: f32,
    supp_vec: String,
    fwd_counts: String,
    rev_counts: String,
}

impl RawCall {
    fn validated(self) -> Result<VariantCall, EvalError> {
        Ok(VariantCall {
            pos: self.position,
            refa: self.refa.parse()?,
            alta: self.alt.parse()?,
            depth: self.depth,
            alt_freq: self.alt_freq,
            support: self.supp_vec.parse()?,
            strands: StrandCounts { forward: self.fwd_counts.parse()?, reverse: self.rev_counts.parse()? },
        })
    }
}

fn _read(reader: impl Read) -> Vec<Result<VariantCall, EvalError>> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(reader)
        .deserialize()
        .map(|row: Result<RawCall, csv::Error>| {
            row.expect("Failed to parse the variant calls table").validated()
        })
        .collect()
}

pub fn read(path: impl AsRef<Path>) -> Vec<Result<VariantCall, EvalError>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .unwrap_or_else(|_| panic!("Failed to open file {}, no read permission?", path.display()));
    _read(file)
}

#[cfg(test)]
mod tests {
    use crate::core::dna::{Allele, AlleleCounts};

    use super::*;

    const HEADER: &str = "position\tref\talt\tdepth\talt_freq\tsupp_vec\tfwd_counts\trev_counts\n";

    #[test]
    fn correct() {
        let table = format!("{}241\tC\tT\t120\t0.98\t111\t0,0,0,60,0,0\t0,1,0,59,0,0\n", HEADER);
        let calls = _read(table.as_bytes());

        assert_eq!(calls.len(), 1);
        let call = calls[0].as_ref().unwrap();
        assert_eq!(call.pos, 241);
        assert_eq!((call.refa, call.alta), (Allele::C, Allele::T));
        assert_eq!((call.depth, call.alt_freq), (120, 0.98));
        assert_eq!(call.support.to_string(), "111");
        assert_eq!(call.strands.forward, AlleleCounts::new(0, 0, 0, 60, 0, 0));
        assert_eq!(call.strands.reverse, AlleleCounts::new(0, 1, 0, 59, 0, 0));
    }

    #[test]
    fn malformed_records() {
        let table = format!(
            "{}100\tA\tX\t10\t0.5\t111\t0,0,0,0,0,0\t0,0,0,0,0,0\n\
             200\tA\tG\t10\t0.5\t000\t0,0,0,0,0,0\t0,0,0,0,0,0\n\
             300\tA\tG\t10\t0.5\t111\t0,0,0\t0,0,0,0,0,0\n",
            HEADER
        );
        let calls = _read(table.as_bytes());

        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0], Err(EvalError::UnknownAllele('X')));
        assert_eq!(calls[1], Err(EvalError::InvalidSupportVector("000".into())));
        assert_eq!(calls[2], Err(EvalError::MalformedStrandCounts("0,0,0".into())));
    }

    #[test]
    #[should_panic(expected = "Failed to parse the variant calls table")]
    fn broken_row() {
        let table = format!("{}241\tC\tT\tdeep\t0.98\t111\t0,0,0,60,0,0\t0,1,0,59,0,0\n", HEADER);
        _read(table.as_bytes());
    }
}
