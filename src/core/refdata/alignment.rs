use std::io::BufRead;
use std::path::Path;

use bio_types::genome::Position;

// Two-row masked alignment: the reference genome on top, the sample's masked
// consensus below. Amplicon consensus genomes are reference-length, so
// alignment columns map 1:1 to 1-based genome coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskedAlignment {
    reference: Vec<u8>,
    consensus: Vec<u8>,
}

impl MaskedAlignment {
    pub fn columns(&self) -> usize {
        self.consensus.len()
    }

    pub fn column_of(&self, pos: Position) -> usize {
        pos.saturating_sub(1) as usize
    }

    pub fn consensus_at(&self, column: usize) -> Option<u8> {
        self.consensus.get(column).copied()
    }

    pub fn reference_at(&self, column: usize) -> Option<u8> {
        self.reference.get(column).copied()
    }

    #[cfg(test)]
    pub(crate) fn from_rows(reference: &str, consensus: &str) -> Self {
        assert_eq!(reference.len(), consensus.len());
        Self { reference: reference.as_bytes().to_vec(), consensus: consensus.as_bytes().to_vec() }
    }
}

fn _parse<T: BufRead>(reader: T) -> MaskedAlignment {
    let mut rows: Vec<Vec<u8>> = Vec::new();

    for line in reader.lines() {
        let line = line.expect("Failed to read the masked alignment");
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('>') {
            rows.push(Vec::new());
            continue;
        }
        let row = rows.last_mut().expect("Masked alignment must be a FASTA file");
        row.extend(line.bytes().map(|x| x.to_ascii_uppercase()));
    }

    assert_eq!(rows.len(), 2, "Masked alignment must contain exactly 2 records (reference, masked consensus)");
    let (reference, consensus) = (rows.swap_remove(0), rows.swap_remove(0));
    assert_eq!(
        reference.len(),
        consensus.len(),
        "Masked alignment rows must have identical lengths"
    );
    MaskedAlignment { reference, consensus }
}

pub fn parse(path: impl AsRef<Path>) -> MaskedAlignment {
    _parse(super::reader(path.as_ref()))
}

#[cfg(test)]
mod tests {
    use std::io::BufReader;

    use super::*;

    #[test]
    fn correct() {
        let fasta = ">MN908947.3\nACGTAC\nGT\n>sample_masked\nACNTAC\ngt\n";
        let parsed = _parse(BufReader::new(fasta.as_bytes()));

        assert_eq!(parsed.columns(), 8);
        assert_eq!(parsed.consensus_at(parsed.column_of(3)), Some(b'N'));
        assert_eq!(parsed.consensus_at(parsed.column_of(7)), Some(b'G'));
        assert_eq!(parsed.consensus_at(8), None);
    }

    #[test]
    #[should_panic(expected = "exactly 2 records")]
    fn single_record() {
        _parse(BufReader::new(">only\nACGT\n".as_bytes()));
    }

    #[test]
    #[should_panic(expected = "identical lengths")]
    fn ragged_rows() {
        _parse(BufReader::new(">a\nACGT\n>b\nAC\n".as_bytes()));
    }
}
