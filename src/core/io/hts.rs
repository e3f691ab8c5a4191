use std::path::{Path, PathBuf};

use bio_types::genome::Position;
#[cfg(test)]
use mockall::automock;
use rust_htslib::bam::{IndexedReader, Read};

use crate::core::dna::{Allele, AlleleCounts};

// Seam for per-position pileup collection, mockable in tests.
#[cfg_attr(test, automock)]
pub trait PileupSource {
    fn pileup(&mut self, pos: Position) -> AlleleCounts;
}

// Collects per-allele read counts from an indexed BAM. Amplicon runs are
// aligned against a single viral reference, so the first target is the genome.
pub struct BamPileup {
    reader: IndexedReader,
    contig: String,
    path: PathBuf,
}

impl BamPileup {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let reader = IndexedReader::from_path(&path).unwrap_or_else(|_| {
            panic!(
                "Failed to open file {}\n\
                 Possible reasons: BAM file was not indexed (samtools index); you don't have read permissions",
                path.as_ref().display()
            )
        });
        let contig = {
            let header = reader.header();
            assert!(header.target_count() >= 1, "BAM header must declare at least one reference sequence");
            String::from_utf8_lossy(header.tid2name(0)).to_string()
        };
        Self { reader, contig, path: path.as_ref().to_path_buf() }
    }
}

impl PileupSource for BamPileup {
    fn pileup(&mut self, pos: Position) -> AlleleCounts {
        let start = pos.saturating_sub(1);
        self.reader
            .fetch((self.contig.as_str(), start as i64, pos as i64))
            .unwrap_or_else(|_| panic!("Failed to fetch {}:{}-{}", self.contig, start, pos));

        let mut counts = AlleleCounts::zeros();
        let mut pileups = self.reader.pileup();
        pileups.set_max_depth(100_000);
        for column in pileups {
            let column = column.expect("Failed to read the BAM pileup");
            if column.pos() as Position != start {
                continue;
            }
            for alignment in column.alignments() {
                if alignment.is_del() || alignment.is_refskip() {
                    counts.O += 1;
                    continue;
                }
                let base = alignment.record().seq().as_bytes()[alignment.qpos().unwrap()];
                match Allele::try_from(base) {
                    Ok(allele) => counts[allele] += 1,
                    Err(_) => counts.N += 1,
                }
            }
        }
        counts
    }
}

impl Clone for BamPileup {
    fn clone(&self) -> Self {
        Self::new(&self.path)
    }
}
