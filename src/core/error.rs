use bio_types::genome::Position;
use thiserror::Error;

// Per-record evaluation errors. Only the support vector variant is fatal for
// the whole run; everything else invalidates a single record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("{0} is not a valid support vector")]
    InvalidSupportVector(String),
    #[error("unknown allele symbol '{0}'")]
    UnknownAllele(char),
    #[error("alternate allele frequency {freq} at position {pos} is outside [0, 1]")]
    FrequencyOutOfRange { pos: Position, freq: f32 },
    #[error("malformed strand counts \"{0}\", expected 6 comma-separated integers")]
    MalformedStrandCounts(String),
    #[error("position {pos} maps outside the masked alignment ({columns} columns)")]
    OutsideAlignment { pos: Position, columns: usize },
}

impl EvalError {
    // An all-zero or malformed support vector indicates an upstream pipeline
    // defect, not a variant-quality finding.
    pub fn is_fatal(&self) -> bool {
        matches!(self, EvalError::InvalidSupportVector(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatality() {
        assert!(EvalError::InvalidSupportVector("000".into()).is_fatal());
        assert!(!EvalError::UnknownAllele('x').is_fatal());
        assert!(!EvalError::FrequencyOutOfRange { pos: 1, freq: 1.5 }.is_fatal());
        assert!(!EvalError::MalformedStrandCounts("1,2".into()).is_fatal());
        assert!(!EvalError::OutsideAlignment { pos: 100, columns: 10 }.is_fatal());
    }

    #[test]
    fn messages() {
        assert_eq!(EvalError::InvalidSupportVector("0a1".into()).to_string(), "0a1 is not a valid support vector");
        assert_eq!(EvalError::UnknownAllele('x').to_string(), "unknown allele symbol 'x'");
    }
}
