use bio_types::genome::Position;

use crate::core::error::EvalError;
use crate::core::refdata::{MaskedAlignment, PositionSet};

use super::Flag;

// A clinically important site that the consensus masked to 'N' deserves a
// manual look even though no variant was confidently called there.
pub fn ambiguous(
    pos: Position,
    keysites: &PositionSet,
    alignment: &MaskedAlignment,
) -> Result<Option<Flag>, EvalError> {
    if !keysites.contains(pos) {
        return Ok(None);
    }
    match alignment.consensus_at(alignment.column_of(pos)) {
        None => Err(EvalError::OutsideAlignment { pos, columns: alignment.columns() }),
        Some(b'N') => Ok(Some(Flag::AmbigAtKeySite)),
        Some(_) => Ok(None),
    }
}
