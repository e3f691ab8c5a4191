use bio_types::genome::Position;

use crate::core::refdata::PositionSet;

// Context tag, not a quality failure: homopolymer runs are prone to
// sequencing and indel errors, so calls inside them are annotated for the
// reviewer rather than flagged.
#[inline]
pub fn context(pos: Position, homopolymers: &PositionSet) -> bool {
    homopolymers.contains(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagging() {
        let homopolymers: PositionSet = [11074, 11075, 11076].into_iter().collect();
        assert!(context(11074, &homopolymers));
        assert!(context(11076, &homopolymers));
        assert!(!context(11073, &homopolymers));
        assert!(!context(1, &homopolymers));
    }
}
