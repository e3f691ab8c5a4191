use bio_types::genome::Position;
use derive_getters::Getters;
use derive_more::Constructor;

use crate::core::refdata::GlobalVariants;

use super::Flag;

// Novelty against the public corpus. The lookup is positional only: it asks
// whether the site is known to vary at least min_events times, not whether
// this exact substitution was observed.
#[derive(Constructor, Getters, Debug, PartialEq, Copy, Clone)]
pub struct GlobalNovelty {
    min_events: u32,
}

impl GlobalNovelty {
    pub fn flag(&self, pos: Position, corpus: &GlobalVariants) -> Option<Flag> {
        match corpus.events(pos) {
            None => Some(Flag::NotInGlobalCorpus),
            Some(events) if events < self.min_events => Some(Flag::NotInGlobalCorpus),
            Some(_) => None,
        }
    }
}
