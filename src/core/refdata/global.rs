use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use bio_types::genome::Position;

// Observed-event counts across a public sequence corpus, keyed by position.
// The corpus export is a headered TSV; only the "base" (position) and
// "events" columns are consumed, wherever they sit in the header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlobalVariants {
    events: HashMap<Position, u32>,
}

impl GlobalVariants {
    pub fn events(&self, pos: Position) -> Option<u32> {
        self.events.get(&pos).copied()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<(Position, u32)> for GlobalVariants {
    fn from_iter<T: IntoIterator<Item = (Position, u32)>>(iter: T) -> Self {
        Self { events: iter.into_iter().collect() }
    }
}

fn _parse<T: BufRead>(mut reader: T) -> GlobalVariants {
    let mut header = String::new();
    reader.read_line(&mut header).expect("Failed to read the global variants table");

    let columns: Vec<&str> = header.trim_end().split('\t').collect();
    let index = |name: &str| {
        columns
            .iter()
            .position(|x| *x == name)
            .unwrap_or_else(|| panic!("Global variants table must have a \"{}\" column", name))
    };
    let (base, events) = (index("base"), index("events"));

    let mut table = HashMap::new();
    let mut buf = String::new();
    while reader.read_line(&mut buf).expect("Failed to read the global variants table") != 0 {
        let line = buf.trim_end();
        if line.is_empty() {
            buf.clear();
            continue;
        }
        let split: Vec<&str> = line.split('\t').collect();

        let pos: Position = split[base].parse().expect("Failed to parse a position in the global variants table");
        let cnt: u32 = split[events].parse().expect("Failed to parse an event count in the global variants table");
        table.insert(pos, cnt);
        buf.clear();
    }
    GlobalVariants { events: table }
}

pub fn parse(path: impl AsRef<Path>) -> GlobalVariants {
    _parse(super::reader(path.as_ref()))
}

#[cfg(test)]
mod tests {
    use std::io::BufReader;

    use super::*;

    #[test]
    fn empty() {
        let table = "base\tevents\n";
        assert!(_parse(BufReader::new(table.as_bytes())).is_empty());
    }

    #[test]
    fn correct() {
        let table = "base\tevents\n241\t9\n3037\t1\n23403\t1200\n";
        let parsed = _parse(BufReader::new(table.as_bytes()));

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed.events(241), Some(9));
        assert_eq!(parsed.events(3037), Some(1));
        assert_eq!(parsed.events(23403), Some(1200));
        assert_eq!(parsed.events(100), None);
    }

    #[test]
    fn reordered_columns() {
        let table = "gene\tevents\tbase\nS\t17\t21563\n";
        let parsed = _parse(BufReader::new(table.as_bytes()));
        assert_eq!(parsed.events(21563), Some(17));
    }

    #[test]
    #[should_panic(expected = "must have a \"events\" column")]
    fn missing_column() {
        let table = "base\tcount\n241\t9\n";
        _parse(BufReader::new(table.as_bytes()));
    }
}
