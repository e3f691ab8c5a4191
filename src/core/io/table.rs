use std::io::Write;

pub trait Table {
    const LENGTH: usize;

    fn row(&self) -> Vec<String>;
    fn header() -> Vec<String>;
}

pub fn write<T: Table>(saveto: &mut impl Write, rows: impl IntoIterator<Item = T>, errmsg: &str) {
    writeln!(saveto, "{}", T::header().join("\t")).expect(errmsg);
    for row in rows {
        let row = row.row();
        debug_assert_eq!(row.len(), T::LENGTH);
        writeln!(saveto, "{}", row.join("\t")).expect(errmsg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy(u32);

    impl Table for Dummy {
        const LENGTH: usize = 2;

        fn row(&self) -> Vec<String> {
            vec![self.0.to_string(), (self.0 * 2).to_string()]
        }

        fn header() -> Vec<String> {
            vec!["x".into(), "2x".into()]
        }
    }

    #[test]
    fn write_rows() {
        let mut saveto = Vec::new();
        write(&mut saveto, vec![Dummy(1), Dummy(21)], "IO error");
        assert_eq!(String::from_utf8(saveto).unwrap(), "x\t2x\n1\t2\n21\t42\n");
    }
}
