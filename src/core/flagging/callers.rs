use crate::core::variant::SupportVector;

use super::Flag;

// Cross-caller agreement. Vectors that fail validation ("000" included) never
// reach this point: SupportVector parsing rejects them with a fatal error.
#[inline]
pub fn agreement(support: &SupportVector) -> Option<Flag> {
    if support.is_unanimous() {
        None
    } else {
        Some(Flag::CallerMismatch(*support))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::error::EvalError;

    use super::*;

    // The mapping is exhaustive over all 8 three-bit vectors: 7 are ranked
    // here, "000" is rejected at parse time
    #[test]
    fn mapping() {
        for (vector, expected) in [
            ("111", None),
            ("100", Some("mismatch(i)")),
            ("010", Some("mismatch(f)")),
            ("001", Some("mismatch(s)")),
            ("110", Some("mismatch(i+f)")),
            ("101", Some("mismatch(i+s)")),
            ("011", Some("mismatch(f+s)")),
        ] {
            let support: SupportVector = vector.parse().unwrap();
            assert_eq!(agreement(&support).map(|x| x.to_string()), expected.map(String::from), "{}", vector);
        }
    }

    #[test]
    fn all_zeros_is_fatal() {
        let err = "000".parse::<SupportVector>().unwrap_err();
        assert_eq!(err, EvalError::InvalidSupportVector("000".into()));
        assert!(err.is_fatal());
    }
}
