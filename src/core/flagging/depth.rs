use derive_getters::Getters;
use derive_more::Constructor;

use super::Flag;

// Coverage that barely cleared the calling threshold is still fragile
// evidence; anything below threshold * (1 + flag_pct/100) is flagged.
#[derive(Constructor, Getters, Debug, PartialEq, Copy, Clone)]
pub struct DepthProximity {
    threshold: u32,
    flag_pct: f32,
}

impl DepthProximity {
    #[inline]
    pub fn flag(&self, depth: u32) -> Option<Flag> {
        let highend = self.threshold as f32 * (1.0 + self.flag_pct / 100.0);
        if (depth as f32) < highend {
            Some(Flag::DepthNearThreshold)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholding() {
        let rule = DepthProximity::new(20, 10.0);
        // highend = 22
        for (depth, expected) in [
            (0, Some(Flag::DepthNearThreshold)),
            (20, Some(Flag::DepthNearThreshold)),
            (21, Some(Flag::DepthNearThreshold)),
            (22, None),
            (23, None),
            (1000, None),
        ] {
            assert_eq!(rule.flag(depth), expected, "depth {}", depth);
        }
    }

    #[test]
    fn zero_margin() {
        let rule = DepthProximity::new(10, 0.0);
        assert_eq!(rule.flag(9), Some(Flag::DepthNearThreshold));
        assert_eq!(rule.flag(10), None);
    }
}
