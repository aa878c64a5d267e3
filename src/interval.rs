/// Closed range of admissible ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive at both ends.
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Same interval with the upper bound pulled in to `max`.
    pub fn with_max(&self, max: f64) -> Self {
        Self::new(self.min, max)
    }

    pub fn clamp(&self, x: f64) -> f64 {
        if x < self.min {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let i = Interval::new(1.0, 2.0);
        assert!(i.contains(1.0));
        assert!(i.contains(2.0));
        assert!(!i.contains(2.000001));
    }

    #[test]
    fn test_clamp() {
        let i = Interval::new(0.0, 0.999);
        assert_eq!(i.clamp(-1.0), 0.0);
        assert_eq!(i.clamp(0.5), 0.5);
        assert_eq!(i.clamp(4.0), 0.999);
    }
}
