use crate::TossStats;

/// Tolerance below which two medians or averages count as equal
pub const DEFAULT_EPSILON: f64 = 0.001;

/// Which end of the distribution is preferred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Objective {
    /// Maximize points (own hand, own crib)
    HighestIsBetter,
    /// Minimize points (opponent's crib)
    LowestIsBetter,
}

/// Orders candidate statistics under an objective
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparator {
    pub objective: Objective,
    pub epsilon: f64,
}

impl Comparator {
    pub fn new(objective: Objective) -> Self {
        Comparator {
            objective,
            epsilon: DEFAULT_EPSILON,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Whether `new` should replace `old` as the best candidate.
    ///
    /// Median decides, then average, then max and min (min and max swap order
    /// when lower is better). Medians and averages within epsilon are tied. A
    /// full tie keeps `old`; a missing `old` always loses.
    pub fn is_better(&self, old: Option<&TossStats>, new: &TossStats) -> bool {
        let Some(old) = old else {
            return true;
        };
        let eps = self.epsilon;
        match self.objective {
            Objective::HighestIsBetter => {
                if (new.median - old.median).abs() > eps {
                    return new.median > old.median;
                }
                if (new.avg - old.avg).abs() > eps {
                    return new.avg > old.avg;
                }
                if new.max != old.max {
                    return new.max > old.max;
                }
                new.min > old.min
            }
            Objective::LowestIsBetter => {
                if (new.median - old.median).abs() > eps {
                    return new.median < old.median;
                }
                if (new.avg - old.avg).abs() > eps {
                    return new.avg < old.avg;
                }
                if new.min != old.min {
                    return new.min < old.min;
                }
                new.max < old.max
            }
        }
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Comparator::new(Objective::HighestIsBetter)
    }
}
