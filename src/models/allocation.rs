//! Allocation results
//!
//! An [`Allocation`] is what resolving a template produces: one line per
//! template entry plus the running remainder.

use std::fmt;

use super::money::Money;
use super::template::AllocationRule;
use crate::error::{TemplateError, TemplateResult};

/// One resolved template entry
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationLine {
    pub category_name: String,
    pub rule: AllocationRule,
    pub amount: Money,
}

/// Whether the allocation fits within the total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Allocated amounts fit; the remainder is left over
    Meets { remaining: Money },
    /// Allocated amounts exceed the total by this much
    Over { by: Money },
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meets { remaining } => {
                write!(f, "meets budget with {} remaining", remaining)
            }
            Self::Over { by } => write!(f, "over budget by {}", by),
        }
    }
}

/// Per-category amounts computed from a template
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    total: Money,
    lines: Vec<AllocationLine>,
    allocated: Money,
    remaining: Money,
}

impl Allocation {
    /// Start an empty allocation against a total
    ///
    /// The running remainder starts from the total truncated to whole
    /// currency units.
    pub fn new(total: Money) -> Self {
        Self {
            total,
            lines: Vec::new(),
            allocated: Money::zero(),
            remaining: total.truncate_to_units(),
        }
    }

    /// Record a resolved line and charge it against the remainder
    ///
    /// Fails without recording the line if either running figure would
    /// overflow.
    pub fn push(&mut self, line: AllocationLine) -> TemplateResult<()> {
        let allocated = self.allocated.checked_add(line.amount);
        // Kept above i64::MIN so an overage can always be negated for display
        let remaining = self
            .remaining
            .checked_sub(line.amount)
            .filter(|r| r.milliunits() > i64::MIN);

        match (allocated, remaining) {
            (Some(allocated), Some(remaining)) => {
                self.allocated = allocated;
                self.remaining = remaining;
                self.lines.push(line);
                Ok(())
            }
            _ => Err(TemplateError::out_of_range(&line.category_name)),
        }
    }

    /// The total the template was resolved against
    pub fn total(&self) -> Money {
        self.total
    }

    /// Lines in template order
    pub fn lines(&self) -> &[AllocationLine] {
        &self.lines
    }

    /// Amount for a category; the first matching line wins
    pub fn amount_for(&self, category_name: &str) -> Option<Money> {
        self.lines
            .iter()
            .find(|line| line.category_name == category_name)
            .map(|line| line.amount)
    }

    /// Sum of all allocated amounts
    pub fn allocated(&self) -> Money {
        self.allocated
    }

    /// Truncated total minus everything allocated; negative when over budget
    pub fn remaining(&self) -> Money {
        self.remaining
    }

    pub fn status(&self) -> BudgetStatus {
        if self.remaining.is_negative() {
            BudgetStatus::Over {
                by: -self.remaining,
            }
        } else {
            BudgetStatus::Meets {
                remaining: self.remaining,
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, units: i64) -> AllocationLine {
        AllocationLine {
            category_name: name.into(),
            rule: AllocationRule::Fixed(Money::from_units(units)),
            amount: Money::from_units(units),
        }
    }

    #[test]
    fn test_remaining_starts_truncated() {
        let allocation = Allocation::new(Money::from_milliunits(500_750));
        assert_eq!(allocation.remaining(), Money::from_units(500));
        assert_eq!(allocation.total(), Money::from_milliunits(500_750));
    }

    #[test]
    fn test_push_decrements_remaining() {
        let mut allocation = Allocation::new(Money::from_units(100));
        allocation.push(line("A", 30)).unwrap();
        allocation.push(line("B", 20)).unwrap();

        assert_eq!(allocation.remaining(), Money::from_units(50));
        assert_eq!(allocation.allocated(), Money::from_units(50));
        assert_eq!(allocation.amount_for("B"), Some(Money::from_units(20)));
        assert_eq!(allocation.amount_for("C"), None);
    }

    #[test]
    fn test_status_display() {
        let mut allocation = Allocation::new(Money::from_units(100));
        allocation.push(line("A", 40)).unwrap();
        assert_eq!(allocation.status().to_string(), "meets budget with 60.00 remaining");

        allocation.push(line("B", 90)).unwrap();
        assert_eq!(
            allocation.status(),
            BudgetStatus::Over {
                by: Money::from_units(30)
            }
        );
        assert_eq!(allocation.status().to_string(), "over budget by 30.00");
    }

    #[test]
    fn test_exact_budget_meets() {
        let mut allocation = Allocation::new(Money::from_units(10));
        allocation.push(line("A", 10)).unwrap();
        assert_eq!(allocation.status().to_string(), "meets budget with 0.00 remaining");
    }

    #[test]
    fn test_push_rejects_overflow() {
        let mut allocation = Allocation::new(Money::zero());
        allocation.push(line("A", 5_000_000_000_000_000)).unwrap();

        let err = allocation
            .push(line("B", 5_000_000_000_000_000))
            .unwrap_err();
        assert!(err.to_string().contains("'B'"));

        // The failed line leaves the running figures untouched
        assert_eq!(allocation.len(), 1);
        assert_eq!(allocation.remaining(), Money::from_units(-5_000_000_000_000_000));
        assert_eq!(allocation.allocated(), Money::from_units(5_000_000_000_000_000));
    }
}
