//! Candidate-ordering strategies for state expansion.
//!
//! The set of children an expansion produces is fixed by the
//! eligibility rules; the order those children appear in is pluggable.
//! Under a depth-first driver the order decides which branch is
//! committed to first, so it is a search-diversity knob, never a
//! correctness one.
//!
//! # Built-in orders
//!
//! | Order | Behavior |
//! |-------|----------|
//! | [`StableOrder`] | Roster order as given (default) |
//! | [`ShuffleOrder`] | Fresh uniform permutation per expansion |
//! | [`LeastLoadedFirst`] | Fewest held shifts first, ties in roster order |
//!
//! # Usage
//! ```
//! use shift_search::branching::{BranchOrder, ShuffleOrder};
//!
//! let mut order = ShuffleOrder::seeded(42);
//! let visiting = order.arrange(&[]);
//! assert!(visiting.is_empty());
//! ```

use std::fmt::Debug;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::models::Employee;

/// Arranges the roster for one expansion.
///
/// `arrange` returns employee indices in visiting order. An
/// implementation may consult the roster (for load-aware orders) or
/// ignore it. Indices outside the roster are skipped by the expansion,
/// and a repeated index derives that employee's child once per
/// occurrence. Omitted indices simply produce no child for that
/// employee.
pub trait BranchOrder: Send + Debug {
    /// Strategy name for logs and reports.
    fn name(&self) -> &'static str;

    /// Returns the visiting order over `roster` as indices.
    fn arrange(&mut self, roster: &[Employee]) -> Vec<usize>;
}

/// Roster order as given: deterministic and repeatable.
///
/// The default order. Two searches over the same input explore the
/// same tree in the same sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct StableOrder;

impl BranchOrder for StableOrder {
    fn name(&self) -> &'static str {
        "stable"
    }

    fn arrange(&mut self, roster: &[Employee]) -> Vec<usize> {
        (0..roster.len()).collect()
    }
}

/// A fresh uniform permutation per expansion.
///
/// Varies which employee a depth-first driver tries first, spreading
/// assignments across the roster instead of always loading the first
/// listed names.
#[derive(Debug, Clone)]
pub struct ShuffleOrder {
    rng: SmallRng,
}

impl ShuffleOrder {
    /// A shuffle seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// A deterministic shuffle for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for ShuffleOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl BranchOrder for ShuffleOrder {
    fn name(&self) -> &'static str {
        "shuffle"
    }

    fn arrange(&mut self, roster: &[Employee]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..roster.len()).collect();
        indices.shuffle(&mut self.rng);
        indices
    }
}

/// Fewest held shifts first; ties keep roster order.
///
/// A greedy balance heuristic: depth-first drivers descend into the
/// least-loaded employee's branch before piling more work on anyone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastLoadedFirst;

impl BranchOrder for LeastLoadedFirst {
    fn name(&self) -> &'static str {
        "least-loaded"
    }

    fn arrange(&mut self, roster: &[Employee]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..roster.len()).collect();
        // Stable sort keeps roster order within equal loads.
        indices.sort_by_key(|&i| roster[i].assigned_count());
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, Shift, WeekTime, Weekday};

    fn roster_of(n: usize) -> Vec<Employee> {
        (0..n)
            .map(|i| {
                Employee::new(
                    format!("e{i}"),
                    false,
                    Availability::uniform((0, 0), (23, 59)),
                )
            })
            .collect()
    }

    fn is_permutation(indices: &[usize], n: usize) -> bool {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        sorted == (0..n).collect::<Vec<_>>()
    }

    #[test]
    fn test_stable_order_is_identity() {
        let roster = roster_of(4);
        assert_eq!(StableOrder.arrange(&roster), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_shuffle_yields_permutations() {
        let roster = roster_of(6);
        let mut order = ShuffleOrder::seeded(7);
        for _ in 0..20 {
            assert!(is_permutation(&order.arrange(&roster), 6));
        }
    }

    #[test]
    fn test_shuffle_varies_across_calls() {
        let roster = roster_of(6);
        let mut order = ShuffleOrder::seeded(7);
        let arrangements: Vec<Vec<usize>> = (0..20).map(|_| order.arrange(&roster)).collect();
        assert!(arrangements.iter().any(|a| a != &arrangements[0]));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let roster = roster_of(5);
        let mut first = ShuffleOrder::seeded(42);
        let mut second = ShuffleOrder::seeded(42);
        for _ in 0..10 {
            assert_eq!(first.arrange(&roster), second.arrange(&roster));
        }
    }

    #[test]
    fn test_least_loaded_prefers_lighter_employees() {
        let mut roster = roster_of(3);
        let busy = Shift::new(
            "till",
            false,
            WeekTime::new(Weekday::Monday, 9, 0),
            WeekTime::new(Weekday::Monday, 12, 0),
        );
        roster[0].take(busy).unwrap();
        assert_eq!(LeastLoadedFirst.arrange(&roster), vec![1, 2, 0]);
    }

    #[test]
    fn test_least_loaded_ties_keep_roster_order() {
        let roster = roster_of(4);
        assert_eq!(LeastLoadedFirst.arrange(&roster), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_roster() {
        assert!(StableOrder.arrange(&[]).is_empty());
        assert!(ShuffleOrder::seeded(1).arrange(&[]).is_empty());
    }
}
