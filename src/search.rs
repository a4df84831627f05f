//! Frontier-driven search over schedule states.
//!
//! [`crate::models::ScheduleState`] only ever produces children; this
//! module owns the frontier and the exploration policy. Depth-first
//! keeps the frontier small and backtracks out of dead ends by
//! falling back to the most recent unexplored sibling. Breadth-first
//! trades memory for finding a shallowest goal.
//!
//! # Usage
//! ```
//! use shift_search::models::{Availability, Employee, ScheduleState, Shift, WeekTime, Weekday};
//! use shift_search::search::{ScheduleSearch, Termination};
//!
//! let roster = vec![Employee::new("ada", false, Availability::uniform((8, 0), (18, 0)))];
//! let demand = vec![Shift::new(
//!     "open",
//!     false,
//!     WeekTime::new(Weekday::Monday, 9, 0),
//!     WeekTime::new(Weekday::Monday, 12, 0),
//! )];
//!
//! let mut search = ScheduleSearch::new();
//! let result = search.solve(ScheduleState::initial(roster, demand));
//! assert_eq!(result.termination, Termination::Solved);
//! ```

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, info};

use crate::branching::{BranchOrder, StableOrder};
use crate::models::ScheduleState;

/// Frontier discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplorationOrder {
    /// Newest states first. Commits to one branch at a time and
    /// backtracks on dead ends; frontier stays small.
    #[default]
    DepthFirst,
    /// Oldest states first. Reaches a shallowest goal, at the price of
    /// a frontier that can grow with the branching factor.
    BreadthFirst,
}

impl fmt::Display for ExplorationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplorationOrder::DepthFirst => write!(f, "depth-first"),
            ExplorationOrder::BreadthFirst => write!(f, "breadth-first"),
        }
    }
}

/// Search policy and budget.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Frontier discipline.
    pub exploration: ExplorationOrder,
    /// Expansions allowed before giving up; `None` is unbounded.
    pub node_limit: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            exploration: ExplorationOrder::DepthFirst,
            node_limit: Some(100_000),
        }
    }
}

/// Counters collected over one [`ScheduleSearch::solve`] run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// States popped and expanded.
    pub expanded: u64,
    /// Children produced by those expansions.
    pub generated: u64,
    /// Expansions that produced no children.
    pub dead_ends: u64,
    /// Largest frontier seen.
    pub peak_frontier: usize,
}

/// Why a [`ScheduleSearch::solve`] run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A goal state was reached.
    Solved,
    /// The frontier emptied: no assignment exists under the given
    /// exploration order's tree (and so under any, since the tree is
    /// the same).
    Exhausted,
    /// The expansion budget ran out first; the problem may or may not
    /// be solvable.
    NodeLimit,
}

/// The outcome of one [`ScheduleSearch::solve`] run.
#[derive(Debug)]
pub struct SearchResult {
    /// The goal state, when one was found.
    pub solution: Option<ScheduleState>,
    /// Why the run stopped.
    pub termination: Termination,
    /// Work counters for the run.
    pub stats: SearchStats,
}

/// Frontier-based solver over [`ScheduleState`] nodes.
///
/// Holds the frontier discipline, the expansion budget, and the
/// branch-ordering strategy. `solve` takes `&mut self` because
/// randomized orders advance their generator between expansions.
pub struct ScheduleSearch {
    config: SearchConfig,
    order: Box<dyn BranchOrder>,
}

impl ScheduleSearch {
    /// Depth-first, stable branch order, default budget.
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
            order: Box::new(StableOrder),
        }
    }

    /// Replaces the whole config.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the frontier discipline.
    pub fn with_exploration(mut self, exploration: ExplorationOrder) -> Self {
        self.config.exploration = exploration;
        self
    }

    /// Sets the expansion budget; `None` removes it.
    pub fn with_node_limit(mut self, node_limit: Option<u64>) -> Self {
        self.config.node_limit = node_limit;
        self
    }

    /// Sets the branch-ordering strategy.
    pub fn with_branch_order(mut self, order: impl BranchOrder + 'static) -> Self {
        self.order = Box::new(order);
        self
    }

    /// The active config.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Explores from `initial` until a goal is popped, the frontier
    /// empties, or the expansion budget runs out.
    pub fn solve(&mut self, initial: ScheduleState) -> SearchResult {
        info!(
            exploration = %self.config.exploration,
            order = self.order.name(),
            shifts = initial.unassigned_count(),
            roster = initial.roster().len(),
            "searching"
        );
        let mut frontier: VecDeque<ScheduleState> = VecDeque::new();
        frontier.push_back(initial);
        let mut stats = SearchStats {
            peak_frontier: 1,
            ..SearchStats::default()
        };

        while let Some(state) = self.pop(&mut frontier) {
            if state.is_goal() {
                info!(expanded = stats.expanded, "schedule complete");
                return SearchResult {
                    solution: Some(state),
                    termination: Termination::Solved,
                    stats,
                };
            }
            if let Some(limit) = self.config.node_limit {
                if stats.expanded >= limit {
                    debug!(limit, "expansion budget exhausted");
                    return SearchResult {
                        solution: None,
                        termination: Termination::NodeLimit,
                        stats,
                    };
                }
            }
            stats.expanded += 1;
            let children = state.expand_with(self.order.as_mut());
            if children.is_empty() {
                stats.dead_ends += 1;
                debug!(remaining = state.unassigned_count(), "dead end");
            }
            stats.generated += children.len() as u64;
            self.push(&mut frontier, children);
            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        }

        debug!(expanded = stats.expanded, "search space exhausted");
        SearchResult {
            solution: None,
            termination: Termination::Exhausted,
            stats,
        }
    }

    fn pop(&self, frontier: &mut VecDeque<ScheduleState>) -> Option<ScheduleState> {
        match self.config.exploration {
            ExplorationOrder::DepthFirst => frontier.pop_back(),
            ExplorationOrder::BreadthFirst => frontier.pop_front(),
        }
    }

    /// Depth-first pops from the back, so children go in reversed to
    /// keep the arranged visiting order.
    fn push(&self, frontier: &mut VecDeque<ScheduleState>, children: Vec<ScheduleState>) {
        match self.config.exploration {
            ExplorationOrder::DepthFirst => frontier.extend(children.into_iter().rev()),
            ExplorationOrder::BreadthFirst => frontier.extend(children),
        }
    }
}

impl Default for ScheduleSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ScheduleSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduleSearch")
            .field("config", &self.config)
            .field("order", &self.order.name())
            .finish()
    }
}
