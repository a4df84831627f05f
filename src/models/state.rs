//! Search-tree states for shift assignment.
//!
//! A [`ScheduleState`] is one node in the assignment search tree: the
//! queue of still-unassigned shifts plus the roster with everything
//! taken so far. States are immutable once built. Expansion derives
//! children as deep copies, so exploring one branch can never corrupt
//! a sibling or an ancestor, and nodes can be handed across threads
//! freely.
//!
//! # Search model
//!
//! Only the front shift of the queue is ever branched on; shifts
//! commit in strict queue order. Expansion yields one child per
//! eligible employee. No children means a dead end, which is the
//! surrounding driver's problem: frontier management and backtracking
//! live in [`crate::search`], not here.
//!
//! # Reference
//! Russell & Norvig (2021), "Artificial Intelligence: A Modern
//! Approach", Ch. 3: Solving Problems by Searching

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{error, trace};

use crate::branching::{BranchOrder, StableOrder};

use super::{Employee, Shift};

/// One node of the assignment search tree.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleState {
    unassigned: VecDeque<Shift>,
    roster: Vec<Employee>,
}

impl ScheduleState {
    /// Builds the root state from a roster and a demand list.
    ///
    /// Demand order is assignment order: the first shift in `demand`
    /// is the first one branched on. Inputs are assumed to have passed
    /// [`crate::validation::validate_input`].
    pub fn initial(roster: Vec<Employee>, demand: Vec<Shift>) -> Self {
        Self {
            unassigned: VecDeque::from(demand),
            roster,
        }
    }

    /// Whether every shift has been assigned.
    #[inline]
    pub fn is_goal(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// The shift the next expansion will branch on, if any.
    pub fn next_shift(&self) -> Option<&Shift> {
        self.unassigned.front()
    }

    /// Still-unassigned shifts, next-to-assign first.
    pub fn unassigned(&self) -> impl Iterator<Item = &Shift> {
        self.unassigned.iter()
    }

    /// Number of shifts still unassigned.
    #[inline]
    pub fn unassigned_count(&self) -> usize {
        self.unassigned.len()
    }

    /// The roster, in its original input order.
    pub fn roster(&self) -> &[Employee] {
        &self.roster
    }

    /// Looks up a roster member by name.
    pub fn employee(&self, name: &str) -> Option<&Employee> {
        self.roster.iter().find(|e| e.name() == name)
    }

    /// Total shifts held across the roster.
    pub fn assigned_count(&self) -> usize {
        self.roster.iter().map(Employee::assigned_count).sum()
    }

    /// Expands with the default stable roster order.
    ///
    /// See [`ScheduleState::expand_with`].
    pub fn expand(&self) -> Vec<ScheduleState> {
        self.expand_with(&mut StableOrder)
    }

    /// Produces every one-step successor of this state.
    ///
    /// Branches the front shift of the queue across the roster: one
    /// child per employee whose eligibility rules all pass, visited in
    /// the order `order` arranges them. Ordering shapes which branch a
    /// depth-first driver descends first; the set of children is the
    /// same for every ordering. An empty result on a non-goal state is
    /// a dead end.
    ///
    /// `self` is left untouched; every child deep-copies the queue and
    /// the roster.
    pub fn expand_with<O>(&self, order: &mut O) -> Vec<ScheduleState>
    where
        O: BranchOrder + ?Sized,
    {
        let Some(target) = self.unassigned.front() else {
            return Vec::new();
        };
        let mut children = Vec::new();
        for index in order.arrange(&self.roster) {
            // An out-of-range index from an ordering is skipped, not a panic.
            let Some(employee) = self.roster.get(index) else {
                continue;
            };
            match employee.eligibility(target) {
                Ok(()) => {
                    trace!(employee = employee.name(), shift = %target, "branch");
                    children.extend(self.child(index));
                }
                Err(reason) => {
                    trace!(employee = employee.name(), shift = %target, %reason, "skip");
                }
            }
        }
        children
    }

    /// Derives the child where the roster member at `index` takes the
    /// front shift. The caller has already checked eligibility, so a
    /// refusal here cannot normally happen; if it does, the child is
    /// dropped rather than emitted with the queue and roster out of
    /// step.
    fn child(&self, index: usize) -> Option<ScheduleState> {
        let mut unassigned = self.unassigned.clone();
        let shift = unassigned.pop_front()?;
        let mut roster = self.roster.clone();
        let employee = roster.get_mut(index)?;
        if let Err(violation) = employee.take(shift) {
            error!(%violation, "refusing to emit an inconsistent child state");
            return None;
        }
        Some(ScheduleState { unassigned, roster })
    }
}
