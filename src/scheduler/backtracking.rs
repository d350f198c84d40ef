//! Depth-first backtracking roster search.
//!
//! # Algorithm
//!
//! 1. Traverse slots in a fixed order: days outermost, then shifts, then the
//!    slots within a shift.
//! 2. At each slot, collect eligible employees (under the weekly day cap,
//!    not already scheduled that day).
//! 3. Stable-sort candidates so those whose stated preference matches the
//!    current day/shift are tried first; input order breaks ties.
//! 4. First-fit: assign, recurse, and on failure undo exactly before trying
//!    the next candidate (chronological backtracking).
//!
//! # Complexity
//! Exponential in the worst case — the day cap and the one-shift-per-day rule
//! are the only pruning. Fast in practice for the fixed 42-slot grid with a
//! modest employee pool.
//!
//! # Reference
//! Golomb & Baumert (1965), "Backtrack Programming", JACM 12(4)

use tracing::{debug, trace};

use crate::models::{Day, Employee, Roster, Shift};
use crate::validation::{validate_employees, ValidationError};

use super::state::SearchState;

/// Default weekly day cap per employee.
pub const DEFAULT_MAX_DAYS_PER_WEEK: u8 = 5;

/// Default number of employees per shift.
pub const DEFAULT_SHIFT_CAPACITY: usize = 2;

/// Why a solve produced no roster.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolveError {
    /// No complete assignment satisfies the hard constraints. A normal
    /// outcome for over-constrained pools, not a crash condition.
    #[error("no feasible roster exists for this employee pool")]
    Infeasible,
    /// The input failed structural validation; search never started.
    #[error("input validation failed with {} error(s)", .0.len())]
    InvalidInput(Vec<ValidationError>),
}

/// Depth-first backtracking roster scheduler.
///
/// Fills the 7-day × 3-shift grid with `shift_capacity` employees per shift,
/// honoring the weekly day cap and at most one shift per employee per day.
///
/// Returns the *first* feasible roster found under the preference-greedy
/// candidate ordering. This is a deliberate simplification, not a bug: the
/// search biases toward preference matches at each choice point but does not
/// maximize overall preference satisfaction, and changing that would change
/// observable output for ambiguous inputs.
///
/// # Example
///
/// ```
/// use shift_roster::models::Shift;
/// use shift_roster::models::Employee;
/// use shift_roster::scheduler::BacktrackScheduler;
///
/// let employees: Vec<Employee> = (0..14)
///     .map(|i| Employee::new(format!("emp-{i}")).with_same_preference(Shift::Morning))
///     .collect();
///
/// let roster = BacktrackScheduler::new().solve(&employees).unwrap();
/// assert!(roster.is_complete(2));
/// ```
#[derive(Debug, Clone)]
pub struct BacktrackScheduler {
    max_days_per_week: u8,
    shift_capacity: usize,
}

impl BacktrackScheduler {
    /// Creates a scheduler with the default caps (5 days/week, 2 per shift).
    pub fn new() -> Self {
        Self {
            max_days_per_week: DEFAULT_MAX_DAYS_PER_WEEK,
            shift_capacity: DEFAULT_SHIFT_CAPACITY,
        }
    }

    /// Sets the weekly day cap per employee.
    pub fn with_max_days_per_week(mut self, max_days: u8) -> Self {
        self.max_days_per_week = max_days;
        self
    }

    /// Sets the number of employees per shift.
    pub fn with_shift_capacity(mut self, capacity: usize) -> Self {
        self.shift_capacity = capacity;
        self
    }

    /// Solves the rostering problem for the given employee pool.
    ///
    /// Validates input first and fails fast on structural problems. Returns
    /// `Err(SolveError::Infeasible)` when no complete assignment exists; the
    /// partial roster explored along the way is discarded, never exposed.
    ///
    /// Deterministic: identical input (including employee order) always
    /// produces an identical roster.
    pub fn solve(&self, employees: &[Employee]) -> Result<Roster, SolveError> {
        validate_employees(employees).map_err(SolveError::InvalidInput)?;

        let total_slots = Day::COUNT * Shift::COUNT * self.shift_capacity;
        let pool_capacity = employees.len() * self.max_days_per_week as usize;
        let per_day_need = Shift::COUNT * self.shift_capacity;

        debug!(
            employees = employees.len(),
            total_slots,
            max_days = self.max_days_per_week,
            "starting roster search"
        );

        // Counting bounds: a pool that cannot cover the slot total, or a
        // single day's distinct-employee need, can never yield a roster.
        // Same outcome the search would reach by exhaustion.
        if pool_capacity < total_slots || employees.len() < per_day_need {
            debug!(pool_capacity, "pool cannot cover the grid; infeasible");
            return Err(SolveError::Infeasible);
        }

        let mut state = SearchState::new(employees);
        if self.fill(&mut state, 0, 0, 0) {
            let roster = state.into_roster();
            debug!(assignments = roster.assignment_count(), "roster complete");
            Ok(roster)
        } else {
            debug!("search space exhausted; infeasible");
            Err(SolveError::Infeasible)
        }
    }

    /// Fills the slot at `(day_idx, shift_idx, slot_idx)` and recurses.
    ///
    /// Returns `true` as soon as the remainder of the grid is filled; on
    /// `false` the state is exactly as it was on entry.
    fn fill(
        &self,
        state: &mut SearchState<'_>,
        day_idx: usize,
        shift_idx: usize,
        slot_idx: usize,
    ) -> bool {
        // All days assigned: the roster in hand is complete and feasible.
        if day_idx == Day::COUNT {
            return true;
        }

        // Shift full: pure control transition to the next shift or day.
        if slot_idx == self.shift_capacity {
            return if shift_idx + 1 < Shift::COUNT {
                self.fill(state, day_idx, shift_idx + 1, 0)
            } else {
                self.fill(state, day_idx + 1, 0, 0)
            };
        }

        let day = Day::ALL[day_idx];
        let shift = Shift::ALL[shift_idx];

        let mut candidates = state.eligible(day, self.max_days_per_week);
        // Stable sort: preference matches first, input order as tie-break.
        candidates.sort_by_key(|&i| !state.employee(i).prefers(day, shift));

        for idx in candidates {
            trace!(employee = %state.employee(idx).name, %day, %shift, "assign");
            state.assign(idx, day, shift);

            if self.fill(state, day_idx, shift_idx, slot_idx + 1) {
                return true;
            }

            state.undo(idx, day, shift);
            trace!(employee = %state.employee(idx).name, %day, %shift, "backtrack");
        }

        // No candidate works here; the caller must revise its own choice.
        false
    }
}

impl Default for BacktrackScheduler {
    fn default() -> Self {
        Self::new()
    }
}
