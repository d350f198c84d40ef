//! Mutable search state with exact undo.
//!
//! The backtracking engine owns one `SearchState` for the lifetime of a
//! solve: the partially filled roster plus per-employee bookkeeping (days
//! worked so far, which days are already taken). `assign` and `undo` are
//! exact inverses, so a failed branch restores the state byte-for-byte
//! before the next candidate is tried.

use crate::models::{Day, Employee, Roster, Shift};

/// Search state for one solve: roster under construction plus per-employee
/// counters, indexed parallel to the input employee slice.
///
/// Invariant: `days_worked[i]` equals the number of `true` entries in
/// `scheduled[i]` at every point during search.
pub(crate) struct SearchState<'a> {
    employees: &'a [Employee],
    /// Days assigned so far, per employee.
    days_worked: Vec<u8>,
    /// `scheduled[emp][day.index()]`: employee already holds a slot that day.
    scheduled: Vec<[bool; Day::COUNT]>,
    roster: Roster,
}

impl<'a> SearchState<'a> {
    pub(crate) fn new(employees: &'a [Employee]) -> Self {
        Self {
            employees,
            days_worked: vec![0; employees.len()],
            scheduled: vec![[false; Day::COUNT]; employees.len()],
            roster: Roster::new(),
        }
    }

    pub(crate) fn employee(&self, idx: usize) -> &Employee {
        &self.employees[idx]
    }

    /// Employee indices legal for a slot on `day`: under the weekly day cap
    /// and not yet scheduled that day. Returned in input order, which is the
    /// tie-break order for the candidate sort.
    pub(crate) fn eligible(&self, day: Day, max_days: u8) -> Vec<usize> {
        (0..self.employees.len())
            .filter(|&i| self.days_worked[i] < max_days && !self.scheduled[i][day.index()])
            .collect()
    }

    /// Tentatively assigns an employee to a slot.
    pub(crate) fn assign(&mut self, idx: usize, day: Day, shift: Shift) {
        debug_assert!(!self.scheduled[idx][day.index()]);
        self.roster.assign(day, shift, self.employees[idx].name.clone());
        self.days_worked[idx] += 1;
        self.scheduled[idx][day.index()] = true;
    }

    /// Reverts the most recent [`SearchState::assign`] for this slot.
    pub(crate) fn undo(&mut self, idx: usize, day: Day, shift: Shift) {
        debug_assert!(self.scheduled[idx][day.index()]);
        self.roster.unassign(day, shift);
        self.days_worked[idx] -= 1;
        self.scheduled[idx][day.index()] = false;
    }

    pub(crate) fn into_roster(self) -> Roster {
        self.roster
    }

    #[cfg(test)]
    fn snapshot(&self) -> (Vec<u8>, Vec<[bool; Day::COUNT]>, Roster) {
        (
            self.days_worked.clone(),
            self.scheduled.clone(),
            self.roster.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Employee> {
        vec![
            Employee::new("Ada").with_same_preference(Shift::Morning),
            Employee::new("Grace").with_same_preference(Shift::Evening),
            Employee::new("Edsger").with_same_preference(Shift::Afternoon),
        ]
    }

    #[test]
    fn test_eligible_filters_day_and_cap() {
        let employees = pool();
        let mut state = SearchState::new(&employees);
        assert_eq!(state.eligible(Day::Monday, 5), vec![0, 1, 2]);

        state.assign(0, Day::Monday, Shift::Morning);
        // Ada is scheduled on Monday, but still eligible elsewhere.
        assert_eq!(state.eligible(Day::Monday, 5), vec![1, 2]);
        assert_eq!(state.eligible(Day::Tuesday, 5), vec![0, 1, 2]);

        // Cap of 1 excludes Ada everywhere once she has worked a day.
        assert_eq!(state.eligible(Day::Tuesday, 1), vec![1, 2]);
    }

    #[test]
    fn test_assign_updates_bookkeeping() {
        let employees = pool();
        let mut state = SearchState::new(&employees);
        state.assign(1, Day::Friday, Shift::Evening);

        assert_eq!(state.days_worked, vec![0, 1, 0]);
        assert!(state.scheduled[1][Day::Friday.index()]);
        assert_eq!(
            state.into_roster().assignees(Day::Friday, Shift::Evening),
            ["Grace"]
        );
    }

    #[test]
    fn test_undo_restores_exactly() {
        let employees = pool();
        let mut state = SearchState::new(&employees);
        state.assign(0, Day::Monday, Shift::Morning);
        let before = state.snapshot();

        // A failed branch: assign then undo must restore the exact state.
        state.assign(2, Day::Monday, Shift::Morning);
        state.undo(2, Day::Monday, Shift::Morning);

        let after = state.snapshot();
        assert_eq!(before.0, after.0);
        assert_eq!(before.1, after.1);
        assert_eq!(before.2, after.2);
    }

    #[test]
    fn test_days_worked_matches_scheduled_count() {
        let employees = pool();
        let mut state = SearchState::new(&employees);
        state.assign(0, Day::Monday, Shift::Morning);
        state.assign(0, Day::Tuesday, Shift::Evening);
        state.assign(0, Day::Sunday, Shift::Afternoon);
        state.undo(0, Day::Tuesday, Shift::Evening);

        let marked = state.scheduled[0].iter().filter(|&&b| b).count();
        assert_eq!(state.days_worked[0] as usize, marked);
        assert_eq!(marked, 2);
    }
}
