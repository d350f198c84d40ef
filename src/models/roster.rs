//! Roster (solution) model.
//!
//! A roster is the week grid: every day maps to every shift, and each shift
//! holds the ordered names assigned to it. All 21 day/shift slots exist from
//! construction, so an empty roster still serializes with the full key set.
//! Ordered maps keyed by `Day`/`Shift` keep serialization in calendar order,
//! which makes output byte-stable for identical inputs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Day, Shift};

/// A weekly roster: day → shift → ordered assignee names.
///
/// Invariants maintained by the scheduler:
/// - each slot holds at most the configured capacity of names;
/// - no name appears twice within a slot (an employee already scheduled that
///   day is never eligible again);
/// - on a successful solve every slot holds exactly the capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    days: BTreeMap<Day, BTreeMap<Shift, Vec<String>>>,
}

impl Roster {
    /// Creates an empty roster with every day/shift slot present.
    pub fn new() -> Self {
        let mut days = BTreeMap::new();
        for day in Day::ALL {
            let mut shifts = BTreeMap::new();
            for shift in Shift::ALL {
                shifts.insert(shift, Vec::new());
            }
            days.insert(day, shifts);
        }
        Self { days }
    }

    /// Names assigned to a slot, in assignment order.
    pub fn assignees(&self, day: Day, shift: Shift) -> &[String] {
        self.days
            .get(&day)
            .and_then(|shifts| shifts.get(&shift))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Appends a name to a slot.
    pub(crate) fn assign(&mut self, day: Day, shift: Shift, name: impl Into<String>) {
        self.days
            .entry(day)
            .or_default()
            .entry(shift)
            .or_default()
            .push(name.into());
    }

    /// Removes the most recently assigned name from a slot.
    ///
    /// Exact inverse of [`Roster::assign`]; the backtracking undo path.
    pub(crate) fn unassign(&mut self, day: Day, shift: Shift) -> Option<String> {
        self.days
            .get_mut(&day)
            .and_then(|shifts| shifts.get_mut(&shift))
            .and_then(Vec::pop)
    }

    /// Total number of assignments across all slots.
    pub fn assignment_count(&self) -> usize {
        self.days
            .values()
            .flat_map(|shifts| shifts.values())
            .map(Vec::len)
            .sum()
    }

    /// Whether a slot holds its full capacity of names.
    pub fn is_filled(&self, day: Day, shift: Shift, capacity: usize) -> bool {
        self.assignees(day, shift).len() == capacity
    }

    /// Whether every slot holds its full capacity of names.
    pub fn is_complete(&self, capacity: usize) -> bool {
        Day::ALL
            .iter()
            .all(|&day| Shift::ALL.iter().all(|&shift| self.is_filled(day, shift, capacity)))
    }

    /// Days on which the named employee appears, in week order.
    pub fn days_for(&self, name: &str) -> Vec<Day> {
        Day::ALL
            .iter()
            .copied()
            .filter(|&day| {
                Shift::ALL
                    .iter()
                    .any(|&shift| self.assignees(day, shift).iter().any(|n| n == name))
            })
            .collect()
    }

    /// Number of slots containing the named employee.
    pub fn slot_count_for(&self, name: &str) -> usize {
        self.days
            .values()
            .flat_map(|shifts| shifts.values())
            .filter(|names| names.iter().any(|n| n == name))
            .count()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
