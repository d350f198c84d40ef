//! Rostering domain models.
//!
//! Core data types for the weekly shift rostering problem: the fixed
//! day/shift domains, the employee input records, and the roster solution
//! grid. Inputs are immutable during search; the roster is mutated only by
//! the scheduler and exposed read-only afterwards.

mod calendar;
mod employee;
mod roster;

pub use calendar::{Day, Shift};
pub use employee::Employee;
pub use roster::Roster;
