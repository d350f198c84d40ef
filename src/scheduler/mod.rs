//! Backtracking roster search and KPI evaluation.
//!
//! `BacktrackScheduler` fills the weekly grid by depth-first chronological
//! backtracking with a preference-greedy candidate ordering; `RosterKpi`
//! computes quality metrics from the result.
//!
//! The search is first-fit: it stops at the first complete feasible roster
//! under its deterministic ordering and makes no attempt to maximize overall
//! preference satisfaction.

mod backtracking;
mod kpi;
mod state;

pub use backtracking::{
    BacktrackScheduler, SolveError, DEFAULT_MAX_DAYS_PER_WEEK, DEFAULT_SHIFT_CAPACITY,
};
pub use kpi::RosterKpi;
