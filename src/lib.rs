//! Weekly shift rostering over a fixed day/shift grid.
//!
//! Assigns employees to a week of shift slots (7 days × 3 shifts × a fixed
//! number of people per shift) subject to hard constraints — a weekly day cap
//! per employee and at most one shift per employee per day — producing a
//! complete feasible roster or reporting infeasibility.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, `Shift`, `Employee`, `Roster`
//! - **`validation`**: Input integrity checks (duplicate names, preference coverage)
//! - **`scheduler`**: Backtracking search engine and roster quality metrics
//! - **`io`**: JSON boundary helpers for external loaders/writers
//!
//! # Algorithm
//!
//! The engine is a depth-first chronological backtracking search with a
//! preference-greedy candidate ordering. It returns the *first* feasible
//! roster found under that ordering — deliberately not a preference-maximizing
//! search; see [`scheduler::BacktrackScheduler`] for the consequences.
//!
//! # References
//!
//! - Russell & Norvig (2021), "Artificial Intelligence", Ch. 6 (CSPs)
//! - Golomb & Baumert (1965), "Backtrack Programming", JACM 12(4)

pub mod io;
pub mod models;
pub mod scheduler;
pub mod validation;
