//! Roster quality metrics (KPIs).
//!
//! Computes reporting indicators from a completed roster and its input
//! employees. Read-only: the search never consults these.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Filled Slots | Total assignments across the grid |
//! | Preference Hit Rate | Fraction of assignments matching the employee's stated preference |
//! | Slots per Employee | Assignment count by name |
//! | Min/Max Days | Lightest and heaviest weekly load |

use std::collections::HashMap;

use crate::models::{Day, Employee, Roster, Shift};

/// Roster performance indicators.
#[derive(Debug, Clone)]
pub struct RosterKpi {
    /// Total assignments across all slots.
    pub filled_slots: usize,
    /// Fraction of assignments where the shift matches the employee's stated
    /// preference for that day (0.0..1.0; 1.0 for an empty roster).
    pub preference_hit_rate: f64,
    /// Assignment count per employee name.
    pub slots_per_employee: HashMap<String, usize>,
    /// Fewest days worked by any employee in the pool.
    pub min_days: usize,
    /// Most days worked by any employee in the pool.
    pub max_days: usize,
}

impl RosterKpi {
    /// Computes KPIs from a roster and the employee pool that produced it.
    pub fn calculate(roster: &Roster, employees: &[Employee]) -> Self {
        let by_name: HashMap<&str, &Employee> =
            employees.iter().map(|e| (e.name.as_str(), e)).collect();

        let mut filled = 0usize;
        let mut hits = 0usize;
        let mut slots_per_employee: HashMap<String, usize> = HashMap::new();

        for day in Day::ALL {
            for shift in Shift::ALL {
                for name in roster.assignees(day, shift) {
                    filled += 1;
                    *slots_per_employee.entry(name.clone()).or_insert(0) += 1;
                    if by_name
                        .get(name.as_str())
                        .is_some_and(|emp| emp.prefers(day, shift))
                    {
                        hits += 1;
                    }
                }
            }
        }

        let preference_hit_rate = if filled == 0 {
            1.0
        } else {
            hits as f64 / filled as f64
        };

        let day_counts: Vec<usize> = employees
            .iter()
            .map(|e| roster.days_for(&e.name).len())
            .collect();

        Self {
            filled_slots: filled,
            preference_hit_rate,
            slots_per_employee,
            min_days: day_counts.iter().copied().min().unwrap_or(0),
            max_days: day_counts.iter().copied().max().unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::BacktrackScheduler;

    #[test]
    fn test_empty_roster() {
        let kpi = RosterKpi::calculate(&Roster::new(), &[]);
        assert_eq!(kpi.filled_slots, 0);
        assert!((kpi.preference_hit_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.min_days, 0);
        assert_eq!(kpi.max_days, 0);
    }

    #[test]
    fn test_counts_and_hit_rate() {
        let employees = vec![
            Employee::new("Ada").with_same_preference(Shift::Morning),
            Employee::new("Grace").with_same_preference(Shift::Evening),
        ];
        let mut roster = Roster::new();
        roster.assign(Day::Monday, Shift::Morning, "Ada"); // hit
        roster.assign(Day::Monday, Shift::Morning, "Grace"); // miss
        roster.assign(Day::Tuesday, Shift::Evening, "Grace"); // hit

        let kpi = RosterKpi::calculate(&roster, &employees);
        assert_eq!(kpi.filled_slots, 3);
        assert!((kpi.preference_hit_rate - 2.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.slots_per_employee["Ada"], 1);
        assert_eq!(kpi.slots_per_employee["Grace"], 2);
        assert_eq!(kpi.min_days, 1);
        assert_eq!(kpi.max_days, 2);
    }

    #[test]
    fn test_solved_roster_respects_cap() {
        let employees: Vec<Employee> = (0..14)
            .map(|i| Employee::new(format!("emp-{i}")).with_same_preference(Shift::Morning))
            .collect();
        let roster = BacktrackScheduler::new().solve(&employees).unwrap();

        let kpi = RosterKpi::calculate(&roster, &employees);
        assert_eq!(kpi.filled_slots, 42);
        assert!(kpi.max_days <= 5);
        // Everyone prefers morning; only 14 of 42 slots are mornings.
        assert!((kpi.preference_hit_rate - 14.0 / 42.0).abs() < 1e-10);
    }
}
