//! Employee model.
//!
//! An employee is an immutable scheduling input: a unique name plus a stated
//! shift preference for each day of the week. The mutable bookkeeping the
//! search needs (days worked so far, days already assigned) lives in the
//! scheduler's search state, not here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Day, Shift};

/// An employee available for rostering.
///
/// `preferences` should cover all seven days — the search treats a preference
/// match as a soft ordering hint, and validation rejects incomplete maps
/// before search begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee name, used as the key in roster output.
    pub name: String,
    /// Preferred shift per day.
    pub preferences: HashMap<Day, Shift>,
}

impl Employee {
    /// Creates an employee with no preferences stated yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferences: HashMap::new(),
        }
    }

    /// States a preference for one day.
    pub fn with_preference(mut self, day: Day, shift: Shift) -> Self {
        self.preferences.insert(day, shift);
        self
    }

    /// States the same preferred shift for every day of the week.
    pub fn with_same_preference(mut self, shift: Shift) -> Self {
        for day in Day::ALL {
            self.preferences.insert(day, shift);
        }
        self
    }

    /// The stated preference for a day, if any.
    pub fn preference_for(&self, day: Day) -> Option<Shift> {
        self.preferences.get(&day).copied()
    }

    /// Whether this employee prefers the given shift on the given day.
    pub fn prefers(&self, day: Day, shift: Shift) -> bool {
        self.preference_for(day) == Some(shift)
    }

    /// Whether a preference is stated for every day of the week.
    pub fn has_complete_preferences(&self) -> bool {
        Day::ALL.iter().all(|day| self.preferences.contains_key(day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let emp = Employee::new("Ada")
            .with_preference(Day::Monday, Shift::Morning)
            .with_preference(Day::Tuesday, Shift::Evening);
        assert_eq!(emp.name, "Ada");
        assert_eq!(emp.preference_for(Day::Monday), Some(Shift::Morning));
        assert_eq!(emp.preference_for(Day::Wednesday), None);
    }

    #[test]
    fn test_prefers() {
        let emp = Employee::new("Ada").with_preference(Day::Friday, Shift::Afternoon);
        assert!(emp.prefers(Day::Friday, Shift::Afternoon));
        assert!(!emp.prefers(Day::Friday, Shift::Morning));
        assert!(!emp.prefers(Day::Saturday, Shift::Afternoon));
    }

    #[test]
    fn test_complete_preferences() {
        let partial = Employee::new("Ada").with_preference(Day::Monday, Shift::Morning);
        assert!(!partial.has_complete_preferences());

        let full = Employee::new("Ada").with_same_preference(Shift::Evening);
        assert!(full.has_complete_preferences());
        assert!(full.prefers(Day::Sunday, Shift::Evening));
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "name": "Ada",
            "preferences": {
                "Monday": "morning",
                "Tuesday": "evening"
            }
        }"#;
        let emp: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(emp.name, "Ada");
        assert!(emp.prefers(Day::Monday, Shift::Morning));
        assert!(emp.prefers(Day::Tuesday, Shift::Evening));
    }
}
