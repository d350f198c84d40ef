//! Fixed day and shift domains.
//!
//! The roster grid is defined over exactly seven days and three shifts per
//! day. Both domains are process-wide constants: their declaration order
//! fixes search traversal order and output key order, and nothing mutates
//! them. `Ord` follows declaration order so ordered maps iterate the week
//! in calendar order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// A shift within a day.
///
/// Serialized with lowercase names (`"morning"` etc.), matching the JSON
/// boundary format consumed by external loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

impl Day {
    /// All days in week order. Fixes iteration order everywhere.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Number of days in the grid.
    pub const COUNT: usize = 7;

    /// Position within [`Day::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire/display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl Shift {
    /// All shifts in within-day order.
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Evening];

    /// Number of shifts per day.
    pub const COUNT: usize = 3;

    /// Position within [`Shift::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire/display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Shift::Morning => "morning",
            Shift::Afternoon => "afternoon",
            Shift::Evening => "evening",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_order() {
        assert_eq!(Day::ALL.len(), Day::COUNT);
        assert_eq!(Day::ALL[0], Day::Monday);
        assert_eq!(Day::ALL[6], Day::Sunday);
        for (i, day) in Day::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
        }
        assert!(Day::Monday < Day::Sunday);
    }

    #[test]
    fn test_shift_order() {
        assert_eq!(Shift::ALL.len(), Shift::COUNT);
        assert_eq!(Shift::ALL[0], Shift::Morning);
        assert_eq!(Shift::ALL[2], Shift::Evening);
        assert!(Shift::Morning < Shift::Evening);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Day::Wednesday.to_string(), "Wednesday");
        assert_eq!(Shift::Afternoon.to_string(), "afternoon");
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(serde_json::to_string(&Day::Monday).unwrap(), "\"Monday\"");
        assert_eq!(serde_json::to_string(&Shift::Evening).unwrap(), "\"evening\"");

        let shift: Shift = serde_json::from_str("\"morning\"").unwrap();
        assert_eq!(shift, Shift::Morning);
        assert!(serde_json::from_str::<Shift>("\"night\"").is_err());
        assert!(serde_json::from_str::<Day>("\"Funday\"").is_err());
    }
}
