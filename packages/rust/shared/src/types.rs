//! Core domain types for decoded class schedules.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// WeekParity
// ---------------------------------------------------------------------------

/// Which weeks inside a session's week range the session actually meets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekParity {
    /// Every week in range.
    #[default]
    All,
    /// Odd-numbered weeks only.
    Odd,
    /// Even-numbered weeks only.
    Even,
}

impl WeekParity {
    /// Whether `week` matches this parity.
    pub fn includes(self, week: u32) -> bool {
        match self {
            Self::All => true,
            Self::Odd => week % 2 == 1,
            Self::Even => week % 2 == 0,
        }
    }
}

impl std::fmt::Display for WeekParity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::Odd => "odd",
            Self::Even => "even",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// CourseSession
// ---------------------------------------------------------------------------

/// One course meeting on one weekday, over a week range, in a period block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSession {
    /// Course title (empty when the source omits it).
    pub name: String,
    /// Instructor name.
    pub teacher: String,
    /// Location.
    pub room: String,
    /// 1-based grid column.
    pub weekday: u32,
    /// First period of the block (1-based).
    pub start_period: u32,
    /// Last period of the block (1-based, inclusive).
    pub end_period: u32,
    /// First week of term; 0 means the source value could not be read.
    pub start_week: u32,
    /// Last week of term (inclusive); 0 means unknown.
    pub end_week: u32,
    /// Odd/even restriction within `[start_week, end_week]`.
    pub week_parity: WeekParity,
}

impl CourseSession {
    /// Concrete week numbers this session meets in, honoring parity.
    ///
    /// Lazy; bounds are unvalidated `u32`s. Yields nothing when either bound
    /// is unknown (0) or the range is inverted.
    pub fn weeks(&self) -> impl Iterator<Item = u32> + '_ {
        let range = if self.start_week == 0 || self.end_week == 0 {
            1..=0
        } else {
            self.start_week..=self.end_week
        };
        range.filter(|w| self.week_parity.includes(*w))
    }
}

// ---------------------------------------------------------------------------
// TimePeriod
// ---------------------------------------------------------------------------

/// Clock-time bounds of one teaching period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePeriod {
    /// 1-based period number.
    pub index: u32,
    /// Start time, `HH:MM`.
    pub start_clock: String,
    /// End time, `HH:MM`.
    pub end_clock: String,
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

/// Everything decoded from one timetable page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Label of the institution (or campus) the time table belongs to.
    pub institution: String,
    /// Period clock times, ordered by index.
    pub periods: Vec<TimePeriod>,
    /// Decoded sessions, in document order. Duplicates are allowed.
    pub sessions: Vec<CourseSession>,
}
