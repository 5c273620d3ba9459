//! Period clock-time tables.

use coursegrid_shared::TimePeriod;

/// An institution's named list of period clock times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeTable {
    /// Label of the institution or campus.
    pub name: String,
    /// Periods ordered by index, starting at 1.
    pub periods: Vec<TimePeriod>,
}

impl TimeTable {
    /// Build a table from `(start, end)` clock pairs given in period order.
    pub fn from_pairs(name: impl Into<String>, pairs: &[(&str, &str)]) -> Self {
        let mut builder = TimeTableBuilder::new(name);
        for (start, end) in pairs {
            builder.add(start, end);
        }
        builder.build()
    }
}

/// Assigns period indices sequentially as clock pairs are added.
#[derive(Debug)]
pub struct TimeTableBuilder {
    name: String,
    periods: Vec<TimePeriod>,
}

impl TimeTableBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            periods: Vec::new(),
        }
    }

    /// Append the next period.
    pub fn add(&mut self, start_clock: &str, end_clock: &str) -> &mut Self {
        let index = self.periods.len() as u32 + 1;
        self.periods.push(TimePeriod {
            index,
            start_clock: start_clock.to_string(),
            end_clock: end_clock.to_string(),
        });
        self
    }

    pub fn build(self) -> TimeTable {
        TimeTable {
            name: self.name,
            periods: self.periods,
        }
    }
}
