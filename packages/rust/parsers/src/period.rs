//! Row label → starting period lookup.

/// Fixed mapping from a grid row's label text to the first period it covers.
///
/// Each institution parser owns one of these as a `const`; labels are
/// compared verbatim after whitespace normalization.
#[derive(Debug, Clone, Copy)]
pub struct PeriodLabels {
    entries: &'static [(&'static str, u32)],
}

impl PeriodLabels {
    pub const fn new(entries: &'static [(&'static str, u32)]) -> Self {
        Self { entries }
    }

    /// Starting period for `label`, or `None` if the label is not in the table.
    pub fn resolve(&self, label: &str) -> Option<u32> {
        let label = label.trim();
        self.entries
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, start)| *start)
    }

    /// All known labels with their starting periods.
    pub fn entries(&self) -> &'static [(&'static str, u32)] {
        self.entries
    }
}
