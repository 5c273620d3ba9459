//! Institution parser trait and built-in parsers.
//!
//! Each supported portal gets one parser. A parser knows its own grid markup
//! conventions and its fixed period clock times; the caller picks one by id.

mod gxic;

use coursegrid_shared::{CourseGridError, CourseSession, Result, Schedule};
use scraper::Html;
use tracing::{info, instrument};

use crate::time_table::TimeTable;

pub use gxic::GxicParser;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Trait for institution-specific timetable decoding.
pub trait InstitutionParser: Send + Sync {
    /// Short, stable identifier used for selection (e.g. `gxic`).
    fn id(&self) -> &str;

    /// Decode every course session in the document.
    fn generate_sessions(&self, doc: &Html) -> Vec<CourseSession>;

    /// The institution's fixed period clock times.
    fn generate_time_table(&self) -> TimeTable;
}

/// Run `parser` over one page of markup.
///
/// Infallible: a page without a timetable gives a schedule with the
/// institution's period table and no sessions.
#[instrument(skip_all, fields(institution = parser.id(), len = source.len()))]
pub fn parse_schedule(parser: &dyn InstitutionParser, source: &str) -> Schedule {
    let doc = Html::parse_document(source);
    let sessions = parser.generate_sessions(&doc);
    let time_table = parser.generate_time_table();

    info!(
        sessions = sessions.len(),
        periods = time_table.periods.len(),
        "timetable decoded"
    );

    Schedule {
        institution: time_table.name,
        periods: time_table.periods,
        sessions,
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Holds the registered institution parsers.
pub struct ParserRegistry {
    parsers: Vec<Box<dyn InstitutionParser>>,
}

impl ParserRegistry {
    /// Create a registry with all built-in parsers.
    pub fn new() -> Self {
        Self {
            parsers: vec![Box::new(GxicParser)],
        }
    }

    /// Look up a parser by id (case-insensitive).
    pub fn get(&self, id: &str) -> Result<&dyn InstitutionParser> {
        self.parsers
            .iter()
            .find(|p| p.id().eq_ignore_ascii_case(id))
            .map(|p| p.as_ref())
            .ok_or_else(|| CourseGridError::unknown_institution(id))
    }

    /// All registered parsers, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn InstitutionParser> {
        self.parsers.iter().map(|p| p.as_ref())
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_finds_gxic() {
        let registry = ParserRegistry::new();
        assert_eq!(registry.get("gxic").expect("gxic").id(), "gxic");
        assert_eq!(registry.get("GXIC").expect("gxic").id(), "gxic");
    }

    #[test]
    fn registry_rejects_unknown_id() {
        let registry = ParserRegistry::new();
        let err = registry.get("nowhere").err().expect("lookup should fail");
        assert!(matches!(err, CourseGridError::UnknownInstitution { ref id } if id == "nowhere"));
    }

    #[test]
    fn registry_lists_parsers() {
        let ids: Vec<String> = ParserRegistry::new()
            .iter()
            .map(|p| p.id().to_string())
            .collect();
        assert_eq!(ids, vec!["gxic"]);
    }
}
