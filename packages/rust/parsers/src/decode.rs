//! Grid → session decoding, shared by every institution parser.
//!
//! Institutions differ only in the markup conventions captured by
//! [`GridConvention`]; the walk itself is always the same:
//! locate grid → resolve row label → decode cell annotations → expand weeks.

use coursegrid_shared::CourseSession;
use scraper::{Html, Selector};
use tracing::debug;

use crate::annotation::{FieldAnchors, decode_cell};
use crate::grid::{data_rows, locate_grid};
use crate::period::PeriodLabels;
use crate::weeks::{SessionTemplate, expand};

/// Markup conventions of one institution's timetable page.
#[derive(Debug, Clone, Copy)]
pub struct GridConvention<'s> {
    /// Selects the timetable element; the first match wins.
    pub timetable: &'s Selector,
    /// Selects course links inside a cell.
    pub links: &'s Selector,
    /// Attribute on a course link holding the labeled annotation.
    pub annotation_attr: &'s str,
    /// Row label → starting period.
    pub period_labels: PeriodLabels,
    /// Field labels inside the annotation.
    pub anchors: FieldAnchors,
}

/// Decode all course sessions from `doc`.
///
/// Never fails: a missing grid yields no sessions, unknown rows and blank
/// annotations are skipped.
pub fn decode_grid(doc: &Html, convention: &GridConvention<'_>) -> Vec<CourseSession> {
    let Some(table) = locate_grid(doc, convention.timetable) else {
        debug!("no timetable element found");
        return Vec::new();
    };

    let mut sessions = Vec::new();

    for row in data_rows(table) {
        let Some(start_period) = convention.period_labels.resolve(&row.label) else {
            debug!(row = row.index, label = %row.label, "unrecognized period label, skipping row");
            continue;
        };

        for (weekday, cell) in row.weekday_cells() {
            for fields in decode_cell(
                cell,
                convention.links,
                convention.annotation_attr,
                &convention.anchors,
            ) {
                let template = SessionTemplate {
                    name: fields.name.unwrap_or_default(),
                    teacher: fields.teacher.unwrap_or_default(),
                    room: fields.room.unwrap_or_default(),
                    weekday,
                    start_period,
                };
                let weeks = fields.weeks.unwrap_or_default();
                let expanded = expand(&template, &weeks);

                debug!(
                    row = row.index,
                    weekday,
                    course = %template.name,
                    weeks = %weeks,
                    sessions = expanded.len(),
                    "decoded annotation"
                );
                sessions.extend(expanded);
            }
        }
    }

    sessions
}
