//! Course-link annotation decoding.
//!
//! Portals of this kind put every detail of a course into one attribute of
//! the course link, as labeled lines:
//!
//! ```text
//! 课程名称：高等数学
//! 授课教师：张老师
//! 开课地点：A101
//! 上课周次：1-16
//! ```
//!
//! [`extract_fields`] is the pure string half; [`decode_cell`] walks a grid
//! cell's links and applies it.

use scraper::{ElementRef, Selector};
use tracing::trace;

/// Label text preceding each field inside an annotation.
#[derive(Debug, Clone, Copy)]
pub struct FieldAnchors {
    pub name: &'static str,
    pub teacher: &'static str,
    pub room: &'static str,
    pub weeks: &'static str,
}

/// Fields read from one annotation. `None` means the anchor was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationFields {
    pub name: Option<String>,
    pub teacher: Option<String>,
    pub room: Option<String>,
    pub weeks: Option<String>,
}

/// Read every anchored field out of a raw annotation string.
pub fn extract_fields(raw: &str, anchors: &FieldAnchors) -> AnnotationFields {
    AnnotationFields {
        name: field_after(raw, anchors.name),
        teacher: field_after(raw, anchors.teacher),
        room: field_after(raw, anchors.room),
        weeks: field_after(raw, anchors.weeks),
    }
}

/// Text following the first `anchor`, up to the next line break, trimmed.
pub fn field_after(raw: &str, anchor: &str) -> Option<String> {
    let (_, after) = raw.split_once(anchor)?;
    let line = after.split('\n').next().unwrap_or_default();
    Some(line.trim().to_string())
}

/// Decode every non-blank annotation on the links inside `cell`.
///
/// `links` selects the annotated elements and `attr` names the attribute
/// carrying the labeled text. Links without the attribute, or with only
/// whitespace in it, are empty slots and yield nothing.
pub fn decode_cell(
    cell: ElementRef<'_>,
    links: &Selector,
    attr: &str,
    anchors: &FieldAnchors,
) -> Vec<AnnotationFields> {
    cell.select(links)
        .filter_map(|link| {
            let raw = link.value().attr(attr).unwrap_or_default();
            if raw.trim().is_empty() {
                trace!("blank annotation, skipping");
                return None;
            }
            Some(extract_fields(raw, anchors))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const ANCHORS: FieldAnchors = FieldAnchors {
        name: "Course:",
        teacher: "Teacher:",
        room: "Room:",
        weeks: "Weeks:",
    };

    #[test]
    fn extracts_all_fields() {
        let raw = "Course: Linear Algebra\nTeacher:  Dr. Noether \r\nRoom: B12\nWeeks: 1-16";
        let fields = extract_fields(raw, &ANCHORS);

        assert_eq!(fields.name.as_deref(), Some("Linear Algebra"));
        assert_eq!(fields.teacher.as_deref(), Some("Dr. Noether"));
        assert_eq!(fields.room.as_deref(), Some("B12"));
        assert_eq!(fields.weeks.as_deref(), Some("1-16"));
    }

    #[test]
    fn missing_anchor_is_none() {
        let fields = extract_fields("Course: Ethics\nWeeks: 3", &ANCHORS);
        assert_eq!(fields.name.as_deref(), Some("Ethics"));
        assert_eq!(fields.teacher, None);
        assert_eq!(fields.room, None);
        assert_eq!(fields.weeks.as_deref(), Some("3"));
    }

    #[test]
    fn anchor_on_last_line_reads_to_end() {
        assert_eq!(field_after("Room: Lab 4", "Room:"), Some("Lab 4".into()));
        assert_eq!(field_after("Room:", "Room:"), Some(String::new()));
    }

    #[test]
    fn decode_cell_skips_blank_annotations() {
        let html = Html::parse_fragment(
            "<table><tr><td>\
             <a title=\"Course: Ethics&#10;Weeks: 3\">Ethics</a>\
             <a title=\"   \">blank</a>\
             <a>no title</a>\
             <a title=\"Course: Logic\">Logic</a>\
             </td></tr></table>",
        );
        let td_sel = Selector::parse("td").expect("td selector");
        let a_sel = Selector::parse("a").expect("a selector");
        let cell = html.select(&td_sel).next().expect("cell");

        let decoded = decode_cell(cell, &a_sel, "title", &ANCHORS);
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].weeks.as_deref(), Some("3"));
        assert_eq!(decoded[1].name.as_deref(), Some("Logic"));
        assert_eq!(decoded[1].weeks, None);
    }
}
