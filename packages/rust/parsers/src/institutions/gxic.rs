//! Guangxi Industrial Vocational and Technical College (广西工职院) parser.
//!
//! The portal renders the week grid as the page's `table[border="1"]`. Each
//! row is a two-period block labeled `第0102节`, `第0304节`, …; each course is
//! an `<a>` whose `title` lists name, teacher, room and weeks on separate lines.

use std::sync::LazyLock;

use coursegrid_shared::CourseSession;
use scraper::{Html, Selector};

use super::InstitutionParser;
use crate::annotation::FieldAnchors;
use crate::decode::{GridConvention, decode_grid};
use crate::period::PeriodLabels;
use crate::time_table::TimeTable;

static TIMETABLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"table[border="1"]"#).expect("timetable selector"));

static LINK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("link selector"));

const PERIOD_LABELS: PeriodLabels = PeriodLabels::new(&[
    ("第0102节", 1),
    ("第0304节", 3),
    ("第0506节", 5),
    ("第0708节", 7),
    ("第0910节", 9),
]);

const ANCHORS: FieldAnchors = FieldAnchors {
    name: "课程名称：",
    teacher: "授课教师：",
    room: "开课地点：",
    weeks: "上课周次：",
};

/// Wuming campus period times.
const CAMPUS: &str = "广西工职院武鸣三校区";
const CLOCK_TIMES: [(&str, &str); 10] = [
    ("08:40", "09:20"),
    ("09:30", "10:10"),
    ("10:30", "11:10"),
    ("11:20", "12:00"),
    ("14:30", "15:10"),
    ("15:20", "16:00"),
    ("16:10", "16:50"),
    ("17:00", "17:40"),
    ("19:40", "20:20"),
    ("20:30", "21:10"),
];

/// Parser for the GXIC course-management portal.
pub struct GxicParser;

impl InstitutionParser for GxicParser {
    fn id(&self) -> &str {
        "gxic"
    }

    fn generate_sessions(&self, doc: &Html) -> Vec<CourseSession> {
        let convention = GridConvention {
            timetable: &TIMETABLE_SEL,
            links: &LINK_SEL,
            annotation_attr: "title",
            period_labels: PERIOD_LABELS,
            anchors: ANCHORS,
        };
        decode_grid(doc, &convention)
    }

    fn generate_time_table(&self) -> TimeTable {
        TimeTable::from_pairs(CAMPUS, &CLOCK_TIMES)
    }
}
