//! Week-specification expansion.
//!
//! A week specification is compact term-week notation such as
//! `1-8,10-16单` or `2-16(双),5`. Each comma-separated token becomes one
//! [`CourseSession`]: `a-b` is a range, a bare number is a single week, and
//! `单` / `双` mark odd-only / even-only weeks.
//!
//! Unparsable bounds do not abort a token. The bound keeps whatever value it
//! held after the previous token of the same specification (0 before the
//! first), so malformed text can carry a stale week number forward.

use coursegrid_shared::{CourseSession, WeekParity};
use tracing::debug;

/// Token separator.
const TOKEN_SEP: char = ',';

/// Range separator inside a token.
const RANGE_SEP: char = '-';

/// Odd-weeks-only glyph.
const ODD_MARK: char = '单';

/// Even-weeks-only glyph.
const EVEN_MARK: char = '双';

/// Opening brackets that start a trailing parity annotation, e.g. `16(双)`.
const MARKER_OPEN: [char; 2] = ['(', '（'];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Week bounds decoded from one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub start: u32,
    pub end: u32,
    pub parity: WeekParity,
}

/// Per-annotation fields shared by every session a week specification expands into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTemplate {
    pub name: String,
    pub teacher: String,
    pub room: String,
    /// 1-based grid column.
    pub weekday: u32,
    /// First period of the two-period block.
    pub start_period: u32,
}

impl SessionTemplate {
    /// Materialize a session for one decoded week range.
    pub fn session(&self, weeks: WeekRange) -> CourseSession {
        CourseSession {
            name: self.name.clone(),
            teacher: self.teacher.clone(),
            room: self.room.clone(),
            weekday: self.weekday,
            start_period: self.start_period,
            end_period: self.start_period + 1,
            start_week: weeks.start,
            end_week: weeks.end,
            week_parity: weeks.parity,
        }
    }
}

// ---------------------------------------------------------------------------
// Expansion
// ---------------------------------------------------------------------------

/// Expand a raw week specification into one session per token.
pub fn expand(template: &SessionTemplate, spec: &str) -> Vec<CourseSession> {
    parse_week_spec(spec)
        .into_iter()
        .map(|weeks| template.session(weeks))
        .collect()
}

/// Decode every comma-separated token of `spec`, in order.
///
/// Always yields at least one range: an empty specification is a single
/// empty token, which resolves to `0..=0`.
pub fn parse_week_spec(spec: &str) -> Vec<WeekRange> {
    let mut start = 0;
    let mut end = 0;

    spec.split(TOKEN_SEP)
        .map(|token| {
            let token = token.trim();
            let parity;

            match token.split_once(RANGE_SEP) {
                Some((lower, rest)) => {
                    // Only the first two dash-separated pieces count.
                    let upper = rest.split(RANGE_SEP).next().unwrap_or_default();
                    start = parse_bound(lower.trim(), start, token);
                    end = parse_bound(&strip_parity_marker(upper), end, token);
                    parity = detect_parity(upper);
                }
                None => {
                    start = parse_bound(&strip_parity_marker(token), start, token);
                    end = start;
                    parity = detect_parity(token);
                }
            }

            WeekRange { start, end, parity }
        })
        .collect()
}

/// Parse a week numeral, keeping `previous` when it is not a number.
fn parse_bound(digits: &str, previous: u32, token: &str) -> u32 {
    match digits.parse() {
        Ok(week) => week,
        Err(_) => {
            debug!(token, fragment = digits, previous, "unparsable week bound, reusing previous value");
            previous
        }
    }
}

/// Drop a trailing `(...)` annotation and any parity glyphs.
fn strip_parity_marker(fragment: &str) -> String {
    let head = match fragment.find(MARKER_OPEN) {
        Some(pos) => &fragment[..pos],
        None => fragment,
    };
    head.chars()
        .filter(|c| *c != ODD_MARK && *c != EVEN_MARK)
        .collect::<String>()
        .trim()
        .to_string()
}

fn detect_parity(fragment: &str) -> WeekParity {
    if fragment.contains(ODD_MARK) {
        WeekParity::Odd
    } else if fragment.contains(EVEN_MARK) {
        WeekParity::Even
    } else {
        WeekParity::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u32, end: u32, parity: WeekParity) -> WeekRange {
        WeekRange { start, end, parity }
    }

    fn template() -> SessionTemplate {
        SessionTemplate {
            name: "大学英语".into(),
            teacher: "李老师".into(),
            room: "B203".into(),
            weekday: 3,
            start_period: 5,
        }
    }

    #[test]
    fn multi_token_with_odd_suffix() {
        assert_eq!(
            parse_week_spec("1-8,10-16单"),
            vec![range(1, 8, WeekParity::All), range(10, 16, WeekParity::Odd)]
        );
    }

    #[test]
    fn single_week() {
        assert_eq!(parse_week_spec("5"), vec![range(5, 5, WeekParity::All)]);
    }

    #[test]
    fn parenthesized_even_marker() {
        assert_eq!(parse_week_spec("2-16(双)"), vec![range(2, 16, WeekParity::Even)]);
        assert_eq!(parse_week_spec("1-15（单）"), vec![range(1, 15, WeekParity::Odd)]);
    }

    #[test]
    fn single_week_detects_parity() {
        assert_eq!(parse_week_spec("3单"), vec![range(3, 3, WeekParity::Odd)]);
        assert_eq!(parse_week_spec("4(双)"), vec![range(4, 4, WeekParity::Even)]);
    }

    #[test]
    fn unparsable_bounds_fall_back_to_zero_first() {
        assert_eq!(parse_week_spec("x-y"), vec![range(0, 0, WeekParity::All)]);
        assert_eq!(parse_week_spec(""), vec![range(0, 0, WeekParity::All)]);
    }

    #[test]
    fn unparsable_bounds_reuse_previous_token() {
        assert_eq!(
            parse_week_spec("3-9,x-12,5-?"),
            vec![
                range(3, 9, WeekParity::All),
                range(3, 12, WeekParity::All),
                range(5, 12, WeekParity::All),
            ]
        );
        // A bad single week reuses the previous start for both bounds.
        assert_eq!(
            parse_week_spec("4-10,第?周"),
            vec![range(4, 10, WeekParity::All), range(4, 4, WeekParity::All)]
        );
    }

    #[test]
    fn upper_bound_only_uses_second_piece() {
        assert_eq!(parse_week_spec("1-8-12"), vec![range(1, 8, WeekParity::All)]);
    }

    #[test]
    fn tokens_are_trimmed() {
        assert_eq!(
            parse_week_spec(" 1-8 , 10 - 16双 "),
            vec![range(1, 8, WeekParity::All), range(10, 16, WeekParity::Even)]
        );
    }

    #[test]
    fn trailing_comma_repeats_last_start() {
        assert_eq!(
            parse_week_spec("2-6,"),
            vec![range(2, 6, WeekParity::All), range(2, 2, WeekParity::All)]
        );
    }

    #[test]
    fn expand_copies_template_fields() {
        let sessions = expand(&template(), "1-8,10-16单");
        assert_eq!(sessions.len(), 2);

        for s in &sessions {
            assert_eq!(s.name, "大学英语");
            assert_eq!(s.teacher, "李老师");
            assert_eq!(s.room, "B203");
            assert_eq!(s.weekday, 3);
            assert_eq!(s.start_period, 5);
            assert_eq!(s.end_period, 6);
        }
        assert_eq!((sessions[1].start_week, sessions[1].end_week), (10, 16));
        assert_eq!(sessions[1].week_parity, WeekParity::Odd);
    }
}
