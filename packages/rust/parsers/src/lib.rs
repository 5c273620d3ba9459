//! Timetable page decoding.
//!
//! This crate provides:
//! - [`institutions`] — Per-institution parsers and the [`ParserRegistry`]
//! - [`decode`] — The grid walk shared by all parsers
//! - [`grid`], [`period`], [`annotation`], [`weeks`] — The individual decoding stages
//! - [`time_table`] — Period clock-time tables
//!
//! Decoding never fails. Missing grids, unknown row labels, blank annotations
//! and unreadable week numbers all degrade to a smaller [`Schedule`].
//!
//! [`Schedule`]: coursegrid_shared::Schedule

pub mod annotation;
pub mod decode;
pub mod grid;
pub mod institutions;
pub mod period;
pub mod time_table;
pub mod weeks;

pub use decode::{GridConvention, decode_grid};
pub use institutions::{GxicParser, InstitutionParser, ParserRegistry, parse_schedule};
pub use time_table::{TimeTable, TimeTableBuilder};
