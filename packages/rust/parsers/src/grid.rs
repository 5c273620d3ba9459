//! Timetable grid location and row extraction.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static ROW_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("row selector"));

static CELL_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("cell selector"));

/// One data row of the grid: its label text plus all of its cells.
#[derive(Debug, Clone)]
pub struct GridRow<'a> {
    /// Row position within the table (the header is row 0).
    pub index: usize,
    /// Whitespace-normalized text of the first cell.
    pub label: String,
    /// All cells, label cell included at position 0.
    pub cells: Vec<ElementRef<'a>>,
}

impl<'a> GridRow<'a> {
    /// Weekday cells paired with their 1-based column index.
    pub fn weekday_cells(&self) -> impl Iterator<Item = (u32, ElementRef<'a>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .skip(1)
            .map(|(col, cell)| (col as u32, *cell))
    }
}

/// First element matching `marker`, if the page has one.
pub fn locate_grid<'a>(doc: &'a Html, marker: &Selector) -> Option<ElementRef<'a>> {
    doc.select(marker).next()
}

/// Data rows of `table` in document order.
///
/// Row 0 is the header and is dropped without looking at it; rows without
/// cells are dropped too.
pub fn data_rows(table: ElementRef<'_>) -> Vec<GridRow<'_>> {
    table
        .select(&ROW_SEL)
        .enumerate()
        .skip(1)
        .filter_map(|(index, tr)| {
            let cells: Vec<_> = tr.select(&CELL_SEL).collect();
            let label = normalized_text(*cells.first()?);
            Some(GridRow {
                index,
                label,
                cells,
            })
        })
        .collect()
}

/// Element text with whitespace runs collapsed to single spaces.
///
/// Adjacent text nodes are joined as-is, so inline markup inside a word
/// (`第<span>0102</span>节`) does not split it.
pub(crate) fn normalized_text(el: ElementRef<'_>) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_sel() -> Selector {
        Selector::parse(r#"table[border="1"]"#).expect("table selector")
    }

    #[test]
    fn locate_picks_first_marked_table() {
        let doc = Html::parse_document(
            r#"<table id="nav"><tr><td>menu</td></tr></table>
               <table border="1" id="first"><tr><td>a</td></tr></table>
               <table border="1" id="second"><tr><td>b</td></tr></table>"#,
        );
        let grid = locate_grid(&doc, &table_sel()).expect("grid");
        assert_eq!(grid.value().attr("id"), Some("first"));
    }

    #[test]
    fn locate_without_marker_is_none() {
        let doc = Html::parse_document("<p>no timetable today</p>");
        assert!(locate_grid(&doc, &table_sel()).is_none());

        let doc = Html::parse_document("");
        assert!(locate_grid(&doc, &table_sel()).is_none());
    }

    #[test]
    fn rows_skip_header_and_empty_rows() {
        let doc = Html::parse_document(
            r#"<table border="1">
                 <tr><td>header</td><td>Mon</td></tr>
                 <tr></tr>
                 <tr><td>  first
                     row </td><td>x</td><td>y</td></tr>
               </table>"#,
        );
        let grid = locate_grid(&doc, &table_sel()).expect("grid");
        let rows = data_rows(grid);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].index, 2);
        assert_eq!(rows[0].label, "first row");

        let cols: Vec<u32> = rows[0].weekday_cells().map(|(col, _)| col).collect();
        assert_eq!(cols, vec![1, 2]);
    }

    #[test]
    fn label_split_by_inline_markup_stays_whole() {
        let doc = Html::parse_document(
            r#"<table border="1">
                 <tr><td>节次</td><td>星期一</td></tr>
                 <tr><td>第<span>0102</span>节</td><td>x</td></tr>
                 <tr><td><font>第0304</font>节</td><td>y</td></tr>
                 <tr><td><b>第0506</b>
                     节</td><td>z</td></tr>
               </table>"#,
        );
        let grid = locate_grid(&doc, &table_sel()).expect("grid");
        let labels: Vec<String> = data_rows(grid).into_iter().map(|r| r.label).collect();

        assert_eq!(labels, vec!["第0102节", "第0304节", "第0506 节"]);
    }

    #[test]
    fn header_row_is_skipped_even_with_data() {
        let doc = Html::parse_document(
            r#"<table border="1"><tr><td>第0102节</td><td>x</td></tr></table>"#,
        );
        let grid = locate_grid(&doc, &table_sel()).expect("grid");
        assert!(data_rows(grid).is_empty());
    }
}
