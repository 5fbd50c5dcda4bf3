//! Results table parsing.
//!
//! The site answers a form post with a `<table class="table">`: one header
//! row, then one row per IP. Fields are read by fixed `<td>` position; the
//! whole contract lives in [`COLUMNS`].

use std::sync::LazyLock;

use log::debug;
use scraper::{ElementRef, Html, Selector};

use super::types::{IpCheckRecord, ListingFlag};
use crate::error_handling::ScrapeError;
use crate::utils::compile_selector;

static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector("table.table", "blacklist results table"));
static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector("tr", "blacklist results rows"));
static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector("td", "blacklist results cells"));

/// Fields of a results row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Row number (unused)
    Index,
    Ip,
    PtrRecord,
    Spamcop,
    Spamhaus,
    Barracuda,
    SenderScore,
    SenderBase,
    /// Only present when the row has more than `MIN_CELLS` cells
    Api,
}

/// `<td>` position of every field.
pub const COLUMNS: &[(Column, usize)] = &[
    (Column::Index, 0),
    (Column::Ip, 1),
    (Column::PtrRecord, 2),
    (Column::Spamcop, 3),
    (Column::Spamhaus, 4),
    (Column::Barracuda, 5),
    (Column::SenderScore, 6),
    (Column::SenderBase, 7),
    (Column::Api, 8),
];

/// Rows with fewer cells are dropped.
pub const MIN_CELLS: usize = 8;

/// Position of `column` in a row.
pub fn column_position(column: Column) -> usize {
    COLUMNS
        .iter()
        .find(|(c, _)| *c == column)
        .map(|(_, position)| *position)
        .unwrap_or(usize::MAX)
}

/// Text of one `<td>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Full text content, untouched
    pub raw: String,
    /// Each text fragment trimmed, then concatenated
    pub stripped: String,
}

impl Cell {
    fn from_element(cell: ElementRef<'_>) -> Self {
        Self {
            raw: cell.text().collect(),
            stripped: cell.text().map(str::trim).collect(),
        }
    }

    /// Builds a cell from plain text.
    pub fn from_text(text: &str) -> Self {
        Self {
            raw: text.to_string(),
            stripped: text.trim().to_string(),
        }
    }
}

/// Converts one data row into a record.
///
/// Returns `None` for rows with fewer than [`MIN_CELLS`] cells.
pub fn parse_row(cells: &[Cell]) -> Option<IpCheckRecord> {
    if cells.len() < MIN_CELLS {
        return None;
    }
    let text = |column: Column| {
        cells
            .get(column_position(column))
            .map(|cell| cell.stripped.clone())
    };
    let flag = |column: Column| {
        ListingFlag::from_cell(
            cells
                .get(column_position(column))
                .map(|cell| cell.raw.as_str())
                .unwrap_or_default(),
        )
    };

    Some(IpCheckRecord {
        ip: text(Column::Ip).unwrap_or_default(),
        ptr_record: text(Column::PtrRecord).unwrap_or_default(),
        spamcop: flag(Column::Spamcop),
        spamhaus: flag(Column::Spamhaus),
        barracuda: flag(Column::Barracuda),
        sender_score: text(Column::SenderScore).unwrap_or_default(),
        sender_base: text(Column::SenderBase).unwrap_or_default(),
        api: text(Column::Api),
    })
}

/// Parses the results page into records, in table order.
///
/// # Errors
///
/// - `ScrapeError::ResultsTableNotFound` when there is no `table.table`
/// - `ScrapeError::NoDataRows` when the table has only a header row
pub fn parse_results_table(html: &str) -> Result<Vec<IpCheckRecord>, ScrapeError> {
    let document = Html::parse_document(html);
    let table = document
        .select(&TABLE_SELECTOR)
        .next()
        .ok_or(ScrapeError::ResultsTableNotFound)?;

    let rows: Vec<ElementRef<'_>> = table.select(&ROW_SELECTOR).collect();
    if rows.len() < 2 {
        return Err(ScrapeError::NoDataRows);
    }

    let mut records = Vec::with_capacity(rows.len() - 1);
    for (position, row) in rows.iter().enumerate().skip(1) {
        let cells: Vec<Cell> = row.select(&CELL_SELECTOR).map(Cell::from_element).collect();
        match parse_row(&cells) {
            Some(record) => records.push(record),
            None => debug!(
                "Dropping results row {position}: {} cells, need {MIN_CELLS}",
                cells.len()
            ),
        }
    }

    Ok(records)
}
