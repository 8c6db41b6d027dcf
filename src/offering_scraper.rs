use scraper::{Html, Selector};

use crate::dom::{child_elements, descend_first, extract_text, first_child, nth_child};
use crate::error::{Result, ScrapeError};

/// One course section offering as listed by the portal. Built fresh per
/// table row, handed straight to the formatter, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectData {
    pub nrc: String,
    pub key: String,
    pub name: String,
    pub section: String,
    pub credits: i32,
    pub schedule: String,
    pub slots: i32,
    pub available: i32,
    pub professor: String,
}

pub const SCHEDULE_PLACEHOLDER: &str = "-";

/// Extract every offering from a parsed results page.
///
/// The first `<table>` in document order is taken to be the offerings table;
/// its body's first two rows are a title row and a column-header row and are
/// skipped positionally. Remaining rows map through `scrape_row`, in
/// document order.
pub fn scrape_offerings(document: &Html) -> Result<Vec<SubjectData>> {
    let table_selector = Selector::parse("table").unwrap();
    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| ScrapeError::structure("no <table> element in offerings page"))?;
    // html5ever gives the table an implicit <tbody>; rows hang off it.
    let body = first_child(table)?;
    child_elements(body)
        .into_iter()
        .skip(2)
        .map(scrape_row)
        .collect()
}

/// Extract one offering from one table row. All-or-nothing: any missing
/// cell or broken descendant chain fails the whole row, except the schedule
/// cell, whose nested table is legitimately absent for unscheduled sections.
fn scrape_row(row: scraper::ElementRef) -> Result<SubjectData> {
    let cells = child_elements(row);
    if cells.len() < 9 {
        return Err(ScrapeError::structure(format!(
            "offering row has {} cells, expected at least 9",
            cells.len()
        )));
    }

    // The schedule cell wraps a nested table; the first row of that table
    // is the only meeting slot we read. Sections meeting more than once a
    // week lose their extra slots here, matching the portal tool this
    // replaces.
    let schedule_slot = descend_first(cells[7], 3);

    // Professor sits in a nested table too, but unlike the schedule an
    // absent chain is treated as a malformed page.
    let professor_cell = nth_child(
        first_child(first_child(first_child(cells[8])?)?)?,
        1,
    )?;

    Ok(SubjectData {
        nrc: extract_text(cells[0]),
        key: extract_text(first_child(cells[1])?),
        name: extract_text(first_child(cells[2])?),
        section: extract_text(cells[3]),
        credits: parse_count("credits", &extract_text(cells[4]))?,
        slots: parse_count("slots", &extract_text(cells[5]))?,
        available: parse_count("available", &extract_text(cells[6]))?,
        schedule: scrape_schedule_row(schedule_slot)?,
        professor: extract_text(professor_cell),
    })
}

/// Format one nested schedule row as "days time". A missing row renders as
/// the placeholder rather than failing the offering.
fn scrape_schedule_row(slot: Option<scraper::ElementRef>) -> Result<String> {
    let Some(slot) = slot else {
        return Ok(SCHEDULE_PLACEHOLDER.to_string());
    };
    let columns = child_elements(slot);
    if columns.len() < 3 {
        return Err(ScrapeError::structure(format!(
            "schedule row has {} cells, expected at least 3",
            columns.len()
        )));
    }
    let time = extract_text(columns[1]);
    let days = extract_text(columns[2]);
    Ok(format!("{days} {time}"))
}

fn parse_count(field: &'static str, text: &str) -> Result<i32> {
    text.parse()
        .map_err(|_| ScrapeError::numeric(field, text))
}
