//! Plain-text rendering of cards, result pages and the detail view.

use std::fmt::Write;

use metcat_core::{ObjectDetail, ResultSet};
use metcat_model::{Department, DetailRecord};

const INDENT: &str = "          ";

pub const NO_RESULTS: &str =
    "No results found. Try adjusting your search criteria.";

/// One result card: title line, then artist, date, department and image.
pub fn card(record: &DetailRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>8}  {}",
        record.object_id,
        record.display_title()
    );
    for line in [
        record.artist_display_name.as_deref(),
        record.object_date.as_deref(),
        record.department.as_deref(),
        record.card_image(),
    ]
    .into_iter()
    .flatten()
    {
        let _ = writeln!(out, "{INDENT}{line}");
    }
    out
}

pub fn summary_line(total: usize, displayed: usize) -> String {
    if total > 0 {
        format!("Showing {displayed} of {total} results")
    } else {
        NO_RESULTS.to_string()
    }
}

pub fn result_page(set: &ResultSet) -> String {
    let mut out = summary_line(set.total, set.displayed);
    out.push('\n');
    for record in &set.results {
        out.push('\n');
        out.push_str(&card(record));
    }
    out
}

pub fn cards<'a>(records: impl IntoIterator<Item = &'a DetailRecord>) -> String {
    records
        .into_iter()
        .map(card)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn detail(detail: &ObjectDetail) -> String {
    let record = &detail.record;
    let mut out = String::new();

    let marker = if detail.favorite { " [favorite]" } else { "" };
    let _ = writeln!(out, "{}{marker}", record.display_title());
    if let Some(artist) = &record.artist_display_name {
        match &record.artist_display_bio {
            Some(bio) => {
                let _ = writeln!(out, "{artist} ({bio})");
            }
            None => {
                let _ = writeln!(out, "{artist}");
            }
        }
    }

    let chips: Vec<&str> = [
        record.culture.as_deref(),
        record.period.as_deref(),
        record.department.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !chips.is_empty() {
        let _ = writeln!(out, "[{}]", chips.join("] ["));
    }
    out.push('\n');

    if let Some(date) = &record.object_date {
        match record.date_range() {
            Some((begin, end)) => {
                let _ = writeln!(out, "Date:        {date} ({begin} to {end})");
            }
            None => {
                let _ = writeln!(out, "Date:        {date}");
            }
        }
    }
    field(&mut out, "Medium:", record.medium.as_deref());
    field(&mut out, "Dimensions:", record.dimensions.as_deref());
    field(&mut out, "Credit line:", record.credit_line.as_deref());
    field(&mut out, "Geography:", record.geography().as_deref());
    field(&mut out, "Accession:", record.accession_number.as_deref());
    field(&mut out, "Link:", record.object_url.as_deref());

    let gallery = record.gallery();
    if !gallery.is_empty() {
        let _ = writeln!(out, "\nImages:");
        for (index, url) in gallery.iter().enumerate() {
            let _ = writeln!(out, "  {}. {url}", index + 1);
        }
    }
    if !record.tags.is_empty() {
        let terms: Vec<&str> =
            record.tags.iter().map(|tag| tag.term.as_str()).collect();
        let _ = writeln!(out, "\nTags: {}", terms.join(", "));
    }
    out
}

fn field(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        let _ = writeln!(out, "{label:<12} {value}");
    }
}

pub fn department_line(department: &Department) -> String {
    format!("{:>4}  {}", department.department_id, department.display_name)
}
