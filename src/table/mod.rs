use crate::lookup::Lookup;
use crate::Country;

pub const HEADERS: [&str; 7] = [
    "Rank",
    "Country",
    "\u{1f48e} Diamonds",
    "\u{1f3c5} Gold",
    "\u{1f948} Silver",
    "\u{1f949} Bronze",
    "Total",
];

/// Stands in for the header tooltip of the original table.
pub const TOTAL_FOOTNOTE: &str =
    "Total = gold + silver + bronze (diamonds not counted); ordered by gold, then silver, then bronze.";

pub const RANK_PLACEHOLDER: &str = "-";

const JOINED_ATTRIBUTE: &str = "diamonds";

/// One rendered row; `key` is the record id and must be unique within a
/// fetch cycle (duplicates across pages are an upstream contract violation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub key: String,
    pub flag_url: String,
    pub cells: [String; 7],
}

/// Derives one row per record, in collection order. Column order is fixed:
/// rank, country, diamonds, gold, silver, bronze, total.
pub fn build_rows(countries: &[Country], lookup: &Lookup) -> Vec<TableRow> {
    countries
        .iter()
        .map(|country| {
            let rank = if country.rank > 0 {
                country.rank.to_string()
            } else {
                RANK_PLACEHOLDER.to_string()
            };
            let name = lookup.display_name(&country.id, &country.name).to_string();
            let diamonds = lookup.resolve(&country.id, JOINED_ATTRIBUTE).to_string();

            TableRow {
                key: country.id.clone(),
                flag_url: country.flag_url.clone(),
                cells: [
                    rank,
                    name,
                    diamonds,
                    country.gold_medals.to_string(),
                    country.silver_medals.to_string(),
                    country.bronze_medals.to_string(),
                    country.total_medals.to_string(),
                ],
            }
        })
        .collect()
}

/// Renders rows as a fixed-width text table with a header row and the
/// explanatory footnote. `show_flags` appends each row's flag URL.
pub fn render(rows: &[TableRow], show_flags: bool) -> String {
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_line(HEADERS.iter().copied(), &widths));
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    out.push('\n');

    for row in rows {
        let mut line = format_line(row.cells.iter().map(String::as_str), &widths);
        if show_flags {
            line.push_str("  ");
            line.push_str(&row.flag_url);
        }
        out.push_str(&line);
        out.push('\n');
    }

    out.push('\n');
    out.push_str(TOTAL_FOOTNOTE);
    out.push('\n');
    out
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.chars().count())));
    }
    line.truncate(line.trim_end().len());
    line
}
