//! Plain-text rendering of an assignment.

use std::fmt::Write;

use shipment_core::Assignment;

const INDEX_HEADER: &str = "#";
const DRIVER_HEADER: &str = "Driver";
const DESTINATION_HEADER: &str = "Destination";

/// `Total Suitability Score: <n>` followed by one aligned row per pair.
pub fn render(assignment: &Assignment, drivers: &[String], destinations: &[String]) -> String {
    let rows: Vec<(String, &str, &str)> = assignment
        .pairs
        .iter()
        .enumerate()
        .map(|(index, &(driver, destination))| {
            (
                index.to_string(),
                drivers.get(driver).map_or("", String::as_str),
                destinations.get(destination).map_or("", String::as_str),
            )
        })
        .collect();

    let index_width = column_width(INDEX_HEADER, rows.iter().map(|row| row.0.as_str()));
    let driver_width = column_width(DRIVER_HEADER, rows.iter().map(|row| row.1));

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "Total Suitability Score: {}",
        assignment.total_suitability
    );
    let _ = writeln!(
        out,
        "{INDEX_HEADER:<index_width$}  {DRIVER_HEADER:<driver_width$}  {DESTINATION_HEADER}"
    );
    for (index, driver, destination) in &rows {
        let _ = writeln!(
            out,
            "{index:<index_width$}  {driver:<driver_width$}  {destination}"
        );
    }
    out
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}
