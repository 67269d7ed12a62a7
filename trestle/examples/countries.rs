//! Countries Table Example
//!
//! Builds a sortable table, drives it with synthetic header clicks, and
//! prints the rendered HTML after each interaction.

use htmldom::{Document, Element};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use trestle::{Cell, Column, Row, TableController};

/// Create column definitions.
fn create_columns() -> Vec<Column> {
    vec![
        Column::new("country", "Country").sortable(true),
        Column::new("capital", "Capital"),
        Column::new("population", "Population").sortable(true),
    ]
}

/// Create sample rows. Population values carry thousands separators and
/// still sort numerically.
fn create_sample_rows() -> Vec<Row> {
    let data = [
        ("Iceland", "Reykjavik", "393,600"),
        ("Japan", "Tokyo", "124,516,650"),
        ("Malta", "Valletta", "563,443"),
        ("Norway", "Oslo", "5,550,203"),
    ];

    data.iter()
        .map(|(country, capital, population)| {
            Row::new()
                .cell(
                    "country",
                    Cell::new(*country).renderer(|value| format!("<strong>{value}</strong>")),
                )
                .cell("capital", *capital)
                .cell("population", *population)
        })
        .collect()
}

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    let doc = Document::with_root(Element::new("body").child(Element::table().id("countries")));

    let table = TableController::attach(&doc, "#countries").expect("container must exist");
    table.set_header(create_columns()).expect("header renders");
    table.set_data(create_sample_rows()).expect("body renders");

    println!("initial:\n{}\n", doc.html());

    doc.click("population").expect("sort ascending");
    println!("population ascending:\n{}\n", doc.html());

    doc.click("population").expect("sort descending");
    println!("population descending:\n{}\n", doc.html());

    doc.click("country").expect("sort by country");
    println!("country ascending:\n{}", doc.html());
}
