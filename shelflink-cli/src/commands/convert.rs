//! Conversion command implementations

use anyhow::{Context, Result};
use serde::Serialize;
use shelflink_core::{Book, OnlineBook};
use std::fs;
use std::io::Read;

/// Convert a physical book record to its online representation
pub fn to_online(input: &str, output: Option<&str>, pretty: bool) -> Result<()> {
    let text = read_input(input)?;
    let book: Book = serde_json::from_str(&text)
        .with_context(|| format!("Input is not a valid Book document: {}", input))?;

    let online = shelflink_core::to_online_book(&book);
    tracing::info!("Converted '{}' to online record at {}", online.title, online.url);

    write_record(&online, output, pretty)
}

/// Convert an online book record back to a physical one
pub fn to_book(input: &str, output: Option<&str>, pretty: bool) -> Result<()> {
    let text = read_input(input)?;
    let online: OnlineBook = serde_json::from_str(&text)
        .with_context(|| format!("Input is not a valid OnlineBook document: {}", input))?;

    let book = shelflink_core::to_book(&online);
    tracing::info!(
        "Recovered '{}' shelved at {} in {}",
        book.title,
        book.shelf_number,
        book.library_name
    );

    write_record(&book, output, pretty)
}

/// Read a record document from a file path, or from stdin when the path is `-`
pub(super) fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read record from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read input file: {}", input))
    }
}

/// Render a record as JSON and write it to a file or stdout
fn write_record<T: Serialize>(record: &T, output: Option<&str>, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(record)?
    } else {
        serde_json::to_string(record)?
    };

    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write output file: {}", path)),
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}
