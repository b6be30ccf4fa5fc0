//! Info command implementation

use anyhow::{Context, Result};
use serde::Deserialize;
use shelflink_core::{Book, OnlineBook};

/// A record document of either shape.
///
/// The two shapes share no optional-field overlap, so untagged detection is
/// unambiguous: a document missing `libraryName`/`shelfNumber` falls through
/// to the online variant.
#[derive(Deserialize)]
#[serde(untagged)]
enum Record {
    Book(Book),
    Online(OnlineBook),
}

/// Display information about a record document
pub fn info(input: &str, json: bool) -> Result<()> {
    let text = super::convert::read_input(input)?;
    let record: Record = serde_json::from_str(&text)
        .with_context(|| format!("Input is not a Book or OnlineBook document: {}", input))?;

    match record {
        Record::Book(book) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&book)?);
            } else {
                println!("Kind:         physical book");
                println!("Title:        {}", book.title);
                println!("Author:       {}", book.author);
                println!("Library:      {}", book.library_name);
                println!("Shelf:        {}", book.shelf_number);
                println!("Available:    {}", book.is_available);
            }
        }
        Record::Online(online) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&online)?);
            } else {
                println!("Kind:         online book");
                println!("Title:        {}", online.title);
                println!("Author:       {}", online.author);
                println!("URL:          {}", online.url);
                println!("Format:       {}", online.digital_format);
                println!("Downloadable: {}", online.is_downloadable);
            }
        }
    }

    Ok(())
}
