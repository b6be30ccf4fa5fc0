//! Conversion between physical and online book records
//!
//! Both directions are pure functions over immutable inputs. The mapping is
//! not bijective: an online record carries no shelf number, so the reverse
//! direction re-derives one from the library name recovered out of the
//! access URL.

mod shelf;
mod url;

use crate::types::{Book, DigitalFormat, OnlineBook};

/// Convert a physical holding into its online representation.
///
/// An available physical copy maps to a downloadable `"PDF"` rendition, an
/// unavailable one to a non-downloadable `"ePub"`. The library name is
/// embedded in the access URL as a `library` query parameter with spaces
/// escaped as `%20`.
pub fn to_online_book(book: &Book) -> OnlineBook {
    let digital_format = if book.is_available {
        DigitalFormat::Pdf
    } else {
        DigitalFormat::EPub
    };

    OnlineBook {
        title: book.title.clone(),
        author: book.author.clone(),
        url: url::library_url(&book.library_name),
        digital_format,
        is_downloadable: book.is_available,
    }
}

/// Convert an online record back into a physical holding.
///
/// The library name is recovered from the access URL, falling back to
/// `"Unknown Library"` when the URL carries no `library` parameter. The
/// shelf number is re-derived from the library name; whatever number the
/// book originally had is not recoverable.
pub fn to_book(online_book: &OnlineBook) -> Book {
    let library_name = url::extract_library_name(&online_book.url);
    let shelf_number = shelf::shelf_number_for(&library_name);

    Book {
        title: online_book.title.clone(),
        author: online_book.author.clone(),
        library_name,
        shelf_number,
        is_available: online_book.is_downloadable,
    }
}
