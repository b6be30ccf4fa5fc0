//! The digital book record

use super::DigitalFormat;
use serde::{Deserialize, Serialize};

/// The online representation of a book.
///
/// Carries no reference to the physical holding it was derived from; the
/// library name survives only inside the access URL, and the shelf number
/// not at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OnlineBook {
    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// Access URL encoding the library name as a query parameter
    pub url: String,

    /// Rendition format of the online copy
    pub digital_format: DigitalFormat,

    /// Whether the online copy can be downloaded
    pub is_downloadable: bool,
}

impl OnlineBook {
    /// Create a new online book record
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
        digital_format: DigitalFormat,
        is_downloadable: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            url: url.into(),
            digital_format,
            is_downloadable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_online_book_creation() {
        let online = OnlineBook::new(
            "Test Title",
            "Test Author",
            "https://fake-lib.com?library=Main%20Library",
            DigitalFormat::Pdf,
            true,
        );
        assert_eq!(online.title, "Test Title");
        assert_eq!(online.digital_format, DigitalFormat::Pdf);
        assert!(online.is_downloadable);
    }

    #[test]
    fn test_online_book_serialization() {
        let online = OnlineBook::new(
            "T",
            "A",
            "https://fake-lib.com?library=Archive",
            DigitalFormat::EPub,
            false,
        );
        let json = serde_json::to_string(&online).unwrap();
        assert!(json.contains("\"digitalFormat\":\"ePub\""));
        assert!(json.contains("\"isDownloadable\":false"));

        let deserialized: OnlineBook = serde_json::from_str(&json).unwrap();
        assert_eq!(online, deserialized);
    }
}
