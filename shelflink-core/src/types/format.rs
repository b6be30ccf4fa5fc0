//! Digital rendition formats

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rendition format of an online copy.
///
/// The wire names are fixed: `"PDF"` and `"ePub"`, spelled exactly like that
/// in JSON documents and every adapter-facing string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DigitalFormat {
    /// Portable Document Format
    #[serde(rename = "PDF")]
    Pdf,

    /// EPUB ebook
    #[serde(rename = "ePub")]
    EPub,
}

impl DigitalFormat {
    /// The fixed wire name for this format
    pub fn as_str(&self) -> &'static str {
        match self {
            DigitalFormat::Pdf => "PDF",
            DigitalFormat::EPub => "ePub",
        }
    }
}

impl fmt::Display for DigitalFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigitalFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PDF" => Ok(DigitalFormat::Pdf),
            "ePub" => Ok(DigitalFormat::EPub),
            other => Err(ParseError::UnknownFormat(other.to_string())),
        }
    }
}
