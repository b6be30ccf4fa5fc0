//! Access-URL construction and parsing
//!
//! The URL fragment is a fixed wire contract: base address
//! `https://fake-lib.com`, query key `library`, and space as the only
//! escaped character (`%20`). This is deliberately not a general URL
//! encoder.

use regex::Regex;
use std::sync::LazyLock;

/// Base address of the online library service
const BASE_URL: &str = "https://fake-lib.com";

/// Sentinel returned when a URL carries no `library` parameter
pub(crate) const UNKNOWN_LIBRARY: &str = "Unknown Library";

/// Matches the `library` query parameter up to the next `&`
static LIBRARY_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("library=([^&]+)").expect("literal pattern is valid"));

/// Build the access URL for a library, escaping spaces as `%20`.
pub(crate) fn library_url(library_name: &str) -> String {
    format!("{}?library={}", BASE_URL, library_name.replace(' ', "%20"))
}

/// Recover the library name from an access URL.
///
/// Returns [`UNKNOWN_LIBRARY`] when no `library` parameter is present;
/// absence of a match is a normal outcome, not an error.
pub(crate) fn extract_library_name(url: &str) -> String {
    match LIBRARY_PARAM.captures(url) {
        Some(caps) => caps[1].replace("%20", " "),
        None => UNKNOWN_LIBRARY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_url_escapes_spaces() {
        assert_eq!(
            library_url("Main Library"),
            "https://fake-lib.com?library=Main%20Library"
        );
        assert_eq!(
            library_url("New York Public Library"),
            "https://fake-lib.com?library=New%20York%20Public%20Library"
        );
    }

    #[test]
    fn test_library_url_without_spaces_is_verbatim() {
        assert_eq!(library_url("Archive"), "https://fake-lib.com?library=Archive");
    }

    #[test]
    fn test_extract_round_trips_spaces() {
        assert_eq!(
            extract_library_name("https://fake-lib.com?library=Main%20Library"),
            "Main Library"
        );
    }

    #[test]
    fn test_extract_stops_at_ampersand() {
        assert_eq!(
            extract_library_name("https://fake-lib.com?library=Main&format=pdf"),
            "Main"
        );
    }

    #[test]
    fn test_extract_falls_back_without_parameter() {
        assert_eq!(extract_library_name("https://fake-lib.com"), UNKNOWN_LIBRARY);
        assert_eq!(extract_library_name(""), UNKNOWN_LIBRARY);
    }

    #[test]
    fn test_extract_falls_back_on_empty_value() {
        // `library=` with nothing after it does not match the one-or-more
        // capture, same as no parameter at all.
        assert_eq!(
            extract_library_name("https://fake-lib.com?library="),
            UNKNOWN_LIBRARY
        );
    }
}
