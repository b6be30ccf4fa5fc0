//! WASM bindings for shelflink-core.
//!
//! This crate exposes the `Book` and `OnlineBook` records and the two
//! conversion functions to JavaScript via wasm-bindgen. The exported surface
//! mirrors the native one: the records become JS classes with constructors
//! and per-field getters, the conversions become free functions.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p shelflink-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/shelflink_wasm.wasm
//! ```
//!
//! From JavaScript:
//!
//! ```js
//! import { Book, toOnlineBook } from "./pkg/shelflink_wasm.js";
//! const book = new Book("Test Title", "Test Author", "Main Library", 1, true);
//! console.log(toOnlineBook(book).url);
//! // https://fake-lib.com?library=Main%20Library
//! ```

use shelflink_core::DigitalFormat;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// A book held on a shelf in a lending library.
#[wasm_bindgen]
pub struct Book {
    inner: shelflink_core::Book,
}

#[wasm_bindgen]
impl Book {
    /// Create a new physical book record.
    #[wasm_bindgen(constructor)]
    pub fn new(
        title: String,
        author: String,
        library_name: String,
        shelf_number: u32,
        is_available: bool,
    ) -> Book {
        Book {
            inner: shelflink_core::Book::new(
                title,
                author,
                library_name,
                shelf_number,
                is_available,
            ),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.inner.title.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn author(&self) -> String {
        self.inner.author.clone()
    }

    #[wasm_bindgen(getter, js_name = libraryName)]
    pub fn library_name(&self) -> String {
        self.inner.library_name.clone()
    }

    #[wasm_bindgen(getter, js_name = shelfNumber)]
    pub fn shelf_number(&self) -> u32 {
        self.inner.shelf_number
    }

    #[wasm_bindgen(getter, js_name = isAvailable)]
    pub fn is_available(&self) -> bool {
        self.inner.is_available
    }
}

/// The online representation of a book.
#[wasm_bindgen]
pub struct OnlineBook {
    inner: shelflink_core::OnlineBook,
}

#[wasm_bindgen]
impl OnlineBook {
    /// Create a new online book record.
    ///
    /// `digital_format` must be one of the wire names `"PDF"` or `"ePub"`;
    /// anything else throws.
    #[wasm_bindgen(constructor)]
    pub fn new(
        title: String,
        author: String,
        url: String,
        digital_format: &str,
        is_downloadable: bool,
    ) -> Result<OnlineBook, JsValue> {
        let format: DigitalFormat = digital_format
            .parse()
            .map_err(|e: shelflink_core::ParseError| JsValue::from_str(&e.to_string()))?;

        Ok(OnlineBook {
            inner: shelflink_core::OnlineBook::new(title, author, url, format, is_downloadable),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.inner.title.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn author(&self) -> String {
        self.inner.author.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn url(&self) -> String {
        self.inner.url.clone()
    }

    /// The rendition format as its wire name (`"PDF"` or `"ePub"`).
    #[wasm_bindgen(getter, js_name = digitalFormat)]
    pub fn digital_format(&self) -> String {
        self.inner.digital_format.as_str().to_string()
    }

    #[wasm_bindgen(getter, js_name = isDownloadable)]
    pub fn is_downloadable(&self) -> bool {
        self.inner.is_downloadable
    }
}

/// Convert a physical book record into its online representation.
#[wasm_bindgen(js_name = toOnlineBook)]
pub fn to_online_book(book: &Book) -> OnlineBook {
    OnlineBook {
        inner: shelflink_core::to_online_book(&book.inner),
    }
}

/// Convert an online book record back into a physical one.
#[wasm_bindgen(js_name = toBook)]
pub fn to_book(online_book: &OnlineBook) -> Book {
    Book {
        inner: shelflink_core::to_book(&online_book.inner),
    }
}
