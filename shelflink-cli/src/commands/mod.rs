//! CLI command implementations

mod convert;
mod info;

pub use convert::{to_book, to_online};
pub use info::info;
