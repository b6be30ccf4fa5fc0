//! Shelflink Core Library
//!
//! This crate provides the record types and conversion logic for the Shelflink
//! library-holding mapper. A physical [`Book`] and its digital [`OnlineBook`]
//! representation convert to each other through a pair of pure functions;
//! neither record references the other, and every conversion produces a fresh
//! value.

pub mod error;
pub mod mapper;
pub mod types;

pub use error::{ParseError, Result};
pub use mapper::{to_book, to_online_book};
pub use types::{Book, DigitalFormat, OnlineBook};
