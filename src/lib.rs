//! worddoc: an in-memory document modeled as an ordered list of words
//!
//! This library provides the core functionality of worddoc:
//! - Building a document from an initial word list
//! - Appending words one at a time
//! - Reading the words back in insertion order
//!
//! # Example
//!
//! ```
//! use worddoc::Document;
//!
//! let mut doc = Document::new(vec!["Hello".to_string()]);
//! doc.add_word("world".to_string());
//! assert_eq!(doc.words(), ["Hello", "world"]);
//! ```

pub mod document;

pub use document::Document;
