//! Text-substitution dictionary toolkit for Rust.
//!
//! Converts tab-separated shortcut/phrase dictionaries into Apple property-list
//! (plist) files, the format consumed by macOS text replacement import.
//! Parsing and serialization are exposed separately; [`convert`] wires them
//! together for the common file-to-file case.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use subdict::convert;
//!
//! let conversion = convert("dict.txt", "dict.plist")?;
//! for warning in &conversion.warnings {
//!     eprintln!("{}", warning);
//! }
//! println!("converted {} entries", conversion.entry_count);
//! # Ok::<(), subdict::Error>(())
//! ```
//!
//! # Input format
//!
//! One entry per line, fields separated by tabs: `<shortcut>\t<phrase>`.
//! Lines starting with `!` are comments; blank lines are ignored; any third
//! or later field (e.g. a part-of-speech tag) is dropped. Malformed lines are
//! discarded with a [`Warning`] rather than failing the run.

pub mod converter;
pub mod error;
pub mod formats;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    converter::{Conversion, convert},
    error::Error,
    types::{Entry, Warning},
};
