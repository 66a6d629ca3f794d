//! Core domain types for subdict.
//! The parser decodes into these; the plist serializer consumes them.

use std::fmt::Display;

/// One shortcut/phrase pair parsed from one dictionary line.
///
/// Both fields are trimmed and non-empty; [`Entry::new`] refuses to build
/// anything else, so an invalid entry is unrepresentable. Entries carry no
/// identity beyond their position: duplicates are allowed and source order
/// is preserved all the way into the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The short trigger string typed by the user.
    pub shortcut: String,
    /// The expansion text substituted for the shortcut.
    pub phrase: String,
}

impl Entry {
    /// Trims both candidates and creates an entry, or returns `None` when
    /// either side trims down to the empty string.
    pub fn new(shortcut: &str, phrase: &str) -> Option<Self> {
        let shortcut = shortcut.trim();
        let phrase = phrase.trim();
        if shortcut.is_empty() || phrase.is_empty() {
            return None;
        }
        Some(Entry {
            shortcut: shortcut.to_string(),
            phrase: phrase.to_string(),
        })
    }
}

/// A recoverable condition noticed while parsing.
///
/// Warnings never abort a run and never alter the produced output; they are
/// returned alongside the parsed entries so callers decide where to report
/// them (the CLI prints them to stderr).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A non-comment line with fewer than two tab-separated fields.
    NotEnoughFields {
        /// The raw source line, for the user-facing message.
        line: String,
    },
    /// A line whose shortcut or phrase was empty after trimming.
    EmptyField {
        /// The raw source line, for the user-facing message.
        line: String,
    },
    /// The whole input produced zero valid entries.
    NoEntries,
}

impl Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::NotEnoughFields { line } => {
                write!(f, "Skipping malformed line (not enough fields): \"{line}\"")
            }
            Warning::EmptyField { line } => {
                write!(
                    f,
                    "Skipping malformed line (empty shortcut or phrase): \"{line}\""
                )
            }
            Warning::NoEntries => {
                write!(f, "No valid entries found. Output will be an empty list.")
            }
        }
    }
}
