//! Whole-file conversion: tab-separated dictionary in, plist out.

use std::path::Path;

use crate::{
    error::Error,
    formats::{plist, tab_dict},
    types::Warning,
};

/// What a successful [`convert`] run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Number of entries written to the output file.
    pub entry_count: usize,
    /// Warnings accumulated while parsing the input.
    pub warnings: Vec<Warning>,
}

/// Converts a tab-separated dictionary file into a plist file.
///
/// Reads the whole input, parses it, renders the plist, and writes the whole
/// output, in strict sequence. Malformed input lines are skipped and
/// reported through [`Conversion::warnings`]; only I/O failures abort. A
/// read failure leaves no output file behind.
///
/// ```rust,no_run
/// let conversion = subdict::convert("dict.txt", "dict.plist")?;
/// println!("{} entries", conversion.entry_count);
/// # Ok::<(), subdict::Error>(())
/// ```
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Conversion, Error> {
    let dict = tab_dict::Format::read_from(input)?;
    let document = plist::Format::from(dict.entries);
    document.write_to(output)?;
    Ok(Conversion {
        entry_count: document.entries.len(),
        warnings: dict.warnings,
    })
}
