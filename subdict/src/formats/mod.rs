//! The two file formats subdict deals with.
//!
//! [`tab_dict`] reads the tab-separated dictionary source; [`plist`] writes
//! the Apple property-list output. Conversion is one-directional, so each
//! format only implements the side it needs.

pub mod plist;
pub mod tab_dict;

// Reexporting the formats for easier access
pub use plist::Format as PlistFormat;
pub use tab_dict::Format as TabDictFormat;
