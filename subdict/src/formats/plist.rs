//! Support for the Apple property-list (plist) output format.
//!
//! The output is a plist 1.0 document holding an array of dicts, each with a
//! `phrase` and a `shortcut` string. The skeleton is emitted as a fixed
//! template rather than through an XML writer: the byte layout (tab
//! indentation, key order, trailing newline) is part of the contract with
//! downstream consumers that diff these files textually.

use std::{fs, io::Write, path::Path};

use indoc::indoc;

use crate::{error::Error, types::Entry};

const HEADER: &str = indoc! {r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
    <plist version="1.0">
    <array>
"#};

const FOOTER: &str = "</array>\n</plist>\n";

/// Replaces the five XML-reserved characters with their entity equivalents.
///
/// Single left-to-right pass: an entity produced for one character is never
/// itself re-escaped, so `&` becomes `&amp;` exactly once.
pub fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// An ordered plist document ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// Entries in output order, which equals parse order.
    pub entries: Vec<Entry>,
}

impl From<Vec<Entry>> for Format {
    fn from(entries: Vec<Entry>) -> Self {
        Format { entries }
    }
}

impl Format {
    /// Renders the complete plist document, trailing newline included.
    ///
    /// The `phrase` key precedes `shortcut` in every dict. Plist dicts are
    /// semantically unordered, but the fixed order keeps the output
    /// reproducible byte for byte.
    pub fn to_xml(&self) -> String {
        let mut content = String::from(HEADER);
        for entry in &self.entries {
            content.push_str("\t<dict>\n");
            content.push_str("\t\t<key>phrase</key>\n");
            content.push_str(&format!("\t\t<string>{}</string>\n", escape_xml(&entry.phrase)));
            content.push_str("\t\t<key>shortcut</key>\n");
            content.push_str(&format!(
                "\t\t<string>{}</string>\n",
                escape_xml(&entry.shortcut)
            ));
            content.push_str("\t</dict>\n");
        }
        content.push_str(FOOTER);
        content
    }

    /// Write to any writer (file, memory, etc.).
    pub fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(self.to_xml().as_bytes()).map_err(Error::Io)
    }

    /// Write to a file path, in one whole-file write.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        fs::write(path, self.to_xml()).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::events::Event;
    use quick_xml::Reader;

    fn format_with(pairs: &[(&str, &str)]) -> Format {
        Format::from(
            pairs
                .iter()
                .map(|(s, p)| Entry::new(s, p).unwrap())
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_escape_xml_all_five_characters() {
        assert_eq!(
            escape_xml("<>&\"'"),
            "&lt;&gt;&amp;&quot;&apos;"
        );
    }

    #[test]
    fn test_escape_xml_plain_text_untouched() {
        assert_eq!(escape_xml("hello world"), "hello world");
    }

    #[test]
    fn test_escape_xml_mixed() {
        assert_eq!(escape_xml("5<6 & \"ok\""), "5&lt;6 &amp; &quot;ok&quot;");
    }

    #[test]
    fn test_escape_xml_single_pass_no_double_escaping() {
        // A pre-existing entity only has its ampersand escaped.
        assert_eq!(escape_xml("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_xml_unicode_untouched() {
        assert_eq!(escape_xml("固有名詞 ✓"), "固有名詞 ✓");
    }

    #[test]
    fn test_empty_document_exact_skeleton() {
        let xml = Format::from(Vec::new()).to_xml();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n\
             <plist version=\"1.0\">\n\
             <array>\n\
             </array>\n\
             </plist>\n"
        );
    }

    #[test]
    fn test_single_entry_exact_layout() {
        let xml = format_with(&[("ab", "hello world")]).to_xml();
        let expected_block = "\t<dict>\n\
                              \t\t<key>phrase</key>\n\
                              \t\t<string>hello world</string>\n\
                              \t\t<key>shortcut</key>\n\
                              \t\t<string>ab</string>\n\
                              \t</dict>\n";
        assert!(xml.contains(expected_block));
        assert!(xml.ends_with("</array>\n</plist>\n"));
    }

    #[test]
    fn test_phrase_key_precedes_shortcut_key() {
        let xml = format_with(&[("ab", "hello")]).to_xml();
        let phrase_at = xml.find("<key>phrase</key>").unwrap();
        let shortcut_at = xml.find("<key>shortcut</key>").unwrap();
        assert!(phrase_at < shortcut_at);
    }

    #[test]
    fn test_entries_rendered_in_order() {
        let xml = format_with(&[("a", "first"), ("b", "second")]).to_xml();
        assert!(xml.find("first").unwrap() < xml.find("second").unwrap());
    }

    #[test]
    fn test_reserved_characters_escaped_in_output() {
        let xml = format_with(&[("xy", "<tag> & \"quote\"")]).to_xml();
        assert!(xml.contains("<string>&lt;tag&gt; &amp; &quot;quote&quot;</string>"));
        assert!(!xml.contains("<string><tag>"));
    }

    #[test]
    fn test_to_writer_matches_to_xml() {
        let format = format_with(&[("ab", "hello")]);
        let mut output = Vec::new();
        format.to_writer(&mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), format.to_xml());
    }

    #[test]
    fn test_output_is_well_formed_xml() {
        let format = format_with(&[("ab", "hello world"), ("xy", "<tag> & \"quote\"")]);
        let xml = format.to_xml();

        let mut reader = Reader::from_str(&xml);
        let mut in_string = false;
        let mut strings = Vec::new();
        loop {
            match reader.read_event().expect("output must parse as XML") {
                Event::Start(e) if e.name().as_ref() == b"string" => in_string = true,
                Event::End(e) if e.name().as_ref() == b"string" => in_string = false,
                Event::Text(t) if in_string => {
                    strings.push(t.unescape().unwrap().into_owned());
                }
                Event::Eof => break,
                _ => {}
            }
        }

        // Unescaping through a real XML parser restores the original values.
        assert_eq!(
            strings,
            vec!["hello world", "ab", "<tag> & \"quote\"", "xy"]
        );
    }
}
