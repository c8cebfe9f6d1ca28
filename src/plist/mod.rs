//! Typed property-list tree and XML serialization.
//!
//! Logic Pro's articulation documents are plist XML. The tree here is the
//! subset those documents use: integers, strings, booleans, arrays and
//! dictionaries. A dictionary is an insertion-ordered sequence of key/value
//! pairs rather than a map: the articulation schema repeats the
//! `OutputChannel` key once per output block, and a map type would silently
//! keep only the last entry.
//!
//! Serialization pretty-prints with two-space indentation. The fixed XML
//! declaration and plist DOCTYPE lines are emitted verbatim ahead of the
//! tree, never by the XML writer itself.

use crate::error::PlistResult;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{Cursor, Write};

/// Fixed two-line header preceding every serialized document.
pub const PLIST_HEADER: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n",
    "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\"",
    " \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
);

// =============================================================================
// Value Tree
// =============================================================================

/// A typed plist value.
#[derive(Debug, Clone, PartialEq)]
pub enum PlistValue {
    Integer(i64),
    String(String),
    Boolean(bool),
    Array(Vec<PlistValue>),
    Dict(PlistDict),
}

/// An insertion-ordered plist dictionary.
///
/// Keys are not required to be unique; entries serialize in push order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlistDict {
    entries: Vec<(String, PlistValue)>,
}

impl PlistDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key/value entry.
    pub fn push(&mut self, key: impl Into<String>, value: PlistValue) {
        self.entries.push((key.into(), value));
    }

    pub fn push_integer(&mut self, key: impl Into<String>, value: i64) {
        self.push(key, PlistValue::Integer(value));
    }

    pub fn push_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.push(key, PlistValue::String(value.into()));
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[(String, PlistValue)] {
        &self.entries
    }

    /// The first value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&PlistValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Every value stored under `key`, in order.
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a PlistValue> {
        self.entries
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Serialization
// =============================================================================

/// Serialize a top-level dictionary into a complete `.plist` file body.
///
/// The result is the verbatim header, the `<plist version="1.0">` tree
/// pretty-printed with two-space indentation, and a trailing newline.
pub fn write_document(root: &PlistDict) -> PlistResult<String> {
    let mut buffer = Vec::new();
    let mut writer = Writer::new_with_indent(Cursor::new(&mut buffer), b' ', 2);

    let mut plist = BytesStart::new("plist");
    plist.push_attribute(("version", "1.0"));
    writer.write_event(Event::Start(plist))?;
    write_dict(&mut writer, root)?;
    writer.write_event(Event::End(BytesEnd::new("plist")))?;

    let body = String::from_utf8(buffer)?;
    Ok(format!("{PLIST_HEADER}{body}\n"))
}

fn write_dict<W: Write>(writer: &mut Writer<W>, dict: &PlistDict) -> PlistResult<()> {
    if dict.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new("dict")))?;
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new("dict")))?;
    for (key, value) in dict.entries() {
        text_element(writer, "key", key)?;
        write_value(writer, value)?;
    }
    writer.write_event(Event::End(BytesEnd::new("dict")))?;
    Ok(())
}

fn write_value<W: Write>(writer: &mut Writer<W>, value: &PlistValue) -> PlistResult<()> {
    match value {
        PlistValue::Integer(value) => text_element(writer, "integer", &value.to_string()),
        PlistValue::String(value) => text_element(writer, "string", value),
        PlistValue::Boolean(true) => empty_element(writer, "true"),
        PlistValue::Boolean(false) => empty_element(writer, "false"),
        PlistValue::Array(items) if items.is_empty() => empty_element(writer, "array"),
        PlistValue::Array(items) => {
            writer.write_event(Event::Start(BytesStart::new("array")))?;
            for item in items {
                write_value(writer, item)?;
            }
            writer.write_event(Event::End(BytesEnd::new("array")))?;
            Ok(())
        }
        PlistValue::Dict(dict) => write_dict(writer, dict),
    }
}

/// Write `<tag>text</tag>` with the text content XML-escaped.
fn text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> PlistResult<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn empty_element<W: Write>(writer: &mut Writer<W>, tag: &str) -> PlistResult<()> {
    writer.write_event(Event::Empty(BytesStart::new(tag)))?;
    Ok(())
}
