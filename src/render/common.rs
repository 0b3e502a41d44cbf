use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::{Cursor, Write};

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Create a writer over an in-memory buffer.
#[inline]
pub fn new_writer() -> XmlWriter {
    Writer::new(Cursor::new(Vec::new()))
}

/// Consume the writer and return the written markup.
#[inline]
pub fn into_string(writer: XmlWriter) -> String {
    // Only `&str` input is ever written, so the buffer is valid UTF-8.
    String::from_utf8_lossy(&writer.into_inner().into_inner()).into_owned()
}

/// Write a text element: `<tag>text</tag>`.
#[inline]
pub fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    write_text_element_with_attrs(writer, tag, &[], text)
}

/// Write a text element with attributes: `<tag attr1="val1">text</tag>`.
pub fn write_text_element_with_attrs(
    writer: &mut XmlWriter,
    tag: &str,
    attrs: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    newline(writer)
}

/// Write an empty element with attributes: `<tag attr1="val1" ... />`.
#[inline]
pub fn write_empty_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Empty(elem))?;
    newline(writer)
}

#[inline]
fn newline(writer: &mut XmlWriter) -> Result<()> {
    writer.get_mut().write_all(b"\n")?;
    Ok(())
}
