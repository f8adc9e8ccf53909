//! XML decoding and re-encoding of stored payloads.

use std::borrow::Cow;

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use super::error::{UnmarshalError, UnmarshalReason};
use super::schema::PayloadSchema;
use super::tree::{Element, ParsedPayload, PayloadNode};

/// Decodes `raw` into a [`ParsedPayload`] conforming to `schema`.
///
/// Declarations, comments, processing instructions and DOCTYPEs are skipped.
/// Nothing is returned unless the whole input parsed and the schema matched.
pub fn decode_payload(raw: &str, schema: &PayloadSchema) -> Result<ParsedPayload, UnmarshalError> {
    let root = parse_root(raw).map_err(|reason| UnmarshalError::new(raw, reason))?;
    schema
        .check(&root)
        .map_err(|reason| UnmarshalError::new(raw, reason))?;
    Ok(ParsedPayload::new(root))
}

fn parse_root(raw: &str) -> Result<Element, UnmarshalReason> {
    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(false);
    reader.config_mut().check_end_names = true;

    let mut tree = TreeBuilder::default();

    loop {
        let event = reader.read_event().map_err(|e| {
            UnmarshalReason::Syntax(format!("{} at byte {}", e, reader.buffer_position()))
        })?;

        match event {
            Event::Start(start) => {
                let element = start_element(&start)?;
                tree.open(element)?;
            }
            Event::Empty(start) => {
                let element = start_element(&start)?;
                tree.attach(element)?;
            }
            Event::End(_) => tree.close()?,
            Event::Text(text) => {
                let text = text.unescape().map_err(syntax)?;
                tree.text(text.into_owned())?;
            }
            Event::CData(cdata) => {
                tree.cdata(String::from_utf8_lossy(&cdata).into_owned())?;
            }
            Event::Eof => break,
            // declarations, comments, PIs and doctypes carry no payload data
            _ => {}
        }
    }

    tree.finish()
}

fn start_element(start: &BytesStart<'_>) -> Result<Element, UnmarshalReason> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
    for attr in start.attributes() {
        let attr = attr.map_err(syntax)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(syntax)?;
        element.attributes.push((key, value.into_owned()));
    }
    Ok(element)
}

fn syntax(error: impl std::fmt::Display) -> UnmarshalReason {
    UnmarshalReason::Syntax(error.to_string())
}

#[derive(Default)]
struct TreeBuilder {
    open: Vec<Element>,
    root: Option<Element>,
}

impl TreeBuilder {
    fn open(&mut self, element: Element) -> Result<(), UnmarshalReason> {
        if self.open.is_empty() && self.root.is_some() {
            return Err(UnmarshalReason::MultipleRoots {
                second: element.name,
            });
        }
        self.open.push(element);
        Ok(())
    }

    fn close(&mut self) -> Result<(), UnmarshalReason> {
        let element = self
            .open
            .pop()
            .ok_or_else(|| UnmarshalReason::Syntax("unmatched end tag".to_string()))?;
        self.attach(element)
    }

    fn attach(&mut self, element: Element) -> Result<(), UnmarshalReason> {
        if let Some(parent) = self.open.last_mut() {
            parent.children.push(PayloadNode::Element(element));
            return Ok(());
        }
        if self.root.is_some() {
            return Err(UnmarshalReason::MultipleRoots {
                second: element.name,
            });
        }
        self.root = Some(element);
        Ok(())
    }

    fn text(&mut self, text: String) -> Result<(), UnmarshalReason> {
        match self.open.last_mut() {
            Some(parent) => {
                if !text.is_empty() {
                    parent.children.push(PayloadNode::Text(text));
                }
                Ok(())
            }
            // indentation or a trailing newline around the root
            None if text.trim().is_empty() => Ok(()),
            None => Err(UnmarshalReason::TextOutsideRoot),
        }
    }

    fn cdata(&mut self, text: String) -> Result<(), UnmarshalReason> {
        let parent = self
            .open
            .last_mut()
            .ok_or(UnmarshalReason::TextOutsideRoot)?;
        parent.children.push(PayloadNode::CData(text));
        Ok(())
    }

    fn finish(self) -> Result<Element, UnmarshalReason> {
        if let Some(unclosed) = self.open.last() {
            return Err(UnmarshalReason::UnclosedElement {
                name: unclosed.name.clone(),
            });
        }
        self.root.ok_or(UnmarshalReason::NoRootElement)
    }
}

/// Writes `element` as XML.
///
/// Attributes keep their stored order and are `"`-delimited; elements
/// without children are self-closing.
pub fn encode_xml(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.name);
    for (key, value) in &element.attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }

    if element.children.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in &element.children {
        match child {
            PayloadNode::Element(child) => encode_xml(child, out),
            PayloadNode::Text(text) => out.push_str(&escape_text(text)),
            PayloadNode::CData(text) => {
                out.push_str("<![CDATA[");
                out.push_str(text);
                out.push_str("]]>");
            }
        }
    }
    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
}

/// Escapes `<`, `>` and `&`, plus `\r` so parsers do not fold it into `\n`.
fn escape_text(text: &str) -> Cow<'_, str> {
    let escaped = partial_escape(text);
    if escaped.contains('\r') {
        Cow::Owned(escaped.replace('\r', "&#13;"))
    } else {
        escaped
    }
}

/// Escapes `<`, `>`, `&` and `"`, and writes tab, newline and carriage return
/// as character references so attribute value normalisation keeps them.
/// Apostrophes are left alone.
fn escape_attribute(value: &str) -> Cow<'_, str> {
    let escaped = partial_escape(value);
    if !escaped.contains(['"', '\t', '\n', '\r']) {
        return escaped;
    }

    let mut out = String::with_capacity(escaped.len() + 8);
    for ch in escaped.chars() {
        match ch {
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
