//! A small XML element tree and its writer
//!
//! The GPIF serializer builds the whole document as a tree first, so the
//! structure can be inspected (and compared) before it is turned into bytes.

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

use super::ExportError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
    /// Literal text, written as <![CDATA[...]]>
    CData(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an empty child element and return it for filling in
    pub fn append_child(&mut self, name: impl Into<String>) -> &mut XmlElement {
        self.children.push(XmlNode::Element(XmlElement::new(name)));
        match self.children.last_mut() {
            Some(XmlNode::Element(element)) => element,
            _ => unreachable!("an element was just pushed"),
        }
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl ToString) -> &mut Self {
        let name = name.into();
        let value = value.to_string();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn append_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    pub fn append_cdata(&mut self, text: impl Into<String>) -> &mut Self {
        self.children.push(XmlNode::CData(text.into()));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Child elements, skipping text
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            _ => None,
        })
    }

    /// First child element with the given name
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|element| element.name == name)
    }

    /// Concatenated text and CDATA content of this element
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                XmlNode::Text(text) | XmlNode::CData(text) => Some(text.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }

    fn write<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), quick_xml::Error> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for child in &self.children {
            match child {
                XmlNode::Element(element) => element.write(writer)?,
                XmlNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
                XmlNode::CData(text) => {
                    for section in cdata_sections(text) {
                        writer.write_event(Event::CData(BytesCData::new(section)))?;
                    }
                }
            }
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}

/// Split text so that no section contains `]]>`. The terminator is broken
/// between `]]` and `>`, which land in consecutive sections.
fn cdata_sections(text: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut rest = text;
    while let Some(index) = rest.find("]]>") {
        sections.push(&rest[..index + 2]);
        rest = &rest[index + 2..];
    }
    sections.push(rest);
    sections
}

/// A complete XML document with a single root element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    pub fn new(root: XmlElement) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Write the document with an XML declaration and two-space indentation
    pub fn write_to<W: Write>(&self, out: W) -> Result<(), ExportError> {
        let mut writer = Writer::new_with_indent(out, b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.root.write(&mut writer)?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ExportError> {
        let mut bytes = Vec::new();
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    pub fn to_xml_string(&self) -> Result<String, ExportError> {
        let bytes = self.to_bytes()?;
        // The writer only emits the UTF-8 text it was given
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
