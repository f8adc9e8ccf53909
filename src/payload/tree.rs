/// An element of a stored payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Qualified name, prefix included (`ns:name`).
    pub name: String,
    /// Attributes in document order, values unescaped.
    pub attributes: Vec<(String, String)>,
    pub children: Vec<PayloadNode>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets `name` to `value`, in place if present, appended otherwise.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    /// Child elements, in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            PayloadNode::Element(element) => Some(element),
            _ => None,
        })
    }

    /// First child element called `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|element| element.name == name)
    }

    /// Concatenated text and CDATA content of the direct children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                PayloadNode::Text(text) | PayloadNode::CData(text) => Some(text.as_str()),
                PayloadNode::Element(_) => None,
            })
            .collect()
    }

    pub fn has_child_elements(&self) -> bool {
        self.child_elements().next().is_some()
    }
}

/// A node of a stored payload tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadNode {
    Element(Element),
    /// Character data, unescaped.
    Text(String),
    /// A CDATA section, kept apart so it is written back as CDATA.
    CData(String),
}

/// A stored payload that decoded cleanly and passed its schema check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPayload {
    root: Element,
}

impl ParsedPayload {
    pub(crate) fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }
}
