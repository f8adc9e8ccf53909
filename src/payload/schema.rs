use crate::constants::DEFAULT_REQUIRED_ATTRIBUTES;

use super::error::UnmarshalReason;
use super::tree::Element;

/// Shape a stored payload must have to be replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadSchema {
    /// Name of the single root element.
    pub root_element: String,
    /// Attributes the root element must carry.
    pub required_attributes: Vec<String>,
}

impl PayloadSchema {
    /// Schema with `root_element` and the default required attributes.
    pub fn new(root_element: impl Into<String>) -> Self {
        Self {
            root_element: root_element.into(),
            required_attributes: DEFAULT_REQUIRED_ATTRIBUTES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }

    pub fn with_required_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_attributes = names.into_iter().map(Into::into).collect();
        self
    }

    /// Checks a decoded root against this schema.
    pub(crate) fn check(&self, root: &Element) -> Result<(), UnmarshalReason> {
        if root.name != self.root_element {
            return Err(UnmarshalReason::UnexpectedRoot {
                expected: self.root_element.clone(),
                found: root.name.clone(),
            });
        }

        if let Some(missing) = self
            .required_attributes
            .iter()
            .find(|attr| root.attribute(attr).is_none())
        {
            return Err(UnmarshalReason::MissingAttribute {
                name: missing.clone(),
            });
        }

        Ok(())
    }
}
