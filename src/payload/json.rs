//! JSON rendering of stored payloads.

use serde_json::{Map, Value};

use super::tree::Element;

/// Member holding the text of an element that renders as an object.
pub const JSON_TEXT_MEMBER: &str = "#text";

/// Renders `element` as a JSON value.
///
/// Elements with neither attributes nor child elements become strings,
/// everything else becomes an object (see [`to_json_object`]).
pub fn to_json(element: &Element) -> Value {
    if visible_attributes(element).next().is_none() && !element.has_child_elements() {
        return Value::String(element.text());
    }
    Value::Object(to_json_object(element))
}

/// Renders `element` as a JSON object.
///
/// Attributes become string members (`xmlns*` declarations are dropped), child
/// elements become members keyed by name, repeated names collapse into an array
/// in document order. A child replaces an attribute of the same name.
pub fn to_json_object(element: &Element) -> Map<String, Value> {
    let mut object = Map::new();

    for (key, value) in visible_attributes(element) {
        object.insert(key.clone(), Value::String(value.clone()));
    }

    let text = element.text();
    if !text.trim().is_empty() {
        object.insert(JSON_TEXT_MEMBER.to_string(), Value::String(text));
    }

    let mut groups: Vec<(&str, Vec<Value>)> = Vec::new();
    for child in element.child_elements() {
        let value = to_json(child);
        match groups.iter_mut().find(|(name, _)| *name == child.name) {
            Some((_, values)) => values.push(value),
            None => groups.push((&child.name, vec![value])),
        }
    }

    for (name, mut values) in groups {
        let value = if values.len() == 1 {
            values.remove(0)
        } else {
            Value::Array(values)
        };
        object.insert(name.to_string(), value);
    }

    object
}

fn visible_attributes(element: &Element) -> impl Iterator<Item = &(String, String)> {
    element
        .attributes
        .iter()
        .filter(|(key, _)| key != "xmlns" && !key.starts_with("xmlns:"))
}
